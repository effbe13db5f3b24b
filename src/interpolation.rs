// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

// Piecewise-linear interpolation tables.
//
// A table covers [start, start + len*scale) in fixed-width buckets. Bucket k holds the
// coefficients of a linear fit, so a query at r inside bucket k evaluates t1[k] + r*t2[k].
// Queries outside the tabulated domain are resolved by a LookupPolicy: below the table the
// caller either extrapolates bucket 0's line or clamps to it; above the table the value
// either vanishes or, while minimizing, follows a caller-supplied tail function.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest number of buckets a table may hold.
pub const MAX_TABLE_LENGTH: usize = 1 << 24;

/// An immutable per-bucket linear fit of a scalar function of separation distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable", into = "RawTable")]
pub struct InterpolationTable {
    start: f64,
    scale: f64,
    t1: Vec<f64>,
    t2: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
struct RawTable {
    start: f64,
    scale: f64,
    t1: Vec<f64>,
    t2: Vec<f64>,
}

impl TryFrom<RawTable> for InterpolationTable {
    type Error = ConfigError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        InterpolationTable::new(raw.start, raw.scale, raw.t1, raw.t2)
    }
}

impl From<InterpolationTable> for RawTable {
    fn from(table: InterpolationTable) -> Self {
        RawTable {
            start: table.start,
            scale: table.scale,
            t1: table.t1,
            t2: table.t2,
        }
    }
}

/// Where a query landed relative to the tabulated domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// `r` lies below `start`.
    Below,
    /// `r` lies in bucket `k`.
    Within(usize),
    /// `r` lies at or beyond `start + len*scale`.
    Above,
}

impl InterpolationTable {
    /// Creates a table from precomputed coefficients.
    ///
    /// Fails if the coefficient arrays are empty, longer than [`MAX_TABLE_LENGTH`], or differ
    /// in length, or if `start` or `scale` is not a finite number with `scale > 0`.
    pub fn new(start: f64, scale: f64, t1: Vec<f64>, t2: Vec<f64>) -> Result<Self, ConfigError> {
        if !start.is_finite() || !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::InvalidTable(format!(
                "start {start} and scale {scale} must be finite with a positive scale"
            )));
        }
        if t1.is_empty() {
            return Err(ConfigError::InvalidTable("table has no buckets".to_string()));
        }
        if t1.len() > MAX_TABLE_LENGTH {
            return Err(ConfigError::InvalidTable(format!(
                "{} buckets exceeds the limit of {MAX_TABLE_LENGTH}",
                t1.len()
            )));
        }
        if t1.len() != t2.len() {
            return Err(ConfigError::InvalidTable(format!(
                "t1 has {} buckets but t2 has {}",
                t1.len(),
                t2.len()
            )));
        }
        Ok(Self { start, scale, t1, t2 })
    }

    /// Fits `f` over `[start, end)` with `len` buckets.
    ///
    /// Each bucket's line passes through `f` at both of its endpoints, so neighbouring
    /// buckets agree exactly (up to rounding) on their shared boundary.
    pub fn fit<F: Fn(f64) -> f64>(start: f64, end: f64, len: usize, f: F) -> Result<Self, ConfigError> {
        if len == 0 || !(end > start) {
            return Err(ConfigError::InvalidTable(format!(
                "cannot fit {len} buckets over [{start}, {end})"
            )));
        }
        if len > MAX_TABLE_LENGTH {
            return Err(ConfigError::InvalidTable(format!(
                "{len} buckets exceeds the limit of {MAX_TABLE_LENGTH}"
            )));
        }
        let scale = (end - start) / len as f64;
        let mut t1 = Vec::with_capacity(len);
        let mut t2 = Vec::with_capacity(len);

        let mut r_lo = start;
        let mut f_lo = f(r_lo);
        for k in 0..len {
            let r_hi = start + (k + 1) as f64 * scale;
            let f_hi = f(r_hi);
            let slope = (f_hi - f_lo) / (r_hi - r_lo);
            t1.push(f_lo - r_lo * slope);
            t2.push(slope);
            r_lo = r_hi;
            f_lo = f_hi;
        }

        Self::new(start, scale, t1, t2)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    /// Bucket width.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.t1.len()
    }

    /// Always false; a table holds at least one bucket.
    pub fn is_empty(&self) -> bool {
        self.t1.is_empty()
    }

    /// First distance past the tabulated domain.
    pub fn end(&self) -> f64 {
        self.start + self.scale * self.len() as f64
    }

    /// Locates the bucket `floor((r - start) / scale)`.
    #[inline]
    pub fn bucket(&self, r: f64) -> Bucket {
        let k = ((r - self.start) / self.scale).floor();
        if k < 0.0 {
            Bucket::Below
        } else if k >= self.len() as f64 {
            Bucket::Above
        } else {
            Bucket::Within(k as usize)
        }
    }

    /// Evaluates bucket `k`'s linear fit at `r`, whether or not `r` lies inside bucket `k`.
    #[inline]
    pub fn linear(&self, k: usize, r: f64) -> f64 {
        self.t1[k] + r * self.t2[k]
    }
}

/// Behaviour for queries below the tabulated domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BelowRange {
    /// Extend bucket 0's line to `r`.
    Extrapolate,
    /// Use bucket 0 as the bucket for `r`.
    ///
    /// Numerically the same formula as `Extrapolate`; kept distinct because the two
    /// interaction kinds document different intent for it.
    Clamp,
}

/// Describes how one interaction kind resolves a table query.
///
/// `exact` is the closed form the table approximates, used instead of the table in direct
/// evaluation mode. `tail`, when present, continues the curve past the end of the table
/// while minimizing; without a tail (or outside minimization) queries past the table
/// evaluate to zero.
pub struct LookupPolicy<Exact, Tail> {
    pub below: BelowRange,
    pub exact: Exact,
    pub tail: Option<Tail>,
}

impl<Exact: Fn(f64) -> f64, Tail: Fn(f64) -> f64> LookupPolicy<Exact, Tail> {
    pub fn extrapolating(exact: Exact, tail: Tail) -> Self {
        Self {
            below: BelowRange::Extrapolate,
            exact,
            tail: Some(tail),
        }
    }
}

impl<Exact: Fn(f64) -> f64> LookupPolicy<Exact, fn(f64) -> f64> {
    pub fn clamped(exact: Exact) -> Self {
        Self {
            below: BelowRange::Clamp,
            exact,
            tail: None,
        }
    }
}

/// Pass-wide switches that affect every lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupMode {
    /// Bypass the table for in-range queries and evaluate the closed form.
    pub direct: bool,
    /// The caller is minimizing; enables the high-range tail.
    pub minimizing: bool,
}

/// Result of one lookup: the value and where the query fell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lookup {
    pub value: f64,
    pub bucket: Bucket,
}

/// Evaluates `table` at `r` under `policy`.
pub fn lookup<Exact, Tail>(
    table: &InterpolationTable,
    policy: &LookupPolicy<Exact, Tail>,
    mode: LookupMode,
    r: f64,
) -> Lookup
where
    Exact: Fn(f64) -> f64,
    Tail: Fn(f64) -> f64,
{
    let bucket = table.bucket(r);
    let value = match bucket {
        Bucket::Below => match policy.below {
            BelowRange::Extrapolate | BelowRange::Clamp => table.linear(0, r),
        },
        Bucket::Above => match &policy.tail {
            Some(tail) if mode.minimizing => tail(r),
            _ => 0.0,
        },
        Bucket::Within(_) if mode.direct => (policy.exact)(r),
        Bucket::Within(k) => table.linear(k, r),
    };
    Lookup { value, bucket }
}
