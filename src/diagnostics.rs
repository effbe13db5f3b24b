// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

// Advisory output for table queries outside the tabulated domain. Nothing here changes a
// returned value.

use crate::config::EvaluationFlags;
use crate::geometry::EvaluationContext;
use crate::interpolation::{Bucket, InterpolationTable};
use std::fmt::Display;

pub(crate) const TARGET: &str = "nanoforce::table_bounds";

/// Which off-table conditions an interaction kind reports.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reported {
    BelowAndAbove,
    BelowOnly,
}

/// Logs and counts a query that landed outside `table`, if this pass reports them.
pub(crate) fn check_table_bounds(
    ctx: &mut EvaluationContext,
    flags: &EvaluationFlags,
    reported: Reported,
    interaction: &dyn Display,
    table: &InterpolationTable,
    bucket: Bucket,
    r: f64,
) {
    if !flags.reports_table_bounds() {
        return;
    }
    let side = match (bucket, reported) {
        (Bucket::Below, _) => "below",
        (Bucket::Above, Reported::BelowAndAbove) => "above",
        _ => return,
    };
    log::warn!(
        target: TARGET,
        "{interaction}: r = {r:.4} pm is {side} the table [{:.4}, {:.4}) pm",
        table.start(),
        table.end()
    );
    ctx.note_off_table_report();
}
