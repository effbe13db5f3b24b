// Tests for parameter labels, the built-in registry, and the stretch and van der Waals
// curves (closed forms, tables, and out-of-range behaviour).

use nanoforce::ConfigError;
use nanoforce::interpolation::{Bucket, LookupMode};
use nanoforce::params::ParameterTable;
use nanoforce::params::bend::{BendParameters, BendRecord};
use nanoforce::params::label::{BendLabel, StretchLabel};
use nanoforce::params::stretch::{StretchParameters, StretchRecord};
use nanoforce::params::vdw::{VdwElementRecord, VdwParameters};
use nanoforce::TableResolution;

fn assert_approx_eq(actual: f64, expected: f64, tol: f64, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff < tol,
        "{msg}: expected {expected}, got {actual} (diff={diff}, tol={tol})"
    );
}

const TABLE: LookupMode = LookupMode {
    direct: false,
    minimizing: false,
};
const MINIMIZING: LookupMode = LookupMode {
    direct: false,
    minimizing: true,
};
const DIRECT: LookupMode = LookupMode {
    direct: true,
    minimizing: false,
};

fn carbon_carbon() -> StretchParameters {
    let record = StretchRecord::new(437.82, 154.88, 0.7578, 1.6996, 196.21, "C-1-C");
    StretchParameters::build(record, &TableResolution::default()).unwrap()
}

// ============================================================================
// Labels
// ============================================================================

#[test]
fn parses_and_reverses_labels() {
    let label = StretchLabel::parse("H-1-Si").unwrap();
    assert_eq!(label.first, "H");
    assert_eq!(label.order, "1");
    assert_eq!(label.reversed().to_string(), "Si-1-H");

    let label = BendLabel::parse("C-2-C-1-H").unwrap();
    assert_eq!(label.center, "C");
    assert_eq!(label.reversed().to_string(), "H-1-C-2-C");
}

#[test]
fn rejects_malformed_labels() {
    for label in ["C-1", "C-1-C-1", "c-1-C", "C--C", "C-1-C-1-H-1"] {
        assert!(
            matches!(StretchLabel::parse(label), Err(ConfigError::MalformedLabel(_))),
            "{label} is not a stretch label"
        );
    }
    assert!(BendLabel::parse("C-1-C").is_err());
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn builtin_registry_finds_labels_in_either_order() {
    let params = ParameterTable::builtin().unwrap();
    assert_eq!(params.stretch_labels().count(), 64);

    let forward = params.stretch("H-1-C").unwrap();
    let reverse = params.stretch("C-1-H").unwrap();
    assert!(std::sync::Arc::ptr_eq(&forward, &reverse));
    assert_eq!(forward.record.r0, 108.75);

    let via_parts = params.stretch_for("Si", "1", "Si").unwrap();
    assert_eq!(via_parts.label(), "Si-1-Si");

    let bend = params.bend("H-1-C-1-C").unwrap();
    assert_eq!(bend.label, "C-1-C-1-H");
}

#[test]
fn unknown_labels_are_reported() {
    let mut params = ParameterTable::builtin().unwrap();
    assert!(matches!(
        params.stretch("Xe-1-Xe"),
        Err(ConfigError::UnknownLabel { kind: "stretch", .. })
    ));
    assert!(matches!(
        params.vdw_for("C", "Xe"),
        Err(ConfigError::UnknownLabel { .. })
    ));
}

#[test]
fn vdw_pairs_are_cached_by_unordered_pair() {
    let mut params = ParameterTable::builtin().unwrap();
    let ch = params.vdw_for("C", "H").unwrap();
    let hc = params.vdw_for("H", "C").unwrap();
    assert!(std::sync::Arc::ptr_eq(&ch, &hc));
    assert_eq!(ch.rvdw, 204.0 + 162.0);
    assert_approx_eq(ch.evdw, (0.1876f64 * 0.1390).sqrt(), 1e-15, "combined depth");
}

#[test]
fn replacing_an_element_drops_its_cached_pairs() {
    let mut params = ParameterTable::builtin().unwrap();
    let before = params.vdw_for("C", "C").unwrap();
    params
        .insert_vdw_element(VdwElementRecord::new("C", 200.0, 0.2))
        .unwrap();
    let after = params.vdw_for("C", "C").unwrap();
    assert_eq!(before.rvdw, 408.0);
    assert_eq!(after.rvdw, 400.0);
}

// ============================================================================
// Stretch curve
// ============================================================================

#[test]
fn stretch_closed_form_has_its_minimum_at_r0() {
    let cc = carbon_carbon();
    assert_eq!(cc.record.potential(154.88), -0.7578);
    assert_eq!(cc.record.gradient(154.88), 0.0);
    // Compressed bonds push apart, stretched bonds pull together.
    assert!(cc.record.gradient(150.0) < 0.0);
    assert!(cc.record.gradient(160.0) > 0.0);
}

#[test]
fn stretch_closed_form_gradient_matches_numerical_derivative() {
    let cc = carbon_carbon();
    let h = 1e-4;
    for r in [100.0, 140.0, 154.0, 156.0, 180.0, 250.0] {
        let numerical = (cc.record.potential(r + h) - cc.record.potential(r - h)) / (2.0 * h) * 1e6;
        let analytical = cc.record.gradient(r);
        assert_approx_eq(
            analytical,
            numerical,
            1e-4 * analytical.abs().max(1.0),
            &format!("gradient at {r}"),
        );
    }
}

#[test]
fn stretch_table_at_r0_sits_at_the_bottom_of_the_well() {
    let cc = carbon_carbon();
    let potential = cc.potential(154.88, TABLE);
    let gradient = cc.gradient(154.88, TABLE);
    assert!(matches!(potential.bucket, Bucket::Within(_)));
    assert_approx_eq(potential.value, -0.7578, 1e-5, "potential at r0");
    assert_approx_eq(gradient.value, 0.0, 1.0, "gradient at r0 (pN)");
}

#[test]
fn stretch_table_tracks_closed_form() {
    let cc = carbon_carbon();
    for r in [110.0, 130.0, 160.0, 200.0, 300.0] {
        assert_approx_eq(
            cc.potential(r, TABLE).value,
            cc.record.potential(r),
            1e-5,
            &format!("potential at {r}"),
        );
    }
}

#[test]
fn stretch_is_continuous_across_the_low_seam() {
    let cc = carbon_carbon();
    let start = cc.potential_table.start();
    let below = cc.potential(start - 1e-9, TABLE);
    let at = cc.potential(start, TABLE);
    assert_eq!(below.bucket, Bucket::Below);
    assert_eq!(at.bucket, Bucket::Within(0));
    assert_approx_eq(below.value, at.value, 1e-6, "potential seam");

    let below = cc.gradient(start - 1e-9, TABLE);
    let at = cc.gradient(start, TABLE);
    assert_approx_eq(below.value, at.value, 1e-3, "gradient seam");
}

#[test]
fn stretch_below_the_table_extrapolates_bucket_zero() {
    let cc = carbon_carbon();
    let r = cc.potential_table.start() - 20.0;
    assert_eq!(cc.potential(r, TABLE).value, cc.potential_table.linear(0, r));
    assert_eq!(cc.potential(r, DIRECT).value, cc.potential_table.linear(0, r));
}

#[test]
fn stretch_above_the_table_follows_the_tail_only_while_minimizing() {
    let cc = carbon_carbon();
    let r = cc.potential_table.end() + 50.0;

    assert_eq!(cc.potential(r, TABLE).value, 0.0);
    assert_eq!(cc.gradient(r, TABLE).value, 0.0);
    assert_eq!(cc.potential(r, DIRECT).value, 0.0);

    let potential = cc.potential(r, MINIMIZING);
    let gradient = cc.gradient(r, MINIMIZING);
    assert_eq!(potential.bucket, Bucket::Above);
    assert_approx_eq(potential.value, cc.tail.potential(r), 1e-12, "tail potential");
    assert_approx_eq(gradient.value, cc.tail.gradient(r), 1e-6, "tail gradient");
    assert!(potential.value > 0.0);
    assert!(gradient.value > 0.0);
}

#[test]
fn default_tail_meets_the_curve_at_the_table_end() {
    let cc = carbon_carbon();
    let end = cc.potential_table.end();
    assert_approx_eq(cc.tail.potential(end), cc.record.potential(end), 1e-9, "tail value");
    assert_approx_eq(cc.tail.gradient(end), cc.record.gradient(end), 1e-6, "tail slope");
    // Stiffens at ks beyond the end of the table.
    assert_approx_eq(
        cc.tail.gradient(end + 10.0) - cc.tail.gradient(end),
        437.82 * 10.0,
        1e-6,
        "tail stiffness",
    );
}

#[test]
fn minimizing_force_is_continuous_across_the_table_end() {
    let cc = carbon_carbon();
    let end = cc.potential_table.end();
    let inside = end - 1e-6;
    let outside = end + 1e-6;
    assert!(matches!(cc.gradient(inside, MINIMIZING).bucket, Bucket::Within(_)));
    assert_eq!(cc.gradient(outside, MINIMIZING).bucket, Bucket::Above);

    let grad_in = cc.gradient(inside, MINIMIZING).value;
    let grad_out = cc.gradient(outside, MINIMIZING).value;
    assert!(grad_in > 0.0);
    assert_approx_eq(grad_out, grad_in, 1e-2, "gradient across the table end");

    let pot_in = cc.potential(inside, MINIMIZING).value;
    let pot_out = cc.potential(outside, MINIMIZING).value;
    assert_approx_eq(pot_out, pot_in, 1e-9, "potential across the table end");
}

#[test]
fn explicit_tail_coefficients_are_used_verbatim() {
    let mut record = StretchRecord::new(437.82, 154.88, 0.7578, 1.6996, 196.21, "C-1-C");
    record.extension = Some([1.0, 0.0, 0.0, 1e-6]);
    let cc = StretchParameters::build(record, &TableResolution::default()).unwrap();
    let r = 500.0;
    assert_approx_eq(cc.potential(r, MINIMIZING).value, 1.0 + 125.0, 1e-9, "cubic tail");
    assert_approx_eq(cc.gradient(r, MINIMIZING).value, 3e-6 * r * r * 1e6, 1e-6, "cubic slope");
}

#[test]
fn stretch_direct_mode_evaluates_the_closed_form() {
    let cc = carbon_carbon();
    assert_eq!(cc.potential(154.88, DIRECT).value, -0.7578);
    assert_eq!(cc.gradient(154.88, DIRECT).value, 0.0);
}

#[test]
fn invalid_stretch_records_are_rejected() {
    let record = StretchRecord::new(-1.0, 154.88, 0.7578, 1.6996, 196.21, "C-1-C");
    assert!(matches!(
        StretchParameters::build(record, &TableResolution::default()),
        Err(ConfigError::InvalidRecord { .. })
    ));
}

// ============================================================================
// Bend parameters
// ============================================================================

#[test]
fn bend_parameters_convert_stiffness_to_yoctojoules() {
    let bend = BendParameters::build(BendRecord::new(0.75, 2.0, "C-1-C-1-C")).unwrap();
    assert_eq!(bend.kb, 0.75e6);
    assert_eq!(bend.potential(2.0), 0.0);
    assert_approx_eq(bend.potential(2.1), 0.5 * 0.75 * 0.01, 1e-12, "harmonic energy");
    assert_approx_eq(bend.torque(2.1), 0.75e5, 1e-6, "torque");
    assert!(BendParameters::build(BendRecord::new(0.75, 4.0, "C-1-C-1-C")).is_err());
}

// ============================================================================
// Van der Waals curve
// ============================================================================

fn carbon_pair() -> VdwParameters {
    let carbon = VdwElementRecord::new("C", 204.0, 0.1876);
    VdwParameters::for_pair(&carbon, &carbon, &TableResolution::default()).unwrap()
}

#[test]
fn vdw_well_sits_near_combined_radius() {
    let cc = carbon_pair();
    assert_eq!(cc.label, "C-v-C");
    assert_approx_eq(cc.exact_potential(408.0), -0.1876e-3, 1e-7, "well depth");
    assert_approx_eq(cc.potential(408.0, TABLE).value, cc.exact_potential(408.0), 1e-8, "table");
    // Repulsive inside the radius: positive force along a1 - a2.
    assert!(cc.exact_gradient(300.0) > 0.0);
    assert!(cc.exact_gradient(500.0) < 0.0);
}

#[test]
fn vdw_gradient_matches_numerical_derivative() {
    let cc = carbon_pair();
    let h = 1e-4;
    for r in [200.0, 350.0, 408.0, 450.0, 600.0] {
        let dv_dr = (cc.exact_potential(r + h) - cc.exact_potential(r - h)) / (2.0 * h);
        let expected = -dv_dr * 1e6 / r;
        let actual = cc.exact_gradient(r);
        assert_approx_eq(
            actual,
            expected,
            1e-4 * expected.abs().max(1e-6),
            &format!("gradient at {r}"),
        );
    }
}

#[test]
fn vdw_is_zero_past_the_cutoff_in_every_mode() {
    let cc = carbon_pair();
    let r = cc.cutoff() + 1.0;
    for mode in [TABLE, MINIMIZING, DIRECT] {
        assert_eq!(cc.potential(r, mode).value, 0.0);
        assert_eq!(cc.gradient(r, mode).value, 0.0);
    }
}

#[test]
fn vdw_below_the_table_clamps_to_bucket_zero() {
    let cc = carbon_pair();
    let r = cc.potential_table.start() - 30.0;
    let result = cc.potential(r, TABLE);
    assert_eq!(result.bucket, Bucket::Below);
    assert_eq!(result.value, cc.potential_table.linear(0, r));
    assert_eq!(cc.gradient(r, TABLE).value, cc.gradient_table.linear(0, r));
}
