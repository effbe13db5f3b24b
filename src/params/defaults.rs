// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

// Built-in parameter data.
//
// Stretch columns: ks (N/m), r0 (pm), de (aJ), beta (1/Å), inflection_r (pm), label.
// Bend columns: kb (aJ/rad²), theta0 (rad), label.
// Van der Waals columns (MM3 radii and well depths): element, rvdw (pm), evdw (zJ).

use super::bend::BendRecord;
use super::stretch::StretchRecord;
use super::vdw::VdwElementRecord;

#[rustfmt::skip]
static STRETCH_DATA: &[(f64, f64, f64, f64, f64, &str)] = &[
    //  ks      r0       de      beta   inflection_r  label
    (274.70, 204.54, 0.3145, 2.0898, 238.29, "Cl-1-Cl"),
    (502.46, 128.72, 0.7163, 1.8728, 166.19, "H-1-Cl"),
    (437.46, 166.96, 0.3873, 2.3765, 196.63, "F-1-Cl"),
    (352.51, 179.61, 0.6352, 1.6658, 221.84, "C-1-Cl"),
    (344.38, 175.79, 0.3575, 2.1947, 207.91, "N-1-Cl"),
    (365.06, 172.26, 0.4910, 1.9281, 208.78, "O-1-Cl"),
    (376.69, 174.90, 0.8529, 1.4860, 222.16, "B-1-Cl"),
    (247.76, 209.45, 0.3779, 1.8106, 248.38, "S-1-Cl"),
    (249.95, 207.09, 0.4061, 1.7543, 247.26, "P-1-Cl"),
    (599.55, 74.32, 0.7763, 1.9651, 109.65, "H-1-H"),
    (930.16, 92.82, 0.9595, 2.2016, 124.61, "H-1-F"),
    (540.39, 108.75, 0.8397, 1.7938, 147.73, "H-1-C"),
    (716.72, 101.63, 0.7920, 2.1271, 134.56, "H-1-N"),
    (838.19, 96.53, 0.8485, 2.2224, 128.05, "H-1-O"),
    (385.25, 119.38, 0.7747, 1.5768, 163.69, "H-1-B"),
    (415.75, 134.93, 0.6438, 1.7969, 173.98, "H-1-S"),
    (363.28, 140.33, 0.5327, 1.8466, 178.36, "H-1-P"),
    (599.55, 141.11, 0.2414, 3.5239, 161.15, "F-1-F"),
    (573.94, 141.83, 0.8204, 1.8703, 179.39, "C-1-F"),
    (524.14, 141.38, 0.4805, 2.3354, 171.53, "N-1-F"),
    (524.82, 142.84, 0.3222, 2.8538, 167.55, "O-1-F"),
    (674.89, 132.98, 1.1693, 1.6988, 174.24, "B-1-F"),
    (414.90, 167.26, 0.5560, 1.9316, 203.71, "F-1-S"),
    (464.48, 162.98, 0.6214, 1.9332, 199.39, "F-1-P"),
    (1730.61, 120.85, 1.8689, 2.1517, 153.49, "C-3-C"),
    (437.82, 154.88, 0.7578, 1.6996, 196.21, "C-1-C"),
    (497.22, 150.36, 0.6519, 1.9528, 186.38, "C-1-N"),
    (538.53, 145.70, 0.6953, 1.9679, 181.43, "C-1-O"),
    (374.86, 157.09, 0.7836, 1.5466, 202.46, "B-1-C"),
    (310.12, 184.44, 0.5671, 1.6536, 226.99, "C-1-S"),
    (299.57, 185.14, 0.4918, 1.7452, 225.48, "C-1-P"),
    (506.79, 146.08, 0.4548, 2.3604, 175.92, "N-1-N"),
    (533.13, 142.46, 0.4571, 2.4149, 171.63, "N-1-O"),
    (592.16, 142.82, 0.9424, 1.7725, 182.43, "B-1-N"),
    (342.60, 177.15, 0.4387, 1.9760, 212.80, "N-1-S"),
    (352.72, 176.07, 0.3841, 2.1428, 208.96, "N-1-P"),
    (495.90, 144.27, 0.3277, 2.7507, 169.91, "O-1-O"),
    (596.39, 138.82, 0.9424, 1.7788, 178.28, "B-1-O"),
    (349.25, 173.32, 0.4774, 1.9125, 210.14, "O-1-S"),
    (439.50, 166.98, 0.5014, 2.0935, 200.63, "O-1-P"),
    (255.71, 175.79, 0.6481, 1.4046, 225.76, "B-1-B"),
    (280.54, 187.15, 0.6401, 1.4803, 234.63, "B-1-S"),
    (321.32, 184.05, 0.6418, 1.5822, 228.50, "B-1-P"),
    (215.90, 215.96, 0.3505, 1.7550, 256.12, "S-1-S"),
    (242.40, 212.21, 0.3651, 1.8220, 250.90, "P-1-S"),
    (207.05, 220.03, 0.2030, 2.2583, 251.29, "P-1-P"),
    (275.90, 208.24, 0.7021, 1.4017, 258.41, "Si-1-Cl"),
    (290.41, 148.73, 0.6601, 1.4832, 195.97, "H-1-Si"),
    (507.97, 163.32, 0.9925, 1.5997, 207.23, "F-1-Si"),
    (165.22, 236.09, 0.5095, 1.2733, 291.33, "Si-1-Si"),
    (272.66, 188.80, 0.6522, 1.4458, 237.40, "C-1-Si"),
    (359.22, 178.06, 0.6579, 1.6523, 220.63, "N-1-Si"),
    (434.29, 169.51, 0.7898, 1.6581, 211.91, "O-1-Si"),
    (204.42, 203.40, 0.5867, 1.3199, 256.63, "B-1-Si"),
    (231.15, 217.30, 0.5644, 1.4310, 266.47, "Si-1-S"),
    (201.44, 225.26, 0.4227, 1.5436, 270.89, "Si-1-P"),
    (2004.91, 115.80, 1.6892, 2.4361, 144.66, "C-3-N"),
    (1257.24, 121.59, 0.2724, 4.8039, 136.30, "O-2-O"),
    (1359.14, 121.18, 1.2578, 2.3244, 151.43, "C-2-O"),
    (988.51, 133.44, 1.2708, 1.9721, 169.06, "C-2-C"),
    (2477.70, 110.54, 1.5347, 2.8412, 135.32, "N-3-N"),
    (1278.37, 123.15, 0.8346, 2.7674, 148.60, "N-2-N"),
    (1320.74, 120.56, 0.7920, 2.8876, 144.96, "N-2-O"),
    (1167.02, 127.01, 1.1232, 2.2793, 157.87, "C-2-N"),
];

const TETRAHEDRAL: f64 = 1.910_633_236_249_019;
const TRIGONAL: f64 = 2.094_395_102_393_195_5;

#[rustfmt::skip]
static BEND_DATA: &[(f64, f64, &str)] = &[
    //  kb      theta0       label
    (0.7641, TETRAHEDRAL, "C-1-C-1-C"),
    (0.5994, TETRAHEDRAL, "C-1-C-1-H"),
    (0.5209, 1.8908,      "H-1-C-1-H"),
    (0.7641, TETRAHEDRAL, "C-1-C-1-N"),
    (0.7641, TETRAHEDRAL, "C-1-C-1-O"),
    (0.5994, TETRAHEDRAL, "H-1-C-1-N"),
    (0.5994, TETRAHEDRAL, "H-1-C-1-O"),
    (0.5209, 1.8675,      "C-1-N-1-C"),
    (0.4445, 1.8850,      "C-1-N-1-H"),
    (0.4445, 1.8465,      "H-1-N-1-H"),
    (0.7724, 1.8990,      "C-1-O-1-C"),
    (0.5249, 1.8937,      "C-1-O-1-H"),
    (0.4610, 1.8238,      "H-1-O-1-H"),
    (0.4400, TETRAHEDRAL, "Si-1-Si-1-Si"),
    (0.3200, TETRAHEDRAL, "H-1-Si-1-Si"),
    (0.4100, TETRAHEDRAL, "C-1-Si-1-C"),
    (0.5500, TRIGONAL,    "C-2-C-1-C"),
    (0.3600, TRIGONAL,    "C-2-C-1-H"),
];

#[rustfmt::skip]
static VDW_DATA: &[(&str, f64, f64)] = &[
    // element  rvdw   evdw
    ("H",  162.0, 0.1390),
    ("B",  215.0, 0.0973),
    ("C",  204.0, 0.1876),
    ("N",  193.0, 0.2988),
    ("O",  182.0, 0.4099),
    ("F",  171.0, 0.5211),
    ("Si", 229.0, 0.9727),
    ("P",  222.0, 1.1672),
    ("S",  215.0, 1.4034),
    ("Cl", 207.0, 1.6674),
];

pub fn stretch_records() -> impl Iterator<Item = StretchRecord> {
    STRETCH_DATA
        .iter()
        .map(|&(ks, r0, de, beta, inflection_r, label)| {
            StretchRecord::new(ks, r0, de, beta, inflection_r, label)
        })
}

pub fn bend_records() -> impl Iterator<Item = BendRecord> {
    BEND_DATA
        .iter()
        .map(|&(kb, theta0, label)| BendRecord::new(kb, theta0, label))
}

pub fn vdw_records() -> impl Iterator<Item = VdwElementRecord> {
    VDW_DATA
        .iter()
        .map(|&(element, rvdw, evdw)| VdwElementRecord::new(element, rvdw, evdw))
}
