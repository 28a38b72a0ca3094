//! Constant tables for the periodic-term series.
//!
//! The Earth heliocentric tables are the reduced VSOP87 set (longitude `L0..L5`,
//! latitude `B0..B1`, radius vector `R0..R4`). Each row is `A·cos(B + C·τ)` with
//! `τ` in Julian ephemeris millennia and the amplitude scaled by 10⁸.
//!
//! The nutation tables hold the 63 terms of the IAU 1980 theory: argument
//! multipliers for the five lunisolar arguments (`Y_TERMS`) and the longitude and
//! obliquity coefficients in units of 0.0001″ (`PE_TERMS`).

use crate::periodic::PeriodicTerm;

const EARTH_L0: [PeriodicTerm; 64] = [
    PeriodicTerm::new(175347046.0, 0.0, 0.0),
    PeriodicTerm::new(3341656.0, 4.6692568, 6283.07585),
    PeriodicTerm::new(34894.0, 4.6261, 12566.1517),
    PeriodicTerm::new(3497.0, 2.7441, 5753.3849),
    PeriodicTerm::new(3418.0, 2.8289, 3.5231),
    PeriodicTerm::new(3136.0, 3.6277, 77713.7715),
    PeriodicTerm::new(2676.0, 4.4181, 7860.4194),
    PeriodicTerm::new(2343.0, 6.1352, 3930.2097),
    PeriodicTerm::new(1324.0, 0.7425, 11506.7698),
    PeriodicTerm::new(1273.0, 2.0371, 529.691),
    PeriodicTerm::new(1199.0, 1.1096, 1577.3435),
    PeriodicTerm::new(990.0, 5.233, 5884.927),
    PeriodicTerm::new(902.0, 2.045, 26.298),
    PeriodicTerm::new(857.0, 3.508, 398.149),
    PeriodicTerm::new(780.0, 1.179, 5223.694),
    PeriodicTerm::new(753.0, 2.533, 5507.553),
    PeriodicTerm::new(505.0, 4.583, 18849.228),
    PeriodicTerm::new(492.0, 4.205, 775.523),
    PeriodicTerm::new(357.0, 2.92, 0.067),
    PeriodicTerm::new(317.0, 5.849, 11790.629),
    PeriodicTerm::new(284.0, 1.899, 796.298),
    PeriodicTerm::new(271.0, 0.315, 10977.079),
    PeriodicTerm::new(243.0, 0.345, 5486.778),
    PeriodicTerm::new(206.0, 4.806, 2544.314),
    PeriodicTerm::new(205.0, 1.869, 5573.143),
    PeriodicTerm::new(202.0, 2.458, 6069.777),
    PeriodicTerm::new(156.0, 0.833, 213.299),
    PeriodicTerm::new(132.0, 3.411, 2942.463),
    PeriodicTerm::new(126.0, 1.083, 20.775),
    PeriodicTerm::new(115.0, 0.645, 0.98),
    PeriodicTerm::new(103.0, 0.636, 4694.003),
    PeriodicTerm::new(102.0, 0.976, 15720.839),
    PeriodicTerm::new(102.0, 4.267, 7.114),
    PeriodicTerm::new(99.0, 6.21, 2146.17),
    PeriodicTerm::new(98.0, 0.68, 155.42),
    PeriodicTerm::new(86.0, 5.98, 161000.69),
    PeriodicTerm::new(85.0, 1.3, 6275.96),
    PeriodicTerm::new(85.0, 3.67, 71430.7),
    PeriodicTerm::new(80.0, 1.81, 17260.15),
    PeriodicTerm::new(79.0, 3.04, 12036.46),
    PeriodicTerm::new(75.0, 1.76, 5088.63),
    PeriodicTerm::new(74.0, 3.5, 3154.69),
    PeriodicTerm::new(74.0, 4.68, 801.82),
    PeriodicTerm::new(70.0, 0.83, 9437.76),
    PeriodicTerm::new(62.0, 3.98, 8827.39),
    PeriodicTerm::new(61.0, 1.82, 7084.9),
    PeriodicTerm::new(57.0, 2.78, 6286.6),
    PeriodicTerm::new(56.0, 4.39, 14143.5),
    PeriodicTerm::new(56.0, 3.47, 6279.55),
    PeriodicTerm::new(52.0, 0.19, 12139.55),
    PeriodicTerm::new(52.0, 1.33, 1748.02),
    PeriodicTerm::new(51.0, 0.28, 5856.48),
    PeriodicTerm::new(49.0, 0.49, 1194.45),
    PeriodicTerm::new(41.0, 5.37, 8429.24),
    PeriodicTerm::new(41.0, 2.4, 19651.05),
    PeriodicTerm::new(39.0, 6.17, 10447.39),
    PeriodicTerm::new(37.0, 6.04, 10213.29),
    PeriodicTerm::new(37.0, 2.57, 1059.38),
    PeriodicTerm::new(36.0, 1.71, 2352.87),
    PeriodicTerm::new(36.0, 1.78, 6812.77),
    PeriodicTerm::new(33.0, 0.59, 17789.85),
    PeriodicTerm::new(30.0, 0.44, 83996.85),
    PeriodicTerm::new(30.0, 2.74, 1349.87),
    PeriodicTerm::new(25.0, 3.16, 4690.48),
];

const EARTH_L1: [PeriodicTerm; 34] = [
    PeriodicTerm::new(628331966747.0, 0.0, 0.0),
    PeriodicTerm::new(206059.0, 2.678235, 6283.07585),
    PeriodicTerm::new(4303.0, 2.6351, 12566.1517),
    PeriodicTerm::new(425.0, 1.59, 3.523),
    PeriodicTerm::new(119.0, 5.796, 26.298),
    PeriodicTerm::new(109.0, 2.966, 1577.344),
    PeriodicTerm::new(93.0, 2.59, 18849.23),
    PeriodicTerm::new(72.0, 1.14, 529.69),
    PeriodicTerm::new(68.0, 1.87, 398.15),
    PeriodicTerm::new(67.0, 4.41, 5507.55),
    PeriodicTerm::new(59.0, 2.89, 5223.69),
    PeriodicTerm::new(56.0, 2.17, 155.42),
    PeriodicTerm::new(45.0, 0.4, 796.3),
    PeriodicTerm::new(36.0, 0.47, 775.52),
    PeriodicTerm::new(29.0, 2.65, 7.11),
    PeriodicTerm::new(21.0, 5.34, 0.98),
    PeriodicTerm::new(19.0, 1.85, 5486.78),
    PeriodicTerm::new(19.0, 4.97, 213.3),
    PeriodicTerm::new(17.0, 2.99, 6275.96),
    PeriodicTerm::new(16.0, 0.03, 2544.31),
    PeriodicTerm::new(16.0, 1.43, 2146.17),
    PeriodicTerm::new(15.0, 1.21, 10977.08),
    PeriodicTerm::new(12.0, 2.83, 1748.02),
    PeriodicTerm::new(12.0, 3.26, 5088.63),
    PeriodicTerm::new(12.0, 5.27, 1194.45),
    PeriodicTerm::new(12.0, 2.08, 4694.0),
    PeriodicTerm::new(11.0, 0.77, 553.57),
    PeriodicTerm::new(10.0, 1.3, 6286.6),
    PeriodicTerm::new(10.0, 4.24, 1349.87),
    PeriodicTerm::new(9.0, 2.7, 242.73),
    PeriodicTerm::new(9.0, 5.64, 951.72),
    PeriodicTerm::new(8.0, 5.3, 2352.87),
    PeriodicTerm::new(6.0, 2.65, 9437.76),
    PeriodicTerm::new(6.0, 4.67, 4690.48),
];

const EARTH_L2: [PeriodicTerm; 20] = [
    PeriodicTerm::new(52919.0, 0.0, 0.0),
    PeriodicTerm::new(8720.0, 1.0721, 6283.0758),
    PeriodicTerm::new(309.0, 0.867, 12566.152),
    PeriodicTerm::new(27.0, 0.05, 3.52),
    PeriodicTerm::new(16.0, 5.19, 26.3),
    PeriodicTerm::new(16.0, 3.68, 155.42),
    PeriodicTerm::new(10.0, 0.76, 18849.23),
    PeriodicTerm::new(9.0, 2.06, 77713.77),
    PeriodicTerm::new(7.0, 0.83, 775.52),
    PeriodicTerm::new(5.0, 4.66, 1577.34),
    PeriodicTerm::new(4.0, 1.03, 7.11),
    PeriodicTerm::new(4.0, 3.44, 5573.14),
    PeriodicTerm::new(3.0, 5.14, 796.3),
    PeriodicTerm::new(3.0, 6.05, 5507.55),
    PeriodicTerm::new(3.0, 1.19, 242.73),
    PeriodicTerm::new(3.0, 6.12, 529.69),
    PeriodicTerm::new(3.0, 0.31, 398.15),
    PeriodicTerm::new(3.0, 2.28, 553.57),
    PeriodicTerm::new(2.0, 4.38, 5223.69),
    PeriodicTerm::new(2.0, 3.75, 0.98),
];

const EARTH_L3: [PeriodicTerm; 7] = [
    PeriodicTerm::new(289.0, 5.844, 6283.076),
    PeriodicTerm::new(35.0, 0.0, 0.0),
    PeriodicTerm::new(17.0, 5.49, 12566.15),
    PeriodicTerm::new(3.0, 5.2, 155.42),
    PeriodicTerm::new(1.0, 4.72, 3.52),
    PeriodicTerm::new(1.0, 5.3, 18849.23),
    PeriodicTerm::new(1.0, 5.97, 242.73),
];

const EARTH_L4: [PeriodicTerm; 3] = [
    PeriodicTerm::new(114.0, 3.142, 0.0),
    PeriodicTerm::new(8.0, 4.13, 6283.08),
    PeriodicTerm::new(1.0, 3.84, 12566.15),
];

const EARTH_L5: [PeriodicTerm; 1] = [
    PeriodicTerm::new(1.0, 3.14, 0.0),
];

const EARTH_B0: [PeriodicTerm; 5] = [
    PeriodicTerm::new(280.0, 3.199, 84334.662),
    PeriodicTerm::new(102.0, 5.422, 5507.553),
    PeriodicTerm::new(80.0, 3.88, 5223.69),
    PeriodicTerm::new(44.0, 3.7, 2352.87),
    PeriodicTerm::new(32.0, 4.0, 1577.34),
];

const EARTH_B1: [PeriodicTerm; 2] = [
    PeriodicTerm::new(9.0, 3.9, 5507.55),
    PeriodicTerm::new(6.0, 1.73, 5223.69),
];

const EARTH_R0: [PeriodicTerm; 40] = [
    PeriodicTerm::new(100013989.0, 0.0, 0.0),
    PeriodicTerm::new(1670700.0, 3.0984635, 6283.07585),
    PeriodicTerm::new(13956.0, 3.05525, 12566.1517),
    PeriodicTerm::new(3084.0, 5.1985, 77713.7715),
    PeriodicTerm::new(1628.0, 1.1739, 5753.3849),
    PeriodicTerm::new(1576.0, 2.8469, 7860.4194),
    PeriodicTerm::new(925.0, 5.453, 11506.77),
    PeriodicTerm::new(542.0, 4.564, 3930.21),
    PeriodicTerm::new(472.0, 3.661, 5884.927),
    PeriodicTerm::new(346.0, 0.964, 5507.553),
    PeriodicTerm::new(329.0, 5.9, 5223.694),
    PeriodicTerm::new(307.0, 0.299, 5573.143),
    PeriodicTerm::new(243.0, 4.273, 11790.629),
    PeriodicTerm::new(212.0, 5.847, 1577.344),
    PeriodicTerm::new(186.0, 5.022, 10977.079),
    PeriodicTerm::new(175.0, 3.012, 18849.228),
    PeriodicTerm::new(110.0, 5.055, 5486.778),
    PeriodicTerm::new(98.0, 0.89, 6069.78),
    PeriodicTerm::new(86.0, 5.69, 15720.84),
    PeriodicTerm::new(86.0, 1.27, 161000.69),
    PeriodicTerm::new(65.0, 0.27, 17260.15),
    PeriodicTerm::new(63.0, 0.92, 529.69),
    PeriodicTerm::new(57.0, 2.01, 83996.85),
    PeriodicTerm::new(56.0, 5.24, 71430.7),
    PeriodicTerm::new(49.0, 3.25, 2544.31),
    PeriodicTerm::new(47.0, 2.58, 775.52),
    PeriodicTerm::new(45.0, 5.54, 9437.76),
    PeriodicTerm::new(43.0, 6.01, 6275.96),
    PeriodicTerm::new(39.0, 5.36, 4694.0),
    PeriodicTerm::new(38.0, 2.39, 8827.39),
    PeriodicTerm::new(37.0, 0.83, 19651.05),
    PeriodicTerm::new(37.0, 4.9, 12139.55),
    PeriodicTerm::new(36.0, 1.67, 12036.46),
    PeriodicTerm::new(35.0, 1.84, 2942.46),
    PeriodicTerm::new(33.0, 0.24, 7084.9),
    PeriodicTerm::new(32.0, 0.18, 5088.63),
    PeriodicTerm::new(32.0, 1.78, 398.15),
    PeriodicTerm::new(28.0, 1.21, 6286.6),
    PeriodicTerm::new(28.0, 1.9, 6279.55),
    PeriodicTerm::new(26.0, 4.59, 10447.39),
];

const EARTH_R1: [PeriodicTerm; 10] = [
    PeriodicTerm::new(103019.0, 1.10749, 6283.07585),
    PeriodicTerm::new(1721.0, 1.0644, 12566.1517),
    PeriodicTerm::new(702.0, 3.142, 0.0),
    PeriodicTerm::new(32.0, 1.02, 18849.23),
    PeriodicTerm::new(31.0, 2.84, 5507.55),
    PeriodicTerm::new(25.0, 1.32, 5223.69),
    PeriodicTerm::new(18.0, 1.42, 1577.34),
    PeriodicTerm::new(10.0, 5.91, 10977.08),
    PeriodicTerm::new(9.0, 1.42, 6275.96),
    PeriodicTerm::new(9.0, 0.27, 5486.78),
];

const EARTH_R2: [PeriodicTerm; 6] = [
    PeriodicTerm::new(4359.0, 5.7846, 6283.0758),
    PeriodicTerm::new(124.0, 5.579, 12566.152),
    PeriodicTerm::new(12.0, 3.14, 0.0),
    PeriodicTerm::new(9.0, 3.63, 77713.77),
    PeriodicTerm::new(6.0, 1.87, 5573.14),
    PeriodicTerm::new(3.0, 5.47, 18849.23),
];

const EARTH_R3: [PeriodicTerm; 2] = [
    PeriodicTerm::new(145.0, 4.273, 6283.076),
    PeriodicTerm::new(7.0, 3.92, 12566.15),
];

const EARTH_R4: [PeriodicTerm; 1] = [
    PeriodicTerm::new(4.0, 2.56, 6283.08),
];

/// Earth heliocentric longitude series, ordered by power of τ.
pub(crate) const L_TERMS: [&[PeriodicTerm]; 6] = [&EARTH_L0, &EARTH_L1, &EARTH_L2, &EARTH_L3, &EARTH_L4, &EARTH_L5];

/// Earth heliocentric latitude series, ordered by power of τ.
pub(crate) const B_TERMS: [&[PeriodicTerm]; 2] = [&EARTH_B0, &EARTH_B1];

/// Earth heliocentric radius vector series, ordered by power of τ.
pub(crate) const R_TERMS: [&[PeriodicTerm]; 5] = [&EARTH_R0, &EARTH_R1, &EARTH_R2, &EARTH_R3, &EARTH_R4];

/// Multipliers of (D, M, M′, F, Ω) for each nutation term.
#[rustfmt::skip]
pub(crate) const Y_TERMS: [[i8; 5]; 63] = [
    [0, 0, 0, 0, 1],
    [-2, 0, 0, 2, 2],
    [0, 0, 0, 2, 2],
    [0, 0, 0, 0, 2],
    [0, 1, 0, 0, 0],
    [0, 0, 1, 0, 0],
    [-2, 1, 0, 2, 2],
    [0, 0, 0, 2, 1],
    [0, 0, 1, 2, 2],
    [-2, -1, 0, 2, 2],
    [-2, 0, 1, 0, 0],
    [-2, 0, 0, 2, 1],
    [0, 0, -1, 2, 2],
    [2, 0, 0, 0, 0],
    [0, 0, 1, 0, 1],
    [2, 0, -1, 2, 2],
    [0, 0, -1, 0, 1],
    [0, 0, 1, 2, 1],
    [-2, 0, 2, 0, 0],
    [0, 0, -2, 2, 1],
    [2, 0, 0, 2, 2],
    [0, 0, 2, 2, 2],
    [0, 0, 2, 0, 0],
    [-2, 0, 1, 2, 2],
    [0, 0, 0, 2, 0],
    [-2, 0, 0, 2, 0],
    [0, 0, -1, 2, 1],
    [0, 2, 0, 0, 0],
    [2, 0, -1, 0, 1],
    [-2, 2, 0, 2, 2],
    [0, 1, 0, 0, 1],
    [-2, 0, 1, 0, 1],
    [0, -1, 0, 0, 1],
    [0, 0, 2, -2, 0],
    [2, 0, -1, 2, 1],
    [2, 0, 1, 2, 2],
    [0, 1, 0, 2, 2],
    [-2, 1, 1, 0, 0],
    [0, -1, 0, 2, 2],
    [2, 0, 0, 2, 1],
    [2, 0, 1, 0, 0],
    [-2, 0, 2, 2, 2],
    [-2, 0, 1, 2, 1],
    [2, 0, -2, 0, 1],
    [2, 0, 0, 0, 1],
    [0, -1, 1, 0, 0],
    [-2, -1, 0, 2, 1],
    [-2, 0, 0, 0, 1],
    [0, 0, 2, 2, 1],
    [-2, 0, 2, 0, 1],
    [-2, 1, 0, 2, 1],
    [0, 0, 1, -2, 0],
    [-1, 0, 1, 0, 0],
    [-2, 1, 0, 0, 0],
    [1, 0, 0, 0, 0],
    [0, 0, 1, 2, 0],
    [0, 0, -2, 2, 2],
    [-1, -1, 1, 0, 0],
    [0, 1, 1, 0, 0],
    [0, -1, 1, 2, 2],
    [2, -1, -1, 2, 2],
    [0, 0, 3, 2, 2],
    [2, -1, 0, 2, 2],
];

/// `[a, b, c, d]` per term: Δψ = (a + b·T)·sin(arg), Δε = (c + d·T)·cos(arg).
#[rustfmt::skip]
pub(crate) const PE_TERMS: [[f64; 4]; 63] = [
    [-171996.0, -174.2, 92025.0, 8.9],
    [-13187.0, -1.6, 5736.0, -3.1],
    [-2274.0, -0.2, 977.0, -0.5],
    [2062.0, 0.2, -895.0, 0.5],
    [1426.0, -3.4, 54.0, -0.1],
    [712.0, 0.1, -7.0, 0.0],
    [-517.0, 1.2, 224.0, -0.6],
    [-386.0, -0.4, 200.0, 0.0],
    [-301.0, 0.0, 129.0, -0.1],
    [217.0, -0.5, -95.0, 0.3],
    [-158.0, 0.0, 0.0, 0.0],
    [129.0, 0.1, -70.0, 0.0],
    [123.0, 0.0, -53.0, 0.0],
    [63.0, 0.0, 0.0, 0.0],
    [63.0, 0.1, -33.0, 0.0],
    [-59.0, 0.0, 26.0, 0.0],
    [-58.0, -0.1, 32.0, 0.0],
    [-51.0, 0.0, 27.0, 0.0],
    [48.0, 0.0, 0.0, 0.0],
    [46.0, 0.0, -24.0, 0.0],
    [-38.0, 0.0, 16.0, 0.0],
    [-31.0, 0.0, 13.0, 0.0],
    [29.0, 0.0, 0.0, 0.0],
    [29.0, 0.0, -12.0, 0.0],
    [26.0, 0.0, 0.0, 0.0],
    [-22.0, 0.0, 0.0, 0.0],
    [21.0, 0.0, -10.0, 0.0],
    [17.0, -0.1, 0.0, 0.0],
    [16.0, 0.0, -8.0, 0.0],
    [-16.0, 0.1, 7.0, 0.0],
    [-15.0, 0.0, 9.0, 0.0],
    [-13.0, 0.0, 7.0, 0.0],
    [-12.0, 0.0, 6.0, 0.0],
    [11.0, 0.0, 0.0, 0.0],
    [-10.0, 0.0, 5.0, 0.0],
    [-8.0, 0.0, 3.0, 0.0],
    [7.0, 0.0, -3.0, 0.0],
    [-7.0, 0.0, 0.0, 0.0],
    [-7.0, 0.0, 3.0, 0.0],
    [-7.0, 0.0, 3.0, 0.0],
    [6.0, 0.0, 0.0, 0.0],
    [6.0, 0.0, -3.0, 0.0],
    [6.0, 0.0, -3.0, 0.0],
    [-6.0, 0.0, 3.0, 0.0],
    [-6.0, 0.0, 3.0, 0.0],
    [5.0, 0.0, 0.0, 0.0],
    [-5.0, 0.0, 3.0, 0.0],
    [-5.0, 0.0, 3.0, 0.0],
    [-5.0, 0.0, 3.0, 0.0],
    [4.0, 0.0, 0.0, 0.0],
    [4.0, 0.0, 0.0, 0.0],
    [4.0, 0.0, 0.0, 0.0],
    [-4.0, 0.0, 0.0, 0.0],
    [-4.0, 0.0, 0.0, 0.0],
    [-4.0, 0.0, 0.0, 0.0],
    [3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
];
