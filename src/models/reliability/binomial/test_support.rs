/// Reference sample sizes as `(reliability, confidence, failures, sample_size)`.
///
/// Values from the online calculator at
/// <https://reliabilityanalyticstoolkit.appspot.com/sample_size>.
pub(super) const REFERENCE_SAMPLE_SIZES: &[(f64, f64, u64, u64)] = &[
    (0.8, 0.9, 0, 11),
    (0.8, 0.9, 1, 18),
    (0.8, 0.9, 2, 25),
    (0.8, 0.9, 3, 32),
    (0.9, 0.95, 0, 29),
    (0.9, 0.95, 1, 46),
    (0.9, 0.95, 2, 61),
    (0.9, 0.95, 3, 76),
];
