/// Checks if two modification masses are equivalent.
///
/// # Arguments
/// * `a` - First mass
/// * `b` - Second mass
/// * `tolerance` - Absolute tolerance, `None` requires both masses to be exactly equal.
///
pub fn masses_are_equivalent(a: f64, b: f64, tolerance: Option<f64>) -> bool {
    match tolerance {
        None => a == b,
        Some(tolerance) => (a - b).abs() <= tolerance,
    }
}

/// Keeps the strictly greater score, an unset cell counts as -inf.
pub fn max_score(current: Option<f64>, new: f64) -> Option<f64> {
    match current {
        Some(current) if current >= new => Some(current),
        _ => Some(new),
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_masses_are_equivalent() {
        assert!(masses_are_equivalent(79.9663, 79.9663, None));
        assert!(!masses_are_equivalent(79.9663, 79.96631, None));
        assert!(masses_are_equivalent(79.9663, 79.96631, Some(0.001)));
        assert!(!masses_are_equivalent(15.9949, 42.0106, Some(0.001)));
    }

    #[test]
    fn test_max_score() {
        assert_eq!(max_score(None, 0.0), Some(0.0));
        assert_eq!(max_score(Some(40.0), 65.0), Some(65.0));
        assert_eq!(max_score(Some(65.0), 40.0), Some(65.0));
    }
}
