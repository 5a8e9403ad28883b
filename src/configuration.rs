use crate::error::Error;

#[derive(Debug, Clone, Default)]
pub struct Configuration {
    /// Absolute tolerance (Da) under which two modification masses are considered equivalent.
    /// `None` compares masses for exact equality.
    mass_tolerance: Option<f64>,
}

impl Configuration {
    /// Creates a new configuration.
    ///
    /// # Arguments
    /// * `mass_tolerance` - Absolute mass tolerance in Dalton, `None` for exact matching.
    ///
    pub fn new(mass_tolerance: Option<f64>) -> Result<Self, Error> {
        if let Some(tolerance) = mass_tolerance {
            if tolerance.is_nan() || tolerance < 0.0 {
                return Err(Error::NegativeMassTolerance(tolerance));
            }
        }
        Ok(Self { mass_tolerance })
    }

    pub fn mass_tolerance(&self) -> Option<f64> {
        self.mass_tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact() {
        assert_eq!(Configuration::default().mass_tolerance(), None);
    }

    #[test]
    fn test_negative_tolerance() {
        assert_eq!(
            Configuration::new(Some(-0.01)).err(),
            Some(Error::NegativeMassTolerance(-0.01))
        );
        assert_eq!(
            Configuration::new(Some(0.005)).unwrap().mass_tolerance(),
            Some(0.005)
        );
        assert!(matches!(
            Configuration::new(Some(f64::NAN)),
            Err(Error::NegativeMassTolerance(tolerance)) if tolerance.is_nan()
        ));
    }
}
