use crate::constants::KELVIN_OFFSET;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn pascals_to_hectopascals(pascals: f64) -> f64 {
    pascals / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_temperature_conversion() {
        assert_abs_diff_eq!(kelvin_to_celsius(288.15), 15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(kelvin_to_celsius(216.65), -56.5, epsilon = 1e-9);
    }

    #[test]
    fn test_pressure_conversion() {
        assert_abs_diff_eq!(pascals_to_hectopascals(101_325.0), 1_013.25, epsilon = 1e-9);
    }
}
