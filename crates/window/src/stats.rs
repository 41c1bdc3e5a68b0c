//! Running average of the window contents.

/// Arithmetic mean of `values`, or `0.0` for an empty slice.
pub fn average(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Render an average with exactly two decimal places, e.g. `"6.00"`.
pub fn format_average(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_empty() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(format_average(average(&[])), "0.00");
    }

    #[test]
    fn test_average_basic() {
        assert_eq!(average(&[4, 8]), 6.0);
        assert_eq!(format_average(average(&[4, 8])), "6.00");
    }

    #[test]
    fn test_average_fractional() {
        assert_eq!(format_average(average(&[1, 2])), "1.50");
        assert_eq!(format_average(average(&[1, 1, 2])), "1.33");
        assert_eq!(format_average(average(&[-3, 4])), "0.50");
    }
}
