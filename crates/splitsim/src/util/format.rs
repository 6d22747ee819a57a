/// Format a percent value (already 0-100) with a fixed number of decimals
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Whole percent of a fraction, truncated towards zero.
///
/// A tiny epsilon absorbs representation error so that e.g. `0.29` reads as
/// 29 rather than 28.
pub fn whole_percent(value: f64) -> i64 {
    (value * 100.0 + 1e-9).trunc() as i64
}

/// Format a voting-asset amount, dropping trailing zeros
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(84.47624, 2), "84.48%");
        assert_eq!(format_percent(22.16108, 1), "22.2%");
        assert_eq!(format_percent(50.0, 0), "50%");
    }

    #[test]
    fn test_whole_percent_truncates() {
        assert_eq!(whole_percent(0.17), 17);
        assert_eq!(whole_percent(0.29), 29);
        assert_eq!(whole_percent(0.145), 14);
        assert_eq!(whole_percent(0.0), 0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(118.0), "118");
        assert_eq!(format_amount(0.1), "0.1");
        assert_eq!(format_amount(794.25), "794.25");
    }
}
