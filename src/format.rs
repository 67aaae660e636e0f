/// One decimal place with ties rounded up; `{:.1}` alone rounds 1.25 to 1.2.
fn one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Compact count for dashboards: 1.5K, 2.5M. Values below a thousand are
/// printed as-is.
pub fn format_number(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.1}M", one_decimal(n / 1_000_000.0))
    } else if n >= 1_000.0 {
        format!("{:.1}K", one_decimal(n / 1_000.0))
    } else {
        format!("{}", n)
    }
}

/// Rounds half up (towards +inf), the same way the page templates do.
fn round_half_up(n: f64) -> f64 {
    let floor = n.floor();
    let r = if n - floor >= 0.5 { floor + 1.0 } else { floor };
    // -0 would print as "-0"
    if r == 0.0 { 0.0 } else { r }
}

pub fn format_percentage(n: f64) -> String {
    format!("{}%", round_half_up(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_thresholds() {
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1_000.0), "1.0K");
        assert_eq!(format_number(1_500.0), "1.5K");
        assert_eq!(format_number(999_999.0), "1000.0K");
        assert_eq!(format_number(1_000_000.0), "1.0M");
        assert_eq!(format_number(2_500_000.0), "2.5M");
    }

    #[test]
    fn test_format_number_ties_round_up() {
        assert_eq!(format_number(1_250.0), "1.3K");
        assert_eq!(format_number(3_250.0), "3.3K");
        assert_eq!(format_number(1_250_000.0), "1.3M");
        assert_eq!(format_number(1_249.0), "1.2K");
    }

    #[test]
    fn test_format_number_small_values() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-5000.0), "-5000");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(85.6), "86%");
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(42.4), "42%");
        assert_eq!(format_percentage(2.5), "3%");
        assert_eq!(format_percentage(100.0), "100%");
    }

    #[test]
    fn test_format_percentage_negative_rounds_up() {
        assert_eq!(format_percentage(-2.5), "-2%");
        assert_eq!(format_percentage(-0.4), "0%");
    }
}
