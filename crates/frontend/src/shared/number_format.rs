//! Display formatting for numeric values on cards and charts.

/// Thousands grouping with a thin non-breaking space, "1 234 567".
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Money with a dollar prefix; large values abbreviated to "$1.2M".
pub fn format_money(val: f64) -> String {
    let abs = val.abs();
    if abs >= 1_000_000.0 {
        format!("${:.1}M", val / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${}", format_thousands(val.round() as i64))
    } else {
        format!("${:.2}", val)
    }
}

/// Percent with one decimal, "42.5%".
pub fn format_percent(val: f64) -> String {
    format!("{:.1}%", val)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1234567), "1\u{00a0}234\u{00a0}567");
        assert_eq!(format_thousands(-4200), "-4\u{00a0}200");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(12.5), "$12.50");
        assert_eq!(format_money(250000.0), "$250\u{00a0}000");
        assert_eq!(format_money(2_500_000.0), "$2.5M");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(40.0), "40.0%");
        assert_eq!(format_percent(7.25), "7.2%");
    }
}
