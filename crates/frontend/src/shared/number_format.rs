//! Number formatting for money columns

/// Insert `separator` every three digits of the integer part
pub fn group_thousands(value: f64, separator: char) -> String {
    let formatted = format!("{:.0}", value);
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };

    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    format!("{}{}", sign, result)
}

/// Format an amount in Vietnamese dong: `150000` -> `"150.000 ₫"`
pub fn format_vnd(value: f64) -> String {
    format!("{} ₫", group_thousands(value, '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(150000.0), "150.000 ₫");
        assert_eq!(format_vnd(1234567.0), "1.234.567 ₫");
        assert_eq!(format_vnd(0.0), "0 ₫");
        assert_eq!(format_vnd(999.0), "999 ₫");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(group_thousands(-1234567.0, ' '), "-1 234 567");
    }

    #[test]
    fn test_rounds_fractions() {
        assert_eq!(format_vnd(1999.6), "2.000 ₫");
    }
}
