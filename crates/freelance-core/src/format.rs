//! Display formatting for money, percentages, dates and ratings

use chrono::NaiveDate;

use crate::config::CONFIG;

/// Insert thousands separators into a whole number
fn group_thousands(value: u64) -> String {
    let s = value.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Whole-unit currency, e.g. `$5,200` or `-$1,200`. Halves round up.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, CONFIG.currency_symbol, group_thousands(rounded.abs() as u64))
}

/// Format percentage
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.prec$}%", value, prec = decimals)
}

/// Signed growth, e.g. `+12.5%`
pub fn format_growth(value: f64) -> String {
    format!("{:+.1}%", value)
}

/// Short date, e.g. `Dec 15, 2023`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Up to two initials for an avatar placeholder
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// Five stars for a 0-5 rating; a fraction of .5 or more shows a half star
pub fn star_rating(rating: f64) -> [Star; 5] {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let has_half = rating.fract() >= 0.5;

    let mut stars = [Star::Empty; 5];
    for (i, star) in stars.iter_mut().enumerate() {
        if i < full {
            *star = Star::Full;
        } else if i == full && has_half {
            *star = Star::Half;
        }
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(5200.0), "$5,200");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-1200.0), "-$1,200");
    }

    #[test]
    fn test_format_currency_rounds_half_up() {
        assert_eq!(format_currency(421.5), "$422");
        assert_eq!(format_currency(421.49), "$421");
        // 69500 / 165
        assert_eq!(format_currency(69500.0 / 165.0), "$421");
    }

    #[test]
    fn test_format_percent_and_growth() {
        assert_eq!(format_percent(61.538, 1), "61.5%");
        assert_eq!(format_growth(12.5), "+12.5%");
        assert_eq!(format_growth(-3.5), "-3.5%");
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2023, 12, 5).unwrap();
        assert_eq!(format_date(d), "Dec 5, 2023");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Lauren Jude"), "LJ");
        assert_eq!(initials("sarah"), "S");
        assert_eq!(initials("Mary Ann Smith"), "MA");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn test_star_rating() {
        use Star::*;
        assert_eq!(star_rating(4.8), [Full, Full, Full, Full, Half]);
        assert_eq!(star_rating(4.2), [Full, Full, Full, Full, Empty]);
        assert_eq!(star_rating(5.0), [Full; 5]);
        assert_eq!(star_rating(0.0), [Empty; 5]);
        assert_eq!(star_rating(7.0), [Full; 5]);
    }
}
