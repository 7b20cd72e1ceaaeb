//! Form input coercion
//!
//! Form fields arrive as strings; these turn them into typed values or a
//! [`Error::Validation`] naming the field.

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

pub fn non_empty(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(field, "cannot be empty"));
    }
    Ok(trimmed.to_string())
}

pub fn whole_number(field: &'static str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::validation(field, format!("'{}' is not a whole number", value.trim())))
}

/// Parse a number and check it lies within `min..=max`
pub fn number_in_range(field: &'static str, value: &str, min: f64, max: f64) -> Result<f64> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| Error::validation(field, format!("'{}' is not a number", value.trim())))?;
    if !number.is_finite() || number < min || number > max {
        return Err(Error::validation(field, format!("must be between {} and {}", min, max)));
    }
    Ok(number)
}

pub fn non_negative(field: &'static str, value: &str) -> Result<f64> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| Error::validation(field, format!("'{}' is not a number", value.trim())))?;
    if !number.is_finite() || number < 0.0 {
        return Err(Error::validation(field, "must be zero or more"));
    }
    Ok(number)
}

pub fn email(field: &'static str, value: &str) -> Result<String> {
    let trimmed = non_empty(field, value)?;
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(trimmed),
        _ => Err(Error::validation(field, format!("'{}' is not an email address", trimmed))),
    }
}

/// Comma separated list, blanks dropped
pub fn list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accept either a JSON number or a numeric string; older builds stored counts as strings
pub fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("name", "  Lauren ").unwrap(), "Lauren");
        assert!(non_empty("name", "   ").is_err());
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(whole_number("total projects", " 50 ").unwrap(), 50);
        assert!(whole_number("total projects", "-1").is_err());
        assert!(whole_number("total projects", "fifty").is_err());
    }

    #[test]
    fn test_number_in_range() {
        assert_eq!(number_in_range("rating", "4.8", 0.0, 5.0).unwrap(), 4.8);
        assert!(number_in_range("rating", "5.1", 0.0, 5.0).is_err());
        assert!(number_in_range("rating", "NaN", 0.0, 5.0).is_err());
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("hourly rate", "75.5").unwrap(), 75.5);
        assert!(non_negative("hourly rate", "-1").is_err());
        assert!(non_negative("hourly rate", "inf").is_err());
    }

    #[test]
    fn test_email() {
        assert!(email("email", "lauren.jude@example.com").is_ok());
        assert!(email("email", "lauren.example.com").is_err());
        assert!(email("email", "@example.com").is_err());
        assert!(email("email", "a@b@c").is_err());
    }

    #[test]
    fn test_list() {
        assert_eq!(list("React, Rust,, Node.js "), vec!["React", "Rust", "Node.js"]);
        assert!(list("").is_empty());
    }

    #[test]
    fn test_lenient_u32() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "lenient_u32")]
            n: u32,
        }

        let w: Wrapper = serde_json::from_str(r#"{"n": "50"}"#).unwrap();
        assert_eq!(w.n, 50);
        let w: Wrapper = serde_json::from_str(r#"{"n": 12}"#).unwrap();
        assert_eq!(w.n, 12);
        assert!(serde_json::from_str::<Wrapper>(r#"{"n": "lots"}"#).is_err());
    }
}
