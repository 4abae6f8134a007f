use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

/// A JSON field clients send either as a number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Numeric {
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Numeric::Int(v) => i32::try_from(*v).ok(),
            Numeric::Float(v) if v.fract() == 0.0 => {
                if *v >= i32::MIN as f64 && *v <= i32::MAX as f64 {
                    Some(*v as i32)
                } else {
                    None
                }
            }
            Numeric::Float(_) => None,
            Numeric::Text(s) => s.trim().parse::<i32>().ok(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Int(v) => Some(*v as f64),
            Numeric::Float(v) => Some(*v),
            Numeric::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// Row ids are positive serials.
    pub fn as_id(&self) -> Option<i32> {
        self.as_i32().filter(|v| *v > 0)
    }
}

/// Parses an id taken from a path segment or query string.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|v| *v > 0)
}

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// `Some` only when the string has non-whitespace content.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(json: &str) -> Numeric {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn numbers_and_numeric_strings_become_ids() {
        assert_eq!(numeric("7").as_id(), Some(7));
        assert_eq!(numeric("\"42\"").as_id(), Some(42));
        assert_eq!(numeric("\" 3 \"").as_id(), Some(3));
        assert_eq!(numeric("12.0").as_id(), Some(12));
    }

    #[test]
    fn non_numeric_or_non_positive_ids_are_rejected() {
        assert_eq!(numeric("\"abc\"").as_id(), None);
        assert_eq!(numeric("0").as_id(), None);
        assert_eq!(numeric("-4").as_id(), None);
        assert_eq!(numeric("1.5").as_id(), None);
        assert_eq!(numeric("9999999999").as_id(), None);
    }

    #[test]
    fn scores_accept_fractions() {
        assert_eq!(numeric("87.5").as_f64(), Some(87.5));
        assert_eq!(numeric("\"90\"").as_f64(), Some(90.0));
        assert_eq!(numeric("\"NaN\"").as_f64(), None);
        assert_eq!(numeric("\"ninety\"").as_f64(), None);
    }

    #[test]
    fn parse_id_from_path() {
        assert_eq!(parse_id("15"), Some(15));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("0"), None);
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("ana@x.com"));
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("ana@x"));
        assert!(!is_valid_email("a na@x.com"));
        assert_eq!(normalize_email("  Ana@X.com "), "ana@x.com");
    }

    #[test]
    fn blank_strings_count_as_missing() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("Rust".into())), Some("Rust".into()));
    }
}
