// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Field validation helpers and the error taxonomy shared by both apps.

use std::fmt;

/// Everything that can go wrong with a single form field.
///
/// Each variant maps to one blocking error dialog; the originating view
/// stays editable and otherwise unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// Blank after trimming.
    Empty { field: &'static str },
    /// Height/weight input that does not parse as a real number.
    NonNumeric { field: &'static str },
    /// Age input that is not an integer string.
    NonIntegerAge,
    /// Parses, but is zero or negative.
    NonPositive { field: &'static str },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Empty { field } => write!(f, "Please enter your {field}."),
            FieldError::NonNumeric { field } => {
                write!(f, "Please enter your {field} as a number, e.g. 1.75.")
            }
            FieldError::NonIntegerAge => write!(f, "Please enter your age as a whole number."),
            FieldError::NonPositive { field } => {
                write!(f, "Your {field} must be greater than zero.")
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Trimmed, non-empty text or `Empty`.
pub fn require_nonempty(field: &'static str, raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty { field });
    }
    Ok(trimmed.to_string())
}

/// Parse a positive integer age.
pub fn parse_age(raw: &str) -> Result<u32, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty { field: "age" });
    }
    let age: u32 = trimmed.parse().map_err(|_| FieldError::NonIntegerAge)?;
    if age == 0 {
        return Err(FieldError::NonPositive { field: "age" });
    }
    Ok(age)
}

/// Parse a strictly positive real number (height in meters, weight in kg).
pub fn parse_positive_real(field: &'static str, raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty { field });
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| FieldError::NonNumeric { field })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(FieldError::NonPositive { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_nonempty_trims_and_accepts() {
        assert_eq!(require_nonempty("name", "  Ada  ").unwrap(), "Ada");
    }

    #[test]
    fn require_nonempty_rejects_whitespace_only() {
        assert_eq!(
            require_nonempty("name", "   "),
            Err(FieldError::Empty { field: "name" })
        );
    }

    #[test]
    fn parse_age_accepts_integer_strings() {
        assert_eq!(parse_age(" 34 ").unwrap(), 34);
    }

    #[test]
    fn parse_age_rejects_real_numbers_and_text() {
        assert_eq!(parse_age("12.5"), Err(FieldError::NonIntegerAge));
        assert_eq!(parse_age("abc"), Err(FieldError::NonIntegerAge));
        assert_eq!(parse_age(""), Err(FieldError::Empty { field: "age" }));
        assert_eq!(parse_age("0"), Err(FieldError::NonPositive { field: "age" }));
    }

    #[test]
    fn parse_positive_real_accepts_decimal_input() {
        assert_eq!(parse_positive_real("height", "1.75").unwrap(), 1.75);
    }

    #[test]
    fn parse_positive_real_classifies_failures() {
        assert_eq!(
            parse_positive_real("height", "tall"),
            Err(FieldError::NonNumeric { field: "height" })
        );
        assert_eq!(
            parse_positive_real("weight", "-70"),
            Err(FieldError::NonPositive { field: "weight" })
        );
        assert_eq!(
            parse_positive_real("weight", "0"),
            Err(FieldError::NonPositive { field: "weight" })
        );
        assert_eq!(
            parse_positive_real("weight", ""),
            Err(FieldError::Empty { field: "weight" })
        );
    }

    #[test]
    fn parse_positive_real_rejects_non_finite() {
        assert_eq!(
            parse_positive_real("weight", "NaN"),
            Err(FieldError::NonPositive { field: "weight" })
        );
        assert_eq!(
            parse_positive_real("weight", "inf"),
            Err(FieldError::NonPositive { field: "weight" })
        );
    }

    #[test]
    fn messages_name_the_field() {
        let err = FieldError::NonNumeric { field: "height" };
        assert!(err.to_string().contains("height"));
    }
}
