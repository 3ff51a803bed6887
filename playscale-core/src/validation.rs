//! Submission validation
//!
//! The validator is the only way to turn a [`SubmissionPayload`] into a
//! [`SubmissionRecord`]. Policy is strict-reject: every required field must
//! be present, and out-of-range values are rejected rather than defaulted.
//! Pure function of its input, no side effects.

use crate::error::{IntakeError, IntakeResult};
use crate::submission::{SubmissionPayload, SubmissionRecord};

// ============================================================================
// RANGE CONSTANTS
// ============================================================================

/// Minimum accepted age (inclusive).
pub const AGE_MIN: i64 = 18;
/// Maximum accepted age (inclusive).
pub const AGE_MAX: i64 = 99;
/// Minimum accepted score (inclusive), for the total and each factor.
pub const SCORE_MIN: f64 = 1.0;
/// Maximum accepted score (inclusive), for the total and each factor.
pub const SCORE_MAX: f64 = 5.0;

// ============================================================================
// VALIDATION TRAITS
// ============================================================================

/// Trait for validating non-empty optional strings.
pub trait ValidateNonEmpty {
    /// Validate that the value is present and not whitespace-only.
    ///
    /// # Errors
    /// Returns `IntakeError::MissingField` if the value is absent, empty,
    /// or whitespace-only.
    fn validate_non_empty(&self, field_name: &str) -> IntakeResult<String>;
}

impl ValidateNonEmpty for Option<String> {
    fn validate_non_empty(&self, field_name: &str) -> IntakeResult<String> {
        match self {
            Some(value) if !value.trim().is_empty() => Ok(value.clone()),
            _ => Err(IntakeError::missing_field(field_name)),
        }
    }
}

/// Trait for validating numeric ranges on optional values.
pub trait ValidateRange: Sized {
    /// Validate that the value is present and within an inclusive range.
    ///
    /// # Errors
    /// Returns `IntakeError::MissingField` if absent, or
    /// `IntakeError::OutOfRange` if outside `[min, max]`.
    fn validate_range(&self, field_name: &str, min: Self, max: Self) -> IntakeResult<Self>;
}

macro_rules! impl_validate_range {
    ($($t:ty),*) => {
        $(
            impl ValidateRange for $t {
                fn validate_range(&self, field_name: &str, min: Self, max: Self) -> IntakeResult<Self> {
                    if *self < min || *self > max {
                        return Err(IntakeError::out_of_range(field_name, min as f64, max as f64));
                    }
                    Ok(*self)
                }
            }
        )*
    };
}

impl_validate_range!(i64, f64);

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validate a raw payload, producing an immutable [`SubmissionRecord`].
///
/// Required fields: timestamp, name, age, gender, email, totalScore,
/// factor1..factor5, answers. `userAgent` is optional; answer indices
/// outside 1..=25 are ignored by the codec.
///
/// # Errors
/// - `MissingField` for any absent or null required field
/// - `OutOfRange` for `age` outside [18, 99] or any score outside [1, 5]
pub fn validate(payload: &SubmissionPayload) -> IntakeResult<SubmissionRecord> {
    let submitted_at = payload.timestamp.validate_non_empty("timestamp")?;
    let name = payload.name.validate_non_empty("name")?;
    let gender = payload.gender.validate_non_empty("gender")?;
    let email = payload.email.validate_non_empty("email")?;

    let age = match payload.age {
        Some(age) => age.validate_range("age", AGE_MIN, AGE_MAX)?,
        None => return Err(IntakeError::missing_field("age")),
    };

    let total_score = validate_score(payload.total_score, "totalScore")?;
    let factors = [
        validate_score(payload.factor1, "factor1")?,
        validate_score(payload.factor2, "factor2")?,
        validate_score(payload.factor3, "factor3")?,
        validate_score(payload.factor4, "factor4")?,
        validate_score(payload.factor5, "factor5")?,
    ];

    let answers = payload
        .answers
        .clone()
        .ok_or_else(|| IntakeError::missing_field("answers"))?;

    Ok(SubmissionRecord {
        submitted_at,
        name,
        age,
        gender,
        email,
        total_score,
        factors,
        user_agent: payload.user_agent.clone(),
        answers,
    })
}

fn validate_score(value: Option<f64>, field_name: &str) -> IntakeResult<f64> {
    match value {
        Some(score) => score.validate_range(field_name, SCORE_MIN, SCORE_MAX),
        None => Err(IntakeError::missing_field(field_name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn valid_payload() -> SubmissionPayload {
        let answers: BTreeMap<u8, serde_json::Value> =
            (1..=25).map(|i| (i, serde_json::json!(4))).collect();
        SubmissionPayload {
            timestamp: Some("2025-06-01T10:00:00Z".to_string()),
            name: Some("Hanako".to_string()),
            age: Some(34),
            gender: Some("female".to_string()),
            email: Some("hanako@example.com".to_string()),
            total_score: Some(3.8),
            factor1: Some(4.0),
            factor2: Some(3.5),
            factor3: Some(4.2),
            factor4: Some(3.1),
            factor5: Some(4.0),
            user_agent: Some("Mozilla/5.0".to_string()),
            answers: Some(answers),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        let record = validate(&valid_payload()).unwrap();
        assert_eq!(record.name, "Hanako");
        assert_eq!(record.age, 34);
        assert_eq!(record.factors[2], 4.2);
        assert_eq!(record.answers.len(), 25);
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        for field in [
            "timestamp",
            "name",
            "age",
            "gender",
            "email",
            "totalScore",
            "factor3",
            "answers",
        ] {
            let mut payload = valid_payload();
            match field {
                "timestamp" => payload.timestamp = None,
                "name" => payload.name = None,
                "age" => payload.age = None,
                "gender" => payload.gender = None,
                "email" => payload.email = None,
                "totalScore" => payload.total_score = None,
                "factor3" => payload.factor3 = None,
                "answers" => payload.answers = None,
                _ => unreachable!(),
            }
            let err = validate(&payload).unwrap_err();
            assert_eq!(err, IntakeError::missing_field(field), "field: {}", field);
        }
    }

    #[test]
    fn test_whitespace_only_name_rejected() {
        let mut payload = valid_payload();
        payload.name = Some("   ".to_string());
        assert_eq!(
            validate(&payload).unwrap_err(),
            IntakeError::missing_field("name")
        );
    }

    #[test]
    fn test_age_bounds() {
        for (age, ok) in [(17, false), (18, true), (99, true), (100, false)] {
            let mut payload = valid_payload();
            payload.age = Some(age);
            assert_eq!(validate(&payload).is_ok(), ok, "age: {}", age);
        }

        let mut payload = valid_payload();
        payload.age = Some(17);
        assert_eq!(
            validate(&payload).unwrap_err(),
            IntakeError::out_of_range("age", 18.0, 99.0)
        );
    }

    #[test]
    fn test_score_bounds() {
        for (score, ok) in [(0.99, false), (1.0, true), (5.0, true), (5.01, false)] {
            let mut payload = valid_payload();
            payload.factor5 = Some(score);
            assert_eq!(validate(&payload).is_ok(), ok, "score: {}", score);
        }

        let mut payload = valid_payload();
        payload.total_score = Some(0.0);
        assert_eq!(
            validate(&payload).unwrap_err(),
            IntakeError::out_of_range("totalScore", 1.0, 5.0)
        );
    }

    #[test]
    fn test_user_agent_is_optional() {
        let mut payload = valid_payload();
        payload.user_agent = None;
        assert!(validate(&payload).is_ok());
    }

    #[test]
    fn test_validation_is_pure() {
        let payload = valid_payload();
        let first = validate(&payload).unwrap();
        let second = validate(&payload).unwrap();
        assert_eq!(first, second);
    }
}
