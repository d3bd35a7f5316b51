//! Form validation
//!
//! Rules, checked in order:
//! 1. Every field must be filled in (whitespace alone counts as empty).
//! 2. The age must be a whole number.

use thiserror::Error;

use crate::notice::NoticeLevel;
use roster_storage::NewStudent;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Todos os campos são obrigatórios.")]
    MissingFields,

    #[error("A idade deve ser um número inteiro.")]
    InvalidAge(String),
}

impl ValidationError {
    pub fn level(&self) -> NoticeLevel {
        match self {
            ValidationError::MissingFields => NoticeLevel::Warning,
            ValidationError::InvalidAge(_) => NoticeLevel::Error,
        }
    }
}

/// Turn raw form text into a registration ready to be stored.
pub fn validate(name: &str, age: &str, grade: &str) -> Result<NewStudent, ValidationError> {
    let name = name.trim();
    let age = age.trim();
    let grade = grade.trim();

    if name.is_empty() || age.is_empty() || grade.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let age = age
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidAge(age.to_string()))?;

    Ok(NewStudent {
        name: name.to_string(),
        age,
        grade: grade.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let student = validate("Ana", "12", "7A").unwrap();
        assert_eq!(
            student,
            NewStudent {
                name: "Ana".to_string(),
                age: 12,
                grade: "7A".to_string(),
            }
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let student = validate("  Ana Clara ", " 12 ", " 7A").unwrap();
        assert_eq!(student.name, "Ana Clara");
        assert_eq!(student.age, 12);
        assert_eq!(student.grade, "7A");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(validate("", "12", "7A"), Err(ValidationError::MissingFields));
        assert_eq!(validate("Ana", "", "7A"), Err(ValidationError::MissingFields));
        assert_eq!(validate("Ana", "12", "   "), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_missing_fields_checked_before_age() {
        assert_eq!(validate("", "abc", "7A"), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_age_must_be_whole_number() {
        assert_eq!(
            validate("Ana", "abc", "7A"),
            Err(ValidationError::InvalidAge("abc".to_string()))
        );
        assert!(matches!(
            validate("Ana", "12.5", "7A"),
            Err(ValidationError::InvalidAge(_))
        ));
    }

    #[test]
    fn test_error_levels() {
        assert_eq!(ValidationError::MissingFields.level(), NoticeLevel::Warning);
        assert_eq!(
            ValidationError::InvalidAge("x".to_string()).level(),
            NoticeLevel::Error
        );
    }
}
