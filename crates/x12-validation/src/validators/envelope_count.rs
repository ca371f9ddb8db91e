//! Envelope count validator (spec.md §4.7).

use x12_assembly::model::TransactionModel;

use crate::error::{ValidationError, ValidationErrorKind};

/// SE's declared segment count must equal the number of segments from ST
/// through SE inclusive.
pub fn check(model: &TransactionModel) -> Vec<ValidationError> {
    let Some(expected) = model.segment_count_expected else {
        return Vec::new();
    };
    if expected == model.segment_count_actual as i64 {
        return Vec::new();
    }
    vec![ValidationError::new(
        "SE",
        ValidationErrorKind::SegmentCountMismatch,
        format!(
            "SE declared {expected} segments but {} were present from ST through SE",
            model.segment_count_actual
        ),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(expected: Option<i64>, actual: u32) -> TransactionModel {
        TransactionModel {
            transaction_code: "270".to_string(),
            implementation_version: "005010X279A1".to_string(),
            control_number: "0001".to_string(),
            segment_count_expected: expected,
            segment_count_actual: actual,
            loops: vec![],
        }
    }

    #[test]
    fn test_matching_count_is_valid() {
        assert!(check(&model(Some(6), 6)).is_empty());
    }

    #[test]
    fn test_mismatched_count_errors() {
        let errors = check(&model(Some(99), 6));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::SegmentCountMismatch);
    }

    #[test]
    fn test_unparseable_se01_is_skipped() {
        assert!(check(&model(None, 6)).is_empty());
    }
}
