//! HL parentage validator (spec.md §4.7, §S.3).
//!
//! Two clauses, taken from `x12/transactions/validators.py`'s
//! `validate_hl_parent_id`: the root HL (the first one in the
//! transaction) must carry no parent id at all; every other HL's parent
//! id must resolve to an earlier HL's id.

use x12_assembly::model::TransactionModel;

use crate::error::{ValidationError, ValidationErrorKind};
use crate::walk;

pub fn check(model: &TransactionModel) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_ids: Vec<String> = Vec::new();

    walk::for_each_instance(&model.loops, &mut |path, instance| {
        for seg in &instance.segments {
            if !seg.is("HL") {
                continue;
            }
            let id = seg.get_element(0);
            let parent = seg.get_element(1);

            if seen_ids.is_empty() {
                if !parent.is_empty() {
                    errors.push(ValidationError::new(
                        format!("{path}/HL"),
                        ValidationErrorKind::HlParentMissing,
                        format!("root HL {id} must not carry a parent id, found '{parent}'"),
                    ));
                }
            } else if !parent.is_empty() && !seen_ids.iter().any(|seen| seen == parent) {
                errors.push(ValidationError::new(
                    format!("{path}/HL"),
                    ValidationErrorKind::HlParentUnresolved,
                    format!("HL {id} references parent id '{parent}' which no earlier HL declared"),
                ));
            }

            seen_ids.push(id.to_string());
        }
    });

    errors
}
