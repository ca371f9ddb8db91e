//! Duplicate qualifier guard (spec.md §4.7): within one loop instance, a
//! repeatable segment keyed by a qualifier element (DTP's date qualifier,
//! AMT's amount qualifier) must not carry the same qualifier twice.

use x12_assembly::model::TransactionModel;

use crate::error::{ValidationError, ValidationErrorKind};
use crate::walk;

/// `(segment_id, qualifier element index)` pairs this guard applies to.
const QUALIFIER_KEYED_SEGMENTS: &[(&str, usize)] = &[("DTP", 0), ("AMT", 0)];

pub fn check(model: &TransactionModel) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    walk::for_each_instance(&model.loops, &mut |path, instance| {
        for &(segment_id, qualifier_index) in QUALIFIER_KEYED_SEGMENTS {
            let mut seen: Vec<String> = Vec::new();
            for seg in instance.segments.iter().filter(|seg| seg.is(segment_id)) {
                let qualifier = seg.get_element(qualifier_index).to_string();
                if seen.contains(&qualifier) {
                    errors.push(ValidationError::new(
                        format!("{path}/{segment_id}"),
                        ValidationErrorKind::DuplicateQualifier,
                        format!("duplicate {segment_id} qualifier '{qualifier}' within the same loop"),
                    ));
                } else {
                    seen.push(qualifier);
                }
            }
        }
    });

    errors
}
