//! HL child code validator (spec.md §4.7): `hierarchical_child_code == "1"`
//! promises at least one descendant HL; `"0"` promises none.

use x12_assembly::model::TransactionModel;

use crate::error::{ValidationError, ValidationErrorKind};
use crate::walk;

struct HlRecord {
    path: String,
    id: String,
    parent: String,
    child_code: String,
}

pub fn check(model: &TransactionModel) -> Vec<ValidationError> {
    let mut records = Vec::new();
    walk::for_each_instance(&model.loops, &mut |path, instance| {
        for seg in &instance.segments {
            if seg.is("HL") {
                records.push(HlRecord {
                    path: path.to_string(),
                    id: seg.get_element(0).to_string(),
                    parent: seg.get_element(1).to_string(),
                    child_code: seg.get_element(3).to_string(),
                });
            }
        }
    });

    let mut errors = Vec::new();
    for rec in &records {
        let has_descendant = records.iter().any(|other| other.parent == rec.id);
        match (rec.child_code.as_str(), has_descendant) {
            ("1", false) => errors.push(ValidationError::new(
                format!("{}/HL", rec.path),
                ValidationErrorKind::HlChildCodeViolation,
                format!("HL {} declares hierarchical_child_code 1 but has no descendant HL", rec.id),
            )),
            ("0", true) => errors.push(ValidationError::new(
                format!("{}/HL", rec.path),
                ValidationErrorKind::HlChildCodeViolation,
                format!("HL {} declares hierarchical_child_code 0 but has a descendant HL", rec.id),
            )),
            _ => {}
        }
    }
    errors
}
