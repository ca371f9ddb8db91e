//! LX uniqueness validator (spec.md §4.7): the header number assigned by
//! each 835 `loop_2000` instance must be unique across the transaction.

use x12_assembly::model::TransactionModel;

use crate::error::{ValidationError, ValidationErrorKind};
use crate::walk;

pub fn check(model: &TransactionModel) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: Vec<(String, String)> = Vec::new();

    walk::for_each_instance(&model.loops, &mut |path, instance| {
        let Some(lx) = instance.segments.iter().find(|seg| seg.is("LX")) else {
            return;
        };
        let assigned_number = lx.get_element(0).to_string();
        if let Some((_, first_path)) = seen.iter().find(|(number, _)| *number == assigned_number) {
            errors.push(ValidationError::new(
                path,
                ValidationErrorKind::DuplicateLxAssignedNumber,
                format!("LX assigned_number {assigned_number} duplicates the one at {first_path}"),
            ));
        } else {
            seen.push((assigned_number, path.to_string()));
        }
    });

    errors
}
