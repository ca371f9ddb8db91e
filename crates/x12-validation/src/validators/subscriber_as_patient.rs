//! Subscriber-as-patient validator (spec.md §4.7): where
//! `hierarchical_level_code == "22"` and `hierarchical_child_code == "0"`,
//! the subscriber is also the patient, so the subscriber's own NM1 record
//! must carry a first name (there is no separate dependent NM1 to fall
//! back on).

use x12_assembly::model::{LoopInstance, TransactionModel};
use x12_schema::segment::OwnedSegment;

use crate::error::{ValidationError, ValidationErrorKind};
use crate::walk;

pub fn check(model: &TransactionModel) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    walk::for_each_instance(&model.loops, &mut |path, instance| {
        let subscriber_is_patient = instance
            .segments
            .iter()
            .any(|seg| seg.is("HL") && seg.get_element(2) == "22" && seg.get_element(3) == "0");
        if !subscriber_is_patient {
            return;
        }
        if let Some(nm1) = find_subscriber_nm1(instance) {
            if nm1.get_element(3).is_empty() {
                errors.push(ValidationError::new(
                    format!("{path}/NM1"),
                    ValidationErrorKind::SubscriberMissingFirstName,
                    "subscriber doubling as patient must carry a first name",
                ));
            }
        }
    });
    errors
}

fn find_subscriber_nm1(instance: &LoopInstance) -> Option<&OwnedSegment> {
    if let Some(seg) = instance.segments.iter().find(|seg| seg.is("NM1") && seg.get_element(0) == "IL") {
        return Some(seg);
    }
    for child in &instance.child_loops {
        for child_instance in &child.instances {
            if let Some(found) = find_subscriber_nm1(child_instance) {
                return Some(found);
            }
        }
    }
    None
}
