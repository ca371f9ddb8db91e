//! Top-level entry point (spec.md §4.7): runs a transaction schema's
//! registered validators against its closed model and aggregates the
//! result into one failure per transaction.

use x12_assembly::model::TransactionModel;
use x12_schema::transaction_schema::ValidatorId;

use crate::error::{ValidationError, ValidationFailure};
use crate::validators;

/// Runs every validator in `validator_ids` against `model`, in order, and
/// returns `Err` with all collected errors if any validator failed.
pub fn validate(model: &TransactionModel, validator_ids: &[ValidatorId]) -> Result<(), ValidationFailure> {
    let errors = check_all(model, validator_ids);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure(errors))
    }
}

/// Runs every validator in `validator_ids` and returns the raw error list,
/// without wrapping it in a failure — useful for callers that want to
/// keep processing past validation errors.
pub fn check_all(model: &TransactionModel, validator_ids: &[ValidatorId]) -> Vec<ValidationError> {
    validator_ids.iter().flat_map(|id| run(model, *id)).collect()
}

fn run(model: &TransactionModel, id: ValidatorId) -> Vec<ValidationError> {
    match id {
        ValidatorId::EnvelopeCount => validators::envelope_count::check(model),
        ValidatorId::HlParentage => validators::hl_parentage::check(model),
        ValidatorId::HlChildCode => validators::hl_child_code::check(model),
        ValidatorId::SubscriberAsPatient => validators::subscriber_as_patient::check(model),
        ValidatorId::LxUniqueness835 => validators::lx_uniqueness_835::check(model),
        ValidatorId::ClaimBalance835 => validators::claim_balance_835::check(model),
        ValidatorId::ClaimTotals837 => validators::claim_totals_837::check(model),
        ValidatorId::DuplicateQualifier => validators::duplicate_qualifier::check(model),
    }
}
