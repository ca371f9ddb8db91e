//! One module per cross-segment validator (spec.md §4.7). Each exposes a
//! single `check(model) -> Vec<ValidationError>`; [`crate::validate`] wires
//! `x12_schema::transaction_schema::ValidatorId` to these functions.

pub mod claim_balance_835;
pub mod claim_totals_837;
pub mod duplicate_qualifier;
pub mod envelope_count;
pub mod hl_child_code;
pub mod hl_parentage;
pub mod lx_uniqueness_835;
pub mod subscriber_as_patient;
