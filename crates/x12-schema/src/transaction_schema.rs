//! Root transaction schema and the cross-segment validator set bound to it
//! (spec.md §4.3, §4.7).

use crate::loop_schema::LoopSchema;

/// Identifies a cross-segment validator registered against a transaction
/// schema. `x12-validation` maps these to the actual validator functions;
/// `x12-schema` only records which ones apply to which transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorId {
    EnvelopeCount,
    HlParentage,
    HlChildCode,
    SubscriberAsPatient,
    LxUniqueness835,
    ClaimBalance835,
    ClaimTotals837,
    DuplicateQualifier,
}

/// Root schema for one `(transaction_code, implementation_version)` pair.
#[derive(Debug, Clone)]
pub struct TransactionSchema {
    pub transaction_code: &'static str,
    pub implementation_version: &'static str,
    pub root_loops: &'static [LoopSchema],
    pub validators: &'static [ValidatorId],
}
