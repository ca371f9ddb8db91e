//! Cross-segment validation for X12 healthcare transactions (spec.md §4.7).
//!
//! Each validator is a pure function over a closed `x12_assembly::model::
//! TransactionModel`: envelope counts, HL parentage and child-code
//! consistency, subscriber-as-patient name completeness, LX/claim
//! uniqueness, and exact-decimal claim balance/total checks. A schema's
//! `validators: &[ValidatorId]` list (`x12-schema`) says which ones apply;
//! [`validate::validate`] runs them and aggregates the result.
//!
//! # Usage
//! ```ignore
//! let model = x12_assembly::engine::parse(source)?.remove(0)?;
//! let schema = x12_schema::registry::lookup(&model.transaction_code, &model.implementation_version).unwrap();
//! validate::validate(&model, schema.validators)?;
//! ```

pub mod decimal;
pub mod error;
pub mod validate;
pub mod validators;
pub mod walk;

pub use error::{ValidationError, ValidationErrorKind, ValidationFailure};
pub use validate::{check_all, validate};
