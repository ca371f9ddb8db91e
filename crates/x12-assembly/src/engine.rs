//! Engine API (spec.md §6): the surface the CLI and HTTP shim build on.
//!
//! `parse` and `parse_segments` frame the whole interchange up front and
//! assemble each transaction eagerly, returning one `Result` per
//! transaction so a single malformed set doesn't prevent surfacing the
//! rest (spec.md §5).

use x12_parser::TokenizeError;
use x12_schema::registry;
use x12_schema::transaction_schema::TransactionSchema;
use x12_types::Delimiters;

use crate::dispatcher;
use crate::error::AssemblyError;
use crate::framer::{self, FramedTransaction};
use crate::model::TransactionModel;
use crate::serializer;

/// Parses an interchange into a sequence of validated transaction models.
///
/// Fails fast on a structural (tokenizer) error; a schema-binding or
/// dispatch failure is reported per-transaction so that one malformed
/// set doesn't prevent surfacing the rest.
pub fn parse(source: &[u8]) -> Result<Vec<Result<TransactionModel, AssemblyError>>, TokenizeError> {
    let framed = framer::frame(source)?;
    Ok(framed
        .transactions
        .into_iter()
        .map(assemble_transaction)
        .collect())
}

/// One tokenized segment: its id and its elements, each a list of
/// repetitions, each repetition a list of components.
pub type RawSegmentTuple = (String, Vec<Vec<String>>);

/// Tokenize-only view: every segment in the interchange as
/// `(segment_id, raw_elements)`, with no schema binding. Backs the CLI's
/// `-s` (segment dump) mode.
pub fn parse_segments(source: &[u8]) -> Result<Vec<RawSegmentTuple>, TokenizeError> {
    let framed = framer::frame(source)?;
    let mut out = Vec::new();
    for txn in framed.transactions {
        for segment in txn.segments {
            let raw_elements = segment
                .elements
                .iter()
                .map(|e| e.repetitions.iter().map(|r| r.join(":")).collect())
                .collect();
            out.push((segment.id, raw_elements));
        }
    }
    Ok(out)
}

/// Renders a transaction model back to X12 octets.
pub fn serialize(model: &TransactionModel, delimiters: Option<Delimiters>) -> String {
    serializer::serialize(model, &delimiters.unwrap_or_default())
}

fn assemble_transaction(framed: FramedTransaction) -> Result<TransactionModel, AssemblyError> {
    let schema = lookup_schema(&framed)?;
    let loops = dispatcher::dispatch(&framed.segments, schema)?;
    Ok(TransactionModel {
        transaction_code: framed.transaction_code,
        implementation_version: framed.implementation_version,
        control_number: framed.control_number,
        segment_count_expected: framed.segment_count_expected,
        segment_count_actual: framed.segment_count_actual,
        loops,
    })
}

fn lookup_schema(framed: &FramedTransaction) -> Result<&'static TransactionSchema, AssemblyError> {
    if framed.transaction_code.is_empty() {
        return Err(AssemblyError::TransactionTypeUndetermined);
    }
    let schema = if framed.implementation_version.is_empty() {
        registry::lookup_any_version(&framed.transaction_code)
    } else {
        registry::lookup(&framed.transaction_code, &framed.implementation_version)
            .or_else(|| registry::lookup_any_version(&framed.transaction_code))
    };
    schema.ok_or_else(|| AssemblyError::UnknownTransactionVersion {
        transaction_code: framed.transaction_code.clone(),
        implementation_version: framed.implementation_version.clone(),
    })
}
