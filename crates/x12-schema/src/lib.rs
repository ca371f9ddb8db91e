//! Static schema registry and typed segment/element model for X12
//! healthcare transactions (spec.md §4.3, §4.4).
//!
//! - `registry` — process-wide immutable table mapping
//!   `(transaction_code, implementation_version)` to a root transaction
//!   schema
//! - `transaction_schema` / `loop_schema` / `segment_schema` / `element` —
//!   the schema tree itself and element type coercion
//! - `segment` — `OwnedSegment`, the crate-independent owned segment
//!   representation used by the chunked reader and transaction model
//! - `cursor` — `SegmentCursor` and helpers for sequential segment consumption
//! - `navigator` — path-based loop-scoped segment lookup

pub mod cursor;
pub mod element;
pub mod loop_schema;
pub mod navigator;
pub mod registry;
pub mod segment;
pub mod segment_schema;
pub mod transaction_schema;
