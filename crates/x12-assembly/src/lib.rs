//! Schema-guided X12 transaction assembly.
//!
//! Three-pass pipeline over one interchange:
//! 1. Frame: split raw bytes into ST..SE transaction sets (existing
//!    tokenizer, `framer`).
//! 2. Dispatch: assemble each transaction set's segments into a
//!    `TransactionModel` tree guided by the static schema registry
//!    (`dispatcher`).
//! 3. Serialize: render a `TransactionModel` back to X12 octets
//!    (`serializer`).
//!
//! # Usage
//! ```ignore
//! let results = engine::parse(input)?;
//! for result in results {
//!     let model = result?;
//!     let rendered = engine::serialize(&model, None);
//! }
//! ```

pub mod diagnostic;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod framer;
pub mod matcher;
pub mod model;
pub mod navigator;
pub mod serializer;

pub use diagnostic::{StructureDiagnostic, StructureDiagnosticKind};
pub use error::AssemblyError;
pub use framer::{FramedInterchange, FramedTransaction};
pub use model::{AssembledLoop, LoopInstance, TransactionModel};
pub use navigator::TransactionModelNavigator;
