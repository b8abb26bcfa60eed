// Exercise model: operand generation per difficulty level, operations, and sessions.
// Everything here is pure apart from the injected random source.

pub mod digits;
pub mod generator;
pub mod operation;
pub mod operator;
pub mod range;
pub mod session;

// Re-export the public API consumed by the layout engine and the CLI.
pub use generator::OperandGenerator;
pub use operation::Operation;
pub use operator::Operator;
pub use range::ValueRange;
pub use session::{Session, SessionConfig};
