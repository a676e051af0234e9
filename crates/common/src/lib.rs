//! IPPcode23 common types and the instruction table.
//!
//! This crate provides the foundational data structures shared by the
//! parser and the XML generator:
//!
//! - [`Opcode`] — all 35 opcodes with their operand signatures
//! - [`OperandKind`] — the declared argument-slot categories
//! - [`Frame`] and [`DataType`] — frame tags and literal/type names
//! - [`Operand`] — a classified operand value
//! - [`Instruction`] and [`Program`] — the parsed representation
//!
//! The opcode table is the only process-wide state and is read-only
//! `const` data; everything else lives for one translation call.

pub mod instruction;
pub mod opcode;
pub mod operand;
pub mod program;

// Re-export commonly used types at the crate root.
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use operand::{DataType, Frame, Operand, OperandKind};
pub use program::Program;
