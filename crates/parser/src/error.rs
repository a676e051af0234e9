//! Error types for the IPPcode23 parser.

use ippcode_common::DataType;
use thiserror::Error;

/// Errors produced while translating source text into a program.
///
/// The parser is fail-fast: the first violation in source order is
/// returned and nothing is aggregated. Each variant carries the 1-based
/// source line number where the offending token appeared (header errors
/// concern the whole input and carry none).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no lines at all after normalization.
    #[error("missing header line '.IPPcode23'")]
    MissingHeader,

    /// The first logical line was not the exact header literal.
    #[error("wrong header line '{found}', expected '.IPPcode23'")]
    WrongHeader { found: String },

    /// An unrecognized opcode mnemonic was encountered.
    #[error("line {line}: unknown opcode '{token}'")]
    UnknownOpcode { line: usize, token: String },

    /// A line carried the wrong number of operand fields for its opcode.
    #[error("line {line}: {opcode} expects {expected} operand(s)")]
    OperandCount {
        line: usize,
        opcode: &'static str,
        expected: usize,
    },

    /// A variable field had a bad frame tag, name or shape.
    #[error("line {line}: invalid variable '{token}'")]
    InvalidVariable { line: usize, token: String },

    /// A symbol field had no `@` separator or an unknown prefix.
    #[error("line {line}: invalid symbol '{token}'")]
    InvalidSymbol { line: usize, token: String },

    /// A label field violated the identifier grammar.
    #[error("line {line}: invalid label '{token}'")]
    InvalidLabel { line: usize, token: String },

    /// A type field named something other than int/bool/string/nil.
    #[error("line {line}: invalid type '{token}'")]
    InvalidType { line: usize, token: String },

    /// A literal value did not match the grammar of its declared type.
    #[error("line {line}: invalid {} literal '{token}'", .data_type.name())]
    InvalidLiteral {
        line: usize,
        data_type: DataType,
        token: String,
    },
}

impl ParseError {
    /// The process exit status documented for this error category.
    ///
    /// 21 covers header failures, 22 an unknown opcode, and 23 every
    /// arity or operand-grammar violation. Only the outermost caller
    /// actually terminates the process.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::MissingHeader | ParseError::WrongHeader { .. } => 21,
            ParseError::UnknownOpcode { .. } => 22,
            ParseError::OperandCount { .. }
            | ParseError::InvalidVariable { .. }
            | ParseError::InvalidSymbol { .. }
            | ParseError::InvalidLabel { .. }
            | ParseError::InvalidType { .. }
            | ParseError::InvalidLiteral { .. } => 23,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_header() {
        assert_eq!(
            ParseError::MissingHeader.to_string(),
            "missing header line '.IPPcode23'"
        );
    }

    #[test]
    fn display_wrong_header() {
        let e = ParseError::WrongHeader {
            found: ".IPPcode22".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "wrong header line '.IPPcode22', expected '.IPPcode23'"
        );
    }

    #[test]
    fn display_unknown_opcode() {
        let e = ParseError::UnknownOpcode {
            line: 3,
            token: "FOO".to_string(),
        };
        assert_eq!(e.to_string(), "line 3: unknown opcode 'FOO'");
    }

    #[test]
    fn display_operand_count() {
        let e = ParseError::OperandCount {
            line: 7,
            opcode: "WRITE",
            expected: 1,
        };
        assert_eq!(e.to_string(), "line 7: WRITE expects 1 operand(s)");
    }

    #[test]
    fn display_invalid_literal() {
        let e = ParseError::InvalidLiteral {
            line: 2,
            data_type: DataType::Int,
            token: "++5".to_string(),
        };
        assert_eq!(e.to_string(), "line 2: invalid int literal '++5'");
    }

    #[test]
    fn exit_codes_per_category() {
        assert_eq!(ParseError::MissingHeader.exit_code(), 21);
        assert_eq!(
            ParseError::WrongHeader {
                found: String::new()
            }
            .exit_code(),
            21
        );
        assert_eq!(
            ParseError::UnknownOpcode {
                line: 1,
                token: "X".to_string()
            }
            .exit_code(),
            22
        );
        assert_eq!(
            ParseError::OperandCount {
                line: 1,
                opcode: "WRITE",
                expected: 1
            }
            .exit_code(),
            23
        );
        assert_eq!(
            ParseError::InvalidSymbol {
                line: 1,
                token: "x".to_string()
            }
            .exit_code(),
            23
        );
        assert_eq!(
            ParseError::InvalidLiteral {
                line: 1,
                data_type: DataType::Nil,
                token: "null".to_string()
            }
            .exit_code(),
            23
        );
    }

    #[test]
    fn error_clone_and_eq() {
        let e1 = ParseError::UnknownOpcode {
            line: 1,
            token: "X".to_string(),
        };
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }
}
