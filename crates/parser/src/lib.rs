//! IPPcode23 parser — source text → validated program.
//!
//! The translation is a single pass with no recovery: normalization,
//! header validation, opcode lookup, operand tokenization and operand
//! classification run left to right and stop at the first violation.
//!
//! # Usage
//!
//! ```
//! use ippcode_parser::parse;
//!
//! let program = parse(".IPPcode23\nDEFVAR GF@a\nWRITE GF@a\n").unwrap();
//! assert_eq!(program.len(), 2);
//! ```
//!
//! The parser performs no I/O and never terminates the process; callers
//! map [`ParseError::exit_code`] to a process status if they need one.

pub mod error;

mod normalize;
mod operand;
mod parser;

pub use error::ParseError;
pub use parser::{parse, HEADER};

#[cfg(test)]
mod tests {
    use super::*;
    use ippcode_common::{DataType, Frame, Opcode, Operand};

    #[test]
    fn parse_example_program() {
        let program = parse(
            ".IPPcode23\n\
             DEFVAR GF@a\n\
             READ GF@a int\n\
             WRITE GF@a\n",
        )
        .unwrap();

        assert_eq!(program.len(), 3);
        assert_eq!(program.instructions[1].opcode, Opcode::Read);
        assert_eq!(
            program.instructions[1].operands,
            vec![
                Operand::Variable {
                    frame: Frame::Global,
                    name: "a".to_string()
                },
                Operand::Type(DataType::Int),
            ]
        );
    }

    #[test]
    fn parse_with_comments_blanks_and_mixed_whitespace() {
        let text = "\
# full-line comment
.IPPcode23

LABEL main       # jump target
  JUMP\tmain
";
        let program = parse(text).unwrap();
        assert_eq!(program.len(), 2);
        assert_eq!(
            program.instructions[0].operands[0],
            Operand::Label("main".to_string())
        );
    }

    #[test]
    fn error_exit_codes_span_all_three_categories() {
        assert_eq!(parse("BREAK\n").unwrap_err().exit_code(), 21);
        assert_eq!(
            parse(".IPPcode23\nNOSUCHOP\n").unwrap_err().exit_code(),
            22
        );
        assert_eq!(
            parse(".IPPcode23\nDEFVAR notavar\n").unwrap_err().exit_code(),
            23
        );
    }
}
