//! Opcode definitions for the IPPcode23 instruction set.

use crate::operand::OperandKind;

/// Identifies one IPPcode23 instruction.
///
/// Each opcode fixes the number and kinds of its operands; the table is
/// immutable and consulted by every later pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Frames, function calls and returns
    /// Copy a symbol value into a variable.
    Move,
    /// Create a new temporary frame.
    CreateFrame,
    /// Push the temporary frame onto the frame stack.
    PushFrame,
    /// Pop the top of the frame stack into the temporary frame.
    PopFrame,
    /// Define a new variable in its frame.
    DefVar,
    /// Call a label, remembering the return position.
    Call,
    /// Return to the position remembered by CALL.
    Return,

    // Data stack
    /// Push a symbol value onto the data stack.
    Pushs,
    /// Pop the data stack into a variable.
    Pops,

    // Arithmetic, relational, boolean and conversion
    /// Integer addition.
    Add,
    /// Integer subtraction.
    Sub,
    /// Integer multiplication.
    Mul,
    /// Integer division.
    Idiv,
    /// Less-than comparison.
    Lt,
    /// Greater-than comparison.
    Gt,
    /// Equality comparison.
    Eq,
    /// Boolean conjunction.
    And,
    /// Boolean disjunction.
    Or,
    /// Boolean negation.
    Not,
    /// Convert an integer code point to a one-character string.
    Int2Char,
    /// Read the code point of a character at an index in a string.
    Stri2Int,

    // Input / output
    /// Read a value of the given type from input into a variable.
    Read,
    /// Write a symbol value to output.
    Write,

    // Strings
    /// Concatenate two string symbols.
    Concat,
    /// Length of a string symbol.
    Strlen,
    /// Extract one character of a string at an index.
    Getchar,
    /// Replace one character of a variable's string at an index.
    Setchar,

    // Type introspection
    /// Store the dynamic type name of a symbol.
    Type,

    // Control flow
    /// Define a jump target.
    Label,
    /// Unconditional jump to a label.
    Jump,
    /// Jump to a label if two symbols are equal.
    JumpIfEq,
    /// Jump to a label if two symbols differ.
    JumpIfNeq,
    /// Terminate execution with a symbol exit code.
    Exit,

    // Debugging
    /// Print a symbol value to the diagnostic stream.
    Dprint,
    /// Print interpreter state to the diagnostic stream.
    Break,
}

/// All valid opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 35] = [
    Opcode::Move,
    Opcode::CreateFrame,
    Opcode::PushFrame,
    Opcode::PopFrame,
    Opcode::DefVar,
    Opcode::Call,
    Opcode::Return,
    Opcode::Pushs,
    Opcode::Pops,
    Opcode::Add,
    Opcode::Sub,
    Opcode::Mul,
    Opcode::Idiv,
    Opcode::Lt,
    Opcode::Gt,
    Opcode::Eq,
    Opcode::And,
    Opcode::Or,
    Opcode::Not,
    Opcode::Int2Char,
    Opcode::Stri2Int,
    Opcode::Read,
    Opcode::Write,
    Opcode::Concat,
    Opcode::Strlen,
    Opcode::Getchar,
    Opcode::Setchar,
    Opcode::Type,
    Opcode::Label,
    Opcode::Jump,
    Opcode::JumpIfEq,
    Opcode::JumpIfNeq,
    Opcode::Exit,
    Opcode::Dprint,
    Opcode::Break,
];

use OperandKind::{Label as L, Symbol as S, Type as T, Var as V};

const NONE: &[OperandKind] = &[];
const VAR: &[OperandKind] = &[V];
const LABEL: &[OperandKind] = &[L];
const SYMB: &[OperandKind] = &[S];
const VAR_SYMB: &[OperandKind] = &[V, S];
const VAR_TYPE: &[OperandKind] = &[V, T];
const VAR_SYMB_SYMB: &[OperandKind] = &[V, S, S];
const LABEL_SYMB_SYMB: &[OperandKind] = &[L, S, S];

impl Opcode {
    /// Returns the source mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Move => "MOVE",
            Opcode::CreateFrame => "CREATEFRAME",
            Opcode::PushFrame => "PUSHFRAME",
            Opcode::PopFrame => "POPFRAME",
            Opcode::DefVar => "DEFVAR",
            Opcode::Call => "CALL",
            Opcode::Return => "RETURN",
            Opcode::Pushs => "PUSHS",
            Opcode::Pops => "POPS",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Idiv => "IDIV",
            Opcode::Lt => "LT",
            Opcode::Gt => "GT",
            Opcode::Eq => "EQ",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Not => "NOT",
            Opcode::Int2Char => "INT2CHAR",
            Opcode::Stri2Int => "STRI2INT",
            Opcode::Read => "READ",
            Opcode::Write => "WRITE",
            Opcode::Concat => "CONCAT",
            Opcode::Strlen => "STRLEN",
            Opcode::Getchar => "GETCHAR",
            Opcode::Setchar => "SETCHAR",
            Opcode::Type => "TYPE",
            Opcode::Label => "LABEL",
            Opcode::Jump => "JUMP",
            Opcode::JumpIfEq => "JUMPIFEQ",
            Opcode::JumpIfNeq => "JUMPIFNEQ",
            Opcode::Exit => "EXIT",
            Opcode::Dprint => "DPRINT",
            Opcode::Break => "BREAK",
        }
    }

    /// Returns the ordered operand kinds this opcode requires.
    pub fn operands(&self) -> &'static [OperandKind] {
        match self {
            Opcode::CreateFrame
            | Opcode::PushFrame
            | Opcode::PopFrame
            | Opcode::Return
            | Opcode::Break => NONE,

            Opcode::DefVar | Opcode::Pops => VAR,

            Opcode::Call | Opcode::Label | Opcode::Jump => LABEL,

            Opcode::Pushs | Opcode::Write | Opcode::Exit | Opcode::Dprint => SYMB,

            Opcode::Move
            | Opcode::Not
            | Opcode::Int2Char
            | Opcode::Strlen
            | Opcode::Type => VAR_SYMB,

            Opcode::Read => VAR_TYPE,

            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Idiv
            | Opcode::Lt
            | Opcode::Gt
            | Opcode::Eq
            | Opcode::And
            | Opcode::Or
            | Opcode::Stri2Int
            | Opcode::Concat
            | Opcode::Getchar
            | Opcode::Setchar => VAR_SYMB_SYMB,

            Opcode::JumpIfEq | Opcode::JumpIfNeq => LABEL_SYMB_SYMB,
        }
    }

    /// Look up an opcode by mnemonic, case-insensitively.
    pub fn from_mnemonic(token: &str) -> Option<Opcode> {
        let upper = token.to_uppercase();
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic() == upper)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_opcodes_count() {
        assert_eq!(ALL_OPCODES.len(), 35);
    }

    #[test]
    fn mnemonic_lookup_roundtrip() {
        for &opcode in &ALL_OPCODES {
            let found = Opcode::from_mnemonic(opcode.mnemonic());
            assert_eq!(found, Some(opcode), "lookup failed for {opcode:?}");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Opcode::from_mnemonic("defvar"), Some(Opcode::DefVar));
        assert_eq!(Opcode::from_mnemonic("DefVar"), Some(Opcode::DefVar));
        assert_eq!(Opcode::from_mnemonic("jumpifeq"), Some(Opcode::JumpIfEq));
    }

    #[test]
    fn unknown_mnemonic() {
        assert_eq!(Opcode::from_mnemonic("FOOBAR"), None);
        assert_eq!(Opcode::from_mnemonic(""), None);
        assert_eq!(Opcode::from_mnemonic(".IPPcode23"), None);
    }

    #[test]
    fn mnemonics_are_uppercase_and_unique() {
        for (i, a) in ALL_OPCODES.iter().enumerate() {
            let m = a.mnemonic();
            assert!(!m.is_empty());
            assert_eq!(m, m.to_uppercase());
            for b in &ALL_OPCODES[i + 1..] {
                assert_ne!(m, b.mnemonic());
            }
        }
    }

    #[test]
    fn arity_bounds() {
        for &opcode in &ALL_OPCODES {
            assert!(opcode.operands().len() <= 3, "{opcode:?} arity too large");
        }
    }

    #[test]
    fn nullary_opcodes() {
        for opcode in [
            Opcode::CreateFrame,
            Opcode::PushFrame,
            Opcode::PopFrame,
            Opcode::Return,
            Opcode::Break,
        ] {
            assert!(opcode.operands().is_empty(), "{opcode:?} should take no operands");
        }
    }

    #[test]
    fn read_operand_kinds() {
        assert_eq!(
            Opcode::Read.operands(),
            &[OperandKind::Var, OperandKind::Type]
        );
    }

    #[test]
    fn jumpifeq_operand_kinds() {
        assert_eq!(
            Opcode::JumpIfEq.operands(),
            &[OperandKind::Label, OperandKind::Symbol, OperandKind::Symbol]
        );
    }

    #[test]
    fn write_is_unary_symbol() {
        assert_eq!(Opcode::Write.operands(), &[OperandKind::Symbol]);
    }
}
