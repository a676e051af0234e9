//! Line-level parsing: header validation, opcode lookup, operand
//! tokenization and instruction assembly.

use crate::error::ParseError;
use crate::normalize::{normalize, Line};
use crate::operand::classify;
use ippcode_common::{Instruction, Opcode, Program};

/// The mandatory first logical line, matched case-sensitively.
pub const HEADER: &str = ".IPPcode23";

/// Translate source text into a validated program.
///
/// Returns the first error encountered in source order.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let mut lines = normalize(source).into_iter();

    match lines.next() {
        None => return Err(ParseError::MissingHeader),
        Some(line) if line.text != HEADER => {
            return Err(ParseError::WrongHeader { found: line.text })
        }
        Some(_) => {}
    }

    let mut instructions = Vec::new();
    for line in lines {
        let order = instructions.len() as u32 + 1;
        instructions.push(parse_line(&line, order)?);
    }
    Ok(Program::new(instructions))
}

/// Parse one logical line into an instruction.
fn parse_line(line: &Line, order: u32) -> Result<Instruction, ParseError> {
    let (token, rest) = match line.text.split_once(' ') {
        Some((token, rest)) => (token, rest),
        None => (line.text.as_str(), ""),
    };

    let opcode = Opcode::from_mnemonic(token).ok_or_else(|| ParseError::UnknownOpcode {
        line: line.number,
        token: token.to_string(),
    })?;

    let kinds = opcode.operands();
    let fields = split_fields(rest, kinds.len()).ok_or(ParseError::OperandCount {
        line: line.number,
        opcode: opcode.mnemonic(),
        expected: kinds.len(),
    })?;

    let mut operands = Vec::with_capacity(kinds.len());
    for (&kind, field) in kinds.iter().zip(fields) {
        operands.push(classify(kind, field, line.number)?);
    }
    Ok(Instruction::new(order, opcode, operands))
}

/// Split the raw-argument remainder into exactly `count` non-empty
/// fields.
///
/// Splitting stops after `count - 1` delimiters, so the last field keeps
/// any further spaces and the operand grammar rejects them; this mirrors
/// a split-with-limit over the single spaces the normalizer guarantees.
fn split_fields(rest: &str, count: usize) -> Option<Vec<&str>> {
    if count == 0 {
        return rest.is_empty().then(Vec::new);
    }
    let fields: Vec<&str> = rest.splitn(count, ' ').collect();
    let complete = fields.len() == count && fields.iter().all(|f| !f.is_empty());
    complete.then_some(fields)
}
