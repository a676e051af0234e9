//! Per-operand grammar validation and classification.
//!
//! Each whitespace-delimited field is checked against the grammar of its
//! declared kind and turned into a typed [`Operand`]. Classification is
//! context-sensitive for SYMBOL fields: a frame prefix resolves to a
//! variable reference, a type prefix to a literal.

use crate::error::ParseError;
use ippcode_common::{DataType, Frame, Operand, OperandKind};
use std::fmt::Write;

/// Classify one raw field against its declared kind.
pub(crate) fn classify(
    kind: OperandKind,
    field: &str,
    line: usize,
) -> Result<Operand, ParseError> {
    match kind {
        OperandKind::Label => classify_label(field, line),
        OperandKind::Type => classify_type(field, line),
        OperandKind::Var => classify_var(field, line),
        OperandKind::Symbol => classify_symbol(field, line),
    }
}

fn classify_label(field: &str, line: usize) -> Result<Operand, ParseError> {
    if !is_identifier(field) {
        return Err(ParseError::InvalidLabel {
            line,
            token: field.to_string(),
        });
    }
    Ok(Operand::Label(field.to_string()))
}

fn classify_type(field: &str, line: usize) -> Result<Operand, ParseError> {
    match DataType::from_name(field) {
        Some(data_type) => Ok(Operand::Type(data_type)),
        None => Err(ParseError::InvalidType {
            line,
            token: field.to_string(),
        }),
    }
}

/// A variable field is `<frame>@<name>` with no further `@` allowed.
fn classify_var(field: &str, line: usize) -> Result<Operand, ParseError> {
    let invalid = || ParseError::InvalidVariable {
        line,
        token: field.to_string(),
    };

    let parts: Vec<&str> = field.split('@').collect();
    if parts.len() != 2 {
        return Err(invalid());
    }
    let frame = Frame::from_tag(parts[0]).ok_or_else(|| invalid())?;
    if !is_identifier(parts[1]) {
        return Err(invalid());
    }
    Ok(Operand::Variable {
        frame,
        name: parts[1].to_string(),
    })
}

/// A symbol field splits at the first `@`; the value part may itself
/// contain `@` (string literals frequently do).
fn classify_symbol(field: &str, line: usize) -> Result<Operand, ParseError> {
    let Some((prefix, value)) = field.split_once('@') else {
        return Err(ParseError::InvalidSymbol {
            line,
            token: field.to_string(),
        });
    };

    if let Some(frame) = Frame::from_tag(prefix) {
        if !is_identifier(value) {
            return Err(ParseError::InvalidVariable {
                line,
                token: field.to_string(),
            });
        }
        return Ok(Operand::Variable {
            frame,
            name: value.to_string(),
        });
    }

    let Some(data_type) = DataType::from_name(prefix) else {
        return Err(ParseError::InvalidSymbol {
            line,
            token: field.to_string(),
        });
    };

    let literal = |value: String| Operand::Literal { data_type, value };
    let bad_literal = || ParseError::InvalidLiteral {
        line,
        data_type,
        token: value.to_string(),
    };

    match data_type {
        DataType::Int => {
            if !is_int_literal(value) {
                return Err(bad_literal());
            }
            Ok(literal(value.to_string()))
        }
        DataType::Bool => {
            if value != "true" && value != "false" {
                return Err(bad_literal());
            }
            Ok(literal(value.to_string()))
        }
        DataType::Nil => {
            if value != "nil" {
                return Err(bad_literal());
            }
            Ok(literal(value.to_string()))
        }
        // Any value is a valid string payload; only the encoding changes.
        DataType::String => Ok(literal(escape_string(value))),
    }
}

const IDENT_SPECIALS: [char; 8] = ['_', '-', '$', '&', '%', '*', '!', '?'];

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || IDENT_SPECIALS.contains(&c)
}

fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Variable/label name grammar. Empty names fail the first-character rule.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_ident_start(c) => {}
        _ => return false,
    }
    chars.all(is_ident_continue)
}

/// Optional `+`/`-` sign followed by one or more decimal digits.
fn is_int_literal(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Re-encode a string literal payload byte by byte.
///
/// Every byte at or below 32 (controls and space), byte 35 (`#`) and
/// byte 92 (`\`) becomes `\` followed by the zero-padded three-digit
/// decimal byte value. All of those are single-byte code points, so
/// multi-byte UTF-8 sequences pass through untouched.
pub(crate) fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match u32::from(c) {
            code @ (0..=32 | 35 | 92) => {
                let _ = write!(out, "\\{code:03}");
            }
            _ => out.push(c),
        }
    }
    out
}
