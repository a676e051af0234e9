//! XML document generation for parsed IPPcode23 programs.
//!
//! The document mirrors the program one-to-one: a `program` root carrying
//! the language tag, one `instruction` element per instruction (attributes
//! `order` and `opcode`), and one `argN` child per operand (attribute
//! `type`, text content the rendered value). The generator only ever
//! receives already-validated data and cannot fail.
//!
//! Indentation and the one-element-per-line layout are cosmetic; consumers
//! must not depend on them.

use ippcode_common::{Instruction, Program};
use std::fmt::Write;

/// The language tag carried by the document root.
pub const LANGUAGE: &str = "IPPcode23";

/// Serialize a program into an XML document string.
pub fn generate(program: &Program) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    if program.is_empty() {
        let _ = writeln!(out, "<program language=\"{LANGUAGE}\"/>");
        return out;
    }

    let _ = writeln!(out, "<program language=\"{LANGUAGE}\">");
    for instruction in &program.instructions {
        write_instruction(&mut out, instruction);
    }
    out.push_str("</program>\n");
    out
}

fn write_instruction(out: &mut String, instruction: &Instruction) {
    let order = instruction.order;
    let opcode = instruction.opcode.mnemonic();

    if instruction.operands.is_empty() {
        let _ = writeln!(out, "  <instruction order=\"{order}\" opcode=\"{opcode}\"/>");
        return;
    }

    let _ = writeln!(out, "  <instruction order=\"{order}\" opcode=\"{opcode}\">");
    for (idx, operand) in instruction.operands.iter().enumerate() {
        let _ = writeln!(
            out,
            "    <arg{n} type=\"{t}\">{v}</arg{n}>",
            n = idx + 1,
            t = operand.type_attr(),
            v = escape_text(&operand.to_string()),
        );
    }
    out.push_str("  </instruction>\n");
}

/// Escape text content for embedding in an element.
///
/// Attribute values never need escaping here: `order` is numeric and
/// `opcode`/`type`/`language` come from fixed tables.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
