//! CLI command implementations.

use ippcode_common::Program;
use ippcode_parser::ParseError;
use std::fs;
use std::io::Read;

/// Translate a source file to the XML document.
pub fn parse(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: parse requires an input file");
        eprintln!("Usage: ippc parse <input.src> [-o output.xml]");
        return Err(1);
    }

    let input = &args[0];

    // Parse -o flag
    let output = if args.len() >= 3 && args[1] == "-o" {
        Some(args[2].clone())
    } else {
        None
    };

    let text = read_source(input)?;
    let program = translate(&text)?;
    let document = ippcode_xml::generate(&program);

    match output {
        Some(path) => {
            fs::write(&path, &document).map_err(|e| {
                eprintln!("error: cannot write '{path}': {e}");
                1
            })?;
            eprintln!(
                "parsed {} instructions -> {path}",
                program.len()
            );
        }
        None => print!("{document}"),
    }
    Ok(())
}

/// Validate a source file without emitting a document.
pub fn check(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: check requires an input file");
        eprintln!("Usage: ippc check <input.src>");
        return Err(1);
    }

    let input = &args[0];
    let text = read_source(input)?;
    let program = translate(&text)?;

    println!("OK: {input} ({} instructions)", program.len());
    Ok(())
}

// --- Helpers ---

/// Run the translation, mapping failures to their documented exit codes.
fn translate(text: &str) -> Result<Program, i32> {
    ippcode_parser::parse(text).map_err(|e: ParseError| {
        eprintln!("error: {e}");
        e.exit_code()
    })
}

/// Read source text from a file, or from stdin when the path is `-`.
fn read_source(path: &str) -> Result<String, i32> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map_err(|e| {
            eprintln!("error: cannot read stdin: {e}");
            1
        })?;
        return Ok(text);
    }

    fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })
}
