//! IPPcode23 CLI — translate source text into the XML interchange
//! document.
//!
//! Exit codes:
//! - 0: success
//! - 1: usage or I/O error
//! - 21: missing or malformed header line
//! - 22: unknown opcode
//! - 23: operand arity or grammar violation

mod commands;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "parse" => commands::parse(&args[2..]),
        "check" => commands::check(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: ippc <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  parse <input.src> [-o output.xml]   Translate source to XML (input '-' reads stdin)");
    eprintln!("  check <input.src>                   Validate source without emitting a document");
}
