//! Gosling CLI.

use gosc::commands::{
    exit_with, has_source_extension, lex_file, parse_file, parse_run_options, run_file,
    RunOptions,
};
use gosc::repl::{self, Repl};

fn main() {
    gosc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        start_repl();
        return;
    };

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: gos run <file.gos> [--max-depth=<n>]");
                std::process::exit(1);
            }
            match parse_run_options(&args[2..]) {
                Ok(options) => run_file(&options),
                Err(e) => exit_with(&e),
            }
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: gos parse <file.gos>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: gos lex <file.gos>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "repl" => start_repl(),
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Gosling {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare source path runs it.
            if has_source_extension(command) {
                run_file(&RunOptions {
                    path: Some(command.clone()),
                    max_depth: None,
                });
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn start_repl() {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let repl = Repl::new(gos_eval::stdout_handler());
    if let Err(e) = repl::start(stdin.lock(), &mut stdout, repl) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Gosling interpreter");
    println!();
    println!("Usage: gos <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.gos>       Run a Gosling program");
    println!("  parse <file.gos>     Parse and print the program");
    println!("  lex <file.gos>       Tokenize and print the tokens");
    println!("  repl                 Start the interactive prompt (default)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!(
        "  --max-depth=<n>      Maximum nested function calls (default: {})",
        gos_eval::DEFAULT_MAX_DEPTH
    );
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=gos_parse=trace) for diagnostic output.");
}
