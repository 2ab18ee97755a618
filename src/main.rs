//! CLI entry point for kataribe.
//!
//! Provides the interactive terminal player and a lint-only check mode.

use kataribe::config::EngineConfig;
use kataribe::script::Script;
use std::fs;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "play" => {
            if args.len() < 3 {
                eprintln!("Error: Missing script file path");
                eprintln!();
                print_usage();
                process::exit(1);
            }
            let script = load_script(PathBuf::from(&args[2]));
            if let Err(err) = kataribe::cli::play::run_play(script, EngineConfig::default()).await {
                eprintln!("Error: Player mode failed");
                eprintln!("Reason: {err}");
                process::exit(1);
            }
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Error: Missing script file path");
                process::exit(1);
            }
            let script = load_script(PathBuf::from(&args[2]));
            let warnings = script.lint();
            for warning in &warnings {
                println!("warning: {warning}");
            }
            println!("{} lines, {} warnings", script.len(), warnings.len());
        }
        "--help" | "-h" => {
            print_usage();
        }
        other => {
            eprintln!("Error: Unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("kataribe - dialogue presentation engine");
    println!();
    println!("USAGE:");
    println!("    kataribe <COMMAND> <script.json>");
    println!();
    println!("COMMANDS:");
    println!("    play <file>     Play a script in the terminal");
    println!("    check <file>    Lint a script and exit");
    println!("    --help, -h      Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    kataribe play scripts/demo.json");
    println!("    kataribe check scripts/demo.json");
}

fn load_script(path: PathBuf) -> Script {
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("Error: Failed to read file '{}'", path.display());
            eprintln!("Reason: {err}");
            process::exit(1);
        }
    };
    match Script::from_json(&content) {
        Ok(script) => script,
        Err(err) => {
            eprintln!("Error: Failed to parse script '{}'", path.display());
            eprintln!("Reason: {err}");
            process::exit(1);
        }
    }
}
