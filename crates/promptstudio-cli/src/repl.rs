//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands::{print_extraction, save_prompt};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use promptstudio_sdk::{DesignClient, GenerationSession};
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::path::PathBuf;
use tracing::debug;

/// Run the interactive REPL.
///
/// Line history lives in memory only and is gone when the REPL exits.
pub async fn run_repl<C: DesignClient>(
    session: &mut GenerationSession<C>,
    formatter: &Formatter,
    history_size: usize,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("Prompt Studio REPL - Type a requirement, 'help' for commands, 'exit' to quit")
    );
    println!();

    let editor_config = EditorConfig::builder()
        .max_history_size(history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    let mut show_review = false;

    loop {
        let prompt = format!("promptstudio [{}]> ", session.state().label());

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Generate(requirement)) => {
                        generate(session, formatter, &requirement, show_review).await;
                    }
                    Ok(ReplCommand::Copy(path)) => {
                        match save_prompt(&path, session.copy_text()) {
                            Ok(()) => println!("{}", formatter.prompt_saved(&path)),
                            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                        }
                    }
                    Ok(ReplCommand::Clear) => {
                        session.clear();
                        println!("{}", formatter.info("Cleared"));
                    }
                    Ok(ReplCommand::Status) => {
                        println!("{}", formatter.state(session.state()));
                    }
                    Ok(ReplCommand::Review) => {
                        show_review = !show_review;
                        let status = if show_review { "on" } else { "off" };
                        println!("{}", formatter.info(&format!("Review display {}", status)));
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    Ok(())
}

/// Run one generation, cancellable with Ctrl-C.
async fn generate<C: DesignClient>(
    session: &mut GenerationSession<C>,
    formatter: &Formatter,
    requirement: &str,
    show_review: bool,
) {
    println!("{}", formatter.info("Generating... (Ctrl-C to cancel)"));

    let result = tokio::select! {
        result = session.generate(requirement) => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    };

    match result {
        Some(Ok(Some(outcome))) => {
            if show_review {
                println!("{}", formatter.review(&outcome.design.review));
            }
            if let Err(e) = print_extraction(&outcome.extraction, formatter) {
                eprintln!("{}", formatter.error(&e.to_string()));
            }
        }
        Some(Ok(None)) => {}
        Some(Err(e)) => {
            eprintln!("{}", formatter.error(&CliError::from(e).to_string()));
        }
        None => {
            // The dropped request leaves the session in flight
            debug!("Generation cancelled");
            session.clear();
            println!("{}", formatter.warning("Request cancelled"));
        }
    }
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Generate(String),
    Copy(PathBuf),
    Clear,
    Status,
    Review,
}

/// Parse a REPL command line.
///
/// Anything that is not a command word is a requirement.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "" => Err(CliError::InvalidInput("Empty command".to_string())),
        "exit" | "quit" | "q" if rest.is_empty() => Ok(ReplCommand::Exit),
        "help" | "?" if rest.is_empty() => Ok(ReplCommand::Help),
        "clear" if rest.is_empty() => Ok(ReplCommand::Clear),
        "status" if rest.is_empty() => Ok(ReplCommand::Status),
        "review" if rest.is_empty() => Ok(ReplCommand::Review),
        "gen" | "generate" => {
            if rest.is_empty() {
                Err(CliError::InvalidInput("Usage: gen <requirement>".to_string()))
            } else {
                Ok(ReplCommand::Generate(rest.to_string()))
            }
        }
        "copy" => {
            if rest.is_empty() {
                Err(CliError::InvalidInput("Usage: copy <file>".to_string()))
            } else {
                Ok(ReplCommand::Copy(PathBuf::from(rest)))
            }
        }
        _ => Ok(ReplCommand::Generate(line.to_string())),
    }
}

/// Print REPL help.
fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <requirement>           Generate a prompt for the requirement");
    println!("  gen <requirement>       Same, for text that starts with a command word");
    println!("  copy <file>             Write the current prompt to a file");
    println!("  clear                   Discard the current result or error");
    println!("  status                  Show the session state");
    println!("  review                  Toggle printing the full review");
    println!("  help, ?                 Show this help message");
    println!("  exit, quit, q           Exit the REPL");
    println!();
}
