//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use promptstudio_sdk::{DesignClient, Extraction, GenerationSession};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Execute the generate command.
pub async fn execute_generate<C: DesignClient>(
    args: GenerateArgs,
    session: &mut GenerationSession<C>,
    formatter: &Formatter,
) -> Result<()> {
    let requirement = read_requirement(&args)?;

    let outcome = session
        .generate(&requirement)
        .await?
        .ok_or_else(|| CliError::InvalidInput("Requirement is empty".to_string()))?;

    if args.show_review {
        eprintln!("{}", formatter.review(&outcome.design.review));
    }

    print_extraction(&outcome.extraction, formatter)?;

    if let Some(path) = args.output {
        save_prompt(&path, session.copy_text())?;
        eprintln!("{}", formatter.prompt_saved(&path));
    }

    Ok(())
}

/// Print an extraction in the formatter's format.
pub fn print_extraction(extraction: &Extraction, formatter: &Formatter) -> Result<()> {
    // Quiet mode prints nothing at all for an empty prompt
    if formatter.format() == OutputFormat::Quiet && extraction.is_empty() {
        return Ok(());
    }
    println!("{}", formatter.format_extraction(extraction)?);
    Ok(())
}

/// Write the prompt to `path`.
///
/// Fails when there is no prompt to write, mirroring a disabled copy action.
pub fn save_prompt(path: &Path, prompt: Option<&str>) -> Result<()> {
    let prompt = prompt.ok_or_else(|| {
        CliError::InvalidInput("No prompt to save: the review contained no prompt text".to_string())
    })?;
    fs::write(path, prompt)?;
    Ok(())
}

fn read_requirement(args: &GenerateArgs) -> Result<String> {
    if args.stdin {
        let mut requirement = String::new();
        std::io::stdin().read_to_string(&mut requirement)?;
        return Ok(requirement);
    }

    if args.requirement.is_empty() {
        return Err(CliError::InvalidInput(
            "Provide a requirement or pass --stdin".to_string(),
        ));
    }
    Ok(args.requirement.join(" "))
}
