//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::print_extraction;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use promptstudio_sdk::{Extraction, Extractor};
use std::fs;
use std::io::Read;

/// Execute the extract command.
pub fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    marker: Option<&str>,
    formatter: &Formatter,
) -> Result<()> {
    let review = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut review = String::new();
            std::io::stdin().read_to_string(&mut review)?;
            review
        }
    };

    let extraction = extract_review(&review, config, marker)?;
    print_extraction(&extraction, formatter)
}

fn extract_review(review: &str, config: &Config, marker: Option<&str>) -> Result<Extraction> {
    let extractor = Extractor::new(config.extractor_config(marker))?;
    Ok(extractor.extract(review))
}
