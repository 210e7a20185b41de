use anyhow::{Context, Result};
use tracing::{Instrument, info_span, trace};

use listkit_ingest::{IngestOptions, header_aliases, parse_file_with};
use listkit_model::ParseResult;

use crate::cli::ParseArgs;
use listkit_cli::logging::redact_value;
use listkit_cli::summary::alias_table;

pub fn run_aliases() {
    println!("{}", alias_table(&header_aliases()));
}

pub async fn run_parse(args: &ParseArgs) -> ParseResult {
    let options = IngestOptions::new().with_max_file_size(args.max_file_size);
    let span = info_span!("parse_command", file = %args.file.display());
    let result = parse_file_with(&args.file, options).instrument(span).await;

    for contact in result.preview(args.preview) {
        trace!(
            email = redact_value(contact.email.as_deref().unwrap_or_default()),
            name = redact_value(contact.name.as_deref().unwrap_or_default()),
            "accepted contact"
        );
    }
    result
}

pub fn print_json(result: &ParseResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serialize parse result")?;
    println!("{json}");
    Ok(())
}
