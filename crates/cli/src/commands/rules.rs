//! List the rule catalog

use anyhow::Result;
use sqlaudit_core::report::{html, render_listing};
use sqlaudit_core::{builtin, ListingFormat};

use crate::OutputFormat;

pub fn listing_format(format: Option<OutputFormat>) -> ListingFormat {
    match format {
        Some(OutputFormat::Json) => ListingFormat::Json,
        _ => ListingFormat::Markdown,
    }
}

pub fn run(cli: &crate::Cli) -> Result<()> {
    let catalog = builtin::catalog()?;
    let listing = render_listing(&catalog, listing_format(cli.format));
    if cli.format == Some(OutputFormat::Html) {
        println!("{}", html::page("sqlaudit rules", &[html::render(&listing)]));
    } else {
        println!("{}", listing);
    }
    Ok(())
}
