//! PDF download command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

use super::Resource;

#[derive(Args, Debug)]
pub struct PdfArgs {
    /// Resource to download the PDF for
    #[arg(value_enum)]
    pub resource: Resource,

    /// Item id
    pub id: i64,

    /// Output file path (defaults to <resource>_<id>.pdf)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub async fn run(args: PdfArgs, api_url: Option<String>) -> Result<()> {
    let client = session::load_client(api_url)?;
    let collection = client.collection::<serde_json::Value>(args.resource.path());

    let result = collection.download_pdf(args.id).await;
    session::warn_if_terminated(&client);

    let bytes = result.with_context(|| {
        format!("Failed to download PDF for {} {}", args.resource.name(), args.id)
    })?;

    let path = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}_{}.pdf", args.resource.name(), args.id)));
    std::fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    output::success(&format!("Saved {}", path.display()));
    Ok(())
}
