//! Create command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

use super::Resource;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Resource to create
    #[arg(value_enum)]
    pub resource: Resource,

    /// Item body as a JSON object
    #[arg(long)]
    pub json: String,
}

pub async fn run(args: CreateArgs, api_url: Option<String>) -> Result<()> {
    let body: serde_json::Value =
        serde_json::from_str(&args.json).context("Invalid JSON body")?;

    let client = session::load_client(api_url)?;
    let collection = client.collection::<serde_json::Value>(args.resource.path());

    let result = collection.create(&body).await;
    session::warn_if_terminated(&client);

    let created = result
        .with_context(|| format!("Failed to create {}", args.resource.name()))?;
    output::json_pretty(&created)?;
    output::success(&format!("Created {}", args.resource.name()));

    Ok(())
}
