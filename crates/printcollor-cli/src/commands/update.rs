//! Update command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

use super::Resource;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Resource to update
    #[arg(value_enum)]
    pub resource: Resource,

    /// Item id
    pub id: i64,

    /// Fields to change as a JSON object (partial update)
    #[arg(long)]
    pub json: String,
}

pub async fn run(args: UpdateArgs, api_url: Option<String>) -> Result<()> {
    let body: serde_json::Value =
        serde_json::from_str(&args.json).context("Invalid JSON body")?;

    let client = session::load_client(api_url)?;
    let collection = client.collection::<serde_json::Value>(args.resource.path());

    let result = collection.update(args.id, &body).await;
    session::warn_if_terminated(&client);

    let updated = result
        .with_context(|| format!("Failed to update {} {}", args.resource.name(), args.id))?;
    output::json_pretty(&updated)?;
    output::success(&format!("Updated {} {}", args.resource.name(), args.id));

    Ok(())
}
