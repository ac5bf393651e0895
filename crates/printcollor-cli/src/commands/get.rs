//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

use super::Resource;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Resource to read
    #[arg(value_enum)]
    pub resource: Resource,

    /// Item id
    pub id: i64,
}

pub async fn run(args: GetArgs, api_url: Option<String>) -> Result<()> {
    let client = session::load_client(api_url)?;
    let collection = client.collection::<serde_json::Value>(args.resource.path());

    let result = collection.retrieve(args.id).await;
    session::warn_if_terminated(&client);

    let item = result
        .with_context(|| format!("Failed to fetch {} {}", args.resource.name(), args.id))?;
    output::json_pretty(&item)?;

    Ok(())
}
