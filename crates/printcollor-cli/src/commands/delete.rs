//! Delete command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

use super::Resource;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Resource to delete from
    #[arg(value_enum)]
    pub resource: Resource,

    /// Item id
    pub id: i64,
}

pub async fn run(args: DeleteArgs, api_url: Option<String>) -> Result<()> {
    let client = session::load_client(api_url)?;
    let collection = client.collection::<serde_json::Value>(args.resource.path());

    let result = collection.delete(args.id).await;
    session::warn_if_terminated(&client);

    result.with_context(|| format!("Failed to delete {} {}", args.resource.name(), args.id))?;
    output::success(&format!("Deleted {} {}", args.resource.name(), args.id));

    Ok(())
}
