//! List command implementation.

use anyhow::{Context, Result, anyhow};
use clap::Args;

use crate::output;
use crate::session;

use super::Resource;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Resource to list
    #[arg(value_enum)]
    pub resource: Resource,

    /// Query filter as KEY=VALUE (repeatable, e.g. --query esta_pago=false)
    #[arg(long = "query", value_name = "KEY=VALUE")]
    pub query: Vec<String>,
}

pub async fn run(args: ListArgs, api_url: Option<String>) -> Result<()> {
    let client = session::load_client(api_url)?;
    let collection = client.collection::<serde_json::Value>(args.resource.path());

    let query = parse_query(&args.query)?;
    let result = if query.is_empty() {
        collection.list().await
    } else {
        collection.list_with(&query).await
    };
    session::warn_if_terminated(&client);

    let items = result.with_context(|| format!("Failed to list {}", args.resource.name()))?;
    output::json_pretty(&items)?;

    Ok(())
}

fn parse_query(pairs: &[String]) -> Result<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| anyhow!("invalid query pair '{pair}', expected KEY=VALUE"))
        })
        .collect()
}
