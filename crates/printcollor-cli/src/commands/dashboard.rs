//! Dashboard command implementation.

use anyhow::{Context, Result};

use crate::output;
use crate::session;

pub async fn run(api_url: Option<String>) -> Result<()> {
    let client = session::load_client(api_url)?;

    let result = client.dashboard().await;
    session::warn_if_terminated(&client);
    let stats = result.context("Failed to fetch dashboard stats")?;

    output::field("Orçamentos (month)", &stats.total_orcamento.to_string());
    output::field("DTF orders (month)", &stats.total_vendas_dtf.to_string());
    output::field("DTF revenue", &format!("R$ {:.2}", stats.total_dtf_valor));
    output::field("DTF footage", &format!("{:.1} cm", stats.metragem_dtf));

    Ok(())
}
