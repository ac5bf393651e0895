//! Whoami command implementation.

use anyhow::{Context, Result};

use printcollor::api::NivelAcesso;

use crate::output;
use crate::session;

pub async fn run(api_url: Option<String>) -> Result<()> {
    let client = session::load_client(api_url)?;

    let result = client.me().await;
    session::warn_if_terminated(&client);
    let me = result.context("Failed to fetch profile")?;

    output::field("User", &me.username);
    let nome = format!("{} {}", me.first_name, me.last_name)
        .trim()
        .to_string();
    if !nome.is_empty() {
        output::field("Name", &nome);
    }
    if !me.email.is_empty() {
        output::field("Email", &me.email);
    }
    output::field(
        "Access level",
        match me.nivel_acesso {
            NivelAcesso::Vendedor => "vendedor",
            NivelAcesso::Financeiro => "financeiro",
        },
    );
    if me.is_staff {
        output::field("Staff", "yes");
    }

    Ok(())
}
