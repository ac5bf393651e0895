//! Login command implementation.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use printcollor::{ApiClient, ApiUrl, Credentials};

use crate::output;
use crate::session::{self, FileStore};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username to authenticate with
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, api_url: Option<String>) -> Result<()> {
    let store = FileStore::open_default()?;
    let url = session::resolve_api_url(api_url, &store)?;
    let base = ApiUrl::new(&url).context("Invalid API URL")?;

    // Remember the base URL so later commands can omit it
    store.set_api_url(base.as_str());

    let client = ApiClient::with_store(base.clone(), Arc::new(store));
    let credentials = Credentials::new(&args.username, &args.password);

    eprintln!("{}", "Logging in...".dimmed());
    client.login(&credentials).await.context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("User", &args.username);
    output::field("API", base.as_str());

    Ok(())
}
