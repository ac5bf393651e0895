//! Change-password command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ChangePasswordArgs {
    /// Current password
    #[arg(long)]
    pub current: String,

    /// New password
    #[arg(long)]
    pub new: String,
}

pub async fn run(args: ChangePasswordArgs, api_url: Option<String>) -> Result<()> {
    let client = session::load_client(api_url)?;

    let result = client.change_password(&args.current, &args.new).await;
    session::warn_if_terminated(&client);
    result.context("Failed to change password")?;

    output::success("Password changed");
    Ok(())
}
