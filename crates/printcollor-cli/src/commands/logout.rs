//! Logout command implementation.

use anyhow::Result;

use printcollor::TokenStore;

use crate::output;
use crate::session::FileStore;

pub async fn run() -> Result<()> {
    let store = FileStore::open_default()?;
    store.clear();

    output::success("Session cleared");
    Ok(())
}
