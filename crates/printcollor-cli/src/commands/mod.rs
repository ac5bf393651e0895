//! Command implementations.

mod change_password;
mod create;
mod dashboard;
mod delete;
mod get;
mod list;
mod login;
mod logout;
mod pdf;
mod update;
mod whoami;

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

use printcollor::api::paths;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login(login::LoginArgs),

    /// Clear the stored session
    Logout,

    /// Display the authenticated user
    Whoami,

    /// Show current-month dashboard figures
    Dashboard,

    /// Change the authenticated user's password
    ChangePassword(change_password::ChangePasswordArgs),

    /// List items of a resource
    List(list::ListArgs),

    /// Fetch a single item
    Get(get::GetArgs),

    /// Create an item from raw JSON
    Create(create::CreateArgs),

    /// Patch an item with raw JSON
    Update(update::UpdateArgs),

    /// Delete an item
    Delete(delete::DeleteArgs),

    /// Download the generated PDF for an item
    Pdf(pdf::PdfArgs),
}

/// Backend resources addressable from the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Resource {
    Clientes,
    Produtos,
    Empresas,
    Usuarios,
    Orcamentos,
    Dtf,
    Pedidos,
}

impl Resource {
    /// The resource's path under the backend base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Clientes => paths::CLIENTES,
            Resource::Produtos => paths::PRODUTOS,
            Resource::Empresas => paths::EMPRESAS,
            Resource::Usuarios => paths::USUARIOS,
            Resource::Orcamentos => paths::ORCAMENTOS,
            Resource::Dtf => paths::DTF,
            Resource::Pedidos => paths::PEDIDOS,
        }
    }

    /// The bare resource name, for filenames and messages.
    pub fn name(self) -> &'static str {
        self.path().trim_end_matches('/')
    }
}

pub async fn handle(cmd: Commands, api_url: Option<String>) -> Result<()> {
    match cmd {
        Commands::Login(args) => login::run(args, api_url).await,
        Commands::Logout => logout::run().await,
        Commands::Whoami => whoami::run(api_url).await,
        Commands::Dashboard => dashboard::run(api_url).await,
        Commands::ChangePassword(args) => change_password::run(args, api_url).await,
        Commands::List(args) => list::run(args, api_url).await,
        Commands::Get(args) => get::run(args, api_url).await,
        Commands::Create(args) => create::run(args, api_url).await,
        Commands::Update(args) => update::run(args, api_url).await,
        Commands::Delete(args) => delete::run(args, api_url).await,
        Commands::Pdf(args) => pdf::run(args, api_url).await,
    }
}
