//! Typed access to the backend's resources.

mod account;
mod collection;
mod models;

pub use collection::Collection;
pub use models::{
    Cliente, DashboardStats, DtfFilter, DtfPedido, Empresa, ItemOrcamento, NivelAcesso,
    NovaEmpresa, NovoCliente, NovoItemOrcamento, NovoOrcamento, NovoPedidoFabrica, NovoProduto,
    NovoUsuario, Orcamento, PedidoFabrica, Produto, StatusImpressao, UserMe, UserMeUpdate, Usuario,
};

use serde::de::DeserializeOwned;

use crate::http::ApiClient;

/// Resource paths under the backend base URL.
pub mod paths {
    pub const CLIENTES: &str = "clientes/";
    pub const PRODUTOS: &str = "produtos/";
    pub const EMPRESAS: &str = "empresas/";
    pub const USUARIOS: &str = "usuarios/";
    pub const ORCAMENTOS: &str = "orcamentos/";
    pub const DTF: &str = "dtf/";
    pub const PEDIDOS: &str = "pedidos/";
    pub const ME: &str = "me/";
    pub const DASHBOARD: &str = "dashboard/";
    pub const CHANGE_PASSWORD: &str = "change-password/";
}

impl ApiClient {
    /// Customers.
    pub fn clientes(&self) -> Collection<'_, Cliente> {
        Collection::new(self, paths::CLIENTES)
    }

    /// Catalogue products.
    pub fn produtos(&self) -> Collection<'_, Produto> {
        Collection::new(self, paths::PRODUTOS)
    }

    /// Issuing companies.
    pub fn empresas(&self) -> Collection<'_, Empresa> {
        Collection::new(self, paths::EMPRESAS)
    }

    /// Back-office users.
    pub fn usuarios(&self) -> Collection<'_, Usuario> {
        Collection::new(self, paths::USUARIOS)
    }

    /// Budgets.
    pub fn orcamentos(&self) -> Collection<'_, Orcamento> {
        Collection::new(self, paths::ORCAMENTOS)
    }

    /// DTF print orders.
    pub fn dtf(&self) -> Collection<'_, DtfPedido> {
        Collection::new(self, paths::DTF)
    }

    /// Factory production orders.
    pub fn pedidos(&self) -> Collection<'_, PedidoFabrica> {
        Collection::new(self, paths::PEDIDOS)
    }

    /// Untyped handle to any resource path, deserializing into `T`.
    ///
    /// Used with [`serde_json::Value`] when the caller works with raw JSON
    /// (the CLI's generic commands do).
    pub fn collection<T: DeserializeOwned>(&self, path: &'static str) -> Collection<'_, T> {
        Collection::new(self, path)
    }
}
