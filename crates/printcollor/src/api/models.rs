//! Typed resource models.
//!
//! These mirror the backend's serializers. Model decimal fields arrive as
//! strings (`preco_base`, `preco_negociado`, `tamanho_cm`) and are kept as
//! strings; computed read-only fields (`valor_total`, `subtotal`) arrive as
//! numbers.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cliente {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
}

/// Payload for creating or patching a customer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NovoCliente {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
}

/// A catalogue product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Produto {
    pub id: i64,
    pub nome: String,
    pub preco_base: String,
}

/// Payload for creating or patching a product.
#[derive(Debug, Clone, Serialize)]
pub struct NovoProduto {
    pub nome: String,
    pub preco_base: String,
}

/// An issuing company. `template_id` selects the budget PDF template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Empresa {
    pub id: i64,
    pub template_id: i32,
    pub nome: String,
    pub cnpj: String,
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Payload for creating or patching a company.
#[derive(Debug, Clone, Serialize)]
pub struct NovaEmpresa {
    pub template_id: i32,
    pub nome: String,
    pub cnpj: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Access level of a back-office user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NivelAcesso {
    Vendedor,
    Financeiro,
}

/// A back-office user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub nivel_acesso: NivelAcesso,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Signup payload. The backend gates registration behind an invite code.
#[derive(Debug, Clone, Serialize)]
pub struct NovoUsuario {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
    pub nivel_acesso: NivelAcesso,
    pub codigo_convite: String,
}

/// A line item of a budget.
///
/// The product name is frozen at creation time so the line keeps rendering
/// after the product is deleted from the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemOrcamento {
    pub id: i64,
    #[serde(default)]
    pub produto: Option<i64>,
    #[serde(default)]
    pub produto_nome: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    pub quantidade: u32,
    pub preco_negociado: String,
    pub subtotal: f64,
}

/// A budget ("orçamento") with its nested line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orcamento {
    pub id: i64,
    pub empresa: i64,
    pub nome_empresa: String,
    pub cliente: i64,
    pub nome_cliente: String,
    pub data_criacao: DateTime<Utc>,
    pub itens: Vec<ItemOrcamento>,
    pub valor_total: f64,
}

/// Line item payload for [`NovoOrcamento`].
#[derive(Debug, Clone, Serialize)]
pub struct NovoItemOrcamento {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produto: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    pub quantidade: u32,
    pub preco_negociado: String,
}

/// Payload for creating or patching a budget.
///
/// On update the backend replaces the whole item set with the one posted.
#[derive(Debug, Clone, Serialize)]
pub struct NovoOrcamento {
    pub empresa: i64,
    pub cliente: i64,
    pub itens: Vec<NovoItemOrcamento>,
}

/// Print status of a DTF order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusImpressao {
    Pendente,
    Impresso,
}

/// A DTF (direct-to-film) print order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DtfPedido {
    pub id: i64,
    pub cliente: i64,
    pub nome_cliente: String,
    /// URL of the uploaded layout file.
    pub layout_arquivo: String,
    /// Linear centimetres of film.
    pub tamanho_cm: String,
    pub data_criacao: DateTime<Utc>,
    pub foi_impresso: StatusImpressao,
    pub esta_pago: bool,
    pub foi_entregue: bool,
    #[serde(default)]
    pub comprovante_pagamento: Option<String>,
    pub valor_total: f64,
}

/// Query filter for the DTF order list, driving the board's filter toggles.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DtfFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foi_impresso: Option<StatusImpressao>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esta_pago: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foi_entregue: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// A factory production order with its size grid (size label → quantity).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PedidoFabrica {
    pub id: i64,
    pub cliente: i64,
    #[serde(default)]
    pub nome_cliente: Option<String>,
    #[serde(default)]
    pub nome_descricao: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub aplicacao_arte: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub detalhes_tamanho: BTreeMap<String, u32>,
    #[serde(default)]
    pub data_entrega: Option<NaiveDate>,
    #[serde(default)]
    pub layout: Option<String>,
}

/// Payload for creating or patching a factory order. File upload is handled
/// elsewhere; this covers the JSON fields only.
#[derive(Debug, Clone, Serialize)]
pub struct NovoPedidoFabrica {
    pub cliente: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aplicacao_arte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub detalhes_tamanho: BTreeMap<String, u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_entrega: Option<NaiveDate>,
}

/// The authenticated user, as returned by `me/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMe {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub nivel_acesso: NivelAcesso,
    #[serde(default)]
    pub is_staff: bool,
}

/// Patch payload for `me/`. Access level and staff flag are read-only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserMeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Current-month dashboard figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_orcamento: i64,
    pub total_dtf_valor: f64,
    pub total_vendas_dtf: i64,
    pub metragem_dtf: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cliente_deserializes_with_missing_optionals() {
        let cliente: Cliente =
            serde_json::from_value(json!({"id": 3, "nome": "Yasmin"})).unwrap();
        assert_eq!(cliente.id, 3);
        assert!(cliente.cpf.is_none());
    }

    #[test]
    fn novo_cliente_omits_empty_fields() {
        let payload = NovoCliente {
            nome: "Yasmin".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, json!({"nome": "Yasmin"}));
    }

    #[test]
    fn dtf_filter_serializes_to_query_fields() {
        let filter = DtfFilter {
            foi_impresso: Some(StatusImpressao::Pendente),
            esta_pago: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json, json!({"foi_impresso": "pendente", "esta_pago": false}));
    }

    #[test]
    fn orcamento_round_trip() {
        let body = json!({
            "id": 7,
            "empresa": 1,
            "nome_empresa": "YasPrint",
            "cliente": 3,
            "nome_cliente": "Yasmin",
            "data_criacao": "2026-02-11T14:30:00Z",
            "itens": [{
                "id": 12,
                "produto": null,
                "produto_nome": "Camiseta Gola V",
                "descricao": "Estampa frente",
                "quantidade": 10,
                "preco_negociado": "25.00",
                "subtotal": 250.0
            }],
            "valor_total": 250.0
        });
        let orcamento: Orcamento = serde_json::from_value(body).unwrap();
        assert_eq!(orcamento.itens.len(), 1);
        assert_eq!(
            orcamento.itens[0].produto_nome.as_deref(),
            Some("Camiseta Gola V")
        );
        assert_eq!(orcamento.valor_total, 250.0);
    }

    #[test]
    fn nivel_acesso_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_value(NivelAcesso::Financeiro).unwrap(),
            json!("financeiro")
        );
    }
}
