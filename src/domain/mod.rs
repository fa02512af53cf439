use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod pedido;

pub use pedido::{FormaPagamento, NovoPedido, Pedido, PedidoFiltro, StatusPedido};

// ==================================================
// CARDÁPIO
// ==================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prato {
    pub id: u32,
    pub nome: String,
    pub preco: Decimal,
    pub descricao: Option<String>,
    pub ativo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acompanhamento {
    pub id: u32,
    pub nome: String,
    pub icone: Option<String>,
    pub ativo: bool,
}

// ==================================================
// CLIENTE + ENDEREÇO
// ==================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cliente {
    pub id: u32,
    pub nome: String,
    pub telefone: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endereco {
    pub id: u32,
    pub cep: Option<String>,
    pub rua: String,
    pub numero: String,
    pub bairro: String,
    pub complemento: Option<String>,
    pub taxa_entrega: Decimal,
}

// ==================================================
// CAIXA
// ==================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movimentacao {
    pub id: u32,
    pub pedido_id: Option<u32>,
    pub tipo: String,
    pub valor: Decimal,
    pub descricao: Option<String>,
    pub created_at: Option<String>,
}

/// Corpo do POST /caixa/movimentacao. O backend espera `valor` numérico.
#[derive(Debug, Clone, Serialize)]
pub struct NovaMovimentacao {
    pub tipo: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    pub descricao: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pedido_id: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeriodoRelatorio {
    pub inicio: String,
    pub fim: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumoCaixa {
    pub total_entradas: Decimal,
    pub total_saidas: Decimal,
    pub total_fiados: Decimal,
    pub saldo: Decimal,
    pub total_pedidos: u32,
    pub ticket_medio: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelatorioCaixa {
    pub periodo: PeriodoRelatorio,
    pub resumo: ResumoCaixa,
    pub movimentacoes: Vec<Movimentacao>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VendaDia {
    pub data: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardCaixa {
    pub vendas_hoje: Decimal,
    pub pedidos_hoje: u32,
    pub fiados_pendentes: Decimal,
    pub ticket_medio_hoje: Decimal,
    #[serde(default)]
    pub vendas_semana: Vec<VendaDia>,
}

// ==================================================
// ENVELOPES DE RESPOSTA
// ==================================================
// O backend embrulha toda resposta em {"success": ..., <payload>}.

#[derive(Debug, Clone, Deserialize)]
pub struct CardapioResponse {
    pub success: bool,
    pub pratos: Vec<Prato>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PratoResponse {
    pub success: bool,
    pub prato: Prato,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AcompanhamentosResponse {
    pub success: bool,
    pub acompanhamentos: Vec<Acompanhamento>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PedidoResponse {
    pub success: bool,
    pub pedido: Pedido,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PedidosResponse {
    pub success: bool,
    pub pedidos: Vec<Pedido>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelatorioResponse {
    pub success: bool,
    pub relatorio: RelatorioCaixa,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub dashboard: DashboardCaixa,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovimentacaoResponse {
    pub success: bool,
    pub movimentacao: Movimentacao,
}

// ==================================================
// AUTENTICAÇÃO
// ==================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: Option<String>,
    #[serde(default)]
    pub authenticated: bool,
}

// ==================================================
// UTILITÁRIOS
// ==================================================

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiInfo {
    pub success: bool,
    pub api: String,
    pub version: String,
    #[serde(default)]
    pub endpoints: std::collections::BTreeMap<String, String>,
}
