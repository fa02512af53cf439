use crate::domain::*;
use chrono::NaiveDate;
use log::warn;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

pub mod cep;
pub mod error;

pub use error::ApiError;

/// Cliente da API da Garagem do Lanche.
///
/// Um método por operação do backend; todos passam pelo mesmo primitivo de
/// requisição (`execute`), que normaliza erro e logging. O cookie de sessão
/// da cozinha fica no cookie store do `reqwest` e acompanha toda requisição.
#[derive(Clone)]
pub struct GaragemClient {
    client: Client,
    base_url: String,
}

// ==================================================
// CONSTRUTOR + PRIMITIVO DE REQUISIÇÃO
// ==================================================
impl GaragemClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        montar_url(&self.base_url, path, query).map_err(|e| ApiError::Transport(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_com_query(path, &[]).await
    }

    async fn get_com_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path, query)?;
        self.execute(self.client.get(url), path).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path, &[])?;
        self.execute(self.client.post(url).json(body), path).await
    }

    async fn post_vazio<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path, &[])?;
        self.execute(self.client.post(url), path).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path, &[])?;
        self.execute(self.client.put(url).json(body), path).await
    }

    /// Toda falha é logada (endpoint + erro) antes de propagar.
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        match enviar(req).await {
            Ok(valor) => Ok(valor),
            Err(e) => {
                crate::logging::log_falha_api(endpoint, &e.to_string());
                Err(e)
            }
        }
    }
}

async fn enviar<T: DeserializeOwned>(req: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let response = req
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response.text().await.map_err(ApiError::from)?;

    if !status.is_success() {
        return Err(mapear_falha(status.as_u16(), &body));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Status não-2xx: usa o campo `error` do backend quando houver,
/// senão "HTTP <status>".
fn mapear_falha(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {}", status));
    ApiError::Response { status, message }
}

/// Concatena base + caminho e anexa a query string, omitindo-a quando vazia.
fn montar_url(base: &str, path: &str, query: &[(&str, String)]) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("{}{}", base, path))?;
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
}

// ==================================================
// CARDÁPIO
// ==================================================
impl GaragemClient {
    pub async fn get_cardapio(&self) -> Result<CardapioResponse, ApiError> {
        self.get("/cardapio").await
    }

    pub async fn get_prato(&self, id: u32) -> Result<PratoResponse, ApiError> {
        self.get(&format!("/cardapio/{}", id)).await
    }

    pub async fn get_acompanhamentos(&self) -> Result<AcompanhamentosResponse, ApiError> {
        self.get("/acompanhamentos").await
    }
}

// ==================================================
// PEDIDOS
// ==================================================
impl GaragemClient {
    pub async fn criar_pedido(&self, pedido: &NovoPedido) -> Result<PedidoResponse, ApiError> {
        self.post("/pedidos", pedido).await
    }

    pub async fn listar_pedidos(&self, filtro: &PedidoFiltro) -> Result<PedidosResponse, ApiError> {
        self.get_com_query("/pedidos", &filtro.query_pairs()).await
    }

    pub async fn get_pedido(&self, id: u32) -> Result<PedidoResponse, ApiError> {
        self.get(&format!("/pedidos/{}", id)).await
    }

    pub async fn atualizar_status_pedido(
        &self,
        id: u32,
        status: StatusPedido,
    ) -> Result<PedidoResponse, ApiError> {
        self.put(
            &format!("/pedidos/{}/status", id),
            &serde_json::json!({ "status": status }),
        )
        .await
    }

    /// Fila da cozinha: pedidos aceitos e em preparo.
    pub async fn get_pedidos_cozinha(&self) -> Result<PedidosResponse, ApiError> {
        self.get("/pedidos/cozinha").await
    }
}

// ==================================================
// CAIXA
// ==================================================
impl GaragemClient {
    pub async fn get_relatorio_caixa(
        &self,
        data_inicio: Option<NaiveDate>,
        data_fim: Option<NaiveDate>,
    ) -> Result<RelatorioResponse, ApiError> {
        let mut query = Vec::new();
        if let Some(inicio) = data_inicio {
            query.push(("data_inicio", inicio.to_string()));
        }
        if let Some(fim) = data_fim {
            query.push(("data_fim", fim.to_string()));
        }
        self.get_com_query("/caixa/relatorio", &query).await
    }

    pub async fn get_dashboard_caixa(&self) -> Result<DashboardResponse, ApiError> {
        self.get("/caixa/dashboard").await
    }

    pub async fn criar_movimentacao(
        &self,
        movimentacao: &NovaMovimentacao,
    ) -> Result<MovimentacaoResponse, ApiError> {
        self.post("/caixa/movimentacao", movimentacao).await
    }
}

// ==================================================
// AUTENTICAÇÃO
// ==================================================
impl GaragemClient {
    pub async fn login(&self, senha: &str) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", &serde_json::json!({ "senha": senha }))
            .await
    }

    pub async fn logout(&self) -> Result<AuthResponse, ApiError> {
        self.post_vazio("/auth/logout").await
    }

    pub async fn check_auth(&self) -> Result<AuthResponse, ApiError> {
        self.get("/auth/check").await
    }
}

// ==================================================
// UTILITÁRIOS
// ==================================================
impl GaragemClient {
    pub async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        self.get("/health").await
    }

    pub async fn get_api_info(&self) -> Result<ApiInfo, ApiError> {
        self.get("/info").await
    }
}

// ==================================================
// HELPERS DE PÁGINA
// ==================================================
// Páginas que só exibem dados degradam para vazio/None; o envio de pedido
// propaga a falha para a interface alertar o usuário.

pub async fn carregar_cardapio(api: &GaragemClient) -> Vec<Prato> {
    match api.get_cardapio().await {
        Ok(resp) => resp.pratos,
        Err(e) => {
            warn!("Erro ao carregar cardápio: {}", e);
            Vec::new()
        }
    }
}

pub async fn carregar_acompanhamentos(api: &GaragemClient) -> Vec<Acompanhamento> {
    match api.get_acompanhamentos().await {
        Ok(resp) => resp.acompanhamentos,
        Err(e) => {
            warn!("Erro ao carregar acompanhamentos: {}", e);
            Vec::new()
        }
    }
}

pub async fn enviar_pedido(api: &GaragemClient, pedido: &NovoPedido) -> Result<Pedido, ApiError> {
    let resp = api.criar_pedido(pedido).await?;
    Ok(resp.pedido)
}

pub async fn verificar_status_pedido(api: &GaragemClient, pedido_id: u32) -> Option<Pedido> {
    match api.get_pedido(pedido_id).await {
        Ok(resp) => Some(resp.pedido),
        Err(e) => {
            warn!("Erro ao verificar status do pedido: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falha_usa_campo_error_do_backend() {
        let err = mapear_falha(400, r#"{"error":"Invalid payload"}"#);
        assert_eq!(err.to_string(), "Invalid payload");
    }

    #[test]
    fn falha_com_corpo_vazio_vira_http_status() {
        let err = mapear_falha(400, "");
        assert_eq!(err.to_string(), "HTTP 400");
        let err = mapear_falha(503, "upstream indisponível");
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn falha_preserva_o_status() {
        let err = mapear_falha(401, r#"{"error":"Senha incorreta"}"#);
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn url_sem_filtros_nao_tem_query_string() {
        let url = montar_url("http://localhost:5000/api", "/pedidos", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/pedidos");
        assert!(url.query().is_none());
    }

    #[test]
    fn url_com_filtro_de_status() {
        let filtro = PedidoFiltro {
            status: Some(StatusPedido::Preparo),
            ..Default::default()
        };
        let url = montar_url(
            "http://localhost:5000/api",
            "/pedidos",
            &filtro.query_pairs(),
        )
        .unwrap();
        assert_eq!(url.query(), Some("status=preparo"));
    }

    #[test]
    fn url_com_intervalo_de_datas() {
        let query = vec![
            ("data_inicio", "2024-01-01".to_string()),
            ("data_fim", "2024-01-31".to_string()),
        ];
        let url = montar_url("http://localhost:5000/api", "/caixa/relatorio", &query).unwrap();
        assert_eq!(url.query(), Some("data_inicio=2024-01-01&data_fim=2024-01-31"));
    }
}
