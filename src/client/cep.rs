use log::warn;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::error::ApiError;

/// Resposta do ViaCEP usada para preencher o formulário de entrega.
#[derive(Debug, Clone, Deserialize)]
pub struct EnderecoCep {
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    pub erro: bool,
}

pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Busca o endereço de um CEP. `Ok(None)` quando o CEP é malformado ou
    /// desconhecido do serviço (o formulário segue em branco, sem erro).
    pub async fn buscar(&self, cep: &str) -> Result<Option<EnderecoCep>, ApiError> {
        let Some(cep) = normalizar_cep(cep) else {
            return Ok(None);
        };

        let url = format!("{}/ws/{}/json/", self.base_url, cep);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let endereco: EnderecoCep = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if endereco.erro {
            warn!("CEP {} não encontrado no ViaCEP", cep);
            return Ok(None);
        }

        Ok(Some(endereco))
    }
}

/// Remove tudo que não for dígito; só CEPs com 8 dígitos são consultados.
pub fn normalizar_cep(cep: &str) -> Option<String> {
    let digitos: String = cep.chars().filter(|c| c.is_ascii_digit()).collect();
    if digitos.len() == 8 {
        Some(digitos)
    } else {
        None
    }
}
