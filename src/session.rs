use anyhow::{bail, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::StatusPedido;

pub const VERSAO_SESSAO: u32 = 1;

/// Estado do fluxo de pedido compartilhado entre os comandos, com esquema
/// explícito e versionado. Campo ausente no arquivo é lido como
/// vazio/padrão.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sessao {
    #[serde(default = "versao_atual")]
    pub schema_version: u32,

    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,

    #[serde(default)]
    pub prato_selecionado: Option<String>,
    #[serde(default)]
    pub preco_selecionado: Option<Decimal>,
    #[serde(default)]
    pub acompanhamento: Option<String>,

    #[serde(default)]
    pub rua: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub complemento: Option<String>,

    #[serde(default)]
    pub pagamento: Option<String>,
    #[serde(default)]
    pub total: Option<Decimal>,

    #[serde(default)]
    pub pedido_id: Option<u32>,
    #[serde(default)]
    pub status_pedido: Option<StatusPedido>,
}

fn versao_atual() -> u32 {
    VERSAO_SESSAO
}

impl Sessao {
    pub fn new() -> Self {
        Self {
            schema_version: VERSAO_SESSAO,
            ..Default::default()
        }
    }

    /// Carrega a sessão do disco; arquivo inexistente vale sessão vazia.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)?;
        let sessao: Sessao = serde_json::from_str(&content)?;

        if sessao.schema_version != VERSAO_SESSAO {
            bail!(
                "Versão de sessão desconhecida: {} (esperada {})",
                sessao.schema_version,
                VERSAO_SESSAO
            );
        }

        Ok(sessao)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Endereço no formato da página de status: "Rua, 12 – Centro".
    pub fn endereco_formatado(&self) -> String {
        format!(
            "{}, {} – {}",
            self.nome_ou_vazio(&self.rua),
            self.nome_ou_vazio(&self.numero),
            self.nome_ou_vazio(&self.bairro)
        )
    }

    fn nome_ou_vazio<'a>(&self, campo: &'a Option<String>) -> &'a str {
        campo.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sessao_nova_comeca_vazia_na_versao_atual() {
        let sessao = Sessao::new();
        assert_eq!(sessao.schema_version, VERSAO_SESSAO);
        assert!(sessao.nome.is_none());
        assert!(sessao.total.is_none());
    }

    #[test]
    fn arquivo_inexistente_vale_sessao_vazia() {
        let sessao = Sessao::load(Path::new("/tmp/sessao-que-nao-existe.json")).unwrap();
        assert!(sessao.nome.is_none());
    }

    #[test]
    fn campos_ausentes_sao_lidos_como_padrao() {
        let sessao: Sessao =
            serde_json::from_str(r#"{"schema_version": 1, "nome": "Maria"}"#).unwrap();
        assert_eq!(sessao.nome.as_deref(), Some("Maria"));
        assert!(sessao.bairro.is_none());
        assert!(sessao.status_pedido.is_none());
    }

    #[test]
    fn versao_desconhecida_e_rejeitada() {
        let dir = std::env::temp_dir().join("garagem-teste-versao");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sessao.json");
        std::fs::write(&path, r#"{"schema_version": 99}"#).unwrap();
        assert!(Sessao::load(&path).is_err());
    }

    #[test]
    fn ida_e_volta_pelo_disco() {
        let dir = std::env::temp_dir().join("garagem-teste-sessao");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sessao.json");

        let mut sessao = Sessao::new();
        sessao.nome = Some("Maria".into());
        sessao.bairro = Some("Centro".into());
        sessao.total = Some(dec!(27.00));
        sessao.status_pedido = Some(StatusPedido::Preparo);
        sessao.save(&path).unwrap();

        let lida = Sessao::load(&path).unwrap();
        assert_eq!(lida.nome.as_deref(), Some("Maria"));
        assert_eq!(lida.total, Some(dec!(27.00)));
        assert_eq!(lida.status_pedido, Some(StatusPedido::Preparo));
    }

    #[test]
    fn endereco_formatado_como_na_pagina_de_status() {
        let mut sessao = Sessao::new();
        sessao.rua = Some("Rua A".into());
        sessao.numero = Some("12".into());
        sessao.bairro = Some("Centro".into());
        assert_eq!(sessao.endereco_formatado(), "Rua A, 12 – Centro");
    }
}
