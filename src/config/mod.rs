use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/* =======================
CLI ARGS
======================= */

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub comando: Comando,
}

#[derive(Subcommand, Debug)]
pub enum Comando {
    /// Lista os pratos e acompanhamentos do cardápio
    Cardapio,
    /// Fecha um pedido de entrega
    Pedido {
        #[arg(long)]
        prato_id: u32,
        #[arg(long)]
        acompanhamento_id: u32,
        #[arg(long)]
        nome: String,
        #[arg(long)]
        telefone: String,
        /// CEP para preencher rua e bairro via ViaCEP
        #[arg(long)]
        cep: Option<String>,
        #[arg(long)]
        rua: Option<String>,
        #[arg(long)]
        numero: String,
        #[arg(long)]
        bairro: Option<String>,
        #[arg(long)]
        complemento: Option<String>,
        /// dinheiro, pix ou cartão
        #[arg(long)]
        pagamento: String,
        #[arg(long)]
        observacoes: Option<String>,
    },
    /// Lista pedidos com filtros opcionais
    Pedidos {
        /// aceito, preparo, entrega, finalizado ou cancelado
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        data_inicio: Option<NaiveDate>,
        #[arg(long)]
        data_fim: Option<NaiveDate>,
    },
    /// Acompanha o status do pedido da sessão corrente
    Status {
        /// Consulta um pedido específico em vez do da sessão
        #[arg(long)]
        pedido_id: Option<u32>,
    },
    /// Painel da cozinha
    Cozinha {
        #[command(subcommand)]
        comando: CozinhaComando,
    },
    /// Caixa: relatório, dashboard e movimentações
    Caixa {
        #[command(subcommand)]
        comando: CaixaComando,
    },
    /// Autentica a sessão da cozinha (senha via --senha ou SENHA_COZINHA)
    Login {
        #[arg(long)]
        senha: Option<String>,
    },
    /// Encerra a sessão da cozinha
    Logout,
    /// Verifica se a API está no ar
    Health,
}

#[derive(Subcommand, Debug)]
pub enum CozinhaComando {
    /// Fila de pedidos aceitos e em preparo
    Listar,
    /// Avança um pedido para outro status
    Avancar {
        pedido_id: u32,
        /// aceito, preparo, entrega, finalizado ou cancelado
        status: String,
    },
    /// Documento de impressão de um pedido
    Imprimir { pedido_id: u32 },
}

#[derive(Subcommand, Debug)]
pub enum CaixaComando {
    /// Relatório de entradas, saídas e fiado num período
    Relatorio {
        #[arg(long)]
        data_inicio: Option<NaiveDate>,
        #[arg(long)]
        data_fim: Option<NaiveDate>,
    },
    /// Resumo do dia e vendas da semana
    Dashboard,
    /// Registra uma movimentação no caixa
    Movimentacao {
        /// entrada, saida ou fiado
        #[arg(long)]
        tipo: String,
        #[arg(long)]
        valor: rust_decimal::Decimal,
        #[arg(long, default_value = "")]
        descricao: String,
        #[arg(long)]
        pedido_id: Option<u32>,
    },
}

/* =======================
MAIN CONFIG
======================= */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub sessao_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub viacep_url: String,
}

/* =======================
DEFAULT CONFIG
======================= */

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:5000/api".to_string(),
                viacep_url: "https://viacep.com.br".to_string(),
            },
            sessao_path: PathBuf::from("sessao.json"),
        }
    }
}

/* =======================
LOAD / CREATE CONFIG
======================= */

impl Config {
    pub fn load(path: &PathBuf) -> anyhow::Result<Self> {
        let mut cfg = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            let cfg = Config::default();
            let content = serde_json::to_string_pretty(&cfg)?;
            std::fs::write(path, content)?;
            cfg
        };

        // Variáveis de ambiente vencem o arquivo
        if let Ok(url) = env::var("GARAGEM_API_URL") {
            cfg.api.base_url = url;
        }
        if let Ok(url) = env::var("VIACEP_URL") {
            cfg.api.viacep_url = url;
        }

        Ok(cfg)
    }

    /// Senha da cozinha, só via ambiente (nunca no config.json)
    pub fn senha_cozinha() -> Option<String> {
        env::var("SENHA_COZINHA").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padrao_aponta_para_localhost() {
        let cfg = Config::default();
        assert_eq!(cfg.api.base_url, "http://localhost:5000/api");
        assert!(cfg.api.viacep_url.starts_with("https://viacep"));
    }

    #[test]
    fn config_sobrevive_a_serializacao() {
        let cfg = Config::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let lida: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(lida.api.base_url, cfg.api.base_url);
    }
}
