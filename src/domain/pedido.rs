use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Acompanhamento, Cliente, Endereco, Prato};

// ==================================================
// STATUS DO PEDIDO
// ==================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPedido {
    Aceito,
    Preparo,
    Entrega,
    Finalizado,
    Cancelado,
}

impl StatusPedido {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusPedido::Aceito => "aceito",
            StatusPedido::Preparo => "preparo",
            StatusPedido::Entrega => "entrega",
            StatusPedido::Finalizado => "finalizado",
            StatusPedido::Cancelado => "cancelado",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "aceito" => Some(StatusPedido::Aceito),
            "preparo" => Some(StatusPedido::Preparo),
            "entrega" => Some(StatusPedido::Entrega),
            "finalizado" => Some(StatusPedido::Finalizado),
            "cancelado" => Some(StatusPedido::Cancelado),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatusPedido {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==================================================
// FORMA DE PAGAMENTO
// ==================================================
// Os valores de enum do backend são capitalizados ("Dinheiro", "Pix", "Cartão").

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormaPagamento {
    Dinheiro,
    Pix,
    #[serde(rename = "Cartão")]
    Cartao,
}

impl FormaPagamento {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dinheiro" => Some(FormaPagamento::Dinheiro),
            "pix" => Some(FormaPagamento::Pix),
            "cartão" | "cartao" => Some(FormaPagamento::Cartao),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormaPagamento::Dinheiro => "Dinheiro",
            FormaPagamento::Pix => "Pix",
            FormaPagamento::Cartao => "Cartão",
        }
    }
}

impl std::fmt::Display for FormaPagamento {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==================================================
// PEDIDO (resposta do backend, relações aninhadas)
// ==================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pedido {
    pub id: u32,
    pub cliente: Cliente,
    pub prato: Prato,
    pub acompanhamento: Acompanhamento,
    pub endereco: Endereco,
    pub status: StatusPedido,
    pub forma_pagamento: FormaPagamento,
    pub valor_prato: Decimal,
    pub taxa_entrega: Decimal,
    pub valor_total: Decimal,
    pub observacoes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

// ==================================================
// NOVO PEDIDO (corpo do POST /pedidos)
// ==================================================

#[derive(Debug, Clone, Serialize)]
pub struct NovoPedido {
    pub nome: String,
    pub telefone: String,
    pub rua: String,
    pub numero: String,
    pub bairro: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complemento: Option<String>,
    pub prato_id: u32,
    pub acompanhamento_id: u32,
    pub forma_pagamento: FormaPagamento,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

// ==================================================
// FILTROS DE LISTAGEM
// ==================================================

#[derive(Debug, Clone, Default)]
pub struct PedidoFiltro {
    pub status: Option<StatusPedido>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}

impl PedidoFiltro {
    /// Pares de query string, omitindo valores ausentes.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(inicio) = &self.data_inicio {
            pairs.push(("data_inicio", inicio.clone()));
        }
        if let Some(fim) = &self.data_fim {
            pairs.push(("data_fim", fim.clone()));
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.data_inicio.is_none() && self.data_fim.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn status_serializa_minusculo() {
        let s = serde_json::to_string(&StatusPedido::Preparo).unwrap();
        assert_eq!(s, "\"preparo\"");
        let de: StatusPedido = serde_json::from_str("\"finalizado\"").unwrap();
        assert_eq!(de, StatusPedido::Finalizado);
    }

    #[test]
    fn forma_pagamento_cartao_acentuado() {
        let s = serde_json::to_string(&FormaPagamento::Cartao).unwrap();
        assert_eq!(s, "\"Cartão\"");
        let de: FormaPagamento = serde_json::from_str("\"Pix\"").unwrap();
        assert_eq!(de, FormaPagamento::Pix);
    }

    #[test]
    fn novo_pedido_omite_campos_ausentes() {
        let pedido = NovoPedido {
            nome: "Maria".into(),
            telefone: "21999990000".into(),
            rua: "Rua A".into(),
            numero: "12".into(),
            bairro: "Centro".into(),
            cep: None,
            complemento: None,
            prato_id: 1,
            acompanhamento_id: 2,
            forma_pagamento: FormaPagamento::Pix,
            observacoes: None,
        };
        let v: serde_json::Value = serde_json::to_value(&pedido).unwrap();
        assert!(v.get("cep").is_none());
        assert!(v.get("complemento").is_none());
        assert_eq!(v["forma_pagamento"], "Pix");
    }

    #[test]
    fn pedido_desserializa_resposta_do_backend() {
        let body = serde_json::json!({
            "id": 7,
            "cliente": {"id": 1, "nome": "Maria", "telefone": "21999990000", "created_at": "2024-01-01T12:00:00"},
            "prato": {"id": 1, "nome": "X-Tudo", "preco": 25.0, "descricao": null, "ativo": true},
            "acompanhamento": {"id": 2, "nome": "Batata", "icone": "🍟", "ativo": true},
            "endereco": {"id": 3, "cep": "25000000", "rua": "Rua A", "numero": "12", "bairro": "Centro", "complemento": null, "taxa_entrega": 2.0},
            "status": "aceito",
            "forma_pagamento": "Dinheiro",
            "valor_prato": 25.0,
            "taxa_entrega": 2.0,
            "valor_total": 27.0,
            "observacoes": null,
            "created_at": "2024-01-01T12:00:00",
            "updated_at": "2024-01-01T12:00:00"
        });
        let pedido: Pedido = serde_json::from_value(body).unwrap();
        assert_eq!(pedido.status, StatusPedido::Aceito);
        assert_eq!(pedido.valor_total, dec!(27.0));
        assert_eq!(pedido.endereco.bairro, "Centro");
    }

    #[test]
    fn pedido_criado_ecoa_os_campos_enviados() {
        let novo = NovoPedido {
            nome: "Maria".into(),
            telefone: "21999990000".into(),
            rua: "Rua A".into(),
            numero: "12".into(),
            bairro: "Centro".into(),
            cep: Some("25070330".into()),
            complemento: Some("Fundos".into()),
            prato_id: 1,
            acompanhamento_id: 2,
            forma_pagamento: FormaPagamento::Dinheiro,
            observacoes: None,
        };

        // resposta do backend ao POST: os mesmos campos + id atribuído
        let eco = serde_json::json!({
            "id": 42,
            "cliente": {"id": 9, "nome": &novo.nome, "telefone": &novo.telefone, "created_at": null},
            "prato": {"id": novo.prato_id, "nome": "X-Tudo", "preco": 25.0, "descricao": null, "ativo": true},
            "acompanhamento": {"id": novo.acompanhamento_id, "nome": "Batata", "icone": null, "ativo": true},
            "endereco": {
                "id": 5, "cep": &novo.cep, "rua": &novo.rua, "numero": &novo.numero,
                "bairro": &novo.bairro, "complemento": &novo.complemento, "taxa_entrega": 2.0
            },
            "status": "aceito",
            "forma_pagamento": novo.forma_pagamento,
            "valor_prato": 25.0,
            "taxa_entrega": 2.0,
            "valor_total": 27.0,
            "observacoes": null,
            "created_at": null,
            "updated_at": null
        });

        let pedido: Pedido = serde_json::from_value(eco).unwrap();
        assert_eq!(pedido.id, 42);
        assert_eq!(pedido.cliente.nome, novo.nome);
        assert_eq!(pedido.cliente.telefone, novo.telefone);
        assert_eq!(pedido.endereco.rua, novo.rua);
        assert_eq!(pedido.endereco.bairro, novo.bairro);
        assert_eq!(pedido.endereco.complemento, novo.complemento);
        assert_eq!(pedido.prato.id, novo.prato_id);
        assert_eq!(pedido.acompanhamento.id, novo.acompanhamento_id);
        assert_eq!(pedido.forma_pagamento, novo.forma_pagamento);
    }

    #[test]
    fn filtro_vazio_sem_pares() {
        let filtro = PedidoFiltro::default();
        assert!(filtro.is_empty());
        assert!(filtro.query_pairs().is_empty());
    }

    #[test]
    fn filtro_com_status() {
        let filtro = PedidoFiltro {
            status: Some(StatusPedido::Preparo),
            ..Default::default()
        };
        assert_eq!(
            filtro.query_pairs(),
            vec![("status", "preparo".to_string())]
        );
    }
}
