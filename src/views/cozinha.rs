use crate::domain::Pedido;

use super::formatar_reais;

/// Linhas do card de um pedido no painel da cozinha.
pub fn card_pedido(pedido: &Pedido) -> Vec<String> {
    let mut linhas = vec![
        format!("Pedido #{} — {}", pedido.id, pedido.cliente.nome),
        format!("Prato: {}", pedido.prato.nome),
        format!("Acompanhamento: {}", pedido.acompanhamento.nome),
        format!(
            "Endereço: {}, {} - {}",
            pedido.endereco.rua, pedido.endereco.numero, pedido.endereco.bairro
        ),
    ];

    if let Some(complemento) = pedido
        .endereco
        .complemento
        .as_deref()
        .filter(|c| !c.is_empty())
    {
        linhas.push(format!("Complemento: {}", complemento));
    }

    linhas.push(format!("Telefone: {}", pedido.cliente.telefone));
    linhas.push(format!("Pagamento: {}", pedido.forma_pagamento));
    linhas.push(format!("Total: {}", formatar_reais(pedido.valor_total)));

    if let Some(obs) = pedido.observacoes.as_deref().filter(|o| !o.is_empty()) {
        linhas.push(format!("Obs: {}", obs));
    }

    linhas
}

/// Documento de impressão do pedido (o conteúdo da janela de impressão).
pub fn documento_impressao(pedido: &Pedido) -> String {
    let mut doc = String::from("===== GARAGEM DO LANCHE =====\n");
    for linha in card_pedido(pedido) {
        doc.push_str(&linha);
        doc.push('\n');
    }
    doc.push_str("=============================\n");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::*;

    fn pedido_exemplo(complemento: Option<&str>) -> Pedido {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "cliente": {"id": 1, "nome": "Maria", "telefone": "21999990000", "created_at": null},
            "prato": {"id": 1, "nome": "X-Tudo", "preco": 25.0, "descricao": null, "ativo": true},
            "acompanhamento": {"id": 2, "nome": "Batata", "icone": null, "ativo": true},
            "endereco": {
                "id": 3, "cep": null, "rua": "Rua A", "numero": "12",
                "bairro": "Centro", "complemento": complemento, "taxa_entrega": 2.0
            },
            "status": "aceito",
            "forma_pagamento": "Pix",
            "valor_prato": 25.0,
            "taxa_entrega": 2.0,
            "valor_total": 27.0,
            "observacoes": null,
            "created_at": null,
            "updated_at": null
        }))
        .unwrap()
    }

    #[test]
    fn card_na_ordem_da_pagina() {
        let linhas = card_pedido(&pedido_exemplo(None));
        assert_eq!(linhas[0], "Pedido #7 — Maria");
        assert_eq!(linhas[1], "Prato: X-Tudo");
        assert_eq!(linhas[3], "Endereço: Rua A, 12 - Centro");
        assert_eq!(linhas.last().unwrap(), "Total: R$ 27.00");
    }

    #[test]
    fn complemento_so_aparece_quando_preenchido() {
        let sem = card_pedido(&pedido_exemplo(None));
        assert!(!sem.iter().any(|l| l.starts_with("Complemento")));

        let com = card_pedido(&pedido_exemplo(Some("Fundos")));
        assert!(com.contains(&"Complemento: Fundos".to_string()));
    }

    #[test]
    fn documento_tem_cabecalho_e_card() {
        let doc = documento_impressao(&pedido_exemplo(None));
        assert!(doc.starts_with("===== GARAGEM DO LANCHE ====="));
        assert!(doc.contains("Prato: X-Tudo"));
    }
}
