use rust_decimal::Decimal;

use crate::fees::calcular_taxa_entrega;

use super::formatar_reais;

#[derive(Debug, Clone, PartialEq)]
pub struct ResumoPedido {
    pub taxa: Decimal,
    pub total: Decimal,
}

/// Total do checkout: preço do prato + taxa de entrega do bairro.
pub fn resumo_pedido(preco_prato: Decimal, bairro: &str) -> ResumoPedido {
    let taxa = calcular_taxa_entrega(bairro);
    ResumoPedido {
        taxa,
        total: preco_prato + taxa,
    }
}

/// As duas linhas de resumo exibidas ao atualizar o total do checkout.
pub fn linhas_total(prato: &str, resumo: &ResumoPedido) -> Vec<String> {
    vec![
        format!("Seu pedido: {}", prato),
        format!(
            "Total: {} (inclui {} de entrega)",
            formatar_reais(resumo.total),
            formatar_reais(resumo.taxa)
        ),
    ]
}
