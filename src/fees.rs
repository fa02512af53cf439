use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Tabela única de taxa de entrega por bairro, em ordem de prioridade.
// O "mutuá" precisa do acento correto para casar.
const TABELA: &[(&[&str], Decimal)] = &[
    (&["gramacho"], dec!(1.00)),
    (&["centro"], dec!(2.00)),
    (&["parque", "vila"], dec!(3.00)),
    (&["jardim", "mutuá"], dec!(4.00)),
];

pub const TAXA_PADRAO: Decimal = dec!(5.00);

/// Taxa de entrega para um bairro: casamento de substring, sem distinção de
/// caixa, primeira regra vence. Bairro vazio ou desconhecido paga a taxa
/// padrão. Função pura.
pub fn calcular_taxa_entrega(bairro: &str) -> Decimal {
    let nome = bairro.to_lowercase();
    for (fragmentos, taxa) in TABELA {
        if fragmentos.iter().any(|f| nome.contains(f)) {
            return *taxa;
        }
    }
    TAXA_PADRAO
}
