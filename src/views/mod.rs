//! Funções de visão das páginas: recebem dados puros e devolvem o texto a
//! renderizar, sem I/O. A camada de comando decide onde imprimir.

use rust_decimal::Decimal;

pub mod cozinha;
pub mod entrega;
pub mod status;

pub fn formatar_reais(valor: Decimal) -> String {
    format!("R$ {:.2}", valor)
}
