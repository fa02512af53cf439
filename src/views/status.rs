use crate::domain::StatusPedido;

pub const ETAPAS: [&str; 4] = [
    "Pedido aceito",
    "Em preparo",
    "Saiu para entrega",
    "Finalizado",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Etapa {
    pub nome: &'static str,
    pub ativa: bool,
}

/// Etapas do acompanhamento do pedido, com a etapa corrente marcada.
/// Sem status registrado, o pedido conta como recém-aceito; pedido
/// cancelado não acende etapa nenhuma.
pub fn etapas(status: Option<StatusPedido>) -> Vec<Etapa> {
    let ativa = match status.unwrap_or(StatusPedido::Aceito) {
        StatusPedido::Aceito => Some(0),
        StatusPedido::Preparo => Some(1),
        StatusPedido::Entrega => Some(2),
        StatusPedido::Finalizado => Some(3),
        StatusPedido::Cancelado => None,
    };

    ETAPAS
        .iter()
        .enumerate()
        .map(|(i, nome)| Etapa {
            nome,
            ativa: Some(i) == ativa,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ativas(etapas: &[Etapa]) -> Vec<&'static str> {
        etapas.iter().filter(|e| e.ativa).map(|e| e.nome).collect()
    }

    #[test]
    fn sem_status_marca_a_primeira_etapa() {
        assert_eq!(ativas(&etapas(None)), vec!["Pedido aceito"]);
    }

    #[test]
    fn cada_status_marca_sua_etapa() {
        assert_eq!(
            ativas(&etapas(Some(StatusPedido::Preparo))),
            vec!["Em preparo"]
        );
        assert_eq!(
            ativas(&etapas(Some(StatusPedido::Entrega))),
            vec!["Saiu para entrega"]
        );
        assert_eq!(
            ativas(&etapas(Some(StatusPedido::Finalizado))),
            vec!["Finalizado"]
        );
    }

    #[test]
    fn cancelado_nao_acende_etapa() {
        assert!(ativas(&etapas(Some(StatusPedido::Cancelado))).is_empty());
    }
}
