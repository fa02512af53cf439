use std::fmt;

/// Falhas do cliente HTTP, na mesma taxonomia do frontend original:
/// transporte, resposta não-2xx e JSON malformado.
#[derive(Debug)]
pub enum ApiError {
    /// Rede inacessível, DNS, conexão recusada.
    Transport(String),
    /// Status não-2xx; `message` vem do campo `error` do backend,
    /// ou "HTTP <status>" quando o corpo não traz um.
    Response { status: u16, message: String },
    /// Corpo JSON que não desserializa no tipo esperado.
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Falha de rede: {}", msg),
            ApiError::Response { message, .. } => f.write_str(message),
            ApiError::Parse(msg) => write!(f, "Resposta inválida: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resposta_exibe_apenas_a_mensagem() {
        let err = ApiError::Response {
            status: 400,
            message: "Invalid payload".into(),
        };
        assert_eq!(err.to_string(), "Invalid payload");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn transporte_sem_status() {
        let err = ApiError::Transport("connection refused".into());
        assert!(err.status().is_none());
    }
}
