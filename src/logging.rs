use log::{error, info, warn};

pub fn log_falha_api(endpoint: &str, reason: &str) {
    error!("❌ Falha em {}: {}", endpoint, reason);
}

pub fn log_degradacao(pagina: &str) {
    warn!("⚠️ {} sem dados da API — exibindo vazio", pagina);
}

pub fn log_sucesso(msg: &str) {
    info!("✅ {}", msg);
}
