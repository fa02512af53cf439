use anyhow::Result;
use garagem_do_lanche::client::GaragemClient;
use garagem_do_lanche::domain::PedidoFiltro;

#[tokio::main]
async fn main() -> Result<()> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:5000/api".to_string());

    let api = GaragemClient::new(&base_url)?;

    println!("\n=== DIAGNÓSTICO DA API ===");
    println!("Base URL: {}\n", base_url);

    // Teste 1: /health
    println!("📍 Testando: /health");
    match api.health_check().await {
        Ok(health) => {
            println!("   ✅ {} (v{})", health.message, health.version);
        }
        Err(e) => {
            println!("   ❌ Falhou: {}", e);
        }
    }

    println!();

    // Teste 2: /info
    println!("📍 Testando: /info");
    match api.get_api_info().await {
        Ok(info) => {
            println!("   ✅ {} v{}", info.api, info.version);
            println!("   Endpoints anunciados: {}", info.endpoints.len());
        }
        Err(e) => {
            println!("   ❌ Falhou: {}", e);
        }
    }

    println!();

    // Teste 3: /cardapio
    println!("📍 Testando: /cardapio");
    match api.get_cardapio().await {
        Ok(cardapio) => {
            println!("   ✅ {} pratos ativos", cardapio.pratos.len());
            if let Some(prato) = cardapio.pratos.first() {
                println!("   Primeiro prato: {} (R$ {:.2})", prato.nome, prato.preco);
            }
        }
        Err(e) => {
            println!("   ❌ Falhou: {}", e);
        }
    }

    println!();

    // Teste 4: /acompanhamentos
    println!("📍 Testando: /acompanhamentos");
    match api.get_acompanhamentos().await {
        Ok(resp) => {
            println!("   ✅ {} acompanhamentos", resp.acompanhamentos.len());
        }
        Err(e) => {
            println!("   ❌ Falhou: {}", e);
        }
    }

    println!();

    // Teste 5: /pedidos sem autenticação (deve responder, mesmo que vazio)
    println!("📍 Testando: /pedidos");
    match api.listar_pedidos(&PedidoFiltro::default()).await {
        Ok(resp) => {
            println!("   ✅ {} pedidos", resp.pedidos.len());
        }
        Err(e) => {
            println!("   ❌ Falhou: {}", e);
        }
    }

    println!();

    // Teste 6: /auth/check
    println!("📍 Testando: /auth/check");
    match api.check_auth().await {
        Ok(resp) => {
            if resp.authenticated {
                println!("   ✅ Sessão autenticada");
            } else {
                println!("   ⚠️  Sem sessão de cozinha (esperado fora do login)");
            }
        }
        Err(e) => {
            println!("   ❌ Falhou: {}", e);
        }
    }

    println!();
    println!("=== RESUMO ===");
    println!("Se /health e /cardapio respondem, o site consegue operar.");
    println!("Falhas de rede indicam backend fora do ar ou base URL errada.");
    println!();

    Ok(())
}
