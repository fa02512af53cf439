use garagem_do_lanche::*;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use log::info;

use client::cep::ViaCepClient;
use client::{carregar_acompanhamentos, carregar_cardapio, enviar_pedido, verificar_status_pedido};
use client::GaragemClient;
use config::{Args, CaixaComando, Comando, Config, CozinhaComando};
use domain::{FormaPagamento, NovaMovimentacao, NovoPedido, PedidoFiltro, StatusPedido};
use session::Sessao;
use views::formatar_reais;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;

    let api = GaragemClient::new(&config.api.base_url)?;

    match args.comando {
        Comando::Cardapio => pagina_cardapio(&api).await,
        Comando::Pedido {
            prato_id,
            acompanhamento_id,
            nome,
            telefone,
            cep,
            rua,
            numero,
            bairro,
            complemento,
            pagamento,
            observacoes,
        } => {
            pagina_pedido(
                &api,
                &config,
                FormularioEntrega {
                    prato_id,
                    acompanhamento_id,
                    nome,
                    telefone,
                    cep,
                    rua,
                    numero,
                    bairro,
                    complemento,
                    pagamento,
                    observacoes,
                },
            )
            .await
        }
        Comando::Pedidos {
            status,
            data_inicio,
            data_fim,
        } => pagina_pedidos(&api, status, data_inicio, data_fim).await,
        Comando::Status { pedido_id } => pagina_status(&api, &config, pedido_id).await,
        Comando::Cozinha { comando } => pagina_cozinha(&api, comando).await,
        Comando::Caixa { comando } => pagina_caixa(&api, comando).await,
        Comando::Login { senha } => fazer_login(&api, senha).await,
        Comando::Logout => {
            let resp = api.logout().await?;
            println!("{}", resp.message.unwrap_or_else(|| "Logout".into()));
            Ok(())
        }
        Comando::Health => pagina_health(&api).await,
    }
}

// ===============================
// CARDÁPIO
// ===============================
async fn pagina_cardapio(api: &GaragemClient) -> Result<()> {
    let pratos = carregar_cardapio(api).await;
    let acompanhamentos = carregar_acompanhamentos(api).await;

    if pratos.is_empty() {
        logging::log_degradacao("Cardápio");
    }

    println!("{}", "=== CARDÁPIO ===".bold());
    for prato in &pratos {
        println!(
            "  [{}] {} — {}",
            prato.id,
            prato.nome,
            formatar_reais(prato.preco).yellow()
        );
        if let Some(descricao) = prato.descricao.as_deref().filter(|d| !d.is_empty()) {
            println!("      {}", descricao.dimmed());
        }
    }

    println!("{}", "=== ACOMPANHAMENTOS ===".bold());
    for acomp in &acompanhamentos {
        let icone = acomp.icone.as_deref().unwrap_or("");
        println!("  [{}] {} {}", acomp.id, acomp.nome, icone);
    }

    Ok(())
}

// ===============================
// CHECKOUT / ENTREGA
// ===============================
struct FormularioEntrega {
    prato_id: u32,
    acompanhamento_id: u32,
    nome: String,
    telefone: String,
    cep: Option<String>,
    rua: Option<String>,
    numero: String,
    bairro: Option<String>,
    complemento: Option<String>,
    pagamento: String,
    observacoes: Option<String>,
}

async fn pagina_pedido(
    api: &GaragemClient,
    config: &Config,
    mut form: FormularioEntrega,
) -> Result<()> {
    // CEP preenche rua e bairro quando não informados
    if let Some(cep) = form.cep.as_deref() {
        if form.rua.is_none() || form.bairro.is_none() {
            let viacep = ViaCepClient::new(&config.api.viacep_url)?;
            if let Some(endereco) = viacep.buscar(cep).await? {
                form.rua = form.rua.or(Some(endereco.logradouro));
                form.bairro = form.bairro.or(Some(endereco.bairro));
            }
        }
    }

    let rua = form
        .rua
        .filter(|r| !r.is_empty())
        .context("Informe --rua ou um --cep válido")?;
    let bairro = form
        .bairro
        .filter(|b| !b.is_empty())
        .context("Informe --bairro ou um --cep válido")?;

    let Some(forma_pagamento) = FormaPagamento::parse(&form.pagamento) else {
        bail!("Pagamento inválido: {} (use dinheiro, pix ou cartão)", form.pagamento);
    };

    // Preço do prato vem da API; envio de pedido propaga falhas
    let prato = api.get_prato(form.prato_id).await?.prato;

    let resumo = views::entrega::resumo_pedido(prato.preco, &bairro);
    for linha in views::entrega::linhas_total(&prato.nome, &resumo) {
        println!("{}", linha);
    }

    let novo = NovoPedido {
        nome: form.nome.clone(),
        telefone: form.telefone.clone(),
        rua: rua.clone(),
        numero: form.numero.clone(),
        bairro: bairro.clone(),
        cep: form.cep.clone(),
        complemento: form.complemento.clone(),
        prato_id: form.prato_id,
        acompanhamento_id: form.acompanhamento_id,
        forma_pagamento,
        observacoes: form.observacoes.clone(),
    };

    let pedido = enviar_pedido(api, &novo).await?;
    logging::log_sucesso(&format!("Pedido #{} criado", pedido.id));

    // A sessão alimenta o comando `status`
    let mut sessao = Sessao::new();
    sessao.nome = Some(form.nome);
    sessao.telefone = Some(form.telefone);
    sessao.prato_selecionado = Some(prato.nome);
    sessao.preco_selecionado = Some(prato.preco);
    sessao.acompanhamento = Some(pedido.acompanhamento.nome.clone());
    sessao.rua = Some(rua);
    sessao.numero = Some(form.numero);
    sessao.bairro = Some(bairro);
    sessao.complemento = form.complemento;
    sessao.pagamento = Some(forma_pagamento.to_string());
    sessao.total = Some(pedido.valor_total);
    sessao.pedido_id = Some(pedido.id);
    sessao.status_pedido = Some(pedido.status);
    sessao.save(&config.sessao_path)?;

    println!(
        "Pedido {} confirmado — total {}",
        format!("#{}", pedido.id).bold(),
        formatar_reais(pedido.valor_total).yellow()
    );

    Ok(())
}

// ===============================
// STATUS DO PEDIDO
// ===============================
async fn pagina_status(
    api: &GaragemClient,
    config: &Config,
    pedido_id: Option<u32>,
) -> Result<()> {
    let mut sessao = Sessao::load(&config.sessao_path)?;

    // Consulta a API quando há pedido conhecido; falha degrada para a sessão
    if let Some(id) = pedido_id.or(sessao.pedido_id) {
        if let Some(pedido) = verificar_status_pedido(api, id).await {
            sessao.status_pedido = Some(pedido.status);
            sessao.total = Some(pedido.valor_total);
            sessao.save(&config.sessao_path)?;
        }
    }

    println!("{}", "=== SEU PEDIDO ===".bold());
    println!("Nome: {}", sessao.nome.as_deref().unwrap_or("..."));
    println!("Telefone: {}", sessao.telefone.as_deref().unwrap_or("..."));
    println!("Endereço: {}", sessao.endereco_formatado());
    println!(
        "Complemento: {}",
        sessao.complemento.as_deref().unwrap_or("—")
    );
    println!("Pagamento: {}", sessao.pagamento.as_deref().unwrap_or("..."));
    println!(
        "Acompanhamento: {}",
        sessao.acompanhamento.as_deref().unwrap_or("...")
    );
    match sessao.total {
        Some(total) => println!("Total: {}", formatar_reais(total)),
        None => println!("Total: ..."),
    }

    println!();
    for etapa in views::status::etapas(sessao.status_pedido) {
        if etapa.ativa {
            println!("  {} {}", "●".green(), etapa.nome.green().bold());
        } else {
            println!("  ○ {}", etapa.nome.dimmed());
        }
    }

    Ok(())
}

// ===============================
// COZINHA
// ===============================
async fn pagina_cozinha(api: &GaragemClient, comando: CozinhaComando) -> Result<()> {
    garantir_autenticacao(api).await?;

    match comando {
        CozinhaComando::Listar => {
            let pedidos = match api.get_pedidos_cozinha().await {
                Ok(resp) => resp.pedidos,
                Err(_) => {
                    logging::log_degradacao("Cozinha");
                    Vec::new()
                }
            };

            println!("{}", "=== FILA DA COZINHA ===".bold());
            if pedidos.is_empty() {
                println!("  (sem pedidos na fila)");
            }
            for pedido in &pedidos {
                println!();
                for linha in views::cozinha::card_pedido(pedido) {
                    println!("  {}", linha);
                }
            }
            Ok(())
        }
        CozinhaComando::Avancar { pedido_id, status } => {
            let Some(status) = StatusPedido::parse(&status) else {
                bail!("Status inválido: {}", status);
            };
            let resp = api.atualizar_status_pedido(pedido_id, status).await?;
            logging::log_sucesso(&format!(
                "Pedido #{} agora está em '{}'",
                resp.pedido.id, resp.pedido.status
            ));
            Ok(())
        }
        CozinhaComando::Imprimir { pedido_id } => {
            let resp = api.get_pedido(pedido_id).await?;
            print!("{}", views::cozinha::documento_impressao(&resp.pedido));
            Ok(())
        }
    }
}

/// Sessões CLI não carregam cookie entre execuções: se não estiver
/// autenticado, tenta login com SENHA_COZINHA dentro do mesmo processo.
async fn garantir_autenticacao(api: &GaragemClient) -> Result<()> {
    let check = api.check_auth().await?;
    if check.authenticated {
        return Ok(());
    }

    let Some(senha) = Config::senha_cozinha() else {
        bail!("Cozinha exige autenticação: defina SENHA_COZINHA ou use o comando login");
    };

    let resp = api.login(&senha).await?;
    if !resp.authenticated {
        bail!("Login da cozinha recusado");
    }
    info!("🔑 Sessão da cozinha autenticada");
    Ok(())
}

async fn fazer_login(api: &GaragemClient, senha: Option<String>) -> Result<()> {
    let Some(senha) = senha.or_else(Config::senha_cozinha) else {
        bail!("Informe --senha ou defina SENHA_COZINHA");
    };

    let resp = api.login(&senha).await?;
    println!("{}", resp.message.unwrap_or_else(|| "Autenticado".into()));
    Ok(())
}

// ===============================
// CAIXA
// ===============================
async fn pagina_caixa(api: &GaragemClient, comando: CaixaComando) -> Result<()> {
    garantir_autenticacao(api).await?;

    match comando {
        CaixaComando::Relatorio {
            data_inicio,
            data_fim,
        } => {
            let relatorio = match api.get_relatorio_caixa(data_inicio, data_fim).await {
                Ok(resp) => resp.relatorio,
                Err(_) => {
                    logging::log_degradacao("Relatório do caixa");
                    return Ok(());
                }
            };

            println!("{}", "=== RELATÓRIO DO CAIXA ===".bold());
            println!(
                "Período: {} a {}",
                relatorio.periodo.inicio, relatorio.periodo.fim
            );
            let resumo = &relatorio.resumo;
            println!("Entradas: {}", formatar_reais(resumo.total_entradas).green());
            println!("Saídas: {}", formatar_reais(resumo.total_saidas).red());
            println!("Fiado: {}", formatar_reais(resumo.total_fiados).yellow());
            println!("Saldo: {}", formatar_reais(resumo.saldo).bold());
            println!(
                "Pedidos: {} (ticket médio {})",
                resumo.total_pedidos,
                formatar_reais(resumo.ticket_medio)
            );

            for mov in &relatorio.movimentacoes {
                println!(
                    "  {} {} — {}",
                    mov.tipo,
                    formatar_reais(mov.valor),
                    mov.descricao.as_deref().unwrap_or("")
                );
            }
            Ok(())
        }
        CaixaComando::Dashboard => {
            let dashboard = match api.get_dashboard_caixa().await {
                Ok(resp) => resp.dashboard,
                Err(_) => {
                    logging::log_degradacao("Dashboard do caixa");
                    return Ok(());
                }
            };

            println!("{}", "=== CAIXA HOJE ===".bold());
            println!("Vendas: {}", formatar_reais(dashboard.vendas_hoje).green());
            println!("Pedidos: {}", dashboard.pedidos_hoje);
            println!(
                "Ticket médio: {}",
                formatar_reais(dashboard.ticket_medio_hoje)
            );
            println!(
                "Fiados pendentes: {}",
                formatar_reais(dashboard.fiados_pendentes).yellow()
            );
            if !dashboard.vendas_semana.is_empty() {
                println!("{}", "--- Últimos 7 dias ---".dimmed());
                for dia in &dashboard.vendas_semana {
                    println!("  {}: {}", dia.data, formatar_reais(dia.total));
                }
            }
            Ok(())
        }
        CaixaComando::Movimentacao {
            tipo,
            valor,
            descricao,
            pedido_id,
        } => {
            if !["entrada", "saida", "fiado"].contains(&tipo.as_str()) {
                bail!("Tipo deve ser: entrada, saida ou fiado");
            }

            let resp = api
                .criar_movimentacao(&NovaMovimentacao {
                    tipo,
                    valor,
                    descricao,
                    pedido_id,
                })
                .await?;
            logging::log_sucesso(&format!(
                "Movimentação #{} registrada ({} {})",
                resp.movimentacao.id,
                resp.movimentacao.tipo,
                formatar_reais(resp.movimentacao.valor)
            ));
            Ok(())
        }
    }
}

// ===============================
// HEALTH
// ===============================
async fn pagina_health(api: &GaragemClient) -> Result<()> {
    let health = api.health_check().await?;
    println!("{} (v{})", health.message.green(), health.version);

    if let Ok(api_info) = api.get_api_info().await {
        println!("{}", api_info.api.bold());
        for (nome, caminho) in &api_info.endpoints {
            println!("  {}: {}", nome, caminho);
        }
    }

    Ok(())
}

// ===============================
// LISTAGEM GERAL DE PEDIDOS
// ===============================
async fn pagina_pedidos(
    api: &GaragemClient,
    status: Option<String>,
    data_inicio: Option<chrono::NaiveDate>,
    data_fim: Option<chrono::NaiveDate>,
) -> Result<()> {
    let status = match status.as_deref() {
        Some(s) => match StatusPedido::parse(s) {
            Some(status) => Some(status),
            None => bail!("Status inválido: {}", s),
        },
        None => None,
    };

    let filtro = PedidoFiltro {
        status,
        data_inicio: data_inicio.map(|d| d.to_string()),
        data_fim: data_fim.map(|d| d.to_string()),
    };

    let pedidos = match api.listar_pedidos(&filtro).await {
        Ok(resp) => resp.pedidos,
        Err(_) => {
            logging::log_degradacao("Listagem de pedidos");
            Vec::new()
        }
    };

    println!("{}", "=== PEDIDOS ===".bold());
    if pedidos.is_empty() {
        println!("  (nenhum pedido encontrado)");
    }
    for pedido in &pedidos {
        println!(
            "  #{} {} — {} — {} [{}]",
            pedido.id,
            pedido.cliente.nome,
            pedido.prato.nome,
            formatar_reais(pedido.valor_total),
            pedido.status
        );
    }
    Ok(())
}
