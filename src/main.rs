//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use artisan_reports::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Antes do logger, para o RUST_LOG do .env valer
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("artisan_reports=info")),
        )
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()?;
    let addr = app_state.settings.addr();

    let app = build_router(app_state);

    let listener = TcpListener::bind(addr.as_str()).await?;
    tracing::info!("🚀 Servidor de relatórios escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
