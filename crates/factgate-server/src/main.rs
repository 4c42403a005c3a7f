use std::sync::Arc;

use factgate_server::routes::create_router;
use factgate_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cfg = factgate_core::config::load_config()?;
    let state = Arc::new(AppState::init(&cfg).await?);

    let addr = state.cfg.server.bind.clone();
    let app = create_router(state);

    tracing::info!("factgate-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
