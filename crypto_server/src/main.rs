mod analyze;
mod coins;
mod docs;
mod error;
mod extract;
mod info;
mod router;
mod state;

use std::env;

use crypto_core::CryptoService;
use dotenvy::dotenv;
use log::info;
use router::router;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let server_domain = env::var("SERVER_DOMAIN").unwrap_or("127.0.0.1:8000".to_string());

    let service = CryptoService::from_env();
    let symbols = service.refresh_coin_map().await;
    info!("Coin map loaded with {} symbols", symbols);

    let app = router(service);

    let listener = tokio::net::TcpListener::bind(&server_domain).await?;
    info!("Listening on {}", server_domain);

    axum::serve(listener, app).await?;

    Ok(())
}
