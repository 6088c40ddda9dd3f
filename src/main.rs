// Minibank - Account Server
// Single in-memory account behind three HTTP endpoints

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use minibank::{router, Account, AppState, BIND_ADDR};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("🏦 Minibank - Account Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let state = AppState::new(Account::new("John"));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;

    println!("\n🚀 Server running on http://{}", BIND_ADDR);
    println!("   POST http://{}/deposit", BIND_ADDR);
    println!("   POST http://{}/withdraw", BIND_ADDR);
    println!("   GET  http://{}/check_balance", BIND_ADDR);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app).await?;
    Ok(())
}
