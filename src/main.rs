//! Secure API: JWT issuance and bearer-token verification over HTTP.
//! Used by: binary entrypoint.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod token;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env()?;
    let state = state::build_state(&config);
    tracing::info!("starting secure-api on {}", config.bind_addr);

    server::run(state, &config.bind_addr).await?;
    Ok(())
}
