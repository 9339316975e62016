// This main function is the entry point when running `cargo run -p strategy-service`.
// Its only job is to load the configuration and call `run_server` from the crate's library.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = configuration::load_config()?;
    let _log_guard = configuration::init_tracing(&config.logging)?;
    strategy_service::run_server(&config.server).await
}
