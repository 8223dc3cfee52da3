//! Backend entry-point: loads settings, wires adapters and serves HTTP.

mod server;

use color_eyre::eyre::WrapErr;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, build_repository, build_upstreams, create_server};
use warehouse::config::WarehouseSettings;

#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = WarehouseSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load settings")?;
    let repository = build_repository(&settings)
        .await
        .wrap_err("failed to configure the student store")?;
    let upstreams = build_upstreams(&settings).wrap_err("failed to configure upstream APIs")?;

    let bind_addr = settings.bind_addr();
    let server = create_server(ServerConfig::new(bind_addr, repository, upstreams))
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "server listening");
    server.await.wrap_err("server terminated with an error")
}
