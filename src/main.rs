use anyhow::Context;
use clap::Parser;

use tinylink::config::args::Args;
use tinylink::config::{StaticConfig, get_config, init_config_from};
use tinylink::errors::TinylinkError;
use tinylink::runtime::modes::run_server;
use tinylink::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if args.generate_config {
        if let Err(e) = StaticConfig::default().save_to_file(&args.config) {
            eprintln!("{}", e.format_colored());
            return Err(e).context("Failed to write sample configuration");
        }
        println!("Sample configuration written to {}", args.config);
        return Ok(());
    }

    init_config_from(&args.config);
    let config = get_config();

    // 保持 guard 存活直到退出，否则缓冲日志会丢失
    let _guard = init_logging(&config.logging).map_err(|e: TinylinkError| {
        eprintln!("{}", e.format_colored());
        e
    })?;

    run_server().await.context("Server exited with an error")
}
