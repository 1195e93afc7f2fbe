//! suitdeck-web - static asset server entry point
//!
//! Serves the asset tree over HTTP so the console's fragments, catalog and
//! icons can be fetched remotely.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use log::info;

fn usage_and_exit() -> ! {
    eprintln!(
        "suitdeck-web\n\n\
USAGE:\n  suitdeck-web [--bind HOST:PORT] [--dir PATH]\n\n\
ENV:\n  BIND        default 127.0.0.1:3000\n  STATIC_DIR  default assets\n"
    );
    std::process::exit(2);
}

#[derive(Clone, Debug)]
struct Config {
    bind: SocketAddr,
    root: PathBuf,
}

fn parse_args() -> Config {
    let mut bind: SocketAddr = std::env::var("BIND")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .unwrap_or_else(|_| usage_and_exit());

    let mut root: PathBuf = std::env::var("STATIC_DIR")
        .unwrap_or_else(|_| "assets".to_string())
        .into();

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--bind" => {
                let v = it.next().unwrap_or_else(|| usage_and_exit());
                bind = v.parse().unwrap_or_else(|_| usage_and_exit());
            }
            "--dir" => {
                let v = it.next().unwrap_or_else(|| usage_and_exit());
                root = v.into();
            }
            "-h" | "--help" => usage_and_exit(),
            _ => usage_and_exit(),
        }
    }

    Config { bind, root }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = parse_args();
    let app = suitdeck::web::router(cfg.root.clone());

    let listener = tokio::net::TcpListener::bind(cfg.bind).await?;
    info!("serving {} at http://{}/", cfg.root.display(), cfg.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
