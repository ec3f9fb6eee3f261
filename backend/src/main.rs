mod assets;
mod config;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::default();
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        let delay = config.browser_delay;
        thread::spawn(move || {
            thread::sleep(delay);
            if let Err(err) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, err);
            }
        });
    }

    info!("Supplier directory running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(assets::serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
