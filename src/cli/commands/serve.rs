//! Serve Command
//!
//! Runs the dashboard HTTP server.

use crate::config::Config;
use crate::server;
use crate::types::Result;

pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
}

pub async fn run(mut config: Config, options: ServeOptions) -> Result<()> {
    if let Some(host) = options.host {
        config.server.host = host;
    }
    if let Some(port) = options.port {
        config.server.port = port;
    }
    config.validate()?;

    server::run(&config).await
}
