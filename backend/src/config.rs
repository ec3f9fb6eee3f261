//! Host process settings.

use std::time::Duration;

/// Where the embedded frontend is served and how the browser is launched.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the default browser on the served URL after start-up.
    pub open_browser: bool,
    /// Delay before opening the browser, so the listener is bound first.
    pub browser_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
            browser_delay: Duration::from_millis(500),
        }
    }
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
