use clap::Parser;

use crate::config::AppConfig;

/// Command-line overrides applied on top of the environment
#[derive(Debug, Default, Parser)]
#[command(name = "todo-api")]
#[command(about = "Multi-user to-do list HTTP service")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Address to bind (overrides TODO_API_HOST)")]
    pub host: Option<String>,

    #[arg(short, long, help = "Port to listen on (overrides TODO_API_PORT)")]
    pub port: Option<u16>,

    #[arg(long, help = "Database connection string or memory:// (overrides DATABASE_URL)")]
    pub database_url: Option<String>,
}

impl Cli {
    pub fn apply(self, config: &mut AppConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = self.database_url {
            config.database.url = Some(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig::from_lookup(|key| (key == "JWT_SECRET_KEY").then(|| "k".to_string())).unwrap()
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "todo-api",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--database-url",
            "memory://",
        ]);
        let mut config = base_config();
        cli.apply(&mut config);

        assert_eq!(config.server.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.database.url.as_deref(), Some("memory://"));
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let mut config = base_config();
        Cli::parse_from(["todo-api"]).apply(&mut config);
        assert_eq!(config.server.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.database.url, None);
    }
}
