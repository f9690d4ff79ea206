use anyhow::Context;

use crate::db::DbPool;
use crate::message::MessageService;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub message_service: MessageService,
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .context("DATABASE_URL environment variable is not set")?;
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a number")?;

        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}
