use std::env;

/// Runtime configuration, read from the environment (a `.env` file is
/// loaded in `main` before this runs).
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: env_or("HOST", "127.0.0.1"),
            port: env_or("PORT", "8080")
                .parse()
                .expect("PORT must be a valid port number"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        log::info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
