/// Configuration management
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_host")]
    pub server_host: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,

    pub database_url: String,

    #[serde(default = "default_database_max_connections")]
    pub database_max_connections: u32,

    pub jwt_secret: String,

    #[serde(default = "default_jwt_access_token_ttl")]
    pub jwt_access_token_ttl: i64,

    #[serde(default = "default_qr_output_dir")]
    pub qr_output_dir: String,
}

// Default value functions
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_database_max_connections() -> u32 {
    5
}

fn default_jwt_access_token_ttl() -> i64 {
    3600 // 1 hour
}

fn default_qr_output_dir() -> String {
    "qr_codes".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenv::dotenv().ok();
        envy::from_env()
    }
}
