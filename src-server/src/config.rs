use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_dir: String,
    pub user_data_dir: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("PW_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid PW_LISTEN_ADDR");
        let data_dir = std::env::var("PW_DATA_DIR").unwrap_or_else(|_| "./data".into());
        let user_data_dir =
            std::env::var("PW_USER_DATA_DIR").unwrap_or_else(|_| data_dir.clone());
        let cors_allow = std::env::var("PW_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("PW_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            data_dir,
            user_data_dir,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}
