use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// サーバ設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub assets_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// 環境変数から ServerConfig を作成する
    ///
    /// 任意の環境変数:
    /// - COMPOSE_ASSETS_DIR（既定: assets）
    /// - COMPOSE_BIND_ADDR（既定: 0.0.0.0:8000）
    /// - COMPOSE_MAX_BODY_BYTES（既定: 32 MiB）
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let assets_dir = lookup("COMPOSE_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));

        let bind_addr = lookup("COMPOSE_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| format!("COMPOSE_BIND_ADDR is invalid: {e}"))?;

        let max_body_bytes = match lookup("COMPOSE_MAX_BODY_BYTES") {
            Some(value) => value
                .parse::<usize>()
                .map_err(|e| format!("COMPOSE_MAX_BODY_BYTES is invalid: {e}"))?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            assets_dir,
            bind_addr,
            max_body_bytes,
        })
    }
}
