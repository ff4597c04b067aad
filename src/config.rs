use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub lottery: LotteryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// 开奖号码生成方式
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SamplerKind {
    /// 系统安全随机源
    #[default]
    Secure,
    /// 兼容旧系统的线性同余序列（可复现）
    Legacy,
}

impl std::str::FromStr for SamplerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "secure" => Ok(SamplerKind::Secure),
            "legacy" => Ok(SamplerKind::Legacy),
            other => Err(format!("unknown sampler: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotteryConfig {
    #[serde(default)]
    pub sampler: SamplerKind,
    #[serde(default = "default_legacy_seed")]
    pub legacy_seed: i64,
}

fn default_legacy_seed() -> i64 {
    1
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            sampler: SamplerKind::default(),
            legacy_seed: default_legacy_seed(),
        }
    }
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 尝试读取配置文件，如果不存在则完全依赖环境变量
        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => Self::parse(&config_str)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // 数据库 URL 在无配置文件时必须提供
                let database_url = env::var("DATABASE_URL")
                    .map_err(|_| "DATABASE_URL is not set and config.toml was not found")?;

                Config {
                    server: ServerConfig {
                        host: "0.0.0.0".to_string(),
                        port: 8080,
                    },
                    database: DatabaseConfig {
                        url: database_url,
                        max_connections: 10,
                    },
                    lottery: LotteryConfig::default(),
                }
            }
            Err(e) => {
                return Err(format!("Failed to read config file {config_path}: {e}").into());
            }
        };

        // 环境变量覆盖（即便文件存在时也覆盖）
        config.apply_env_overrides(|name| env::var(name).ok())?;

        Ok(config)
    }

    pub fn parse(config_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        toml::from_str(config_str).map_err(|e| format!("Failed to parse config file: {e}").into())
    }

    fn apply_env_overrides<F>(&mut self, get_env: F) -> Result<(), Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = get_env("SERVER_HOST") {
            self.server.host = v;
        }
        if let Some(v) = get_env("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            self.server.port = p;
        }
        if let Some(v) = get_env("DATABASE_URL") {
            self.database.url = v;
        }
        if let Some(v) = get_env("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            self.database.max_connections = mc;
        }
        if let Some(v) = get_env("LOTTERY_SAMPLER") {
            self.lottery.sampler = v.parse()?;
        }
        if let Some(v) = get_env("LOTTERY_LEGACY_SEED")
            && let Ok(seed) = v.parse()
        {
            self.lottery.legacy_seed = seed;
        }
        Ok(())
    }
}
