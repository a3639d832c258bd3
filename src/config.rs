use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub data_path: PathBuf,
    pub static_dir: Option<PathBuf>,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("CONTACT_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_HOST: {e}"))?;

        let port: u16 = env_or("PORT", "4000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let data_path = PathBuf::from(env_or(
            "CONTACT_DATA_PATH",
            "data/contact-submissions.json",
        ));

        let static_dir = Some(env_or("CONTACT_STATIC_DIR", "public"))
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let max_body_size: usize = env_or("CONTACT_MAX_BODY_SIZE", "102400")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("CONTACT_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            data_path,
            static_dir,
            max_body_size,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
