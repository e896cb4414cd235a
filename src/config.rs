use std::env;
use std::path::PathBuf;

use crate::auth::password;
use crate::contact::MailConfig;

const DEFAULT_CONTENT_PATH: &str = "data/content.json";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Runtime configuration, gathered once at startup from the environment
/// (a `.env` file is honored via dotenvy).
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub content_path: PathBuf,
    pub admin_username: String,
    pub admin_password_hash: String,
    pub mail: Option<MailConfig>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let content_path = env::var("CONTENT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONTENT_PATH));

        let admin_username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_password_hash = admin_hash_from_env();

        Self {
            bind_addr,
            content_path,
            admin_username,
            admin_password_hash,
            mail: mail_from_env(),
        }
    }

}

/// Admin credential, strongest source first: a ready argon2 hash, a plain
/// password hashed at startup, or the dev fallback with a loud warning.
fn admin_hash_from_env() -> String {
    if let Ok(hash) = env::var("ADMIN_PASSWORD_HASH") {
        if !hash.trim().is_empty() {
            return hash;
        }
    }
    if let Ok(plain) = env::var("ADMIN_PASSWORD") {
        if !plain.is_empty() {
            return password::hash_password(&plain).expect("Failed to hash ADMIN_PASSWORD");
        }
    }
    log::warn!("No ADMIN_PASSWORD_HASH or ADMIN_PASSWORD set — using the dev password 'admin123'");
    password::hash_password("admin123").expect("Failed to hash default password")
}

fn mail_from_env() -> Option<MailConfig> {
    let host = env::var("SMTP_HOST").ok().filter(|h| !h.trim().is_empty())?;
    let port = env::var("SMTP_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(587);
    Some(MailConfig {
        host,
        port,
        username: env::var("SMTP_USERNAME").unwrap_or_default(),
        password: env::var("SMTP_PASSWORD").unwrap_or_default(),
        from: env::var("MAIL_FROM").unwrap_or_else(|_| "website@digitalhilfe.example".to_string()),
        to: env::var("MAIL_TO").unwrap_or_else(|_| "kontakt@digitalhilfe.example".to_string()),
    })
}
