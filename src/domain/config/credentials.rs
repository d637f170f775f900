//! Taiga account credentials.

pub const TAIGA_DOMAIN_ENV: &str = "TAIGA_DOMAIN";
pub const TAIGABOT_ACCOUNT_ENV: &str = "TAIGABOT_ACCOUNT";
pub const TAIGABOT_PASSWORD_ENV: &str = "TAIGABOT_PASSWORD";

/// Host and account the bot authenticates with.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub host: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Build credentials from a variable lookup; `None` unless all three are set.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Some(Self {
            host: lookup(TAIGA_DOMAIN_ENV)?,
            username: lookup(TAIGABOT_ACCOUNT_ENV)?,
            password: lookup(TAIGABOT_PASSWORD_ENV)?,
        })
    }
}
