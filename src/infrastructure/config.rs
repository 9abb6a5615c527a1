use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub profile: String,
    pub seed_demo: bool,
}

impl Config {
    /// Read configuration from the environment. An explicit profile
    /// (e.g. from `--profile`) wins over `PROFILE`.
    pub fn load(profile: Option<String>) -> Self {
        let profile = profile
            .or_else(|| env::var("PROFILE").ok())
            .unwrap_or_else(|| "default".to_string());
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url(&profile));

        Self {
            database_url,
            profile,
            seed_demo: env::var("SEED_DEMO").is_ok(),
        }
    }
}

fn default_database_url(profile: &str) -> String {
    if profile == "default" {
        "sqlite://checkout.db?mode=rwc".to_string()
    } else {
        format!("sqlite://checkout_{}.db?mode=rwc", profile)
    }
}
