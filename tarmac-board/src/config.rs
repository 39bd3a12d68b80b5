use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub airport: AirportConfig,
    pub board: BoardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AirportConfig {
    pub name: String,
    pub city: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BoardConfig {
    /// Load the sample schedule on startup.
    pub seed_sample_schedule: bool,
    /// If set, the demo also renders the board filtered by this company.
    #[serde(default)]
    pub company_filter: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `TARMAC_BOARD__COMPANY_FILTER=iberia`
            .add_source(config::Environment::with_prefix("TARMAC").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
