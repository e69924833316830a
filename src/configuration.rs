use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_host: String,
    pub app_port: u16,
    pub database: Option<DatabaseSettings>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }
}

impl Settings {
    /// The connection string that decides which storage backend runs.
    ///
    /// DATABASE_URL takes precedence over the `database` section of the
    /// configuration file. `None` means no database is configured and the
    /// in-memory fallback store is used.
    pub fn database_url(&self) -> Option<String> {
        std::env::var("DATABASE_URL").ok().or_else(|| {
            self.database
                .as_ref()
                .map(DatabaseSettings::connection_string)
        })
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize our configuration reader
    let mut settings = config::Config::default();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?; // .json, .toml, .yaml, .yml

    settings.try_deserialize()
}
