// ⚙️ Configuration
// Optional journal.toml in the working directory, overridden by env vars such as JOURNAL_SERVER__PORT

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Configuration {
    #[serde(default)]
    pub server: ServerConfiguration,
    #[serde(default)]
    pub journal: JournalConfiguration,
    #[serde(default)]
    pub logging: LoggingConfiguration,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfiguration {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under /images
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JournalConfiguration {
    #[serde(default = "default_seed")]
    pub seed_sample_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfiguration {
    /// Log file used by the terminal UI
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "web".to_string()
}

fn default_seed() -> bool {
    true
}

fn default_log_file() -> String {
    "build-journal.log".to_string()
}

impl Default for ServerConfiguration {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for JournalConfiguration {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed(),
        }
    }
}

impl Default for LoggingConfiguration {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

impl Configuration {
    pub fn new() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if std::path::Path::new("journal.toml").exists() {
            builder = builder.add_source(config::File::with_name("journal"));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("JOURNAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
