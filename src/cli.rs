use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

/// Custom validation functions for CLI arguments
mod validation {
    use std::fs;
    use std::path::PathBuf;

    /// Validate port number is within valid range (1-65535)
    pub fn validate_port(port_str: &str) -> Result<u16, String> {
        let port: u16 = port_str.parse().map_err(|_| {
            format!(
                "Port must be a valid number between 1 and 65535, got: '{}'",
                port_str
            )
        })?;

        if port == 0 {
            return Err("Port must be between 1 and 65535. Port 0 is not allowed.".to_string());
        }

        Ok(port)
    }

    /// Validate that a file path is accessible (exists and is readable)
    pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
        let path = PathBuf::from(path_str);

        if !path.exists() {
            return Err(format!("Configuration file does not exist: '{}'", path_str));
        }

        if !path.is_file() {
            return Err(format!("Configuration path is not a file: '{}'", path_str));
        }

        match fs::File::open(&path) {
            Ok(_) => Ok(path),
            Err(e) => Err(format!(
                "Cannot read configuration file '{}': {}",
                path_str, e
            )),
        }
    }

    /// Validate host address format (basic validation)
    pub fn validate_host_address(host_str: &str) -> Result<String, String> {
        let host = host_str.trim();

        if host.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if host.contains(' ') {
            return Err("Host address cannot contain spaces".to_string());
        }

        if host == "localhost" || host == "0.0.0.0" || host.starts_with("127.") {
            return Ok(host.to_string());
        }

        if host.chars().all(|c| c.is_ascii_digit() || c == '.') {
            let parts: Vec<&str> = host.split('.').collect();
            if parts.len() == 4 {
                for part in parts {
                    if part.parse::<u8>().is_err() {
                        return Err(format!("Invalid IPv4 address format: '{}'", host_str));
                    }
                }
                return Ok(host.to_string());
            }
        }

        if host.len() > 253 {
            return Err("Host address is too long (maximum 253 characters)".to_string());
        }

        Ok(host.to_string())
    }
}

/// A content catalog API server
#[derive(Parser, Debug)]
#[command(name = "catalog-rs")]
#[command(about = "A content catalog API server with an in-process cache")]
#[command(long_about = "
Catalog-rs serves a content catalog over a RESTful API. It keeps records
in a slow reference store fronted by an in-process cache, and exposes
CRUD, search and genre management endpoints.

EXAMPLES:
    # Start the server with default configuration
    catalog-rs serve

    # Start server on custom host and port
    catalog-rs serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    catalog-rs --config /path/to/config.toml serve

    # Check configuration without starting server
    catalog-rs serve --dry-run

For more information about configuration options, see the documentation.
")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Specify a custom configuration file to use instead of the default.
    /// The file should be in TOML format and contain valid configuration sections.
    #[arg(short, long, value_name = "FILE", value_parser = validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Launches the HTTP server with the configured settings.
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept
        /// connections from any interface.
        ///
        /// Default: 127.0.0.1
        #[arg(long, value_name = "ADDRESS", value_parser = validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// Must be between 1 and 65535.
        ///
        /// Default: 3000
        #[arg(short, long, value_name = "PORT", value_parser = validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Overrides both configuration file settings and the global
        /// --verbose/--quiet flags.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        ///
        /// Returns exit code 0 if valid, non-zero if invalid.
        #[arg(long)]
        dry_run: bool,
    },
}

/// Log level options
#[derive(ValueEnum, Clone, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

/// Configuration merger that handles CLI argument integration with
/// file-based configuration.
///
/// CLI arguments override configuration file values.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a configuration merger by loading configuration from the
    /// specified path or the default loader.
    pub fn from_config_path(config_path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = config_path {
            Self::load_config_from_file(path)?
        } else {
            ConfigLoader::new()?.load()?
        };

        Ok(Self::new(config))
    }

    /// Load configuration from a specific file path
    fn load_config_from_file(path: &PathBuf) -> Result<Settings, ConfigError> {
        unsafe {
            std::env::set_var(ConfigLoader::CONFIG_FILE_VAR, path);
        }

        let result = ConfigLoader::new().and_then(|loader| loader.load());

        unsafe {
            std::env::remove_var(ConfigLoader::CONFIG_FILE_VAR);
        }

        result
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// CLI arguments have highest priority; configuration file values
    /// are used as the base. The merged result is validated before it
    /// is returned.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            dry_run: _,
        }) = &cli.command
        {
            if let Some(host_addr) = host {
                config.server.host = host_addr.clone();
            }
            if let Some(port_num) = port {
                config.server.port = *port_num;
            }
            // Command-specific override takes precedence over global flags
            if let Some(level) = log_level {
                config.logger.level = level.clone().into();
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Get the current configuration (useful for inspection)
    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}
