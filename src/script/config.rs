use std::env;

use crate::script::consts::{DEFAULT_INDENT, INDENT_ENV, PRETTY_ENV};

/// How a script is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pretty: bool,
    indent: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidVar(String, String),
}

pub struct ConfigBuilder {
    config: Config,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.config.indent = indent;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    // Compact output, four-space indent when pretty output is asked for.
    pub fn new() -> Self {
        Self {
            pretty: false,
            indent: DEFAULT_INDENT,
        }
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Reads the render settings from the environment.
    ///
    /// *   `TROPO_RENDER_PRETTY`: (Optional) "true"/"1" for indented output. Defaults to compact.
    /// *   `TROPO_RENDER_INDENT`: (Optional) spaces per indent level. Defaults to 4.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new();

        if let Ok(pretty) = env::var(PRETTY_ENV) {
            config.pretty = parse_flag(&pretty)
                .ok_or_else(|| ConfigError::InvalidVar(PRETTY_ENV.to_string(), pretty.clone()))?;
        }

        if let Ok(indent) = env::var(INDENT_ENV) {
            config.indent = indent
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVar(INDENT_ENV.to_string(), indent.clone()))?;
        }

        Ok(config)
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn indent(&self) -> usize {
        self.indent
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
