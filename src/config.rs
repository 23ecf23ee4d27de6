//! Configuration structures for the comparison demo.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Input-array generation parameters
    #[serde(default)]
    pub array: ArrayConfig,

    /// Chart rendering parameters
    #[serde(default)]
    pub chart: ChartConfig,

    /// Web server parameters
    #[serde(default)]
    pub server: ServerConfig,
}

/// Bounds and defaults for the generated input array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayConfig {
    /// Smallest element count the UI may request
    #[serde(default = "default_min_elements")]
    pub min_elements: usize,

    /// Largest element count the UI may request
    #[serde(default = "default_max_elements")]
    pub max_elements: usize,

    /// Initial slider position
    #[serde(default = "default_default_elements")]
    pub default_elements: usize,

    /// Lower bound of generated values (inclusive)
    #[serde(default = "default_value_low")]
    pub value_low: i32,

    /// Upper bound of generated values (exclusive)
    #[serde(default = "default_value_high")]
    pub value_high: i32,
}

/// Chart rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart width in pixels
    #[serde(default = "default_chart_width")]
    pub width: u32,

    /// Chart height in pixels
    #[serde(default = "default_chart_height")]
    pub height: u32,

    /// How many recent chart files to keep before deleting the oldest
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
}

/// Web server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind; 0 asks the OS for an ephemeral port
    #[serde(default)]
    pub port: u16,
}

// Default value functions
fn default_min_elements() -> usize { 100 }
fn default_max_elements() -> usize { 5000 }
fn default_default_elements() -> usize { 1000 }
fn default_value_low() -> i32 { 1 }
fn default_value_high() -> i32 { 1000 }
fn default_chart_width() -> u32 { 640 }
fn default_chart_height() -> u32 { 480 }
fn default_cache_size() -> usize { 8 }
fn default_host() -> String { "127.0.0.1".to_string() }

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            min_elements: default_min_elements(),
            max_elements: default_max_elements(),
            default_elements: default_default_elements(),
            value_low: default_value_low(),
            value_high: default_value_high(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
            cache_size: default_cache_size(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 0,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Check internal consistency before the configuration is put to use.
    pub fn validate(&self) -> Result<(), String> {
        if self.array.min_elements == 0 {
            return Err("array.min_elements must be positive".to_string());
        }
        if self.array.min_elements > self.array.max_elements {
            return Err(format!(
                "array.min_elements ({}) exceeds array.max_elements ({})",
                self.array.min_elements, self.array.max_elements
            ));
        }
        if self.array.default_elements < self.array.min_elements
            || self.array.default_elements > self.array.max_elements
        {
            return Err(format!(
                "array.default_elements ({}) is outside {}..={}",
                self.array.default_elements, self.array.min_elements, self.array.max_elements
            ));
        }
        if self.array.value_low >= self.array.value_high {
            return Err(format!(
                "array.value_low ({}) must be below array.value_high ({})",
                self.array.value_low, self.array.value_high
            ));
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err("chart dimensions must be positive".to_string());
        }
        if self.chart.cache_size == 0 {
            return Err("chart.cache_size must be at least 1".to_string());
        }
        Ok(())
    }
}
