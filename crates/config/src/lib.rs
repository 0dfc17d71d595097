//! Parameter catalog and simulator settings for the Physics Explorer.
//!
//! The catalog declares, per topic, every adjustable parameter with its
//! bounds and default. Front-ends clamp user input through the catalog before
//! handing values to the formula layer.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use phys_core::constants::EARTH_GRAVITY_M_S2;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

mod builtin;

/// Declared bounds and default for one adjustable parameter.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ParameterSpec {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub unit: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// Outcome of clamping a requested value into its declared bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped {
    pub value: f64,
    pub adjusted: bool,
}

impl ParameterSpec {
    pub fn new(key: &str, label: &str, unit: &str, min: f64, max: f64, default: f64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            unit: unit.to_string(),
            min,
            max,
            default,
        }
    }

    /// Clamp `value` into `[min, max]`; NaN falls back to the default.
    pub fn clamp(&self, value: f64) -> Clamped {
        if value.is_nan() {
            return Clamped {
                value: self.default,
                adjusted: true,
            };
        }
        let clamped = value.clamp(self.min, self.max);
        Clamped {
            value: clamped,
            adjusted: clamped != value,
        }
    }

    fn validate(&self, topic: &str) -> Result<(), ConfigError> {
        let finite = self.min.is_finite() && self.max.is_finite() && self.default.is_finite();
        if !finite || self.min > self.max || !(self.min..=self.max).contains(&self.default) {
            return Err(ConfigError::InvalidRange {
                topic: topic.to_string(),
                key: self.key.clone(),
            });
        }
        Ok(())
    }
}

/// Parameter overrides for a single topic, as stored in override files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TopicParameters {
    pub topic: String,
    pub parameters: Vec<ParameterSpec>,
}

/// Ordered parameter specs for every topic the explorer offers.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicCatalog {
    topics: BTreeMap<String, Vec<ParameterSpec>>,
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TopicCatalog {
    /// Catalog mirroring the explorer's slider bounds.
    pub fn builtin() -> Self {
        let topics = builtin::topics()
            .into_iter()
            .map(|(topic, params)| (topic.to_string(), params))
            .collect();
        Self { topics }
    }

    /// Topic names in the catalog, sorted.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    pub fn parameters(&self, topic: &str) -> Option<&[ParameterSpec]> {
        self.topics.get(topic).map(Vec::as_slice)
    }

    pub fn spec(&self, topic: &str, key: &str) -> Option<&ParameterSpec> {
        self.parameters(topic)?.iter().find(|spec| spec.key == key)
    }

    /// The requested value clamped into bounds, or the default when absent.
    pub fn resolve(
        &self,
        topic: &str,
        key: &str,
        requested: Option<f64>,
    ) -> Result<f64, ConfigError> {
        let spec = self
            .spec(topic, key)
            .ok_or_else(|| ConfigError::UnknownParameter {
                topic: topic.to_string(),
                key: key.to_string(),
            })?;
        let Some(value) = requested else {
            return Ok(spec.default);
        };
        let clamped = spec.clamp(value);
        if clamped.adjusted {
            warn!(
                topic,
                key,
                requested = value,
                used = clamped.value,
                "parameter outside declared bounds [{}, {}]",
                spec.min,
                spec.max
            );
        }
        Ok(clamped.value)
    }

    /// Replace specs with overrides; every override must name a known topic and key.
    pub fn apply_overrides(&mut self, overrides: &[TopicParameters]) -> Result<(), ConfigError> {
        for entry in overrides {
            let specs = self
                .topics
                .get_mut(&entry.topic)
                .ok_or_else(|| ConfigError::UnknownTopic(entry.topic.clone()))?;
            for replacement in &entry.parameters {
                replacement.validate(&entry.topic)?;
                let slot = specs
                    .iter_mut()
                    .find(|spec| spec.key == replacement.key)
                    .ok_or_else(|| ConfigError::UnknownParameter {
                        topic: entry.topic.clone(),
                        key: replacement.key.clone(),
                    })?;
                *slot = replacement.clone();
            }
        }
        Ok(())
    }
}

/// Global simulator settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulatorConfig {
    pub gravity_m_s2: f64,
    pub curve_points: usize,
    pub orbit_points: usize,
    pub overrides: Vec<TopicParameters>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            gravity_m_s2: EARTH_GRAVITY_M_S2,
            curve_points: 100,
            orbit_points: 360,
            overrides: Vec::new(),
        }
    }
}

impl SimulatorConfig {
    /// Built-in catalog with this config's overrides applied.
    pub fn catalog(&self) -> Result<TopicCatalog, ConfigError> {
        let mut catalog = TopicCatalog::builtin();
        catalog.apply_overrides(&self.overrides)?;
        Ok(catalog)
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown topic `{0}`")]
    UnknownTopic(String),
    #[error("topic `{topic}` has no parameter `{key}`")]
    UnknownParameter { topic: String, key: String },
    #[error("parameter `{key}` of topic `{topic}` has an invalid range")]
    InvalidRange { topic: String, key: String },
}

/// Load simulator settings from a `.toml` file or a YAML file.
pub fn load_simulator_config<P: AsRef<Path>>(path: P) -> Result<SimulatorConfig, ConfigError> {
    let path = path.as_ref();
    let config: SimulatorConfig = if is_toml(path) {
        toml::from_str(&std::fs::read_to_string(path)?)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    config.catalog()?;
    Ok(config)
}

/// Load parameter overrides from a YAML list, a single `.toml` record, or a directory of `.toml` records.
pub fn load_parameter_overrides<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<TopicParameters>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
