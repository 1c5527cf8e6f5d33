use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use salesphone_core::{builtin, CoreError, KnowledgeBase, TrunkRule};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "salesphone";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub knowledge_base: KnowledgeBase,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            knowledge_base: builtin().clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("country {country} is missing {field}")]
    MissingCountryField {
        country: String,
        field: &'static str,
    },
    #[error("invalid country {country}: {source}")]
    InvalidCountry {
        country: String,
        #[source]
        source: CoreError,
    },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    include_builtin: Option<bool>,
    #[serde(default)]
    countries: BTreeMap<String, CountryFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CountryFile {
    calling_code: Option<String>,
    trunk_rule: Option<TrunkRule>,
    #[serde(default)]
    cities: BTreeMap<String, String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut builder = if parsed.include_builtin.unwrap_or(true) {
        builtin().to_builder()
    } else {
        KnowledgeBase::builder()
    };

    for (name, country) in parsed.countries {
        let invalid = |source: CoreError| ConfigError::InvalidCountry {
            country: name.clone(),
            source,
        };

        let (inherited_code, inherited_rule) = match builder.get(&name) {
            Some(info) => (Some(info.country_code().to_string()), Some(info.trunk_rule())),
            None => (None, None),
        };
        let replaces = country.calling_code.is_some() || country.trunk_rule.is_some();

        if replaces || inherited_code.is_none() {
            let calling_code = country.calling_code.or(inherited_code).ok_or_else(|| {
                ConfigError::MissingCountryField {
                    country: name.clone(),
                    field: "calling_code",
                }
            })?;
            let trunk_rule = country.trunk_rule.or(inherited_rule).ok_or_else(|| {
                ConfigError::MissingCountryField {
                    country: name.clone(),
                    field: "trunk_rule",
                }
            })?;
            let kept_cities: Vec<(String, String)> = builder
                .get(&name)
                .map(|info| {
                    info.cities()
                        .map(|(city, code)| (city.to_string(), code.to_string()))
                        .collect()
                })
                .unwrap_or_default();
            builder
                .country(&name, calling_code.trim(), trunk_rule, kept_cities)
                .map_err(invalid)?;
        }

        for (city, area_code) in &country.cities {
            builder
                .city(&name, city, area_code.trim())
                .map_err(invalid)?;
        }
    }

    Ok(AppConfig {
        knowledge_base: builder.build(),
    })
}
