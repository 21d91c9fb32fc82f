//! Optional read-only `config.json` with session defaults. Nothing is ever written back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use serde_json::Error as SerdeError;

use crate::domain::{suggested_freight_price, CalculationInput, MaterialUnit, DEFAULT_CURRENCY};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "WasteWoodCalculator";
const APP_NAME: &str = "WasteWoodCalculator";

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "WASTE_WOOD_CONFIG";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub currency: Option<String>,
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_filter: Option<String>,
    #[serde(default)]
    pub defaults: InputOverrides,
}

impl AppConfig {
    pub fn currency(&self) -> String {
        self.currency
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
    }
}

/// Any subset of `CalculationInput` fields.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputOverrides {
    pub quantity: Option<f64>,
    pub unit: Option<MaterialUnit>,
    pub density_factor: Option<f64>,
    pub truck_payload: Option<f64>,
    pub distance_km: Option<f64>,
    pub freight_price_per_trip: Option<f64>,
    pub throughput_per_hour: Option<f64>,
    pub machine_rate_per_hour: Option<f64>,
    pub overhead_percent: Option<f64>,
    pub sale_price_per_tonne: Option<f64>,
}

impl InputOverrides {
    /// Built-in defaults with the overrides applied. A distance without an explicit
    /// freight price takes the suggested price for that distance.
    pub fn apply(&self) -> CalculationInput {
        let base = CalculationInput::default();
        let distance_km = self.distance_km.unwrap_or(base.distance_km);
        CalculationInput {
            quantity: self.quantity.unwrap_or(base.quantity),
            unit: self.unit.unwrap_or(base.unit),
            density_factor: self.density_factor.unwrap_or(base.density_factor),
            truck_payload: self.truck_payload.unwrap_or(base.truck_payload),
            distance_km,
            freight_price_per_trip: self
                .freight_price_per_trip
                .unwrap_or_else(|| suggested_freight_price(distance_km)),
            throughput_per_hour: self.throughput_per_hour.unwrap_or(base.throughput_per_hour),
            machine_rate_per_hour: self
                .machine_rate_per_hour
                .unwrap_or(base.machine_rate_per_hour),
            overhead_percent: self.overhead_percent.unwrap_or(base.overhead_percent),
            sale_price_per_tonne: self
                .sale_price_per_tonne
                .unwrap_or(base.sale_price_per_tonne),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: SerdeError,
    },
}

/// `$WASTE_WOOD_CONFIG`, else `config.json` in the platform config directory.
pub fn config_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Loads the config at `path`. `Ok(None)` when the file does not exist.
pub fn load_config_from(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&data)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn empty_object_yields_builtin_defaults() {
        let file = write_config("{}");
        let config = load_config_from(file.path()).unwrap().unwrap();

        assert_eq!(config.defaults.apply(), CalculationInput::default());
        assert_eq!(config.currency(), "€");
        assert_eq!(config.log_filter, None);
    }

    #[test]
    fn distance_override_resuggests_freight_price() {
        let file = write_config(r#"{ "defaults": { "distance_km": 20, "unit": "mass" } }"#);
        let input = load_config_from(file.path())
            .unwrap()
            .unwrap()
            .defaults
            .apply();

        assert_eq!(input.distance_km, 20.0);
        assert_eq!(input.freight_price_per_trip, 124.52);
        assert_eq!(input.unit, MaterialUnit::Mass);
    }

    #[test]
    fn explicit_freight_price_wins() {
        let file = write_config(
            r#"{ "currency": "CHF", "defaults": { "distance_km": 20, "freight_price_per_trip": 140 } }"#,
        );
        let config = load_config_from(file.path()).unwrap().unwrap();

        assert_eq!(config.defaults.apply().freight_price_per_trip, 140.0);
        assert_eq!(config.currency(), "CHF");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_config(r#"{ "defaults": { "diesel_price": 1.8 } }"#);
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
    }

    #[test]
    fn malformed_json_reports_path() {
        let file = write_config("{ not json");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
