// src/config.rs

use crate::error::QuizError;
use crate::schedule::MAX_DELAY_SECS;
use serde::{Deserialize, Serialize};

/// Variable de entorno con la ruta de un YAML de configuración (sólo nativo).
pub const CONFIG_ENV: &str = "JERSEY_QUIZ_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct QuizConfig {
    pub window_title: String,
    pub heading: String,
    /// Segundos hasta avanzar solo tras un acierto. `None` = siempre manual.
    pub auto_advance_secs: Option<f64>,
    pub celebrate: bool,
    /// Semilla del barajado, para partidas reproducibles.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            window_title: "Jersey Citizenship Test".to_owned(),
            heading: "Jersey Citizenship Test".to_owned(),
            auto_advance_secs: None,
            celebrate: true,
            seed: None,
        }
    }
}

impl QuizConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, QuizError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|source| QuizError::Parse {
            what: "configuration",
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if let Some(secs) = self.auto_advance_secs {
            if !(0.0..=MAX_DELAY_SECS).contains(&secs) {
                return Err(QuizError::Config(format!(
                    "auto_advance_secs must be between 0 and {MAX_DELAY_SECS} seconds, got {secs}"
                )));
            }
        }
        Ok(())
    }

    /// Configuración por defecto, o la del fichero indicado en `JERSEY_QUIZ_CONFIG`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, QuizError> {
        Self::load_from(std::env::var(CONFIG_ENV).ok().as_deref())
    }

    /// Lee `path` si lo hay; sin ruta, la configuración por defecto.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&str>) -> Result<Self, QuizError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| QuizError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        log::info!("configuración cargada desde {path}");
        Ok(config)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, QuizError> {
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_take_defaults() {
        let config = QuizConfig::from_yaml_str("auto_advance_secs: 3.0\n").expect("valid config");
        assert_eq!(config.auto_advance_secs, Some(3.0));
        assert!(config.celebrate);
        assert_eq!(config.heading, QuizConfig::default().heading);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn full_config_round_trips_fields() {
        let yaml = r#"
window_title: "Quiz"
heading: "Practice"
auto_advance_secs: null
celebrate: false
seed: 42
"#;
        let config = QuizConfig::from_yaml_str(yaml).expect("valid config");
        assert_eq!(config.window_title, "Quiz");
        assert_eq!(config.heading, "Practice");
        assert!(!config.celebrate);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn negative_delay_is_a_config_error() {
        let err = QuizConfig::from_yaml_str("auto_advance_secs: -1.0\n").unwrap_err();
        assert!(matches!(err, QuizError::Config(_)));
    }

    #[test]
    fn delays_beyond_an_hour_are_config_errors() {
        for yaml in ["auto_advance_secs: 1.0e30\n", "auto_advance_secs: .inf\n"] {
            let err = QuizConfig::from_yaml_str(yaml).unwrap_err();
            assert!(matches!(err, QuizError::Config(_)), "{yaml}");
        }
        let config = QuizConfig::from_yaml_str("auto_advance_secs: 3600.0\n").expect("valid");
        assert_eq!(config.auto_advance_secs, Some(MAX_DELAY_SECS));
    }

    #[test]
    fn no_path_loads_defaults() {
        let config = QuizConfig::load_from(None).expect("defaults");
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn config_file_is_read_from_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "heading: \"From file\"\nseed: 3").expect("write config");
        let path = file.path().to_str().expect("utf-8 path");

        let config = QuizConfig::load_from(Some(path)).expect("config from file");
        assert_eq!(config.heading, "From file");
        assert_eq!(config.seed, Some(3));
        assert!(config.celebrate);
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.yaml");
        let missing = missing.to_str().expect("utf-8 path");

        match QuizConfig::load_from(Some(missing)) {
            Err(QuizError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn wrong_types_are_parse_errors() {
        let err = QuizConfig::from_yaml_str("celebrate: maybe\n").unwrap_err();
        assert!(matches!(err, QuizError::Parse { what: "configuration", .. }));
    }
}
