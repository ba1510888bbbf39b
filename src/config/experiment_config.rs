use crate::config::{BuildError, ProcessChoice, ProcessKind};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;

fn default_draws() -> usize {
    100_000
}

fn default_n_bins() -> usize {
    40
}

/// Which processes to simulate, how long a prefix to draw from each, and how
/// finely to profile the resulting samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExperimentConfig {
    #[serde(default = "default_draws")]
    #[schemars(
        title = "Draws",
        description = "Values drawn from each process",
        range(min = 1)
    )]
    pub draws: usize,

    #[serde(default = "default_n_bins")]
    #[schemars(
        title = "Bins",
        description = "Equal-width bins per shape profile",
        range(min = 1)
    )]
    pub n_bins: usize,

    #[schemars(title = "Processes", description = "Label -> process to simulate")]
    pub processes: BTreeMap<String, ProcessChoice>,
}

impl Default for ExperimentConfig {
    /// One default process of every kind, labelled by its kind.
    fn default() -> Self {
        Self {
            draws: default_draws(),
            n_bins: default_n_bins(),
            processes: ProcessKind::iter()
                .map(|kind| (kind.to_string(), ProcessChoice::default_for(kind)))
                .collect(),
        }
    }
}

impl ExperimentConfig {
    pub fn schema() -> Schema {
        schema_for!(ExperimentConfig)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, BuildError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BuildError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.draws == 0 {
            return Err(BuildError::InvalidParameter("draws must be >= 1".into()));
        }
        if self.n_bins == 0 {
            return Err(BuildError::InvalidParameter("n_bins must be >= 1".into()));
        }
        if self.processes.is_empty() {
            return Err(BuildError::InvalidParameter(
                "at least one process is required".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DishonestParameters;
    use std::io::Write;

    #[test]
    fn default_has_one_process_per_kind() {
        let config = ExperimentConfig::default();
        assert_eq!(config.draws, 100_000);
        assert_eq!(config.n_bins, 40);
        let labels: Vec<&str> = config.processes.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["dishonest", "honest"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_minimal_json_with_defaults() {
        let config = ExperimentConfig::from_json_str(
            r#"{"processes": {"bakery": {"type": "dishonest", "params": {"group_size": 5}}}}"#,
        )
        .unwrap();
        assert_eq!(config.draws, 100_000);
        assert_eq!(
            config.processes["bakery"],
            ProcessChoice::Dishonest(DishonestParameters {
                group_size: 5,
                ..DishonestParameters::default()
            })
        );
    }

    #[test]
    fn rejects_zero_draws_bins_and_empty_processes() {
        for raw in [
            r#"{"draws": 0, "processes": {"a": {"type": "honest", "params": {}}}}"#,
            r#"{"n_bins": 0, "processes": {"a": {"type": "honest", "params": {}}}}"#,
            r#"{"processes": {}}"#,
        ] {
            assert!(matches!(
                ExperimentConfig::from_json_str(raw),
                Err(BuildError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let raw = serde_json::to_string(&ExperimentConfig::default()).unwrap();
        file.write_all(raw.as_bytes()).unwrap();

        let loaded = ExperimentConfig::from_path(file.path()).unwrap();
        assert_eq!(loaded, ExperimentConfig::default());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExperimentConfig::from_path(dir.path().join("absent.json"));
        assert!(matches!(err, Err(BuildError::Io(_))));
    }

    #[test]
    fn schema_describes_processes() {
        let schema = serde_json::to_string(&ExperimentConfig::schema()).unwrap();
        assert!(schema.contains("processes"));
        assert!(schema.contains("n_bins"));
    }
}
