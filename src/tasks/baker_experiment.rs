use crate::config::{BuildError, ExperimentConfig, build_process};
use crate::core::Sample;
use crate::distribution::{Pmf, compare, relative_position};
use crate::statistics::{
    FiveNumberSummary, five_number_summary, mean, median, skewness, standard_deviation,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};

/// Draws a prefix from every configured process and profiles the samples
/// side by side.
pub struct BakerExperiment {
    config: ExperimentConfig,
}

impl BakerExperiment {
    pub fn new(config: ExperimentConfig) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn run(&self) -> Result<ExperimentReport, BuildError> {
        let start = Instant::now();
        let draws = self.config.draws;

        let mut samples = BTreeMap::new();
        for (label, choice) in &self.config.processes {
            let kind = choice.kind();
            let sample: Sample = build_process(choice.clone())?.take(draws).collect();
            debug!(%label, %kind, n = sample.len(), "drew sample");
            samples.insert(label.clone(), sample);
        }

        let profiles = compare(&samples, self.config.n_bins)?;
        let processes = summarize_profiles(&self.config, &samples, profiles)?;

        info!(
            processes = processes.len(),
            draws,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "experiment finished"
        );
        Ok(ExperimentReport {
            draws,
            n_bins: self.config.n_bins,
            processes,
        })
    }
}

/// Pairs every shape profile with its sample and configured kind. Each side
/// must cover exactly the same labels.
fn summarize_profiles(
    config: &ExperimentConfig,
    samples: &BTreeMap<String, Sample>,
    profiles: BTreeMap<String, Pmf>,
) -> Result<BTreeMap<String, ProcessReport>, BuildError> {
    if profiles.len() != samples.len() {
        return Err(BuildError::InvalidParameter(format!(
            "{} shape profiles for {} samples",
            profiles.len(),
            samples.len()
        )));
    }

    let mut processes = BTreeMap::new();
    for (label, pmf) in profiles {
        let (Some(sample), Some(choice)) = (samples.get(&label), config.processes.get(&label))
        else {
            return Err(BuildError::InvalidParameter(format!(
                "no sample drawn for profile {label}"
            )));
        };
        let report =
            ProcessReport::summarize(choice.kind().to_string(), sample, pmf, config.n_bins)?;
        info!(
            %label,
            mean = report.mean,
            std_dev = report.std_dev,
            skewness = report.skewness,
            "process summarized"
        );
        processes.insert(label, report);
    }
    Ok(processes)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub draws: usize,
    pub n_bins: usize,
    pub processes: BTreeMap<String, ProcessReport>,
}

/// Summary of one simulated sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessReport {
    pub kind: String,
    pub mean: f64,
    pub std_dev: f64,
    pub skewness: f64,
    pub median: f64,
    pub summary: FiveNumberSummary,
    /// Peak bin on the 0..1 scale of this sample's own range.
    pub peak_position: f64,
    pub pmf: Pmf,
}

impl ProcessReport {
    fn summarize(
        kind: String,
        sample: &Sample,
        pmf: Pmf,
        n_bins: usize,
    ) -> Result<Self, BuildError> {
        let peak_position = pmf
            .mode()
            .map(|b| relative_position(b, n_bins))
            .unwrap_or(0.0);
        Ok(Self {
            kind,
            mean: mean(sample)?,
            std_dev: standard_deviation(sample)?,
            skewness: skewness(sample)?,
            median: median(sample)?,
            summary: five_number_summary(sample)?,
            peak_position,
            pmf,
        })
    }
}
