use anyhow::{Context, Result, bail};
use ballotstat::config::{ExperimentConfig, describe_kinds};
use ballotstat::tasks::BakerExperiment;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: ballotstat <experiment.json> | --defaults | --schema | --kinds";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [arg] = args.as_slice() else {
        bail!(USAGE);
    };

    match arg.as_str() {
        "--schema" => {
            println!("{}", serde_json::to_string_pretty(&ExperimentConfig::schema())?);
        }
        "--defaults" => {
            println!("{}", serde_json::to_string_pretty(&ExperimentConfig::default())?);
        }
        "--kinds" => println!("{}", describe_kinds()),
        "-h" | "--help" => println!("{USAGE}"),
        path => {
            let config = ExperimentConfig::from_path(path)
                .with_context(|| format!("loading experiment config from {path}"))?;
            let report = BakerExperiment::new(config)?
                .run()
                .context("running experiment")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
