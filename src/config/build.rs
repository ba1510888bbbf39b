use crate::config::{BuildError, DishonestParameters, HonestParameters, ProcessChoice};
use crate::processes::{DishonestProcess, GroupMaxExt, HonestProcess};

pub type BoxedProcess = Box<dyn Iterator<Item = f64> + Send>;

impl TryFrom<HonestParameters> for HonestProcess {
    type Error = BuildError;

    fn try_from(parameters: HonestParameters) -> Result<Self, Self::Error> {
        let process = match parameters.seed {
            Some(seed) => HonestProcess::with_seed(parameters.mean, parameters.std_dev, seed),
            None => HonestProcess::new(parameters.mean, parameters.std_dev),
        };
        process.map_err(BuildError::from)
    }
}

impl TryFrom<DishonestParameters> for DishonestProcess {
    type Error = BuildError;

    fn try_from(parameters: DishonestParameters) -> Result<Self, Self::Error> {
        if parameters.group_size == 0 {
            return Err(BuildError::InvalidParameter(
                "group_size must be >= 1".into(),
            ));
        }
        let draws = HonestProcess::try_from(HonestParameters {
            mean: parameters.mean,
            std_dev: parameters.std_dev,
            seed: parameters.seed,
        })?;
        draws
            .group_max(parameters.group_size)
            .map_err(BuildError::from)
    }
}

pub fn build_process(choice: ProcessChoice) -> Result<BoxedProcess, BuildError> {
    match choice {
        ProcessChoice::Honest(p) => {
            let s = HonestProcess::try_from(p)?;
            Ok(Box::new(s))
        }
        ProcessChoice::Dishonest(p) => {
            let s = DishonestProcess::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}
