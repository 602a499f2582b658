use std::fmt::Display;

use benchtrend_runs::error::DataLoadError;
use benchtrend_vis::error::VisError;

#[derive(Debug)]
pub(crate) enum CliError {
    Load(DataLoadError),
    Vis(VisError),
    Path(String),
}

impl From<DataLoadError> for CliError {
    fn from(error: DataLoadError) -> Self {
        CliError::Load(error)
    }
}

impl From<VisError> for CliError {
    fn from(error: VisError) -> Self {
        CliError::Vis(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Load(error) => write!(f, "{cli_error} {error}"),
            CliError::Vis(error) => write!(f, "{cli_error} {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
        }
    }
}
