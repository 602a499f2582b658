use std::env;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

use crate::error::CliError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Chart the benchmark runs and generate an HTML page with the charts.
    View(ViewArgs),
}

#[derive(Args)]
pub(crate) struct ViewArgs {
    /// Specify the location of the benchmark runs JSON document.
    /// The location is either an `http://` or `https://` URL or a file path.
    #[arg(short, long)]
    pub(crate) source: String,

    /// Specify the path where the generated page will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,

    /// Specify the title of the generated page.
    #[arg(short, long, default_value = "Benchmarks")]
    pub(crate) title: String,

    /// Label the runs with their UTC date instead of the local date.
    #[arg(short, long)]
    pub(crate) utc: bool,

    /// Specify the seed of the chart colors.
    /// Without a seed the colors change on every invocation.
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// Specify the timeout, in seconds, of fetching the runs over HTTP.
    #[arg(long)]
    pub(crate) timeout: Option<u64>,
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}
