//! Loading the benchmark history document.

mod client;

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::info;

use crate::error::Result;
use crate::fetch::client::HttpClient;
use crate::model::Run;

const FILE_SCHEME: &str = "file://";

/// A source of benchmark runs.
pub trait Fetch {
    /// Retrieves and parses the runs found at `locator`.
    fn fetch(&self, locator: &str) -> Result<Vec<Run>>;
}

/// Fetches runs over HTTP for `http://` and `https://` locators and
/// from the filesystem for everything else.
pub struct Fetcher {
    client: HttpClient,
}

impl Fetcher {
    /// Creates a fetcher whose HTTP requests never time out.
    pub fn new() -> Result<Fetcher> {
        Self::with_timeout(None)
    }

    /// Creates a fetcher whose HTTP requests fail after `timeout`.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Fetcher> {
        let client = HttpClient::new(timeout)?;
        Ok(Self { client })
    }
}

impl Fetch for Fetcher {
    fn fetch(&self, locator: &str) -> Result<Vec<Run>> {
        let runs = match Locator::parse(locator) {
            Locator::Url(url) => self.client.get_runs(url)?,
            Locator::Path(path) => read_runs(path)?,
        };

        info!("Fetched {} benchmark runs from `{locator}`.", runs.len());
        Ok(runs)
    }
}

#[derive(Debug, PartialEq)]
enum Locator<'a> {
    Url(&'a str),
    Path(&'a Path),
}

impl<'a> Locator<'a> {
    fn parse(locator: &'a str) -> Locator<'a> {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            Locator::Url(locator)
        } else {
            let path = locator.strip_prefix(FILE_SCHEME).unwrap_or(locator);
            Locator::Path(Path::new(path))
        }
    }
}

fn read_runs(path: &Path) -> Result<Vec<Run>> {
    let content = fs::read(path)?;
    let runs = serde_json::from_slice(&content)?;
    Ok(runs)
}
