use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::error::DataLoadError;
use crate::error::Result;
use crate::model::Run;

pub(crate) struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }

    pub fn get_runs(&self, url: &str) -> Result<Vec<Run>> {
        debug!("Sending GET {url}");
        let response = self.client.get(url).send()?;

        match response.status() {
            status if status.is_success() => {
                let body = response.bytes()?;
                let runs: Vec<Run> = serde_json::from_slice(&body)?;
                Ok(runs)
            }
            status_code => {
                let message = response.text()?;
                let error = DataLoadError::Response {
                    status_code,
                    message,
                };
                Err(error)
            }
        }
    }
}
