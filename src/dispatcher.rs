// src/dispatcher.rs

use reqwest::Client;
use std::sync::Mutex;

use crate::errors::Result;
use crate::origin::Origin;
use crate::protocol::{CommandRequest, ServiceResponse};

/// Fixed prompt shown when the user submits an empty command. Rendered
/// locally; no request is issued.
pub const EMPTY_PROMPT: &str = "Please enter a command.";

const EXECUTE_PREFIX: &str = "Command Output:\n";
const CURRENT_DIR_PREFIX: &str = "Current Directory:\n";
const ERROR_PREFIX: &str = "Error:\n";
const CONNECT_FAILED_PREFIX: &str = "Failed to connect to the server: ";

/// A text surface the dispatcher renders outcomes into, standing in for an
/// output element on the page.
///
/// Interior mutability lets two in-flight operations share a region without
/// coordination: whichever response resolves last overwrites the other. The
/// write happens synchronously once a response is decoded, so partial renders
/// never interleave.
#[derive(Debug, Default)]
pub struct OutputRegion {
    text: Mutex<String>,
}

impl OutputRegion {
    fn set(&self, text: String) {
        *self.text.lock().unwrap_or_else(|e| e.into_inner()) = text;
    }

    fn clear(&self) {
        self.set(String::new());
    }

    /// Returns a copy of the current contents.
    pub fn snapshot(&self) -> String {
        self.text.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Owns the request lifecycle against the execution service: validate input,
/// percent-encode, issue the GET, decode the `{success, message}` envelope
/// and render the outcome into one of two independent output regions.
///
/// Every operation fully resolves its own outcome into rendered text; none
/// returns an error to the caller. Nothing is retried and no client-side
/// timeout is imposed.
pub struct CommandDispatcher {
    client: Client,
    origin: Origin,
    output: OutputRegion,
    current_dir_output: OutputRegion,
}

impl CommandDispatcher {
    /// Creates a dispatcher pointed at the given service origin.
    pub fn new(origin: Origin) -> Self {
        Self {
            client: Client::new(),
            origin,
            output: OutputRegion::default(),
            current_dir_output: OutputRegion::default(),
        }
    }

    /// The region holding the latest `execute` outcome.
    pub fn output(&self) -> &OutputRegion {
        &self.output
    }

    /// The region holding the latest directory-query outcome.
    pub fn current_dir_output(&self) -> &OutputRegion {
        &self.current_dir_output
    }

    /// Submits a command for execution and renders the outcome into the
    /// execute output region.
    ///
    /// Input that is empty after trimming short-circuits to the instructional
    /// prompt without touching the network.
    pub async fn execute(&self, raw_text: &str) {
        let Some(request) = CommandRequest::from_input(raw_text) else {
            self.output.set(EMPTY_PROMPT.to_string());
            return;
        };

        let url = format!("{}/execute/{}", self.origin, request.encoded_path());
        log::debug!("GET {}", url);

        let rendered = match self.fetch_envelope(&url).await {
            Ok(resp) if resp.success => format!("{}{}", EXECUTE_PREFIX, resp.message),
            Ok(resp) => format!("{}{}", ERROR_PREFIX, resp.message),
            Err(err) => format!("{}{}", CONNECT_FAILED_PREFIX, err),
        };
        self.output.set(rendered);
    }

    /// Asks the service for its current working directory and renders the
    /// outcome into the directory region, leaving the execute region alone.
    pub async fn query_current_dir(&self) {
        let url = format!("{}/current_dir", self.origin);
        log::debug!("GET {}", url);

        let rendered = match self.fetch_envelope(&url).await {
            Ok(resp) if resp.success => format!("{}{}", CURRENT_DIR_PREFIX, resp.message),
            Ok(resp) => format!("{}{}", ERROR_PREFIX, resp.message),
            Err(err) => format!("{}{}", CONNECT_FAILED_PREFIX, err),
        };
        self.current_dir_output.set(rendered);
    }

    /// Empties both output regions. Total and idempotent.
    pub fn clear(&self) {
        self.output.clear();
        self.current_dir_output.clear();
    }

    /// One GET, body decoded as the service envelope.
    ///
    /// The HTTP status is not inspected: a non-2xx response with
    /// a valid envelope still renders through the envelope, and a body that
    /// fails to decode lands in the connection-failure tier alongside
    /// transport errors.
    async fn fetch_envelope(&self, url: &str) -> Result<ServiceResponse> {
        let resp = self.client.get(url).send().await?;
        let body = resp.text().await?;
        let envelope: ServiceResponse = serde_json::from_str(&body)?;
        Ok(envelope)
    }
}
