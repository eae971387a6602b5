use std::{
    io::{self, IsTerminal},
    time::Duration,
};

pub mod error;
pub mod gql_queries;
pub mod sponsors;
pub mod utils;

use error::{SponsorsError, TransportError};
use sponsors::table::TableOutput;
use utils::{HttpTransport, Transport};

const DEFAULT_HOSTNAME: &str = "github.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings gathered from the environment before any command runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrap {
    pub token: Option<String>,
    pub hostname: String,
    pub timeout: Duration,
}

impl Bootstrap {
    /// Read the settings from the process environment. The hostname comes
    /// from the command line, which already falls back to `GH_HOST`.
    pub fn new(hostname: Option<String>) -> Result<Self, SponsorsError> {
        Self::from_lookup(hostname, |key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        hostname: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SponsorsError> {
        let token = lookup("GH_TOKEN")
            .or_else(|| lookup("GITHUB_TOKEN"))
            .filter(|t| !t.is_empty());
        match &token {
            Some(_) => log::debug!("I have a token"),
            None => log::debug!("No GH_TOKEN or GITHUB_TOKEN set, requests will be anonymous"),
        }

        let hostname = hostname
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string());
        log::debug!("I have hostname: {hostname}");

        let timeout = match lookup("GH_SPONSORS_TIMEOUT") {
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(SponsorsError::Config(format!(
                        "GH_SPONSORS_TIMEOUT must be a positive number of seconds, got '{value}'"
                    )))
                }
            },
        };

        Ok(Self {
            token,
            hostname,
            timeout,
        })
    }
}

/// Builds the collaborators commands need, on demand
pub struct Factory {
    pub hostname: String,
    pub http_client: Box<dyn Fn() -> Result<Box<dyn Transport>, TransportError>>,
    pub output: Box<dyn Fn() -> TableOutput>,
}

impl Factory {
    /// Real HTTP and stdout
    pub fn new(bootstrap: Bootstrap) -> Self {
        let Bootstrap {
            token,
            hostname,
            timeout,
        } = bootstrap;

        Self {
            hostname,
            http_client: Box::new(move || -> Result<Box<dyn Transport>, TransportError> {
                let transport = HttpTransport::new(token.as_deref(), timeout)?;
                Ok(Box::new(transport) as Box<dyn Transport>)
            }),
            output: Box::new(stdout_output),
        }
    }
}

fn stdout_output() -> TableOutput {
    let stdout = io::stdout();
    let is_terminal = stdout.is_terminal();

    TableOutput {
        out: Box::new(stdout),
        is_terminal,
    }
}
