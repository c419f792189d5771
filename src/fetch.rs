//! Resource fetching: a trait seam plus the blocking HTTP client.

use crate::error::{Result, SyncError};
use std::io::Read;

/// Fetches remote resources as text or raw bytes.
///
/// A non-success status is an error; implementations never retry.
pub trait ResourceFetcher {
    fn fetch_text(&self, url: &str) -> Result<String>;
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// `ureq`-backed fetcher. No timeouts are configured.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    fn get(&self, url: &str) -> Result<ureq::Response> {
        self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(status, _) => SyncError::Status {
                url: url.to_string(),
                status,
            },
            ureq::Error::Transport(t) => SyncError::Transport {
                url: url.to_string(),
                message: t.to_string(),
            },
        })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        // `Response::into_string` caps bodies at 10MB; read it ourselves.
        let mut body = String::new();
        self.get(url)?
            .into_reader()
            .read_to_string(&mut body)
            .map_err(|e| SyncError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Ok(body)
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let mut body = Vec::new();
        self.get(url)?
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| SyncError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Ok(body)
    }
}
