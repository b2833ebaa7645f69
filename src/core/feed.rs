//! Feed loader: fetches the list of Ops from the remote endpoint or a local
//! JSON file. One attempt per call, no retry.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::op::Op;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_FEED_URL: &str = "https://frontend-challenge.veryableops.com/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Remote(String),
    File(PathBuf),
}

impl FeedSource {
    /// `http(s)://...` is fetched, anything else is read from disk.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            FeedSource::Remote(raw.to_string())
        } else {
            FeedSource::File(expand_tilde(raw))
        }
    }
}

pub struct FeedLoader {
    source: FeedSource,
    timeout: Duration,
}

impl FeedLoader {
    pub fn new(source: FeedSource, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            FeedSource::parse(&cfg.feed_url),
            Duration::from_secs(cfg.feed_timeout_secs),
        )
    }

    pub fn load(&self) -> AppResult<Vec<Op>> {
        let raw = match &self.source {
            FeedSource::Remote(url) => fetch_remote(url, self.timeout)?,
            FeedSource::File(path) => fs::read_to_string(path).map_err(|e| {
                AppError::Feed(format!("cannot read {}: {e}", path.display()))
            })?,
        };
        parse_ops(&raw)
    }
}

fn fetch_remote(url: &str, timeout: Duration) -> AppResult<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    let res = client.get(url).send()?;
    if !res.status().is_success() {
        return Err(AppError::Feed(format!(
            "Request failed with status {}",
            res.status().as_u16()
        )));
    }
    Ok(res.text()?)
}

/// Decode a feed payload (a JSON array of Op records).
pub fn parse_ops(raw: &str) -> AppResult<Vec<Op>> {
    serde_json::from_str(raw).map_err(|e| AppError::Feed(format!("invalid payload: {e}")))
}
