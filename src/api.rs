//! Leaderboard service client
//!
//! Talks to the score backend over HTTP. Failures never cross this boundary:
//! a failed fetch degrades to an empty list and a failed submit to `false`,
//! with the cause logged.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// HTTP client for the leaderboard backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Fetch the global high scores. Empty on any failure.
    pub fn fetch_high_scores(&self) -> Vec<ScoreEntry> {
        match self.try_fetch_high_scores() {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("high score fetch failed: {err:#}");
                Vec::new()
            }
        }
    }

    fn try_fetch_high_scores(&self) -> Result<Vec<ScoreEntry>> {
        let resp = self
            .http
            .get(format!("{}/highscores", self.base_url))
            .send()
            .context("highscores request failed")?;
        if !resp.status().is_success() {
            return Err(anyhow!("highscores HTTP {}", resp.status()));
        }
        resp.json().context("highscores JSON parse failed")
    }

    /// Submit a score. True iff the backend answered with a success status.
    pub fn submit_score(&self, name: &str, score: u32) -> bool {
        let entry = ScoreEntry {
            name: name.to_string(),
            score,
        };
        match self.try_submit(&entry) {
            Ok(accepted) => accepted,
            Err(err) => {
                log::warn!("score submit failed: {err:#}");
                false
            }
        }
    }

    fn try_submit(&self, entry: &ScoreEntry) -> Result<bool> {
        let resp = self
            .http
            .post(format!("{}/score", self.base_url))
            .json(entry)
            .send()
            .context("score request failed")?;
        Ok(resp.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_wire_shape() {
        let entry = ScoreEntry {
            name: "Master".to_string(),
            score: 5000,
        };
        let json = serde_json::to_string(&entry).expect("serializes");
        assert_eq!(json, r#"{"name":"Master","score":5000}"#);

        let parsed: Vec<ScoreEntry> = serde_json::from_str(
            r#"[{"name":"Master","score":5000},{"name":"Player1","score":3000}]"#,
        )
        .expect("parses");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], entry);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_unreachable_backend_degrades() {
        // Nothing listens here; both calls must degrade, not error
        let client = ApiClient::new("http://127.0.0.1:1");
        assert!(client.fetch_high_scores().is_empty());
        assert!(!client.submit_score("nobody", 100));
    }
}
