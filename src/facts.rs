// Fun-fact resolution module
// Prefers a locally derived Armstrong explanation, then the external facts
// service, then a generic fallback. Resolution never fails.

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

use crate::classify;
use crate::config::FactsConfig;
use crate::logger;

/// Numbers rendered longer than this many characters (sign included) are
/// never sent to the facts service.
const MAX_FACT_CHARS: usize = 10;

#[derive(Debug, Error)]
enum FactError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

/// Client for the external facts service.
///
/// Holds one `reqwest::Client` for the process lifetime; the request timeout
/// bounds the only blocking operation in the request path.
pub struct FactClient {
    client: reqwest::Client,
    base_url: String,
}

impl FactClient {
    pub fn new(cfg: &FactsConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(cfg.timeout_secs))
                .build()
                .unwrap_or_default(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a fun fact for `n`. Always returns a non-empty string.
    ///
    /// Order matters: the size guard runs before the Armstrong
    /// short-circuit, and the service is contacted only when neither local
    /// branch applies.
    pub async fn fun_fact(&self, n: i64) -> String {
        if n.to_string().len() > MAX_FACT_CHARS {
            return format!("{n} is too large to process for fun facts.");
        }

        if classify::is_armstrong(n) {
            return armstrong_fact(n);
        }

        match self.fetch_math_fact(n).await {
            Ok(fact) => fact,
            Err(err) => {
                logger::log_warning(&format!("Facts service unavailable for {n}: {err}"));
                format!("{n} is a fascinating number!")
            }
        }
    }

    /// One outbound `GET <base>/<n>/math`; only a 200 body counts.
    async fn fetch_math_fact(&self, n: i64) -> Result<String, FactError> {
        let url = format!("{}/{}/math", self.base_url, n);
        let response = self.client.get(&url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(FactError::Status(response.status()));
        }
        Ok(response.text().await?)
    }
}

/// Render the Armstrong decomposition of `n`,
/// e.g. "371 is an Armstrong number because 3^3 + 7^3 + 1^3 = 371".
pub fn armstrong_fact(n: i64) -> String {
    let ds = classify::digits(n);
    let k = ds.len();
    let terms = ds
        .iter()
        .map(|d| format!("{d}^{k}"))
        .collect::<Vec<_>>()
        .join(" + ");
    format!("{n} is an Armstrong number because {terms} = {n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> FactClient {
        FactClient::new(&FactsConfig {
            base_url: base_url.to_string(),
            timeout_secs: 1,
        })
    }

    #[test]
    fn test_armstrong_fact_rendering() {
        assert_eq!(
            armstrong_fact(371),
            "371 is an Armstrong number because 3^3 + 7^3 + 1^3 = 371"
        );
        assert_eq!(armstrong_fact(9474), "9474 is an Armstrong number because 9^4 + 4^4 + 7^4 + 4^4 = 9474");
        assert_eq!(armstrong_fact(5), "5 is an Armstrong number because 5^1 = 5");
    }

    #[tokio::test]
    async fn test_size_guard_runs_before_everything() {
        // 11 characters; no request is made regardless of the base URL.
        let client = client_for("http://invalid.invalid");
        assert_eq!(
            client.fun_fact(12_345_678_901).await,
            "12345678901 is too large to process for fun facts."
        );
        // The sign counts toward the rendered length.
        assert_eq!(
            client.fun_fact(-1_234_567_890).await,
            "-1234567890 is too large to process for fun facts."
        );
    }

    #[tokio::test]
    async fn test_armstrong_numbers_resolve_locally() {
        let client = client_for("http://invalid.invalid");
        assert_eq!(
            client.fun_fact(371).await,
            "371 is an Armstrong number because 3^3 + 7^3 + 1^3 = 371"
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back() {
        // Port 9 (discard) is closed on any sane host; the connection is
        // refused and the generic fallback applies.
        let client = client_for("http://127.0.0.1:9");
        assert_eq!(client.fun_fact(123).await, "123 is a fascinating number!");
    }
}
