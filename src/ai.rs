use tracing::debug;

const GENERATE_URL_TEMPLATE: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent";

/// Client for the outbound marketing-copy generation call. One request per
/// invocation, no retries: provider failures surface straight to the caller.
#[derive(Clone)]
pub struct DescriptionGenerator {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl DescriptionGenerator {
    pub fn from_env() -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: std::env::var("GEMINI_API_KEY").ok(),
            model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
        }
    }

    fn prompt(title: &str, category: &str) -> String {
        format!(
            "You are a marketing expert. Write a short, compelling description \
             (max 100 words) for a freelance service titled: \"{title}\". \
             The category is: \"{category}\"."
        )
    }

    /// Ask the provider for a service description and return the text of
    /// the first candidate.
    pub async fn generate(&self, title: &str, category: &str) -> Result<String, String> {
        let api_key = self.api_key.as_ref().ok_or("GEMINI_API_KEY is not set")?;
        let url = GENERATE_URL_TEMPLATE.replace("{}", &self.model);
        debug!("Requesting description from {}", self.model);

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": Self::prompt(title, category) }] }],
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Failed to call text generation API: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Text generation API returned HTTP {status}"));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse generation response: {e}"))?;

        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| "No text in generation response".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_mentions_title_and_category() {
        let prompt = DescriptionGenerator::prompt("Logo design", "design");
        assert!(prompt.contains("\"Logo design\""));
        assert!(prompt.contains("\"design\""));
    }
}
