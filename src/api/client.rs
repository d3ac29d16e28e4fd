use super::{Meal, SearchError, SearchResponse};

/// Typed client for the meal lookup service. Cheap to clone; the underlying
/// `reqwest::Client` pools connections across all requests.
#[derive(Debug, Clone)]
pub struct MealClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Search meals by name: `GET <base-url>/meals/search?name=<query>`.
    /// The query is percent-encoded by the client, so reserved characters
    /// (`&`, `#`, spaces) are safe to type.
    pub async fn search(&self, name: &str) -> Result<Vec<Meal>, SearchError> {
        let url = format!("{}/meals/search", self.base_url);
        tracing::info!("Searching meals: {} (name={})", url, name);

        let response = self
            .http
            .get(&url)
            .query(&[("name", name)])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;
        classify(body)
    }

    /// Fetch raw image bytes for a meal thumbnail.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, SearchError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Map the decoded envelope onto the search outcome: only `success: true`
/// with a non-empty `data` array counts as a hit, everything else is a miss.
fn classify(body: SearchResponse) -> Result<Vec<Meal>, SearchError> {
    match body.data {
        Some(meals) if body.success && !meals.is_empty() => Ok(meals),
        _ => Err(SearchError::NoMeals),
    }
}
