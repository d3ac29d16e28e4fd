pub mod client;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// A single recipe record returned by the lookup service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Meal {
    /// Opaque identifier, unique within one result set.
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: String,
    /// URL of the meal's thumbnail image.
    pub image: String,
    #[serde(rename = "ingredientCount")]
    pub ingredient_count: u32,
}

/// Wire envelope of the lookup service: `{ success: bool, data?: [Meal] }`.
/// Unknown fields (e.g. `message`) are ignored; a missing `success` flag
/// reads as false.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<Meal>>,
}

/// Errors produced while searching for meals.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("no meals matched the query")]
    NoMeals,
}

impl SearchError {
    /// Fold the detailed error into the category shown to the user.
    pub fn failure(&self) -> SearchFailure {
        match self {
            SearchError::NoMeals => SearchFailure::NoMeals,
            SearchError::Transport(_) => SearchFailure::Fetch,
        }
    }
}

/// User-facing failure category. Detail (status codes, IO errors) stays in
/// the logs; the view only ever shows one of these two messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    /// The service answered but had no match for the query.
    NoMeals,
    /// Transport, status, or decode failure anywhere in the round trip.
    Fetch,
}

impl SearchFailure {
    pub fn user_message(self) -> &'static str {
        match self {
            SearchFailure::NoMeals => "No meals found",
            SearchFailure::Fetch => "Failed to fetch meals",
        }
    }
}

/// The upstream serializes ids as strings, but numeric ids appear in the
/// wild; accept both and keep the value opaque.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_meal_with_string_id() {
        let meal: Meal = serde_json::from_str(
            r#"{"id":"52771","name":"Spicy Arrabiata Penne","image":"https://example.com/penne.jpg","ingredientCount":9}"#,
        )
        .unwrap();
        assert_eq!(meal.id, "52771");
        assert_eq!(meal.name, "Spicy Arrabiata Penne");
        assert_eq!(meal.ingredient_count, 9);
    }

    #[test]
    fn test_decode_meal_with_numeric_id() {
        let meal: Meal = serde_json::from_str(
            r#"{"id":1,"name":"Arrabiata","image":"x.jpg","ingredientCount":3}"#,
        )
        .unwrap();
        assert_eq!(meal.id, "1");
        assert_eq!(meal.ingredient_count, 3);
    }

    #[test]
    fn test_decode_envelope_ignores_extra_fields() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"success":true,"message":"Success","data":[{"id":"1","name":"Arrabiata","image":"x.jpg","ingredientCount":3}]}"#,
        )
        .unwrap();
        assert!(response.success);
        assert_eq!(response.data.unwrap().len(), 1);
    }

    #[test]
    fn test_decode_envelope_missing_success_reads_false() {
        let response: SearchResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(!response.success);
    }

    #[test]
    fn test_decode_envelope_rejects_non_object_body() {
        assert!(serde_json::from_str::<SearchResponse>(r#"[1,2,3]"#).is_err());
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(SearchFailure::NoMeals.user_message(), "No meals found");
        assert_eq!(SearchFailure::Fetch.user_message(), "Failed to fetch meals");
    }
}
