// ABOUTME: kaloriabazis.hu food search client and the single response adapter
// ABOUTME: Normalizes heterogeneous food payloads into FoodRecord; includes a mock client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External food database client
//!
//! The public kaloriabazis.hu search is an AJAX endpoint that expects the
//! cookies set by its landing page, so every search warms up the cookie jar
//! first. Its payloads use loosely typed fields (`ID` vs `food_id`, nutrient
//! values as text with unit suffixes); [`normalize_food`] is the only place
//! those shapes are interpreted.

use crate::constants::{foods, meals};
use crate::errors::{AppError, AppResult};
use crate::models::{FoodRecord, FoodSource, Portion};
use async_trait::async_trait;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::debug;

const SERVICE: &str = "Food API";
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Food API client configuration
#[derive(Debug, Clone)]
pub struct FoodApiConfig {
    /// Whether external search is attempted at all
    pub enabled: bool,
    /// Base URL (default: <https://kaloriabazis.hu>)
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FoodApiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://kaloriabazis.hu".to_owned(),
            timeout_secs: 10,
        }
    }
}

/// Search seam over the external food database
#[async_trait]
pub trait FoodApiClient: Send + Sync {
    /// Search foods by free text; `page` starts at 1
    ///
    /// # Errors
    ///
    /// Returns an error if the external service cannot be reached or answers
    /// with an error status
    async fn search(&self, query: &str, page: u32) -> AppResult<Vec<FoodRecord>>;
}

/// reqwest-backed kaloriabazis.hu client
pub struct KaloriaBazisClient {
    config: FoodApiConfig,
    http_client: reqwest::Client,
}

impl KaloriaBazisClient {
    /// Create a new client with its own cookie jar
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(config: FoodApiConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    async fn warm_up(&self) -> AppResult<()> {
        self.http_client
            .get(format!("{}/", self.base_url()))
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "hu-HU,hu;q=0.9,en;q=0.8")
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE, e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl FoodApiClient for KaloriaBazisClient {
    async fn search(&self, query: &str, page: u32) -> AppResult<Vec<FoodRecord>> {
        self.warm_up().await?;

        let page = page.to_string();
        let response = self
            .http_client
            .get(format!("{}/getfood.php", self.base_url()))
            .query(&[("fav", "false"), ("q", query), ("p", page.as_str())])
            .header("Accept", "application/json, text/javascript, */*; q=0.01")
            .header("Accept-Language", "hu-HU,hu;q=0.9,en;q=0.8")
            .header("Referer", format!("{}/", self.base_url()))
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE, e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                SERVICE,
                format!("HTTP {}", response.status()),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::external_service(SERVICE, e.to_string()))?;

        parse_search_body(&body)
    }
}

/// Interpret a raw search response body
///
/// # Errors
///
/// Returns an error if a non-empty body is not valid JSON
pub fn parse_search_body(body: &str) -> AppResult<Vec<FoodRecord>> {
    if body.contains(foods::NO_RESULTS_MARKER) || body.len() < foods::MIN_RESPONSE_BODY_LEN {
        debug!(body_len = body.len(), "Food API returned no results");
        return Ok(Vec::new());
    }

    let data: Value = serde_json::from_str(body)
        .map_err(|e| AppError::external_service(SERVICE, format!("JSON parse error: {e}")))?;

    let results = ["results2", "results1"]
        .iter()
        .find_map(|key| data.get(*key).and_then(Value::as_array));

    Ok(results
        .map(|items| {
            items
                .iter()
                .filter_map(|item| normalize_food(item, FoodSource::Api))
                .collect()
        })
        .unwrap_or_default())
}

/// Convert any known food payload shape into a [`FoodRecord`]
///
/// Accepts `food_id`/`ID`/`id`/`fid` identifiers (text or numeric), nutrient
/// values as numbers or text, and the legacy `cal`/`carbo`/`piece` keys.
/// Returns `None` for payloads that are not JSON objects.
#[must_use]
pub fn normalize_food(value: &Value, source: FoodSource) -> Option<FoodRecord> {
    let object = value.as_object()?;

    let name = object
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_owned();

    let food_id = ["food_id", "ID", "id", "fid"]
        .iter()
        .find_map(|key| object.get(*key).and_then(identifier_text))
        .unwrap_or_else(|| custom_food_id(&name));

    let serving = ["piece", "serving"]
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(foods::DEFAULT_SERVING)
        .to_owned();

    let portions = object
        .get("portions")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse_portion).collect())
        .unwrap_or_default();

    Some(FoodRecord {
        food_id,
        name,
        calories: nutrient_field(object, &["cal", "calories"]),
        protein: nutrient_field(object, &["protein"]),
        carbs: nutrient_field(object, &["carbo", "carbs", "carbohydrates"]),
        fat: nutrient_field(object, &["fat"]),
        serving,
        portions,
        source,
    })
}

fn nutrient_field(object: &Map<String, Value>, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|key| object.get(*key))
        .map_or(0.0, parse_nutrient)
}

fn identifier_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_portion(value: &Value) -> Option<Portion> {
    let name = value
        .get("name")
        .or_else(|| value.get("label"))
        .and_then(Value::as_str)?;
    let grams = value
        .get("grams")
        .or_else(|| value.get("weight"))
        .map(parse_nutrient)
        .filter(|g| *g > 0.0)?;
    Some(Portion {
        name: name.to_owned(),
        grams,
    })
}

/// Parse a nutrient value given as a number or as text such as `"52 kcal"`
///
/// Unit suffixes `kcal`, `cal` and `g` are stripped; `n/a`, `na`, `null`,
/// `none`, empty and unparseable text count as zero. The result is clamped
/// to `[0, 10000]`.
#[must_use]
pub fn parse_nutrient(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_nutrient_text(s),
        _ => 0.0,
    };

    if raw.is_finite() {
        raw.clamp(0.0, meals::MAX_NUTRIENT_VALUE)
    } else {
        0.0
    }
}

fn parse_nutrient_text(text: &str) -> f64 {
    let stripped = text
        .trim()
        .replace("kcal", "")
        .replace("cal", "")
        .replace('g', "");
    let stripped = stripped.trim();

    if matches!(
        stripped.to_lowercase().as_str(),
        "" | "n/a" | "na" | "null" | "none"
    ) {
        return 0.0;
    }

    stripped.parse().unwrap_or(0.0)
}

/// Stable identifier for foods that arrive without one
#[must_use]
pub fn custom_food_id(name: &str) -> String {
    let digest = hex::encode(Sha256::digest(name.as_bytes()));
    let short = digest.get(..meals::CUSTOM_FOOD_ID_HEX_LEN).unwrap_or(digest.as_str());
    format!("{}{short}", meals::CUSTOM_FOOD_PREFIX)
}

/// Mock food client for testing (no API calls)
#[derive(Default)]
pub struct MockFoodApiClient {
    foods: Vec<FoodRecord>,
    fail: bool,
}

impl MockFoodApiClient {
    /// Create a mock client with predefined test data
    #[must_use]
    pub fn new() -> Self {
        let food = |id: &str, name: &str, calories: f64, protein: f64, carbs: f64, fat: f64| {
            FoodRecord {
                food_id: id.to_owned(),
                name: name.to_owned(),
                calories,
                protein,
                carbs,
                fat,
                serving: foods::DEFAULT_SERVING.to_owned(),
                portions: Vec::new(),
                source: FoodSource::Api,
            }
        };

        Self::with_foods(vec![
            food("1001", "alma", 52.0, 0.3, 13.8, 0.2),
            food("1002", "almalé", 46.0, 0.1, 11.3, 0.1),
            food("1003", "banán", 89.0, 1.1, 22.8, 0.3),
            food("1004", "csirkemell", 165.0, 31.0, 0.0, 3.6),
            food("1005", "zabpehely", 389.0, 16.9, 66.3, 6.9),
        ])
    }

    /// Create a mock client returning the given foods
    #[must_use]
    pub fn with_foods(foods: Vec<FoodRecord>) -> Self {
        Self { foods, fail: false }
    }

    /// Create a mock client whose searches always fail
    #[must_use]
    pub fn failing() -> Self {
        Self {
            foods: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl FoodApiClient for MockFoodApiClient {
    async fn search(&self, query: &str, page: u32) -> AppResult<Vec<FoodRecord>> {
        if self.fail {
            return Err(AppError::external_service(SERVICE, "mock failure"));
        }

        let needle = query.to_lowercase();
        let skip = (page.max(1) as usize - 1) * foods::PAGE_SIZE;
        Ok(self
            .foods
            .iter()
            .filter(|food| food.name.to_lowercase().contains(&needle))
            .skip(skip)
            .take(foods::PAGE_SIZE)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_nutrient_strips_units() {
        assert!((parse_nutrient(&json!("52 kcal")) - 52.0).abs() < f64::EPSILON);
        assert!((parse_nutrient(&json!("13.8g")) - 13.8).abs() < f64::EPSILON);
        assert!((parse_nutrient(&json!(" 120cal ")) - 120.0).abs() < f64::EPSILON);
        assert!((parse_nutrient(&json!(7.5)) - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_nutrient_placeholders_are_zero() {
        for text in ["", "n/a", "NA", "null", "None", "abc"] {
            assert!(parse_nutrient(&json!(text)).abs() < f64::EPSILON, "{text}");
        }
        assert!(parse_nutrient(&Value::Null).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_nutrient_clamps() {
        assert!(parse_nutrient(&json!("-5")).abs() < f64::EPSILON);
        assert!((parse_nutrient(&json!(25_000)) - 10_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_api_shape() {
        let payload = json!({
            "ID": 4521,
            "name": "alma",
            "cal": "52 kcal",
            "protein": "0.3g",
            "carbo": "13.8",
            "fat": 0.2
        });
        let food = normalize_food(&payload, FoodSource::Api).unwrap();

        assert_eq!(food.food_id, "4521");
        assert_eq!(food.serving, "100g");
        assert_eq!(food.source, FoodSource::Api);
        assert!((food.calories - 52.0).abs() < f64::EPSILON);
        assert!((food.carbs - 13.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_prefers_food_id_and_reads_portions() {
        let payload = json!({
            "food_id": "abc",
            "ID": "ignored",
            "name": "kenyér",
            "calories": 250,
            "carbs": 48,
            "piece": "1 szelet",
            "portions": [{"label": "szelet", "weight": 30}, {"name": "broken"}]
        });
        let food = normalize_food(&payload, FoodSource::Local).unwrap();

        assert_eq!(food.food_id, "abc");
        assert_eq!(food.serving, "1 szelet");
        assert_eq!(food.portions.len(), 1);
        assert!((food.portions[0].grams - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_generates_custom_id() {
        let food = normalize_food(&json!({"name": "házi süti"}), FoodSource::Local).unwrap();
        assert!(food.food_id.starts_with("custom_"));
        assert_eq!(food.food_id.len(), "custom_".len() + 8);
        assert_eq!(food.food_id, custom_food_id("házi süti"));
    }

    #[test]
    fn test_normalize_rejects_non_objects() {
        assert!(normalize_food(&json!([1, 2]), FoodSource::Api).is_none());
    }

    #[test]
    fn test_parse_search_body() {
        assert!(parse_search_body("die_with_text('nincs')").unwrap().is_empty());
        assert!(parse_search_body("{}").unwrap().is_empty());

        let body = json!({
            "results1": [{"ID": "1", "name": "régi"}],
            "results2": [{"ID": "2", "name": "alma", "cal": "52"}, {"ID": "3", "name": "almalé"}]
        })
        .to_string();
        let results = parse_search_body(&body).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].food_id, "2");
    }

    #[tokio::test]
    async fn test_mock_client_search() {
        let client = MockFoodApiClient::new();
        let results = client.search("ALMA", 1).await.unwrap();
        assert_eq!(results.len(), 2);
        assert!(client.search("alma", 2).await.unwrap().is_empty());
        assert!(MockFoodApiClient::failing().search("alma", 1).await.is_err());
    }
}
