// ABOUTME: Food search combining the local cache with the external food database
// ABOUTME: Deduplicates API hits against cached foods and paginates the merged list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::foods;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::external::FoodApiClient;
use crate::logging::AppLogger;
use crate::models::{FoodRecord, FoodSource, Portion};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Page metadata for a merged search
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Pagination {
    /// Requested page, starting at 1
    pub current_page: u32,
    /// Local hits (page 1 only) plus API hits
    pub total_results: usize,
    /// At least 1
    pub total_pages: usize,
    /// Local foods on this page
    pub local_count: usize,
    /// API foods on this page
    pub api_count: usize,
}

/// Search response
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodSearchResults {
    /// The query as received
    pub query: String,
    /// Foods on this page
    pub foods: Vec<FoodRecord>,
    /// Page metadata
    pub pagination: Pagination,
}

/// Portions for one food
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodPortions {
    /// Food identifier
    pub food_id: String,
    /// Named serving sizes
    pub portions: Vec<Portion>,
    /// `cache` when stored with the food, else `default`
    pub source: &'static str,
}

/// Search the local cache and the external database
///
/// External failures are logged and the search degrades to local results.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty query or a database error
pub async fn search_foods(
    database: &Database,
    client: Option<&dyn FoodApiClient>,
    query: &str,
    page: u32,
) -> AppResult<FoodSearchResults> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::invalid_input("No query provided"));
    }
    let page = page.max(1);

    let local = database.search_local_foods(query).await?;
    debug!(query = %query, local = local.len(), "Local food search");

    let api = match client {
        Some(client) => match client.search(query, page).await {
            Ok(results) => results,
            Err(e) => {
                AppLogger::log_external_failure("Food API", &e.to_string());
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let (foods, pagination) = merge_results(local, api, page);
    Ok(FoodSearchResults {
        query: query.to_owned(),
        foods,
        pagination,
    })
}

/// Merge local and API hits into one page
///
/// API hits already in the local cache are dropped. Page 1 starts with up to
/// one page of local hits; remaining slots are filled from the API.
#[must_use]
pub fn merge_results(
    local: Vec<FoodRecord>,
    api: Vec<FoodRecord>,
    page: u32,
) -> (Vec<FoodRecord>, Pagination) {
    let local_ids: HashSet<&str> = local.iter().map(|f| f.food_id.as_str()).collect();
    let api: Vec<FoodRecord> = api
        .into_iter()
        .filter(|f| !local_ids.contains(f.food_id.as_str()))
        .collect();

    let first_page = page <= 1;
    let total_local = if first_page { local.len() } else { 0 };
    let total_results = total_local + api.len();

    let mut page_foods: Vec<FoodRecord> = if first_page {
        local.into_iter().take(foods::PAGE_SIZE).collect()
    } else {
        Vec::new()
    };
    let remaining = foods::PAGE_SIZE.saturating_sub(page_foods.len());
    page_foods.extend(api.into_iter().take(remaining));

    let local_count = page_foods
        .iter()
        .filter(|f| f.source == FoodSource::Local)
        .count();
    let pagination = Pagination {
        current_page: page,
        total_results,
        total_pages: total_results.div_ceil(foods::PAGE_SIZE).max(1),
        local_count,
        api_count: page_foods.len() - local_count,
    };

    (page_foods, pagination)
}

/// Default small/medium/large portions
#[must_use]
pub fn default_portions() -> Vec<Portion> {
    [
        ("small", foods::PORTION_SMALL_GRAMS),
        ("medium", foods::PORTION_MEDIUM_GRAMS),
        ("large", foods::PORTION_LARGE_GRAMS),
    ]
    .into_iter()
    .map(|(name, grams)| Portion {
        name: name.to_owned(),
        grams,
    })
    .collect()
}

/// Portions for a food: cached ones when present, else the defaults
///
/// # Errors
///
/// Returns `InvalidInput` for an empty id or a database error
pub async fn food_portions(database: &Database, food_id: &str) -> AppResult<FoodPortions> {
    let food_id = food_id.trim();
    if food_id.is_empty() {
        return Err(AppError::invalid_input("No food ID provided"));
    }

    let (portions, source) = match database.get_food_portions(food_id).await? {
        Some(portions) => (portions, "cache"),
        None => (default_portions(), "default"),
    };

    Ok(FoodPortions {
        food_id: food_id.to_owned(),
        portions,
        source,
    })
}
