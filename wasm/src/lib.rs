//! WebAssembly module for the Travel Budget & Weather planner
//!
//! Runs the planner's pure computations in the browser:
//! - Expense totals and budget utilization
//! - Forecast windows for a trip's dates
//! - Region and city lookups for the destination picker

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

use shared::locations;
use shared::{classify, parse_feed, select_window, summarize, DateRange, ExpenseLine, FeedRecord};

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("travel planner wasm loaded"));
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

fn parse_date(value: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| js_error("Invalid date", e))
}

/// Whole currency units from a JavaScript number; NaN, infinities, fractions
/// and values outside the money range are refused
fn budget_units(budget: f64) -> Result<i64, &'static str> {
    if !budget.is_finite() {
        return Err("budget must be a finite number");
    }
    if budget.fract() != 0.0 {
        return Err("budget must be a whole number");
    }
    if budget < 0.0 || budget > shared::validation::MAX_MONEY_AMOUNT as f64 {
        return Err("budget is out of range");
    }
    Ok(budget as i64)
}

/// Summarize expense lines (`[{"category": "food", "amount": 1200}, ...]`)
/// against a budget; returns the summary as JSON
#[wasm_bindgen]
pub fn summarize_expenses(lines_json: &str, budget: f64) -> Result<String, JsValue> {
    let lines: Vec<ExpenseLine> =
        serde_json::from_str(lines_json).map_err(|e| js_error("Invalid expenses JSON", e))?;
    let budget = budget_units(budget).map_err(|e| js_error("Invalid budget", e))?;
    let summary = summarize(&lines, budget);
    serde_json::to_string(&summary).map_err(|e| js_error("Serialization failed", e))
}

/// Budget status ("ok", "warning" or "over") for a raw utilization percentage
#[wasm_bindgen]
pub fn budget_status(percent: f64) -> String {
    let percent = Decimal::try_from(percent).unwrap_or(Decimal::ZERO);
    classify(percent).to_string()
}

/// Group raw forecast records into the days of `start..=end`; returns JSON
#[wasm_bindgen]
pub fn group_forecast(records_json: &str, start: &str, end: &str) -> Result<String, JsValue> {
    let records: Vec<FeedRecord> =
        serde_json::from_str(records_json).map_err(|e| js_error("Invalid forecast JSON", e))?;
    let range = DateRange::new(parse_date(start)?, parse_date(end)?)
        .map_err(|e| js_error("Invalid range", e))?;

    let days = select_window(&parse_feed(records), &range);
    serde_json::to_string(&days).map_err(|e| js_error("Serialization failed", e))
}

/// Region names in catalog order, as a JSON array
#[wasm_bindgen]
pub fn region_names() -> String {
    let names: Vec<&str> = locations::region_names().collect();
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

/// Cities of a region as JSON; an unknown region yields an empty array
#[wasm_bindgen]
pub fn cities_for_region(region: &str) -> String {
    let cities = locations::cities_in(region).unwrap_or(&[]);
    serde_json::to_string(cities).unwrap_or_else(|_| "[]".to_string())
}
