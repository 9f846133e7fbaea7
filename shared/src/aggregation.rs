//! Expense aggregation: per-category totals and budget utilization

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Expense, ExpenseCategory};

/// Utilization below this percentage is `ok`
pub const WARNING_THRESHOLD_PERCENT: i64 = 70;

/// Utilization strictly above this percentage is `over`
pub const OVER_THRESHOLD_PERCENT: i64 = 100;

/// Anything that can be summed into a category bucket
pub trait Categorized {
    fn category(&self) -> ExpenseCategory;
    fn amount(&self) -> i64;
}

impl Categorized for Expense {
    fn category(&self) -> ExpenseCategory {
        self.category
    }

    fn amount(&self) -> i64 {
        self.amount
    }
}

/// Minimal expense shape for callers that only hold category and amount
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseLine {
    pub category: ExpenseCategory,
    pub amount: i64,
}

impl Categorized for ExpenseLine {
    fn category(&self) -> ExpenseCategory {
        self.category
    }

    fn amount(&self) -> i64 {
        self.amount
    }
}

/// Summed amount for one category, ready for charting
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub label: &'static str,
    pub amount: i64,
    pub color: &'static str,
}

/// Three-tier budget classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Ok,
    Warning,
    Over,
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetStatus::Ok => write!(f, "ok"),
            BudgetStatus::Warning => write!(f, "warning"),
            BudgetStatus::Over => write!(f, "over"),
        }
    }
}

/// Budget utilization with both the raw and the display percentage
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BudgetUtilization {
    pub raw_percent: Decimal,
    /// Raw percentage capped at 100
    pub display_percent: Decimal,
    pub status: BudgetStatus,
}

impl BudgetUtilization {
    pub fn new(total: i64, budget: i64) -> Self {
        let raw_percent = utilization_percent(total, budget);
        Self {
            raw_percent,
            display_percent: display_percent(raw_percent),
            status: classify(raw_percent),
        }
    }
}

/// Everything the expense charts need for one trip
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExpenseSummary {
    pub categories: Vec<CategoryTotal>,
    pub total: i64,
    pub budget: i64,
    pub utilization: BudgetUtilization,
}

/// Sum amounts per category.
///
/// Every category is present in the output, in canonical display order,
/// even when its total is zero. Sums saturate at the `i64` bounds.
pub fn categorize<T: Categorized>(items: &[T]) -> Vec<CategoryTotal> {
    let mut sums = [0i64; ExpenseCategory::ALL.len()];

    for item in items {
        let slot = ExpenseCategory::ALL
            .iter()
            .position(|c| *c == item.category())
            .unwrap_or(ExpenseCategory::ALL.len() - 1);
        sums[slot] = sums[slot].saturating_add(item.amount());
    }

    ExpenseCategory::ALL
        .iter()
        .zip(sums)
        .map(|(category, amount)| CategoryTotal {
            category: *category,
            label: category.label(),
            amount,
            color: category.color(),
        })
        .collect()
}

/// Sum of all amounts, saturating at the `i64` bounds
pub fn total_amount<T: Categorized>(items: &[T]) -> i64 {
    items
        .iter()
        .map(Categorized::amount)
        .fold(0i64, i64::saturating_add)
}

/// `total / budget * 100`, or zero when there is no budget
pub fn utilization_percent(total: i64, budget: i64) -> Decimal {
    if budget <= 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(total) * Decimal::ONE_HUNDRED / Decimal::from(budget)).normalize()
}

/// Percentage suitable for a progress bar
pub fn display_percent(raw_percent: Decimal) -> Decimal {
    raw_percent.min(Decimal::ONE_HUNDRED)
}

/// Classify a raw utilization percentage.
///
/// 70 and 100 are both `warning`; only values strictly above 100 are `over`.
pub fn classify(percent: Decimal) -> BudgetStatus {
    if percent < Decimal::from(WARNING_THRESHOLD_PERCENT) {
        BudgetStatus::Ok
    } else if percent <= Decimal::from(OVER_THRESHOLD_PERCENT) {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Over
    }
}

/// Build the full summary for a trip's expenses
pub fn summarize<T: Categorized>(items: &[T], budget: i64) -> ExpenseSummary {
    let categories = categorize(items);
    let total = categories
        .iter()
        .map(|c| c.amount)
        .fold(0i64, i64::saturating_add);

    ExpenseSummary {
        categories,
        total,
        budget,
        utilization: BudgetUtilization::new(total, budget),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn line(category: &str, amount: i64) -> ExpenseLine {
        ExpenseLine {
            category: ExpenseCategory::from(category),
            amount,
        }
    }

    fn amount_of(totals: &[CategoryTotal], category: ExpenseCategory) -> i64 {
        totals
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.amount)
            .unwrap()
    }

    #[test]
    fn test_empty_input_lists_every_category() {
        let totals = categorize::<ExpenseLine>(&[]);
        assert_eq!(totals.len(), 5);
        assert!(totals.iter().all(|t| t.amount == 0));
        let order: Vec<_> = totals.iter().map(|t| t.category).collect();
        assert_eq!(order, ExpenseCategory::ALL.to_vec());
    }

    #[test]
    fn test_sums_per_category() {
        let items = vec![
            line("food", 1200),
            line("food", 800),
            line("transportation", 5000),
            line("lodging", 9000),
        ];
        let totals = categorize(&items);
        assert_eq!(amount_of(&totals, ExpenseCategory::Food), 2000);
        assert_eq!(amount_of(&totals, ExpenseCategory::Transportation), 5000);
        assert_eq!(amount_of(&totals, ExpenseCategory::Lodging), 9000);
        assert_eq!(amount_of(&totals, ExpenseCategory::Sightseeing), 0);
        assert_eq!(total_amount(&items), 16000);
    }

    #[test]
    fn test_negative_amounts_summed_as_is() {
        let items = vec![line("food", 1000), line("food", -300)];
        let totals = categorize(&items);
        assert_eq!(amount_of(&totals, ExpenseCategory::Food), 700);
    }

    #[test]
    fn test_utilization_zero_guards() {
        assert_eq!(utilization_percent(0, 100), Decimal::ZERO);
        assert_eq!(utilization_percent(100, 0), Decimal::ZERO);
    }

    #[test]
    fn test_utilization_over_budget_is_clamped_for_display() {
        let u = BudgetUtilization::new(150, 100);
        assert_eq!(u.raw_percent, dec("150"));
        assert_eq!(u.display_percent, dec("100"));
        assert_eq!(u.status, BudgetStatus::Over);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(classify(dec("69.99")), BudgetStatus::Ok);
        assert_eq!(classify(dec("70.0")), BudgetStatus::Warning);
        assert_eq!(classify(dec("100.0")), BudgetStatus::Warning);
        assert_eq!(classify(dec("100.01")), BudgetStatus::Over);
    }

    #[test]
    fn test_fractional_percent() {
        assert_eq!(utilization_percent(1, 3).round_dp(2), dec("33.33"));
    }

    #[test]
    fn test_end_to_end_summary() {
        let items = vec![line("food", 3000), line("weird", 1000)];
        let summary = summarize(&items, 10_000);

        assert_eq!(amount_of(&summary.categories, ExpenseCategory::Food), 3000);
        assert_eq!(amount_of(&summary.categories, ExpenseCategory::Other), 1000);
        assert_eq!(amount_of(&summary.categories, ExpenseCategory::Transportation), 0);
        assert_eq!(amount_of(&summary.categories, ExpenseCategory::Lodging), 0);
        assert_eq!(amount_of(&summary.categories, ExpenseCategory::Sightseeing), 0);
        assert_eq!(summary.total, 4000);
        assert_eq!(summary.utilization.raw_percent, dec("40"));
        assert_eq!(summary.utilization.status, BudgetStatus::Ok);
    }

    #[test]
    fn test_huge_amounts_saturate_instead_of_overflowing() {
        let items = vec![line("food", i64::MAX), line("food", 1), line("lodging", 5)];
        let summary = summarize(&items, 10_000);

        assert_eq!(amount_of(&summary.categories, ExpenseCategory::Food), i64::MAX);
        assert_eq!(summary.total, i64::MAX);
        assert_eq!(total_amount(&items), i64::MAX);
        assert_eq!(summary.utilization.status, BudgetStatus::Over);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BudgetStatus::Warning).unwrap(), "\"warning\"");
    }
}
