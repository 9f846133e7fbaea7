//! Validation utilities for the Travel Budget & Weather planner

use crate::error::DomainError;
use crate::locations;
use crate::models::{Destination, ExpenseInput, ProfileInput, TripInput};
use crate::types::DateRange;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_USERNAME_LENGTH: usize = 2;
pub const MAX_USERNAME_LENGTH: usize = 50;
pub const MAX_TITLE_LENGTH: usize = 100;
/// Upper bound for budgets and expense amounts, in the smallest currency unit
pub const MAX_MONEY_AMOUNT: i64 = 1_000_000_000_000;

// ============================================================================
// Account Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Invalid email format");
    };
    if local.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err("Invalid email format");
    }
    Ok(())
}

/// Validate password (minimum 6 characters)
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// Validate username length (2 to 50 characters)
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    let len = username.trim().chars().count();
    if len == 0 {
        return Err("Username is required");
    }
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err("Username must be between 2 and 50 characters");
    }
    Ok(())
}

// ============================================================================
// Trip & Expense Validations
// ============================================================================

pub fn validate_title(title: &str) -> Result<(), &'static str> {
    let len = title.trim().chars().count();
    if len == 0 {
        return Err("Title is required");
    }
    if len > MAX_TITLE_LENGTH {
        return Err("Title must be at most 100 characters");
    }
    Ok(())
}

/// Budgets are optional; zero means "no budget set"
pub fn validate_budget(budget: i64) -> Result<(), &'static str> {
    if budget < 0 {
        return Err("Budget cannot be negative");
    }
    if budget > MAX_MONEY_AMOUNT {
        return Err("Budget is too large");
    }
    Ok(())
}

pub fn validate_amount(amount: i64) -> Result<(), &'static str> {
    if amount < 0 {
        return Err("Amount cannot be negative");
    }
    if amount > MAX_MONEY_AMOUNT {
        return Err("Amount is too large");
    }
    Ok(())
}

/// Validate a destination against the location catalog
pub fn validate_destination(destination: &Destination) -> Result<(), &'static str> {
    if locations::find_region(&destination.region).is_none() {
        return Err("Unknown region");
    }
    match locations::find_city(&destination.region, &destination.city_en) {
        None => Err("Unknown city for region"),
        Some(city) if city.name != destination.city_name => {
            Err("City name does not match the catalog")
        }
        Some(_) => Ok(()),
    }
}

fn check(field: &'static str, result: Result<(), &'static str>) -> Result<(), DomainError> {
    result.map_err(|message| DomainError::validation(field, message))
}

/// Validate every field of a trip create/update request
pub fn validate_trip_input(input: &TripInput) -> Result<DateRange, DomainError> {
    check("title", validate_title(&input.title))?;
    let range = DateRange::new(input.start_date, input.end_date)?;
    check("budget", validate_budget(input.budget))?;
    check("destination", validate_destination(&input.destination))?;
    Ok(range)
}

/// Validate every field of an expense create/update request
pub fn validate_expense_input(input: &ExpenseInput) -> Result<(), DomainError> {
    check("title", validate_title(&input.title))?;
    check("amount", validate_amount(input.amount))?;
    Ok(())
}

pub fn validate_profile_input(input: &ProfileInput) -> Result<(), DomainError> {
    check("username", validate_username(&input.username))?;
    check("email", validate_email(&input.email))?;
    Ok(())
}

/// Validate the signup triple in the order the form presents it
pub fn validate_signup(email: &str, password: &str, username: &str) -> Result<(), DomainError> {
    check("email", validate_email(email))?;
    check("password", validate_password(password))?;
    check("username", validate_username(username))?;
    Ok(())
}
