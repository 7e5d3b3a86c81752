//! Stay pricing: nights between dates and the total with the service fee.

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;

/// Flat service fee added to every booking, in whole dollars.
pub const SERVICE_FEE: u32 = 25;

/// Price breakdown for a prospective stay.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub nightly_rate: u32,
    pub nights: u32,
    pub subtotal: u32,
    pub service_fee: u32,
    pub total: u32,
}

/// Number of nights between check-in and check-out.
///
/// Ranges where check-out is not strictly after check-in are rejected rather
/// than priced at zero or a negative amount.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> Result<u32, AppError> {
    let nights = (check_out - check_in).num_days();
    if nights <= 0 {
        return Err(AppError::Validation(
            "Check-out must be after check-in".to_string(),
        ));
    }
    Ok(nights as u32)
}

/// Price a stay at the given nightly rate.
///
/// Date parsing accepts years far beyond any real stay, so a range whose
/// total does not fit the dollar amount is rejected as a validation error.
pub fn quote(
    nightly_rate: u32,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<Quote, AppError> {
    let nights = nights_between(check_in, check_out)?;
    let subtotal = nightly_rate.checked_mul(nights);
    let total = subtotal.and_then(|s| s.checked_add(SERVICE_FEE));
    let (Some(subtotal), Some(total)) = (subtotal, total) else {
        return Err(AppError::Validation(
            "Stay is too long to price".to_string(),
        ));
    };
    Ok(Quote {
        nightly_rate,
        nights,
        subtotal,
        service_fee: SERVICE_FEE,
        total,
    })
}

/// Days from `today` until `date`; negative once the date has passed.
pub fn days_until(today: NaiveDate, date: NaiveDate) -> i64 {
    (date - today).num_days()
}
