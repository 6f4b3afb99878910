//! Query-parameter validation for the TR_J1 endpoint.
//!
//! Parameters arrive as raw strings and are parsed strictly here rather
//! than at the extractor level, so each failure keeps its own error code
//! instead of collapsing into a generic deserialization 400.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::report::error::SushiError;
use crate::stats::{ItemType, StatsQuery};

/// The one customer identity this endpoint recognizes. A production
/// deployment would swap this literal for a customer-registry lookup.
pub const ACCEPTED_CUSTOMER_ID: &str = "test";

pub const DEFAULT_COUNT: i64 = 100;
pub const MAX_COUNT: i64 = 100;

/// Item types counting towards Unique_Item_Request: abstract landing page
/// views and full-text galley views.
const ITEM_TYPES: [ItemType; 2] = [ItemType::Abstract, ItemType::Galley];

#[derive(Debug, Default, Deserialize)]
pub struct RawReportParams {
    pub customer_id: Option<String>,
    pub begin_date: Option<String>,
    pub end_date: Option<String>,
    pub count: Option<String>,
    pub position_token: Option<String>,
}

/// Inclusive calendar-day range derived from the year parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A fully validated request. Immutable once built; lives for one call.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub customer_id: String,
    /// Raw year strings, echoed back in the header filters
    pub begin_date: String,
    pub end_date: String,
    pub range: DateRange,
    pub limit: i64,
    pub offset: i64,
}

impl ReportRequest {
    /// Run the validation gates in order: customer, dates, count,
    /// position token. The first failing gate wins.
    pub fn validate(params: RawReportParams) -> Result<Self, SushiError> {
        let customer_id = match params.customer_id {
            Some(id) if id == ACCEPTED_CUSTOMER_ID => id,
            _ => return Err(SushiError::InvalidCustomerId),
        };

        let begin_date = params.begin_date.ok_or(SushiError::InvalidDateRange)?;
        let end_date = params.end_date.ok_or(SushiError::InvalidDateRange)?;
        let begin_year = parse_year(&begin_date).ok_or(SushiError::InvalidDateRange)?;
        let end_year = parse_year(&end_date).ok_or(SushiError::InvalidDateRange)?;

        // No begin <= end ordering check; an inverted range flows through
        // and yields an empty aggregate window downstream.
        let range = expand_years(begin_year, end_year).ok_or(SushiError::InvalidDateRange)?;

        let limit = match params.count.as_deref() {
            None => DEFAULT_COUNT,
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) if (1..=MAX_COUNT).contains(&n) => n,
                _ => return Err(SushiError::InvalidCount),
            },
        };

        let offset = match params.position_token.as_deref() {
            None => 0,
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) if n >= 0 => n,
                _ => return Err(SushiError::InvalidPositionToken),
            },
        };

        Ok(ReportRequest {
            customer_id,
            begin_date,
            end_date,
            range,
            limit,
            offset,
        })
    }

    /// Compose the aggregation descriptor. All inputs are validated by now;
    /// grouping, ordering and the item-type filter are fixed policy.
    pub fn stats_query(&self) -> StatsQuery {
        StatsQuery {
            date_start: self.range.start,
            date_end: self.range.end,
            item_types: ITEM_TYPES.to_vec(),
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// A value is a valid date spec only if it is exactly a 4-digit year.
/// `"2021"` passes, `"2021-01"` and `"21"` do not.
fn parse_year(raw: &str) -> Option<i32> {
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i32>().ok()
}

/// Expand years to their first and last calendar day.
fn expand_years(begin_year: i32, end_year: i32) -> Option<DateRange> {
    let start = NaiveDate::from_ymd_opt(begin_year, 1, 1)?;
    let end = NaiveDate::from_ymd_opt(end_year, 12, 31)?;
    Some(DateRange { start, end })
}
