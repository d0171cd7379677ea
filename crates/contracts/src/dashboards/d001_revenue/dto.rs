use crate::shared::error::ApiError;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Rows per page in the revenue order table
pub const REVENUE_PAGE_SIZE: usize = 4;

/// Query for `GET /revenue-statistics`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueQuery {
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
}

impl RevenueQuery {
    /// First day of the month containing `today`, up to `today`.
    pub fn current_month(today: NaiveDate) -> Self {
        Self {
            start_date: today.with_day(1).unwrap_or(today),
            end_date: today,
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.start_date > self.end_date {
            return Err(ApiError::Validation(
                "Start date must not be after end date".to_string(),
            ));
        }
        Ok(())
    }
}

/// `data` of the revenue statistics response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueStatistics {
    #[serde(rename = "totalRevenue", default)]
    pub total_revenue: f64,
    #[serde(rename = "totalOrders", default)]
    pub total_orders: usize,
    #[serde(default)]
    pub orders: Vec<RevenueOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueOrder {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_amount: f64,
}

impl RevenueStatistics {
    /// Page count is driven by the server-side order count, never below 1.
    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 1;
        }
        self.total_orders.div_ceil(page_size).max(1)
    }

    /// Orders on the 0-indexed `page`; empty past the end.
    pub fn page(&self, page: usize, page_size: usize) -> &[RevenueOrder] {
        let start = page.saturating_mul(page_size);
        if start >= self.orders.len() {
            return &[];
        }
        let end = (start + page_size).min(self.orders.len());
        &self.orders[start..end]
    }
}
