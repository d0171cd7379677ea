use crate::shared::api_utils::{api_url, read_body};
use contracts::dashboards::d001_revenue::{RevenueQuery, RevenueStatistics};
use contracts::shared::{decode_data, ApiError};
use gloo_net::http::Request;

/// `startDate=YYYY-MM-DD&endDate=YYYY-MM-DD`
pub fn query_string(query: &RevenueQuery) -> Result<String, ApiError> {
    serde_qs::to_string(query)
        .map_err(|e| ApiError::Validation(format!("Invalid date range: {}", e)))
}

/// Получить статистику выручки за период
///
/// The range is validated before anything is sent.
pub async fn get_revenue_statistics(query: &RevenueQuery) -> Result<RevenueStatistics, ApiError> {
    query.validate()?;
    let url = api_url(&format!("/revenue-statistics?{}", query_string(query)?));
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(ApiError::transport)?;
    let (status, body) = read_body(response).await?;
    decode_data(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_query_string() {
        let query = RevenueQuery {
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
        };
        assert_eq!(
            query_string(&query).unwrap(),
            "startDate=2024-05-01&endDate=2024-05-17"
        );
    }
}
