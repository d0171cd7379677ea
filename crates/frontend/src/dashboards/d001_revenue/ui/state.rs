use crate::shared::date_utils::{parse_input_date, to_input_date};
use chrono::NaiveDate;
use contracts::dashboards::d001_revenue::{
    RevenueOrder, RevenueQuery, RevenueStatistics, REVENUE_PAGE_SIZE,
};
use contracts::shared::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct RevenueState {
    /// Date inputs in `yyyy-mm-dd` form
    pub date_from: String,
    pub date_to: String,
    pub statistics: Option<RevenueStatistics>,
    pub page: usize,
    pub loading: bool,
    pub is_loaded: bool,
    pub error: Option<ApiError>,
    /// Bumped by every accepted load; older responses are ignored
    pub load_seq: u64,
}

impl RevenueState {
    /// Current month up to `today`
    pub fn for_today(today: NaiveDate) -> Self {
        let range = RevenueQuery::current_month(today);
        Self {
            date_from: to_input_date(&range.start_date),
            date_to: to_input_date(&range.end_date),
            statistics: None,
            page: 0,
            loading: false,
            is_loaded: false,
            error: None,
            load_seq: 0,
        }
    }

    /// Edit the start date. Returns true when it changed and the statistics
    /// must be reloaded.
    pub fn set_date_from(&mut self, value: String) -> bool {
        if self.date_from == value {
            return false;
        }
        self.date_from = value;
        true
    }

    pub fn set_date_to(&mut self, value: String) -> bool {
        if self.date_to == value {
            return false;
        }
        self.date_to = value;
        true
    }

    pub fn query(&self) -> Result<RevenueQuery, ApiError> {
        let (Some(start_date), Some(end_date)) = (
            parse_input_date(&self.date_from),
            parse_input_date(&self.date_to),
        ) else {
            return Err(ApiError::Validation(
                "Select both a start and an end date".to_string(),
            ));
        };
        let query = RevenueQuery {
            start_date,
            end_date,
        };
        query.validate()?;
        Ok(query)
    }

    /// Validate the inputs and mark a load as started. A rejected range is
    /// stored as the error and no request should be made.
    pub fn begin_load(&mut self) -> Result<RevenueQuery, ApiError> {
        match self.query() {
            Ok(query) => {
                self.loading = true;
                self.error = None;
                self.load_seq += 1;
                Ok(query)
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn apply(&mut self, result: Result<RevenueStatistics, ApiError>) {
        self.loading = false;
        self.is_loaded = true;
        self.page = 0;
        match result {
            Ok(stats) => {
                self.statistics = Some(stats);
                self.error = None;
            }
            Err(e) => {
                self.statistics = None;
                self.error = Some(e);
            }
        }
    }

    /// Apply the response of load `seq`. Returns false when a newer load
    /// has started since; the response is then dropped.
    pub fn apply_if_current(
        &mut self,
        seq: u64,
        result: Result<RevenueStatistics, ApiError>,
    ) -> bool {
        if seq != self.load_seq {
            return false;
        }
        self.apply(result);
        true
    }

    pub fn total_pages(&self) -> usize {
        self.statistics
            .as_ref()
            .map(|s| s.total_pages(REVENUE_PAGE_SIZE))
            .unwrap_or(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.total_pages() - 1);
    }

    pub fn page_rows(&self) -> Vec<RevenueOrder> {
        self.statistics
            .as_ref()
            .map(|s| s.page(self.page, REVENUE_PAGE_SIZE).to_vec())
            .unwrap_or_default()
    }
}
