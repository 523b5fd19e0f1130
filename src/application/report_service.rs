use chrono::NaiveDate;

use crate::domain::errors::DomainError;
use crate::domain::order::OrderQuery;
use crate::domain::ports::OrderRepository;
use crate::domain::report::{day_window, DailyReport};

pub struct ReportService<R> {
    repo: R,
}

impl<R: OrderRepository> ReportService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read-only aggregate over the orders created on `date`. A day without
    /// orders yields a zeroed report.
    pub fn daily_report(&self, date: NaiveDate) -> Result<DailyReport, DomainError> {
        let (start, end) = day_window(date);
        let orders = self
            .repo
            .list(OrderQuery::between_chronological(start, end))?;
        Ok(DailyReport::aggregate(date, &orders))
    }
}
