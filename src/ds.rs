use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{data::stock::DividendObservation, error::DvResult, ticker::Ticker};

pub mod baostock;

/// Seam over the data-source collaborator, one method per query the run needs
#[async_trait]
pub trait DividendSource {
    async fn index_constituents(&self, symbol: &str, as_of: &NaiveDate) -> DvResult<Vec<Ticker>>;

    async fn stock_dividends(
        &self,
        ticker: &Ticker,
        date_start: &NaiveDate,
        date_end: &NaiveDate,
    ) -> DvResult<Vec<DividendObservation>>;
}
