use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    data::stock::DividendObservation,
    ds::{DividendSource, baostock::Session},
    error::DvResult,
    ticker::Ticker,
};

pub mod index;
pub mod stock;

#[async_trait]
impl DividendSource for Session {
    async fn index_constituents(&self, symbol: &str, as_of: &NaiveDate) -> DvResult<Vec<Ticker>> {
        index::fetch_index_constituents(self, symbol, as_of).await
    }

    async fn stock_dividends(
        &self,
        ticker: &Ticker,
        date_start: &NaiveDate,
        date_end: &NaiveDate,
    ) -> DvResult<Vec<DividendObservation>> {
        stock::fetch_stock_dividends(self, ticker, date_start, date_end).await
    }
}
