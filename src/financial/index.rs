use std::str::FromStr;

use chrono::NaiveDate;
use log::debug;
use serde_json::{Value, json};

use crate::{
    ds::baostock::{ResultSet, Session},
    error::{DvError, DvResult},
    ticker::Ticker,
    utils::datetime::date_to_str,
};

/// Membership list of the tracked index as of the given date
pub async fn fetch_index_constituents(
    session: &Session,
    symbol: &str,
    date: &NaiveDate,
) -> DvResult<Vec<Ticker>> {
    let rs = session
        .query(
            "index_constituents",
            &json!({
                "symbol": symbol,
                "date": date_to_str(date),
            }),
        )
        .await?;

    let tickers = constituent_tickers(&rs);
    if tickers.is_empty() {
        Err(DvError::NoData {
            code: "EMPTY_UNIVERSE",
            message: format!(
                "Index '{symbol}' has no constituents as of {}",
                date_to_str(date)
            ),
        })
    } else {
        Ok(tickers)
    }
}

pub(crate) fn constituent_tickers(rs: &ResultSet) -> Vec<Ticker> {
    let mut tickers: Vec<Ticker> = vec![];

    for record in rs.records() {
        if let Some(code) = record.get("code").and_then(Value::as_str) {
            match Ticker::from_str(code) {
                Ok(ticker) => tickers.push(ticker),
                Err(err) => debug!("[index] skip constituent '{code}': {err}"),
            }
        }
    }

    tickers
}
