use chrono::{Datelike, NaiveDate};
use log::debug;
use serde_json::{Value, json};

use crate::{
    data::stock::DividendObservation,
    ds::baostock::{ResultSet, Session},
    error::DvResult,
    ticker::Ticker,
    utils::{datetime::date_from_str, math::lenient_f64},
};

/// Annual dividend disclosures for one stock, queried by the fiscal year of
/// the window start and filtered to the window
pub async fn fetch_stock_dividends(
    session: &Session,
    ticker: &Ticker,
    date_start: &NaiveDate,
    date_end: &NaiveDate,
) -> DvResult<Vec<DividendObservation>> {
    let rs = session
        .query(
            "dividend_annual",
            &json!({
                "code": ticker.to_string(),
                "year": date_start.year().to_string(),
            }),
        )
        .await?;

    Ok(retain_dividend_rows(&rs, date_start, date_end))
}

// A malformed record is dropped on its own, it never takes the stock's
// remaining records with it. Retained rates are strictly positive.
pub(crate) fn retain_dividend_rows(
    rs: &ResultSet,
    date_start: &NaiveDate,
    date_end: &NaiveDate,
) -> Vec<DividendObservation> {
    let mut result = vec![];

    for record in rs.records() {
        let report_date = date_from_str(
            record
                .get("report_date")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        );
        let rate = record.get("dividend_ratio").and_then(lenient_f64);

        if let (Ok(report_date), Some(rate)) = (report_date, rate) {
            if rate > 0.0 && report_date >= *date_start && report_date <= *date_end {
                result.push(DividendObservation { report_date, rate });
            } else {
                debug!("[dividend] skip rate={rate} at {report_date}");
            }
        } else {
            debug!("[dividend] skip malformed record {record:?}");
        }
    }

    result
}
