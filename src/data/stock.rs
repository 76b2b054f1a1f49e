use chrono::NaiveDate;
use serde::Serialize;

/// One retained dividend disclosure; `rate > 0` holds by construction,
/// records failing that are dropped at decode time
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DividendObservation {
    pub report_date: NaiveDate,
    pub rate: f64,
}
