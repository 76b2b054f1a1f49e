use std::{collections::BTreeMap, fmt::Display};

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::{data::stock::DividendObservation, utils::math};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn from_date(date: &NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct MonthlyPoint {
    pub month: Month,
    pub average_rate: f64,
}

/// Arithmetic mean of the retained rates per calendar month, ascending.
/// Months without observations are absent from the series, never zero-filled.
pub fn monthly_mean(observations: &[DividendObservation]) -> Vec<MonthlyPoint> {
    let mut buckets: BTreeMap<Month, Vec<f64>> = BTreeMap::new();
    for observation in observations {
        buckets
            .entry(Month::from_date(&observation.report_date))
            .or_default()
            .push(observation.rate);
    }

    buckets
        .into_iter()
        .filter_map(|(month, rates)| {
            math::mean(&rates).map(|average_rate| MonthlyPoint {
                month,
                average_rate,
            })
        })
        .collect()
}
