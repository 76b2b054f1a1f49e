use chrono::NaiveDate;
use log::{debug, warn};

use crate::{
    CONFIG, Config,
    data::series::monthly_mean,
    ds::{DividendSource, baostock},
    error::{DvError, DvResult},
    utils::datetime::lookback_window,
};

pub use crate::{
    data::{
        series::{Month, MonthlyPoint},
        stock::DividendObservation,
    },
    ticker::Ticker,
};

pub struct RunOptions {
    pub as_of: NaiveDate,
    pub index_symbol: String,
}

/// What the presentation layer receives: the series plus everything it
/// should surface as warnings instead of crashing on
#[derive(Debug, Default)]
pub struct RunReport {
    pub series: Vec<MonthlyPoint>,
    pub universe_size: usize,
    pub observation_count: usize,
    pub warnings: Vec<String>,
}

/// End-to-end run: login, fetch the universe, one dividend fetch per stock
/// in sequence, aggregate by month. Always completes with a (possibly
/// empty) series; data-source failures become warnings on the report.
pub async fn monthly_dividend(options: &RunOptions) -> RunReport {
    let session = match baostock::login().await {
        Ok(session) => session,
        Err(err) => {
            warn!("[run] login: {err}");
            return RunReport {
                warnings: vec![format!("Data source login failed: {err}")],
                ..RunReport::default()
            };
        }
    };

    let report = collect(&session, options).await;

    // Release the session whatever the run produced
    session.logout().await;

    report
}

pub(crate) async fn collect<S: DividendSource>(source: &S, options: &RunOptions) -> RunReport {
    let mut report = RunReport::default();

    let (date_start, date_end) = lookback_window(&options.as_of);

    let universe = match source
        .index_constituents(&options.index_symbol, &options.as_of)
        .await
    {
        Ok(universe) => universe,
        Err(err) => {
            warn!("[run] universe: {err}");
            report
                .warnings
                .push(format!("No universe for '{}': {err}", options.index_symbol));
            return report;
        }
    };
    report.universe_size = universe.len();

    let mut observations = vec![];
    for ticker in &universe {
        match source.stock_dividends(ticker, &date_start, &date_end).await {
            Ok(dividends) => {
                debug!("[run] {ticker}: {} observation(s)", dividends.len());
                observations.extend(dividends);
            }
            Err(err) => {
                warn!("[run] {ticker}: {err}");
                report.warnings.push(format!("{ticker}: {err}"));
            }
        }
    }
    report.observation_count = observations.len();
    report.series = monthly_mean(&observations);

    report
}

pub async fn check() -> DvResult<Vec<(String, Option<DvError>)>> {
    Ok(vec![(
        "baostock gateway".to_string(),
        baostock::check_api().await.err(),
    )])
}

pub async fn get_config() -> Config {
    CONFIG.read().await.clone()
}

pub async fn set_config(key: &str, value: &str) -> DvResult<()> {
    let mut config = CONFIG.write().await;

    match key.to_lowercase().as_str() {
        "gateway_api" => config.gateway_api = value.to_string(),
        "gateway_user" => config.gateway_user = value.to_string(),
        "gateway_password" => config.gateway_password = value.to_string(),
        "index_symbol" => config.index_symbol = value.to_string(),
        _ => {
            return Err(DvError::Invalid {
                code: "UNSUPPORTED_CONFIG_KEY",
                message: format!("Unsupported config key '{key}'"),
            });
        }
    }

    confy::store(env!("CARGO_PKG_NAME"), None, &*config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, str::FromStr};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::{ds::baostock::ResultSet, financial::stock::retain_dividend_rows};

    // Serves canned gateway payloads through the real retain policy
    struct FixtureSource {
        universe: DvResult<Vec<Ticker>>,
        payloads: HashMap<String, serde_json::Value>,
    }

    #[async_trait]
    impl DividendSource for FixtureSource {
        async fn index_constituents(
            &self,
            _symbol: &str,
            _as_of: &NaiveDate,
        ) -> DvResult<Vec<Ticker>> {
            match &self.universe {
                Ok(universe) => Ok(universe.clone()),
                Err(_) => Err(DvError::NoData {
                    code: "EMPTY_UNIVERSE",
                    message: "no constituents".to_string(),
                }),
            }
        }

        async fn stock_dividends(
            &self,
            ticker: &Ticker,
            date_start: &NaiveDate,
            date_end: &NaiveDate,
        ) -> DvResult<Vec<DividendObservation>> {
            match self.payloads.get(&ticker.to_string()) {
                Some(payload) => {
                    let rs = ResultSet::from_response(payload)?;
                    Ok(retain_dividend_rows(&rs, date_start, date_end))
                }
                None => Err(DvError::DataSourceError {
                    code: "10001".to_string(),
                    message: "query failed".to_string(),
                }),
            }
        }
    }

    fn options() -> RunOptions {
        RunOptions {
            as_of: NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
            index_symbol: "hs300".to_string(),
        }
    }

    fn payload(data: serde_json::Value) -> serde_json::Value {
        json!({
            "error_code": "0",
            "fields": ["report_date", "dividend_ratio"],
            "data": data,
        })
    }

    #[tokio::test]
    async fn test_collect_reference_scenario() {
        let a = Ticker::from_str("600000.SH").unwrap();
        let b = Ticker::from_str("000001.SZ").unwrap();

        let source = FixtureSource {
            universe: Ok(vec![a.clone(), b.clone()]),
            payloads: HashMap::from([
                (
                    a.to_string(),
                    payload(json!([["2023-01-15", 2.0], ["2023-01-20", 3.0]])),
                ),
                (
                    b.to_string(),
                    payload(json!([["2023-01-10", 4.0], ["2023-02-05", -1.0]])),
                ),
            ]),
        };

        let report = collect(&source, &options()).await;

        assert_eq!(report.universe_size, 2);
        assert_eq!(report.observation_count, 3);
        assert!(report.warnings.is_empty());

        // February's only candidate was discarded, so the month is absent
        assert_eq!(report.series.len(), 1);
        assert_eq!(report.series[0].month.to_string(), "2023-01");
        assert_eq!(report.series[0].average_rate, 3.0);
    }

    #[tokio::test]
    async fn test_collect_empty_universe_is_empty_series() {
        let source = FixtureSource {
            universe: Ok(vec![]),
            payloads: HashMap::new(),
        };

        let report = collect(&source, &options()).await;

        assert_eq!(report.universe_size, 0);
        assert!(report.series.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_collect_universe_failure_becomes_warning() {
        let source = FixtureSource {
            universe: Err(DvError::NoData {
                code: "EMPTY_UNIVERSE",
                message: "no constituents".to_string(),
            }),
            payloads: HashMap::new(),
        };

        let report = collect(&source, &options()).await;

        assert!(report.series.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("hs300"));
    }

    #[tokio::test]
    async fn test_collect_skips_failing_stock() {
        let a = Ticker::from_str("600000.SH").unwrap();
        let b = Ticker::from_str("000001.SZ").unwrap();

        // no payload for B, its fetch errors out
        let source = FixtureSource {
            universe: Ok(vec![a.clone(), b.clone()]),
            payloads: HashMap::from([(a.to_string(), payload(json!([["2023-03-02", 2.5]])))]),
        };

        let report = collect(&source, &options()).await;

        assert_eq!(report.universe_size, 2);
        assert_eq!(report.series.len(), 1);
        assert_eq!(report.series[0].average_rate, 2.5);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("000001.SZ"));
    }

    #[tokio::test]
    async fn test_collect_all_records_discarded_is_empty_series() {
        let a = Ticker::from_str("600000.SH").unwrap();

        let source = FixtureSource {
            universe: Ok(vec![a.clone()]),
            payloads: HashMap::from([(
                a.to_string(),
                payload(json!([["2023-01-10", -2.0], ["2023-02-05", "n/a"]])),
            )]),
        };

        let report = collect(&source, &options()).await;

        assert_eq!(report.universe_size, 1);
        assert_eq!(report.observation_count, 0);
        assert!(report.series.is_empty());
        assert!(report.warnings.is_empty());
    }
}
