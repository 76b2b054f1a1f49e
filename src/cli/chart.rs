use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use colored::Colorize;
use divindex::{
    api,
    api::{MonthlyPoint, RunOptions},
    error::DvResult,
    utils,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use tabled::settings::{
    Alignment, Color,
    object::{Columns, Object, Rows},
};
use tokio::time::Duration;

#[derive(clap::Args)]
pub struct ChartCommand {
    #[arg(
        short = 'd',
        long = "date",
        value_parser = utils::datetime::date_from_str,
        help = "As-of date, the default value is today, e.g. -d 2024-03-01"
    )]
    date: Option<NaiveDate>,

    #[arg(
        short = 's',
        long = "symbol",
        help = "Index symbol, the default value comes from the configuration"
    )]
    symbol: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        help = "Write the series as JSON for the chart front-end"
    )]
    output: Option<PathBuf>,
}

impl ChartCommand {
    pub async fn exec(&self) {
        let options = RunOptions {
            as_of: self.date.unwrap_or(Local::now().date_naive()),
            index_symbol: match &self.symbol {
                Some(symbol) => symbol.clone(),
                None => api::get_config().await.index_symbol,
            },
        };

        let spinner = ProgressBar::new_spinner();
        spinner
            .set_style(ProgressStyle::with_template("[{elapsed}] {msg} {spinner:.cyan}").unwrap());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!(
            "{} {}",
            options.index_symbol,
            utils::datetime::date_to_str(&options.as_of)
        ));

        let report = api::monthly_dividend(&options).await;

        for warning in &report.warnings {
            spinner.println(format!("[!] {}", warning.yellow()));
        }

        if report.series.is_empty() {
            spinner.finish_with_message(format!("{}", "!".to_string().yellow()));
            println!(
                "No dividend data for '{}' in the year up to {}",
                options.index_symbol,
                utils::datetime::date_to_str(&options.as_of)
            );
            return;
        }

        spinner.finish_with_message(format!("{}", "✔".to_string().green()));

        let mut table_data: Vec<Vec<String>> =
            vec![vec!["Month".to_string(), "Avg Rate".to_string()]];
        for point in &report.series {
            table_data.push(vec![
                point.month.to_string(),
                format!("{:.2}%", point.average_rate),
            ]);
        }

        let mut table = tabled::builder::Builder::from_iter(&table_data).build();
        table.modify(Rows::first(), Color::FG_BRIGHT_BLACK);
        table.modify(Columns::first().not(Rows::first()), Color::FG_CYAN);
        table.modify(Columns::new(1..), Alignment::right());
        println!("{table}");

        println!(
            "[Universe] {} \t [Observations] {}",
            report.universe_size, report.observation_count
        );

        if let Some(output) = &self.output {
            match write_chart_json(output, &report.series) {
                Ok(_) => println!("[>] {}", output.display()),
                Err(err) => println!("[!] {}", err.to_string().red()),
            }
        }
    }
}

// The two-column shape the ECharts front-end consumes
fn write_chart_json(path: &Path, series: &[MonthlyPoint]) -> DvResult<()> {
    let points: Vec<serde_json::Value> = series
        .iter()
        .map(|point| {
            json!({
                "date": point.month.to_string(),
                "value": point.average_rate,
            })
        })
        .collect();

    std::fs::write(path, serde_json::to_string_pretty(&points)?)?;

    Ok(())
}
