use colored::Colorize;
use divindex::api;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::settings::{Color, object::Columns};
use tokio::time::Duration;

#[derive(clap::Args)]
pub struct CheckCommand;

impl CheckCommand {
    pub async fn exec(&self) {
        let spinner = ProgressBar::new_spinner();
        spinner
            .set_style(ProgressStyle::with_template("{msg}[{elapsed}] {spinner:.cyan}").unwrap());
        spinner.enable_steady_tick(Duration::from_millis(100));

        match api::check().await {
            Ok(status) => {
                spinner.finish();

                let table_data: Vec<Vec<String>> = status
                    .iter()
                    .map(|(title, optional_error)| {
                        let state = match optional_error {
                            Some(err) => format!("{}", err.to_string().red()),
                            None => format!("{}", "✔".to_string().green()),
                        };

                        vec![title.to_string(), state]
                    })
                    .collect();

                let mut table = tabled::builder::Builder::from_iter(&table_data).build();
                table.modify(Columns::first(), Color::FG_CYAN);
                println!("{table}");
            }
            Err(err) => {
                spinner.finish_with_message(format!("{} ", err.to_string().red()));
            }
        }
    }
}
