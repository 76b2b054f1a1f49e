use clap::Subcommand;

mod chart;
mod check;
mod config;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Chart the monthly average dividend rate of the index")]
    #[clap(visible_aliases = &["c"])]
    Chart(Box<chart::ChartCommand>),

    #[command(about = "Check the data source gateway")]
    Check(Box<check::CheckCommand>),

    #[command(subcommand, about = "Get or set configurations")]
    Config(config::ConfigCommand),
}
