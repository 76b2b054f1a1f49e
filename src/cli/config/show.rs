use divindex::api;
use tabled::settings::{Color, object::Columns};

#[derive(clap::Args)]
pub struct ConfigShowCommand;

impl ConfigShowCommand {
    pub async fn exec(&self) {
        let config = api::get_config().await;

        let table_data: Vec<Vec<String>> = vec![
            vec!["gateway_api".to_string(), config.gateway_api.to_string()],
            vec!["gateway_user".to_string(), config.gateway_user.to_string()],
            vec![
                "gateway_password".to_string(),
                config.gateway_password.to_string(),
            ],
            vec!["index_symbol".to_string(), config.index_symbol.to_string()],
        ];

        let mut table = tabled::builder::Builder::from_iter(&table_data).build();
        table.modify(Columns::first(), Color::FG_CYAN);
        println!("{table}");
    }
}
