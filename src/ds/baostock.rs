use log::debug;
use serde_json::{Map, Value, json};

use crate::{
    CONFIG,
    error::{DvError, DvResult},
    utils::net::http_post,
};

static REQUEST_TIMEOUT_SECS: u64 = 30;

/// Tabular payload of one gateway query: field names plus positional rows
#[derive(Clone, Debug, Default)]
pub struct ResultSet {
    pub fields: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// One logged-in gateway session; acquire with [`login`], release with
/// [`Session::logout`] after the run, whatever the run's outcome was.
pub struct Session {
    api: String,
    session_id: String,
}

pub async fn login() -> DvResult<Session> {
    let (api, user, password) = {
        let config = CONFIG.read().await;
        (
            config.gateway_api.clone(),
            config.gateway_user.clone(),
            config.gateway_password.clone(),
        )
    };

    let bytes = http_post(
        &api,
        Some("/login"),
        &json!({
            "user": user,
            "password": password,
        }),
        REQUEST_TIMEOUT_SECS,
    )
    .await?;
    let json: Value = serde_json::from_slice(&bytes)?;
    check_error_code(&json)?;

    if let Some(session_id) = json["session_id"].as_str() {
        Ok(Session {
            api,
            session_id: session_id.to_string(),
        })
    } else {
        Err(DvError::DataSourceError {
            code: "NO_SESSION".to_string(),
            message: "Login response carries no session id".to_string(),
        })
    }
}

pub async fn check_api() -> DvResult<()> {
    let session = login().await?;
    session.logout().await;

    Ok(())
}

impl Session {
    pub async fn query(&self, name: &str, params: &Value) -> DvResult<ResultSet> {
        let bytes = http_post(
            &self.api,
            Some("/query"),
            &json!({
                "session_id": self.session_id,
                "query": name,
                "params": params,
            }),
            REQUEST_TIMEOUT_SECS,
        )
        .await?;
        let json: Value = serde_json::from_slice(&bytes)?;
        check_error_code(&json)?;

        ResultSet::from_response(&json)
    }

    /// Best effort, the session is discarded either way
    pub async fn logout(self) {
        let body = json!({
            "session_id": self.session_id,
        });
        if let Err(err) = http_post(&self.api, Some("/logout"), &body, REQUEST_TIMEOUT_SECS).await {
            debug!("[baostock] logout: {err}");
        }
    }
}

// The gateway keeps baostock's status convention: "0" means success
fn check_error_code(json: &Value) -> DvResult<()> {
    let code = json["error_code"].as_str().unwrap_or_default();
    if code == "0" {
        Ok(())
    } else {
        Err(DvError::DataSourceError {
            code: code.to_string(),
            message: json["error_msg"].as_str().unwrap_or("unknown").to_string(),
        })
    }
}

impl ResultSet {
    pub fn from_response(json: &Value) -> DvResult<Self> {
        if let (Some(fields), Some(data)) = (json["fields"].as_array(), json["data"].as_array()) {
            let fields = fields
                .iter()
                .filter_map(|f| f.as_str().map(|s| s.to_string()))
                .collect();
            let rows = data
                .iter()
                .filter_map(|row| row.as_array().cloned())
                .collect();

            Ok(Self { fields, rows })
        } else {
            Err(DvError::Invalid {
                code: "INVALID_RESPONSE",
                message: "Query response carries no fields/data".to_string(),
            })
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One record per row, field names zipped over the positional values
    pub fn records(&self) -> impl Iterator<Item = Map<String, Value>> + '_ {
        self.rows.iter().map(|row| {
            let mut record = Map::new();
            for (i, field) in self.fields.iter().enumerate() {
                record.insert(field.clone(), row.get(i).cloned().unwrap_or(Value::Null));
            }

            record
        })
    }
}
