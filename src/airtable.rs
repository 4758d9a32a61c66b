//! Minimal Airtable record client: formula-filtered search and insert.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use ticketsync_core::{SyncError, SyncResult};

use crate::config::Config;

pub const EVENTS_TABLE: &str = "Events";
pub const VENUES_TABLE: &str = "Venues";
pub const TICKET_SALES_TABLE: &str = "Ticket Sales";

pub struct AirtableClient {
    client: Client,
    token: String,
    /// `{api_base}/{base_id}`
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RecordList {
    #[serde(default)]
    records: Vec<Record>,
}

#[derive(Debug, Deserialize)]
struct Record {
    id: String,
}

impl AirtableClient {
    pub fn new(config: &Config) -> Self {
        AirtableClient {
            client: Client::new(),
            token: config.airtable_token.clone(),
            base_url: format!(
                "{}/{}",
                config.airtable_api_base.trim_end_matches('/'),
                config.airtable_base_id
            ),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    /// Find the first record where `field` exactly equals `value`.
    /// Returns the record id, if any.
    pub async fn find_record(
        &self,
        table: &str,
        field: &str,
        value: &str,
    ) -> SyncResult<Option<String>> {
        let formula = equals_formula(field, value);

        let response = self
            .client
            .get(self.table_url(table))
            .bearer_auth(&self.token)
            .query(&[("filterByFormula", formula.as_str())])
            .send()
            .await
            .map_err(|e| SyncError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let list: RecordList = response
            .json()
            .await
            .map_err(|e| SyncError::Parse(e.to_string()))?;

        Ok(list.records.into_iter().next().map(|record| record.id))
    }

    /// Insert a record and return its Airtable-assigned id.
    pub async fn create_record(&self, table: &str, fields: Value) -> SyncResult<String> {
        let response = self
            .client
            .post(self.table_url(table))
            .bearer_auth(&self.token)
            .json(&json!({ "fields": fields }))
            .send()
            .await
            .map_err(|e| SyncError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let record: Record = response
            .json()
            .await
            .map_err(|e| SyncError::Parse(e.to_string()))?;

        Ok(record.id)
    }
}

/// Build an exact-match `filterByFormula` expression. Single quotes in
/// the value are escaped so names like O'Malley's don't break the query.
fn equals_formula(field: &str, value: &str) -> String {
    format!("{{{}}} = '{}'", field, value.replace('\'', "\\'"))
}
