use reqwest::Client;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    FieldSet,
    ImportError,
};

const ENDPOINT: &str = "http://localhost:8765/";

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Any error reported by AnkiConnect is fatal to the run.
    fn into_result(self) -> Result<Option<T>, ImportError> {
        match self.error {
            Some(message) => Err(ImportError::AnkiConnect(message)),
            None => Ok(self.result),
        }
    }
}

pub struct AnkiClient {
    client: Client,
    endpoint: String,
    version: Option<u32>,
}

impl AnkiClient {
    pub fn new() -> Self {
        Self { client: Client::new(), endpoint: ENDPOINT.to_string(), version: None }
    }

    async fn make_request<T: for<'de> Deserialize<'de>>(
        &self,
        action: &str,
        params: Option<serde_json::Value>,
    ) -> Result<ApiResponse<T>, ImportError> {
        let mut body = serde_json::Map::new();
        body.insert("action".to_string(), serde_json::Value::String(action.to_string()));

        // Omitted until fetch_version has run; the server then assumes its
        // own default.
        if let Some(version) = self.version {
            body.insert("version".to_string(), serde_json::Value::Number(version.into()));
        }

        if let Some(params) = params {
            body.insert("params".to_string(), params);
        }

        let response: ApiResponse<T> =
            self.client.post(&self.endpoint).json(&body).send().await?.json().await?;

        Ok(response)
    }

    /// Queries the AnkiConnect protocol version and pins it onto every
    /// subsequent request.
    pub async fn fetch_version(&mut self) -> Result<u32, ImportError> {
        let response: ApiResponse<u32> = self.make_request("version", None).await?;
        let version = response
            .into_result()?
            .ok_or_else(|| ImportError::Custom("AnkiConnect returned no version".to_string()))?;
        self.version = Some(version);
        Ok(version)
    }

    pub async fn deck_names(&self) -> Result<Vec<String>, ImportError> {
        let response: ApiResponse<Vec<String>> = self.make_request("deckNames", None).await?;
        Ok(response.into_result()?.unwrap_or_default())
    }

    pub async fn create_deck(&self, name: &str) -> Result<(), ImportError> {
        let params = serde_json::json!({ "deck": name });
        let response: ApiResponse<u64> = self.make_request("createDeck", Some(params)).await?;
        response.into_result()?;
        Ok(())
    }

    pub async fn model_names(&self) -> Result<Vec<String>, ImportError> {
        let response: ApiResponse<Vec<String>> = self.make_request("modelNames", None).await?;
        Ok(response.into_result()?.unwrap_or_default())
    }

    pub async fn model_field_names(&self, model_name: &str) -> Result<Vec<String>, ImportError> {
        let params = serde_json::json!({ "modelName": model_name });
        let response: ApiResponse<Vec<String>> =
            self.make_request("modelFieldNames", Some(params)).await?;
        Ok(response.into_result()?.unwrap_or_default())
    }

    pub async fn add_note(
        &self,
        deck_name: &str,
        model_name: &str,
        fields: &FieldSet,
        allow_duplicate: bool,
        tags: &[String],
    ) -> Result<u64, ImportError> {
        let params = serde_json::json!({
            "note": {
                "deckName": deck_name,
                "modelName": model_name,
                "fields": fields,
                "options": { "allowDuplicate": allow_duplicate },
                "tags": tags,
            }
        });
        let response: ApiResponse<u64> = self.make_request("addNote", Some(params)).await?;
        response
            .into_result()?
            .ok_or_else(|| ImportError::Custom("addNote returned no note id".to_string()))
    }
}

impl Default for AnkiClient {
    fn default() -> Self {
        Self::new()
    }
}
