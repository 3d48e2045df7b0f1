use reqwest::{
    Client,
    StatusCode,
};
use serde::Deserialize;

use crate::core::ImportError;

const BASE_URL: &str = "https://www.lingq.com/api";

/// Status value LingQ uses for words the user already knows.
pub const STATUS_KNOWN: i64 = 3;

#[derive(Debug, Deserialize, Clone)]
pub struct Language {
    pub title: String,
    pub code: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Hint {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Lingq {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub fragment: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub hints: Vec<Hint>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: i64,
}

impl Lingq {
    pub fn is_known(&self) -> bool {
        self.status == STATUS_KNOWN
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

pub struct LingqClient {
    client: Client,
    token: String,
}

impl LingqClient {
    /// Exchanges credentials for an API token. A 400 response means bad
    /// credentials and is recoverable by re-prompting the user.
    pub async fn authenticate(username: &str, password: &str) -> Result<Self, ImportError> {
        let client = Client::new();
        let response = client
            .post(format!("{}/api-token-auth/", BASE_URL))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        if response.status() == StatusCode::BAD_REQUEST {
            return Err(ImportError::AuthFailed(response.text().await?));
        }

        let token = response.json::<TokenResponse>().await?.token;
        Ok(Self { client, token })
    }

    fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }

    pub async fn languages(&self) -> Result<Vec<Language>, ImportError> {
        let languages = self
            .client
            .get(format!("{}/languages/", BASE_URL))
            .header("Authorization", self.auth_header())
            .send()
            .await?
            .json()
            .await?;
        Ok(languages)
    }

    /// Fetches every LingQ for one language in the order the service returns
    /// them. Can take minutes for large collections.
    pub async fn lingqs(&self, language_code: &str) -> Result<Vec<Lingq>, ImportError> {
        let lingqs = self
            .client
            .get(format!("{}/languages/{}/lingqs", BASE_URL, language_code))
            .header("Authorization", self.auth_header())
            .send()
            .await?
            .json()
            .await?;
        Ok(lingqs)
    }
}
