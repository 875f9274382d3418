use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde_json::Value;

use crate::error::*;
use crate::model::{Credential, HealthStatus, TokenSource, Url};
use crate::util;

/// Client of a Token2go backend.
/// Every endpoint is resolved relative to `base_url`.
#[derive(Debug, Clone)]
pub struct TokenClient {
    inner: Client,
    base_url: Url,
}

impl TokenClient {
    pub const TOKEN_ENDPOINT: &str = "token";
    pub const HEALTH_ENDPOINT: &str = "health";
    pub const DOCS_ENDPOINT: &str = "swagger-ui/";
    pub const OPENAPI_ENDPOINT: &str = "swagger.yaml";

    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = util::parse_base_url(base_url)?;
        let inner = Client::builder().gzip(true).build()?;
        Ok(Self { inner, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token_url(&self) -> Result<Url> {
        util::join_endpoint(&self.base_url, Self::TOKEN_ENDPOINT)
    }

    pub fn health_url(&self) -> Result<Url> {
        util::join_endpoint(&self.base_url, Self::HEALTH_ENDPOINT)
    }

    /// Page of the backend's API documentation viewer.
    pub fn docs_url(&self) -> Result<Url> {
        util::join_endpoint(&self.base_url, Self::DOCS_ENDPOINT)
    }

    /// OpenAPI document the documentation viewer is pointed at.
    pub fn openapi_url(&self) -> Result<Url> {
        util::join_endpoint(&self.base_url, Self::OPENAPI_ENDPOINT)
    }

    async fn get(&self, url: Url) -> Result<Response> {
        log::debug!("GET {}", url);
        let resp = self
            .inner
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;
        Ok(resp)
    }

    /// Checks status and `Content-Type`, then decodes the body as JSON.
    async fn get_json(&self, url: Url) -> Result<Value> {
        let requested_url = url.to_string();
        let resp = self.get(url).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                status,
                requested_url,
            });
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);
        match &content_type {
            Some(ct) if util::is_json_content_type(ct) => {}
            _ => {
                return Err(Error::Format {
                    content_type,
                    requested_url,
                })
            }
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn fetch_credential(&self) -> Result<Credential> {
        let url = self.token_url()?;
        let requested_url = url.to_string();
        let body = self.get_json(url).await?;
        self::credential_from_json(&body, requested_url)
    }

    pub async fn check_health(&self) -> Result<HealthStatus> {
        let url = self.health_url()?;
        let body = self.get_json(url).await?;
        Ok(serde_json::from_value(body)?)
    }
}

#[async_trait]
impl TokenSource for TokenClient {
    fn endpoint(&self) -> String {
        self.token_url()
            .map(|u| u.to_string())
            .unwrap_or_else(|_| self.base_url.to_string())
    }

    async fn fetch_credential(&self) -> Result<Credential> {
        TokenClient::fetch_credential(self).await
    }
}

/// Both `fingerprint` and `secret` must be non-empty strings.
fn credential_from_json(body: &Value, requested_url: String) -> Result<Credential> {
    let field = |name: &str| {
        body.get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
    };

    let fingerprint = field("fingerprint");
    let secret = field("secret");

    let (Some(fingerprint), Some(secret)) = (&fingerprint, &secret) else {
        let mut missing = Vec::with_capacity(2);
        if fingerprint.is_none() {
            missing.push("fingerprint");
        }
        if secret.is_none() {
            missing.push("secret");
        }
        return Err(Error::Schema {
            missing,
            requested_url,
        });
    };

    Ok(Credential {
        fingerprint: fingerprint.clone(),
        secret: secret.clone(),
        timestamp: field("timestamp"),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    const URL: &str = "http://localhost:8080/token";

    #[test]
    fn credential_from_complete_body() {
        let body = json!({
            "timestamp": "2023-05-01T10:20:30Z",
            "fingerprint": "f1",
            "secret": "s1",
        });
        let cred = credential_from_json(&body, URL.to_owned()).unwrap();
        assert_eq!(cred.fingerprint, "f1");
        assert_eq!(cred.secret, "s1");
        assert_eq!(cred.timestamp.as_deref(), Some("2023-05-01T10:20:30Z"));
    }

    #[test]
    fn credential_without_timestamp() {
        let body = json!({ "fingerprint": "f1", "secret": "s1" });
        let cred = credential_from_json(&body, URL.to_owned()).unwrap();
        assert_eq!(cred, Credential::new("f1", "s1"));
    }

    #[test]
    fn missing_or_empty_fields_are_schema_errors() {
        let missing = |body: Value| match credential_from_json(&body, URL.to_owned()) {
            Err(Error::Schema { missing, .. }) => missing,
            other => panic!("expected schema error, got {:?}", other),
        };

        assert_eq!(missing(json!({ "secret": "s1" })), vec!["fingerprint"]);
        assert_eq!(missing(json!({ "fingerprint": "f1" })), vec!["secret"]);
        assert_eq!(
            missing(json!({ "fingerprint": "", "secret": "" })),
            vec!["fingerprint", "secret"]
        );
        // Non-string values don't count as present.
        assert_eq!(
            missing(json!({ "fingerprint": "f1", "secret": 42 })),
            vec!["secret"]
        );
        assert_eq!(missing(json!([])), vec!["fingerprint", "secret"]);
    }

    #[test]
    fn endpoint_urls() {
        let cli = TokenClient::new("https://t2g.example.com/sub").unwrap();
        assert_eq!(
            cli.token_url().unwrap().as_str(),
            "https://t2g.example.com/sub/token"
        );
        assert_eq!(
            cli.health_url().unwrap().as_str(),
            "https://t2g.example.com/sub/health"
        );
        assert_eq!(
            cli.docs_url().unwrap().as_str(),
            "https://t2g.example.com/sub/swagger-ui/"
        );
        assert_eq!(
            cli.openapi_url().unwrap().as_str(),
            "https://t2g.example.com/sub/swagger.yaml"
        );
        assert_eq!(cli.endpoint(), "https://t2g.example.com/sub/token");
    }
}
