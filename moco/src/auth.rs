use std::fmt;

use reqwest::header::{HeaderValue, InvalidHeaderValue};

/// Account domain and personal API key of a MOCO user.
#[derive(Clone)]
pub struct Credentials {
    pub domain: String,
    api_key: String,
}

impl Credentials {
    pub fn new(domain: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            api_key: api_key.into(),
        }
    }

    pub fn as_authorization_header(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Token {}", self.api_key))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

// Keep the API key out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("domain", &self.domain)
            .field("api_key", &"***")
            .finish()
    }
}
