#[derive(Debug, Clone, PartialEq)]
pub struct MocoURL(String);

impl AsRef<str> for MocoURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl MocoURL {
    /// The API root of a hosted MOCO account, e.g. `https://acme.mocoapp.com/api/v1`.
    pub fn for_domain(domain: &str) -> Self {
        Self(format!("https://{}.mocoapp.com/api/v1", domain.trim()))
    }

    /// Use an explicit API root instead of the hosted one.
    pub fn custom(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    pub fn with_query(&self, key: &str, value: &str) -> Self {
        if self.0.contains('?') {
            Self(format!("{}&{}={}", self.0, key, value))
        } else {
            Self(format!("{}?{}={}", self.0, key, value))
        }
    }
}
