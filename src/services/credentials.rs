use std::collections::HashMap;

/// Source of secret material, looked up by name.
pub trait CredentialProvider: Send + Sync {
    /// Returns `None` when the secret is unset. Empty values count as unset.
    fn get_secret(&self, name: &str) -> Option<String>;
}

/// Reads secrets from the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvCredentialProvider;

impl CredentialProvider for EnvCredentialProvider {
    fn get_secret(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

/// Fixed set of secrets, for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct StaticCredentialProvider {
    secrets: HashMap<String, String>,
}

impl StaticCredentialProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(name.into(), value.into());
        self
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn get_secret(&self, name: &str) -> Option<String> {
        self.secrets
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
    }
}
