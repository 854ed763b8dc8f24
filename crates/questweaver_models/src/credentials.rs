//! Credential lookup, performed at request time.

use std::collections::HashMap;

/// Source of provider API keys, looked up by environment variable name.
pub trait CredentialSource: Send + Sync {
    /// Value for the variable, if set.
    fn lookup(&self, env_var: &str) -> Option<String>;
}

/// Reads credentials from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn lookup(&self, env_var: &str) -> Option<String> {
        std::env::var(env_var).ok()
    }
}

impl CredentialSource for HashMap<String, String> {
    fn lookup(&self, env_var: &str) -> Option<String> {
        self.get(env_var).cloned()
    }
}
