use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Key carrying the signature in requests and notifications
pub const TOKEN_KEY: &str = "Token";

/// Key the shared secret is inserted under before hashing
pub const PASSWORD_KEY: &str = "Password";

/// Token generation capability injected into the gateway client
pub trait TokenSigner: Send + Sync {
    /// Signs a flat parameter map with the shared secret
    fn generate_token(&self, params: &Map<String, Value>, secret: &str) -> String;

    /// Recomputes the token and compares it with `token`
    ///
    /// An empty token never verifies.
    fn verify_token(&self, params: &Map<String, Value>, secret: &str, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        let expected = self.generate_token(params, secret);
        expected.as_bytes().ct_eq(token.as_bytes()).into()
    }
}

/// SHA-256 token scheme used by the acquiring gateway
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256TokenSigner;

impl TokenSigner for Sha256TokenSigner {
    fn generate_token(&self, params: &Map<String, Value>, secret: &str) -> String {
        generate_token(params, secret)
    }
}

/// Computes the gateway token over `params`.
///
/// Nested arrays/objects and any `Token` entry are skipped, `Password` is set
/// to `secret`, keys are sorted by byte order and the values (not the keys)
/// are concatenated without a separator before hashing.
pub fn generate_token(params: &Map<String, Value>, secret: &str) -> String {
    let mut entries: Vec<(&str, String)> = params
        .iter()
        .filter(|(key, _)| key.as_str() != TOKEN_KEY && key.as_str() != PASSWORD_KEY)
        .filter_map(|(key, value)| scalar_to_string(value).map(|v| (key.as_str(), v)))
        .collect();
    entries.push((PASSWORD_KEY, secret.to_string()));
    entries.sort_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

    let concatenated: String = entries.into_iter().map(|(_, value)| value).collect();

    let mut hasher = Sha256::new();
    hasher.update(concatenated.as_bytes());
    hex::encode(hasher.finalize())
}

/// String form of a scalar as the gateway concatenates it; `None` for nested values
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
