//! Authentication header for API requests.

use super::credentials::CredentialStatus;
use super::types::ApiConfig;

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header name and value for authentication.
pub type AuthHeader = (&'static str, String);

/// Build the `x-api-key` header, or `None` when no key is configured.
///
/// Requests without a key still go out; the API rejects them.
pub fn build_auth_header(api: &ApiConfig) -> Option<AuthHeader> {
    match api.resolve_credential() {
        CredentialStatus::Configured(key) => Some((API_KEY_HEADER, key.expose().to_string())),
        CredentialStatus::Unconfigured { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_header() {
        let api = ApiConfig {
            api_key: Some("test-key-123".to_string()),
            ..ApiConfig::default()
        };
        let (name, value) = build_auth_header(&api).unwrap();
        assert_eq!(name, "x-api-key");
        assert_eq!(value, "test-key-123");
    }

    #[test]
    fn test_missing_key_yields_no_header() {
        let api = ApiConfig {
            api_key_env: "PET_GALLERY_NONEXISTENT_VAR_XYZ123".to_string(),
            ..ApiConfig::default()
        };
        assert!(build_auth_header(&api).is_none());
    }
}
