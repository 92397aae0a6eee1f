//! Environment variable secrets.
//!
//! A `.env` file in the working directory (or any parent) is loaded first
//! and overrides variables already set in the process environment. Keys are
//! then read from the environment and wrapped in [`SecretString`].

use std::path::PathBuf;

use secrecy::SecretString;
use tracing::{debug, warn};

/// Variables checked for the OpenAI key, in order.
pub const OPENAI_KEY_VARS: &[&str] = &["OPENAI_API_KEY", "OPEN_API_KEY"];

/// Variables checked for the Tavily key.
pub const TAVILY_KEY_VARS: &[&str] = &["TAVILY_API_KEY"];

/// Load `.env`, overriding existing variables. Returns the file used.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv_override() {
        Ok(path) => {
            debug!(path = %path.display(), "Loaded .env");
            Some(path)
        }
        Err(err) if err.not_found() => {
            debug!("No .env file found");
            None
        }
        Err(err) => {
            warn!("Failed to load .env: {err}");
            None
        }
    }
}

/// First non-empty value among `names`.
pub fn resolve_secret(names: &[&str]) -> Option<SecretString> {
    names.iter().find_map(|name| match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            debug!(var = name, "Resolved secret from environment");
            Some(SecretString::from(value))
        }
        // Missing and non-unicode values both count as absent.
        _ => None,
    })
}

/// Like [`resolve_secret`], but a missing key only logs a warning and
/// yields an empty secret, so the first remote call fails with an
/// authentication error instead of startup failing.
pub fn resolve_secret_or_warn(label: &str, names: &[&str]) -> SecretString {
    resolve_secret(names).unwrap_or_else(|| {
        warn!(
            vars = %names.join(", "),
            "No {label} API key found in the environment"
        );
        SecretString::from(String::new())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_resolve_secret_prefers_first_name() {
        // SAFETY: these variable names are unique to this test.
        unsafe {
            std::env::set_var("ASKDOC_TEST_KEY_PRIMARY", "primary");
            std::env::set_var("ASKDOC_TEST_KEY_FALLBACK", "fallback");
        }

        let secret = resolve_secret(&["ASKDOC_TEST_KEY_PRIMARY", "ASKDOC_TEST_KEY_FALLBACK"]).unwrap();
        assert_eq!(secret.expose_secret(), "primary");

        // SAFETY: cleanup of the variables set above.
        unsafe {
            std::env::remove_var("ASKDOC_TEST_KEY_PRIMARY");
            std::env::remove_var("ASKDOC_TEST_KEY_FALLBACK");
        }
    }

    #[test]
    fn test_resolve_secret_falls_back_and_skips_empty() {
        // SAFETY: these variable names are unique to this test.
        unsafe {
            std::env::set_var("ASKDOC_TEST_KEY_EMPTY", "  ");
            std::env::set_var("ASKDOC_TEST_KEY_SECOND", "second");
        }

        let secret = resolve_secret(&["ASKDOC_TEST_KEY_EMPTY", "ASKDOC_TEST_KEY_SECOND"]).unwrap();
        assert_eq!(secret.expose_secret(), "second");

        // SAFETY: cleanup of the variables set above.
        unsafe {
            std::env::remove_var("ASKDOC_TEST_KEY_EMPTY");
            std::env::remove_var("ASKDOC_TEST_KEY_SECOND");
        }
    }

    #[test]
    fn test_missing_secret_yields_empty() {
        assert!(resolve_secret(&["ASKDOC_TEST_KEY_NEVER_SET_XYZ"]).is_none());
        let secret = resolve_secret_or_warn("test", &["ASKDOC_TEST_KEY_NEVER_SET_XYZ"]);
        assert!(secret.expose_secret().is_empty());
    }
}
