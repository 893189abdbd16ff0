//! Session state for one EVNotify account.

use serde::{Deserialize, Serialize};

/// Credentials identifying one account against the backend.
///
/// The token is only meaningful together with a set account key; operations
/// that need authentication treat either one missing as unauthenticated.
/// Serializable so an embedding application can persist it between runs;
/// the client itself never touches disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Account key (AKey) naming the account.
    #[serde(default)]
    pub akey: Option<String>,

    /// Opaque session token issued by register/login.
    #[serde(default)]
    pub token: Option<String>,
}

impl Session {
    /// Session holding an account key but no token yet.
    pub fn with_akey(akey: impl Into<String>) -> Self {
        Self {
            akey: Some(akey.into()),
            token: None,
        }
    }

    /// Both credentials are present.
    pub fn is_authenticated(&self) -> bool {
        self.akey.is_some() && self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_anonymous() {
        assert!(!Session::default().is_authenticated());
    }

    #[test]
    fn akey_alone_is_not_authenticated() {
        assert!(!Session::with_akey("EVNOTIFY1").is_authenticated());
    }

    #[test]
    fn token_alone_is_not_authenticated() {
        let session = Session {
            akey: None,
            token: Some("abc".to_string()),
        };
        assert!(!session.is_authenticated());
    }

    #[test]
    fn both_credentials_authenticate() {
        let session = Session {
            akey: Some("EVNOTIFY1".to_string()),
            token: Some("abc".to_string()),
        };
        assert!(session.is_authenticated());
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let session: Session = serde_json::from_str(r#"{"akey":"XYZ987"}"#).unwrap();
        assert_eq!(session.akey.as_deref(), Some("XYZ987"));
        assert!(session.token.is_none());
    }
}
