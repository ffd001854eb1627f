use thiserror::Error;

/// Errors raised when an authentication client is exercised.
///
/// Building clients never fails; these only occur downstream, when the
/// request layer asks a client to do something its configuration
/// cannot support.
#[derive(Debug, Error)]
pub enum AuthnError {
    /// The delegated CAS client was asked for its login URL but none
    /// is configured.
    #[error("No login URL is configured for the delegated CAS client")]
    MissingLoginUrl,

    /// The IP client's configured pattern is not a valid regular
    /// expression. Surfaces at authentication time, never at selection
    /// time.
    #[error("Invalid authorized-IP pattern: {0}")]
    InvalidIpPattern(#[from] regex::Error),

    /// The operation does not apply to this kind of client.
    #[error("Operation not supported by client [{0}]")]
    UnsupportedOperation(String),
}

pub type Result<T> = std::result::Result<T, AuthnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthnError::MissingLoginUrl;
        assert_eq!(
            err.to_string(),
            "No login URL is configured for the delegated CAS client"
        );

        let err = AuthnError::UnsupportedOperation("IpClient".to_string());
        assert_eq!(err.to_string(), "Operation not supported by client [IpClient]");
    }
}
