use thiserror::Error;

/// Why a request to the API did not produce a value.
///
/// Every failure is reported to the caller. Nothing is masked as an empty
/// result, so "no data for this id" and "the request failed" stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("could not reach the API: {0}")]
    Network(String),

    #[error("API responded with status {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("could not decode response: {0}")]
    Decode(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<ureq::Error> for Error {
    fn from(value: ureq::Error) -> Self {
        match value {
            ureq::Error::StatusCode(code) => Self::Status(code),
            ureq::Error::Timeout(_) => Self::Timeout,
            ureq::Error::Io(err) if err.kind() == std::io::ErrorKind::TimedOut => Self::Timeout,
            ureq::Error::Json(err) => Self::Decode(err.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_keep_their_number() {
        let err: Error = ureq::Error::StatusCode(404).into();
        assert_eq!(err, Error::Status(404));
        assert_eq!(err.to_string(), "API responded with status 404");
    }

    #[test]
    fn io_timeouts_are_timeouts() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "slow");
        assert_eq!(Error::from(ureq::Error::Io(io)), Error::Timeout);
    }

    #[test]
    fn other_io_errors_are_network_failures() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        assert!(matches!(Error::from(ureq::Error::Io(io)), Error::Network(_)));
    }

    #[test]
    fn html_bodies_are_decode_failures() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert!(matches!(Error::from(err), Error::Decode(_)));
    }
}
