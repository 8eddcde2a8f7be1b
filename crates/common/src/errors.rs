use std::error::Error as StdError;
use std::io;
use thiserror::Error;

// ENFILE, EMFILE and ENOBUFS as reported by Linux
const EXHAUSTION_ERRNOS: &[i32] = &[23, 24, 105];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid SERVER_PORT {raw:?}, using {fallback}")]
    InvalidPort { raw: String, fallback: u16 },
}

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("{}", describe(.0))]
    ClientBuild(#[source] reqwest::Error),

    #[error("{}", describe(.0))]
    ResourceExhausted(#[source] reqwest::Error),

    #[error("{}", describe(.0))]
    Transport(#[source] reqwest::Error),
}

impl RequestError {
    /// Sorts a failed send or body read into exhaustion vs. plain transport
    /// failure by looking for the OS error underneath it.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if io_cause(&err).is_some_and(is_exhaustion) {
            RequestError::ResourceExhausted(err)
        } else {
            RequestError::Transport(err)
        }
    }

    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, RequestError::ResourceExhausted(_))
    }
}

pub fn is_exhaustion(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::AddrNotAvailable {
        return true;
    }
    err.raw_os_error()
        .is_some_and(|code| EXHAUSTION_ERRNOS.contains(&code))
}

fn io_cause(err: &reqwest::Error) -> Option<&io::Error> {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            return Some(io_err);
        }
        source = cause.source();
    }
    None
}

// reqwest's own message omits the cause ("error sending request for url ...")
fn describe(err: &reqwest::Error) -> String {
    let mut root = match err.source() {
        Some(cause) => cause,
        None => return err.to_string(),
    };
    while let Some(next) = root.source() {
        root = next;
    }
    format!("{} ({})", err, root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhaustion_by_errno() {
        assert!(is_exhaustion(&io::Error::from_raw_os_error(24)));
        assert!(is_exhaustion(&io::Error::from_raw_os_error(23)));
    }

    #[test]
    fn test_exhaustion_by_kind() {
        assert!(is_exhaustion(&io::Error::from(io::ErrorKind::AddrNotAvailable)));
    }

    #[test]
    fn test_refused_is_not_exhaustion() {
        assert!(!is_exhaustion(&io::Error::from(io::ErrorKind::ConnectionRefused)));
        assert!(!is_exhaustion(&io::Error::from(io::ErrorKind::TimedOut)));
    }
}
