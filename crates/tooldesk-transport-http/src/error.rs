//! Listener failures.

use thiserror::Error;

use tooldesk_types::{DeskError, ErrorKind};

#[derive(Debug, Error)]
pub enum HttpTransportError {
    /// The address could not be bound, usually because it is taken.
    #[error("cannot listen on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    /// Accepting or serving connections stopped with an I/O error.
    #[error("http server stopped unexpectedly: {0}")]
    Serve(#[source] std::io::Error),
}

impl From<HttpTransportError> for DeskError {
    fn from(e: HttpTransportError) -> Self {
        DeskError::new(ErrorKind::Internal, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn bind_names_the_address() {
        let err = HttpTransportError::Bind {
            addr: "0.0.0.0:8787".into(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "in use"),
        };
        assert_eq!(err.to_string(), "cannot listen on 0.0.0.0:8787: in use");
    }

    #[test]
    fn serve_failure_is_internal() {
        let err: DeskError =
            HttpTransportError::Serve(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
                .into();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert!(err.message.ends_with("reset"));
    }
}
