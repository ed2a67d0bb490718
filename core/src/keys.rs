//! Resource client for the `/keys` endpoint.
//!
//! Every resource client follows the same three steps: call the request
//! client, map an absent body to `DataNotFound` where one was required, and
//! strictly decode the bytes into the target DTO. Failures are forwarded
//! unchanged.

use std::sync::Arc;

use crate::error::Error;
use crate::request::{decode_response, RequestClient};
use crate::types::Key;

#[derive(Debug)]
pub struct Keys {
    request: Arc<RequestClient>,
}

impl Keys {
    pub(crate) fn new(request: Arc<RequestClient>) -> Self {
        Self { request }
    }

    /// Fetch the API key record. Requires the master key to be configured.
    pub fn get(&self) -> Result<Key, Error> {
        let body = self.request.get("/keys", None)?;
        decode_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::transport::mock::MockTransport;

    fn keys(mock: &Arc<MockTransport>) -> Keys {
        let config =
            Config::with_transport("http://localhost:7700", None, mock.clone()).unwrap();
        Keys::new(Arc::new(RequestClient::new(config)))
    }

    #[test]
    fn get_decodes_key_from_response() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_json(r#"{"key":"abc123"}"#);
        let key = keys(&mock).get().unwrap();

        assert_eq!(key.key, "abc123");
        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://localhost:7700/keys");
    }

    #[test]
    fn get_with_absent_body_is_data_not_found() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_empty();
        let err = keys(&mock).get().unwrap_err();
        assert!(matches!(err, Error::DataNotFound));
    }

    #[test]
    fn get_forwards_transport_error_without_decoding() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_error("connection refused");
        let err = keys(&mock).get().unwrap_err();

        match err {
            Error::Transport(source) => {
                assert!(source.to_string().contains("connection refused"));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn get_with_unexpected_shape_is_a_decoding_error() {
        // The raw bytes are never exposed as a success value.
        let mock = Arc::new(MockTransport::new());
        mock.reply_json(r#"{"message":"not a key"}"#);
        let err = keys(&mock).get().unwrap_err();
        assert!(matches!(err, Error::Decoding(_)));
    }
}
