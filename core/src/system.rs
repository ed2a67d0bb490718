//! Resource client for the `/health` and `/version` endpoints.

use std::sync::Arc;

use crate::error::Error;
use crate::request::{decode_response, RequestClient};
use crate::types::{Health, Version};

#[derive(Debug)]
pub struct System {
    request: Arc<RequestClient>,
}

impl System {
    pub(crate) fn new(request: Arc<RequestClient>) -> Self {
        Self { request }
    }

    pub fn health(&self) -> Result<Health, Error> {
        let body = self.request.get("/health", None)?;
        decode_response(body)
    }

    pub fn version(&self) -> Result<Version, Error> {
        let body = self.request.get("/version", None)?;
        decode_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::transport::mock::MockTransport;

    fn system(mock: &Arc<MockTransport>) -> System {
        let config =
            Config::with_transport("http://localhost:7700", None, mock.clone()).unwrap();
        System::new(Arc::new(RequestClient::new(config)))
    }

    #[test]
    fn health_decodes_status() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_json(r#"{"status":"available"}"#);
        let health = system(&mock).health().unwrap();
        assert_eq!(health.status, "available");
    }

    #[test]
    fn health_with_absent_body_is_data_not_found() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_empty();
        let err = system(&mock).health().unwrap_err();
        assert!(matches!(err, Error::DataNotFound));
    }

    #[test]
    fn version_decodes_build_information() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_json(
            r#"{"commitSha":"b46889b5f0f2f8b91438a08a358ba8f05fc09fc1",
                "buildDate":"2019-11-15T09:51:54.278247+00:00",
                "pkgVersion":"0.1.1"}"#,
        );
        let version = system(&mock).version().unwrap();
        assert_eq!(version.pkg_version, "0.1.1");
        assert_eq!(mock.requests()[0].url, "http://localhost:7700/version");
    }
}
