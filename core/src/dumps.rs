//! Resource client for the dump endpoints.

use std::sync::Arc;

use crate::error::Error;
use crate::request::{decode_response, RequestClient};
use crate::types::Dump;

#[derive(Debug)]
pub struct Dumps {
    request: Arc<RequestClient>,
}

impl Dumps {
    pub(crate) fn new(request: Arc<RequestClient>) -> Self {
        Self { request }
    }

    /// Trigger a dump creation task on the server. The returned `uid` can be
    /// polled through [`Dumps::status`].
    pub fn create(&self) -> Result<Dump, Error> {
        let body = self.request.post("/dumps", Vec::new())?;
        decode_response(body)
    }

    /// Check the state of a previously triggered dump.
    pub fn status(&self, uid: &str) -> Result<Dump, Error> {
        let body = self.request.get(&format!("/dumps/{uid}/status"), None)?;
        decode_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::http::HttpMethod;
    use crate::transport::mock::MockTransport;
    use crate::types::DumpStatus;

    fn dumps(mock: &Arc<MockTransport>) -> Dumps {
        let config =
            Config::with_transport("http://localhost:7700", None, mock.clone()).unwrap();
        Dumps::new(Arc::new(RequestClient::new(config)))
    }

    #[test]
    fn create_posts_and_decodes_the_task() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_json(r#"{"uid":"20200929-114144097","status":"in_progress"}"#);
        let dump = dumps(&mock).create().unwrap();

        assert_eq!(dump.uid, "20200929-114144097");
        assert_eq!(dump.status, DumpStatus::InProgress);
        let requests = mock.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].url, "http://localhost:7700/dumps");
    }

    #[test]
    fn create_with_absent_body_is_data_not_found() {
        // A POST answered without a body yields a defined failure, never a
        // dropped outcome.
        let mock = Arc::new(MockTransport::new());
        mock.reply_empty();
        let err = dumps(&mock).create().unwrap_err();
        assert!(matches!(err, Error::DataNotFound));
    }

    #[test]
    fn status_targets_the_dump_path() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_json(r#"{"uid":"20200929-114144097","status":"done"}"#);
        let dump = dumps(&mock).status("20200929-114144097").unwrap();

        assert_eq!(dump.status, DumpStatus::Done);
        assert_eq!(
            mock.requests()[0].url,
            "http://localhost:7700/dumps/20200929-114144097/status"
        );
    }
}
