use crate::errors::ApiError;
use serde_json::Value;

/// Raw status + body pair handed back by a transport. The client maps the
/// status to an outcome or error before touching the body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The wire seam of the client. Production uses blocking reqwest; tests swap
/// in a transport serving canned responses.
pub trait Transport: Send + Sync {
    fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse, ApiError>;
    fn get(&self, url: &str) -> Result<RawResponse, ApiError>;
}

/// Blocking reqwest transport. No retries, no timeout beyond the client
/// defaults; a failed send surfaces as [`ApiError::RequestFailed`].
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .or(Err(ApiError::RequestFailed))?;

        Ok(Self { client })
    }

    fn finish(response: reqwest::blocking::Response) -> Result<RawResponse, ApiError> {
        let status = response.status().as_u16();
        let body = response.text().or(Err(ApiError::FailedToDecode))?;

        Ok(RawResponse { status, body })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse, ApiError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .or(Err(ApiError::RequestFailed))?;

        Self::finish(response)
    }

    fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        let response = self.client.get(url).send().or(Err(ApiError::RequestFailed))?;

        Self::finish(response)
    }
}
