use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[source] Box<ureq::Error>),

    #[error("Failed to read response body: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Server returned an error: {status}")]
    ServerError { status: u16 },

    #[error("Response body is not the expected JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    /// The server answered, but not with 200.
    pub fn is_server_error(&self) -> bool {
        matches!(self, RequestError::ServerError { .. })
    }

    /// The request never got an answer (refused, DNS, reset, ...).
    /// A body cut short after a 200 is not one of these.
    pub fn is_transport(&self) -> bool {
        matches!(self, RequestError::HttpError(_))
    }
}

impl From<ureq::Error> for RequestError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, _) => RequestError::ServerError { status: code },
            other => RequestError::HttpError(Box::new(other)),
        }
    }
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Failed to serialize answers: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Request(#[from] RequestError),
}
