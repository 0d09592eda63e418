use std::fmt;
#[derive(Debug)]
pub enum IpoError {
    RequestError(reqwest::Error),
    ParseError(serde_json::Error),
    IoError(std::io::Error),
    Status { code: u16, body: String },
    Other(String),
}
impl IpoError {
    /// HTTP status carried by a non-success response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            IpoError::Status { code, .. } => Some(*code),
            IpoError::RequestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
impl fmt::Display for IpoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpoError::RequestError(e) => write!(f, "Request error: {}", e),
            IpoError::ParseError(e) => write!(f, "Parse error: {}", e),
            IpoError::IoError(e) => write!(f, "IO error: {}", e),
            IpoError::Status { code, body } => write!(f, "HTTP {}: {}", code, body),
            IpoError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}
impl std::error::Error for IpoError {}
impl From<reqwest::Error> for IpoError {
    fn from(err: reqwest::Error) -> Self {
        IpoError::RequestError(err)
    }
}
impl From<serde_json::Error> for IpoError {
    fn from(err: serde_json::Error) -> Self {
        IpoError::ParseError(err)
    }
}
impl From<std::io::Error> for IpoError {
    fn from(err: std::io::Error) -> Self {
        IpoError::IoError(err)
    }
}
impl From<String> for IpoError {
    fn from(s: String) -> IpoError {
        IpoError::Other(s)
    }
}
