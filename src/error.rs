#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("local storage is unavailable")]
    StorageUnavailable,

    #[error("failed to write `{key}` to local storage")]
    StorageWrite { key: String },

    #[error("request for `{path}` failed")]
    Request {
        path: String,
        #[source]
        err: gloo_net::Error,
    },

    #[error("`{path}` responded with status {status}")]
    Status { path: String, status: u16 },

    #[error("placeholder `{0}` not found")]
    MissingPlaceholder(String),

    #[error("invalid selector `{0}`")]
    Selector(String),

    #[error("malformed site configuration")]
    Conf(#[source] serde_json::Error),
}

impl Error {
    /// The message followed by every underlying cause.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
