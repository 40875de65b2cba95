use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Errors reported across the bridge as a named code plus a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    #[error("method not implemented: {0}")]
    NotImplemented(String),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("plugin is not attached to a host")]
    NotAttached,

    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl ChannelError {
    /// Stable code the caller matches on.
    pub fn code(&self) -> &'static str {
        match self {
            ChannelError::NotImplemented(_) => "NOT_IMPLEMENTED",
            ChannelError::InvalidArguments(_) => "INVALID_ARGUMENTS",
            ChannelError::NotAttached => "NOT_ATTACHED",
            ChannelError::Unavailable(_) => "UNAVAILABLE",
        }
    }
}

impl Serialize for ChannelError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ChannelError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

impl From<serde_json::Error> for ChannelError {
    fn from(e: serde_json::Error) -> Self {
        ChannelError::InvalidArguments(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChannelError>;
