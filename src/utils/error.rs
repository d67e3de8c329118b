use reqwest::StatusCode;
use std::sync::Arc;
use tracing::debug;

/// Everything an action can fail with. `Clone` because outcomes travel
/// inside UI messages.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Non-2xx answer from the backend; displays the backend's message verbatim.
    #[error("{message}")]
    Remote { status: StatusCode, message: String },

    #[error("{field} must be a number, got `{value}`")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Product id is required")]
    MissingId,

    #[error("{0}")]
    Transport(Arc<anyhow::Error>),
}

impl Error {
    pub fn remote(status: StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| status.to_string());
        Self::Remote { status, message }
    }

    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

macro_rules! transport {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for Error {
            #[cold]
            fn from(error: $ty) -> Self {
                debug!("`{error}`");
                Self::Transport(Arc::new(error.into()))
            }
        })*
    };
}

transport!(reqwest::Error, json::Error);

pub type Result<T, E = Error> = std::result::Result<T, E>;
