use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaylightError {
    #[error("invalid argument in {context}: {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    #[error("collaborator {collaborator} failed: {message}")]
    CollaboratorFailure {
        collaborator: &'static str,
        message: String,
    },
}

pub type DaylightResult<T> = Result<T, DaylightError>;

impl DaylightError {
    pub fn invalid_argument(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    pub fn collaborator_failure(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self::CollaboratorFailure {
            collaborator,
            message: message.into(),
        }
    }
}
