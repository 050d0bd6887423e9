use thiserror::Error;

pub type HrResult<T> = Result<T, HrError>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HrError {
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument {
        param: &'static str,
        reason: &'static str,
    },
}

impl HrError {
    pub fn missing(param: &'static str) -> Self {
        Self::InvalidArgument {
            param,
            reason: "must not be absent",
        }
    }

    pub fn invalid(param: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { param, reason }
    }

    pub fn param(&self) -> &'static str {
        match self {
            HrError::InvalidArgument { param, .. } => param,
        }
    }
}
