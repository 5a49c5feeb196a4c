use near_sdk_macros::NearSchema;

use crate::constants::ERROR_PREFIX;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum DistributorError {
    Unauthorized(String),
    InvalidInput(String),
    NotFound(String),
    InvalidState(String),
    InsufficientDeposit(String),
    MaxTokensIssued,
    InternalError(String),
}

impl std::fmt::Display for DistributorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg)
            | Self::InvalidInput(msg)
            | Self::NotFound(msg)
            | Self::InvalidState(msg)
            | Self::InsufficientDeposit(msg)
            | Self::InternalError(msg) => write!(f, "{}: {}", ERROR_PREFIX, msg),
            Self::MaxTokensIssued => write!(f, "{}: max tokens issued for cohort", ERROR_PREFIX),
        }
    }
}

impl DistributorError {
    pub fn cohort_not_found() -> Self {
        Self::NotFound("cohort not found".into())
    }
    pub fn token_not_found() -> Self {
        Self::NotFound("token not found".into())
    }
    pub fn not_admin() -> Self {
        Self::Unauthorized("caller is not an admin".into())
    }
    pub fn only_owner() -> Self {
        Self::Unauthorized("caller is not the owner".into())
    }
    pub fn paused() -> Self {
        Self::InvalidState("contract is paused".into())
    }
}
