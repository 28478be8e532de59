use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use global_fee_std::params::ParamsError;
use semver::Version;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("Invalid params: {0}")]
    InvalidParams(#[from] ParamsError),

    #[error("Failed to decode genesis state: {0}")]
    Decode(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("Attempt to migrate to version {new_version}, but contract is on a higher version {current_version}")]
    MigrateInvalidVersion {
        new_version: Version,
        current_version: Version,
    },
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
