use cosmwasm_schema::cw_serde;
use cosmwasm_std::SignedDecimal256;
use thiserror::Error;

use crate::gas_price::MinimumGasPrices;

#[derive(Error, Debug, PartialEq)]
pub enum ParamsError {
    #[error("Invalid denom: {denom}")]
    InvalidDenom { denom: String },

    #[error("Negative minimum gas price {amount} for denom {denom}")]
    NegativeAmount {
        denom: String,
        amount: SignedDecimal256,
    },

    #[error("Duplicate denom {denom} in minimum gas prices")]
    DuplicateDenom { denom: String },

    #[error("Minimum gas prices must be sorted by denom, {current} comes after {previous}")]
    UnsortedDenoms { previous: String, current: String },
}

/// The global fee parameters.
#[cw_serde]
#[derive(Default)]
pub struct Params {
    /// Minimum gas prices accepted for transactions, sorted by denom. A missing list is the same
    /// as an empty one, meaning no minimum is enforced.
    #[serde(default)]
    pub minimum_gas_prices: MinimumGasPrices,
}

impl Params {
    pub fn new(minimum_gas_prices: MinimumGasPrices) -> Self {
        Self { minimum_gas_prices }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        self.minimum_gas_prices.validate()
    }
}
