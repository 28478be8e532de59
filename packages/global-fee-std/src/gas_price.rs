use std::fmt::{Display, Formatter};

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, SignedDecimal256, StdError, StdResult, Uint128, Uint256};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::params::ParamsError;

pub const MIN_DENOM_LENGTH: usize = 3;
pub const MAX_DENOM_LENGTH: usize = 128;
/// Characters allowed in a denom besides ascii alphanumerics, i.e. `ibc/...`, `factory/...`.
const DENOM_SPECIAL_CHARS: [char; 5] = ['/', ':', '.', '_', '-'];

/// Verifies the given denom is a valid token denomination. A denom starts with an ascii letter,
/// followed by ascii alphanumerics or any of `/:._-`, and is between 3 and 128 characters long.
pub fn validate_denom(denom: &str) -> Result<(), ParamsError> {
    let mut chars = denom.chars();

    let is_valid = (MIN_DENOM_LENGTH..=MAX_DENOM_LENGTH).contains(&denom.len())
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || DENOM_SPECIAL_CHARS.contains(&c));

    if !is_valid {
        return Err(ParamsError::InvalidDenom {
            denom: denom.to_string(),
        });
    }

    Ok(())
}

/// Minimum price per unit of gas a transaction has to pay in the given denom.
#[cw_serde]
pub struct GasPrice {
    pub denom: String,
    /// Decimal price, serialized as a string. Zero is a valid price.
    pub amount: SignedDecimal256,
}

impl GasPrice {
    pub fn new(denom: impl Into<String>, amount: SignedDecimal256) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Checks that the [GasPrice] is valid, i.e. the denom is well-formed and the amount is not
    /// negative.
    pub fn validate(&self) -> Result<(), ParamsError> {
        validate_denom(&self.denom)?;

        if self.amount.is_negative() {
            return Err(ParamsError::NegativeAmount {
                denom: self.denom.clone(),
                amount: self.amount,
            });
        }

        Ok(())
    }

    /// Computes the fee owed for `gas_limit` units of gas, rounded up to the next integer.
    pub fn fee_for(&self, gas_limit: u64) -> StdResult<Coin> {
        if self.amount.is_negative() {
            return Err(StdError::generic_err(format!(
                "Cannot compute a fee from the negative gas price {self}"
            )));
        }

        // the atomics of a non-negative decimal fit an unsigned integer of the same width
        let atomics = Uint256::from_be_bytes(self.amount.atomics().to_be_bytes());
        let fractional = Uint256::from(10u128.pow(SignedDecimal256::DECIMAL_PLACES));

        let fee = atomics
            .checked_mul(Uint256::from(gas_limit))?
            .checked_add(fractional - Uint256::one())?
            / fractional;

        Ok(Coin {
            denom: self.denom.clone(),
            amount: Uint128::try_from(fee)?,
        })
    }
}

impl Display for GasPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// The fee schedule, one [GasPrice] per denom. The list must be strictly sorted by denom, which
/// also rules out duplicates, so it can be merged against the (sorted) fee coins of a transaction
/// in a single pass.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(transparent)]
pub struct MinimumGasPrices(Vec<GasPrice>);

impl MinimumGasPrices {
    pub fn new(gas_prices: Vec<GasPrice>) -> Self {
        Self(gas_prices)
    }

    /// Validates the fee schedule.
    ///
    /// Ordering is checked first: every denom must be strictly greater than the previous one,
    /// so equal neighbours are reported as duplicates and decreasing ones as unsorted. Then each
    /// entry is validated on its own. An empty schedule is valid and enforces no minimum.
    pub fn validate(&self) -> Result<(), ParamsError> {
        for pair in self.0.windows(2) {
            let (prev, curr) = (&pair[0], &pair[1]);

            if curr.denom == prev.denom {
                return Err(ParamsError::DuplicateDenom {
                    denom: curr.denom.clone(),
                });
            }

            if curr.denom < prev.denom {
                return Err(ParamsError::UnsortedDenoms {
                    previous: prev.denom.clone(),
                    current: curr.denom.clone(),
                });
            }
        }

        self.0.iter().try_for_each(GasPrice::validate)
    }

    /// Returns the minimum gas price set for `denom`, if any. Relies on the list being sorted.
    pub fn amount_of(&self, denom: &str) -> Option<SignedDecimal256> {
        self.0
            .binary_search_by(|gas_price| gas_price.denom.as_str().cmp(denom))
            .ok()
            .map(|index| self.0[index].amount)
    }

    /// Computes the minimum fees a transaction with the given gas limit has to pay, one coin per
    /// denom it could pay in. Zero prices impose no fee and are skipped.
    pub fn required_fees(&self, gas_limit: u64) -> StdResult<Vec<Coin>> {
        self.0
            .iter()
            .filter(|gas_price| !gas_price.amount.is_zero())
            .map(|gas_price| gas_price.fee_for(gas_limit))
            .collect()
    }

    pub fn denoms(&self) -> Vec<&str> {
        self.0.iter().map(|gas_price| gas_price.denom.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GasPrice> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<GasPrice> {
        self.0
    }
}

impl From<Vec<GasPrice>> for MinimumGasPrices {
    fn from(gas_prices: Vec<GasPrice>) -> Self {
        Self(gas_prices)
    }
}

/// Renders the schedule as `1ALX,0.001BLX`. An empty schedule renders as `[]` so it can be used
/// as an event attribute value, which the host requires to be non-empty.
impl Display for MinimumGasPrices {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "[]");
        }

        let gas_prices: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", gas_prices.join(","))
    }
}
