use cosmwasm_std::{Addr, StdResult, Storage};
use global_fee_std::gas_price::MinimumGasPrices;
use global_fee_std::params::Params;

use crate::state::{AUTHORITY, PARAMS};
use crate::ContractError;

/// Owns the params in storage. Reads are open to anyone, writes are restricted to the authority
/// the keeper was built with.
#[derive(Clone, Debug, PartialEq)]
pub struct Keeper {
    authority: Addr,
}

impl Keeper {
    pub fn new(authority: Addr) -> Self {
        Self { authority }
    }

    /// Builds the keeper from the authority stored on instantiation.
    pub fn load(storage: &dyn Storage) -> StdResult<Self> {
        Ok(Self::new(AUTHORITY.load(storage)?))
    }

    /// Persists the authority so the keeper can be rebuilt with [Keeper::load].
    pub(crate) fn save(&self, storage: &mut dyn Storage) -> StdResult<()> {
        AUTHORITY.save(storage, &self.authority)
    }

    pub fn authority(&self) -> &Addr {
        &self.authority
    }

    /// Returns the stored params. Params that were never set are the default ones.
    pub fn get_params(storage: &dyn Storage) -> StdResult<Params> {
        Ok(PARAMS.may_load(storage)?.unwrap_or_default())
    }

    /// Returns the minimum gas prices transactions are checked against.
    pub fn get_minimum_gas_prices(storage: &dyn Storage) -> StdResult<MinimumGasPrices> {
        Ok(Self::get_params(storage)?.minimum_gas_prices)
    }

    /// Replaces the stored params. Fails without writing anything if `sender` is not the
    /// authority or the params are invalid.
    pub fn set_params(
        &self,
        storage: &mut dyn Storage,
        sender: &Addr,
        params: &Params,
    ) -> Result<(), ContractError> {
        if *sender != self.authority {
            return Err(ContractError::Unauthorized);
        }

        write_params(storage, params)
    }
}

/// Validates and stores the params, skipping the authority check. Only genesis and
/// [Keeper::set_params] write through here.
pub(crate) fn write_params(storage: &mut dyn Storage, params: &Params) -> Result<(), ContractError> {
    params.validate()?;
    PARAMS.save(storage, params)?;

    Ok(())
}
