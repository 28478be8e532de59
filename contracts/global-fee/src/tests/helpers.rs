use std::str::FromStr;

use cosmwasm_std::testing::{mock_env, mock_info};
use cosmwasm_std::{DepsMut, Response, SignedDecimal256};
use global_fee_std::gas_price::{GasPrice, MinimumGasPrices};
use global_fee_std::global_fee::{GenesisState, InstantiateMsg};
use global_fee_std::params::Params;

use crate::contract::instantiate;
use crate::ContractError;

pub(crate) const AUTHORITY: &str = "authority";

pub(crate) fn gas_price(denom: &str, amount: &str) -> GasPrice {
    GasPrice::new(denom, SignedDecimal256::from_str(amount).unwrap())
}

pub(crate) fn params(gas_prices: Vec<GasPrice>) -> Params {
    Params::new(MinimumGasPrices::new(gas_prices))
}

/// Mocks contract instantiation.
pub(crate) fn mock_instantiation(
    deps: DepsMut,
    genesis: Option<GenesisState>,
) -> Result<Response, ContractError> {
    let msg = InstantiateMsg {
        authority: AUTHORITY.to_string(),
        genesis,
    };

    instantiate(deps, mock_env(), mock_info("creator", &[]), msg)
}
