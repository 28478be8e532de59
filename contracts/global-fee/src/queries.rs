use cosmwasm_std::{Deps, StdResult};
use global_fee_std::global_fee::{
    AuthorityResponse, GenesisState, MinimumGasPricesResponse, RequiredFeesResponse,
};
use global_fee_std::params::Params;

use crate::genesis::export_genesis_state;
use crate::keeper::Keeper;

/// Queries the params. Returns [Params].
pub(crate) fn query_params(deps: Deps) -> StdResult<Params> {
    Keeper::get_params(deps.storage)
}

/// Queries the minimum gas prices. Returns a [MinimumGasPricesResponse].
pub(crate) fn query_minimum_gas_prices(deps: Deps) -> StdResult<MinimumGasPricesResponse> {
    Ok(MinimumGasPricesResponse {
        minimum_gas_prices: Keeper::get_minimum_gas_prices(deps.storage)?,
    })
}

/// Queries the fees a transaction with the given gas limit has to pay at minimum, in any of the
/// denoms listed. Returns a [RequiredFeesResponse].
pub(crate) fn query_required_fees(deps: Deps, gas_limit: u64) -> StdResult<RequiredFeesResponse> {
    let fees = Keeper::get_minimum_gas_prices(deps.storage)?.required_fees(gas_limit)?;

    Ok(RequiredFeesResponse { gas_limit, fees })
}

/// Queries the authority allowed to update the params. Returns an [AuthorityResponse].
pub(crate) fn query_authority(deps: Deps) -> StdResult<AuthorityResponse> {
    Ok(AuthorityResponse {
        authority: Keeper::load(deps.storage)?.authority().clone(),
    })
}

/// Exports the state of the contract. Returns a [GenesisState].
pub(crate) fn query_export_genesis(deps: Deps) -> StdResult<GenesisState> {
    export_genesis_state(deps.storage)
}
