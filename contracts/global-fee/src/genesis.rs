use cosmwasm_std::{from_json, to_json_binary, Binary, StdResult, Storage};
use global_fee_std::global_fee::GenesisState;
use global_fee_std::params::Params;

use crate::keeper::{write_params, Keeper};
use crate::ContractError;

/// The genesis state of a chain that doesn't enforce any minimum gas price.
pub fn default_genesis() -> StdResult<Binary> {
    to_json_binary(&GenesisState::default())
}

/// Decodes and validates a genesis state.
pub fn validate_genesis(data: &[u8]) -> Result<GenesisState, ContractError> {
    let genesis: GenesisState =
        from_json(data).map_err(|err| ContractError::Decode(err.to_string()))?;
    genesis.validate()?;

    Ok(genesis)
}

/// Decodes the genesis state and writes its params. The authority check doesn't apply to
/// genesis, validation does.
pub fn init_genesis(storage: &mut dyn Storage, data: &[u8]) -> Result<Params, ContractError> {
    let genesis = validate_genesis(data)?;
    init_genesis_state(storage, genesis)
}

pub fn init_genesis_state(
    storage: &mut dyn Storage,
    genesis: GenesisState,
) -> Result<Params, ContractError> {
    write_params(storage, &genesis.params)?;
    Ok(genesis.params)
}

/// Exports the current params as a serialized [GenesisState].
pub fn export_genesis(storage: &dyn Storage) -> StdResult<Binary> {
    to_json_binary(&export_genesis_state(storage)?)
}

pub fn export_genesis_state(storage: &dyn Storage) -> StdResult<GenesisState> {
    Ok(GenesisState::new(Keeper::get_params(storage)?))
}
