use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin};

use crate::gas_price::MinimumGasPrices;
use crate::params::{Params, ParamsError};

/// Snapshot of the global fee state, used to initialize the contract and exported from it.
#[cw_serde]
#[derive(Default)]
pub struct GenesisState {
    pub params: Params,
}

impl GenesisState {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        self.params.validate()
    }
}

/// The instantiation message
#[cw_serde]
pub struct InstantiateMsg {
    /// The only address allowed to update the params, usually the governance module account.
    /// Can't be changed after instantiation.
    pub authority: String,
    /// Initial state. Defaults to empty minimum gas prices if not provided.
    pub genesis: Option<GenesisState>,
}

/// The execution messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Replaces the params with the given ones. Only callable by the authority.
    UpdateParams { params: Params },
}

/// The migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// The query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Retrieves the current params.
    #[returns(Params)]
    Params {},
    /// Retrieves the minimum gas prices transactions have to pay.
    #[returns(MinimumGasPricesResponse)]
    MinimumGasPrices {},
    /// Retrieves the minimum fees, one coin per accepted denom, a transaction with the given gas
    /// limit has to pay.
    #[returns(RequiredFeesResponse)]
    RequiredFees { gas_limit: u64 },
    /// Retrieves the address allowed to update the params.
    #[returns(AuthorityResponse)]
    Authority {},
    /// Exports the current state as a [GenesisState].
    #[returns(GenesisState)]
    ExportGenesis {},
}

/// Response for the minimum gas prices query
#[cw_serde]
pub struct MinimumGasPricesResponse {
    pub minimum_gas_prices: MinimumGasPrices,
}

/// Response for the required fees query
#[cw_serde]
pub struct RequiredFeesResponse {
    pub gas_limit: u64,
    pub fees: Vec<Coin>,
}

/// Response for the authority query
#[cw_serde]
pub struct AuthorityResponse {
    pub authority: Addr,
}
