use cosmwasm_std::{entry_point, to_json_binary};
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use global_fee_std::global_fee::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use global_fee_std::migrate_guards::check_contract_name;

use crate::error::ContractError;
use crate::genesis::init_genesis_state;
use crate::keeper::Keeper;
use crate::{commands, queries};

// version info for migration info
const CONTRACT_NAME: &str = "global-fee";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let keeper = Keeper::new(deps.api.addr_validate(&msg.authority)?);
    keeper.save(deps.storage)?;

    let params = init_genesis_state(deps.storage, msg.genesis.unwrap_or_default())?;

    Ok(Response::default().add_attributes(vec![
        ("action", "instantiate".to_string()),
        ("authority", keeper.authority().to_string()),
        (
            "minimum_gas_prices",
            params.minimum_gas_prices.to_string(),
        ),
    ]))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateParams { params } => commands::update_params(deps, info, params),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Params {} => to_json_binary(&queries::query_params(deps)?),
        QueryMsg::MinimumGasPrices {} => to_json_binary(&queries::query_minimum_gas_prices(deps)?),
        QueryMsg::RequiredFees { gas_limit } => {
            to_json_binary(&queries::query_required_fees(deps, gas_limit)?)
        }
        QueryMsg::Authority {} => to_json_binary(&queries::query_authority(deps)?),
        QueryMsg::ExportGenesis {} => to_json_binary(&queries::query_export_genesis(deps)?),
    }
}

#[cfg(not(tarpaulin_include))]
#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    check_contract_name(deps.storage, CONTRACT_NAME)?;

    let version: Version = CONTRACT_VERSION.parse()?;
    let storage_version: Version = get_contract_version(deps.storage)?.version.parse()?;

    if storage_version >= version {
        return Err(ContractError::MigrateInvalidVersion {
            current_version: storage_version,
            new_version: version,
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::default())
}
