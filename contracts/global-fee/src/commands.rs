use cosmwasm_std::{DepsMut, MessageInfo, Response};
use global_fee_std::params::Params;

use crate::keeper::Keeper;
use crate::ContractError;

/// Replaces the params of the contract. Only the authority can do this.
pub(crate) fn update_params(
    deps: DepsMut,
    info: MessageInfo,
    params: Params,
) -> Result<Response, ContractError> {
    cw_utils::nonpayable(&info)?;

    let keeper = Keeper::load(deps.storage)?;
    keeper.set_params(deps.storage, &info.sender, &params)?;

    Ok(Response::default().add_attributes(vec![
        ("action", "update_params".to_string()),
        ("authority", keeper.authority().to_string()),
        (
            "minimum_gas_prices",
            params.minimum_gas_prices.to_string(),
        ),
    ]))
}
