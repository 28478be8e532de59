use cosmwasm_std::{StdError, Storage};
use cw2::CONTRACT;

/// Makes sure the contract being migrated is the one stored under cw2, so a code id of a
/// different contract can't be migrated into this one by accident.
pub fn check_contract_name(store: &dyn Storage, new_name: &str) -> Result<(), StdError> {
    let stored_contract_name = CONTRACT.load(store)?.contract;
    if stored_contract_name != new_name {
        return Err(StdError::generic_err(format!(
            "Contract name mismatch: stored {stored_contract_name}, migrating to {new_name}"
        )));
    }
    Ok(())
}
