use cosmwasm_std::Empty;
use cw_multi_test::{App, Contract, ContractWrapper};

pub fn global_fee_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        global_fee::contract::execute,
        global_fee::contract::instantiate,
        global_fee::contract::query,
    )
    .with_migrate(global_fee::contract::migrate);

    Box::new(contract)
}

/// Stores the global fee contract to the app
pub fn store_global_fee_code(app: &mut App) -> u64 {
    app.store_code(global_fee_contract())
}
