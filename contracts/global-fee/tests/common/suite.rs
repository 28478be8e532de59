use std::str::FromStr;

use cosmwasm_std::{Addr, SignedDecimal256, StdResult};
use cw_multi_test::{App, AppResponse, Executor};

use global_fee_std::gas_price::{GasPrice, MinimumGasPrices};
use global_fee_std::global_fee::{
    AuthorityResponse, ExecuteMsg, GenesisState, InstantiateMsg, MigrateMsg,
    MinimumGasPricesResponse, QueryMsg, RequiredFeesResponse,
};
use global_fee_std::params::Params;
use global_fee_testing::integration::contracts::store_global_fee_code;

pub fn gas_price(denom: &str, amount: &str) -> GasPrice {
    GasPrice::new(denom, SignedDecimal256::from_str(amount).unwrap())
}

pub fn params(gas_prices: Vec<GasPrice>) -> Params {
    Params::new(MinimumGasPrices::new(gas_prices))
}

pub struct TestingSuite {
    app: App,
    pub creator: Addr,
    pub authority: Addr,
    pub intruder: Addr,
    code_id: u64,
    global_fee_addr: Addr,
}

/// instantiate / execute messages
impl TestingSuite {
    pub(crate) fn default() -> Self {
        Self {
            app: App::default(),
            creator: Addr::unchecked("creator"),
            authority: Addr::unchecked("authority"),
            intruder: Addr::unchecked("intruder"),
            code_id: 0,
            global_fee_addr: Addr::unchecked(""),
        }
    }

    pub(crate) fn instantiate_default(&mut self) -> &mut Self {
        self.instantiate(None)
    }

    pub(crate) fn instantiate(&mut self, genesis: Option<GenesisState>) -> &mut Self {
        self.global_fee_addr = self.instantiate_contract(genesis).unwrap();

        self
    }

    pub(crate) fn instantiate_err(
        &mut self,
        genesis: Option<GenesisState>,
        error: impl Fn(anyhow::Error),
    ) -> &mut Self {
        error(self.instantiate_contract(genesis).unwrap_err());

        self
    }

    fn instantiate_contract(&mut self, genesis: Option<GenesisState>) -> anyhow::Result<Addr> {
        if self.code_id == 0 {
            self.code_id = store_global_fee_code(&mut self.app);
        }

        let msg = InstantiateMsg {
            authority: self.authority.to_string(),
            genesis,
        };

        self.app.instantiate_contract(
            self.code_id,
            self.creator.clone(),
            &msg,
            &[],
            "Global Fee".to_string(),
            Some(self.creator.to_string()),
        )
    }

    pub(crate) fn update_params(
        &mut self,
        sender: Addr,
        params: Params,
        response: impl Fn(Result<AppResponse, anyhow::Error>),
    ) -> &mut Self {
        let msg = ExecuteMsg::UpdateParams { params };

        response(
            self.app
                .execute_contract(sender, self.global_fee_addr.clone(), &msg, &[]),
        );

        self
    }

    pub(crate) fn migrate(
        &mut self,
        response: impl Fn(Result<AppResponse, anyhow::Error>),
    ) -> &mut Self {
        response(self.app.migrate_contract(
            self.creator.clone(),
            self.global_fee_addr.clone(),
            &MigrateMsg {},
            self.code_id,
        ));

        self
    }
}

/// queries
impl TestingSuite {
    pub(crate) fn query_params(&mut self, response: impl Fn(StdResult<Params>)) -> &mut Self {
        response(
            self.app
                .wrap()
                .query_wasm_smart(&self.global_fee_addr, &QueryMsg::Params {}),
        );

        self
    }

    pub(crate) fn query_minimum_gas_prices(
        &mut self,
        response: impl Fn(StdResult<MinimumGasPricesResponse>),
    ) -> &mut Self {
        response(
            self.app
                .wrap()
                .query_wasm_smart(&self.global_fee_addr, &QueryMsg::MinimumGasPrices {}),
        );

        self
    }

    pub(crate) fn query_required_fees(
        &mut self,
        gas_limit: u64,
        response: impl Fn(StdResult<RequiredFeesResponse>),
    ) -> &mut Self {
        response(self.app.wrap().query_wasm_smart(
            &self.global_fee_addr,
            &QueryMsg::RequiredFees { gas_limit },
        ));

        self
    }

    pub(crate) fn query_authority(
        &mut self,
        response: impl Fn(StdResult<AuthorityResponse>),
    ) -> &mut Self {
        response(
            self.app
                .wrap()
                .query_wasm_smart(&self.global_fee_addr, &QueryMsg::Authority {}),
        );

        self
    }

    /// Exports the genesis of the current contract and hands it over to `response`, together
    /// with the suite so the exported state can be fed into a new instantiation.
    pub(crate) fn export_genesis(&mut self, response: impl Fn(&mut Self, GenesisState)) -> &mut Self {
        let genesis: GenesisState = self
            .app
            .wrap()
            .query_wasm_smart(&self.global_fee_addr, &QueryMsg::ExportGenesis {})
            .unwrap();

        response(self, genesis);

        self
    }
}
