use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use global_fee_std::params::Params;

pub const PARAMS: Item<Params> = Item::new("params");
/// Written once on instantiation.
pub const AUTHORITY: Item<Addr> = Item::new("authority");
