pub mod gas_price;
pub mod global_fee;
pub mod migrate_guards;
pub mod params;
