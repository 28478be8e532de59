mod commands;
pub mod contract;
mod error;
pub mod genesis;
pub mod keeper;
mod queries;
pub mod state;


pub use crate::error::ContractError;
pub use crate::keeper::Keeper;
