mod contract;

pub use contract::ContractCommands;
