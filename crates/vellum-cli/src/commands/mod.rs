pub mod analyze;
pub mod catalog;
pub mod contract;
pub mod dispatch;
pub mod init;
pub mod shared;
