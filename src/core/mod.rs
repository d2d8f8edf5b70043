pub mod calculator;
pub mod checkin;
pub mod checkout;
pub mod clock;
pub mod config;
pub mod directory;
pub mod ledger;
pub mod log;
pub mod logic;
pub mod members;
