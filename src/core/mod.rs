pub mod error;
pub mod processor;
pub mod ram;
pub mod random;
pub mod rom;
