pub mod activities;
pub mod serve;
