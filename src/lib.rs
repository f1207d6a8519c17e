//! Common functionality for agroplan.
#![warn(missing_docs)]
pub mod climate;
pub mod commands;
pub mod crop;
pub mod demand;
pub mod farm;
pub mod id;
pub mod input;
pub mod log;
pub mod month;
pub mod output;
pub mod recommendation;
pub mod settings;
pub mod units;

#[cfg(test)]
mod fixture;
