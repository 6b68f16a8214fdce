//! Bot application core modules.
//!
//! This module contains everything the bot needs between the Discord gateway and EVE Online's
//! ESI: configuration loading, the ESI client and its optional read-through cache, the incursion
//! and distance services, command dispatch, and formatting of replies into Discord embeds.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod discord;
pub mod error;
pub mod esi;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
pub mod view;
