//! Farm carbon-footprint scoring for Swasth Khet.
//!
//! The [`footprint`] engine is pure: it maps a [`record::UsageRecord`] and an
//! immutable [`footprint::FootprintConfig`] to a [`footprint::ScoreResult`].
//! The other modules load configuration, validate input, keep a local history
//! of results and render them for the terminal.

pub mod config;
pub mod footprint;
pub mod history;
pub mod logging;
pub mod output;
pub mod record;
