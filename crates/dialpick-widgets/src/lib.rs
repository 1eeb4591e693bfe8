//! Widgets for **dialpick**, a terminal country dial-code picker.
//!
//! The centerpiece is [`selector::CountrySelector`], a
//! [`dialpick_core::Component`] that embeds in any [`dialpick_core::Model`]
//! and composes freely within [`ratatui`] layouts. The remaining modules are
//! its collaborators: [`country`] holds the static directory of names, ISO
//! codes, and dial codes; [`editor`] the single-line query buffer; [`chrome`]
//! and [`unicode`] small rendering helpers.

pub mod chrome;
pub mod country;
pub mod editor;
pub mod selector;
pub mod unicode;
