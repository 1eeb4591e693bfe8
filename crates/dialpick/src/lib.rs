//! **dialpick**: a searchable country dial-code picker for the terminal.
//!
//! Depending on this one crate brings in the whole stack: the runtime
//! ([`Model`], [`Component`], [`Command`], [`Subscription`], [`Program`],
//! [`run`], [`run_with`]) at the crate root, every widget under
//! [`widgets`], and the [`ratatui`]/[`crossterm`]/[`tokio`] crates
//! themselves, so an application needs no direct dependency on any of them.
//!
//! A minimal picker looks like this:
//!
//! ```ignore
//! use dialpick::widgets::selector::{self, CountrySelector};
//! use dialpick::{Command, Component, Model};
//! use ratatui::Frame;
//!
//! struct Picker {
//!     selector: CountrySelector,
//! }
//!
//! enum Msg {
//!     Selector(selector::Message),
//! }
//!
//! impl Model for Picker {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         (Picker { selector: CountrySelector::new() }, Command::none())
//!     }
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Selector(m) => self.selector.update(m).map(Msg::Selector),
//!         }
//!     }
//!     fn view(&self, frame: &mut Frame) {
//!         self.selector.view(frame, frame.area());
//!     }
//! }
//! ```
//!
//! `demos/country_picker.rs` is the full runnable version, with mouse
//! support and a status line.

pub use dialpick_core::*;

/// The widget crate, re-exported wholesale.
pub mod widgets {
    pub use dialpick_widgets::*;
}

// The underlying stack, for demos and downstream crates.
pub use crossterm;
pub use ratatui;
pub use tokio;
