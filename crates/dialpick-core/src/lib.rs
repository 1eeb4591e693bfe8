//! Runtime core for **dialpick**, a terminal country dial-code picker.
//!
//! The picker is built as an [Elm Architecture] program: one state value, a
//! pure init/update/view cycle, and side effects pushed to the edges as
//! [`Command`]s and [`Subscription`]s. The runtime applies messages one at a
//! time, so widget state is plain mutable data with no locking anywhere.
//!
//! What lives where:
//!
//! * [`Model`] is the application root; [`Component`] is the same shape for
//!   embeddable widgets that draw into a parent-chosen [`ratatui::layout::Rect`].
//! * [`Command`] describes a side effect for the runtime to carry out after
//!   an update; [`Subscription`] is a long-lived event source started and
//!   stopped by diffing.
//! * [`Program`] owns the real terminal and the event loop;
//!   [`TestProgram`](testing::TestProgram) runs the same cycle headless for
//!   tests.
//!
//! A program's life: [`Model::init`] produces the starting state,
//! [`Model::view`] draws each frame, input events flow in through
//! [`terminal_events`], and [`Model::update`] folds every message into the
//! state until something returns [`Command::quit()`].
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::{Command, TerminalCommand};
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{log_to_file, Program, ProgramError, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::terminal_events;

/// Set up a terminal with default options and run `M` until it quits.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Same as [`run`], with explicit [`ProgramOptions`].
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
