use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

/// A side effect requested by [`Model::update`](crate::Model::update) or
/// [`Model::init`](crate::Model::init).
///
/// Updates are pure state mutations. Anything that reaches past the model,
/// such as notifying a parent, running async work, poking the terminal, or
/// quitting, is described as a `Command` and carried out by the runtime once
/// the update returns.
///
/// ```rust,ignore
/// // nothing to do
/// Command::none()
///
/// // tell the parent which country was picked
/// Command::message(Msg::Picked(country))
///
/// // leave the program
/// Command::quit()
/// ```
pub struct Command<Msg: Send + 'static>(pub(crate) Effect<Msg>);

/// What a [`Command`] asks the runtime to do.
pub(crate) enum Effect<Msg: Send + 'static> {
    /// Nothing.
    Nothing,
    /// Feed a message straight back into the update loop.
    Emit(Msg),
    /// Stop the event loop.
    Quit,
    /// Await a future on the runtime, then emit its output.
    Task(BoxFuture<'static, Msg>),
    /// Several commands, executed in order of appearance.
    Many(Vec<Command<Msg>>),
    /// Change terminal state (screen buffer, mouse capture, cursor, title).
    Screen(TerminalCommand),
}

/// Terminal state changes executed by the runtime.
///
/// Built via [`Command::terminal`] or one of the shorthand constructors like
/// [`Command::enable_mouse_capture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Switch to the alternate screen buffer.
    EnterAltScreen,
    /// Return to the primary screen buffer.
    ExitAltScreen,
    /// Report mouse events, including motion. Hover needs this.
    EnableMouseCapture,
    /// Stop reporting mouse events.
    DisableMouseCapture,
    /// Show the terminal cursor.
    ShowCursor,
    /// Hide the terminal cursor.
    HideCursor,
    /// Set the terminal window title.
    SetTitle(String),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// The do-nothing command.
    pub fn none() -> Self {
        Command(Effect::Nothing)
    }

    /// Emit `msg` on the next turn of the update loop.
    pub fn message(msg: Msg) -> Self {
        Command(Effect::Emit(msg))
    }

    /// End the program after this update.
    pub fn quit() -> Self {
        Command(Effect::Quit)
    }

    /// Run `future` to completion and emit `map(output)`.
    pub fn perform<F, T>(future: F, map: impl FnOnce(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Command(Effect::Task(Box::pin(async move { map(future.await) })))
    }

    /// Bundle several commands into one.
    ///
    /// An empty bundle collapses to [`Command::none`] and a single-element
    /// bundle to that element.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.remove(0),
            _ => Command(Effect::Many(cmds)),
        }
    }

    /// Request a terminal state change.
    pub fn terminal(cmd: TerminalCommand) -> Self {
        Command(Effect::Screen(cmd))
    }

    /// Rewrap the message type, so a child widget's commands can travel
    /// through a parent's update.
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        rewrap(self, Arc::new(f))
    }

    // Shorthand constructors for TerminalCommand.

    /// Switch to the alternate screen buffer.
    pub fn enter_alt_screen() -> Self {
        Command::terminal(TerminalCommand::EnterAltScreen)
    }

    /// Return to the primary screen buffer.
    pub fn exit_alt_screen() -> Self {
        Command::terminal(TerminalCommand::ExitAltScreen)
    }

    /// Report mouse events, including motion.
    pub fn enable_mouse_capture() -> Self {
        Command::terminal(TerminalCommand::EnableMouseCapture)
    }

    /// Stop reporting mouse events.
    pub fn disable_mouse_capture() -> Self {
        Command::terminal(TerminalCommand::DisableMouseCapture)
    }

    /// Show the terminal cursor.
    pub fn show_cursor() -> Self {
        Command::terminal(TerminalCommand::ShowCursor)
    }

    /// Hide the terminal cursor.
    pub fn hide_cursor() -> Self {
        Command::terminal(TerminalCommand::HideCursor)
    }

    /// Set the terminal window title.
    pub fn set_title(title: impl Into<String>) -> Self {
        Command::terminal(TerminalCommand::SetTitle(title.into()))
    }

    // Inspection helpers, mostly for tests.

    /// Whether this is the do-nothing command.
    pub fn is_none(&self) -> bool {
        matches!(self.0, Effect::Nothing)
    }

    /// The message this command would emit, if it is an immediate emit.
    pub fn into_message(self) -> Option<Msg> {
        match self.0 {
            Effect::Emit(msg) => Some(msg),
            _ => None,
        }
    }

    /// The bundled commands, if this is a batch.
    pub fn into_batch(self) -> Option<Vec<Command<Msg>>> {
        match self.0 {
            Effect::Many(cmds) => Some(cmds),
            _ => None,
        }
    }
}

fn rewrap<Msg: Send + 'static, NewMsg: Send + 'static>(
    cmd: Command<Msg>,
    f: Arc<dyn Fn(Msg) -> NewMsg + Send + Sync>,
) -> Command<NewMsg> {
    Command(match cmd.0 {
        Effect::Nothing => Effect::Nothing,
        Effect::Emit(msg) => Effect::Emit(f(msg)),
        Effect::Quit => Effect::Quit,
        Effect::Task(fut) => Effect::Task(Box::pin(async move { f(fut.await) })),
        Effect::Many(cmds) => Effect::Many(
            cmds.into_iter()
                .map(|inner| rewrap(inner, f.clone()))
                .collect(),
        ),
        Effect::Screen(tcmd) => Effect::Screen(tcmd),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum PickMsg {
        Chosen(&'static str),
        Dismissed,
    }

    #[test]
    fn none_is_inert() {
        assert!(Command::<PickMsg>::none().is_none());
        assert!(Command::<PickMsg>::none().into_message().is_none());
    }

    #[test]
    fn message_surfaces_via_into_message() {
        let cmd = Command::message(PickMsg::Chosen("GR"));
        assert_eq!(cmd.into_message(), Some(PickMsg::Chosen("GR")));
    }

    #[test]
    fn quit_is_not_a_message() {
        let cmd = Command::<PickMsg>::quit();
        assert!(matches!(cmd.0, Effect::Quit));
        assert!(Command::<PickMsg>::quit().into_message().is_none());
    }

    #[test]
    fn empty_batch_collapses_to_none() {
        assert!(Command::<PickMsg>::batch(vec![]).is_none());
    }

    #[test]
    fn batch_of_one_unwraps_to_the_element() {
        let cmd = Command::batch(vec![Command::message(PickMsg::Dismissed)]);
        assert_eq!(cmd.into_message(), Some(PickMsg::Dismissed));
    }

    #[test]
    fn batch_keeps_order() {
        let cmd = Command::batch(vec![
            Command::message(PickMsg::Chosen("FR")),
            Command::message(PickMsg::Dismissed),
        ]);
        let inner = cmd.into_batch().unwrap();
        let msgs: Vec<_> = inner
            .into_iter()
            .map(|c| c.into_message().unwrap())
            .collect();
        assert_eq!(msgs, vec![PickMsg::Chosen("FR"), PickMsg::Dismissed]);
    }

    #[test]
    fn map_rewraps_emitted_message() {
        let cmd = Command::message(PickMsg::Chosen("DE")).map(|m| format!("{m:?}"));
        assert_eq!(cmd.into_message().as_deref(), Some("Chosen(\"DE\")"));
    }

    #[test]
    fn map_leaves_none_and_quit_alone() {
        let none = Command::<PickMsg>::none().map(|m| format!("{m:?}"));
        assert!(none.is_none());

        let quit = Command::<PickMsg>::quit().map(|m| format!("{m:?}"));
        assert!(matches!(quit.0, Effect::Quit));
    }

    #[test]
    fn map_descends_into_batches() {
        let cmd = Command::batch(vec![
            Command::message(PickMsg::Dismissed),
            Command::quit(),
        ])
        .map(|m| format!("{m:?}"));
        let inner = cmd.into_batch().unwrap();
        assert_eq!(inner.len(), 2);
        assert_eq!(
            inner.into_iter().next().unwrap().into_message().as_deref(),
            Some("Dismissed")
        );
    }

    #[test]
    fn map_passes_terminal_commands_through() {
        let cmd = Command::<PickMsg>::set_title("picker").map(|m| format!("{m:?}"));
        match cmd.0 {
            Effect::Screen(TerminalCommand::SetTitle(title)) => assert_eq!(title, "picker"),
            _ => panic!("expected SetTitle to survive map"),
        }
    }

    #[test]
    fn terminal_shorthands_build_the_matching_variant() {
        let cases: Vec<(Command<PickMsg>, TerminalCommand)> = vec![
            (Command::enter_alt_screen(), TerminalCommand::EnterAltScreen),
            (
                Command::enable_mouse_capture(),
                TerminalCommand::EnableMouseCapture,
            ),
            (Command::hide_cursor(), TerminalCommand::HideCursor),
        ];
        for (cmd, expected) in cases {
            match cmd.0 {
                Effect::Screen(actual) => assert_eq!(actual, expected),
                _ => panic!("expected a terminal command"),
            }
        }
    }
}
