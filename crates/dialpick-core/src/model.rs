use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The application root: state plus the [Elm Architecture] cycle that drives
/// it.
///
/// The runtime repeats the same loop for the whole program lifetime:
/// [`init`](Model::init) builds the starting state, [`view`](Model::view)
/// draws it, events declared via [`subscriptions`](Model::subscriptions)
/// arrive as messages, and [`update`](Model::update) folds each message into
/// the state, optionally requesting side effects through a [`Command`].
/// Messages are applied strictly one at a time, which is why no field of a
/// model ever needs a lock.
///
/// ```rust,ignore
/// use dialpick_core::{Model, Command};
/// use ratatui::Frame;
/// use ratatui::widgets::Paragraph;
///
/// struct StatusLine {
///     dial_code: Option<String>,
/// }
///
/// #[derive(Debug)]
/// enum Msg {
///     Picked(String),
///     Cleared,
/// }
///
/// impl Model for StatusLine {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_flags: ()) -> (Self, Command<Msg>) {
///         (StatusLine { dial_code: None }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Picked(code) => self.dial_code = Some(code),
///             Msg::Cleared => self.dial_code = None,
///         }
///         Command::none()
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         let text = self.dial_code.as_deref().unwrap_or("none");
///         frame.render_widget(Paragraph::new(format!("Dial: {text}")), frame.area());
///     }
/// }
/// ```
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// Everything that can happen to this application, as one enum.
    ///
    /// Subscriptions, [`Command::message`], and completed
    /// [`Command::perform`] futures all deliver values of this type.
    type Message: Send + 'static;

    /// Startup data handed to [`init`](Model::init); use `()` when there is
    /// none.
    type Flags: Send + 'static;

    /// Build the initial state, optionally with a command to start work
    /// right away.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Fold one message into the state and say what should happen next.
    ///
    /// The runtime redraws and re-reads
    /// [`subscriptions`](Model::subscriptions) after every call.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Draw the current state. Reads `&self` and should change nothing.
    fn view(&self, frame: &mut Frame);

    /// The event sources this state wants to hear from.
    ///
    /// Re-read after every update and diffed against the running set, so
    /// returning a different list starts and stops sources. Defaults to no
    /// sources.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
