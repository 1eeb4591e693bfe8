use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// An embeddable widget: like [`Model`](crate::Model), but drawn into an
/// area a parent chooses.
///
/// The only difference from the application trait is the `area: Rect`
/// parameter on [`view`](Component::view); everything else composes by
/// wrapping. The parent holds the component as a field, routes the
/// component's messages through a variant of its own message type, and lifts
/// returned commands with [`Command::map`]:
///
/// ```rust,ignore
/// use dialpick_core::{Model, Component, Command};
/// use ratatui::layout::{Constraint, Layout};
/// use ratatui::Frame;
///
/// struct App { selector: CountrySelector }
///
/// #[derive(Debug)]
/// enum AppMsg { Selector(selector::Message) }
///
/// impl Model for App {
///     type Message = AppMsg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<AppMsg>) {
///         (App { selector: CountrySelector::new() }, Command::none())
///     }
///
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Selector(m) => self.selector.update(m).map(AppMsg::Selector),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         let [selector_area, _rest] =
///             Layout::vertical([Constraint::Length(10), Constraint::Fill(1)])
///                 .areas(frame.area());
///         self.selector.view(frame, selector_area);
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The messages this component understands.
    ///
    /// A parent usually carries them inside one of its own message variants
    /// so events reach the right child.
    type Message: Send + 'static;

    /// Fold one message into the component's state.
    ///
    /// The returned command speaks the component's own message type; the
    /// parent lifts it with [`.map()`](Command::map).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Draw into `area`, and nowhere outside it.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Event sources this component wants while in its current state.
    ///
    /// Parents fold these into their own
    /// [`Model::subscriptions`](crate::Model::subscriptions), mapping the
    /// message type. Defaults to no sources.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component should receive keyboard input right now.
    ///
    /// An input-routing hint for parents with several focusable children.
    /// Defaults to `false`.
    fn focused(&self) -> bool {
        false
    }
}
