use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId, SubscriptionSource};
use crossterm::event::EventStream;
use futures::stream::BoxStream;
use futures::StreamExt;

/// Subscription source for terminal input: keyboard, mouse, resize, focus,
/// and paste events.
///
/// # Input TTY behavior
///
/// crossterm's `EventStream::new()` calls `tty_fd()` internally, which falls
/// back to `/dev/tty` when stdin is not a TTY. Keyboard and mouse input keep
/// arriving even with stdin redirected.
pub struct TerminalEvents;

impl SubscriptionSource for TerminalEvents {
    type Output = TerminalEvent;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::of::<Self>()
    }

    fn stream(self) -> BoxStream<'static, TerminalEvent> {
        EventStream::new()
            .filter_map(|polled| {
                let event = polled.ok().map(TerminalEvent::from);
                async move { event }
            })
            .boxed()
    }
}

/// Terminal events, filtered and mapped into the application's message type.
///
/// The `map` closure sees every [`TerminalEvent`]; return `Some(msg)` to
/// deliver it or `None` to drop it.
///
/// # Example
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Key(key) => Some(Msg::Key(key)),
///         TerminalEvent::Mouse(mouse) => Some(Msg::Mouse(mouse)),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    Subscription {
        id: SubscriptionId::of::<TerminalEvents>(),
        // The EventStream is constructed inside the source closure, which
        // only runs on the subscription task. Constructing one eagerly per
        // subscriptions() call would contend on crossterm's global event
        // reader every update cycle.
        source: Box::new(move || {
            EventStream::new()
                .filter_map(move |polled| {
                    let msg = polled.ok().and_then(|ev| map(TerminalEvent::from(ev)));
                    async move { msg }
                })
                .boxed()
        }),
    }
}
