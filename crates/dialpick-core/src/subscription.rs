use futures::stream::BoxStream;
use futures::StreamExt;
use std::any::TypeId;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

type SourceFn<Msg> = Box<dyn FnOnce() -> BoxStream<'static, Msg> + Send>;

/// A long-lived event source with scoped start/stop.
///
/// A model declares the sources it wants to hear from by returning
/// subscriptions from [`Model::subscriptions`](crate::Model::subscriptions).
/// After every update the runtime diffs that list against what is running:
/// newly declared sources are started, sources no longer declared are
/// aborted, and on shutdown everything is aborted. Registration is thereby
/// tied to model state the whole time the program runs, and release is
/// guaranteed on teardown.
///
/// The stream itself is built lazily, on the task that will drain it, the
/// first time the subscription actually starts.
pub struct Subscription<Msg: Send + 'static> {
    pub(crate) id: SubscriptionId,
    pub(crate) source: SourceFn<Msg>,
}

/// Identity used to diff subscriptions between update cycles.
///
/// Two subscriptions with equal ids are considered the same source, so an
/// already-running one is left untouched when it reappears in the next
/// declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    owner: TypeId,
    tag: u64,
}

impl SubscriptionId {
    /// Identity for a singleton source: the type alone.
    pub fn of<T: 'static>() -> Self {
        Self::tagged::<T>(0)
    }

    /// Identity for one of several instances of the same source type.
    pub fn tagged<T: 'static>(tag: u64) -> Self {
        Self {
            owner: TypeId::of::<T>(),
            tag,
        }
    }
}

/// A type that can open a stream of values for subscription.
///
/// [`stream`](SubscriptionSource::stream) is called once, when the runtime
/// first starts the subscription; dropping the stream stops it.
pub trait SubscriptionSource: Send + 'static {
    /// The values this source emits.
    type Output: Send + 'static;

    /// Identity for diffing.
    fn id(&self) -> SubscriptionId;

    /// Open the stream.
    fn stream(self) -> BoxStream<'static, Self::Output>;
}

/// Wrap a [`SubscriptionSource`] as a [`Subscription`].
pub fn subscribe<S: SubscriptionSource>(source: S) -> Subscription<S::Output> {
    Subscription {
        id: source.id(),
        source: Box::new(move || source.stream()),
    }
}

impl<Msg: Send + 'static> Subscription<Msg> {
    /// Build a subscription from an already-opened stream.
    pub fn from_stream(id: SubscriptionId, stream: BoxStream<'static, Msg>) -> Self {
        Subscription {
            id,
            source: Box::new(move || stream),
        }
    }

    /// Rewrap the message type, keeping the identity.
    ///
    /// Identity is preserved on purpose: a child widget's subscription mapped
    /// into the parent's message type still diffs as the same source.
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Subscription<NewMsg> {
        let open = self.source;
        Subscription {
            id: self.id,
            source: Box::new(move || open().map(f).boxed()),
        }
    }
}

/// The set of running subscription tasks, diffed against each declaration.
pub(crate) struct SubscriptionSet<Msg: Send + 'static> {
    running: HashMap<SubscriptionId, AbortHandle>,
    tx: mpsc::UnboundedSender<Msg>,
}

impl<Msg: Send + 'static> SubscriptionSet<Msg> {
    pub fn new(tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            running: HashMap::new(),
            tx,
        }
    }

    /// Bring the running set in line with `declared`: start sources that are
    /// new, abort sources that disappeared, leave the rest running.
    pub fn reconcile(&mut self, declared: Vec<Subscription<Msg>>) {
        let mut declared: HashMap<_, _> = declared
            .into_iter()
            .map(|sub| (sub.id, sub.source))
            .collect();

        self.running.retain(|id, handle| {
            let keep = declared.contains_key(id);
            if !keep {
                handle.abort();
            }
            keep
        });

        declared.retain(|id, _| !self.running.contains_key(id));
        for (id, open) in declared {
            let tx = self.tx.clone();
            let task = tokio::spawn(async move {
                let mut stream = open();
                while let Some(msg) = stream.next().await {
                    if tx.send(msg).is_err() {
                        break;
                    }
                }
            });
            self.running.insert(id, task.abort_handle());
        }
    }

    /// Abort every running subscription.
    pub fn shutdown(&mut self) {
        for (_, handle) in self.running.drain() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn running_count(&self) -> usize {
        self.running.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    struct KeySource;
    struct TickSource;

    fn idle<Msg: Send + 'static>(id: SubscriptionId) -> Subscription<Msg> {
        Subscription::from_stream(id, Box::pin(stream::pending()))
    }

    #[test]
    fn same_type_yields_same_id() {
        assert_eq!(SubscriptionId::of::<KeySource>(), SubscriptionId::of::<KeySource>());
    }

    #[test]
    fn different_types_yield_different_ids() {
        assert_ne!(SubscriptionId::of::<KeySource>(), SubscriptionId::of::<TickSource>());
    }

    #[test]
    fn tag_distinguishes_instances() {
        assert_ne!(
            SubscriptionId::tagged::<KeySource>(1),
            SubscriptionId::tagged::<KeySource>(2)
        );
        assert_eq!(SubscriptionId::tagged::<KeySource>(0), SubscriptionId::of::<KeySource>());
    }

    #[test]
    fn map_keeps_identity() {
        let sub: Subscription<u16> = idle(SubscriptionId::of::<KeySource>());
        let mapped: Subscription<String> = sub.map(|n| n.to_string());
        assert_eq!(mapped.id, SubscriptionId::of::<KeySource>());
    }

    #[tokio::test]
    async fn reconcile_starts_declared_sources() {
        let (tx, _rx) = mpsc::unbounded_channel::<u16>();
        let mut set = SubscriptionSet::new(tx);

        set.reconcile(vec![idle(SubscriptionId::of::<KeySource>())]);
        assert_eq!(set.running_count(), 1);
    }

    #[tokio::test]
    async fn reconcile_aborts_undeclared_sources() {
        let (tx, _rx) = mpsc::unbounded_channel::<u16>();
        let mut set = SubscriptionSet::new(tx);

        set.reconcile(vec![idle(SubscriptionId::of::<KeySource>())]);
        set.reconcile(vec![]);
        assert_eq!(set.running_count(), 0);
    }

    #[tokio::test]
    async fn reconcile_leaves_redeclared_sources_running() {
        let (tx, _rx) = mpsc::unbounded_channel::<u16>();
        let mut set = SubscriptionSet::new(tx);

        set.reconcile(vec![idle(SubscriptionId::of::<KeySource>())]);
        set.reconcile(vec![idle(SubscriptionId::of::<KeySource>())]);
        assert_eq!(set.running_count(), 1);
    }

    #[tokio::test]
    async fn reconcile_handles_mixed_changes() {
        let (tx, _rx) = mpsc::unbounded_channel::<u16>();
        let mut set = SubscriptionSet::new(tx);

        set.reconcile(vec![
            idle(SubscriptionId::of::<KeySource>()),
            idle(SubscriptionId::of::<TickSource>()),
        ]);
        assert_eq!(set.running_count(), 2);

        set.reconcile(vec![
            idle(SubscriptionId::of::<TickSource>()),
            idle(SubscriptionId::tagged::<TickSource>(7)),
        ]);
        assert_eq!(set.running_count(), 2);
    }

    #[tokio::test]
    async fn shutdown_aborts_everything() {
        let (tx, _rx) = mpsc::unbounded_channel::<u16>();
        let mut set = SubscriptionSet::new(tx);

        set.reconcile(vec![
            idle(SubscriptionId::tagged::<KeySource>(1)),
            idle(SubscriptionId::tagged::<KeySource>(2)),
        ]);
        set.shutdown();
        assert_eq!(set.running_count(), 0);
    }

    #[tokio::test]
    async fn started_sources_forward_into_the_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let mut set = SubscriptionSet::new(tx);

        let counts = Subscription::from_stream(
            SubscriptionId::of::<TickSource>(),
            Box::pin(stream::iter([1u16, 2, 3])),
        );
        set.reconcile(vec![counts.map(|n| format!("tick {n}"))]);

        assert_eq!(rx.recv().await.as_deref(), Some("tick 1"));
        assert_eq!(rx.recv().await.as_deref(), Some("tick 2"));
        assert_eq!(rx.recv().await.as_deref(), Some("tick 3"));
    }
}
