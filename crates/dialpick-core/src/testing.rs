use crate::command::{Command, Effect};
use crate::model::Model;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// Headless harness that drives a [`Model`] without a terminal.
///
/// `TestProgram` runs the init/update/view cycle inside a plain `#[test]`
/// function: no tokio runtime, no TTY. Immediate messages produced by
/// [`Command::message`] are queued and applied with
/// [`drain_messages`](TestProgram::drain_messages); async and terminal
/// commands have nowhere to go here and are dropped.
///
/// ```rust,ignore
/// use dialpick_core::testing::TestProgram;
///
/// let mut picker = TestProgram::<PickerApp>::new(());
/// picker.send(Msg::Key(key(KeyCode::Char('g'))));
/// assert_eq!(picker.model().query(), "g");
/// assert!(picker.render_string(40, 10).contains("Germany"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    queued: Vec<M::Message>,
}

impl<M: Model> TestProgram<M> {
    /// Initialize the model with `flags`, queueing any immediate messages the
    /// init command produced.
    pub fn new(flags: M::Flags) -> Self {
        let (model, boot) = M::init(flags);
        let mut harness = Self {
            model,
            queued: Vec::new(),
        };
        harness.stash(boot);
        harness
    }

    /// Apply one message through `update`, queueing any immediate follow-ups.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.stash(cmd);
    }

    /// Apply queued messages until none are left, including follow-ups that
    /// the applied messages themselves produce.
    pub fn drain_messages(&mut self) {
        while !self.queued.is_empty() {
            for msg in std::mem::take(&mut self.queued) {
                let cmd = self.model.update(msg);
                self.stash(cmd);
            }
        }
    }

    /// The model, for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the model, for arranging state directly instead of
    /// through messages.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the view into a [`Buffer`] of the given size, for cell-level
    /// inspection. See [`render_string`](TestProgram::render_string) for
    /// text assertions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
        terminal
            .draw(|frame| self.model.view(frame))
            .expect("draw to test backend");
        terminal.backend().buffer().clone()
    }

    /// Render the view and return its visible text, rows joined by newlines.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buffer = self.render(width, height);
        let rows: Vec<String> = (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect();
        rows.join("\n")
    }

    fn stash(&mut self, cmd: Command<M::Message>) {
        match cmd.0 {
            Effect::Emit(msg) => self.queued.push(msg),
            Effect::Many(cmds) => {
                for cmd in cmds {
                    self.stash(cmd);
                }
            }
            // Quit has no loop to stop; futures and terminal commands need a
            // runtime and a TTY.
            Effect::Nothing | Effect::Quit | Effect::Task(_) | Effect::Screen(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    // A minimal query-tracking model for exercising the harness.
    struct QueryLine {
        query: String,
    }

    #[derive(Debug)]
    enum QueryMsg {
        Typed(char),
        Erased,
        Cleared,
    }

    impl Model for QueryLine {
        type Message = QueryMsg;
        type Flags = &'static str;

        fn init(initial: &'static str) -> (Self, Command<QueryMsg>) {
            (
                QueryLine {
                    query: initial.to_string(),
                },
                Command::none(),
            )
        }

        fn update(&mut self, msg: QueryMsg) -> Command<QueryMsg> {
            match msg {
                QueryMsg::Typed(c) => self.query.push(c),
                QueryMsg::Erased => {
                    self.query.pop();
                }
                QueryMsg::Cleared => self.query.clear(),
            }
            Command::none()
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let text = format!("Search: {}", self.query);
            frame.render_widget(Paragraph::new(text), frame.area());
        }
    }

    #[test]
    fn init_with_flags() {
        let harness = TestProgram::<QueryLine>::new("gr");
        assert_eq!(harness.model().query, "gr");
    }

    #[test]
    fn send_updates_state() {
        let mut harness = TestProgram::<QueryLine>::new("");
        harness.send(QueryMsg::Typed('g'));
        harness.send(QueryMsg::Typed('r'));
        assert_eq!(harness.model().query, "gr");
    }

    #[test]
    fn send_multiple_mixed() {
        let mut harness = TestProgram::<QueryLine>::new("");
        harness.send(QueryMsg::Typed('f'));
        harness.send(QueryMsg::Typed('r'));
        harness.send(QueryMsg::Erased);
        assert_eq!(harness.model().query, "f");

        harness.send(QueryMsg::Cleared);
        assert_eq!(harness.model().query, "");
    }

    #[test]
    fn render_shows_state() {
        let mut harness = TestProgram::<QueryLine>::new("");
        harness.send(QueryMsg::Typed('d'));
        harness.send(QueryMsg::Typed('e'));
        assert!(harness.render_string(40, 1).contains("Search: de"));
    }

    // A model that chains a follow-up message, to exercise drain_messages.
    struct ChainModel {
        steps: Vec<String>,
    }

    #[derive(Debug)]
    enum ChainMsg {
        Start,
        Step(String),
    }

    impl Model for ChainModel {
        type Message = ChainMsg;
        type Flags = ();

        fn init(_: ()) -> (Self, Command<ChainMsg>) {
            (ChainModel { steps: vec![] }, Command::none())
        }

        fn update(&mut self, msg: ChainMsg) -> Command<ChainMsg> {
            match msg {
                ChainMsg::Start => {
                    self.steps.push("started".into());
                    Command::message(ChainMsg::Step("auto".into()))
                }
                ChainMsg::Step(s) => {
                    self.steps.push(s);
                    Command::none()
                }
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let text = self.steps.join(", ");
            frame.render_widget(Paragraph::new(text), frame.area());
        }
    }

    #[test]
    fn command_message_chaining() {
        let mut harness = TestProgram::<ChainModel>::new(());
        harness.send(ChainMsg::Start);
        harness.drain_messages();
        assert_eq!(harness.model().steps, vec!["started", "auto"]);
    }
}
