use crate::command::{Command, Effect, TerminalCommand};
use crate::model::Model;
use crate::subscription::SubscriptionSet;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Errors from terminal setup, rendering, or teardown.
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// The underlying I/O operation failed.
    #[error("terminal io: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for a [`Program`].
///
/// Every field has a default; override only what the application needs:
///
/// ```rust,ignore
/// use dialpick_core::ProgramOptions;
///
/// let options = ProgramOptions {
///     // hover and click-to-focus need motion events
///     mouse_capture: true,
///     title: Some("dialpick".into()),
///     ..ProgramOptions::default()
/// };
/// ```
pub struct ProgramOptions {
    /// Target frames per second (default 60, clamped to 1..=120).
    pub fps: u32,
    /// Render on the alternate screen buffer (default true).
    pub alt_screen: bool,
    /// Report mouse events, including motion (default false). Required for
    /// hover highlighting and click-derived focus.
    pub mouse_capture: bool,
    /// Terminal window title.
    pub title: Option<String>,
    /// Restore the terminal from a panic hook as well (default true), so a
    /// panicking update does not leave the shell in raw mode.
    pub restore_on_panic: bool,
    /// Quit on ctrl-c (default true).
    pub ctrl_c_quits: bool,
    /// Append diagnostics to this file. The UI owns stdout, so a file is the
    /// only place runtime logging can go.
    pub log_file: Option<std::path::PathBuf>,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            mouse_capture: false,
            title: None,
            restore_on_panic: true,
            ctrl_c_quits: true,
            log_file: None,
        }
    }
}

/// Ownership of the raw-mode terminal, released on drop.
///
/// Acquiring the guard enables raw mode and applies the screen options;
/// dropping it undoes all of that. Teardown therefore happens on every exit
/// path out of [`Program::run`], and (when `restore_on_panic` is set) on
/// panics too.
struct TerminalGuard {
    alt_screen: bool,
}

impl TerminalGuard {
    fn acquire(options: &ProgramOptions) -> Result<Self, ProgramError> {
        if options.restore_on_panic {
            install_panic_restore(options.alt_screen);
        }

        enable_raw_mode()?;
        let mut out = stdout();
        if options.alt_screen {
            execute!(out, EnterAlternateScreen)?;
        }
        if options.mouse_capture {
            execute!(out, EnableMouseCapture)?;
        }
        if let Some(ref title) = options.title {
            execute!(out, SetTitle(title))?;
        }
        execute!(out, cursor::Hide)?;

        Ok(Self {
            alt_screen: options.alt_screen,
        })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        release_terminal(self.alt_screen);
    }
}

/// Best-effort restore: every step runs even if an earlier one fails, so as
/// much terminal state as possible comes back.
fn release_terminal(alt_screen: bool) {
    let mut out = stdout();
    execute!(out, DisableMouseCapture).ok();
    execute!(out, cursor::Show).ok();
    if alt_screen {
        execute!(out, LeaveAlternateScreen).ok();
    }
    disable_raw_mode().ok();
}

/// Chain a terminal restore in front of the default panic hook, once per
/// process, so the panic message prints to a sane screen.
fn install_panic_restore(alt_screen: bool) {
    use std::sync::Once;
    static INSTALLED: Once = Once::new();
    INSTALLED.call_once(move || {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            release_terminal(alt_screen);
            previous(info);
        }));
    });
}

/// Wires a [`Model`] to a real terminal and drives its event loop.
///
/// Messages from subscriptions and commands all flow through one unbounded
/// channel and are applied one at a time, so updates are strictly serialized
/// and model state needs no locking. The loop runs until the model returns
/// [`Command::quit()`] or (by default) ctrl-c arrives.
///
/// ```rust,ignore
/// use dialpick_core::{Program, ProgramError};
///
/// #[tokio::main]
/// async fn main() -> Result<(), ProgramError> {
///     let final_state = Program::<PickerApp>::new(())?.run().await?;
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
    tx: mpsc::UnboundedSender<M::Message>,
    rx: mpsc::UnboundedReceiver<M::Message>,
    subscriptions: SubscriptionSet<M::Message>,
    options: ProgramOptions,
    dirty: bool,
    quitting: bool,
    log: Option<std::fs::File>,
}

impl<M: Model> Program<M> {
    /// Set up the terminal and initialize the model, with default options.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Set up the terminal and initialize the model.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let log = options
            .log_file
            .as_deref()
            .map(log_to_file)
            .transpose()?;

        let (tx, rx) = mpsc::unbounded_channel();
        let (model, boot) = M::init(flags);

        let guard = TerminalGuard::acquire(&options)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

        let mut program = Self {
            model,
            terminal,
            _guard: guard,
            subscriptions: SubscriptionSet::new(tx.clone()),
            tx,
            rx,
            options,
            dirty: true,
            quitting: false,
            log,
        };
        program.log_line("terminal acquired, model initialized");
        program.run_effect(boot);
        program.subscriptions.reconcile(program.model.subscriptions());
        Ok(program)
    }

    /// Drive the event loop to completion and hand back the final model.
    ///
    /// The terminal is restored on return, whether the loop ended by quit
    /// command, ctrl-c, or error.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let outcome = self.event_loop().await;
        self.log_line("event loop ended, releasing terminal");
        self.subscriptions.shutdown();
        outcome?;
        // The guard drops with the rest of self, restoring the terminal.
        Ok(self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        self.draw()?;

        let frame = Duration::from_secs_f64(1.0 / self.options.fps.clamp(1, 120) as f64);
        let mut ticker = tokio::time::interval(frame);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let ctrl_c_quits = self.options.ctrl_c_quits;

        while !self.quitting {
            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c(), if ctrl_c_quits => {
                    self.log_line("ctrl-c");
                    self.quitting = true;
                }

                Some(msg) = self.rx.recv() => {
                    self.step(msg);
                    // Mouse motion arrives in floods; fold whatever else is
                    // already queued into this frame before redrawing.
                    let mut folded = 0;
                    while folded < 64 && !self.quitting {
                        match self.rx.try_recv() {
                            Ok(msg) => {
                                self.step(msg);
                                folded += 1;
                            }
                            Err(_) => break,
                        }
                    }
                }

                _ = ticker.tick() => {
                    if self.dirty {
                        self.draw()?;
                        self.dirty = false;
                    }
                }
            }
        }
        Ok(())
    }

    /// One full update cycle: apply the message, execute its command, and
    /// reconcile subscriptions against the new state.
    fn step(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.run_effect(cmd);
        self.subscriptions.reconcile(self.model.subscriptions());
        self.dirty = true;
    }

    fn run_effect(&mut self, cmd: Command<M::Message>) {
        match cmd.0 {
            Effect::Nothing => {}
            Effect::Emit(msg) => {
                let _ = self.tx.send(msg);
            }
            Effect::Quit => self.quitting = true,
            Effect::Task(fut) => {
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let _ = tx.send(fut.await);
                });
            }
            Effect::Many(cmds) => {
                for cmd in cmds {
                    self.run_effect(cmd);
                }
            }
            Effect::Screen(tcmd) => self.apply_screen(tcmd),
        }
    }

    fn apply_screen(&mut self, cmd: TerminalCommand) {
        let mut out = stdout();
        let _ = match cmd {
            TerminalCommand::EnterAltScreen => execute!(out, EnterAlternateScreen),
            TerminalCommand::ExitAltScreen => execute!(out, LeaveAlternateScreen),
            TerminalCommand::EnableMouseCapture => execute!(out, EnableMouseCapture),
            TerminalCommand::DisableMouseCapture => execute!(out, DisableMouseCapture),
            TerminalCommand::ShowCursor => execute!(out, cursor::Show),
            TerminalCommand::HideCursor => execute!(out, cursor::Hide),
            TerminalCommand::SetTitle(title) => execute!(out, SetTitle(title)),
        };
    }

    fn draw(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| self.model.view(frame))?;
        Ok(())
    }

    fn log_line(&mut self, line: &str) {
        if let Some(ref mut f) = self.log {
            let _ = writeln!(f, "{line}");
        }
    }
}

/// Open an append-mode log file for a TUI application.
///
/// While the UI owns the screen, diagnostics have to go somewhere else; pair
/// the returned handle with `writeln!` or a logging framework.
///
/// ```no_run
/// use dialpick_core::runtime::log_to_file;
/// use std::io::Write;
///
/// let mut log = log_to_file("picker.log").unwrap();
/// writeln!(log, "selected DE").unwrap();
/// ```
pub fn log_to_file(path: impl AsRef<std::path::Path>) -> Result<std::fs::File, std::io::Error> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}
