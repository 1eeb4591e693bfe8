//! Country picker demo.
//!
//! Click the search box to focus it, type to filter the directory, move the
//! highlight with the arrow keys or the mouse, and pick a country with Enter
//! or a click. The status line shows the chosen country's flag and dial
//! code. Clicking anywhere outside the box blurs it; Esc or ctrl-c quits.
//!
//! Run with: `cargo run --example country_picker`

use dialpick::crossterm::event::{KeyCode, KeyModifiers};
use dialpick::ratatui::layout::{Constraint, Layout};
use dialpick::ratatui::style::{Color, Modifier, Style, Stylize};
use dialpick::ratatui::text::{Line, Span};
use dialpick::ratatui::widgets::Paragraph;
use dialpick::ratatui::Frame;
use dialpick::widgets::chrome::focus_block;
use dialpick::widgets::country::Country;
use dialpick::widgets::selector::{self, CountrySelector};
use dialpick::{
    terminal_events, Command, Component, Model, ProgramOptions, Subscription, TerminalEvent,
};

struct PickerApp {
    selector: CountrySelector,
    picked: Option<&'static Country>,
}

#[derive(Debug)]
enum Msg {
    Selector(selector::Message),
    Quit,
}

impl PickerApp {
    fn status_line(&self) -> Line<'static> {
        match self.picked {
            Some(country) => Line::from(vec![
                Span::raw(format!("{}  ", country.flag())),
                Span::styled(
                    country.name,
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  dials "),
                Span::styled(country.dial_code, Style::default().fg(Color::Yellow)),
            ]),
            None => Line::from(Span::raw("No country picked yet.").dim()),
        }
    }
}

impl Model for PickerApp {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        (
            PickerApp {
                selector: CountrySelector::new().with_max_visible(6),
                picked: None,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Selector(selector::Message::Selected(country)) => {
                self.picked = Some(country);
                Command::none()
            }
            Msg::Selector(m) => self.selector.update(m).map(Msg::Selector),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [search_area, status_area, _, help_area] = Layout::vertical([
            Constraint::Length(10),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let search = focus_block("Country", self.selector.focused());
        let search_inner = search.inner(search_area);
        frame.render_widget(search, search_area);
        self.selector.view(frame, search_inner);

        frame.render_widget(Paragraph::new(self.status_line()), status_area);

        let help =
            "click to focus · type to filter · up/down move · enter picks · esc quits";
        frame.render_widget(Paragraph::new(help).dim(), help_area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|event| match event {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => Some(Msg::Quit),
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                _ => Some(Msg::Selector(selector::Message::KeyPress(key))),
            },
            TerminalEvent::Mouse(mouse) => Some(Msg::Selector(selector::Message::Mouse(mouse))),
            _ => None,
        })]
    }
}

#[dialpick::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = ProgramOptions {
        mouse_capture: true,
        title: Some("dialpick".into()),
        ..ProgramOptions::default()
    };
    dialpick::run_with::<PickerApp>((), options).await?;
    Ok(())
}
