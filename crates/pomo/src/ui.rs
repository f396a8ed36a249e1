//! UI rendering

use chrono::Local;
use pomo_core::{format, Phase, QuitChoice, SettingsField, Snapshot, View};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::glyphs;

const PRIMARY: Color = Color::Rgb(0xF1, 0xF5, 0xF9);
const SECONDARY: Color = Color::Rgb(0x81, 0xED, 0xF6);
const BLUR: Color = Color::Rgb(0x76, 0x76, 0x76);

/// Width of the centred content box
const CONTENT_WIDTH: u16 = 60;
const CONTENT_HEIGHT: u16 = 14;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let snap = app.snapshot();
    let area = f.area();

    if !snap.has_viewport() {
        f.render_widget(Paragraph::new("Loading..."), area);
        return;
    }

    let content = centered(area, CONTENT_WIDTH, CONTENT_HEIGHT);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // View
            Constraint::Length(1), // Help
        ])
        .split(content);

    match snap.view {
        View::Work | View::Pause => draw_timer(f, app, &snap, chunks[0]),
        View::Settings => draw_settings(f, &snap, chunks[0]),
        View::Quit => draw_quit(f, &snap, chunks[0]),
    }
    draw_help(f, &snap, chunks[1]);
}

/// A `width` x `height` rect centred in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn draw_timer(f: &mut Frame, app: &App, snap: &Snapshot, area: Rect) {
    let phase = snap.view.phase().unwrap_or(Phase::Work);
    let remaining = snap.remaining(phase);
    let clock = snap.clock().unwrap_or_default();

    let mut lines: Vec<Line> = glyphs::render(&clock)
        .into_iter()
        .map(|row| Line::from(row).centered())
        .collect();

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            app.title.clone(),
            Style::default().fg(SECONDARY).bold(),
        ))
        .centered(),
    );
    lines.push(Line::from(""));

    let status = if snap.running {
        format!("ends at {}", format::time(format::ends_at(Local::now(), remaining)))
    } else {
        "stopped".to_string()
    };
    lines.push(Line::from(Span::styled(status, Style::default().fg(BLUR))).centered());

    let timer = Paragraph::new(lines).style(Style::default().fg(PRIMARY));
    f.render_widget(timer, area);
}

fn draw_settings(f: &mut Frame, snap: &Snapshot, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Padding
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Labels
            Constraint::Length(3), // Fields
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Line::from("Pomo-Settings").centered())
        .style(Style::default().fg(SECONDARY).bold());
    f.render_widget(title, rows[1]);

    let column_constraints = [
        Constraint::Length(14),
        Constraint::Length(2),
        Constraint::Length(14),
        Constraint::Length(2),
        Constraint::Length(14),
    ];
    let labels = Layout::horizontal(column_constraints)
        .flex(Flex::Center)
        .split(rows[3]);
    let fields = Layout::horizontal(column_constraints)
        .flex(Flex::Center)
        .split(rows[4]);

    for (i, field) in SettingsField::ALL.into_iter().enumerate() {
        let column = i * 2;
        let label = Paragraph::new(Line::from(field.label()).centered())
            .style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD));
        f.render_widget(label, labels[column]);

        let focused = snap.settings_cursor == field;
        let accent = if focused { SECONDARY } else { BLUR };

        let widget = match field.phase() {
            Some(phase) => Paragraph::new(Line::from(snap.target(phase).to_string()).centered())
                .style(Style::default().fg(PRIMARY))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(accent)),
                ),
            None => {
                let checkbox = if snap.auto_advance { "[x]" } else { "[ ]" };
                let fg = if focused { SECONDARY } else { PRIMARY };
                Paragraph::new(vec![Line::from(""), Line::from(checkbox).centered()])
                    .style(Style::default().fg(fg))
            }
        };
        f.render_widget(widget, fields[column]);
    }
}

fn draw_quit(f: &mut Frame, snap: &Snapshot, area: Rect) {
    let selected = Style::default().fg(PRIMARY).bold();
    let unselected = Style::default().fg(BLUR);
    let (no_style, yes_style) = match snap.quit_choice {
        QuitChoice::Cancel => (selected, unselected),
        QuitChoice::Confirm => (unselected, selected),
    };

    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("Really quit?", Style::default().fg(PRIMARY).bold())).centered(),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ No ]", no_style),
            Span::raw("    "),
            Span::styled("[ Yes ]", yes_style),
        ])
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "← → to select, ENTER to confirm",
            Style::default().fg(BLUR).add_modifier(Modifier::DIM),
        ))
        .centered(),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

fn help_text(view: View) -> &'static str {
    match view {
        View::Work => "[SPACE] Toggle, [P]ause, [S]ettings, [R]eset, [Q]uit",
        View::Pause => "[SPACE] Toggle, [W]ork, [S]ettings, [R]eset, [Q]uit",
        View::Settings => "[← →] Field  [↑ ↓] +/- min  [SPACE] Toggle  [ENTER] Save",
        View::Quit => "",
    }
}

fn draw_help(f: &mut Frame, snap: &Snapshot, area: Rect) {
    let help = Paragraph::new(Line::from(help_text(snap.view)).centered())
        .style(Style::default().fg(BLUR).add_modifier(Modifier::DIM));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomo_core::{Config, Input, Msg};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn sized_app() -> App {
        let mut app = App::new(&Config::default());
        app.handle(Msg::Resize {
            width: 80,
            height: 24,
        });
        app
    }

    #[test]
    fn test_loading_before_first_resize() {
        let app = App::new(&Config::default());
        assert!(render(&app).contains("Loading..."));
    }

    #[test]
    fn test_timer_view_shows_title_and_help() {
        let app = sized_app();
        let screen = render(&app);
        assert!(screen.contains(app.title.as_str()));
        assert!(screen.contains("[P]ause"));
        assert!(screen.contains("stopped"));
        assert!(screen.contains("████████"));
    }

    #[test]
    fn test_running_timer_shows_end_time() {
        let mut app = sized_app();
        app.handle(Msg::Input(Input::ToggleRun));
        assert!(render(&app).contains("ends at"));
    }

    #[test]
    fn test_settings_view() {
        let mut app = sized_app();
        app.handle(Msg::Input(Input::OpenSettings));
        for _ in 0..3 {
            app.handle(Msg::Input(Input::NavRight));
        }
        app.handle(Msg::Input(Input::ToggleRun));

        let screen = render(&app);
        assert!(screen.contains("Pomo-Settings"));
        assert!(screen.contains("Auto Mode"));
        assert!(screen.contains("25"));
        assert!(screen.contains("[x]"));
    }

    #[test]
    fn test_quit_view() {
        let mut app = sized_app();
        app.handle(Msg::Input(Input::QuitRequest));
        let screen = render(&app);
        assert!(screen.contains("Really quit?"));
        assert!(screen.contains("[ No ]"));
        assert!(screen.contains("[ Yes ]"));
    }

    #[test]
    fn test_centered_shrinks_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered(area, 60, 14), area);
        assert_eq!(centered(Rect::new(0, 0, 80, 24), 60, 14), Rect::new(10, 5, 60, 14));
    }
}
