use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::controller::ListView;
use crate::render::NO_PARTICIPANTS;
use crate::status::MessageKind;

use super::App;
use super::app::Focus;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);
    draw_activities(frame, app, body[0]);
    draw_signup_form(frame, app, body[1]);

    draw_status(frame, app, chunks[2]);
    draw_hints(frame, app, chunks[3]);

    if app.controller.login_open() {
        super::modal::draw_login_modal(frame, &app.login, app.controller.login_error());
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        "Extracurricular Activities",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw("  "));
    match app.controller.session() {
        Some(s) => spans.push(Span::styled(
            format!("Teacher: {}", s.display_name()),
            Style::default().fg(Color::Green),
        )),
        None => spans.push(Span::styled("not logged in", Style::default().fg(Color::Gray))),
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_activities(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Activities;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title("Activities");

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0usize;
    match app.controller.view() {
        ListView::Loading => lines.push(Line::from("Loading activities...")),
        ListView::Failed(notice) => lines.push(Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(Color::Red),
        ))),
        ListView::Loaded(cards) => {
            let mut row = 0usize;
            for card in cards {
                lines.push(Line::from(Span::styled(
                    card.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(format!("  {}", card.description)));
                lines.push(Line::from(format!("  Schedule: {}", card.schedule)));
                lines.push(Line::from(format!(
                    "  Availability: {} spots left",
                    card.spots_left
                )));
                if card.participants.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", NO_PARTICIPANTS),
                        Style::default().add_modifier(Modifier::ITALIC),
                    )));
                }
                for p in &card.participants {
                    let selected = focused && row == app.selected_row;
                    if selected {
                        selected_line = lines.len();
                    }
                    let style = if selected {
                        Style::default().fg(Color::Black).bg(Color::Yellow)
                    } else {
                        Style::default()
                    };
                    lines.push(Line::from(vec![
                        Span::raw("    "),
                        Span::styled(format!("{} [x]", p.email), style),
                    ]));
                    row += 1;
                }
                lines.push(Line::from(""));
            }
        }
    }

    // Unwrapped, so one line is one row and the scroll offset stays exact.
    let height = area.height.saturating_sub(2) as usize;
    let scroll = selected_line.saturating_sub(height.saturating_sub(1));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((scroll as u16, 0)),
        area,
    );
}

fn draw_signup_form(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Email;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title("Sign Up a Student");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let activity = app
        .selected_activity()
        .unwrap_or("-- Select an activity --");
    frame.render_widget(
        Paragraph::new(format!("< {} >", activity))
            .block(Block::default().borders(Borders::ALL).title("Activity")),
        parts[0],
    );
    frame.render_widget(
        Paragraph::new(app.email.buf.as_str())
            .block(Block::default().borders(Borders::ALL).title("Student Email")),
        parts[1],
    );
    if focused && !app.controller.login_open() {
        frame.set_cursor_position((parts[1].x + 1 + app.email.cursor as u16, parts[1].y + 1));
    }
}

fn draw_status(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let Some(msg) = app.controller.status() else {
        return;
    };
    let color = match msg.kind {
        MessageKind::Success => Color::Green,
        MessageKind::Error => Color::Red,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(msg.text.as_str(), Style::default().fg(color))),
        area,
    );
}

fn draw_hints(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let hint = match (app.focus, app.controller.session().is_some()) {
        (Focus::Email, _) => "enter sign up  up/down activity  tab back",
        (Focus::Activities, true) => {
            "tab email  </> activity  d unregister  r reload  o logout  q quit"
        }
        (Focus::Activities, false) => {
            "tab email  </> activity  d unregister  r reload  l login  q quit"
        }
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::Gray))),
        area,
    );
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/render_tests.rs"]
mod tests;
