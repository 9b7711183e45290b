use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app::{LoginField, LoginForm};

pub(super) fn draw_login_modal(frame: &mut ratatui::Frame, form: &LoginForm, error: Option<&str>) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 60);
    let h = 11.min(area.height);
    let box_area = Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, box_area);

    let title = Line::from(vec![
        Span::styled("Teacher Login", Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("Tab", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("Enter", Style::default().fg(Color::Gray)),
    ]);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let masked = form.password.masked();
    let fields = [
        (LoginField::Username, "Username", form.username.buf.as_str(), parts[0]),
        (LoginField::Password, "Password", masked.as_str(), parts[1]),
    ];
    for (field, label, text, rect) in fields {
        let style = if form.field == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title(label),
            ),
            rect,
        );
    }

    if let Some(err) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(err, Style::default().fg(Color::Red))),
            parts[2],
        );
    }

    let (rect, cursor) = match form.field {
        LoginField::Username => (parts[0], form.username.cursor),
        LoginField::Password => (parts[1], form.password.cursor),
    };
    frame.set_cursor_position((rect.x + 1 + cursor as u16, rect.y + 1));
}
