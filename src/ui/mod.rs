pub mod draw;
pub mod surface;

use std::rc::Rc;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, GameOverNotice};
use crate::game::{GameOverCause, Session};
use surface::TerminalSurface;

fn layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status line
            Constraint::Min(0),    // Playfield
            Constraint::Length(1), // Help line
        ])
        .split(area)
}

/// Playfield rect for a terminal of the given size.
pub fn field_area(area: Rect) -> Rect {
    layout(area)[1]
}

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = layout(frame.area());

    render_status(frame, chunks[0], &app.session);

    let mut surface = TerminalSurface::new(
        frame.buffer_mut(),
        chunks[1],
        app.session.grid().cell_size(),
        draw::BACKGROUND,
    );
    draw::draw(&app.session, &mut surface, &mut rand::thread_rng());

    render_help(frame, chunks[2]);

    if let Some(notice) = &app.notice {
        render_game_over(frame, chunks[1], notice);
    }
}

fn render_status(frame: &mut Frame, area: Rect, session: &Session) {
    let status = Line::from(vec![
        Span::styled(
            format!(" {} ", session.score_text()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(
                "Wave: {} ({:.1}s) ",
                session.wave(),
                session.wave_interval_ms() as f64 / 1000.0
            ),
            Style::default().fg(Color::Green),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Invaders: {} ", session.invaders().len()),
            Style::default().fg(Color::Rgb(80, 255, 80)),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Pellets: {} ", session.pellets().len()),
            Style::default().fg(Color::Rgb(220, 220, 220)),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled(" \u{2190}\u{2191}\u{2193}\u{2192} Steer ", Style::default().fg(Color::DarkGray)),
        Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("Q/Esc Quit", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(help, area);
}

fn render_game_over(frame: &mut Frame, area: Rect, notice: &GameOverNotice) {
    let overlay_w = 36u16.min(area.width);
    let overlay_h = 7u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(139, 0, 0)))
        .title(" GAME OVER ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let reason = match notice.cause {
        GameOverCause::Invader => "Caught by an invader",
        GameOverCause::OwnTrail => "Ran into your own trail",
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("Game Over! Your score: {}", notice.score),
            Style::default().fg(Color::Rgb(255, 215, 0)).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(reason, Style::default().fg(Color::Rgb(180, 180, 200)))),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to play again",
            Style::default().fg(Color::Rgb(80, 200, 255)),
        )),
    ];
    let p = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(p, inner);
}
