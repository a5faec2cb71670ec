//! Overlay widgets drawn on top of the rain.

use digirain_core::Rgb;
use digirain_panels::Menu;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};

use crate::app::OpenPanel;

/// Widest the content panel grows.
const PANEL_MAX_WIDTH: u16 = 60;

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Dim a color for backgrounds.
fn dim(rgb: Rgb, factor: f32) -> Color {
    let scale = |v: u8| (v as f32 * factor) as u8;
    Color::Rgb(scale(rgb.r), scale(rgb.g), scale(rgb.b))
}

/// Title on the top row; skewed and split red/blue while glitching.
pub fn render_title(frame: &mut Frame, title: &str, glitching: bool, accent: Rgb) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }
    let row = Rect::new(area.x, area.y, area.width, 1);

    let line = if glitching {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                title.to_string(),
                Style::new()
                    .fg(Color::Red)
                    .bg(Color::Rgb(0, 0, 96))
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
        ])
    } else {
        Line::from(Span::styled(
            title.to_string(),
            Style::new().bold().fg(color(accent)),
        ))
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}

/// Menu bar and key help on the bottom row.
pub fn render_menu(frame: &mut Frame, menu: &Menu, active: Option<&str>, accent: Rgb) {
    let area = frame.area();
    if area.height < 2 {
        return;
    }
    let row = Rect::new(area.x, area.bottom() - 1, area.width, 1);
    let accent = color(accent);

    let mut spans = Vec::with_capacity(menu.items().len() * 2 + 8);
    for (i, item) in menu.items().iter().enumerate() {
        let label = format!(" {} {} ", i + 1, item.to_uppercase());
        let mut style = Style::new().fg(accent);
        if active.is_some_and(|key| key.eq_ignore_ascii_case(item)) {
            style = style.bold();
        }
        if i == menu.selected() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    spans.extend([
        "  ←/→".bold().fg(accent),
        " move  ".dark_gray(),
        "enter".bold().fg(accent),
        " open  ".dark_gray(),
        "x".bold().fg(accent),
        " close  ".dark_gray(),
        "q".bold().fg(accent),
        " quit".dark_gray(),
    ]);

    // Keep the menu readable over the rain.
    frame.render_widget(Clear, row);
    frame.render_widget(Line::from(spans).centered(), row);
}

/// One dim horizontal line sweeping down the screen.
pub fn render_scanline(frame: &mut Frame, row: u16, accent: Rgb) {
    let area = frame.area();
    if row >= area.height {
        return;
    }
    let line = Rect::new(area.x, area.y + row, area.width, 1);
    frame.buffer_mut().set_style(line, Style::new().bg(dim(accent, 0.1)));
}

/// Centered content panel for the open section.
pub fn render_panel(frame: &mut Frame, panel: &OpenPanel, now_ms: u64, accent: Rgb) {
    let body_height = panel.section.lines.len() as u16 + 4;
    let area = centered(frame.area(), PANEL_MAX_WIDTH, body_height);
    if area.width < 4 || area.height < 3 {
        return;
    }
    let accent = color(accent);

    let mut lines: Vec<Line> = panel
        .section
        .lines
        .iter()
        .map(|l| Line::from(l.as_str()).fg(accent))
        .collect();
    if let Some(typing) = &panel.typing {
        lines.push(Line::default());
        let cursor = if typing.is_done(now_ms) { "" } else { "█" };
        lines.push(Line::from(vec![
            Span::styled(typing.visible(now_ms).to_string(), Style::new().fg(accent)),
            Span::styled(cursor, Style::new().fg(accent)),
        ]));
    }

    let block = Block::bordered()
        .border_type(BorderType::Plain)
        .border_style(Style::new().fg(accent))
        .title(Line::from(format!(" {} ", panel.section.title)).bold().fg(accent))
        .title_bottom(Line::from(" [x] close ").dark_gray().right_aligned())
        .style(Style::new().bg(Color::Black));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// A rect at most `max_width` wide (80% of the screen) and `height` tall,
/// centered in `area`.
fn centered(area: Rect, max_width: u16, height: u16) -> Rect {
    let width = (u32::from(area.width) * 4 / 5).min(u32::from(max_width)) as u16;
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(column);
    rect
}
