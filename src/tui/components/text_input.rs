//! Shared single-line text field

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tui_input::Input;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::styles::Theme;

/// Renders `label value` on one line.
///
/// When focused, the character under the cursor is drawn in inverse video and
/// the value scrolls horizontally so the cursor stays visible. When not
/// focused, an empty value shows `placeholder`.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    is_focused: bool,
    placeholder: Option<&str>,
    theme: &Theme,
) {
    let label_style = if is_focused {
        Style::default().fg(theme.accent).underlined()
    } else {
        Style::default().fg(theme.text)
    };
    let value_style = if is_focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let mut spans = vec![Span::styled(label.to_string(), label_style), Span::raw(" ")];
    let value = input.value();

    if !is_focused {
        match placeholder {
            Some(text) if value.is_empty() => {
                spans.push(Span::styled(text.to_string(), Style::default().fg(theme.dimmed)))
            }
            _ => spans.push(Span::styled(value.to_string(), value_style)),
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        return;
    }

    let field_width = (area.width as usize)
        .saturating_sub(label.width() + 1)
        .max(1);
    let scroll = input.visual_scroll(field_width.saturating_sub(1));
    let cursor = input.visual_cursor();
    let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

    let mut before = String::new();
    let mut at_cursor = None;
    let mut after = String::new();
    let mut col = 0;
    for c in value.chars() {
        let start = col;
        col += c.width().unwrap_or(0);
        if start < scroll {
            continue;
        }
        if start < cursor {
            before.push(c);
        } else if start == cursor && at_cursor.is_none() {
            at_cursor = Some(c.to_string());
        } else {
            after.push(c);
        }
    }

    if !before.is_empty() {
        spans.push(Span::styled(before, value_style));
    }
    spans.push(Span::styled(
        at_cursor.unwrap_or_else(|| " ".to_string()),
        cursor_style,
    ));
    if !after.is_empty() {
        spans.push(Span::styled(after, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders `label < value >` for a field cycled with the arrow keys.
pub fn render_choice_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    value_color: Color,
    is_focused: bool,
    theme: &Theme,
) {
    let label_style = if is_focused {
        Style::default().fg(theme.accent).underlined()
    } else {
        Style::default().fg(theme.text)
    };
    let arrow_style = if is_focused {
        Style::default().fg(theme.hint)
    } else {
        Style::default().fg(theme.dimmed)
    };

    let line = Line::from(vec![
        Span::styled(label.to_string(), label_style),
        Span::raw(" "),
        Span::styled("< ", arrow_style),
        Span::styled(value.to_string(), Style::default().fg(value_color).bold()),
        Span::styled(" >", arrow_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
