//! Keyboard shortcut overlay, sized to its content

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::dialogs::DialogFrame;
use crate::tui::styles::Theme;

const KEY_COLUMN: usize = 12;

struct Section {
    name: &'static str,
    keys: &'static [(&'static str, &'static str)],
}

const SECTIONS: &[Section] = &[
    Section {
        name: "Navigation",
        keys: &[
            ("j/↓", "Move down"),
            ("k/↑", "Move up"),
            ("PgUp/PgDn", "Jump a page"),
            ("g/Home", "Go to top"),
            ("G/End", "Go to bottom"),
        ],
    },
    Section {
        name: "Tasks",
        keys: &[
            ("a", "Add task"),
            ("e", "Edit selected task"),
            ("d/Del", "Remove selected task"),
            ("c", "Clear all tasks"),
        ],
    },
    Section {
        name: "Dialogs",
        keys: &[
            ("Tab", "Next field"),
            ("←/→", "Cycle priority or field"),
            ("Enter", "Submit"),
            ("Esc", "Cancel"),
        ],
    },
    Section {
        name: "Other",
        keys: &[("?", "Toggle help"), ("q", "Quit")],
    },
];

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, section) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::styled(
            section.name,
            Style::default().fg(theme.accent).bold(),
        ));
        lines.extend(section.keys.iter().map(|&(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", key, width = KEY_COLUMN - 2),
                    Style::default().fg(theme.medium),
                ),
                Span::styled(action, Style::default().fg(theme.text)),
            ])
        }));
    }
    lines
}

/// Outer size for `lines`: one column of padding on each side plus borders.
fn overlay_size(lines: &[Line]) -> (u16, u16) {
    let widest = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(widest + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    (width, height)
}

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines = help_lines(theme);
        let (width, height) = overlay_size(&lines);
        let inner = DialogFrame {
            title: "Keyboard Shortcuts",
            width,
            height,
            border: theme.border,
            title_color: theme.title,
        }
        .draw(frame, area, theme);

        let padded = Rect {
            x: inner.x.saturating_add(1),
            width: inner.width.saturating_sub(2),
            ..inner
        };
        frame.render_widget(Paragraph::new(lines), padded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_fits_a_standard_terminal() {
        let (width, height) = overlay_size(&help_lines(&Theme::default()));
        assert!(width <= 80, "help is {width} columns wide");
        assert!(height <= 24, "help is {height} rows tall");
    }

    #[test]
    fn help_size_follows_content() {
        let lines = help_lines(&Theme::default());
        let (width, height) = overlay_size(&lines);
        assert_eq!(height as usize, lines.len() + 2);
        let widest = lines.iter().map(Line::width).max().unwrap();
        assert_eq!(width as usize, widest + 4);
    }

    #[test]
    fn sections_are_separated_by_one_blank_line() {
        let lines = help_lines(&Theme::default());
        let blanks = lines.iter().filter(|l| l.width() == 0).count();
        assert_eq!(blanks, SECTIONS.len() - 1);
        assert!(lines.last().is_some_and(|l| l.width() > 0));
    }

    #[test]
    fn help_lists_every_task_action() {
        let keys: Vec<&str> = SECTIONS
            .iter()
            .flat_map(|s| s.keys.iter().map(|&(key, _)| key))
            .collect();
        for key in ["a", "e", "d/Del", "c", "q", "?"] {
            assert!(keys.contains(&key), "missing shortcut {key}");
        }
        assert!(keys.iter().all(|k| k.chars().count() < KEY_COLUMN - 2));
    }
}
