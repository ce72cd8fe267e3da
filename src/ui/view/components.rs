//! 通用 UI 组件
//!
//! 对话框、输入框、按钮等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带有标题和校验错误的输入框，返回光标位置
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    error: Option<&str>,
) -> (u16, u16) {
    let (border_color, title) = match error {
        Some(error) => (Color::Red, format!("{title} ({error})")),
        None => (Color::Yellow, title.to_string()),
    };

    let input = Paragraph::new(value)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
    frame.render_widget(input, area);

    // 按显示宽度计算，全角字符占两列
    let width = u16::try_from(Line::from(value).width()).unwrap_or(u16::MAX);
    let max_x = area.x + area.width.saturating_sub(2);
    ((area.x + 1).saturating_add(width).min(max_x), area.y + 1)
}

/// [组件] 一行按钮，禁用的按钮显示为灰色
pub fn button_line<'a>(buttons: &[(&'a str, &'a str, bool)]) -> Line<'a> {
    let mut spans = Vec::new();
    for (key, label, enabled) in buttons {
        let style = if *enabled {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        };
        spans.push(Span::styled(format!("[{key}] {label}"), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn cursor_for(value: &str) -> (u16, u16) {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        let mut cursor = (0, 0);
        terminal
            .draw(|f| cursor = render_input_widget(f, Rect::new(0, 0, 30, 3), "Reminder", value, None))
            .unwrap();
        cursor
    }

    #[test]
    fn test_cursor_follows_display_width() {
        assert_eq!(cursor_for(""), (1, 1));
        assert_eq!(cursor_for("abc"), (4, 1));
        assert_eq!(cursor_for("买牛奶"), (7, 1));
    }

    #[test]
    fn test_cursor_stays_inside_border() {
        assert_eq!(cursor_for(&"x".repeat(100)), (28, 1));
    }
}
