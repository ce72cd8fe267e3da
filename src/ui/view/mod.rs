//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use super::state::{App, AppMode, Screen};
use crate::modal::{AboutInfo, Confirmation, Modal};
use crate::models::SettingsCategory;
use crate::screens::TodoDialog;
use crate::screens::todos::AddDialog;
use components::{button_line, render_dialog_framework, render_input_widget};
use layouts::{bottom_sheet_rect, centered_rect};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标签页
            Constraint::Min(6),    // 内容
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    match app.screen {
        Screen::Settings => render_settings(frame, app, chunks[1]),
        Screen::Todos => render_todos(frame, app, chunks[1]),
    }
    render_help(frame, app, chunks[2]);

    // 渲染弹窗
    match app.screen {
        Screen::Settings => match app.modal.current() {
            Some(Modal::Panel { category, .. }) => render_panel(frame, *category),
            Some(Modal::Info { info, .. }) => render_about(frame, info),
            Some(Modal::Confirmation(confirmation)) => render_support(frame, confirmation),
            None => {}
        },
        Screen::Todos => match app.todos.dialog() {
            TodoDialog::Idle => {}
            TodoDialog::Add(dialog) => render_add_dialog(frame, dialog),
            TodoDialog::DeleteAll { confirm_enabled } => render_confirm_dialog(
                frame,
                "Delete all",
                "Delete every to-do? This cannot be undone.",
                *confirm_enabled,
            ),
            TodoDialog::DeleteOne { name, .. } => render_confirm_dialog(
                frame,
                "Delete",
                &format!("Delete \"{name}\"?"),
                true,
            ),
        },
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let selected = match app.screen {
        Screen::Settings => 0,
        Screen::Todos => 1,
    };
    let tabs = Tabs::new(vec!["Settings", "To-dos"])
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(format!("Lunar v{}", app.hub.version()))
                .borders(Borders::ALL),
        );
    frame.render_widget(tabs, area);
}

fn render_settings(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .hub
        .entries()
        .iter()
        .map(|entry| ListItem::new(Line::from(entry.label())))
        .collect();

    let list = List::new(items)
        .block(Block::default().title("Settings").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    let mut state = ListState::default();
    state.select(Some(app.hub_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_todos(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("To-dos").borders(Borders::ALL);

    if app.todos.items().is_empty() {
        let empty = Paragraph::new("Nothing to do. Press 'a' to add a reminder.")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .todos
        .items()
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("• {}", item.name)),
                Span::styled(
                    format!("  {}", item.created_at.format("%Y-%m-%d %H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::REVERSED),
    );

    let mut state = ListState::default();
    state.select(Some(app.todos.selected_index()));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode() {
        AppMode::Settings => "[Enter] Open  [j/k] Navigate  [Tab] To-dos  [q] Quit",
        AppMode::Overlay => "[Esc] Close",
        AppMode::Support => "[s] Star  [d] Donate  [Esc] Cancel",
        AppMode::Todos => "[a] Add  [x] Delete  [D] Delete all  [j/k] Navigate  [Tab] Settings  [q] Quit",
        AppMode::Typing => "[Enter] Save  [Esc] Cancel",
        AppMode::Confirm => "[y] Confirm  [n] Cancel",
    };

    let text = match app.message.as_deref() {
        Some(message) if !message.is_empty() => format!("{help_text}  |  {message}"),
        _ => help_text.to_string(),
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_panel(frame: &mut Frame, category: SettingsCategory) {
    let area = bottom_sheet_rect(7, frame.area());
    let inner = render_dialog_framework(frame, area, category.title());

    let body = Paragraph::new(vec![
        Line::from(category.summary()),
        Line::from(""),
        Line::styled("[Esc] Close", Style::default().fg(Color::Gray)),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}

fn render_about(frame: &mut Frame, info: &AboutInfo) {
    let area = bottom_sheet_rect(6 + info.credits.len() as u16, frame.area());
    let inner = render_dialog_framework(frame, area, "About");

    let mut lines = vec![
        Line::styled(
            format!("{} {}", info.app_name, info.version),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("License: {}", info.license)),
        Line::from(""),
    ];
    lines.extend(info.credits.iter().map(|credit| Line::from(credit.as_str())));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_support(frame: &mut Frame, confirmation: &Confirmation) {
    let area = centered_rect(60, 30, frame.area());
    let inner = render_dialog_framework(frame, area, &confirmation.title);

    let buttons: Vec<(String, &str)> = confirmation
        .actions
        .iter()
        .map(|action| (action.key.to_string(), action.label.as_str()))
        .collect();
    let buttons: Vec<(&str, &str, bool)> = buttons
        .iter()
        .map(|(key, label)| (key.as_str(), *label, true))
        .chain([("Esc", "Cancel", true)])
        .collect();

    let body = Paragraph::new(vec![
        Line::from(confirmation.message.as_str()),
        Line::from(""),
        button_line(&buttons),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}

fn render_add_dialog(frame: &mut Frame, dialog: &AddDialog) {
    let area = bottom_sheet_rect(7, frame.area());
    let inner = render_dialog_framework(frame, area, "New to-do");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let cursor = render_input_widget(frame, chunks[0], "Reminder", &dialog.input, dialog.error);
    if dialog.keyboard_requested {
        frame.set_cursor_position(cursor);
    }

    frame.render_widget(
        Paragraph::new(button_line(&[("Enter", "Ok", true), ("Esc", "Cancel", true)])),
        chunks[1],
    );
}

fn render_confirm_dialog(frame: &mut Frame, title: &str, message: &str, confirm_enabled: bool) {
    let area = bottom_sheet_rect(6, frame.area());
    frame.render_widget(Clear, area);

    let dialog = Paragraph::new(vec![
        Line::from(message),
        Line::from(""),
        button_line(&[("y", "Ok", confirm_enabled), ("n", "Cancel", true)]),
    ])
    .style(Style::default().fg(Color::Red))
    .block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(dialog, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SupportLinks;
    use crate::links::RecordingLinkOpener;
    use crate::screens::{SettingsHub, TodoScreen};
    use crate::storage::MemoryStore;
    use ratatui::{Terminal, backend::TestBackend};

    fn app_with(names: &[&str]) -> App {
        App::new(
            SettingsHub::new("sheet", SupportLinks::default(), AboutInfo::current()),
            TodoScreen::new(Box::new(MemoryStore::with_names(names))),
            Box::new(RecordingLinkOpener::default()),
        )
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_settings_screen_lists_categories() {
        let mut app = app_with(&[]);
        let screen = draw(&mut app);
        for category in SettingsCategory::ALL {
            assert!(screen.contains(category.title()), "missing {}", category.title());
        }
        assert!(screen.contains("Support"));
    }

    #[test]
    fn test_todo_screen_shows_items_and_dialog_error() {
        let mut app = app_with(&["Buy milk"]);
        app.switch_screen().unwrap();
        assert!(draw(&mut app).contains("Buy milk"));

        app.todos.open_add_dialog();
        app.todos.confirm().unwrap();
        assert!(draw(&mut app).contains(crate::screens::todos::EMPTY_TEXT_FIELD));
    }
}
