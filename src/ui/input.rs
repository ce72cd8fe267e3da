//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::error::Result;

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Settings => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Tab => Some(Action::SwitchScreen),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Enter => Some(Action::Activate),
            _ => None,
        },
        AppMode::Overlay => match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::Cancel),
            _ => None,
        },
        AppMode::Support => match key {
            KeyCode::Esc | KeyCode::Char('n') => Some(Action::Cancel),
            KeyCode::Char(c) => Some(Action::ChooseLink(c)),
            _ => None,
        },
        AppMode::Todos => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Tab => Some(Action::SwitchScreen),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('a') => Some(Action::StartAddTodo),
            KeyCode::Char('D') => Some(Action::StartDeleteAll),
            KeyCode::Char('x') => Some(Action::StartDeleteSelected),
            _ => None,
        },
        AppMode::Typing => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::Confirm => match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::Submit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> Result<bool> {
    match get_action(app.mode(), key) {
        Some(action) => app.dispatch(action),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_typing_captures_command_keys() {
        assert_eq!(
            get_action(AppMode::Typing, KeyCode::Char('q')),
            Some(Action::Input('q'))
        );
        assert_eq!(
            get_action(AppMode::Todos, KeyCode::Char('q')),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_support_keys_become_link_choices() {
        assert_eq!(
            get_action(AppMode::Support, KeyCode::Char('s')),
            Some(Action::ChooseLink('s'))
        );
        assert_eq!(
            get_action(AppMode::Support, KeyCode::Esc),
            Some(Action::Cancel)
        );
    }

    #[test]
    fn test_overlay_only_closes() {
        assert_eq!(get_action(AppMode::Overlay, KeyCode::Char('j')), None);
        assert_eq!(
            get_action(AppMode::Overlay, KeyCode::Enter),
            Some(Action::Cancel)
        );
    }
}
