//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑，具体的状态变化交给设置中心和待办页面

use super::actions::Action;
use super::state::{App, Screen};
use crate::error::Result;
use crate::modal::{Modal, ModalPresenter};
use crate::screens::ConfirmOutcome;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Quit => return Ok(true),
            Action::SwitchScreen => self.switch_screen()?,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::Activate => self.activate_selected(),
            Action::ChooseLink(key) => self.choose_link(key),

            Action::StartAddTodo => self.todos.open_add_dialog(),
            Action::StartDeleteAll => self.todos.open_delete_all_dialog()?,
            Action::StartDeleteSelected => self.todos.open_delete_selected_dialog(),

            Action::Cancel => self.cancel(),
            Action::Submit => self.submit()?,
            Action::Input(c) => self.todos.input_char(c),
            Action::DeleteChar => self.todos.delete_char(),
        }
        Ok(false)
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        match self.screen {
            Screen::Settings => self.hub_index = self.hub_index.saturating_sub(1),
            Screen::Todos => self.todos.move_up(),
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        match self.screen {
            Screen::Settings => {
                if self.hub_index + 1 < self.hub.entries().len() {
                    self.hub_index += 1;
                }
            }
            Screen::Todos => self.todos.move_down(),
        }
    }

    // ============ 设置页 ============

    fn activate_selected(&mut self) {
        if let Some(entry) = self.selected_entry() {
            self.hub.activate(entry, &mut self.modal);
        }
    }

    fn choose_link(&mut self, key: char) {
        let action = match self.modal.current() {
            Some(Modal::Confirmation(confirmation)) => confirmation.action_for_key(key).cloned(),
            _ => None,
        };
        if let Some(action) = action {
            self.hub
                .follow_link(&action, &mut self.modal, self.links.as_mut());
            self.message = Some(format!("Opening {}", action.url));
        }
    }

    // ============ 通用操作 ============

    fn submit(&mut self) -> Result<()> {
        self.message = match self.todos.confirm()? {
            ConfirmOutcome::Added(name) => Some(format!("Added \"{name}\"")),
            ConfirmOutcome::Deleted(name) => Some(format!("Deleted \"{name}\"")),
            ConfirmOutcome::DeletedAll => Some("All to-dos deleted".to_string()),
            ConfirmOutcome::Rejected | ConfirmOutcome::Ignored => None,
        };
        Ok(())
    }

    /// 取消当前操作
    pub fn cancel(&mut self) {
        match self.screen {
            Screen::Settings => self.modal.dismiss(),
            Screen::Todos => self.todos.cancel(),
        }
        self.message = None;
    }
}
