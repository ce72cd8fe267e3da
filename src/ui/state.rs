//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::error::Result;
use crate::links::LinkOpener;
use crate::modal::{Modal, ModalHost};
use crate::screens::{HubEntry, SettingsHub, TodoDialog, TodoScreen};

/// 应用状态
pub struct App {
    pub screen: Screen,
    pub hub: SettingsHub,
    pub hub_index: usize,
    pub modal: ModalHost,
    pub todos: TodoScreen,
    pub links: Box<dyn LinkOpener>,
    pub message: Option<String>,
}

/// 当前页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Settings,
    Todos,
}

/// 输入模式，决定按键的含义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Settings,
    /// 设置面板或关于对话框
    Overlay,
    Support,
    Todos,
    Typing,
    Confirm,
}

impl App {
    /// 创建新的应用实例
    pub fn new(hub: SettingsHub, todos: TodoScreen, links: Box<dyn LinkOpener>) -> Self {
        Self {
            screen: Screen::Settings,
            hub,
            hub_index: 0,
            modal: ModalHost::default(),
            todos,
            links,
            message: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        match self.screen {
            Screen::Settings if !self.modal.is_open() => AppMode::Settings,
            Screen::Settings => match self.modal.current() {
                Some(Modal::Confirmation(_)) => AppMode::Support,
                _ => AppMode::Overlay,
            },
            Screen::Todos => match self.todos.dialog() {
                TodoDialog::Idle => AppMode::Todos,
                TodoDialog::Add(_) => AppMode::Typing,
                TodoDialog::DeleteAll { .. } | TodoDialog::DeleteOne { .. } => AppMode::Confirm,
            },
        }
    }

    /// 获取当前选中的设置项
    pub fn selected_entry(&self) -> Option<HubEntry> {
        self.hub.entries().get(self.hub_index).copied()
    }

    /// 切换页面，进入待办页时重新加载
    pub fn switch_screen(&mut self) -> Result<()> {
        self.message = None;
        self.screen = match self.screen {
            Screen::Settings => {
                self.todos.resume()?;
                Screen::Todos
            }
            Screen::Todos => Screen::Settings,
        };
        tracing::debug!(screen = ?self.screen, "screen switched");
        Ok(())
    }
}
