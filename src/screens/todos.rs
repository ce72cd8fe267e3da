//! 待办页面
//!
//! 状态机：空闲 → 添加对话框 / 全部删除对话框 / 单项删除对话框 → 空闲。
//! 每次变更成功后从存储整体重新加载列表。

use crate::error::Result;
use crate::models::TodoItem;
use crate::storage::LocalStore;

/// 输入为空时的提示
pub const EMPTY_TEXT_FIELD: &str = "Text field is empty";

/// 添加对话框
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddDialog {
    pub input: String,
    pub error: Option<&'static str>,
    /// 打开时请求输入焦点和键盘
    pub keyboard_requested: bool,
}

/// 页面当前的对话框
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TodoDialog {
    #[default]
    Idle,
    Add(AddDialog),
    DeleteAll { confirm_enabled: bool },
    DeleteOne { id: String, name: String },
}

/// 确认操作的结果
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    Added(String),
    Rejected,
    DeletedAll,
    Deleted(String),
    Ignored,
}

pub struct TodoScreen {
    store: Box<dyn LocalStore>,
    items: Vec<TodoItem>,
    dialog: TodoDialog,
    selected_index: usize,
}

impl TodoScreen {
    pub fn new(store: Box<dyn LocalStore>) -> Self {
        Self {
            store,
            items: Vec::new(),
            dialog: TodoDialog::Idle,
            selected_index: 0,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn dialog(&self) -> &TodoDialog {
        &self.dialog
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.items.get(self.selected_index)
    }

    /// 页面重新激活
    pub fn resume(&mut self) -> Result<()> {
        self.dialog = TodoDialog::Idle;
        self.reload()
    }

    /// 从存储重新加载全部事项
    pub fn reload(&mut self) -> Result<()> {
        self.items = self.store.list()?;

        // 确保选中索引有效
        if self.items.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.items.len() {
            self.selected_index = self.items.len() - 1;
        }
        Ok(())
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
        }
    }

    // ============ 对话框 ============

    pub fn open_add_dialog(&mut self) {
        self.dialog = TodoDialog::Add(AddDialog {
            keyboard_requested: true,
            ..AddDialog::default()
        });
    }

    /// 全部删除；列表为空时确认按钮禁用
    pub fn open_delete_all_dialog(&mut self) -> Result<()> {
        let confirm_enabled = self.store.exists()?;
        self.dialog = TodoDialog::DeleteAll { confirm_enabled };
        Ok(())
    }

    pub fn open_delete_selected_dialog(&mut self) {
        if let Some(item) = self.selected_item() {
            self.dialog = TodoDialog::DeleteOne {
                id: item.id.clone(),
                name: item.name.clone(),
            };
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let TodoDialog::Add(dialog) = &mut self.dialog {
            dialog.input.push(c);
            dialog.error = None;
        }
    }

    pub fn delete_char(&mut self) {
        if let TodoDialog::Add(dialog) = &mut self.dialog {
            dialog.input.pop();
            dialog.error = None;
        }
    }

    pub fn cancel(&mut self) {
        self.dialog = TodoDialog::Idle;
    }

    /// 确认当前对话框
    pub fn confirm(&mut self) -> Result<ConfirmOutcome> {
        match &mut self.dialog {
            TodoDialog::Idle => Ok(ConfirmOutcome::Ignored),
            TodoDialog::Add(dialog) => match TodoItem::from_input(&dialog.input) {
                Some(item) => {
                    let name = item.name.clone();
                    self.store.add(item)?;
                    self.dialog = TodoDialog::Idle;
                    self.reload()?;
                    Ok(ConfirmOutcome::Added(name))
                }
                None => {
                    dialog.error = Some(EMPTY_TEXT_FIELD);
                    Ok(ConfirmOutcome::Rejected)
                }
            },
            TodoDialog::DeleteAll { confirm_enabled } => {
                if !*confirm_enabled {
                    return Ok(ConfirmOutcome::Ignored);
                }
                self.store.delete_all()?;
                self.dialog = TodoDialog::Idle;
                self.reload()?;
                Ok(ConfirmOutcome::DeletedAll)
            }
            TodoDialog::DeleteOne { id, name } => {
                let name = name.clone();
                self.store.delete(id)?;
                self.dialog = TodoDialog::Idle;
                self.reload()?;
                Ok(ConfirmOutcome::Deleted(name))
            }
        }
    }
}
