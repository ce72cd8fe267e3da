//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    SwitchScreen,
    MoveSelectionUp,
    MoveSelectionDown,

    // 设置页
    Activate,
    ChooseLink(char),

    // 待办页
    StartAddTodo,
    StartDeleteAll,
    StartDeleteSelected,

    // 表单/通用交互
    Cancel,      // Esc / n
    Submit,      // Enter / y
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
