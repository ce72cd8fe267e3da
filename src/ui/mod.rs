//! 终端界面
//!
//! 两个页面（设置中心、待办列表）共用一个 App，按 MVI 划分：
//! - Model (state.rs): App 持有当前页面、ModalHost 弹窗宿主和 TodoScreen
//! - Intent (actions.rs, input.rs): 按键在当前输入模式下转成 Action
//! - Update (logic.rs): dispatch 把 Action 交给 SettingsHub 或 TodoScreen
//! - View (view/): 只读 App 绘制页面，弹窗以底部面板或居中对话框叠加

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

pub use input::handle_key_event;
pub use state::App;
pub use view::render;
