//! 模态弹窗
//!
//! 业务逻辑通过 [`ModalPresenter`] 请求弹窗，终端实现 [`ModalHost`] 只记录当前弹窗，由视图层绘制。

use crate::models::SettingsCategory;

/// 关于信息
#[derive(Debug, Clone, PartialEq)]
pub struct AboutInfo {
    pub app_name: String,
    pub version: String,
    pub credits: Vec<String>,
    pub license: String,
}

impl AboutInfo {
    /// 当前构建的关于信息
    pub fn current() -> Self {
        Self {
            app_name: "Lunar".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            credits: vec![
                "Based on Lunar Launcher by Md Rasel Hossain".to_string(),
                "Built with ratatui and crossterm".to_string(),
            ],
            license: env!("CARGO_PKG_LICENSE").to_string(),
        }
    }
}

/// 确认对话框中的按钮
#[derive(Debug, Clone, PartialEq)]
pub struct DialogAction {
    pub key: char,
    pub label: String,
    pub url: String,
}

/// 带按钮的确认对话框
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    pub actions: Vec<DialogAction>,
}

impl Confirmation {
    pub fn action_for_key(&self, key: char) -> Option<&DialogAction> {
        self.actions
            .iter()
            .find(|action| action.key.eq_ignore_ascii_case(&key))
    }
}

/// 当前显示的弹窗
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Panel { category: SettingsCategory, tag: String },
    Info { info: AboutInfo, tag: String },
    Confirmation(Confirmation),
}

/// 弹窗展示能力
pub trait ModalPresenter {
    fn present_panel(&mut self, category: SettingsCategory, tag: &str);
    fn present_info(&mut self, info: AboutInfo, tag: &str);
    fn present_confirmation(&mut self, confirmation: Confirmation);
    fn dismiss(&mut self);
}

/// 终端弹窗宿主，同一时间最多一个弹窗
#[derive(Debug, Default)]
pub struct ModalHost {
    current: Option<Modal>,
}

impl ModalHost {
    pub fn current(&self) -> Option<&Modal> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    fn show(&mut self, modal: Modal) {
        if let Some(previous) = self.current.replace(modal) {
            tracing::debug!(?previous, "modal replaced");
        }
    }
}

impl ModalPresenter for ModalHost {
    fn present_panel(&mut self, category: SettingsCategory, tag: &str) {
        tracing::debug!(?category, tag, "presenting settings panel");
        self.show(Modal::Panel {
            category,
            tag: tag.to_string(),
        });
    }

    fn present_info(&mut self, info: AboutInfo, tag: &str) {
        tracing::debug!(tag, "presenting info");
        self.show(Modal::Info {
            info,
            tag: tag.to_string(),
        });
    }

    fn present_confirmation(&mut self, confirmation: Confirmation) {
        tracing::debug!(title = %confirmation.title, "presenting confirmation");
        self.show(Modal::Confirmation(confirmation));
    }

    fn dismiss(&mut self) {
        self.current = None;
    }
}
