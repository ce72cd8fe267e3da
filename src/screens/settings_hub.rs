//! 设置中心
//!
//! 无状态的分发器：菜单项 → 对应的设置面板、关于或支持对话框。

use crate::config::SupportLinks;
use crate::links::LinkOpener;
use crate::modal::{AboutInfo, Confirmation, DialogAction, ModalPresenter};
use crate::models::SettingsCategory;

/// 设置菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubEntry {
    Category(SettingsCategory),
    About,
    Support,
}

impl HubEntry {
    /// 按显示顺序列出所有菜单项
    pub fn all() -> Vec<HubEntry> {
        SettingsCategory::ALL
            .iter()
            .copied()
            .map(HubEntry::Category)
            .chain([HubEntry::About, HubEntry::Support])
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            HubEntry::Category(category) => category.title(),
            HubEntry::About => "About",
            HubEntry::Support => "Support",
        }
    }
}

#[derive(Debug)]
pub struct SettingsHub {
    dialog_tag: String,
    links: SupportLinks,
    about: AboutInfo,
    entries: Vec<HubEntry>,
}

impl SettingsHub {
    pub fn new(dialog_tag: impl Into<String>, links: SupportLinks, about: AboutInfo) -> Self {
        Self {
            dialog_tag: dialog_tag.into(),
            links,
            about,
            entries: HubEntry::all(),
        }
    }

    pub fn entries(&self) -> &[HubEntry] {
        &self.entries
    }

    pub fn version(&self) -> &str {
        &self.about.version
    }

    pub fn activate(&self, entry: HubEntry, presenter: &mut dyn ModalPresenter) {
        match entry {
            HubEntry::Category(category) => self.open_category(category, presenter),
            HubEntry::About => self.show_about(presenter),
            HubEntry::Support => self.show_support(presenter),
        }
    }

    pub fn open_category(&self, category: SettingsCategory, presenter: &mut dyn ModalPresenter) {
        presenter.present_panel(category, &self.dialog_tag);
    }

    pub fn show_about(&self, presenter: &mut dyn ModalPresenter) {
        presenter.present_info(self.about.clone(), &self.dialog_tag);
    }

    pub fn show_support(&self, presenter: &mut dyn ModalPresenter) {
        presenter.present_confirmation(Confirmation {
            title: "Support".to_string(),
            message: "Enjoying the launcher? Star the project or buy the developer a coffee."
                .to_string(),
            actions: vec![
                DialogAction {
                    key: 's',
                    label: "Star".to_string(),
                    url: self.links.star.clone(),
                },
                DialogAction {
                    key: 'd',
                    label: "Donate".to_string(),
                    url: self.links.donate.clone(),
                },
            ],
        });
    }

    /// 关闭弹窗后打开按钮对应的链接
    pub fn follow_link(
        &self,
        action: &DialogAction,
        presenter: &mut dyn ModalPresenter,
        opener: &mut dyn LinkOpener,
    ) {
        presenter.dismiss();
        opener.open(&action.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::RecordingLinkOpener;
    use crate::modal::{Modal, ModalHost};
    use pretty_assertions::assert_eq;

    fn hub() -> SettingsHub {
        SettingsHub::new("sheet", SupportLinks::default(), AboutInfo::current())
    }

    #[test]
    fn test_entries_cover_categories_then_dialogs() {
        let entries = hub().entries().to_vec();
        assert_eq!(entries.len(), 9);
        assert_eq!(entries[0], HubEntry::Category(SettingsCategory::TimeDate));
        assert_eq!(entries[7], HubEntry::About);
        assert_eq!(entries[8], HubEntry::Support);
    }

    #[test]
    fn test_each_category_opens_its_panel() {
        let hub = hub();
        for category in SettingsCategory::ALL {
            let mut host = ModalHost::default();
            hub.activate(HubEntry::Category(category), &mut host);
            assert_eq!(
                host.current(),
                Some(&Modal::Panel {
                    category,
                    tag: "sheet".to_string()
                })
            );
        }
    }

    #[test]
    fn test_about_shows_version() {
        let hub = hub();
        let mut host = ModalHost::default();
        hub.show_about(&mut host);
        match host.current() {
            Some(Modal::Info { info, .. }) => {
                assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
                assert_eq!(hub.version(), info.version);
            }
            other => panic!("expected info modal, got {other:?}"),
        }
    }

    #[test]
    fn test_support_actions_open_links_and_dismiss() {
        let hub = hub();
        let links = SupportLinks::default();
        let opener = RecordingLinkOpener::default();

        for (key, url) in [('s', &links.star), ('d', &links.donate)] {
            let mut host = ModalHost::default();
            hub.show_support(&mut host);
            let action = match host.current() {
                Some(Modal::Confirmation(c)) => {
                    assert_eq!(c.actions.len(), 2);
                    c.action_for_key(key).cloned().unwrap()
                }
                other => panic!("expected confirmation, got {other:?}"),
            };

            hub.follow_link(&action, &mut host, &mut opener.clone());
            assert!(!host.is_open());
            assert_eq!(opener.opened.borrow().last(), Some(url));
        }
        assert_eq!(opener.opened.borrow().len(), 2);
    }
}
