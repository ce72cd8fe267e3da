use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 待办事项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Local>,
}

impl TodoItem {
    /// 由用户输入创建，输入去除首尾空白后为空时返回 None
    pub fn from_input(input: &str) -> Option<Self> {
        let name = input.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: Local::now(),
        })
    }
}

/// TOML文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoListData {
    pub meta: ListMeta,
    #[serde(default)]
    pub todos: Vec<TodoItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMeta {
    pub version: String,
    pub created_at: DateTime<Local>,
    pub last_modified: DateTime<Local>,
}

impl Default for TodoListData {
    fn default() -> Self {
        let now = Local::now();
        Self {
            meta: ListMeta {
                version: "1.0".to_string(),
                created_at: now,
                last_modified: now,
            },
            todos: Vec::new(),
        }
    }
}

/// 设置分类，每一项对应一个外部设置面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsCategory {
    TimeDate,
    Weather,
    Todo,
    Apps,
    Appearance,
    More,
    Advanced,
}

impl SettingsCategory {
    /// 菜单顺序
    pub const ALL: [SettingsCategory; 7] = [
        SettingsCategory::TimeDate,
        SettingsCategory::Weather,
        SettingsCategory::Todo,
        SettingsCategory::Apps,
        SettingsCategory::Appearance,
        SettingsCategory::More,
        SettingsCategory::Advanced,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SettingsCategory::TimeDate => "Time & Date",
            SettingsCategory::Weather => "Weather",
            SettingsCategory::Todo => "To-do",
            SettingsCategory::Apps => "Apps",
            SettingsCategory::Appearance => "Appearance",
            SettingsCategory::More => "More",
            SettingsCategory::Advanced => "Advanced",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            SettingsCategory::TimeDate => "Clock format, date format and alignment",
            SettingsCategory::Weather => "City, temperature unit and visibility",
            SettingsCategory::Todo => "Number of reminders shown and lock",
            SettingsCategory::Apps => "App drawer layout and hidden apps",
            SettingsCategory::Appearance => "Theme, wallpaper and fonts",
            SettingsCategory::More => "Gestures and miscellaneous options",
            SettingsCategory::Advanced => "Backup, restore and reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_input_trims() {
        let item = TodoItem::from_input("  Buy milk \n").unwrap();
        assert_eq!(item.name, "Buy milk");
        assert!(!item.id.is_empty());
    }

    #[test]
    fn test_from_input_rejects_blank() {
        assert!(TodoItem::from_input("").is_none());
        assert!(TodoItem::from_input("   \t").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = TodoItem::from_input("A").unwrap();
        let b = TodoItem::from_input("A").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_category_menu_order() {
        assert_eq!(SettingsCategory::ALL.len(), 7);
        assert_eq!(SettingsCategory::ALL[0], SettingsCategory::TimeDate);
        assert_eq!(SettingsCategory::ALL[6].title(), "Advanced");
    }
}
