use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Error, Result};
use crate::models::{TodoItem, TodoListData};

/// 待办事项的本地存储
///
/// 所有调用同步完成，返回时数据已落盘。
pub trait LocalStore {
    /// 按存储顺序返回全部事项
    fn list(&self) -> Result<Vec<TodoItem>>;

    fn add(&mut self, item: TodoItem) -> Result<()>;

    /// 删除单个事项，返回是否确实删除了
    fn delete(&mut self, id: &str) -> Result<bool>;

    fn delete_all(&mut self) -> Result<()>;

    /// 至少存在一个事项
    fn exists(&self) -> Result<bool> {
        Ok(!self.list()?.is_empty())
    }
}

/// 基于TOML文件的存储
#[derive(Debug)]
pub struct TomlStore {
    path: PathBuf,
    data: TodoListData,
}

impl TomlStore {
    /// 从TOML文件加载，文件不存在时视为空列表
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|source| Error::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            TodoListData::default()
        };

        tracing::debug!(path = %path.display(), count = data.todos.len(), "to-do store opened");
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 在副本上修改并写入TOML文件，写入成功后才替换内存中的数据
    fn commit(&mut self, change: impl FnOnce(&mut TodoListData)) -> Result<()> {
        let mut data = self.data.clone();
        change(&mut data);
        data.meta.last_modified = Local::now();
        let content = toml::to_string_pretty(&data)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;

        self.data = data;
        Ok(())
    }
}

impl LocalStore for TomlStore {
    fn list(&self) -> Result<Vec<TodoItem>> {
        Ok(self.data.todos.clone())
    }

    fn add(&mut self, item: TodoItem) -> Result<()> {
        let id = item.id.clone();
        self.commit(|data| data.todos.push(item))?;
        tracing::info!(%id, "to-do added");
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        if !self.data.todos.iter().any(|item| item.id == id) {
            return Ok(false);
        }
        self.commit(|data| data.todos.retain(|item| item.id != id))?;
        tracing::info!(id, "to-do deleted");
        Ok(true)
    }

    fn delete_all(&mut self) -> Result<()> {
        let count = self.data.todos.len();
        self.commit(|data| data.todos.clear())?;
        tracing::info!(count, "all to-dos deleted");
        Ok(())
    }

    fn exists(&self) -> Result<bool> {
        Ok(!self.data.todos.is_empty())
    }
}

/// 内存存储，仅用于测试
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub items: Vec<TodoItem>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            items: names
                .iter()
                .filter_map(|name| TodoItem::from_input(name))
                .collect(),
        }
    }
}

#[cfg(test)]
impl LocalStore for MemoryStore {
    fn list(&self) -> Result<Vec<TodoItem>> {
        Ok(self.items.clone())
    }

    fn add(&mut self, item: TodoItem) -> Result<()> {
        self.items.push(item);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        Ok(self.items.len() != before)
    }

    fn delete_all(&mut self) -> Result<()> {
        self.items.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(store: &dyn LocalStore) -> Vec<String> {
        store.list().unwrap().into_iter().map(|t| t.name).collect()
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlStore::open(dir.path().join("todos.toml")).unwrap();
        assert!(store.list().unwrap().is_empty());
        assert!(!store.exists().unwrap());
    }

    #[test]
    fn test_add_persists_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("todos.toml");

        let mut store = TomlStore::open(&path).unwrap();
        store.add(TodoItem::from_input("A").unwrap()).unwrap();
        store.add(TodoItem::from_input("B").unwrap()).unwrap();
        assert!(path.exists());

        let reopened = TomlStore::open(&path).unwrap();
        assert_eq!(names(&reopened), vec!["A", "B"]);
        assert!(reopened.exists().unwrap());
    }

    #[test]
    fn test_delete_one_and_all() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.toml");

        let mut store = TomlStore::open(&path).unwrap();
        let a = TodoItem::from_input("A").unwrap();
        let a_id = a.id.clone();
        store.add(a).unwrap();
        store.add(TodoItem::from_input("B").unwrap()).unwrap();

        assert!(store.delete(&a_id).unwrap());
        assert!(!store.delete(&a_id).unwrap());
        assert_eq!(names(&TomlStore::open(&path).unwrap()), vec!["B"]);

        store.delete_all().unwrap();
        assert!(TomlStore::open(&path).unwrap().list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_all_on_empty_store_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TomlStore::open(dir.path().join("todos.toml")).unwrap();
        store.delete_all().unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_created_at_preserved_across_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.toml");

        let mut store = TomlStore::open(&path).unwrap();
        store.add(TodoItem::from_input("A").unwrap()).unwrap();
        let created = TomlStore::open(&path).unwrap().data.meta.created_at;

        let mut store = TomlStore::open(&path).unwrap();
        store.add(TodoItem::from_input("B").unwrap()).unwrap();
        assert_eq!(TomlStore::open(&path).unwrap().data.meta.created_at, created);
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        match TomlStore::open(&path) {
            Err(Error::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_write_keeps_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "").unwrap();

        let mut store = TomlStore::open(blocker.join("todos.toml")).unwrap();
        assert!(store.add(TodoItem::from_input("A").unwrap()).is_err());
        assert!(store.list().unwrap().is_empty());
        assert!(!store.exists().unwrap());
    }

    #[test]
    fn test_failed_delete_all_keeps_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.toml");
        let mut store = TomlStore::open(&path).unwrap();
        store.add(TodoItem::from_input("A").unwrap()).unwrap();

        // 目标路径被目录占据，写入失败
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(store.delete_all().is_err());
        assert_eq!(names(&store), vec!["A"]);
    }

    #[test]
    fn test_memory_store_exists_default() {
        let store = MemoryStore::with_names(&["A", " "]);
        assert_eq!(names(&store), vec!["A"]);
        assert!(store.exists().unwrap());
        assert!(!MemoryStore::default().exists().unwrap());
    }
}
