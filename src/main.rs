mod config;
mod error;
mod links;
mod logging;
mod modal;
mod models;
mod screens;
mod storage;
mod ui;

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::AppConfig;
use crate::error::Result;
use crate::links::SystemLinkOpener;
use crate::modal::AboutInfo;
use crate::screens::{SettingsHub, TodoScreen};
use crate::storage::TomlStore;
use crate::ui::{App, render};

fn main() -> Result<()> {
    // 配置 (~/.config/lunar/config.toml)
    let config = match config::config_path() {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };
    let data_dir = config::data_dir()?;
    logging::init(&config.log_path(&data_dir), &config.log_filter)?;

    // 加载待办列表
    let store = TomlStore::open(config.data_path(&data_dir))?;
    tracing::info!(path = %store.path().display(), "starting");

    // 创建应用状态
    let hub = SettingsHub::new(
        config.dialog_tag.clone(),
        config.links.clone(),
        AboutInfo::current(),
    );
    let mut app = App::new(hub, TodoScreen::new(Box::new(store)), Box::new(SystemLinkOpener));

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(error) = &result {
        tracing::error!(%error, "exiting with error");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press && ui::handle_key_event(app, key.code)? {
                break;
            }
        }
    }
    tracing::info!("quit");
    Ok(())
}
