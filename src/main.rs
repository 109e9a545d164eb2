mod config;
mod error;
mod models;
mod ui;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::ui::{App, render};

#[derive(Parser, Debug)]
#[command(name = "shoplist")]
#[command(version)]
#[command(about = "A terminal shopping list kept in memory")]
struct Args {
    /// Config file (default: ~/.config/shoplist/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat unparsable quantities in the add dialog as 0
    #[arg(long)]
    lenient_quantity: bool,

    /// Log file (default: ~/.local/share/shoplist/shoplist.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// 获取数据目录路径 (~/.local/share/shoplist/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "could not find data directory"))?
        .join("shoplist");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 初始化日志，写入文件（终端由 TUI 占用）
fn init_logging(path: &Path, default_level: &str) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("invalid log level")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.config.or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    let log_path = match args.log_file {
        Some(path) => path,
        None => get_data_dir()?.join("shoplist.log"),
    };
    init_logging(&log_path, &config.log_level)?;

    let policy = config.quantity_policy(args.lenient_quantity);
    tracing::info!(?policy, "starting shoplist");

    // 创建应用状态
    let mut app = App::new(policy);

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

    if let Err(e) = &result {
        tracing::error!("exited with error: {}", e);
    }
    tracing::info!(items = app.list.len(), "shoplist closed");

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = crossterm::event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key) {
                break;
            }
        }
    }
    Ok(())
}
