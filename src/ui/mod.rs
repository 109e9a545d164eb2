//! 购物清单界面
//!
//! MVI 分层：
//! - state.rs: App，持有清单、添加对话框草稿和行内编辑器
//! - view/: 将 App 渲染为一帧，每行按编辑标记在展示/编辑之间切换
//! - actions.rs + input.rs: 按键 -> Action
//! - logic.rs: Action -> 状态变更

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

pub use input::handle_key_event;
pub use state::App;
pub use view::render;
