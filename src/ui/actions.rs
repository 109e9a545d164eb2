//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // 列表操作
    OpenAddDialog,
    EditSelected,
    DeleteSelected,

    // 表单/通用交互
    NextField,
    Cancel,      // Esc
    Submit,      // Enter: 对话框中为 Add，编辑行中为 Save
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
