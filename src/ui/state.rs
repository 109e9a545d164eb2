//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::config::QuantityPolicy;
use crate::models::{Item, ShoppingList};

/// 应用状态
pub struct App {
    pub list: ShoppingList,
    pub selected_index: usize,
    pub show_dialog: bool,
    pub draft_name: String,
    pub draft_quantity: String,
    pub input_field: InputField, // 对话框与编辑行共用的焦点字段
    pub editor: RowEditor,
    pub message: Option<String>,
    pub quantity_policy: QuantityPolicy,
}

/// 应用模式（由状态推导，不单独存储）
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    AddingItem,
    EditingItem(u32), // 正在编辑的条目 ID
}

/// 输入字段类型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputField {
    Name,
    Quantity,
}

impl InputField {
    pub fn toggle(self) -> Self {
        match self {
            InputField::Name => InputField::Quantity,
            InputField::Quantity => InputField::Name,
        }
    }
}

/// 行内编辑器的输入缓冲
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowEditor {
    pub name: String,
    pub quantity: String,
}

impl RowEditor {
    pub fn seeded_from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(quantity_policy: QuantityPolicy) -> Self {
        Self {
            list: ShoppingList::new(),
            selected_index: 0,
            show_dialog: false,
            draft_name: String::new(),
            draft_quantity: String::new(),
            input_field: InputField::Name,
            editor: RowEditor::default(),
            message: None,
            quantity_policy,
        }
    }

    /// 当前模式：对话框优先，其次是编辑中的行
    pub fn mode(&self) -> AppMode {
        if self.show_dialog {
            AppMode::AddingItem
        } else if let Some(item) = self.list.editing_item() {
            AppMode::EditingItem(item.id)
        } else {
            AppMode::Normal
        }
    }

    /// 获取当前选中的条目
    pub fn selected_item(&self) -> Option<&Item> {
        self.list.get(self.selected_index)
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        if self.list.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.list.len() {
            self.selected_index = self.list.len() - 1;
        }
    }

    /// 当前获得焦点的输入缓冲
    pub fn active_buffer(&mut self) -> Option<&mut String> {
        match (self.mode(), self.input_field) {
            (AppMode::AddingItem, InputField::Name) => Some(&mut self.draft_name),
            (AppMode::AddingItem, InputField::Quantity) => Some(&mut self.draft_quantity),
            (AppMode::EditingItem(_), InputField::Name) => Some(&mut self.editor.name),
            (AppMode::EditingItem(_), InputField::Quantity) => Some(&mut self.editor.quantity),
            (AppMode::Normal, _) => None,
        }
    }
}
