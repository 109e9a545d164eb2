//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use tracing::{debug, info, warn};

use super::actions::Action;
use super::state::{App, AppMode, InputField, RowEditor};
use crate::config::QuantityPolicy;
use crate::error::InputError;
use crate::models::{parse_quantity, parse_quantity_or_zero};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::OpenAddDialog => self.open_add_dialog(),
            Action::EditSelected => self.start_edit_selected(),
            Action::DeleteSelected => self.delete_selected(),

            Action::NextField => {
                if self.mode() != AppMode::Normal {
                    self.input_field = self.input_field.toggle();
                }
            }

            Action::Cancel => {
                // 编辑行没有取消，只能保存
                if self.mode() == AppMode::AddingItem {
                    self.cancel_add();
                }
            }

            Action::Submit => match self.mode() {
                AppMode::AddingItem => self.submit_add(),
                AppMode::EditingItem(id) => self.save_edit(id),
                AppMode::Normal => {}
            },

            Action::Input(c) => {
                if let Some(buffer) = self.active_buffer() {
                    buffer.push(c);
                }
            }

            Action::DeleteChar => {
                if let Some(buffer) = self.active_buffer() {
                    buffer.pop();
                }
            }
        }
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.list.len() {
            self.selected_index += 1;
        }
    }

    // ============ 添加条目相关 ============

    /// 打开添加对话框
    pub fn open_add_dialog(&mut self) {
        self.show_dialog = true;
        self.input_field = InputField::Name;
        self.message = None;
    }

    /// 确认添加
    ///
    /// 名称为空时静默忽略；数量无法解析时按 `quantity_policy` 处理。
    /// 失败时对话框保持打开，草稿不变。
    pub fn confirm_add(&mut self) -> Result<u32, InputError> {
        if self.draft_name.trim().is_empty() {
            debug!("ignoring add with blank name");
            return Err(InputError::BlankName);
        }

        let quantity = match self.quantity_policy {
            QuantityPolicy::Strict => match parse_quantity(&self.draft_quantity) {
                Ok(quantity) => quantity,
                Err(e) => {
                    warn!("rejected add: {}", e);
                    self.message = Some(e.to_string());
                    return Err(e);
                }
            },
            QuantityPolicy::Lenient => parse_quantity_or_zero(&self.draft_quantity),
        };

        let name = std::mem::take(&mut self.draft_name);
        let id = self.list.add_item(name, quantity);
        info!(id, quantity, "item added");

        self.draft_quantity.clear();
        self.show_dialog = false;
        self.message = Some("Item added".to_string());
        Ok(id)
    }

    /// 对话框中按下 Add：失败时把焦点移到出错的字段
    pub fn submit_add(&mut self) {
        match self.confirm_add() {
            Ok(_) => {}
            Err(InputError::BlankName) => self.input_field = InputField::Name,
            Err(InputError::InvalidQuantity(_)) => self.input_field = InputField::Quantity,
        }
    }

    /// 取消添加，丢弃草稿
    pub fn cancel_add(&mut self) {
        self.show_dialog = false;
        self.draft_name.clear();
        self.draft_quantity.clear();
        self.message = None;
    }

    // ============ 编辑条目相关 ============

    /// 开始编辑选中条目
    pub fn start_edit_selected(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id) {
            self.start_edit(id);
        }
    }

    /// 开始编辑，并用条目当前的值填充编辑器
    pub fn start_edit(&mut self, id: u32) {
        if !self.list.begin_edit(id) {
            return;
        }
        if let Some(item) = self.list.editing_item() {
            self.editor = RowEditor::seeded_from(item);
        }
        self.input_field = InputField::Name;
        self.message = None;
        debug!(id, "editing item");
    }

    /// 保存编辑，数量无法解析时回退为 0
    pub fn save_edit(&mut self, id: u32) {
        let editor = std::mem::take(&mut self.editor);
        let quantity = parse_quantity_or_zero(&editor.quantity);
        if self.list.commit_edit(id, editor.name, quantity) {
            info!(id, quantity, "item updated");
            self.message = Some("Item updated".to_string());
        }
    }

    // ============ 删除条目相关 ============

    /// 删除选中条目
    pub fn delete_selected(&mut self) {
        let Some(item) = self.selected_item().cloned() else {
            return;
        };
        if let Some(removed) = self.list.delete_item(&item) {
            info!(id = removed.id, "item deleted");
            self.message = Some("Item deleted".to_string());
        }
        self.clamp_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    fn add(app: &mut App, name: &str, quantity: &str) {
        app.dispatch(Action::OpenAddDialog);
        type_text(app, name);
        app.dispatch(Action::NextField);
        type_text(app, quantity);
        app.dispatch(Action::Submit);
    }

    #[test]
    fn test_add_closes_dialog_and_clears_drafts() {
        let mut app = App::new(QuantityPolicy::Strict);
        add(&mut app, "Milk", "2");

        assert_eq!(app.list.len(), 1);
        assert_eq!(app.list.items()[0].name, "Milk");
        assert_eq!(app.list.items()[0].quantity, 2);
        assert!(!app.show_dialog);
        assert!(app.draft_name.is_empty());
        assert!(app.draft_quantity.is_empty());
        assert_eq!(app.mode(), AppMode::Normal);
    }

    #[test]
    fn test_blank_name_keeps_dialog_open() {
        let mut app = App::new(QuantityPolicy::Lenient);
        add(&mut app, "   ", "3");

        assert!(app.list.is_empty());
        assert!(app.show_dialog);
        assert_eq!(app.draft_quantity, "3");
        assert_eq!(app.confirm_add(), Err(InputError::BlankName));
    }

    #[test]
    fn test_strict_rejects_bad_quantity() {
        let mut app = App::new(QuantityPolicy::Strict);
        add(&mut app, "Eggs", "a dozen");

        assert!(app.list.is_empty());
        assert!(app.show_dialog);
        assert_eq!(app.draft_name, "Eggs");
        assert!(app.message.as_deref().unwrap_or("").contains("invalid quantity"));
    }

    #[test]
    fn test_failed_add_focuses_offending_field() {
        let mut app = App::new(QuantityPolicy::Strict);
        add(&mut app, "Eggs", "many");
        app.dispatch(Action::NextField);
        assert_eq!(app.input_field, InputField::Name);

        app.dispatch(Action::Submit);
        assert_eq!(app.input_field, InputField::Quantity);

        app.dispatch(Action::NextField);
        while !app.draft_name.is_empty() {
            app.dispatch(Action::DeleteChar);
        }
        app.dispatch(Action::NextField);
        app.dispatch(Action::Submit);
        assert_eq!(app.input_field, InputField::Name);
        assert!(app.show_dialog);
    }

    #[test]
    fn test_negative_quantity_on_add_and_save() {
        let mut app = App::new(QuantityPolicy::Strict);
        add(&mut app, "Milk", "-3");

        assert_eq!(app.list.len(), 1);
        assert_eq!(app.list.items()[0].quantity, -3);
        assert!(!app.show_dialog);

        app.dispatch(Action::EditSelected);
        assert_eq!(app.editor.quantity, "-3");
        app.dispatch(Action::NextField);
        for _ in 0..2 {
            app.dispatch(Action::DeleteChar);
        }
        type_text(&mut app, "-7");
        app.dispatch(Action::Submit);

        assert_eq!(app.list.items()[0].quantity, -7);
        assert_eq!(app.mode(), AppMode::Normal);
    }

    #[test]
    fn test_quantity_beyond_i32_range() {
        let mut app = App::new(QuantityPolicy::Strict);
        add(&mut app, "Rice", "2147483648");
        assert!(app.list.is_empty());
        assert!(app.show_dialog);

        let mut app = App::new(QuantityPolicy::Strict);
        add(&mut app, "Rice", "1");
        app.dispatch(Action::EditSelected);
        app.dispatch(Action::NextField);
        type_text(&mut app, "2147483648"); // "12147483648"
        app.dispatch(Action::Submit);
        assert_eq!(app.list.items()[0].quantity, 0);
    }

    #[test]
    fn test_lenient_defaults_quantity_to_zero() {
        let mut app = App::new(QuantityPolicy::Lenient);
        add(&mut app, "Eggs", "a dozen");

        assert_eq!(app.list.len(), 1);
        assert_eq!(app.list.items()[0].quantity, 0);
        assert!(!app.show_dialog);
    }

    #[test]
    fn test_cancel_discards_drafts() {
        let mut app = App::new(QuantityPolicy::Strict);
        app.dispatch(Action::OpenAddDialog);
        type_text(&mut app, "Bread");
        app.dispatch(Action::Cancel);

        assert!(!app.show_dialog);
        assert!(app.draft_name.is_empty());
        assert!(app.list.is_empty());
    }

    #[test]
    fn test_edit_seeds_editor_and_saves() {
        let mut app = App::new(QuantityPolicy::Strict);
        add(&mut app, "Milk", "2");

        app.dispatch(Action::EditSelected);
        assert_eq!(app.mode(), AppMode::EditingItem(1));
        assert_eq!(app.editor.name, "Milk");
        assert_eq!(app.editor.quantity, "2");

        app.dispatch(Action::NextField);
        app.dispatch(Action::DeleteChar);
        type_text(&mut app, "5");
        app.dispatch(Action::Submit);

        let item = &app.list.items()[0];
        assert_eq!((item.id, item.name.as_str(), item.quantity), (1, "Milk", 5));
        assert!(!item.is_editing);
        assert_eq!(app.mode(), AppMode::Normal);
    }

    #[test]
    fn test_save_with_bad_quantity_defaults_to_zero() {
        let mut app = App::new(QuantityPolicy::Strict);
        add(&mut app, "Milk", "2");
        app.dispatch(Action::EditSelected);
        app.dispatch(Action::NextField);
        type_text(&mut app, "x");
        app.dispatch(Action::Submit);

        assert_eq!(app.list.items()[0].quantity, 0);
    }

    #[test]
    fn test_editing_ignores_cancel_and_navigation() {
        let mut app = App::new(QuantityPolicy::Strict);
        add(&mut app, "A", "1");
        add(&mut app, "B", "1");
        app.dispatch(Action::EditSelected);

        app.dispatch(Action::Cancel);
        assert_eq!(app.mode(), AppMode::EditingItem(1));

        app.dispatch(Action::Submit);
        assert_eq!(app.mode(), AppMode::Normal);
    }

    #[test]
    fn test_delete_selected_clamps_selection() {
        let mut app = App::new(QuantityPolicy::Strict);
        add(&mut app, "A", "1");
        add(&mut app, "B", "2");
        app.dispatch(Action::MoveSelectionDown);
        assert_eq!(app.selected_index, 1);

        app.dispatch(Action::DeleteSelected);
        assert_eq!(app.list.len(), 1);
        assert_eq!(app.list.items()[0].name, "A");
        assert_eq!(app.selected_index, 0);

        app.dispatch(Action::DeleteSelected);
        assert!(app.list.is_empty());
        app.dispatch(Action::DeleteSelected);
        assert!(app.list.is_empty());
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = App::new(QuantityPolicy::Strict);
        app.dispatch(Action::MoveSelectionUp);
        app.dispatch(Action::MoveSelectionDown);
        assert_eq!(app.selected_index, 0);

        add(&mut app, "A", "1");
        add(&mut app, "B", "1");
        for _ in 0..5 {
            app.dispatch(Action::MoveSelectionDown);
        }
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(QuantityPolicy::Strict);
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::MoveSelectionDown));
    }
}
