use crate::error::InputError;

/// 购物清单条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u32, // 创建时为 len + 1，删除后再添加可能重复
    pub name: String,
    pub quantity: i32,
    pub is_editing: bool,
}

impl Item {
    pub fn new(id: u32, name: String, quantity: i32) -> Self {
        Self {
            id,
            name,
            quantity,
            is_editing: false,
        }
    }
}

/// 解析数量文本（去除首尾空白），范围为 32 位有符号整数
pub fn parse_quantity(text: &str) -> Result<i32, InputError> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| InputError::InvalidQuantity(text.to_string()))
}

/// 解析数量文本，失败时回退为 0
pub fn parse_quantity_or_zero(text: &str) -> i32 {
    parse_quantity(text).unwrap_or(0)
}

/// 购物清单（按插入顺序）
///
/// 不变量：任意时刻至多一个条目处于编辑状态。
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<Item>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// 按 ID 线性查找，返回第一个匹配的下标
    pub fn find_index(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// 当前处于编辑状态的条目
    pub fn editing_item(&self) -> Option<&Item> {
        self.items.iter().find(|item| item.is_editing)
    }

    /// 添加新条目，返回分配的 ID
    pub fn add_item(&mut self, name: String, quantity: i32) -> u32 {
        let id = self.items.len() as u32 + 1;
        self.items.push(Item::new(id, name, quantity));
        id
    }

    /// 进入编辑状态
    ///
    /// 只有第一个匹配 `id` 的条目被标记，其余全部清除。ID 不存在时返回 false，
    /// 此时所有条目的编辑标记都会被清除。
    pub fn begin_edit(&mut self, id: u32) -> bool {
        let target = self.find_index(id);
        for (i, item) in self.items.iter_mut().enumerate() {
            item.is_editing = Some(i) == target;
        }
        target.is_some()
    }

    /// 保存编辑结果
    pub fn commit_edit(&mut self, id: u32, name: String, quantity: i32) -> bool {
        let Some(index) = self.find_index(id) else {
            return false;
        };

        self.items.iter_mut().for_each(|item| item.is_editing = false);

        let item = &mut self.items[index];
        item.name = name;
        item.quantity = quantity;
        true
    }

    /// 删除第一个结构相等的条目
    pub fn delete_item(&mut self, item: &Item) -> Option<Item> {
        let index = self.items.iter().position(|it| it == item)?;
        Some(self.items.remove(index))
    }
}
