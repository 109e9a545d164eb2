use thiserror::Error;

/// 用户输入错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("item name is blank")]
    BlankName,
    #[error("invalid quantity: {0:?}")]
    InvalidQuantity(String),
}
