use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// 添加对话框对无法解析的数量的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuantityPolicy {
    #[default]
    Strict, // 拒绝添加，对话框保持打开
    Lenient, // 回退为 0
}

/// 配置文件结构 (config.toml)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub quantity_policy: QuantityPolicy,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quantity_policy: QuantityPolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// 默认配置文件路径 (~/.config/shoplist/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shoplist").join("config.toml"))
    }

    /// 从 TOML 文件加载配置，文件不存在时使用默认值
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 实际使用的数量策略，`--lenient-quantity` 优先于配置文件
    pub fn quantity_policy(&self, lenient_flag: bool) -> QuantityPolicy {
        if lenient_flag {
            QuantityPolicy::Lenient
        } else {
            self.quantity_policy
        }
    }
}
