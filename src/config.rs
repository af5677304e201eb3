//! 图配置
//!
//! 容量提示等构造参数，可从 JSON 加载

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 图构造配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 预期顶点数
    pub vertex_capacity: usize,
    /// 预期边数
    pub edge_capacity: usize,
}

impl GraphConfig {
    pub fn new(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            vertex_capacity,
            edge_capacity,
        }
    }

    /// 从 JSON 字符串解析
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }

    /// 从 JSON 文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
