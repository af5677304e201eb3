//! 图操作统计
//!
//! 记录容器的变更次数，并导出可序列化的快照

use serde::{Deserialize, Serialize};

/// 变更计数
#[derive(Debug, Clone, Default)]
pub struct GraphStats {
    /// 顶点插入数
    vertices_inserted: u64,
    /// 顶点删除数
    vertices_removed: u64,
    /// 被忽略的重复键插入数
    duplicate_keys: u64,
    /// 边插入数
    edges_inserted: u64,
    /// 边删除数（含随顶点删除的边）
    edges_removed: u64,
}

/// 可导出的统计快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub max_degree: usize,

    pub vertices_inserted: u64,
    pub vertices_removed: u64,
    pub duplicate_keys: u64,
    pub edges_inserted: u64,
    pub edges_removed: u64,
}

impl GraphStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_vertex_insert(&mut self) {
        self.vertices_inserted += 1;
    }

    pub(crate) fn record_vertex_remove(&mut self) {
        self.vertices_removed += 1;
    }

    pub(crate) fn record_duplicate_key(&mut self) {
        self.duplicate_keys += 1;
    }

    pub(crate) fn record_edge_insert(&mut self) {
        self.edges_inserted += 1;
    }

    pub(crate) fn record_edge_remove(&mut self, count: usize) {
        self.edges_removed += count as u64;
    }

    /// 生成快照，结构性数据由调用方提供
    pub fn snapshot(&self, vertex_count: usize, edge_count: usize, max_degree: usize) -> StatsSnapshot {
        StatsSnapshot {
            vertex_count,
            edge_count,
            max_degree,
            vertices_inserted: self.vertices_inserted,
            vertices_removed: self.vertices_removed,
            duplicate_keys: self.duplicate_keys,
            edges_inserted: self.edges_inserted,
            edges_removed: self.edges_removed,
        }
    }
}

impl StatsSnapshot {
    /// 导出为 JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
