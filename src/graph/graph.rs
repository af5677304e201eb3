//! 图数据结构
//!
//! 邻接表实现：顶点和边都存放在图自身的代数槽位表中，
//! 彼此只通过 ID 引用。

use super::edge::{Edge, EdgeId};
use super::index::KeyIndex;
use super::vertex::{Vertex, VertexId};
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::metrics::{GraphStats, StatsSnapshot};
use slotmap::SlotMap;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use tracing::{debug, trace, warn};

/// 无向图
///
/// `K` 是顶点键，`V` 是顶点数据，`E` 是边数据，`S` 是键索引使用的哈希器。
///
/// 容器不检查重复：同一对顶点之间可以有多条平行边；
/// 对已存在的键再次调用 [`Graph::add_vertex`] 不会修改图。
#[derive(Debug, Clone)]
pub struct Graph<K, V, E, S = RandomState> {
    /// 顶点存储
    vertices: SlotMap<VertexId, Vertex<V>>,
    /// 边存储
    edges: SlotMap<EdgeId, Edge<E>>,
    /// 键索引
    index: KeyIndex<K, S>,
    /// 顶点数量
    size: usize,
    /// 变更统计
    stats: GraphStats,
}

impl<K, V, E> Graph<K, V, E, RandomState>
where
    K: Eq + Hash + Clone,
{
    /// 创建空图
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// 创建空图，并为预期的顶点数预留空间
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self::with_capacity_and_hasher(vertex_count, RandomState::new())
    }

    /// 按配置创建空图
    pub fn with_config(config: &GraphConfig) -> Self {
        Self::with_capacities(config.vertex_capacity, config.edge_capacity, RandomState::new())
    }
}

impl<K, V, E, S> Default for Graph<K, V, E, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, E, S> Graph<K, V, E, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacities(0, 0, hasher)
    }

    pub fn with_capacity_and_hasher(vertex_count: usize, hasher: S) -> Self {
        Self::with_capacities(vertex_count, 0, hasher)
    }

    fn with_capacities(vertex_count: usize, edge_count: usize, hasher: S) -> Self {
        Self {
            vertices: SlotMap::with_capacity_and_key(vertex_count),
            edges: SlotMap::with_capacity_and_key(edge_count),
            index: KeyIndex::with_capacity_and_hasher(vertex_count, hasher),
            size: 0,
            stats: GraphStats::new(),
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 键已存在时图保持不变（原顶点及其关联边均保留），
    /// 新数据原样返回给调用方；调用方不应依赖这一行为。
    pub fn add_vertex(&mut self, key: K, data: V) -> Option<V> {
        if self.index.contains_key(&key) {
            warn!("重复的顶点键，忽略插入");
            self.stats.record_duplicate_key();
            return Some(data);
        }

        let id = self.vertices.insert(Vertex::new(data));
        let previous = self.index.insert(key, id);
        debug_assert!(previous.is_none());

        self.size += 1;
        self.stats.record_vertex_insert();
        debug_assert_eq!(self.size, self.index.len());
        trace!(vertices = self.size, "添加顶点");
        None
    }

    /// 获取顶点
    pub fn get_vertex(&self, key: &K) -> Result<&Vertex<V>> {
        self.vertex(self.vertex_id(key)?)
    }

    /// 获取可变顶点（只能修改顶点数据）
    pub fn get_vertex_mut(&mut self, key: &K) -> Result<&mut Vertex<V>> {
        let id = self.vertex_id(key)?;
        self.vertex_mut(id)
    }

    /// 通过键获取顶点 ID
    pub fn vertex_id(&self, key: &K) -> Result<VertexId> {
        self.index.get(key).ok_or(Error::VertexNotFound)
    }

    /// 通过 ID 获取顶点
    pub fn vertex(&self, id: VertexId) -> Result<&Vertex<V>> {
        self.vertices.get(id).ok_or(Error::VertexNotFound)
    }

    /// 通过 ID 获取可变顶点
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex<V>> {
        self.vertices.get_mut(id).ok_or(Error::VertexNotFound)
    }

    /// 反查顶点的键
    pub fn get_key(&self, id: VertexId) -> Result<&K> {
        self.index.key_of(id).ok_or(Error::VertexNotFound)
    }

    /// 顶点数量
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn vertex_count(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn contains_vertex(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// 删除顶点及其全部关联边，返回顶点数据
    pub fn remove_vertex(&mut self, key: &K) -> Result<V> {
        let id = self.index.remove(key).ok_or(Error::VertexNotFound)?;
        let dropped = self.detach_all(id);
        let vertex = self.vertices.remove(id).ok_or(Error::VertexNotFound)?;

        self.size -= 1;
        self.stats.record_vertex_remove();
        debug_assert_eq!(self.size, self.index.len());
        debug!(dropped_edges = dropped, vertices = self.size, "删除顶点");

        Ok(vertex.into_data())
    }

    /// 逐条弹出顶点的关联边，并从另一端点的列表中交换删除
    fn detach_all(&mut self, id: VertexId) -> usize {
        let mut dropped = 0;

        while let Some(edge_id) = self.vertices.get_mut(id).and_then(|v| v.pop_edge()) {
            let Some(edge) = self.edges.remove(edge_id) else {
                continue;
            };
            if let Some(other) = edge.other(id).and_then(|o| self.vertices.get_mut(o)) {
                other.detach(edge_id);
            }
            dropped += 1;
        }

        self.stats.record_edge_remove(dropped);
        dropped
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 两个键必须不同且都已存在。不检查平行边。
    pub fn add_edge(&mut self, key_0: &K, key_1: &K, data: E) -> Result<EdgeId> {
        if key_0 == key_1 {
            return Err(Error::InvalidArgument("不允许自环"));
        }

        let v0 = self.vertex_id(key_0)?;
        let v1 = self.vertex_id(key_1)?;

        let id = self.edges.insert(Edge::new([v0, v1], data));
        for v in [v0, v1] {
            if let Some(vertex) = self.vertices.get_mut(v) {
                vertex.attach(id);
            }
        }

        self.stats.record_edge_insert();
        trace!(edges = self.edges.len(), "添加边");

        Ok(id)
    }

    /// 获取连接两个顶点的边
    ///
    /// 存在平行边时返回 `key_0` 关联边列表中的第一条匹配。
    pub fn get_edge(&self, key_0: &K, key_1: &K) -> Result<&Edge<E>> {
        self.edge(self.edge_id(key_0, key_1)?)
    }

    pub fn get_edge_mut(&mut self, key_0: &K, key_1: &K) -> Result<&mut Edge<E>> {
        let id = self.edge_id(key_0, key_1)?;
        self.edge_mut(id)
    }

    /// 查找连接两个顶点的边 ID，线性扫描 `key_0` 的关联边
    pub fn edge_id(&self, key_0: &K, key_1: &K) -> Result<EdgeId> {
        if key_0 == key_1 {
            return Err(Error::InvalidArgument("不允许自环"));
        }

        let v0 = self.vertex_id(key_0)?;
        let v1 = self.vertex_id(key_1)?;

        self.vertex(v0)?
            .edges()
            .iter()
            .copied()
            .find(|&e| self.edges.get(e).is_some_and(|edge| edge.other(v0) == Some(v1)))
            .ok_or(Error::EdgeNotFound)
    }

    /// 通过 ID 获取边
    pub fn edge(&self, id: EdgeId) -> Result<&Edge<E>> {
        self.edges.get(id).ok_or(Error::EdgeNotFound)
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut Edge<E>> {
        self.edges.get_mut(id).ok_or(Error::EdgeNotFound)
    }

    pub fn contains_edge(&self, key_0: &K, key_1: &K) -> bool {
        self.edge_id(key_0, key_1).is_ok()
    }

    /// 边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 删除连接两个顶点的边，返回边数据
    pub fn remove_edge(&mut self, key_0: &K, key_1: &K) -> Result<E> {
        let id = self.edge_id(key_0, key_1)?;
        self.remove_edge_by_id(id)
    }

    /// 通过 ID 删除边
    pub fn remove_edge_by_id(&mut self, id: EdgeId) -> Result<E> {
        let edge = self.edges.remove(id).ok_or(Error::EdgeNotFound)?;
        for v in edge.vertices() {
            if let Some(vertex) = self.vertices.get_mut(v) {
                vertex.detach(id);
            }
        }

        self.stats.record_edge_remove(1);
        trace!(edges = self.edges.len(), "删除边");

        Ok(edge.into_data())
    }

    // ==================== 邻居查询 ====================

    /// 顶点的度数
    pub fn degree(&self, key: &K) -> Result<usize> {
        Ok(self.get_vertex(key)?.degree())
    }

    /// 邻居的键，每条关联边产生一项（平行边会重复）
    pub fn neighbors<'a>(&'a self, key: &K) -> Result<impl Iterator<Item = &'a K> + 'a> {
        let id = self.vertex_id(key)?;
        Ok(self.incident(id)?.filter_map(move |(_, edge)| {
            let other = edge.other(id)?;
            self.index.key_of(other)
        }))
    }

    /// 顶点的关联边
    pub fn incident_edges<'a>(
        &'a self,
        key: &K,
    ) -> Result<impl Iterator<Item = (EdgeId, &'a Edge<E>)> + 'a> {
        self.incident(self.vertex_id(key)?)
    }

    /// 两个顶点之间的全部平行边
    pub fn edges_between<'a>(
        &'a self,
        key_0: &K,
        key_1: &K,
    ) -> Result<impl Iterator<Item = (EdgeId, &'a Edge<E>)> + 'a> {
        if key_0 == key_1 {
            return Err(Error::InvalidArgument("不允许自环"));
        }

        let v0 = self.vertex_id(key_0)?;
        let v1 = self.vertex_id(key_1)?;
        Ok(self
            .incident(v0)?
            .filter(move |(_, edge)| edge.other(v0) == Some(v1)))
    }

    fn incident(&self, id: VertexId) -> Result<impl Iterator<Item = (EdgeId, &Edge<E>)> + '_> {
        let vertex = self.vertex(id)?;
        Ok(vertex
            .edges()
            .iter()
            .filter_map(move |&e| self.edges.get(e).map(|edge| (e, edge))))
    }

    // ==================== 遍历 ====================

    /// 全部键
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.index.iter().map(|(k, _)| k)
    }

    /// 全部顶点
    pub fn vertices(&self) -> impl Iterator<Item = (&K, &Vertex<V>)> + '_ {
        self.entries().map(|(k, _, v)| (k, v))
    }

    pub(super) fn entries(&self) -> impl Iterator<Item = (&K, VertexId, &Vertex<V>)> + '_ {
        self.index
            .iter()
            .filter_map(|(k, id)| self.vertices.get(id).map(|v| (k, id, v)))
    }

    /// 全部边
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<E>)> + '_ {
        self.edges.iter()
    }

    /// 清空图，统计计数保留
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.index.clear();
        self.size = 0;
        debug!("清空图");
    }

    // ==================== 统计 ====================

    pub fn stats(&self) -> StatsSnapshot {
        let max_degree = self.vertices.values().map(Vertex::degree).max().unwrap_or(0);
        self.stats.snapshot(self.size, self.edges.len(), max_degree)
    }
}
