//! 键索引
//!
//! 用户键与顶点 ID 的双向映射，正反两个方向同步更新

use super::vertex::VertexId;
use slotmap::SecondaryMap;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// 键索引
#[derive(Debug, Clone)]
pub struct KeyIndex<K, S = RandomState> {
    /// 键到顶点 ID 的映射
    key_to_id: HashMap<K, VertexId, S>,
    /// 顶点 ID 到键的映射
    id_to_key: SecondaryMap<VertexId, K>,
}

impl<K, S> KeyIndex<K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// 创建新索引
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            key_to_id: HashMap::with_capacity_and_hasher(capacity, hasher),
            id_to_key: SecondaryMap::with_capacity(capacity),
        }
    }

    /// 登记键，返回该键原来对应的顶点
    pub fn insert(&mut self, key: K, id: VertexId) -> Option<VertexId> {
        let previous = self.key_to_id.insert(key.clone(), id);
        if let Some(old) = previous {
            self.id_to_key.remove(old);
        }
        self.id_to_key.insert(id, key);
        previous
    }

    /// 通过键查找顶点
    pub fn get(&self, key: &K) -> Option<VertexId> {
        self.key_to_id.get(key).copied()
    }

    /// 通过顶点查找键
    pub fn key_of(&self, id: VertexId) -> Option<&K> {
        self.id_to_key.get(id)
    }

    /// 移除键
    pub fn remove(&mut self, key: &K) -> Option<VertexId> {
        let id = self.key_to_id.remove(key)?;
        self.id_to_key.remove(id);
        Some(id)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.key_to_id.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.key_to_id.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, VertexId)> + '_ {
        self.key_to_id.iter().map(|(k, &id)| (k, id))
    }

    pub fn clear(&mut self) {
        self.key_to_id.clear();
        self.id_to_key.clear();
    }
}
