//! 调试输出
//!
//! 打印每个顶点及其关联边，输出格式不保证稳定

use super::graph::Graph;
use std::fmt;
use std::hash::{BuildHasher, Hash};

impl<K, V, E, S> fmt::Display for Graph<K, V, E, S>
where
    K: Eq + Hash + Clone + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph ({} vertices, {} edges):",
            self.size(),
            self.edge_count()
        )?;

        for (key, id, vertex) in self.entries() {
            writeln!(f, "  Vertex {:?} ({:?}):", key, id)?;

            for (edge_id, edge) in vertex.edges().iter().filter_map(|&e| Some((e, self.edge(e).ok()?))) {
                let [a, b] = edge.vertices();
                match (self.get_key(a), self.get_key(b)) {
                    (Ok(ka), Ok(kb)) => writeln!(f, "    Edge {:?}: {:?} to {:?}", edge_id, ka, kb)?,
                    _ => writeln!(f, "    Edge {:?}: {:?} to {:?}", edge_id, a, b)?,
                }
            }
        }

        Ok(())
    }
}
