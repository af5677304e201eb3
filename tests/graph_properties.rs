//! 图容器行为测试

use adjgraph::{ErrorKind, Graph, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

type IntGraph = Graph<u32, u32, u32>;

/// 检查关联边列表与边存储的一致性
fn assert_consistent(graph: &IntGraph) {
    let mut incidences = 0;

    for (key, vertex) in graph.vertices() {
        let id = graph.vertex_id(key).unwrap();
        assert_eq!(graph.get_key(id).unwrap(), key);

        for &edge_id in vertex.edges() {
            let edge = graph.edge(edge_id).expect("关联列表中的边必须存在");
            assert!(edge.is_incident(id));
            let other = edge.other(id).unwrap();
            assert_ne!(other, id);
            assert!(graph.vertex(other).unwrap().edges().contains(&edge_id));
        }
        incidences += vertex.degree();
    }

    assert_eq!(incidences, graph.edge_count() * 2);
    assert_eq!(graph.vertices().count(), graph.size());
}

#[test]
fn test_distinct_keys_size_and_payload() {
    let mut graph = IntGraph::new();
    for k in 0..100 {
        assert!(graph.add_vertex(k, k * 10).is_none());
    }

    assert_eq!(graph.size(), 100);
    for k in 0..100 {
        assert_eq!(*graph.get_vertex(&k).unwrap().data(), k * 10);
    }
}

#[test]
fn test_edge_symmetry() {
    let mut graph = IntGraph::new();
    graph.add_vertex(1, 0);
    graph.add_vertex(2, 0);
    graph.add_edge(&1, &2, 99).unwrap();

    assert_eq!(*graph.get_edge(&1, &2).unwrap().data(), 99);
    assert_eq!(*graph.get_edge(&2, &1).unwrap().data(), 99);
    assert_eq!(graph.edge_id(&1, &2).unwrap(), graph.edge_id(&2, &1).unwrap());
}

#[test]
fn test_self_loop_rejected() {
    let mut graph = IntGraph::new();
    graph.add_vertex(1, 0);

    for k in [1, 42] {
        assert_eq!(graph.add_edge(&k, &k, 7).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_remove_edge_then_get() {
    let mut graph = IntGraph::new();
    graph.add_vertex(1, 0);
    graph.add_vertex(2, 0);
    graph.add_edge(&1, &2, 5).unwrap();

    assert_eq!(graph.remove_edge(&1, &2).unwrap(), 5);
    assert_eq!(graph.get_edge(&1, &2).unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_remove_vertex_cleans_neighbor() {
    let mut graph = IntGraph::new();
    graph.add_vertex(1, 0);
    graph.add_vertex(2, 0);
    let edge = graph.add_edge(&1, &2, 0).unwrap();

    graph.remove_vertex(&1).unwrap();

    assert_eq!(graph.get_vertex(&1).unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(graph.get_edge(&1, &2).unwrap_err().kind(), ErrorKind::NotFound);
    assert!(!graph.get_vertex(&2).unwrap().edges().contains(&edge));
    assert_eq!(graph.size(), 1);
    assert_consistent(&graph);
}

#[test]
fn test_remove_vertex_of_degree_k() {
    let mut graph = IntGraph::new();
    graph.add_vertex(0, 0);
    for k in 1..=6 {
        graph.add_vertex(k, 0);
        graph.add_edge(&0, &k, k).unwrap();
    }
    graph.add_edge(&1, &2, 12).unwrap();
    graph.add_edge(&3, &0, 30).unwrap();

    let degree = graph.degree(&0).unwrap();
    assert_eq!(degree, 7);
    let before = graph.edge_count();

    graph.remove_vertex(&0).unwrap();

    assert_eq!(graph.edge_count(), before - degree);
    assert_eq!(*graph.get_edge(&2, &1).unwrap().data(), 12);
    assert_consistent(&graph);
}

#[test]
fn test_triangle_scenario() {
    let mut graph = IntGraph::new();
    for k in 1..=3 {
        graph.add_vertex(k, k);
    }
    for (a, b) in [(1, 2), (2, 3), (1, 3)] {
        graph.add_edge(&a, &b, a + b).unwrap();
    }

    assert_eq!(graph.size(), 3);
    assert_eq!(*graph.get_edge(&1, &3).unwrap().data(), 4);

    graph.remove_vertex(&2).unwrap();

    assert_eq!(graph.size(), 2);
    assert_eq!(*graph.get_edge(&1, &3).unwrap().data(), 4);
    assert!(graph.get_vertex(&2).unwrap_err().is_not_found());
    assert!(graph.get_edge(&1, &2).unwrap_err().is_not_found());
    assert!(graph.get_edge(&2, &3).unwrap_err().is_not_found());
    assert!(graph.remove_vertex(&2).unwrap_err().is_not_found());
    assert_consistent(&graph);
}

#[test]
fn test_add_remove_round_trip() {
    let mut graph = IntGraph::new();
    for k in 0..4 {
        graph.add_vertex(k, 0);
    }
    graph.add_edge(&0, &1, 1).unwrap();
    graph.add_edge(&0, &2, 2).unwrap();

    let before: HashSet<_> = graph.get_vertex(&0).unwrap().edges().iter().copied().collect();
    let count = graph.edge_count();

    graph.add_edge(&0, &3, 3).unwrap();
    graph.remove_edge(&0, &3).unwrap();

    let after: HashSet<_> = graph.get_vertex(&0).unwrap().edges().iter().copied().collect();
    assert_eq!(before, after);
    assert_eq!(graph.edge_count(), count);
    assert_eq!(graph.degree(&3).unwrap(), 0);
}

#[test]
fn test_stale_vertex_id() {
    let mut graph = IntGraph::new();
    graph.add_vertex(1, 0);
    let id: VertexId = graph.vertex_id(&1).unwrap();

    graph.remove_vertex(&1).unwrap();
    graph.add_vertex(1, 0);

    assert!(graph.get_key(id).unwrap_err().is_not_found());
    assert_ne!(graph.vertex_id(&1).unwrap(), id);
}

#[test]
fn test_random_mutations_stay_consistent() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut graph = IntGraph::with_capacity(32);
    let mut live: Vec<u32> = Vec::new();

    for step in 0..2000u32 {
        match rng.gen_range(0..10) {
            0..=2 => {
                let key = rng.gen_range(0..64);
                if !graph.contains_vertex(&key) {
                    graph.add_vertex(key, step);
                    live.push(key);
                }
            }
            3..=6 if live.len() >= 2 => {
                let a = live[rng.gen_range(0..live.len())];
                let b = live[rng.gen_range(0..live.len())];
                let result = graph.add_edge(&a, &b, step);
                assert_eq!(result.is_err(), a == b);
            }
            7 if !live.is_empty() => {
                let idx = rng.gen_range(0..live.len());
                let key = live.swap_remove(idx);
                let degree = graph.degree(&key).unwrap();
                let edges = graph.edge_count();
                graph.remove_vertex(&key).unwrap();
                assert_eq!(graph.edge_count(), edges - degree);
            }
            8 | 9 if live.len() >= 2 => {
                let a = live[rng.gen_range(0..live.len())];
                let b = live[rng.gen_range(0..live.len())];
                if a != b {
                    let existed = graph.contains_edge(&a, &b);
                    assert_eq!(graph.remove_edge(&a, &b).is_ok(), existed);
                }
            }
            _ => {}
        }

        assert_eq!(graph.size(), live.len());
        if step % 100 == 0 {
            assert_consistent(&graph);
        }
    }

    assert_consistent(&graph);
}
