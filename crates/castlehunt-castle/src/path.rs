//! Breadth-first shortest-path search over a [`RoomGraph`].

use std::collections::VecDeque;

use crate::{RoomGraph, RoomId};

/// Finds a minimum-edge path from `start` to `end`, both ends included.
///
/// Every passage has unit weight. Among several shortest paths the one
/// found first wins, and neighbors are explored in ascending [`RoomId`]
/// order, so the result is deterministic for a given graph.
///
/// Returns `[start]` when `start == end`, and an empty vec when either
/// name is unknown or `end` cannot be reached.
pub fn shortest_path<'g>(
    graph: &'g RoomGraph,
    start: &str,
    end: &str,
) -> Vec<&'g str> {
    let (Some(from), Some(to)) = (graph.room_id(start), graph.room_id(end))
    else {
        return Vec::new();
    };

    bfs(graph, from, to)
        .into_iter()
        .filter_map(|id| graph.name(id))
        .collect()
}

/// BFS over room ids. Empty when `to` is unreachable.
fn bfs(graph: &RoomGraph, from: RoomId, to: RoomId) -> Vec<RoomId> {
    let mut visited = vec![false; graph.len()];
    let mut parent: Vec<Option<RoomId>> = vec![None; graph.len()];
    let mut queue = VecDeque::new();

    visited[from.0] = true;
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            break;
        }
        for next in graph.neighbor_ids(current) {
            if !visited[next.0] {
                visited[next.0] = true;
                parent[next.0] = Some(current);
                queue.push_back(next);
            }
        }
    }

    if !visited[to.0] {
        return Vec::new();
    }

    let mut path = vec![to];
    let mut at = to;
    while let Some(prev) = parent[at.0] {
        path.push(prev);
        at = prev;
    }
    path.reverse();
    path
}
