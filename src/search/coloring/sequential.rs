use std::collections::VecDeque;

use bit_set::BitSet;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::graph::{Graph, VertexId};
use super::Solution;

/** colors the vertices in the given order, each with the smallest color not used by its
already colored neighbors. `order` must be a permutation of the vertices.
*/
pub fn first_fit(graph:&Graph, order:&[VertexId]) -> Solution {
    debug_assert_eq!(order.len(), graph.nb_vertices());
    let mut colors:Vec<Option<usize>> = vec![None ; graph.nb_vertices()]; // colors[v] -> color of v
    let mut res:Solution = Vec::new();
    for u in order {
        let adj_colors:BitSet = graph.neighbors(*u).iter()
            .filter_map(|v| colors[*v])
            .collect();
        let mut color:usize = 0;
        while adj_colors.contains(color) { color += 1; }
        colors[*u] = Some(color);
        if color == res.len() { res.push(Vec::new()); }
        res[color].push(*u);
    }
    res
}

/// vertices by decreasing degree (ties: smallest id first)
pub fn largest_first_order(graph:&Graph) -> Vec<VertexId> {
    let mut res:Vec<VertexId> = graph.vertices().collect();
    res.sort_by(|a,b| graph.degree(*b).cmp(&graph.degree(*a))); // stable
    res
}

/// vertices in a random order
pub fn random_order(graph:&Graph, rng:&mut StdRng) -> Vec<VertexId> {
    let mut res:Vec<VertexId> = graph.vertices().collect();
    res.shuffle(rng);
    res
}

/** builds maximal independent sets one after the other: within the remaining vertices,
repeatedly take the vertex of minimum degree (in the graph induced by the candidates) and
discard its neighbors. The vertices are returned set after set.
*/
pub fn independent_set_order(graph:&Graph) -> Vec<VertexId> {
    let n = graph.nb_vertices();
    let mut remaining:BitSet = graph.vertices().collect();
    let mut res = Vec::with_capacity(n);
    while !remaining.is_empty() {
        let mut candidates = remaining.clone();
        loop {
            let next = candidates.iter().min_by_key(|u| {
                graph.neighbors(*u).iter().filter(|w| candidates.contains(**w)).count()
            });
            let v = match next {
                None => break,
                Some(v) => v
            };
            res.push(v);
            remaining.remove(v);
            candidates.remove(v);
            for w in graph.neighbors(v) { candidates.remove(*w); }
        }
    }
    res
}

/** for each connected component (by increasing smallest vertex), its vertices in the order
they are discovered by a breadth-first search */
pub fn bfs_order(graph:&Graph) -> Vec<VertexId> {
    let n = graph.nb_vertices();
    let mut visited = BitSet::with_capacity(n);
    let mut res = Vec::with_capacity(n);
    for source in graph.vertices() {
        if !visited.insert(source) { continue; }
        let mut queue = VecDeque::new();
        queue.push_back(source);
        while let Some(u) = queue.pop_front() {
            res.push(u);
            for v in graph.neighbors(u) {
                if visited.insert(*v) { queue.push_back(*v); }
            }
        }
    }
    res
}

/** for each connected component (by increasing smallest vertex), its vertices in the order
they are discovered by a depth-first search (preorder) */
pub fn dfs_order(graph:&Graph) -> Vec<VertexId> {
    let n = graph.nb_vertices();
    let mut visited = BitSet::with_capacity(n);
    let mut res = Vec::with_capacity(n);
    for source in graph.vertices() {
        if !visited.insert(source) { continue; }
        res.push(source);
        // (vertex, index of the next neighbor to look at)
        let mut stack:Vec<(VertexId,usize)> = vec![(source,0)];
        while let Some((u,i)) = stack.pop() {
            if let Some(v) = graph.neighbors(u).get(i) {
                stack.push((u,i+1));
                if visited.insert(*v) {
                    res.push(*v);
                    stack.push((*v,0));
                }
            }
        }
    }
    res
}
