use std::cmp::{Ordering, Reverse, max};

use priority_queue::PriorityQueue;
use bit_set::BitSet;

use crate::graph::{Graph, VertexId};
use super::Solution;

#[derive(PartialEq, Eq)]
struct DSatInfo {
    dsat: usize,
    degree: usize,
    /// smallest id first on complete ties
    id: Reverse<VertexId>,
}

impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| self.id.cmp(&other.id))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements a greedy DSATUR algorithm.
    1. choose an uncolored node that sees the most colors (break ties by the largest degree)
    2. add the node to the first color available
    3. mark all its neighbors seeing this color
    4. repeat until a proper coloring is found
*/
pub fn greedy_dsatur(graph:&Graph) -> Solution {
    let n:usize = graph.nb_vertices();
    let mut remaining_vertices:PriorityQueue<VertexId, DSatInfo> = PriorityQueue::new();
    for i in graph.vertices() {
        remaining_vertices.push(i, DSatInfo { dsat:0, degree:graph.degree(i), id:Reverse(i) });
    }
    let mut colors:Vec<Option<usize>> = vec![None ; n]; // colors[v] -> color assigned to vertex v
    let mut adj_colors:Vec<BitSet> = vec![BitSet::default() ; n]; // adj_colors[n] -> colors n sees
    let mut nb_colors:usize = 0;
    // get current vertex
    while let Some((current_vertex,_)) = remaining_vertices.pop() {
        // assign it a color
        let mut color:usize = 0;
        while adj_colors[current_vertex].contains(color) { color += 1; }
        colors[current_vertex] = Some(color);
        nb_colors = max(nb_colors, color+1); // update nb colors
        // update saturation degree information
        for conflict_vertex in graph.neighbors(current_vertex).iter()
        .filter(|conflict_vertex| colors[**conflict_vertex].is_none()) {
            if adj_colors[*conflict_vertex].insert(color) {
                remaining_vertices.change_priority_by(conflict_vertex, |p| { p.dsat += 1; });
            }
        }
    }
    // finished. Solution completed build the solution
    let mut res = vec![vec![] ; nb_colors];
    for (i,c) in colors.iter().enumerate() {
        if let Some(c) = c { res[*c].push(i); }
    }
    res
}




#[cfg(test)]
mod tests {
    use super::*;

    use crate::search::coloring::checker;

    #[test]
    fn test_cycle5_needs_three_colors() {
        let g = Graph::from_file("insts/cycle5.col").unwrap();
        let solution = greedy_dsatur(&g);
        assert_eq!(checker(&g, &solution), Some(3));
    }

    #[test]
    fn test_bipartite_graph_gets_two_colors() {
        // even cycle: DSATUR is exact on bipartite graphs
        let g = Graph::from_edges(6, &[(0,1), (1,2), (2,3), (3,4), (4,5), (5,0)]);
        let solution = greedy_dsatur(&g);
        assert_eq!(checker(&g, &solution), Some(2));
    }

    #[test]
    fn test_complete_graph() {
        let g = Graph::from_file("insts/complete4.col").unwrap();
        assert_eq!(greedy_dsatur(&g).len(), 4);
    }

    #[test]
    fn test_random_instances() {
        for seed in 0..5 {
            let g = Graph::random(60, 0.4, seed);
            let solution = greedy_dsatur(&g);
            assert!(checker(&g, &solution).is_some());
        }
    }
}
