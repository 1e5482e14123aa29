use bit_set::BitSet;

use crate::graph::Graph;
use super::Solution;

/** implements a greedy RLF algorithm. That colors vertices one color at a time
    1. selects the uncolored vertex with the largest degree in the graph and mark it colored
    2. mark its neighbors unreachable
    3. select a reachable vertex that has the largest number of unreachable neighbors
       (ties: the fewest reachable neighbors)
    4. when there are no reachable vertices, start over with a new color
*/
pub fn greedy_rlf(graph:&Graph) -> Solution {
    let n:usize = graph.nb_vertices();
    let mut colored:BitSet = BitSet::with_capacity(n);
    // uncolored_degree[v]: number of uncolored neighbors of v
    let mut uncolored_degree:Vec<usize> = graph.vertices().map(|u| graph.degree(u)).collect();
    let mut res:Solution = Vec::new();
    while colored.len() < n { // add a new color until everything is colored
        let mut unreachable:BitSet = BitSet::with_capacity(n);
        // unreachable_degree[v]: number of neighbors of v made unreachable for this color
        let mut unreachable_degree:Vec<usize> = vec![0 ; n];
        let mut color_class = Vec::new();
        // find not colored and reachable vertex with maximum degree
        loop {
            let candidates = graph.vertices()
                .filter(|v| !colored.contains(*v) && !unreachable.contains(*v));
            let next = if color_class.is_empty() {
                candidates.max_by(|a,b| {
                    uncolored_degree[*a].cmp(&uncolored_degree[*b]).then_with(|| b.cmp(a))
                })
            } else {
                candidates.max_by(|a,b| {
                    unreachable_degree[*a].cmp(&unreachable_degree[*b])
                        .then_with(|| (uncolored_degree[*b] - unreachable_degree[*b]).cmp(
                            &(uncolored_degree[*a] - unreachable_degree[*a])
                        ))
                        .then_with(|| b.cmp(a))
                })
            };
            let current_vertex = match next {
                None => { break; } // no more reachable vertex, stop and add
                Some(v) => v
            };
            colored.insert(current_vertex);
            color_class.push(current_vertex);
            for v in graph.neighbors(current_vertex) {
                uncolored_degree[*v] -= 1; // because current_vertex is now colored
                // mark its neighbors unreachable
                if !colored.contains(*v) && unreachable.insert(*v) {
                    // every vertex that sees v sees a reachable vertex less
                    for w in graph.neighbors(*v) {
                        unreachable_degree[*w] += 1;
                    }
                }
            }
        }
        res.push(color_class);
    }
    res
}




#[cfg(test)]
mod tests {
    use super::*;

    use crate::search::coloring::checker;

    #[test]
    fn test_cycle5() {
        let g = Graph::from_file("insts/cycle5.col").unwrap();
        let solution = greedy_rlf(&g);
        assert_eq!(checker(&g, &solution), Some(3));
    }

    #[test]
    fn test_complete_graph() {
        let g = Graph::from_file("insts/complete4.col").unwrap();
        assert_eq!(greedy_rlf(&g).len(), 4);
    }

    #[test]
    fn test_random_instances() {
        for seed in 0..5 {
            let g = Graph::random(50, 0.5, seed);
            let solution = greedy_rlf(&g);
            assert!(checker(&g, &solution).is_some());
        }
    }
}
