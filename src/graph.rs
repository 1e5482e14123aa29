use bit_set::BitSet;
use log::info;

use crate::dimacs::{read_from_file, DimacsInstance};
use crate::error::CliqueError;

/** Vertex Id */
pub type VertexId = usize;

/** models an undirected graph (no self loops, no parallel edges). Immutable once built. */
#[derive(Debug, Clone)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph (u < v)
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i (sorted)
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Vec<BitSet>,
    /// id of vertex 0 in the input numbering
    index_base: usize,
}


impl Graph {

    /** constructor using an adjacency list. Self loops are removed, parallel edges merged,
    and the lists are made symmetric. */
    pub fn new(adj_list:Vec<Vec<VertexId>>) -> Self {
        let n = adj_list.len();
        let mut edges = Vec::new();
        for (u,l) in adj_list.iter().enumerate() {
            for v in l {
                if u != *v { edges.push((u.min(*v), u.max(*v))); }
            }
        }
        Self::from_edges(n, &edges)
    }

    /** constructor using an edge list over the vertices 0..n */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Self {
        let mut adj_matrix = vec![BitSet::with_capacity(n) ; n];
        for (a,b) in edges {
            assert!(*a < n && *b < n, "edge ({},{}) uses a vertex outside 0..{}", a, b, n);
            if a != b {
                adj_matrix[*a].insert(*b);
                adj_matrix[*b].insert(*a);
            }
        }
        let adj_list:Vec<Vec<VertexId>> = adj_matrix.iter()
            .map(|row| row.iter().collect())
            .collect();
        let edges = Self::build_edges(&adj_list);
        Self { n, m:edges.len(), edges, adj_list, adj_matrix, index_base:0 }
    }

    /// creates an instance from a parsed DIMACS file
    pub fn from_dimacs(inst:&DimacsInstance) -> Self {
        let mut res = Self::from_edges(inst.nb_vertices, &inst.edges);
        res.index_base = inst.index_base;
        res
    }

    /// creates an instance from a DIMACS file
    pub fn from_file(filename:&str) -> Result<Self, CliqueError> {
        Ok(Self::from_dimacs(&read_from_file(filename)?))
    }

    /// builds the edge list
    fn build_edges(adj_list:&[Vec<VertexId>]) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// iterates over the vertices
    pub fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.n }

    /// edge list (u < v)
    pub fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    /// list of vertices adjacent to u
    pub fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    /// degree of u
    pub fn degree(&self, u:VertexId) -> usize { self.adj_list[u].len() }

    /// returns true iff a and b are adjacent. O(1)
    pub fn are_adjacent(&self, a:VertexId, b:VertexId) -> bool {
        self.adj_matrix[a].contains(b)
    }

    /** iterates over the edges of the complement graph: every pair (u,v), u < v,
    that is not an edge. Never yields (u,u). */
    pub fn complement_edges(&self) -> impl Iterator<Item=(VertexId,VertexId)> + '_ {
        self.vertices().flat_map(move |u| {
            (u+1..self.n)
                .filter(move |v| !self.are_adjacent(u, *v))
                .map(move |v| (u,v))
        })
    }

    /// true iff the vertices are pairwise adjacent
    pub fn is_clique(&self, vertices:&[VertexId]) -> bool {
        vertices.iter().enumerate().all(|(i,u)| {
            vertices[i+1..].iter().all(|v| self.are_adjacent(*u, *v))
        })
    }

    /// true iff no two vertices are adjacent
    pub fn is_independent_set(&self, vertices:&[VertexId]) -> bool {
        vertices.iter().enumerate().all(|(i,u)| {
            vertices[i+1..].iter().all(|v| !self.are_adjacent(*u, *v))
        })
    }

    /// name of the vertex in the input numbering
    pub fn label(&self, v:VertexId) -> usize { v + self.index_base }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        info!("\t{} \t vertices", self.nb_vertices());
        info!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.vertices().map(|i| self.degree(i)).collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            info!("\t{} \t min degree", min);
            info!("\t{} \t max degree", max);
        }
    }

    /** writes a string encoding a vertex set (use this to export the solution) */
    pub fn solution_to_string(&self, solution:&[VertexId]) -> String {
        let mut res = String::default();
        for v in solution {
            res += format!("{} ", self.label(*v)).as_str();
        }
        res += "\n";
        res
    }
}


#[cfg(test)]
impl Graph {
    /// random G(n,p) graph
    pub fn random(n:usize, p:f64, seed:u64) -> Self {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut edges = Vec::new();
        for u in 0..n {
            for v in u+1..n {
                if rng.gen::<f64>() < p { edges.push((u,v)); }
            }
        }
        Self::from_edges(n, &edges)
    }
}
