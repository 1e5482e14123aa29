use std::fs;

use log::warn;
use nom::IResult;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, digit1, space0, space1};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{pair, preceded, separated_pair, terminated, tuple};

use crate::error::CliqueError;
use crate::graph::VertexId;


/// largest vertex id accepted in a file
pub const MAX_VERTEX_ID:usize = 1 << 20;

/** raw content of a DIMACS file (edges are already shifted to start at 0) */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimacsInstance {
    /// nb vertices (header value, or more if an edge uses a larger id)
    pub nb_vertices: usize,
    /// edges as found in the file (0-based)
    pub edges: Vec<(VertexId,VertexId)>,
    /// id of the first vertex in the file numbering (1 in DIMACS, 0 if the file uses 0)
    pub index_base: usize,
}


/// reads an instance from file
pub fn read_from_file(filename:&str) -> Result<DimacsInstance, CliqueError> {
    let content = fs::read_to_string(filename).map_err(|source| CliqueError::Io {
        path: filename.to_string(),
        source,
    })?;
    read_from_str(&content)
}

/** reads an instance from a string.
    - `e <u> <v>` lines are edges (WARNING: indices start at 1 in the DIMACS format)
    - `p <format> <n> <m>` gives the number of vertices (optional, only matters for
      isolated vertices)
    - ids larger than MAX_VERTEX_ID make the edge line malformed
    - any other line is ignored
*/
pub fn read_from_str(s:&str) -> Result<DimacsInstance, CliqueError> {
    let mut header_n:usize = 0;
    let mut raw_edges:Vec<(usize,usize)> = Vec::new();
    for (i,line) in s.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('e') {
            match read_edge(line) {
                Ok((_,(a,b))) if a <= MAX_VERTEX_ID && b <= MAX_VERTEX_ID => raw_edges.push((a,b)),
                _ => return Err(CliqueError::MalformedEdge {
                    line: i+1,
                    content: line.to_string(),
                }),
            }
        } else if line.starts_with('p') {
            match read_header(line) {
                Ok((_,(n,_))) if n <= MAX_VERTEX_ID + 1 => header_n = n,
                Ok((_,(n,_))) => warn!("line {}: ignoring header with {} vertices (too many)", i+1, n),
                Err(_) => warn!("line {}: ignoring unreadable header `{}`", i+1, line),
            }
        }
    }
    // ids are 1-based, unless the file uses the id 0
    let index_base = if raw_edges.iter().any(|(a,b)| *a == 0 || *b == 0) { 0 } else { 1 };
    let edges:Vec<(VertexId,VertexId)> = raw_edges.iter()
        .map(|(a,b)| (a-index_base, b-index_base))
        .collect();
    let max_id = edges.iter().map(|(a,b)| a.max(b) + 1).max().unwrap_or(0);
    if max_id > header_n && header_n > 0 {
        warn!("header announces {} vertices but edges use {}", header_n, max_id);
    }
    Ok(DimacsInstance {
        nb_vertices: header_n.max(max_id),
        edges,
        index_base,
    })
}

/// reads a non-negative integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    separated_pair(read_integer, space1, read_integer)(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(
        tuple((tag("p"), space1, alpha1, space1)), // "p edge", "p col", ...
        read_two_integers
    )(s)
}

/// reads edge line (the whole line must be consumed)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    all_consuming(terminated(
        preceded(pair(tag("e"), space1), read_two_integers),
        space0
    ))(s)
}
