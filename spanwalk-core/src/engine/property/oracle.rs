//! Sequential union-find Kruskal used as the reference result.

use super::strategies::KruskalFixture;

/// Reference spanning forest for a fixture.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    /// Accepted edge ids in ascending order.
    pub accepted: Vec<u32>,
    /// Combined weight of the accepted edges.
    pub total_weight: i64,
    /// Connected components, isolated vertices included.
    pub component_count: usize,
}

/// Runs Kruskal with a disjoint-set forest, ordering edges by
/// `(weight, id)` like the engine does.
pub(super) fn sequential_kruskal(fixture: &KruskalFixture) -> OracleForest {
    let vertex_count = usize::try_from(fixture.vertex_count).unwrap_or(usize::MAX);
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank = vec![0_u8; vertex_count];

    let mut ordered: Vec<(u32, &(u32, u32, i64))> = (0_u32..).zip(&fixture.rows).collect();
    ordered.sort_by_key(|(id, (_, _, weight))| (*weight, *id));

    let mut accepted = Vec::new();
    let mut total_weight = 0_i64;
    let mut component_count = vertex_count;
    for (id, &(u, v, weight)) in ordered {
        let a = find_root(&mut parent, u as usize);
        let b = find_root(&mut parent, v as usize);
        if a == b {
            continue;
        }
        union_by_rank(&mut parent, &mut rank, a, b);
        accepted.push(id);
        total_weight += weight;
        component_count -= 1;
    }
    accepted.sort_unstable();

    OracleForest {
        accepted,
        total_weight,
        component_count,
    }
}

fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

fn union_by_rank(parent: &mut [usize], rank: &mut [u8], a: usize, b: usize) {
    let (root, child) = if rank[a] >= rank[b] { (a, b) } else { (b, a) };
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] += 1;
    }
}
