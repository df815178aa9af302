//! Generic A* engine used by [OccupancyGrid](crate::OccupancyGrid). Nodes live in an
//! [IndexMap] arena addressed by stable integer index, so parent links are indices and
//! survive insertions elsewhere. The open set is a [BinaryHeap] over those indices;
//! finalized nodes carry a `closed` flag and are never reopened, which is sound because
//! the heuristic is required to be consistent.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Arena record for one discovered node. `parent` is an arena index
/// (`usize::MAX` for the start node).
struct NodeRecord<C> {
    parent: usize,
    cost: C,
    closed: bool,
}

struct OpenEntry<C> {
    estimated_cost: C,
    seq: usize,
    index: usize,
}

impl<C: PartialEq> Eq for OpenEntry<C> {}

impl<C: PartialEq> PartialEq for OpenEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.seq.eq(&other.seq)
    }
}

impl<C: Ord> PartialOrd for OpenEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for OpenEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first; equal estimates are ordered by
        // insertion sequence so the search is reproducible.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

/// Walks parent indices from the terminal arena slot back to the start and
/// returns the positions in start-to-goal order.
fn reverse_path<N, C>(nodes: &FxIndexMap<N, NodeRecord<C>>, terminal: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(terminal, |i| {
        nodes.get_index(*i).map(|(node, record)| {
            *i = record.parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// A* search from `start` to any node satisfying `success`, returning the path
/// and its total cost, or [None] if the frontier is exhausted first.
///
/// `heuristic` must be admissible and consistent for the returned path to be
/// optimal and for closed nodes to stay final.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut open = BinaryHeap::new();
    let mut seq: usize = 0;
    open.push(OpenEntry {
        estimated_cost: heuristic(start),
        seq,
        index: 0,
    });
    let mut nodes: FxIndexMap<N, NodeRecord<C>> = FxIndexMap::default();
    nodes.insert(
        start.clone(),
        NodeRecord {
            parent: usize::MAX,
            cost: Zero::zero(),
            closed: false,
        },
    );
    while let Some(OpenEntry { index, .. }) = open.pop() {
        let cost = {
            let (_, record) = nodes.get_index_mut(index).unwrap();
            if record.closed {
                // Stale heap entry: the node was already finalized through a
                // cheaper route. A node updated while open pushes a fresh
                // entry, so discarding the old one loses nothing.
                continue;
            }
            record.closed = true;
            record.cost
        };
        let successors = {
            let (node, _) = nodes.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&nodes, index);
                return Some((path, cost));
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h;
            let n;
            match nodes.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(NodeRecord {
                        parent: index,
                        cost: new_cost,
                        closed: false,
                    });
                }
                Occupied(mut e) => {
                    if e.get().closed || e.get().cost <= new_cost {
                        continue;
                    }
                    // A cheaper route to an open node: re-parent it and record
                    // the improved cost.
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(NodeRecord {
                        parent: index,
                        cost: new_cost,
                        closed: false,
                    });
                }
            }
            seq += 1;
            open.push(OpenEntry {
                estimated_cost: new_cost + h,
                seq,
                index: n,
            });
        }
    }
    debug!("Open set exhausted after visiting {} nodes", nodes.len());
    None
}
