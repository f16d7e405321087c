use super::intersect::*;

use crate::geometry::sort::*;
use crate::geometry::*;

use std::collections::{HashSet};

///
/// A directed polygon edge entering the subdivision sweep
///
#[derive(Clone, Copy, Debug)]
pub (super) struct RawEdge {
    pub (super) from: Point,
    pub (super) to:   Point,

    /// Index of the ring this edge came from
    pub (super) ring: usize,
}

///
/// Result of the subdivision sweep
///
pub (super) struct SweepOutput {
    /// Directed sub-edges that meet other sub-edges only at shared endpoints
    pub (super) fragments: Vec<(Point, Point, usize)>,

    /// Ring pairs (lower index first) whose boundaries properly cross one another
    pub (super) interlocked: HashSet<(usize, usize)>,
}

///
/// Splits every edge at the points where it meets other edges
///
/// Events are the edge start points, ordered by y then x; the sweep runs top to
/// bottom over an active window of edges whose y-spans overlap the event, so only
/// plausible pairs are intersected. Every edge is split at all of its collected
/// points in a single pass afterwards and nothing is ever re-queued, which is what
/// guarantees the sweep terminates for every input, degenerate ones included.
///
pub (super) fn subdivide_edges(edges: &[RawEdge], comparer: &TolerantComparer) -> SweepOutput {
    // Order events by y, then x (two stable passes: x first, then y)
    let mut order  = (0..edges.len()).collect::<Vec<_>>();
    let mut x_keys = order.iter().map(|idx| edges[*idx].from.x.min(edges[*idx].to.x)).collect::<Vec<_>>();
    sort_keys_with_values(&mut x_keys, &mut order);

    let mut y_keys = order.iter().map(|idx| edges[*idx].from.y.min(edges[*idx].to.y)).collect::<Vec<_>>();
    sort_keys_with_values(&mut y_keys, &mut order);

    // Split points collected per edge
    let mut splits: Vec<Vec<Point>> = vec![vec![]; edges.len()];
    let mut interlocked              = HashSet::new();

    // Sweep top to bottom, keeping an active window of edges that might still touch
    // the current event
    let mut active: Vec<usize> = vec![];

    for event_idx in order.iter().copied() {
        let event     = &edges[event_idx];
        let event_min = event.from.y.min(event.to.y);

        active.retain(|active_idx| {
            let active_edge = &edges[*active_idx];
            active_edge.from.y.max(active_edge.to.y) >= event_min - comparer.eps()
        });

        for active_idx in active.iter().copied() {
            let other = &edges[active_idx];

            // Intersect on canonical endpoint order so coincident edges produce
            // bit-identical split points regardless of their traversal direction
            let (e0, e1) = canonical(event);
            let (o0, o1) = canonical(other);

            match intersect_segments(e0, e1, o0, o1, comparer) {
                SegmentCrossing::None => { }

                SegmentCrossing::Point(p) => {
                    if interior_to(&p, event, comparer) && interior_to(&p, other, comparer) && event.ring != other.ring {
                        interlocked.insert(ring_pair(event.ring, other.ring));
                    }

                    splits[event_idx].push(p);
                    splits[active_idx].push(p);
                }

                SegmentCrossing::Overlap(p, q) => {
                    splits[event_idx].push(p);
                    splits[event_idx].push(q);
                    splits[active_idx].push(p);
                    splits[active_idx].push(q);
                }
            }
        }

        active.push(event_idx);
    }

    // Split each edge at its collected points, in order along the edge
    let mut fragments = vec![];

    for (edge, edge_splits) in edges.iter().zip(splits.into_iter()) {
        split_edge(edge, edge_splits, &mut fragments);
    }

    SweepOutput { fragments, interlocked }
}

///
/// Emits the sub-edges of one edge, split at the given points
///
fn split_edge(edge: &RawEdge, mut splits: Vec<Point>, fragments: &mut Vec<(Point, Point, usize)>) {
    if splits.is_empty() {
        fragments.push((edge.from, edge.to, edge.ring));
        return;
    }

    // Order the split points by their position along the edge
    let direction = edge.to - edge.from;
    let len_sq    = direction.dot(&direction);

    let mut keys = splits.iter()
        .map(|p| if len_sq == 0.0 { 0.0 } else { ((*p - edge.from).dot(&direction) / len_sq).max(0.0).min(1.0) })
        .collect::<Vec<_>>();
    sort_keys_with_values(&mut keys, &mut splits);

    let mut previous = edge.from;

    for split in splits {
        if split != previous && split != edge.to {
            fragments.push((previous, split, edge.ring));
            previous = split;
        }
    }

    if previous != edge.to {
        fragments.push((previous, edge.to, edge.ring));
    }
}

///
/// Orders an edge's endpoints by (y, x)
///
#[inline]
fn canonical(edge: &RawEdge) -> (Point, Point) {
    if (edge.from.y, edge.from.x) <= (edge.to.y, edge.to.x) {
        (edge.from, edge.to)
    } else {
        (edge.to, edge.from)
    }
}

///
/// True if a point lies in the interior of an edge (not at either endpoint)
///
#[inline]
fn interior_to(point: &Point, edge: &RawEdge, comparer: &TolerantComparer) -> bool {
    !comparer.points_equal(point, &edge.from) && !comparer.points_equal(point, &edge.to)
}

#[inline]
fn ring_pair(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}
