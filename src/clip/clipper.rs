use super::clip_op::*;
use super::sweep::*;

use crate::geometry::*;
use crate::path::*;
use crate::scan::*;

use log::*;

use std::collections::{HashMap};

///
/// Computes boolean set operations between two labelled groups of closed polygons
///
/// Polygons are accumulated under the `Subject` and `Clip` roles, then `execute`
/// performs the requested operation and returns the minimal set of result polygons.
/// Outer boundaries and holes in the result are distinguishable by winding: outer
/// rings carry positive orientation, holes negative.
///
/// Rings may be fed in with arbitrary mutual orientation: orientation is normalized
/// internally so every outermost ring reads as filled, while a ring nested with
/// *opposite* orientation to its container keeps its meaning as a hole. Degenerate
/// rings (fewer than three distinct vertices, or zero area within tolerance) are
/// filtered out before the sweep and never contribute.
///
/// All coordinate comparisons go through one shared `TolerantComparer`, keeping
/// tie-break behaviour consistent across the sweep, the classification and the
/// reassembly phases.
///
pub struct Clipper {
    /// How per-operand winding counts map to insideness
    rule: WindingRule,

    /// Shared comparer for every coordinate comparison
    comparer: TolerantComparer,

    /// Accumulated input rings
    rings: Vec<InputRing>,
}

///
/// An input ring that survived ingest filtering
///
struct InputRing {
    points: Vec<Point>,
    role:   ClipRole,

    /// Orientation sign of the ring as given (shoelace sign, never 0 here)
    sign: i32,
}

///
/// A merged, undirected sub-edge with its accumulated winding contributions
///
/// `a` and `b` are in canonical (y, x) order. The `_h` sums are crossing
/// contributions for a leftward horizontal ray (+1 where a ring traverses the
/// fragment upwards); the `_v` sums are for an upward vertical ray (+1 where a ring
/// traverses it rightwards). Coincident fragments from opposite traversals cancel
/// here, which is how shared boundaries and keyhole bridges disappear from results.
///
struct Fragment {
    a: Point,
    b: Point,

    subject_h: i32,
    clip_h:    i32,
    subject_v: i32,
    clip_v:    i32,
}

impl Fragment {
    #[inline]
    fn is_horizontal(&self) -> bool {
        self.a.y == self.b.y
    }
}

impl Clipper {
    ///
    /// Creates a clipper that interprets operand windings under the given rule
    ///
    pub fn new(rule: WindingRule) -> Clipper {
        Clipper::with_tolerance(rule, TolerantComparer::default())
    }

    ///
    /// Creates a clipper with an explicit comparison tolerance
    ///
    pub fn with_tolerance(rule: WindingRule, comparer: TolerantComparer) -> Clipper {
        Clipper {
            rule:       rule,
            comparer:   comparer,
            rings:      vec![],
        }
    }

    ///
    /// Adds a closed path to one of the operand sets
    ///
    pub fn add_path(&mut self, path: &Path, role: ClipRole) {
        self.add_ring(path.points(), role);
    }

    ///
    /// Adds every figure of a path set to one of the operand sets
    ///
    pub fn add_path_set(&mut self, paths: &PathSet, role: ClipRole) {
        for path in paths {
            self.add_ring(path.points(), role);
        }
    }

    ///
    /// Adds a raw point ring to one of the operand sets
    ///
    /// The ring is treated as closed. Near-duplicate consecutive vertices are merged
    /// and rings that are degenerate after cleaning are silently dropped.
    ///
    pub fn add_ring(&mut self, points: &[Point], role: ClipRole) {
        let cleaned = clean_ring(points, &self.comparer);

        if cleaned.len() < 3 {
            return;
        }

        let sign = polygon_orientation(&cleaned, &self.comparer);
        if sign == 0 {
            // Zero-area rings never enter the sweep
            return;
        }

        self.rings.push(InputRing { points: cleaned, role, sign });
    }

    ///
    /// Performs a boolean operation over the accumulated operand sets
    ///
    /// Returns the result polygons as closed paths. Output ordering is unspecified:
    /// only set membership and geometry are guaranteed.
    ///
    pub fn execute(&self, operation: ClipOperation) -> Vec<Path> {
        if self.rings.is_empty() {
            return vec![];
        }

        // Gather the directed edges of every ring
        let mut raw_edges = vec![];

        for (ring_idx, ring) in self.rings.iter().enumerate() {
            let points = &ring.points;

            for idx in 0..points.len() {
                let from = points[idx];
                let to   = points[(idx + 1) % points.len()];

                if from != to {
                    raw_edges.push(RawEdge { from, to, ring: ring_idx });
                }
            }
        }

        // Split edges wherever they meet
        let SweepOutput { fragments, interlocked } = subdivide_edges(&raw_edges, &self.comparer);

        // Decide which rings read as filled and which as holes
        let factors = self.nesting_factors(&interlocked);

        // Merge coincident sub-edges, accumulating winding contributions per operand
        let merged = self.merge_fragments(&fragments, &factors);

        debug!(
            "Boolean {:?}: {} rings, {} edges, {} fragments after subdivision, {} merged",
            operation, self.rings.len(), raw_edges.len(), fragments.len(), merged.len()
        );

        // Classify each fragment and keep the ones where insideness changes
        let boundary = self.classify_fragments(&merged, operation);

        // Chain the boundary into closed rings
        let result = connect_boundary(&boundary);

        debug!("Boolean {:?}: {} boundary fragments, {} result polygons", operation, boundary.len(), result.len());

        result.into_iter()
            .filter(|ring| ring.len() >= 3 && polygon_orientation(ring, &self.comparer) != 0)
            .map(|ring| Path::new(ring, true))
            .collect()
    }

    ///
    /// Computes the orientation factor for each ring from the nesting structure
    ///
    /// A ring's factor is the orientation sign of the outermost ring enclosing it (or
    /// its own sign when top-level), so whole nesting trees are flipped to read their
    /// outers as filled while nested rings keep their relative orientation. Rings
    /// whose boundaries properly cross, and rings that merely touch, have no nesting
    /// relationship.
    ///
    fn nesting_factors(&self, interlocked: &std::collections::HashSet<(usize, usize)>) -> Vec<i32> {
        let ring_count = self.rings.len();

        let mut containers: Vec<Vec<usize>> = vec![vec![]; ring_count];

        for ring_idx in 0..ring_count {
            // Representative vertex: the lowest (y, x) corner of the ring
            let reference = self.rings[ring_idx].points.iter()
                .copied()
                .min_by(|a, b| (a.y, a.x).partial_cmp(&(b.y, b.x)).unwrap_or(std::cmp::Ordering::Equal))
                .unwrap();

            for other_idx in 0..ring_count {
                if other_idx == ring_idx {
                    continue;
                }

                let pair = if ring_idx < other_idx { (ring_idx, other_idx) } else { (other_idx, ring_idx) };
                if interlocked.contains(&pair) {
                    continue;
                }

                let other = &self.rings[other_idx].points;

                if point_on_ring(&reference, other, &self.comparer) {
                    // Touching rings are not nested
                    continue;
                }

                if ring_winding(other, &reference) != 0 {
                    containers[ring_idx].push(other_idx);
                }
            }
        }

        (0..ring_count)
            .map(|ring_idx| {
                let root = containers[ring_idx].iter()
                    .copied()
                    .min_by_key(|container| containers[*container].len())
                    .unwrap_or(ring_idx);

                self.rings[root].sign
            })
            .collect()
    }

    ///
    /// Merges coincident directed sub-edges into undirected fragments with summed
    /// winding contributions
    ///
    fn merge_fragments(&self, fragments: &[(Point, Point, usize)], factors: &[i32]) -> Vec<Fragment> {
        let mut merged: Vec<Fragment>                   = vec![];
        let mut index: HashMap<(u64, u64), usize>       = HashMap::new();

        for (from, to, ring_idx) in fragments.iter() {
            if from == to {
                continue;
            }

            let factor  = factors[*ring_idx];
            let role    = self.rings[*ring_idx].role;

            // Crossing contributions of this traversal direction
            let h = factor * (if from.y > to.y { 1 } else if from.y < to.y { -1 } else { 0 });
            let v = factor * (if to.x > from.x { 1 } else if to.x < from.x { -1 } else { 0 });

            let (a, b) = if (from.y, from.x) <= (to.y, to.x) { (*from, *to) } else { (*to, *from) };
            let key    = (point_key(&a), point_key(&b));

            let slot = *index.entry(key).or_insert_with(|| {
                merged.push(Fragment { a, b, subject_h: 0, clip_h: 0, subject_v: 0, clip_v: 0 });
                merged.len() - 1
            });

            match role {
                ClipRole::Subject => { merged[slot].subject_h += h; merged[slot].subject_v += v; }
                ClipRole::Clip    => { merged[slot].clip_h += h;    merged[slot].clip_v += v; }
            }
        }

        merged
    }

    ///
    /// Decides which fragments lie on the result boundary, returning them directed so
    /// the result interior is on the left of travel
    ///
    fn classify_fragments(&self, fragments: &[Fragment], operation: ClipOperation) -> Vec<(Point, Point)> {
        let mut boundary = vec![];

        for (idx, fragment) in fragments.iter().enumerate() {
            if fragment.subject_h == 0 && fragment.clip_h == 0 && fragment.subject_v == 0 && fragment.clip_v == 0 {
                // Opposite traversals cancelled: interior is the same on both sides
                continue;
            }

            let midpoint = fragment.a.lerp(&fragment.b, 0.5);

            let (inside_left, inside_right) = if !fragment.is_horizontal() {
                // Canonical direction runs downwards, so travel-left is the smaller-x
                // side, which is what the leftward ray measures
                let (ws, wc) = winding_leftwards(fragments, idx, &midpoint);

                (
                    self.is_inside(operation, ws, wc),
                    self.is_inside(operation, ws + fragment.subject_h, wc + fragment.clip_h),
                )
            } else {
                // Canonical direction runs rightwards, so travel-left is the larger-y
                // side; the upward ray measures the smaller-y side
                let (ws, wc) = winding_upwards(fragments, idx, &midpoint);

                (
                    self.is_inside(operation, ws + fragment.subject_v, wc + fragment.clip_v),
                    self.is_inside(operation, ws, wc),
                )
            };

            if inside_left == inside_right {
                continue;
            }

            if inside_left {
                boundary.push((fragment.a, fragment.b));
            } else {
                boundary.push((fragment.b, fragment.a));
            }
        }

        boundary
    }

    ///
    /// Whether a point with the given per-operand windings is inside the result of an
    /// operation
    ///
    /// Union merges the operand windings additively before applying the winding rule:
    /// that preserves overlapping fill density (overlaps stay filled under the
    /// non-zero rule) and lets an opposite-wound nested ring cut a hole. The other
    /// operations combine per-operand insideness through their truth tables.
    ///
    #[inline]
    fn is_inside(&self, operation: ClipOperation, winding_subject: i32, winding_clip: i32) -> bool {
        match operation {
            ClipOperation::Union => self.rule.is_inside(winding_subject + winding_clip),
            _                    => operation.combine(self.rule.is_inside(winding_subject), self.rule.is_inside(winding_clip)),
        }
    }
}

///
/// Winding counts for the subject and clip operands immediately to the left of a
/// point, measured with a leftward horizontal ray over every fragment but `exclude`
///
fn winding_leftwards(fragments: &[Fragment], exclude: usize, point: &Point) -> (i32, i32) {
    let mut subject = 0;
    let mut clip    = 0;

    for (idx, fragment) in fragments.iter().enumerate() {
        if idx == exclude {
            continue;
        }

        // Canonical order makes a the top end; the range is half-open so horizontal
        // fragments and shared vertices never double-count
        if fragment.a.y <= point.y && point.y < fragment.b.y {
            let x_at = fragment.a.x + (point.y - fragment.a.y) * (fragment.b.x - fragment.a.x) / (fragment.b.y - fragment.a.y);

            if x_at < point.x {
                subject += fragment.subject_h;
                clip    += fragment.clip_h;
            }
        }
    }

    (subject, clip)
}

///
/// Winding counts for the subject and clip operands immediately above a point,
/// measured with an upward vertical ray over every fragment but `exclude`
///
fn winding_upwards(fragments: &[Fragment], exclude: usize, point: &Point) -> (i32, i32) {
    let mut subject = 0;
    let mut clip    = 0;

    for (idx, fragment) in fragments.iter().enumerate() {
        if idx == exclude {
            continue;
        }

        let (min_x, max_x) = if fragment.a.x <= fragment.b.x { (fragment.a.x, fragment.b.x) } else { (fragment.b.x, fragment.a.x) };

        if min_x <= point.x && point.x < max_x {
            let y_at = fragment.a.y + (point.x - fragment.a.x) * (fragment.b.y - fragment.a.y) / (fragment.b.x - fragment.a.x);

            if y_at < point.y {
                subject += fragment.subject_v;
                clip    += fragment.clip_v;
            }
        }
    }

    (subject, clip)
}

///
/// Chains directed boundary fragments into closed rings
///
/// At junctions with several outgoing fragments the walk takes the first candidate
/// clockwise from the reversed incoming direction, which traces each face of the
/// boundary as its own simple ring. Fragment endpoints are bit-identical where they
/// join (the sweep guarantees this), so connectivity uses exact keys.
///
fn connect_boundary(boundary: &[(Point, Point)]) -> Vec<Vec<Point>> {
    let mut outgoing: HashMap<(u32, u32), Vec<usize>> = HashMap::new();

    for (idx, (from, _to)) in boundary.iter().enumerate() {
        outgoing.entry(single_point_key(from)).or_insert_with(Vec::new).push(idx);
    }

    let mut used  = vec![false; boundary.len()];
    let mut rings = vec![];

    for start_idx in 0..boundary.len() {
        if used[start_idx] {
            continue;
        }

        let ring_start  = boundary[start_idx].0;
        let mut ring    = vec![ring_start];
        let mut current = start_idx;
        let mut closed  = false;

        used[start_idx] = true;

        // Each fragment is used at most once, so the walk is bounded
        for _step in 0..boundary.len() {
            let (from, to) = boundary[current];

            if to == ring_start {
                closed = true;
                break;
            }

            ring.push(to);

            let incoming = to - from;
            let next = outgoing.get(&single_point_key(&to))
                .into_iter()
                .flatten()
                .filter(|candidate| !used[**candidate])
                .min_by(|a, b| {
                    let turn_a = clockwise_turn(&incoming, &(boundary[**a].1 - boundary[**a].0));
                    let turn_b = clockwise_turn(&incoming, &(boundary[**b].1 - boundary[**b].0));

                    turn_a.partial_cmp(&turn_b).unwrap_or(std::cmp::Ordering::Equal)
                })
                .copied();

            match next {
                Some(next_idx) => {
                    used[next_idx]  = true;
                    current         = next_idx;
                }

                None => {
                    // Open chain: degenerate boundary, drop the partial ring
                    debug!("Dropping open boundary chain of {} points starting at {:?}", ring.len(), ring_start);
                    ring.clear();
                    break;
                }
            }
        }

        if closed && ring.len() >= 3 {
            rings.push(ring);
        }
    }

    rings
}

///
/// Clockwise angle from the reversal of `incoming` to `candidate`, in (0, 2π]
///
fn clockwise_turn(incoming: &Point, candidate: &Point) -> f32 {
    let base  = (-incoming.y).atan2(-incoming.x);
    let angle = candidate.y.atan2(candidate.x);

    let mut turn = base - angle;

    while turn <= 0.0 {
        turn += 2.0 * std::f32::consts::PI;
    }
    while turn > 2.0 * std::f32::consts::PI {
        turn -= 2.0 * std::f32::consts::PI;
    }

    turn
}

///
/// Drops consecutive near-duplicate vertices (and a literal trailing repeat of the
/// first point) from a ring
///
/// This is the clipper's own input hygiene: merging vertices that sit within
/// tolerance of each other is what keeps close-degenerate rings from producing
/// near-zero-length edges in the sweep.
///
fn clean_ring(points: &[Point], comparer: &TolerantComparer) -> Vec<Point> {
    let mut cleaned: Vec<Point> = Vec::with_capacity(points.len());

    for point in points.iter() {
        if let Some(last) = cleaned.last() {
            if comparer.points_equal(last, point) {
                continue;
            }
        }

        cleaned.push(*point);
    }

    while cleaned.len() > 1 && comparer.points_equal(&cleaned[0], &cleaned[cleaned.len() - 1]) {
        cleaned.pop();
    }

    cleaned
}

///
/// Winding number of a ring at a point, by leftward-ray crossing count
///
fn ring_winding(ring: &[Point], point: &Point) -> i32 {
    let mut winding = 0;

    for idx in 0..ring.len() {
        let from = &ring[idx];
        let to   = &ring[(idx + 1) % ring.len()];

        if from.y == to.y {
            continue;
        }

        let (top, bottom) = if from.y < to.y { (from, to) } else { (to, from) };

        if top.y <= point.y && point.y < bottom.y {
            let x_at = top.x + (point.y - top.y) * (bottom.x - top.x) / (bottom.y - top.y);

            if x_at < point.x {
                winding += if from.y > to.y { 1 } else { -1 };
            }
        }
    }

    winding
}

///
/// True if a point lies on the boundary of a ring, within tolerance
///
fn point_on_ring(point: &Point, ring: &[Point], comparer: &TolerantComparer) -> bool {
    for idx in 0..ring.len() {
        let from = &ring[idx];
        let to   = &ring[(idx + 1) % ring.len()];

        if point_segment_distance_sq(point, from, to) <= comparer.eps_sq() {
            return true;
        }
    }

    false
}

///
/// Squared distance from a point to a line segment
///
fn point_segment_distance_sq(point: &Point, from: &Point, to: &Point) -> f32 {
    let direction = *to - *from;
    let len_sq    = direction.dot(&direction);

    if len_sq == 0.0 {
        return point.distance_sq(from);
    }

    let t       = ((*point - *from).dot(&direction) / len_sq).max(0.0).min(1.0);
    let nearest = from.lerp(to, t);

    point.distance_sq(&nearest)
}

#[inline]
fn point_key(point: &Point) -> u64 {
    ((point.x.to_bits() as u64) << 32) | (point.y.to_bits() as u64)
}

#[inline]
fn single_point_key(point: &Point) -> (u32, u32) {
    (point.x.to_bits(), point.y.to_bits())
}
