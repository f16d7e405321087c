use super::stroke_options::*;

use crate::geometry::*;

use std::f32::consts::{PI};

/// Points closer together than this are merged while accumulating a source polyline
const VERTEX_DISTANCE_EPSILON: f32 = 1e-6;

/// Minimum inner miter limit, as a multiple of the half-width
const INNER_MITER_LIMIT: f32 = 1.01;

///
/// Converts a centerline path into closed stroke-outline rings
///
/// An open centerline produces a single closed ring: the offset band down one side,
/// the end cap, the offset band back up the other side and the start cap. A closed
/// centerline produces an outer and an inner offset ring. Tight turns are expected to
/// self-overlap; the stroker does not clean that up itself (the outline generator
/// merges its rings through the boolean clipper afterwards).
///
pub struct PolygonStroker {
    options: StrokeOptions,
}

impl PolygonStroker {
    ///
    /// Creates a stroker from a set of stroke options
    ///
    pub fn new(options: StrokeOptions) -> PolygonStroker {
        PolygonStroker { options }
    }

    ///
    /// The options this stroker is using
    ///
    #[inline]
    pub fn options(&self) -> &StrokeOptions {
        &self.options
    }

    ///
    /// Changes the stroke width without rebuilding the stroker
    ///
    #[inline]
    pub fn set_width(&mut self, width: f32) {
        self.options.width = width;
    }

    ///
    /// Strokes a centerline into outline points
    ///
    /// Open paths return one closed ring. Closed paths return the outer and inner
    /// offset rings concatenated, each closed by a repeat of its first point.
    /// Degenerate input (fewer than 2 distinct points, or a non-positive width)
    /// returns an empty result rather than faulting.
    ///
    pub fn process_path(&self, points: &[Point], is_closed: bool) -> Vec<Point> {
        if is_closed {
            let (outer, inner) = self.closed_rings(points);

            let mut combined = Vec::with_capacity(outer.len() + inner.len() + 2);

            if !outer.is_empty() {
                let start = outer[0];
                combined.extend(outer);
                combined.push(start);
            }

            if !inner.is_empty() {
                let start = inner[0];
                combined.extend(inner);
                combined.push(start);
            }

            combined
        } else {
            self.open_ring(points)
        }
    }

    ///
    /// Strokes an open centerline into a single closed ring
    ///
    pub (crate) fn open_ring(&self, points: &[Point]) -> Vec<Point> {
        let half = self.options.width * 0.5;
        if half <= 0.0 {
            return vec![];
        }

        let source = filter_source(points, false);
        if source.len() < 2 {
            return vec![];
        }

        let count    = source.len();
        let mut ring = vec![];

        // Start cap, then down one side, around the end cap and back up the other
        self.add_cap(&source[0], &source[1], half, &mut ring);

        for idx in 1..count - 1 {
            self.add_join(&source[idx - 1], &source[idx], &source[idx + 1], half, &mut ring);
        }

        self.add_cap(&source[count - 1], &source[count - 2], half, &mut ring);

        for idx in (1..count - 1).rev() {
            self.add_join(&source[idx + 1], &source[idx], &source[idx - 1], half, &mut ring);
        }

        finish_ring(ring)
    }

    ///
    /// Strokes a closed centerline into its two offset rings
    ///
    pub (crate) fn closed_rings(&self, points: &[Point]) -> (Vec<Point>, Vec<Point>) {
        let half = self.options.width * 0.5;
        if half <= 0.0 {
            return (vec![], vec![]);
        }

        let source = filter_source(points, true);

        if source.len() < 3 {
            // Too short to close: stroke what's left as an open line
            return (self.open_ring(points), vec![]);
        }

        let count     = source.len();
        let mut outer = vec![];
        let mut inner = vec![];

        for idx in 0..count {
            let previous = &source[(idx + count - 1) % count];
            let next     = &source[(idx + 1) % count];

            self.add_join(previous, &source[idx], next, half, &mut outer);
        }

        for idx in (0..count).rev() {
            let previous = &source[(idx + 1) % count];
            let next     = &source[(idx + count - 1) % count];

            self.add_join(previous, &source[idx], next, half, &mut inner);
        }

        (finish_ring(outer), finish_ring(inner))
    }

    ///
    /// Emits the cap around an end vertex, from one side's offset to the other's
    ///
    /// `end` is the vertex being capped and `neighbour` the vertex adjacent to it.
    ///
    fn add_cap(&self, end: &Point, neighbour: &Point, half: f32, ring: &mut Vec<Point>) {
        let direction = (*neighbour - *end).to_unit_vector();
        let offset    = direction.perpendicular() * half;

        match self.options.cap {
            LineCap::Butt => {
                ring.push(*end + offset);
                ring.push(*end - offset);
            }

            LineCap::Square => {
                let extension = direction * half;

                ring.push(*end + offset - extension);
                ring.push(*end - offset - extension);
            }

            LineCap::Round => {
                // Sweeping the positive half-turn passes through the far side of the
                // end point, away from the neighbouring vertex
                ring.push(*end + offset);
                self.add_arc(end, &offset, PI, half, ring);
                ring.push(*end - offset);
            }
        }
    }

    ///
    /// Emits the join around an interior vertex, on the stroke side being traversed
    ///
    fn add_join(&self, previous: &Point, vertex: &Point, next: &Point, half: f32, ring: &mut Vec<Point>) {
        let d1 = (*vertex - *previous).to_unit_vector();
        let d2 = (*next - *vertex).to_unit_vector();

        // Offsets on the side this pass is tracing (the right of travel)
        let o1 = Point::new(d1.y, -d1.x) * half;
        let o2 = Point::new(d2.y, -d2.x) * half;

        let turn = d1.cross(&d2);

        if turn <= 0.0 {
            // Inner side of the turn (or straight on). The inner miter keeps the ring
            // at offset distance through the corner; short adjacent segments cap the
            // spike, and the leftover overlap is resolved by the boolean merge
            let len1  = previous.distance(vertex);
            let len2  = vertex.distance(next);
            let limit = ((len1.min(len2) / half).max(INNER_MITER_LIMIT)) * half;

            match intersect_offset_lines(vertex, &d1, &d2, &o1, &o2, turn) {
                Some(point) if point.distance(vertex) <= limit => {
                    ring.push(point);
                }

                _ => {
                    ring.push(*vertex + o1);
                    ring.push(*vertex + o2);
                }
            }

            return;
        }

        match self.options.join {
            LineJoin::Miter => {
                // Offset edge lines meet at the miter point unless it spikes too far
                let miter = intersect_offset_lines(vertex, &d1, &d2, &o1, &o2, turn);

                match miter {
                    Some(point) if point.distance(vertex) <= self.options.miter_limit * half => {
                        ring.push(point);
                    }

                    _ => {
                        ring.push(*vertex + o1);
                        ring.push(*vertex + o2);
                    }
                }
            }

            LineJoin::Bevel => {
                ring.push(*vertex + o1);
                ring.push(*vertex + o2);
            }

            LineJoin::Round => {
                ring.push(*vertex + o1);

                // An outer join always sweeps in the turn direction, so the angle is
                // normalised into (0, 2π) rather than around zero
                let mut sweep = d2.y.atan2(d2.x) - d1.y.atan2(d1.x);
                while sweep <= 0.0 {
                    sweep += 2.0 * PI;
                }
                while sweep > 2.0 * PI {
                    sweep -= 2.0 * PI;
                }

                self.add_arc(vertex, &o1, sweep, half, ring);

                ring.push(*vertex + o2);
            }
        }
    }

    ///
    /// Emits the intermediate points of an arc around a centre, starting from an
    /// offset vector and sweeping by a signed angle
    ///
    /// The start and end points themselves are emitted by the caller. The step angle
    /// comes from the flattening tolerance, the same way the arc tolerance controls
    /// cap and join fidelity in round strokes.
    ///
    fn add_arc(&self, centre: &Point, from_offset: &Point, sweep: f32, half: f32, ring: &mut Vec<Point>) {
        let step = (half / (half + 0.125)).acos() * 2.0;
        if step <= 0.0 {
            return;
        }

        let divisions = (sweep.abs() / step) as usize;
        if divisions == 0 {
            return;
        }

        let step  = sweep / (divisions + 1) as f32;
        let start = from_offset.y.atan2(from_offset.x);

        for division in 1..=divisions {
            let angle = start + step * division as f32;
            ring.push(*centre + Point::new(angle.cos(), angle.sin()) * half);
        }
    }
}

///
/// Intersects the two offset edge lines around a vertex
///
fn intersect_offset_lines(vertex: &Point, d1: &Point, d2: &Point, o1: &Point, o2: &Point, denominator: f32) -> Option<Point> {
    if denominator.abs() <= f32::EPSILON {
        return None;
    }

    let p1 = *vertex + *o1;
    let p2 = *vertex + *o2;
    let t  = (p2 - p1).cross(d2) / denominator;

    Some(p1 + *d1 * t)
}

///
/// Accumulates the source polyline for stroking, merging points that sit closer
/// together than the vertex distance epsilon
///
/// This filter applies only to the stroker's own accumulation: path flattening keeps
/// every literal input point, and a repeated vertex far from its predecessor (a path
/// touching itself) passes through here untouched.
///
fn filter_source(points: &[Point], is_closed: bool) -> Vec<Point> {
    let mut source: Vec<Point> = Vec::with_capacity(points.len());

    for point in points.iter() {
        if let Some(last) = source.last() {
            if last.distance_sq(point) <= VERTEX_DISTANCE_EPSILON * VERTEX_DISTANCE_EPSILON {
                continue;
            }
        }

        source.push(*point);
    }

    if is_closed {
        while source.len() > 1 {
            let first = source[0];
            let last  = source[source.len() - 1];

            if first.distance_sq(&last) <= VERTEX_DISTANCE_EPSILON * VERTEX_DISTANCE_EPSILON {
                source.pop();
            } else {
                break;
            }
        }
    }

    source
}

///
/// Removes consecutive duplicate points and a duplicated closing point from a
/// finished ring, dropping rings that collapse below a triangle
///
fn finish_ring(ring: Vec<Point>) -> Vec<Point> {
    let mut finished: Vec<Point> = Vec::with_capacity(ring.len());

    for point in ring.into_iter() {
        if let Some(last) = finished.last() {
            if last.distance_sq(&point) <= VERTEX_DISTANCE_EPSILON * VERTEX_DISTANCE_EPSILON {
                continue;
            }
        }

        finished.push(point);
    }

    while finished.len() > 1 && finished[0].distance_sq(&finished[finished.len() - 1]) <= VERTEX_DISTANCE_EPSILON * VERTEX_DISTANCE_EPSILON {
        finished.pop();
    }

    if finished.len() < 3 {
        vec![]
    } else {
        finished
    }
}
