use crate::geometry::*;

///
/// How two line segments meet, if they do
///
#[derive(Clone, Copy, Debug)]
pub (super) enum SegmentCrossing {
    /// The segments do not touch
    None,

    /// The segments meet at a single point
    Point(Point),

    /// The segments are collinear and share a run of points
    Overlap(Point, Point),
}

///
/// Intersects two line segments robustly
///
/// Computation happens at f64 precision and the result is snapped to the nearest
/// segment endpoint when it lands within the comparer's tolerance of one. Snapping
/// keeps junction points bit-identical across the edges that share them, which the
/// clipper's reassembly phase relies on.
///
pub (super) fn intersect_segments(a0: Point, a1: Point, b0: Point, b1: Point, comparer: &TolerantComparer) -> SegmentCrossing {
    let (a0x, a0y) = (a0.x as f64, a0.y as f64);
    let (b0x, b0y) = (b0.x as f64, b0.y as f64);

    let d0 = ((a1.x as f64) - a0x, (a1.y as f64) - a0y);
    let d1 = ((b1.x as f64) - b0x, (b1.y as f64) - b0y);
    let e  = (b0x - a0x, b0y - a0y);

    let len0_sq = d0.0 * d0.0 + d0.1 * d0.1;
    let len1_sq = d1.0 * d1.0 + d1.1 * d1.1;

    if len0_sq == 0.0 || len1_sq == 0.0 {
        // Zero-length input (filtered upstream, but never worth faulting over)
        return SegmentCrossing::None;
    }

    let eps_sq = comparer.eps_sq() as f64;
    let kross  = d0.0 * d1.1 - d0.1 * d1.0;

    if kross * kross > eps_sq * len0_sq * len1_sq {
        // The containing lines cross: check whether the segments themselves do
        let s = (e.0 * d1.1 - e.1 * d1.0) / kross;
        if s < 0.0 || s > 1.0 {
            return SegmentCrossing::None;
        }

        let t = (e.0 * d0.1 - e.1 * d0.0) / kross;
        if t < 0.0 || t > 1.0 {
            return SegmentCrossing::None;
        }

        let crossing = Point::new((a0x + d0.0 * s) as f32, (a0y + d0.1 * s) as f32);
        return SegmentCrossing::Point(snap_to_endpoint(crossing, &[a0, a1, b0, b1], comparer));
    }

    // Parallel: collinear only if b0 sits on the line through a0-a1
    let kross_e = e.0 * d0.1 - e.1 * d0.0;
    let len_e   = e.0 * e.0 + e.1 * e.1;

    if kross_e * kross_e > eps_sq * len0_sq * len_e.max(1.0) {
        return SegmentCrossing::None;
    }

    // Collinear: project the second segment onto the first and look for overlap
    let s0 = (d0.0 * e.0 + d0.1 * e.1) / len0_sq;
    let s1 = s0 + (d0.0 * d1.0 + d0.1 * d1.1) / len0_sq;

    let (s_min, s_max) = if s0 < s1 { (s0, s1) } else { (s1, s0) };
    let begin          = s_min.max(0.0);
    let end            = s_max.min(1.0);

    if begin > end {
        return SegmentCrossing::None;
    }

    let begin_point = snap_to_endpoint(Point::new((a0x + d0.0 * begin) as f32, (a0y + d0.1 * begin) as f32), &[a0, a1, b0, b1], comparer);
    let end_point   = snap_to_endpoint(Point::new((a0x + d0.0 * end) as f32, (a0y + d0.1 * end) as f32), &[a0, a1, b0, b1], comparer);

    if begin_point == end_point || begin == end {
        SegmentCrossing::Point(begin_point)
    } else {
        SegmentCrossing::Overlap(begin_point, end_point)
    }
}

///
/// Replaces a computed crossing with the closest of the candidate endpoints when one
/// is within tolerance
///
fn snap_to_endpoint(point: Point, endpoints: &[Point; 4], comparer: &TolerantComparer) -> Point {
    let mut best          = point;
    let mut best_distance = comparer.eps_sq();

    for endpoint in endpoints.iter() {
        let distance = point.distance_sq(endpoint);

        if distance < best_distance {
            best          = *endpoint;
            best_distance = distance;
        }
    }

    best
}
