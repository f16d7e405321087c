use crate::geometry::*;

/// Shortest distance a single dash pattern entry can advance the walk
const MIN_DASH_LENGTH: f32 = 1e-3;

///
/// Splits a polyline into the 'on' spans of a dash pattern
///
/// Walks the polyline cycling through the alternating on/off lengths of the pattern
/// (starting 'on'), emitting one point span per on-length. Each span is ready to be
/// stroked as an independent open polyline. Non-positive pattern entries are clamped
/// to a minimum advance so the walk always terminates.
///
/// An empty pattern returns the whole polyline as a single span.
///
pub fn dash_path(points: &[Point], is_closed: bool, pattern: &[f32], offset: f32) -> Vec<Vec<Point>> {
    if points.len() < 2 {
        return vec![];
    }

    let pattern = pattern.iter()
        .map(|length| length.max(MIN_DASH_LENGTH))
        .collect::<Vec<_>>();

    if pattern.is_empty() {
        return vec![points.to_vec()];
    }

    // Consume the starting offset, wrapped to a single pattern repeat
    let pattern_length  = pattern.iter().sum::<f32>();
    let mut offset      = if offset > 0.0 { offset % pattern_length } else { 0.0 };

    let mut pattern_idx = 0;
    let mut remaining   = pattern[0];
    let mut drawing     = true;

    while offset > 0.0 {
        if offset >= remaining {
            offset      -= remaining;
            pattern_idx  = (pattern_idx + 1) % pattern.len();
            remaining    = pattern[pattern_idx];
            drawing      = !drawing;
        } else {
            remaining   -= offset;
            offset       = 0.0;
        }
    }

    // Walk the polyline, splitting wherever the pattern toggles
    let mut spans           = vec![];
    let mut current: Vec<Point> = if drawing { vec![points[0]] } else { vec![] };

    let segment_count = if is_closed { points.len() } else { points.len() - 1 };

    for segment_idx in 0..segment_count {
        let from = points[segment_idx];
        let to   = points[(segment_idx + 1) % points.len()];

        let segment_length = from.distance(&to);
        if segment_length <= 0.0 {
            continue;
        }

        let mut consumed = 0.0;

        loop {
            if remaining >= segment_length - consumed {
                // The rest of this segment fits in the current dash
                remaining -= segment_length - consumed;

                if drawing {
                    current.push(to);
                }

                break;
            }

            // The dash toggles partway along this segment
            consumed += remaining;
            let toggle_point = from.lerp(&to, consumed / segment_length);

            if drawing {
                current.push(toggle_point);
                spans.push(std::mem::take(&mut current));
            } else {
                current = vec![toggle_point];
            }

            drawing      = !drawing;
            pattern_idx  = (pattern_idx + 1) % pattern.len();
            remaining    = pattern[pattern_idx];
        }
    }

    if drawing && current.len() >= 2 {
        spans.push(current);
    }

    spans
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn even_dashes_cover_half_the_length() {
        // A 100-unit line with a 5-on/5-off pattern: ten 'on' spans of length 5
        let spans = dash_path(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)], false, &[5.0, 5.0], 0.0);

        assert!(spans.len() == 10, "Expected 10 spans, found {}: {:?}", spans.len(), spans);

        for span in spans.iter() {
            let length = span.windows(2).map(|pair| pair[0].distance(&pair[1])).sum::<f32>();
            assert!((length - 5.0).abs() < 0.01, "Span length should be 5, found {} ({:?})", length, span);
        }
    }

    #[test]
    fn offset_shifts_the_first_dash() {
        let spans = dash_path(&[Point::new(0.0, 0.0), Point::new(20.0, 0.0)], false, &[5.0, 5.0], 2.0);

        // First span is the tail of a dash: 3 units from x=0
        assert!((spans[0][0].x - 0.0).abs() < 0.01);
        assert!((spans[0].last().unwrap().x - 3.0).abs() < 0.01, "First span should end at x=3, found {:?}", spans[0]);
    }

    #[test]
    fn degenerate_pattern_terminates() {
        // Zero and negative lengths are clamped, so this returns rather than spinning
        let spans = dash_path(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], false, &[0.0, -1.0], 0.0);

        assert!(!spans.is_empty());
    }
}
