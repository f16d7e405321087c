use super::dash::*;
use super::stroker::*;
use super::stroke_options::*;

use crate::clip::*;
use crate::geometry::*;
use crate::path::*;
use crate::scan::*;

use log::*;

///
/// Generates merged stroke outlines from centerline paths or dash spans
///
/// Each centerline (or dash segment) is stroked into closed rings, and the rings are
/// then merged through the boolean clipper to clean up the self-overlap that dashes
/// and tight turns produce.
///
/// The clipper only resolves overlaps *between* its two labelled operand sets and is
/// a no-op on a single self-overlapping polygon, so the rings are partitioned by
/// alternation: the first ring goes to the subject set, the last to the clip set and
/// the middle rings alternate between them. That guarantees both operand sets are
/// populated whenever there are at least two rings. The union runs under the non-zero
/// winding rule, which preserves overlapping fill density where even-odd would punch
/// holes through triple-overlapping dash segments. With no rings the result is empty,
/// and a single ring is returned unmodified: a two-operand union is meaningless with
/// one operand and is never attempted.
///
pub struct StrokeOutlineGenerator {
    stroker: PolygonStroker,
}

impl StrokeOutlineGenerator {
    ///
    /// Creates a generator from a set of stroke options
    ///
    pub fn new(options: StrokeOptions) -> StrokeOutlineGenerator {
        StrokeOutlineGenerator {
            stroker: PolygonStroker::new(options),
        }
    }

    ///
    /// The options the generator is stroking with
    ///
    #[inline]
    pub fn options(&self) -> &StrokeOptions {
        self.stroker.options()
    }

    ///
    /// Strokes a collection of independent point spans and merges the outline
    ///
    /// Each span is treated as an open polyline (typically a dash segment). Spans
    /// with fewer than 2 points, and stroked rings that collapse below 3 points, are
    /// skipped silently.
    ///
    pub fn generate_from_spans(&mut self, spans: &[Vec<Point>], width: f32) -> Vec<Path> {
        self.stroker.set_width(width);

        let rings = spans.iter()
            .filter(|span| span.len() >= 2)
            .map(|span| self.stroker.open_ring(span))
            .filter(|ring| ring.len() >= 3)
            .collect::<Vec<_>>();

        self.merge_rings(rings)
    }

    ///
    /// Strokes every figure of a flattened path and merges the outline
    ///
    /// Figures are stroked per their own closed/open flag. When the stroke options
    /// carry a dash pattern, each figure is first split into its dash spans and every
    /// span is stroked as an open polyline.
    ///
    pub fn generate_stroked_shapes(&mut self, paths: &PathSet, width: f32) -> Vec<Path> {
        self.stroker.set_width(width);

        let dash_pattern = self.options().dash_pattern.clone();
        let dash_offset  = self.options().dash_offset;

        let mut rings = vec![];

        for path in paths {
            if path.len() < 2 {
                continue;
            }

            if let Some(pattern) = dash_pattern.as_ref().filter(|pattern| !pattern.is_empty()) {
                for span in dash_path(path.points(), path.is_closed(), pattern, dash_offset) {
                    if span.len() < 2 {
                        continue;
                    }

                    let ring = self.stroker.open_ring(&span);
                    if ring.len() >= 3 {
                        rings.push(ring);
                    }
                }
            } else if path.is_closed() {
                let (outer, inner) = self.stroker.closed_rings(path.points());

                if outer.len() >= 3 {
                    rings.push(outer);
                }
                if inner.len() >= 3 {
                    rings.push(inner);
                }
            } else {
                let ring = self.stroker.open_ring(path.points());
                if ring.len() >= 3 {
                    rings.push(ring);
                }
            }
        }

        self.merge_rings(rings)
    }

    ///
    /// Merges stroked rings into the final outline by partitioning them between the
    /// clipper's operand sets and taking the union
    ///
    fn merge_rings(&self, mut rings: Vec<Vec<Point>>) -> Vec<Path> {
        let count = rings.len();

        if count == 0 {
            return vec![];
        }

        if count == 1 {
            // A union needs both operand sets non-empty, so a lone ring passes
            // through untouched
            return vec![Path::new(rings.pop().unwrap(), true)];
        }

        debug!("Merging {} stroke rings through a non-zero union", count);

        let mut clipper = Clipper::new(WindingRule::NonZero);

        for (ring_idx, ring) in rings.iter().enumerate() {
            let role = if ring_idx == 0 {
                ClipRole::Subject
            } else if ring_idx == count - 1 {
                ClipRole::Clip
            } else if ring_idx % 2 == 1 {
                ClipRole::Clip
            } else {
                ClipRole::Subject
            };

            clipper.add_ring(ring, role);
        }

        clipper.execute(ClipOperation::Union)
    }
}
