use super::bezier::*;
use super::path::*;

use crate::geometry::*;

///
/// Incrementally builds one or more flattened paths from drawing commands
///
/// A builder session holds a current transform, a current point and a list of
/// in-progress figures (sub-paths). A figure starts implicitly on the first drawing
/// command, or explicitly with `start_figure`/`move_to`; closing a figure fixes its
/// closed flag at that moment. Bezier segments are flattened to line segments as they
/// are added, so the finished paths are always polylines.
///
/// Glyph and other command streams map directly onto this type: move/line/cubic/
/// quadratic/close events become the corresponding method calls, and the builder is
/// the only stateful side of that exchange.
///
pub struct PathBuilder {
    /// Finished figures, in draw order
    figures: Vec<Path>,

    /// Points of the figure currently being drawn
    current: Vec<Point>,

    /// The last point appended to the current figure, before transformation
    last_source_point: Option<Point>,

    /// Transform applied to points as they are appended
    transform: Transform2D,

    /// Curve flattening tolerance
    flatness: f32,
}

impl Default for PathBuilder {
    fn default() -> PathBuilder {
        PathBuilder::new()
    }
}

impl PathBuilder {
    ///
    /// Creates a new builder session with an identity transform
    ///
    pub fn new() -> PathBuilder {
        PathBuilder {
            figures:            vec![],
            current:            vec![],
            last_source_point:  None,
            transform:          Transform2D::identity(),
            flatness:           FLATNESS_TOLERANCE,
        }
    }

    ///
    /// Sets the transform applied to points appended after this call
    ///
    pub fn set_transform(&mut self, transform: Transform2D) {
        self.transform = transform;
    }

    ///
    /// Resets the transform back to the identity
    ///
    pub fn reset_origin(&mut self) {
        self.transform = Transform2D::identity();
    }

    ///
    /// Explicitly starts a new figure
    ///
    /// The figure in progress (if any) is finished as an open figure.
    ///
    pub fn start_figure(&mut self) {
        self.finish_figure(false);
    }

    ///
    /// Starts a new figure beginning at a point
    ///
    pub fn move_to(&mut self, point: Point) {
        self.finish_figure(false);
        self.append_point(point);
    }

    ///
    /// Adds a line segment between two points
    ///
    /// If the segment does not continue from the current point, its start point is
    /// appended first.
    ///
    pub fn add_line(&mut self, from: Point, to: Point) {
        self.continue_from(from);
        self.append_point(to);
    }

    ///
    /// Adds a line from the current point
    ///
    /// Starts a new figure at the target point if there is no current point.
    ///
    pub fn line_to(&mut self, to: Point) {
        self.append_point(to);
    }

    ///
    /// Adds a cubic bezier segment between two points, flattened to line segments
    ///
    pub fn add_bezier(&mut self, from: Point, cp1: Point, cp2: Point, to: Point) {
        self.continue_from(from);
        self.flatten_onto(from, cp1, cp2, to);
    }

    ///
    /// Adds a cubic bezier from the current point, flattened to line segments
    ///
    pub fn bezier_to(&mut self, cp1: Point, cp2: Point, to: Point) {
        let from = match self.last_source_point {
            Some(point) => point,
            None        => { self.append_point(to); return; }
        };

        self.flatten_onto(from, cp1, cp2, to);
    }

    ///
    /// Adds a quadratic bezier segment between two points, flattened to line segments
    ///
    /// The quadratic is elevated to the equivalent cubic and flattened the same way.
    ///
    pub fn add_quadratic_bezier(&mut self, from: Point, cp: Point, to: Point) {
        let cp1 = from.lerp(&cp, 2.0 / 3.0);
        let cp2 = to.lerp(&cp, 2.0 / 3.0);

        self.add_bezier(from, cp1, cp2, to);
    }

    ///
    /// Adds a quadratic bezier from the current point
    ///
    pub fn quadratic_to(&mut self, cp: Point, to: Point) {
        let from = match self.last_source_point {
            Some(point) => point,
            None        => { self.append_point(to); return; }
        };

        flatten_quadratic(self.transform_pt(from), self.transform_pt(cp), self.transform_pt(to), self.flatness, &mut self.current);
        self.last_source_point = Some(to);
    }

    ///
    /// Adds an axis-aligned rectangle as its own closed figure
    ///
    pub fn add_rect(&mut self, min: Point, max: Point) {
        self.start_figure();

        self.append_point(Point::new(min.x, min.y));
        self.append_point(Point::new(max.x, min.y));
        self.append_point(Point::new(max.x, max.y));
        self.append_point(Point::new(min.x, max.y));

        self.close_figure();
    }

    ///
    /// Closes the figure in progress
    ///
    /// The figure's closed state is fixed at this moment; drawing continues in a new
    /// figure.
    ///
    pub fn close_figure(&mut self) {
        self.finish_figure(true);
    }

    ///
    /// Finalizes the session into a path set
    ///
    /// Returns one path per figure, in draw order. A session with no drawing commands
    /// yields an empty set.
    ///
    pub fn build(mut self) -> PathSet {
        self.finish_figure(false);

        PathSet::new(self.figures)
    }

    ///
    /// Appends the start point of a segment unless it continues from the current point
    ///
    fn continue_from(&mut self, from: Point) {
        if self.last_source_point != Some(from) {
            self.append_point(from);
        }
    }

    ///
    /// Appends a transformed point to the current figure
    ///
    fn append_point(&mut self, point: Point) {
        let transformed = self.transform_pt(point);

        self.current.push(transformed);
        self.last_source_point = Some(point);
    }

    ///
    /// Flattens a cubic section onto the current figure (the start point must already
    /// be appended)
    ///
    fn flatten_onto(&mut self, from: Point, cp1: Point, cp2: Point, to: Point) {
        flatten_cubic(self.transform_pt(from), self.transform_pt(cp1), self.transform_pt(cp2), self.transform_pt(to), self.flatness, &mut self.current);
        self.last_source_point = Some(to);
    }

    #[inline]
    fn transform_pt(&self, point: Point) -> Point {
        if self.transform.is_identity() {
            point
        } else {
            self.transform.apply(point)
        }
    }

    ///
    /// Moves the figure in progress to the finished list
    ///
    /// Figures with fewer than two points describe no geometry and are dropped.
    ///
    fn finish_figure(&mut self, is_closed: bool) {
        let points = std::mem::take(&mut self.current);
        self.last_source_point = None;

        if points.len() >= 2 {
            self.figures.push(Path::new(points, is_closed));
        }
    }
}
