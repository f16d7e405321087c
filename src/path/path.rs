use crate::geometry::*;

use itertools::*;

///
/// A flattened path: an ordered sequence of points plus a closed/open flag
///
/// Paths are built once through `PathBuilder` and treated as immutable afterwards.
/// When a path is closed the first and last points are treated as connected; the
/// sequence is not required to literally repeat the first point at the end.
///
/// A point that exactly repeats an earlier point (a path that touches itself) is
/// preserved as-is: flattening never collapses or drops literal input points.
///
#[derive(Clone, PartialEq, Debug)]
pub struct Path {
    points:     Vec<Point>,
    is_closed:  bool,
}

impl Path {
    ///
    /// Creates a path from a point sequence
    ///
    #[inline]
    pub fn new(points: Vec<Point>, is_closed: bool) -> Path {
        Path { points, is_closed }
    }

    ///
    /// The points making up this path, in order
    ///
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    ///
    /// Whether the last point connects back to the first
    ///
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    ///
    /// Number of points in this path
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    ///
    /// True if this path contains no points
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    ///
    /// The integer-aligned bounding rectangle enclosing every point of this path
    ///
    #[inline]
    pub fn bounds(&self) -> PathBounds {
        PathBounds::from_points(self.points.iter())
    }

    ///
    /// Total polyline length of this path, including the closing edge when closed
    ///
    pub fn length(&self) -> f32 {
        if self.points.len() < 2 {
            return 0.0;
        }

        let mut length = self.points.iter()
            .tuple_windows::<(_, _)>()
            .map(|(from, to)| from.distance(to))
            .sum::<f32>();

        if self.is_closed {
            length += self.points[self.points.len() - 1].distance(&self.points[0]);
        }

        length
    }
}

///
/// The result of building a path session: one flattened path per figure, in draw order
///
/// This is a set rather than a hierarchy: figures carry no nesting relationship beyond
/// their geometry.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PathSet {
    paths: Vec<Path>,
}

impl PathSet {
    ///
    /// Creates a path set from a list of paths
    ///
    #[inline]
    pub fn new(paths: Vec<Path>) -> PathSet {
        PathSet { paths }
    }

    ///
    /// The paths in this set, in the order their figures were drawn
    ///
    #[inline]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    ///
    /// Number of paths in this set
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    ///
    /// True if this set contains no paths
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    ///
    /// Consumes the set, returning the paths it contains
    ///
    #[inline]
    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }
}

impl IntoIterator for PathSet {
    type Item     = Path;
    type IntoIter = std::vec::IntoIter<Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item     = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
