use super::point::*;

///
/// An integer-aligned bounding rectangle for a set of path points
///
/// The minimum corner is rounded down and the maximum corner is rounded up, so every
/// point used to build the bounds lies inside the rectangle. Callers use this to pick
/// the range of scanlines worth scanning and to size intersection buffers.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PathBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl PathBounds {
    ///
    /// The empty bounds (contains no points)
    ///
    #[inline]
    pub fn empty() -> PathBounds {
        PathBounds { min_x: 0, min_y: 0, max_x: 0, max_y: 0 }
    }

    ///
    /// Computes the smallest integer-aligned rectangle enclosing a set of points
    ///
    pub fn from_points<'a>(points: impl IntoIterator<Item=&'a Point>) -> PathBounds {
        let mut min = (f32::MAX, f32::MAX);
        let mut max = (f32::MIN, f32::MIN);
        let mut any = false;

        for point in points {
            min.0 = min.0.min(point.x);
            min.1 = min.1.min(point.y);
            max.0 = max.0.max(point.x);
            max.1 = max.1.max(point.y);
            any   = true;
        }

        if !any {
            return PathBounds::empty();
        }

        PathBounds {
            min_x: min.0.floor() as i32,
            min_y: min.1.floor() as i32,
            max_x: max.0.ceil() as i32,
            max_y: max.1.ceil() as i32,
        }
    }

    ///
    /// Width of the bounding rectangle
    ///
    #[inline]
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    ///
    /// Height of the bounding rectangle
    ///
    #[inline]
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    ///
    /// True if the rectangle encloses no area
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}
