use super::edge_table::*;
use super::winding::*;

use crate::geometry::sort::*;
use crate::geometry::*;
use crate::path::*;

use smallvec::*;

///
/// A closed area that can be queried by horizontal scanline
///
/// Callers hold a handle to 'something scannable' rather than a concrete region type.
/// Implementations are immutable once constructed: `scan` takes `&self`, owns no
/// internal mutable caches and uses only per-call scratch, so multiple scanlines of
/// the same region can be computed from different worker threads at once.
///
pub trait ScanRegion: Send + Sync {
    ///
    /// The integer-aligned rectangle enclosing every point this region can return.
    /// The y range of this rectangle is the range of scanlines worth scanning
    ///
    fn bounds(&self) -> PathBounds;

    ///
    /// Upper bound on the number of crossings a single scan can produce, used by
    /// callers to size intersection buffers
    ///
    fn max_intersections(&self) -> usize;

    ///
    /// Finds every x position where the region boundary crosses the horizontal line
    /// at `y`, writing them to `buffer` in ascending order and returning the count
    ///
    /// Crossings are reduced according to the winding rule before being returned, so
    /// downstream fill logic can pair them up left to right.
    ///
    /// The buffer must have space for at least `max_intersections()` values: an
    /// undersized buffer is a caller contract breach and panics.
    ///
    fn scan(&self, y: f32, buffer: &mut [f32], rule: WindingRule) -> usize;
}

///
/// A scannable region wrapping a single closed path
///
pub struct PathRegion {
    /// The edges of the path, prepared for scanline queries
    edges: Vec<ScanEdge>,

    /// Integer-aligned bounds of the path points
    bounds: PathBounds,
}

impl PathRegion {
    ///
    /// Creates a region from a closed path
    ///
    /// The path is read once at construction: the region keeps no reference to it
    /// afterwards. Open paths are treated as implicitly closed, since only a closed
    /// area can be scanned.
    ///
    pub fn new(path: &Path) -> PathRegion {
        PathRegion {
            edges:  build_edge_table(path.points()),
            bounds: path.bounds(),
        }
    }

    ///
    /// Creates a region covering every figure of a path set at once
    ///
    /// The figures are scanned as a single compound shape under whichever winding
    /// rule each scan call requests.
    ///
    pub fn from_path_set(paths: &PathSet) -> PathRegion {
        let edges = paths.paths().iter()
            .flat_map(|path| build_edge_table(path.points()))
            .collect::<Vec<_>>();
        let bounds = PathBounds::from_points(paths.paths().iter().flat_map(|path| path.points().iter()));

        PathRegion { edges, bounds }
    }

    ///
    /// Scans many rows at once, fanning the work out across a thread pool
    ///
    /// Equivalent to calling `scan` once per y position; each worker owns its own
    /// scratch buffer.
    ///
    #[cfg(feature = "multithreading")]
    pub fn scan_rows(&self, y_positions: &[f32], rule: WindingRule) -> Vec<Vec<f32>> {
        use rayon::prelude::*;

        y_positions.par_iter()
            .map_init(
                || vec![0.0f32; self.max_intersections()],
                |buffer, y| {
                    let count = self.scan(*y, buffer, rule);
                    buffer[0..count].to_vec()
                })
            .collect()
    }

    ///
    /// Scans many rows one after another
    ///
    /// The single-threaded form of `scan_rows`, used when the `multithreading`
    /// feature is disabled.
    ///
    #[cfg(not(feature = "multithreading"))]
    pub fn scan_rows(&self, y_positions: &[f32], rule: WindingRule) -> Vec<Vec<f32>> {
        let mut buffer = vec![0.0f32; self.max_intersections()];

        y_positions.iter()
            .map(|y| {
                let count = self.scan(*y, &mut buffer, rule);
                buffer[0..count].to_vec()
            })
            .collect()
    }
}

impl ScanRegion for PathRegion {
    #[inline]
    fn bounds(&self) -> PathBounds {
        self.bounds
    }

    #[inline]
    fn max_intersections(&self) -> usize {
        self.edges.len()
    }

    fn scan(&self, y: f32, buffer: &mut [f32], rule: WindingRule) -> usize {
        if buffer.len() < self.max_intersections() {
            panic!(
                "Cannot scan: needed an intersection buffer with space for {} crossings but found space for {}",
                self.max_intersections(), buffer.len()
            );
        }

        // Collect the crossings for this scanline into per-call scratch
        let mut crossings: SmallVec<[f32; 16]> = smallvec![];
        let mut directions: SmallVec<[i32; 16]> = smallvec![];

        for edge in edges_at(&self.edges, y) {
            crossings.push(edge.x_at(y));
            directions.push(edge.direction);
        }

        // Downstream fill logic pairs crossings up left to right
        sort_keys_with_values(&mut crossings, &mut directions);

        match rule {
            WindingRule::EvenOdd => {
                // Every crossing toggles the fill state
                buffer[0..crossings.len()].copy_from_slice(&crossings);

                crossings.len()
            }

            WindingRule::NonZero => {
                // Keep the crossings where the accumulated winding enters or leaves
                // zero: those bound the filled spans
                let mut count   = 0;
                let mut winding = 0;

                for (x, direction) in crossings.iter().zip(directions.iter()) {
                    let was_outside = winding == 0;
                    winding += direction;

                    if was_outside || winding == 0 {
                        buffer[count] = *x;
                        count += 1;
                    }
                }

                count
            }
        }
    }
}
