///
/// How the outside of a corner between two stroke segments is shaped
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LineJoin {
    /// Extend the segment edges until they meet, falling back to a bevel when the
    /// spike would exceed the miter limit
    Miter,

    /// Cut the corner with a straight edge
    Bevel,

    /// Round the corner with an arc
    Round,
}

///
/// How the ends of an open stroke are shaped
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LineCap {
    /// Stop flat at the end point
    Butt,

    /// Extend half the stroke width past the end point
    Square,

    /// Round the end with a semicircle
    Round,
}

///
/// Parameters controlling how a centerline is widened into a stroke outline
///
#[derive(Clone, PartialEq, Debug)]
pub struct StrokeOptions {
    /// Total stroke width (zero or negative widths are legal and produce nothing)
    pub width: f32,

    /// Corner treatment at interior vertices
    pub join: LineJoin,

    /// End treatment for open strokes, applied at both ends
    pub cap: LineCap,

    /// Maximum join spike length, as a multiple of the half-width
    pub miter_limit: f32,

    /// Alternating on/off lengths applied along the path before stroking each 'on'
    /// segment independently
    pub dash_pattern: Option<Vec<f32>>,

    /// Distance into the dash pattern at which the path starts
    pub dash_offset: f32,
}

impl Default for StrokeOptions {
    fn default() -> StrokeOptions {
        StrokeOptions {
            width:          1.0,
            join:           LineJoin::Miter,
            cap:            LineCap::Butt,
            miter_limit:    4.0,
            dash_pattern:   None,
            dash_offset:    0.0,
        }
    }
}

impl StrokeOptions {
    ///
    /// Sets the stroke width
    ///
    pub fn with_width(mut self, width: f32) -> StrokeOptions {
        self.width = width;
        self
    }

    ///
    /// Sets the join style for interior vertices
    ///
    pub fn with_join(mut self, join: LineJoin) -> StrokeOptions {
        self.join = join;
        self
    }

    ///
    /// Sets the cap style for open stroke ends
    ///
    pub fn with_cap(mut self, cap: LineCap) -> StrokeOptions {
        self.cap = cap;
        self
    }

    ///
    /// Sets the miter limit (a multiple of the half-width)
    ///
    pub fn with_miter_limit(mut self, miter_limit: f32) -> StrokeOptions {
        self.miter_limit = miter_limit;
        self
    }

    ///
    /// Sets the dash pattern (alternating on/off lengths)
    ///
    pub fn with_dash_pattern(mut self, pattern: Vec<f32>) -> StrokeOptions {
        self.dash_pattern = Some(pattern);
        self
    }

    ///
    /// Sets the offset into the dash pattern
    ///
    pub fn with_dash_offset(mut self, offset: f32) -> StrokeOptions {
        self.dash_offset = offset;
        self
    }
}
