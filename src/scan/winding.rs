///
/// Policy for deciding which regions of a possibly self-overlapping path are inside
///
/// * `EvenOdd` toggles the fill state at every boundary crossing.
/// * `NonZero` accumulates signed edge directions and fills wherever the accumulated
///   winding is not zero.
///
/// The rule changes how raw crossings are reduced to filled spans, not how crossings
/// are detected.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WindingRule {
    EvenOdd,
    NonZero,
}

impl WindingRule {
    ///
    /// Whether a winding count means 'inside' under this rule
    ///
    #[inline]
    pub fn is_inside(&self, winding: i32) -> bool {
        match self {
            WindingRule::EvenOdd => winding % 2 != 0,
            WindingRule::NonZero => winding != 0,
        }
    }
}
