use bubbles_core::*;

/// A pure dissimilarity score between two vectors.
///
/// Implementors only provide [`Distance::measure`], the raw kernel, and may
/// assume both slices have the same length. Callers go through
/// [`Distance::distance`], which checks the lengths first so that a pluggable
/// kernel can never silently zip a short vector against a long one.
///
/// Any `Fn(&[Coordinate], &[Coordinate]) -> Energy` closure is a `Distance`,
/// so ad hoc metrics need no wrapper type.
pub trait Distance: Sync {
    /// Raw kernel over two vectors of equal length.
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy;

    /// Length-checked distance.
    fn distance(&self, a: &[Coordinate], b: &[Coordinate]) -> Result<Energy> {
        if a.len() == b.len() {
            Ok(self.measure(a, b))
        } else {
            Err(Error::DimensionMismatch {
                expected: a.len(),
                found: b.len(),
            })
        }
    }
}

impl<F> Distance for F
where
    F: Fn(&[Coordinate], &[Coordinate]) -> Energy + Sync,
{
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        self(a, b)
    }
}
