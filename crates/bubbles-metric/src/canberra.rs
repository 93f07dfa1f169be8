use super::*;
use bubbles_core::*;

/// [Canberra Distance](https://en.wikipedia.org/wiki/Canberra_distance)
///
/// Σ |aᵢ - bᵢ| / (|aᵢ| + |bᵢ|), where a position with aᵢ = bᵢ = 0
/// contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canberra;

impl Distance for Canberra {
    #[inline]
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y, x.abs() + y.abs()))
            .map(|(d, den)| if den == 0. { 0. } else { d.abs() / den })
            .sum()
    }
}
