use super::*;
use bubbles_core::*;

/// [Manhattan Distance](https://en.wikipedia.org/wiki/Taxicab_geometry)
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Distance for Manhattan {
    #[inline]
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
    }
}
