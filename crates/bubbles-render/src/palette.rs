use bubbles_core::*;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Colors for the clusters of a K-cluster run.
///
/// Cluster c is `(250 - s·c, 0, s·c)` with `s = 250 / K` in integer
/// arithmetic, so cluster 0 is pure red and colors walk toward blue as the
/// label grows. For K = 7 the step is 35.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    k: usize,
}

impl Palette {
    /// Color of the raw, unclustered cloud.
    pub const RAW: Rgb = Rgb(196, 0, 128);

    pub fn new(k: usize) -> Self {
        Self { k: k.max(1) }
    }
    pub fn k(&self) -> usize {
        self.k
    }
    /// Color of cluster `label`. Labels at or past K saturate at the last
    /// cluster's color.
    pub fn color(&self, label: Label) -> Rgb {
        let span = COLOR_SPAN as usize;
        let step = span / self.k;
        let blue = step * label.min(self.k - 1);
        Rgb((span - blue) as u8, 0, blue as u8)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(K)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_clusters_step_by_35() {
        let palette = Palette::new(7);
        assert_eq!(palette.color(0), Rgb(250, 0, 0));
        assert_eq!(palette.color(1), Rgb(215, 0, 35));
        assert_eq!(palette.color(6), Rgb(40, 0, 210));
    }

    #[test]
    fn colors_are_distinct_within_k() {
        let palette = Palette::new(5);
        let colors = (0..5)
            .map(|c| palette.color(c))
            .collect::<std::collections::HashSet<Rgb>>();
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn huge_k_does_not_overflow() {
        let palette = Palette::new(1000);
        assert_eq!(palette.color(999), Rgb(250, 0, 0));
    }

    #[test]
    fn hex_display() {
        assert_eq!(Palette::RAW.to_string(), "#c40080");
    }
}
