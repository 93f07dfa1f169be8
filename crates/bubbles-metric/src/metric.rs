use super::*;
use bubbles_core::*;

/// The fixed registry of named distance functions.
///
/// Each variant forwards to the unit struct of the same name, so the enum is
/// just a way to pick a metric by name at runtime and iterate over all of
/// them in a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    SquaredEuclidean,
    Euclidean,
    Manhattan,
    Chebyshev,
    Hamming,
    BrayCurtis,
    Canberra,
}

impl Metric {
    /// Every metric, in registry order.
    pub const fn all() -> [Self; 7] {
        [
            Self::SquaredEuclidean,
            Self::Euclidean,
            Self::Manhattan,
            Self::Chebyshev,
            Self::Hamming,
            Self::BrayCurtis,
            Self::Canberra,
        ]
    }
    /// Display name, also used to build output filenames.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SquaredEuclidean => "SquaredEuclideanDistance",
            Self::Euclidean => "EuclideanDistance",
            Self::Manhattan => "ManhattanDistance",
            Self::Chebyshev => "ChebyshevDistance",
            Self::Hamming => "HammingDistance",
            Self::BrayCurtis => "BrayCurtisDistance",
            Self::Canberra => "CanberraDistance",
        }
    }
    /// Short lowercase alias accepted on the command line.
    pub const fn alias(&self) -> &'static str {
        match self {
            Self::SquaredEuclidean => "sqeuclidean",
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
            Self::Chebyshev => "chebyshev",
            Self::Hamming => "hamming",
            Self::BrayCurtis => "braycurtis",
            Self::Canberra => "canberra",
        }
    }
    /// Whether Lloyd's mean update is guaranteed not to increase inertia.
    pub const fn is_mean_minimizing(&self) -> bool {
        matches!(self, Self::SquaredEuclidean | Self::Euclidean)
    }
}

impl Distance for Metric {
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        match self {
            Self::SquaredEuclidean => SquaredEuclidean.measure(a, b),
            Self::Euclidean => Euclidean.measure(a, b),
            Self::Manhattan => Manhattan.measure(a, b),
            Self::Chebyshev => Chebyshev.measure(a, b),
            Self::Hamming => Hamming.measure(a, b),
            Self::BrayCurtis => BrayCurtis.measure(a, b),
            Self::Canberra => Canberra.measure(a, b),
        }
    }
}

impl TryFrom<&str> for Metric {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::all()
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s) || m.alias().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid(format!("unknown metric {:?}", s)))
    }
}

impl std::str::FromStr for Metric {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
