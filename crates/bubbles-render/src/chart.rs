use super::*;
use anyhow::Context;
use bubbles_core::*;
use bubbles_kmeans::Dataset;
use std::path::Path;

/// A square bubble chart with a title, a framed plot area, ticks, and X/Y
/// axis labels.
///
/// The data range is fitted to every point of every series, and the plot
/// area is inset by the largest bubble radius so that no disc is clipped.
/// Series are drawn in insertion order, later series on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    title: String,
    size: f64,
    series: Vec<Bubbles>,
}

impl Chart {
    const TICKS: usize = 5;
    const FONT: f64 = 10.;
    const TITLE_FONT: f64 = 12.;
    const MARGIN_LEFT: f64 = 42.;
    const MARGIN_RIGHT: f64 = 10.;
    const MARGIN_TOP: f64 = 24.;
    const MARGIN_BOTTOM: f64 = 38.;

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            size: CHART_SIZE,
            series: Vec::new(),
        }
    }
    /// The unclustered cloud in one color. Only planar datasets can be drawn.
    pub fn raw(dataset: &Dataset) -> Result<Self> {
        if dataset.dimension() != DIMENSION {
            return Err(Error::invalid(format!(
                "can only draw {}D points, got {}D",
                DIMENSION,
                dataset.dimension()
            )));
        }
        let points = dataset.iter().map(|p| (p.x(), p.y())).collect();
        Ok(Self::new("Bubbles").with(Bubbles::new(points, Palette::RAW, RAW_RADIUS)))
    }
    /// One series per cluster, colored by label.
    pub fn clusters(set: &ClusterSet, palette: &Palette) -> Self {
        set.iter()
            .map(|(j, points)| Bubbles::new(points.to_vec(), palette.color(j), CLUSTER_RADIUS))
            .fold(Self::new("Bubbles Cluster"), Self::with)
    }
    pub fn with(mut self, series: Bubbles) -> Self {
        self.series.push(series);
        self
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn series(&self) -> &[Bubbles] {
        &self.series
    }
    /// The chart as a standalone SVG document.
    pub fn svg(&self) -> String {
        self.to_string()
    }
    /// Writes the SVG document to `path`, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        std::fs::write(path, self.svg()).with_context(|| format!("write {}", path.display()))?;
        log::debug!("{:<32}{:<32}", "chart saved", path.display());
        Ok(())
    }

    /// Data bounds over every series as ((xmin, xmax), (ymin, ymax)).
    /// Degenerate or empty ranges widen to a unit span.
    fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let points = self.series.iter().flat_map(|s| s.points().iter());
        let (xs, ys) = points.fold(
            ((f64::INFINITY, f64::NEG_INFINITY), (f64::INFINITY, f64::NEG_INFINITY)),
            |((x0, x1), (y0, y1)), &(x, y)| ((x0.min(x), x1.max(x)), (y0.min(y), y1.max(y))),
        );
        (Self::widen(xs), Self::widen(ys))
    }
    fn widen((lo, hi): (f64, f64)) -> (f64, f64) {
        match (lo.is_finite() && hi.is_finite(), lo < hi) {
            (true, true) => (lo, hi),
            (true, false) => (lo - 0.5, hi + 0.5),
            (false, _) => (0., 1.),
        }
    }
    /// Plot area in chart points as ((left, right), (top, bottom)),
    /// before the bubble inset.
    fn frame(&self) -> ((f64, f64), (f64, f64)) {
        (
            (Self::MARGIN_LEFT, self.size - Self::MARGIN_RIGHT),
            (Self::MARGIN_TOP, self.size - Self::MARGIN_BOTTOM),
        )
    }
    fn inset(&self) -> f64 {
        self.series.iter().map(Bubbles::radius).fold(0., f64::max)
    }
    /// Maps data coordinates to chart points, y growing upward.
    fn projector(&self) -> impl Fn((f64, f64)) -> (f64, f64) {
        let ((xmin, xmax), (ymin, ymax)) = self.bounds();
        let ((left, right), (top, bottom)) = self.frame();
        let pad = self.inset();
        let (left, right, top, bottom) = (left + pad, right - pad, top + pad, bottom - pad);
        move |(x, y)| {
            (
                left + (x - xmin) / (xmax - xmin) * (right - left),
                bottom - (y - ymin) / (ymax - ymin) * (bottom - top),
            )
        }
    }
}

impl std::fmt::Display for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self.size;
        let ((left, right), (top, bottom)) = self.frame();
        let ((xmin, xmax), (ymin, ymax)) = self.bounds();
        let project = self.projector();
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{s}pt" height="{s}pt" viewBox="0 0 {s} {s}">"#
        )?;
        writeln!(f, r#"<rect width="{s}" height="{s}" fill="white"/>"#)?;
        writeln!(
            f,
            r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{}" text-anchor="middle">{}</text>"#,
            s / 2.,
            Self::TITLE_FONT + 4.,
            Self::TITLE_FONT,
            escape(&self.title)
        )?;
        writeln!(
            f,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black" stroke-width="0.5"/>"#,
            left,
            top,
            right - left,
            bottom - top
        )?;
        for i in 0..Self::TICKS {
            let t = i as f64 / (Self::TICKS - 1) as f64;
            let x = xmin + t * (xmax - xmin);
            let y = ymin + t * (ymax - ymin);
            let (px, _) = project((x, ymin));
            let (_, py) = project((xmin, y));
            writeln!(
                f,
                r#"<line x1="{px:.2}" y1="{bottom:.2}" x2="{px:.2}" y2="{:.2}" stroke="black" stroke-width="0.5"/>"#,
                bottom + 3.
            )?;
            writeln!(
                f,
                r#"<text x="{px:.2}" y="{:.2}" font-family="sans-serif" font-size="{}" text-anchor="middle">{}</text>"#,
                bottom + 3. + Self::FONT,
                Self::FONT,
                tick(x)
            )?;
            writeln!(
                f,
                r#"<line x1="{:.2}" y1="{py:.2}" x2="{left:.2}" y2="{py:.2}" stroke="black" stroke-width="0.5"/>"#,
                left - 3.
            )?;
            writeln!(
                f,
                r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{}" text-anchor="end">{}</text>"#,
                left - 5.,
                py + Self::FONT / 3.,
                Self::FONT,
                tick(y)
            )?;
        }
        writeln!(
            f,
            r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{}" text-anchor="middle">X</text>"#,
            (left + right) / 2.,
            s - 6.,
            Self::FONT
        )?;
        writeln!(
            f,
            r#"<text x="10" y="{:.2}" font-family="sans-serif" font-size="{}" text-anchor="middle" transform="rotate(-90 10 {:.2})">Y</text>"#,
            (top + bottom) / 2.,
            Self::FONT,
            (top + bottom) / 2.
        )?;
        for series in self.series.iter() {
            writeln!(f, r#"<g fill="{}">"#, series.color())?;
            for &point in series.points() {
                let (cx, cy) = project(point);
                writeln!(
                    f,
                    r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{}"/>"#,
                    series.radius()
                )?;
            }
            writeln!(f, "</g>")?;
        }
        writeln!(f, "</svg>")
    }
}

fn tick(v: f64) -> String {
    format!("{:.2}", v)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
