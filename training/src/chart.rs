use std::error::Error as StdError;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::error::{Error, Result};

const COLORS: [RGBColor; 5] = [RED, BLUE, GREEN, YELLOW, BLACK];
const STYLES: [LineStyle; 4] = [
    LineStyle::Solid,
    LineStyle::Dashed,
    LineStyle::DashDot,
    LineStyle::Dotted,
];

/// Each series gets its own color and line style, so this is the most
/// one chart can hold.
pub const MAX_SERIES: usize = STYLES.len();

const LINE_WIDTH: u32 = 3;
const LEGEND_LINE_LEN: i32 = 24;
const DEFAULT_SIZE: (u32, u32) = (800, 600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

impl LineStyle {
    /// Alternating on/off run lengths in pixels, starting with "on".
    /// Empty means a continuous line.
    pub fn pattern(self) -> &'static [u32] {
        match self {
            LineStyle::Solid => &[],
            LineStyle::Dashed => &[12, 6],
            LineStyle::DashDot => &[12, 5, 3, 5],
            LineStyle::Dotted => &[3, 5],
        }
    }
}

/// A labeled curve of `(x, y)` points.
#[derive(Debug, Clone)]
pub struct Series {
    points: Vec<(f64, f64)>,
    label: String,
}

impl Series {
    pub fn new(x: &[f64], y: &[f64], label: impl Into<String>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                what: "series y values",
                expected: x.len(),
                actual: y.len(),
            });
        }

        Ok(Self {
            points: x.iter().copied().zip(y.iter().copied()).collect(),
            label: label.into(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

/// Draws line charts into `<out_dir>/<title>.png`.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    out_dir: PathBuf,
    size: (u32, u32),
}

impl ChartRenderer {
    pub fn new<P: Into<PathBuf>>(out_dir: P) -> Self {
        Self {
            out_dir: out_dir.into(),
            size: DEFAULT_SIZE,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn chart_path(&self, title: &str) -> PathBuf {
        self.out_dir.join(format!("{}.png", title))
    }

    /// Renders up to [`MAX_SERIES`] curves on a fresh canvas and returns the
    /// image path. Asking for more logs a warning and writes nothing.
    pub fn render(
        &self,
        title: &str,
        x_label: &str,
        y_label: &str,
        series: &[Series],
    ) -> Result<Option<PathBuf>> {
        if series.len() > MAX_SERIES {
            log::warn!(
                "Too many series for chart '{}': {} requested, at most {}",
                title,
                series.len(),
                MAX_SERIES
            );
            return Ok(None);
        }

        fs::create_dir_all(&self.out_dir)?;
        let path = self.chart_path(title);

        self.draw(&path, title, x_label, y_label, series)
            .map_err(|e| Error::Chart(e.to_string()))?;

        log::info!("Chart written to {}", path.display());
        Ok(Some(path))
    }

    fn draw(
        &self,
        path: &Path,
        title: &str,
        x_label: &str,
        y_label: &str,
        series: &[Series],
    ) -> std::result::Result<(), Box<dyn StdError>> {
        // A new backend per call, painted white, so earlier renders of the
        // same title never show through.
        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let (x_range, y_range) = axis_ranges(series);
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(title, ("sans-serif", 24))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc(x_label)
            .y_desc(y_label)
            .draw()?;

        for (i, s) in series.iter().enumerate() {
            let style = COLORS[i].stroke_width(LINE_WIDTH);

            let pixels: Vec<(i32, i32)> = s
                .points
                .iter()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .map(|point| chart.backend_coord(point))
                .collect();

            for dash in dash_segments(&pixels, STYLES[i].pattern()) {
                root.draw(&PathElement::new(dash, style))?;
            }

            // Curve is already drawn in pixel space; this only registers the legend entry
            chart
                .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?
                .label(s.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + LEGEND_LINE_LEN, y)], style)
                });
        }

        if !series.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }

        root.present()?;
        Ok(())
    }
}

/// Splits a polyline into the visible pieces of an on/off dash pattern.
pub fn dash_segments(points: &[(i32, i32)], pattern: &[u32]) -> Vec<Vec<(i32, i32)>> {
    if points.len() < 2 || pattern.iter().all(|&run| run == 0) {
        return vec![points.to_vec()];
    }

    let mut dashes = Vec::new();
    let mut run = 0;
    let mut on = true;
    let mut left = pattern[0] as f64;
    let mut current = vec![points[0]];

    for pair in points.windows(2) {
        let (x0, y0) = (pair[0].0 as f64, pair[0].1 as f64);
        let (dx, dy) = (pair[1].0 as f64 - x0, pair[1].1 as f64 - y0);
        let len = (dx * dx + dy * dy).sqrt();

        // Walk every run boundary that falls inside this segment
        let mut t = 0.0;
        while len - t > left {
            t += left;
            let cut = (
                (x0 + dx * t / len).round() as i32,
                (y0 + dy * t / len).round() as i32,
            );

            current.push(cut);
            if on {
                dashes.push(std::mem::take(&mut current));
            }

            on = !on;
            run = (run + 1) % pattern.len();
            left = pattern[run] as f64;
        }

        left -= len - t;
        if on {
            current.push(pair[1]);
        }
    }

    if on && current.len() >= 2 {
        dashes.push(current);
    }
    dashes
}

fn axis_ranges(series: &[Series]) -> (Range<f64>, Range<f64>) {
    let points = || series.iter().flat_map(|s| s.points.iter());
    let x = bounds(points().map(|p| p.0));
    let y = bounds(points().map(|p| p.1));
    (padded(x, 0.0), padded(y, 0.05))
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Spans narrower than this fraction of the values' magnitude are drawn as
/// flat; tick steps that small vanish in f64 rounding.
const MIN_RELATIVE_SPAN: f64 = 1e-9;

/// Pads `lo..hi` by `margin` of its width. The result always has finite
/// ends and a finite, non-zero width.
fn padded(bounds: Option<(f64, f64)>, margin: f64) -> Range<f64> {
    let Some((lo, hi)) = bounds else {
        return 0.0..1.0;
    };

    let magnitude = lo.abs().max(hi.abs()).max(1.0);
    // Halves first: `hi - lo` overflows for extremes of opposite sign
    let half_span = hi / 2.0 - lo / 2.0;
    let pad = if half_span < magnitude * MIN_RELATIVE_SPAN / 2.0 {
        magnitude
    } else {
        half_span * 2.0 * margin
    };

    let start = (lo - pad).max(f64::MIN);
    let end = (hi + pad).min(f64::MAX);
    if (end - start).is_finite() {
        return start..end;
    }

    // Wider than f64 can measure: keep the widest window around the middle
    let mid = lo / 2.0 + hi / 2.0;
    (mid - f64::MAX / 2.0)..(mid + f64::MAX / 2.0)
}
