//! Piecewise-linear gradients built from ordered color stops.
//!
//! A stop pins a color transition to a normalized position. Each stop opens a
//! segment that runs up to the next stop's position; the last segment always
//! runs up to `1.0`. Within a segment every channel moves linearly from the
//! stop's start color to its end color.

use crate::colors::Rgb;
use crate::error::{ColormapError, Result};
use itertools::Itertools;

/// A color transition pinned to a normalized position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub start: Rgb,
    pub end: Rgb,
}

impl ColorStop {
    pub fn new(position: f64, start: impl Into<Rgb>, end: impl Into<Rgb>) -> Self {
        Self {
            position,
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Row layout used by the bundled presets: `(position, start, end)`.
pub type StopRow = (f64, [u8; 3], [u8; 3]);

/// An ordered list of color stops, as authored. Nothing is validated here;
/// see [`Gradient::new`] and [`Gradient::strict`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GradientTable {
    stops: Vec<ColorStop>,
}

impl GradientTable {
    pub fn new(stops: Vec<ColorStop>) -> Self {
        Self { stops }
    }

    pub fn from_rows(rows: &[StopRow]) -> Self {
        rows.iter()
            .map(|&(position, start, end)| ColorStop::new(position, start, end))
            .collect()
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl std::iter::FromIterator<ColorStop> for GradientTable {
    fn from_iter<I: IntoIterator<Item = ColorStop>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<ColorStop>> for GradientTable {
    fn from(stops: Vec<ColorStop>) -> Self {
        Self::new(stops)
    }
}

/// The segment chosen for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    index: usize,
    x0: f64,
    x1: f64,
    start: Rgb,
    end: Rgb,
}

/// Evaluates a validated, immutable [`GradientTable`].
///
/// Evaluation only reads the table, so a `Gradient` can be shared between
/// threads freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Accepts any non-empty table. Stop order is the caller's responsibility:
    /// out-of-order positions make segment selection unpredictable, but never panic.
    pub fn new(table: GradientTable) -> Result<Self> {
        if table.is_empty() {
            return Err(ColormapError::InvalidTable);
        }
        Ok(Self {
            stops: table.stops,
        })
    }

    /// Like [`Gradient::new`], but also rejects non-finite or decreasing
    /// positions, and a last stop at or past `1.0`, whose segment would be
    /// empty.
    pub fn strict(table: GradientTable) -> Result<Self> {
        if let Some(index) = table.stops.iter().position(|s| !s.position.is_finite()) {
            return Err(ColormapError::NonFinitePosition { index });
        }
        if let Some((index, (previous, current))) = table
            .stops
            .iter()
            .tuple_windows()
            .enumerate()
            .find(|(_, (a, b))| b.position < a.position)
        {
            return Err(ColormapError::OutOfOrderStops {
                index: index + 1,
                position: current.position,
                previous: previous.position,
            });
        }
        if let Some(last) = table.stops.last() {
            if last.position >= 1.0 {
                return Err(ColormapError::FinalStopOutOfRange {
                    index: table.stops.len() - 1,
                    position: last.position,
                });
            }
        }
        Self::new(table)
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Maps a normalized position to a color.
    ///
    /// Positions below the first stop give black rather than the first stop's
    /// color. Positions above `1.0` extrapolate along the last segment. The
    /// result is neither rounded nor clamped; use [`Rgb::to_bytes`] for that.
    pub fn evaluate(&self, x: f64) -> Result<Rgb> {
        // Legacy presets rely on black below the first stop.
        // TODO: offer clamping to the first stop's start color once no preset depends on this.
        if x < self.stops[0].position {
            return Ok(Rgb::BLACK);
        }

        let segment = self.select_segment(x);
        let width = segment.x1 - segment.x0;
        if width == 0.0 {
            return Err(ColormapError::DegenerateSegment {
                index: segment.index,
                position: segment.x0,
            });
        }

        let t = (x - segment.x0) / width;
        // `(to - from) + from` is not always `to`, so the segment end is returned as authored.
        let lerp = |from: f64, to: f64| if t == 1.0 { to } else { t * (to - from) + from };
        Ok(Rgb::new(
            lerp(segment.start.r, segment.end.r),
            lerp(segment.start.g, segment.end.g),
            lerp(segment.start.b, segment.end.b),
        ))
    }

    /// First segment whose `[position, next position)` contains `x`, falling
    /// back to the last segment, which always ends at `1.0`.
    fn select_segment(&self, x: f64) -> Segment {
        let last = self.stops.len() - 1;
        let index = self
            .stops
            .windows(2)
            .position(|pair| pair[0].position <= x && x < pair[1].position)
            .unwrap_or(last);
        let stop = &self.stops[index];
        Segment {
            index,
            x0: stop.position,
            x1: self.stops.get(index + 1).map_or(1.0, |next| next.position),
            start: stop.start,
            end: stop.end,
        }
    }
}

impl std::convert::TryFrom<GradientTable> for Gradient {
    type Error = ColormapError;

    fn try_from(table: GradientTable) -> Result<Self> {
        Self::new(table)
    }
}
