//! False-color single channel samples through piecewise-linear gradients.
//!
//! ```
//! use gradient_colormap::{to_unit, ColormapOptions, PaletteRegistry, Preset};
//!
//! let registry = PaletteRegistry::builtin().unwrap();
//! let gradient = ColormapOptions::new(Preset::Fastie).resolve(&registry).unwrap();
//! let pixel = gradient.evaluate(to_unit(200)).unwrap().to_bytes();
//! assert_eq!(pixel, [255, 211, 0]);
//! ```

pub mod colors;
pub mod error;
pub mod gradient;
pub mod options;
pub mod palettes;
pub mod table;

pub use colors::Rgb;
pub use error::{ColormapError, Result};
pub use gradient::{ColorStop, Gradient, GradientTable};
pub use options::{ColormapOptions, ColormapSource};
pub use palettes::{colorize_byte, to_unit, Colorize, PaletteRegistry, Preset};

/// Colors a single byte sample according to `options`.
///
/// This resolves the colormap on every call; when coloring many samples,
/// resolve the options once and call [`Gradient::evaluate`] directly.
pub fn colormap(value: u8, options: &ColormapOptions) -> Result<Rgb> {
    let registry = PaletteRegistry::builtin()?;
    options.resolve(&registry)?.evaluate(to_unit(value))
}
