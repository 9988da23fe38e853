use crate::error::Result;
use crate::gradient::{Gradient, GradientTable};
use crate::palettes::{PaletteRegistry, Preset};
use log::*;

/// Where a caller's colormap comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ColormapSource {
    Named(String),
    Inline(GradientTable),
    Unspecified,
}

impl Default for ColormapSource {
    fn default() -> Self {
        ColormapSource::Unspecified
    }
}

impl From<&str> for ColormapSource {
    fn from(name: &str) -> Self {
        ColormapSource::Named(name.to_string())
    }
}

impl From<String> for ColormapSource {
    fn from(name: String) -> Self {
        ColormapSource::Named(name)
    }
}

impl From<Preset> for ColormapSource {
    fn from(preset: Preset) -> Self {
        ColormapSource::Named(preset.name().to_string())
    }
}

impl From<GradientTable> for ColormapSource {
    fn from(table: GradientTable) -> Self {
        ColormapSource::Inline(table)
    }
}

impl<T: Into<ColormapSource>> From<Option<T>> for ColormapSource {
    fn from(source: Option<T>) -> Self {
        source.map_or(ColormapSource::Unspecified, Into::into)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColormapOptions {
    pub colormap: ColormapSource,
}

impl ColormapOptions {
    pub fn new<S: Into<ColormapSource>>(colormap: S) -> Self {
        Self {
            colormap: colormap.into(),
        }
    }

    /// Picks the gradient these options describe. Unset or unknown names give
    /// the registry's fallback; inline tables only need to be non-empty.
    ///
    /// Resolve once per configuration and reuse the gradient for every sample.
    pub fn resolve(&self, registry: &PaletteRegistry) -> Result<Gradient> {
        match &self.colormap {
            ColormapSource::Named(name) => {
                debug!("Resolving colormap '{}'", name);
                Ok(registry.lookup_or_default(name).clone())
            }
            ColormapSource::Inline(table) => {
                debug!("Using inline colormap with {} stops", table.len());
                Gradient::new(table.clone())
            }
            ColormapSource::Unspecified => {
                debug!("No colormap given, using the default");
                Ok(registry.fallback().clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColormapError;
    use crate::gradient::ColorStop;
    use pretty_assertions::assert_eq;

    fn registry() -> PaletteRegistry {
        PaletteRegistry::builtin().unwrap()
    }

    #[test]
    fn unspecified_resolves_to_default() {
        assert_eq!(
            ColormapOptions::default().resolve(&registry()).unwrap(),
            Preset::Default.gradient().unwrap()
        );
        assert_eq!(
            ColormapOptions::new(None::<&str>).colormap,
            ColormapSource::Unspecified
        );
    }

    #[test]
    fn named_preset_resolves() {
        let options = ColormapOptions::new(Preset::BrnToGrn);
        assert_eq!(
            options.resolve(&registry()).unwrap(),
            Preset::BrnToGrn.gradient().unwrap()
        );
    }

    #[test]
    fn unknown_name_resolves_to_default() {
        let options = ColormapOptions::new("infrared");
        assert_eq!(
            options.resolve(&registry()).unwrap(),
            Preset::Default.gradient().unwrap()
        );
    }

    #[test]
    fn inline_table_is_used_as_is() {
        let table = GradientTable::new(vec![ColorStop::new(0.2, [1, 1, 1], [2, 2, 2])]);
        let gradient = ColormapOptions::new(table.clone())
            .resolve(&registry())
            .unwrap();
        assert_eq!(gradient.stops(), table.stops());
    }

    #[test]
    fn empty_inline_table_fails() {
        let options = ColormapOptions::new(GradientTable::default());
        assert!(matches!(
            options.resolve(&registry()),
            Err(ColormapError::InvalidTable)
        ));
    }
}
