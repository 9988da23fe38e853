use crate::colors::Rgb;
use crate::error::{ColormapError, Result};
use crate::gradient::{Gradient, GradientTable, StopRow};
use log::*;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
pub mod default;
pub mod extended;

pub trait Colorize {
    fn color_at(&self, x: f64) -> Result<Rgb>;
}

impl Colorize for Gradient {
    fn color_at(&self, x: f64) -> Result<Rgb> {
        self.evaluate(x)
    }
}

/// Scale a byte value from 0..=255 to between 0 and 1
pub fn to_unit(value: u8) -> f64 {
    f64::from(value) / 255.0
}

/// Normalizes a byte sample, colors it with the palette and converts the result back to bytes.
pub fn colorize_byte(palette: &dyn Colorize, value: u8) -> Result<[u8; 3]> {
    palette.color_at(to_unit(value)).map(|rgb| rgb.to_bytes())
}

/// The bundled gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Greyscale,
    BluWhtGrnGis,
    BrnToGrn,
    BluToRedJet,
    Colors16,
    Default,
    Fastie,
    Stretched,
}

impl Preset {
    pub const ALL: &'static [Preset] = &[
        Preset::Greyscale,
        Preset::BluWhtGrnGis,
        Preset::BrnToGrn,
        Preset::BluToRedJet,
        Preset::Colors16,
        Preset::Default,
        Preset::Fastie,
        Preset::Stretched,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Greyscale => "greyscale",
            Preset::BluWhtGrnGis => "bluwhtgrngis",
            Preset::BrnToGrn => "brntogrn",
            Preset::BluToRedJet => "blutoredjet",
            Preset::Colors16 => "colors16",
            Preset::Default => "default",
            Preset::Fastie => "fastie",
            Preset::Stretched => "stretched",
        }
    }

    fn rows(&self) -> &'static [StopRow] {
        match self {
            Preset::Greyscale => extended::GREYSCALE,
            Preset::BluWhtGrnGis => extended::BLUWHTGRNGIS,
            Preset::BrnToGrn => extended::BRNTOGRN,
            Preset::BluToRedJet => extended::BLUTOREDJET,
            Preset::Colors16 => extended::COLORS16,
            Preset::Default => default::DEFAULT,
            Preset::Fastie => extended::FASTIE,
            Preset::Stretched => extended::STRETCHED,
        }
    }

    pub fn table(&self) -> GradientTable {
        GradientTable::from_rows(self.rows())
    }

    pub fn gradient(&self) -> Result<Gradient> {
        Gradient::strict(self.table())
    }
}

impl FromStr for Preset {
    type Err = ColormapError;

    fn from_str(name: &str) -> Result<Self> {
        Preset::ALL
            .iter()
            .copied()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| ColormapError::UnknownPreset(name.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named gradients plus the gradient used when a name cannot be resolved.
#[derive(Debug, Clone)]
pub struct PaletteRegistry {
    palettes: BTreeMap<String, Gradient>,
    fallback: Gradient,
}

impl PaletteRegistry {
    /// All bundled presets, falling back to [`Preset::Default`].
    pub fn builtin() -> Result<Self> {
        let palettes = Preset::ALL
            .iter()
            .map(|preset| -> Result<(String, Gradient)> {
                Ok((preset.name().to_string(), preset.gradient()?))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self {
            palettes,
            fallback: Preset::Default.gradient()?,
        })
    }

    /// Adds or replaces a named palette.
    pub fn register<S: Into<String>>(&mut self, name: S, gradient: Gradient) {
        let name = name.into();
        if self.palettes.insert(name.clone(), gradient).is_some() {
            debug!("Replaced palette '{}'", name);
        }
    }

    pub fn with_fallback(mut self, fallback: Gradient) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback(&self) -> &Gradient {
        &self.fallback
    }

    pub fn lookup(&self, name: &str) -> Result<&Gradient> {
        self.palettes
            .get(name)
            .ok_or_else(|| ColormapError::UnknownPreset(name.to_string()))
    }

    pub fn lookup_or_default(&self, name: &str) -> &Gradient {
        match self.lookup(name) {
            Ok(gradient) => gradient,
            Err(e) => {
                warn!("{}, using the default colormap", e);
                &self.fallback
            }
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn presets_pass_strict_validation() {
        for preset in Preset::ALL {
            assert!(preset.gradient().is_ok(), "{} is malformed", preset);
        }
    }

    #[test]
    fn preset_names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), *preset);
        }
        assert!(matches!(
            "ndvi".parse::<Preset>(),
            Err(ColormapError::UnknownPreset(name)) if name == "ndvi"
        ));
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        let registry = PaletteRegistry::builtin().unwrap();
        assert!(registry.lookup("nope").is_err());
        assert_eq!(
            registry.lookup_or_default("nope"),
            &Preset::Default.gradient().unwrap()
        );
        assert_eq!(
            registry.lookup_or_default("fastie"),
            &Preset::Fastie.gradient().unwrap()
        );
    }

    #[test]
    fn registered_palettes_are_found() {
        let mut registry = PaletteRegistry::builtin().unwrap();
        let mine = Gradient::new(GradientTable::from_rows(&[(0.0, [1, 2, 3], [4, 5, 6])])).unwrap();
        registry.register("mine", mine.clone());
        assert_eq!(registry.lookup("mine").unwrap(), &mine);
        assert!(registry.names().any(|name| name == "mine"));
        assert_eq!(registry.names().count(), Preset::ALL.len() + 1);
    }

    #[test]
    fn fallback_can_be_replaced() {
        let grey = Preset::Greyscale.gradient().unwrap();
        let registry = PaletteRegistry::builtin().unwrap().with_fallback(grey.clone());
        assert_eq!(registry.lookup_or_default("missing"), &grey);
    }

    #[test]
    fn normalize_goes_up() {
        let grey = Preset::Greyscale.gradient().unwrap();
        assert_eq!(
            (0..=255u8)
                .map(|v| colorize_byte(&grey, v).unwrap()[0])
                .collect::<Vec<_>>(),
            (0..=255u8).collect::<Vec<_>>()
        );
    }

    #[test]
    fn to_unit_endpoints() {
        assert_eq!(to_unit(0), 0.0);
        assert_eq!(to_unit(255), 1.0);
    }

    proptest! {
        #[test]
        fn every_preset_colors_every_byte(value in any::<u8>()) {
            for preset in Preset::ALL {
                let gradient = preset.gradient().unwrap();
                prop_assert!(gradient.color_at(to_unit(value)).unwrap().is_finite());
                colorize_byte(&gradient, value).unwrap();
            }
        }
    }
}
