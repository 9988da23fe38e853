use std::fmt;

/// A color triple with unclamped real channels, in r, g, b order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_finite(&self) -> bool {
        self.channels().iter().all(|c| c.is_finite())
    }

    /// Rounds every channel to the nearest integer and clamps it into `0..=255`,
    /// ready to be written into an 8-bit image buffer. NaN becomes 0.
    pub fn to_bytes(&self) -> [u8; 3] {
        [
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
        ]
    }
}

fn channel_to_byte(value: f64) -> u8 {
    if value.is_nan() {
        0
    } else {
        value.round().max(0.0).min(255.0) as u8
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r.into(), g.into(), b.into())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn bytes_round_to_nearest() {
        assert_eq!(Rgb::new(127.5, 127.49, 0.5).to_bytes(), [128, 127, 1]);
    }

    #[test]
    fn bytes_clamp_out_of_range() {
        assert_eq!(Rgb::new(-20.0, 300.0, 255.4).to_bytes(), [0, 255, 255]);
        assert_eq!(
            Rgb::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY).to_bytes(),
            [0, 255, 0]
        );
    }

    #[test]
    fn from_bytes() {
        assert_eq!(Rgb::from([6u8, 23, 86]), Rgb::new(6.0, 23.0, 86.0));
    }

    proptest! {
        #[test]
        fn whole_bytes_survive_conversion(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            prop_assert_eq!(Rgb::from([r, g, b]).to_bytes(), [r, g, b]);
        }
    }
}
