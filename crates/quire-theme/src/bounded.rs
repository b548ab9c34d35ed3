//! Integers that saturate into a fixed range.

use std::fmt;

/// An `i32` that always lies in `LO..=HI`.
///
/// Out-of-range input is clamped rather than rejected, so values read from
/// hand-edited theme files can never push a field outside its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bounded<const LO: i32, const HI: i32>(i32);

impl<const LO: i32, const HI: i32> Bounded<LO, HI> {
    pub const MIN: i32 = LO;
    pub const MAX: i32 = HI;

    pub fn new(value: i32) -> Self {
        Self(value.clamp(LO, HI))
    }

    pub fn get(self) -> i32 {
        self.0
    }

    pub fn set(&mut self, value: i32) {
        self.0 = value.clamp(LO, HI);
    }
}

impl<const LO: i32, const HI: i32> From<i32> for Bounded<LO, HI> {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl<const LO: i32, const HI: i32> From<Bounded<LO, HI>> for i32 {
    fn from(value: Bounded<LO, HI>) -> Self {
        value.0
    }
}

impl<const LO: i32, const HI: i32> fmt::Display for Bounded<LO, HI> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub type Opacity = Bounded<0, 100>;
pub type PanelWidth = Bounded<500, 9999>;
pub type Rounding = Bounded<0, 100>;
pub type Margin = Bounded<1, 250>;
pub type Padding = Bounded<0, 250>;
pub type BlurRadius = Bounded<1, 128>;
pub type ShadowOffset = Bounded<0, 128>;
pub type ShadowRadius = Bounded<1, 128>;
pub type LineSpacing = Bounded<50, 1000>;
pub type ParagraphSpacing = Bounded<0, 1000>;
pub type TabWidth = Bounded<1, 1000>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps() {
        assert_eq!(Bounded::<1, 250>::new(0).get(), 1);
        assert_eq!(Bounded::<1, 250>::new(251).get(), 250);
        assert_eq!(Bounded::<1, 250>::new(65).get(), 65);
    }

    #[test]
    fn set_saturates() {
        let mut width = PanelWidth::new(700);
        width.set(-5);
        assert_eq!(width.get(), 500);
        width.set(i32::MAX);
        assert_eq!(width.get(), 9999);
        width.set(800);
        assert_eq!(width.get(), 800);
    }

    #[test]
    fn equality_compares_clamped_value() {
        assert_eq!(Opacity::new(150), Opacity::new(100));
        assert_ne!(Opacity::new(99), Opacity::new(100));
    }

    #[test]
    fn conversions() {
        let radius: BlurRadius = 300.into();
        assert_eq!(i32::from(radius), 128);
        assert_eq!(radius.to_string(), "128");
        assert_eq!(BlurRadius::MIN, 1);
        assert_eq!(BlurRadius::MAX, 128);
    }

    fn assert_clamps<const LO: i32, const HI: i32>() {
        assert_eq!(Bounded::<LO, HI>::new(LO - 1).get(), LO);
        assert_eq!(Bounded::<LO, HI>::new(i32::MIN).get(), LO);
        assert_eq!(Bounded::<LO, HI>::new(HI + 1).get(), HI);
        assert_eq!(Bounded::<LO, HI>::new(i32::MAX).get(), HI);
    }

    #[test]
    fn every_theme_range_clamps() {
        assert_clamps::<0, 100>();
        assert_clamps::<500, 9999>();
        assert_clamps::<1, 250>();
        assert_clamps::<0, 250>();
        assert_clamps::<1, 128>();
        assert_clamps::<0, 128>();
        assert_clamps::<50, 1000>();
        assert_clamps::<0, 1000>();
        assert_clamps::<1, 1000>();
    }
}
