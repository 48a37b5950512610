//! World configuration.

use crate::{
    error::Error,
    rules::{Preset, Rule},
    world::World,
};
use educe::Educe;
use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world will be generated from this configuration.
///
/// The rule is chosen in three independent steps: the [`ruleset`] preset is
/// applied first (when given), then the [`birth`] digit string overrides
/// the birth counts, then the [`survival`] digit string overrides the
/// survival counts. With none of the three, the rule is Conway's Life.
///
/// [`ruleset`]: Self::ruleset
/// [`birth`]: Self::birth
/// [`survival`]: Self::survival
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Width.
    #[educe(Default = 28)]
    pub width: usize,

    /// Height.
    #[educe(Default = 28)]
    pub height: usize,

    /// Name of a rule preset, e.g. `"life"` or `"day & night"`.
    ///
    /// An unknown name emits a warning and leaves the rule unchanged.
    pub ruleset: Option<String>,

    /// Neighbor counts required for birth, as a string of digits.
    ///
    /// Overrides the birth counts of the preset.
    pub birth: Option<String>,

    /// Neighbor counts required for survival, as a string of digits.
    ///
    /// Overrides the survival counts of the preset.
    pub survival: Option<String>,

    /// Percentage of living cells in the initial random grid.
    #[educe(Default = 50)]
    pub density: u32,

    /// Number of generations until the grid resets.
    ///
    /// `None` means the grid never resets on its own.
    pub reset: Option<u32>,

    /// Time between generations, in milliseconds.
    ///
    /// The engine itself never reads this; it is carried here for whatever
    /// drives the generation timer.
    #[educe(Default = 250)]
    pub period: u64,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Sets the rule preset name.
    pub fn set_ruleset(mut self, ruleset: Option<String>) -> Self {
        self.ruleset = ruleset;
        self
    }

    /// Sets the birth digit string.
    pub fn set_birth(mut self, birth: Option<String>) -> Self {
        self.birth = birth;
        self
    }

    /// Sets the survival digit string.
    pub fn set_survival(mut self, survival: Option<String>) -> Self {
        self.survival = survival;
        self
    }

    /// Sets the initial density.
    pub fn set_density(mut self, density: u32) -> Self {
        self.density = density;
        self
    }

    /// Sets the number of generations until the grid resets.
    pub fn set_reset(mut self, reset: Option<u32>) -> Self {
        self.reset = reset;
        self
    }

    /// Sets the time between generations.
    pub fn set_period(mut self, period: u64) -> Self {
        self.period = period;
        self
    }

    /// The rule the configuration selects.
    pub fn rule(&self) -> Rule {
        let mut rule = Rule::default();
        if let Some(ruleset) = &self.ruleset {
            match ruleset.parse::<Preset>() {
                Ok(preset) => rule = preset.rule(),
                Err(e) => warn!("{}, defaulting to 'life'", e),
            }
        }
        if let Some(birth) = &self.birth {
            rule.set_birth(Rule::parse_digits(birth));
        }
        if let Some(survival) = &self.survival {
            rule.set_survival(Rule::parse_digits(survival));
        }
        rule
    }

    /// Creates a new world from the configuration, with the grid already
    /// randomized at the configured density.
    ///
    /// Returns an error if the width or height is zero, or if the density
    /// is greater than 100.
    pub fn world(&self) -> Result<World, Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::NonPositiveError);
        }
        if self.density > 100 {
            return Err(Error::DensityError(self.density));
        }
        let mut world = World::new(self.width, self.height, self.rule(), self.density, self.reset);
        world.randomize();
        Ok(world)
    }
}
