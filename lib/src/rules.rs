//! Life-like rules, and the catalog of named presets.
//!
//! A rule is totalistic: the next state of a cell depends only on its own
//! state and on how many of its (up to 8) neighbors are alive. For the
//! conventional `B…/S…` notation, see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::cells::State;
use log::warn;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A life-like rule, as a pair of birth and survival transition tables.
///
/// Each table is indexed by a neighbor count in `0..=8`: `birth[n]` says
/// whether a dead cell with `n` living neighbors becomes alive, and
/// `survival[n]` whether a living cell with `n` living neighbors stays
/// alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    /// Neighbor counts that turn a dead cell alive.
    birth: [bool; 9],
    /// Neighbor counts that keep a living cell alive.
    survival: [bool; 9],
}

/// Conway's Game of Life, `B3/S23`.
impl Default for Rule {
    fn default() -> Self {
        Preset::Life.rule()
    }
}

impl Rule {
    /// Constructs a rule from lists of birth and survival neighbor counts.
    ///
    /// Counts greater than 8 are ignored.
    pub fn new(birth: &[usize], survival: &[usize]) -> Self {
        let mut rule = Self {
            birth: [false; 9],
            survival: [false; 9],
        };
        for &b in birth {
            if b <= 8 {
                rule.birth[b] = true;
            }
        }
        for &s in survival {
            if s <= 8 {
                rule.survival[s] = true;
            }
        }
        rule
    }

    /// Parses a string of neighbor-count digits into a transition table.
    ///
    /// Every character in `'0'..='8'` marks its neighbor count. Any other
    /// character is skipped with a warning; it neither aborts the parse nor
    /// marks a count.
    pub fn parse_digits(string: &str) -> [bool; 9] {
        let mut counts = [false; 9];
        for c in string.chars() {
            match c.to_digit(10) {
                Some(d) if d <= 8 => counts[d as usize] = true,
                _ => warn!("'{}' is not a number between 0 and 8, ignoring", c),
            }
        }
        counts
    }

    /// Replaces the birth transition table.
    pub fn set_birth(&mut self, birth: [bool; 9]) {
        self.birth = birth;
    }

    /// Replaces the survival transition table.
    pub fn set_survival(&mut self, survival: [bool; 9]) {
        self.survival = survival;
    }

    /// The state of a cell in the next generation, given its current state
    /// and the number of its living neighbors.
    #[inline]
    pub fn next_state(&self, state: State, neighbors: usize) -> State {
        let alive = match state {
            State::Dead => self.birth[neighbors],
            State::Alive => self.survival[neighbors],
        };
        if alive {
            State::Alive
        } else {
            State::Dead
        }
    }
}

/// Writes the rule in `B…/S…` notation, e.g. `B3/S23`.
impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "B")?;
        for (n, _) in self.birth.iter().enumerate().filter(|(_, &b)| b) {
            write!(f, "{}", n)?;
        }
        write!(f, "/S")?;
        for (n, _) in self.survival.iter().enumerate().filter(|(_, &s)| s) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

/// Named life-like rules.
///
/// The names are the conventional ones from LifeWiki, written in lowercase,
/// e.g. `"day & night"` or `"life without death"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Preset {
    /// `life`, `B3/S23`.
    #[default]
    Life,
    /// `2x2`, `B36/S125`.
    TwoXTwo,
    /// `day & night`, `B3678/S34678`.
    DayAndNight,
    /// `flock`, `B3/S12`.
    Flock,
    /// `fredkin`, `B1357/S02468`.
    Fredkin,
    /// `highlife`, `B36/S23`.
    HighLife,
    /// `life without death`, `B3/S012345678`.
    LifeWithoutDeath,
    /// `live free or die`, `B2/S0`.
    LiveFreeOrDie,
    /// `maze`, `B3/S12345`.
    Maze,
    /// `mazectric`, `B3/S1234`.
    Mazectric,
    /// `move`, `B368/S245`.
    Move,
    /// `replicator`, `B1357/S1357`.
    Replicator,
    /// `seeds`, `B2/S`.
    Seeds,
}

/// All presets, in the order they are listed in the command-line help.
pub const PRESETS: [Preset; 13] = [
    Preset::Life,
    Preset::TwoXTwo,
    Preset::DayAndNight,
    Preset::Flock,
    Preset::Fredkin,
    Preset::HighLife,
    Preset::LifeWithoutDeath,
    Preset::LiveFreeOrDie,
    Preset::Maze,
    Preset::Mazectric,
    Preset::Move,
    Preset::Replicator,
    Preset::Seeds,
];

impl Preset {
    /// The rule this preset names.
    pub fn rule(self) -> Rule {
        match self {
            Preset::Life => Rule::new(&[3], &[2, 3]),
            Preset::TwoXTwo => Rule::new(&[3, 6], &[1, 2, 5]),
            Preset::DayAndNight => Rule::new(&[3, 6, 7, 8], &[3, 4, 6, 7, 8]),
            Preset::Flock => Rule::new(&[3], &[1, 2]),
            Preset::Fredkin => Rule::new(&[1, 3, 5, 7], &[0, 2, 4, 6, 8]),
            Preset::HighLife => Rule::new(&[3, 6], &[2, 3]),
            Preset::LifeWithoutDeath => Rule::new(&[3], &[0, 1, 2, 3, 4, 5, 6, 7, 8]),
            Preset::LiveFreeOrDie => Rule::new(&[2], &[0]),
            Preset::Maze => Rule::new(&[3], &[1, 2, 3, 4, 5]),
            Preset::Mazectric => Rule::new(&[3], &[1, 2, 3, 4]),
            Preset::Move => Rule::new(&[3, 6, 8], &[2, 4, 5]),
            Preset::Replicator => Rule::new(&[1, 3, 5, 7], &[1, 3, 5, 7]),
            Preset::Seeds => Rule::new(&[2], &[]),
        }
    }

    /// The name of the preset.
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Life => "life",
            Preset::TwoXTwo => "2x2",
            Preset::DayAndNight => "day & night",
            Preset::Flock => "flock",
            Preset::Fredkin => "fredkin",
            Preset::HighLife => "highlife",
            Preset::LifeWithoutDeath => "life without death",
            Preset::LiveFreeOrDie => "live free or die",
            Preset::Maze => "maze",
            Preset::Mazectric => "mazectric",
            Preset::Move => "move",
            Preset::Replicator => "replicator",
            Preset::Seeds => "seeds",
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PRESETS
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| format!("unknown ruleset '{}'", s))
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}
