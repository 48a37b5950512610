//! The world.

use crate::{
    cells::{Coord, State},
    rules::Rule,
};
use rand::{thread_rng, Rng};
use std::{
    fmt::{self, Display, Formatter},
    mem,
};

/// The world: a fixed-size grid of cells, advanced one generation at a time.
///
/// The grid has hard edges. Cells on an edge or in a corner simply have
/// fewer neighbors; there is no wraparound.
///
/// Each [`step`](Self::step) reads the current generation only and writes
/// the next one into a scratch buffer, so the outcome never depends on the
/// order in which cells are visited. The buffers are swapped at the end of
/// the pass, and readers always observe a fully computed generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    /// Width of the grid.
    width: usize,

    /// Height of the grid.
    height: usize,

    /// The rule of the cellular automaton.
    rule: Rule,

    /// The current generation, stored in row-major order.
    cells: Vec<State>,

    /// Scratch buffer for the generation being computed.
    ///
    /// Its contents are meaningful only inside [`step`](Self::step).
    scratch: Vec<State>,

    /// Number of generations since the last randomization.
    generation: u32,

    /// Percentage of cells set alive by [`randomize`](Self::randomize).
    density: u32,

    /// Number of generations after which the grid randomizes itself again.
    ///
    /// `None` means the grid never resets on its own.
    reset_after: Option<u32>,
}

impl World {
    /// Creates an all-dead world.
    ///
    /// `width` and `height` must be nonzero, and `density` at most 100;
    /// [`Config::world`](crate::Config::world) checks both.
    pub(crate) fn new(
        width: usize,
        height: usize,
        rule: Rule,
        density: u32,
        reset_after: Option<u32>,
    ) -> Self {
        Self {
            width,
            height,
            rule,
            cells: vec![State::Dead; width * height],
            scratch: vec![State::Dead; width * height],
            generation: 0,
            density,
            reset_after,
        }
    }

    /// Width of the grid.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The rule of the cellular automaton.
    #[inline]
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Number of generations since the last randomization.
    #[inline]
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// The state of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[inline]
    pub fn cell(&self, coord: Coord) -> State {
        let (x, y) = coord;
        assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    /// Sets the state of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[inline]
    pub fn set_cell(&mut self, coord: Coord, state: State) {
        let (x, y) = coord;
        assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x] = state;
    }

    /// The `y`-th row of the grid, for rendering.
    #[inline]
    pub fn row(&self, y: usize) -> &[State] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// All cells of the current generation, in row-major order.
    #[inline]
    pub fn cells(&self) -> &[State] {
        &self.cells
    }

    /// Number of living cells in the current generation.
    pub fn cell_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&state| state == State::Alive)
            .count()
    }

    /// Number of living neighbors of the cell at `(x, y)`.
    ///
    /// Only the neighbors inside the grid are counted, so cells on an edge
    /// have at most 5, and cells in a corner at most 3.
    fn count_neighbors(&self, coord: Coord) -> usize {
        let (x, y) = coord;
        let mut count = 0;
        for ny in y.saturating_sub(1)..=(y + 1).min(self.height - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(self.width - 1) {
                if (nx, ny) != (x, y) && self.cells[ny * self.width + nx] == State::Alive {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances the world by one generation.
    ///
    /// Computes the next state of every cell from the current generation,
    /// swaps it in, and increments the generation counter. If a reset
    /// threshold is configured and the counter has reached it, the grid is
    /// [randomized](Self::randomize) again, which also resets the counter.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let state = self.cells[y * self.width + x];
                let neighbors = self.count_neighbors((x, y));
                self.scratch[y * self.width + x] = self.rule.next_state(state, neighbors);
            }
        }
        mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
        if let Some(reset_after) = self.reset_after {
            if self.generation >= reset_after {
                self.randomize();
            }
        }
    }

    /// Fills the grid at random and resets the generation counter.
    ///
    /// Each cell is independently set alive with probability `density`
    /// percent: a density of 0 gives an all-dead grid, a density of 100 an
    /// all-alive one.
    pub fn randomize(&mut self) {
        let mut rng = thread_rng();
        for cell in &mut self.cells {
            *cell = if rng.gen_range(0..100) < self.density {
                State::Alive
            } else {
                State::Dead
            };
        }
        self.generation = 0;
    }
}

/// Writes the world in Plaintext format.
///
/// Dead cells are represented by `.`, living cells by `o`, one row of the
/// grid per line.
impl Display for World {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        for y in 0..self.height {
            for &state in self.row(y) {
                f.write_str(match state {
                    State::Dead => ".",
                    State::Alive => "o",
                })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
