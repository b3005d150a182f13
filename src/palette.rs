use crate::error::GridError;

/// Source of colours for newly created blocks.
pub trait ColorProvider {
    type Color: Clone;

    fn next_color(&mut self) -> Self::Color;
}

/// Picks uniformly at random from a fixed, non-empty set of colours.
#[derive(Debug)]
pub struct Palette<C> {
    colors: Vec<C>,
    rng: fastrand::Rng,
}

impl<C: Clone> Palette<C> {
    pub fn new(colors: Vec<C>) -> Result<Self, GridError> {
        Self::with_rng(colors, fastrand::Rng::new())
    }

    /// Same colours every run for the same seed.
    pub fn with_seed(colors: Vec<C>, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(colors, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(colors: Vec<C>, rng: fastrand::Rng) -> Result<Self, GridError> {
        if colors.is_empty() {
            return Err(GridError::EmptyPalette);
        }
        Ok(Self { colors, rng })
    }
}

impl<C: Clone> ColorProvider for Palette<C> {
    type Color = C;

    fn next_color(&mut self) -> C {
        let index = self.rng.usize(..self.colors.len());
        self.colors[index].clone()
    }
}
