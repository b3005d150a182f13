use crate::error::GridError;

/// Side length of the classic game board.
pub const DEFAULT_SIZE: u32 = 512;
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// Shape of a board: root side length and the deepest level a block may be smashed into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridConfig {
    pub size: u32,
    /// The root is depth 1.
    pub max_depth: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GridConfig {
    pub fn new(size: u32, max_depth: u32) -> Self {
        Self { size, max_depth }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Number of halvings the root side has to survive. The starting board
    /// is always split once, even when `max_depth` is 1.
    pub fn splits(&self) -> u32 {
        self.max_depth.max(2) - 1
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.max_depth == 0 {
            return Err(GridError::InvalidMaxDepth(self.max_depth));
        }

        let splits = self.splits();
        if self.size == 0 || self.size.trailing_zeros() < splits {
            return Err(GridError::IndivisibleSize {
                size: self.size,
                splits,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GridConfig::default();
        assert_eq!(config.size, 512);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_depth_is_rejected() {
        assert_eq!(
            GridConfig::default().with_max_depth(0).validate(),
            Err(GridError::InvalidMaxDepth(0))
        );
    }

    #[test]
    fn depth_one_still_needs_one_split() {
        let config = GridConfig::new(1, 1);
        assert_eq!(config.splits(), 1);
        assert_eq!(
            config.validate(),
            Err(GridError::IndivisibleSize { size: 1, splits: 1 })
        );
        assert_eq!(GridConfig::new(2, 1).validate(), Ok(()));
    }

    #[test]
    fn size_must_halve_down_to_max_depth() {
        assert_eq!(GridConfig::new(512, 10).validate(), Ok(()));
        assert_eq!(
            GridConfig::new(512, 11).validate(),
            Err(GridError::IndivisibleSize {
                size: 512,
                splits: 10
            })
        );
        assert_eq!(
            GridConfig::new(96, 7).validate(),
            Err(GridError::IndivisibleSize { size: 96, splits: 6 })
        );
        assert!(GridConfig::new(0, 2).validate().is_err());
    }
}
