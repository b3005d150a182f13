//! The game board as the input and rendering layers see it.

use crate::{
    config::GridConfig, error::GridError, palette::Palette, quad_tree::QuadTree,
    snapshot::BlockRect,
};

/// One player action. An input layer maps key presses onto these.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Smash,
    Rotate { clockwise: bool },
    Mirror { horizontal: bool },
}

/// A [`QuadTree`] on a `MAX_SIZE` board coloured from a random [`Palette`].
///
/// Starts as a selected root split into four randomly coloured blocks.
pub struct NestedGrid<C: Clone> {
    tree: QuadTree<Palette<C>>,
}

impl<C: Clone> NestedGrid<C> {
    pub const MAX_SIZE: u32 = 512;

    pub fn new(max_levels: u32, palette: Vec<C>) -> Result<Self, GridError> {
        Self::with_palette(max_levels, Palette::new(palette)?)
    }

    pub fn with_palette(max_levels: u32, palette: Palette<C>) -> Result<Self, GridError> {
        let config = GridConfig::new(Self::MAX_SIZE, max_levels);
        Ok(Self {
            tree: QuadTree::new(config, palette)?,
        })
    }

    pub fn tree(&self) -> &QuadTree<Palette<C>> {
        &self.tree
    }

    pub fn move_up(&mut self) {
        self.tree.move_up();
    }

    pub fn move_down(&mut self) {
        self.tree.move_down();
    }

    /// Counter-clockwise to a sibling.
    pub fn move_left(&mut self) {
        self.tree.move_left();
    }

    /// Clockwise to a sibling.
    pub fn move_right(&mut self) {
        self.tree.move_right();
    }

    pub fn smash(&mut self) {
        self.tree.smash();
    }

    pub fn rotate(&mut self, clockwise: bool) {
        self.tree.rotate(clockwise);
    }

    /// Mirror the descendants of the selected block, over the x-axis when
    /// `horizontally` is set and over the y-axis otherwise.
    pub fn swap(&mut self, horizontally: bool) {
        self.tree.mirror(horizontally);
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Smash => self.smash(),
            Command::Rotate { clockwise } => self.rotate(clockwise),
            Command::Mirror { horizontal } => self.swap(horizontal),
        }
    }

    pub fn blocks_to_draw(&self) -> Vec<BlockRect<C>> {
        self.tree.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_setup() {
        assert_eq!(
            NestedGrid::new(2, Vec::<u8>::new()).err(),
            Some(GridError::EmptyPalette)
        );
        assert_eq!(
            NestedGrid::new(0, vec![1u8]).err(),
            Some(GridError::InvalidMaxDepth(0))
        );
    }

    #[test]
    fn starts_with_root_and_four_children() {
        let grid = NestedGrid::new(4, vec!["red", "blue"]).unwrap();
        let blocks = grid.blocks_to_draw();
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[0].size, NestedGrid::<&str>::MAX_SIZE);
        assert!(blocks[0].selected);
        assert!(blocks[1..].iter().all(|b| b.size == 256 && b.visible));
    }

    #[test]
    fn commands_match_direct_calls() {
        let palette = || Palette::with_seed(vec![0u8, 1, 2, 3, 4], 9).unwrap();
        let mut direct = NestedGrid::with_palette(4, palette()).unwrap();
        let mut applied = NestedGrid::with_palette(4, palette()).unwrap();

        direct.move_down();
        direct.smash();
        direct.move_right();
        direct.move_up();
        direct.rotate(true);
        direct.swap(false);
        direct.move_left();

        for command in [
            Command::MoveDown,
            Command::Smash,
            Command::MoveRight,
            Command::MoveUp,
            Command::Rotate { clockwise: true },
            Command::Mirror { horizontal: false },
            Command::MoveLeft,
        ] {
            applied.apply(command);
        }

        assert_eq!(direct.blocks_to_draw(), applied.blocks_to_draw());
    }

    #[test]
    fn pre_order_lists_children_top_left_top_right_bottom_left_bottom_right() {
        let mut grid = NestedGrid::new(3, vec![()]).unwrap();
        grid.move_down();
        grid.smash();
        let positions: Vec<_> = grid
            .blocks_to_draw()
            .iter()
            .map(|b| (b.x, b.y, b.size))
            .collect();
        assert_eq!(
            positions,
            vec![
                (0, 0, 512),
                (0, 0, 256),
                (0, 0, 128),
                (128, 0, 128),
                (0, 128, 128),
                (128, 128, 128),
                (256, 0, 256),
                (0, 256, 256),
                (256, 256, 256),
            ]
        );
    }
}
