use crate::{block::Block, node_traits::*};

/// What a renderer needs to draw one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRect<C> {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub depth: u32,
    pub color: C,
    pub visible: bool,
    pub selected: bool,
    /// Some edge lies on the outline of the board.
    pub has_border: bool,
}

impl<C: Clone> BlockRect<C> {
    pub fn from_block(block: &Block<C>, root_size: u32) -> Self {
        let [x, y] = block.pos();
        Self {
            x,
            y,
            size: block.size(),
            depth: block.depth(),
            color: block.color().clone(),
            visible: block.is_visible(),
            selected: block.is_selected(),
            has_border: block.touches_border(root_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_block_state() {
        let mut block = Block::new(8, [8, 0], 2, 'g');
        block.set_selected(true);
        let rect = BlockRect::from_block(&block, 16);
        assert_eq!(
            rect,
            BlockRect {
                x: 8,
                y: 0,
                size: 8,
                depth: 2,
                color: 'g',
                visible: true,
                selected: true,
                has_border: true,
            }
        );
    }

    #[test]
    fn inner_blocks_have_no_border() {
        let rect = BlockRect::from_block(&Block::new(4, [4, 4], 3, ()), 16);
        assert!(!rect.has_border);
        let root = BlockRect::from_block(&Block::new(16, [0, 0], 1, ()), 16);
        assert!(root.has_border);
    }
}
