use crate::{quadrant::*, NodeKey};

pub trait ChildBehaviour
where
    Self: Boundary,
{
    fn set_parent(&mut self, node_key: NodeKey);

    fn get_parent(&self) -> Option<NodeKey>;

    fn children(&self) -> Option<[NodeKey; 4]>;

    fn has_children(&self) -> bool {
        self.children().is_some()
    }

    fn get_child(&self, quadrant: Quadrant) -> Option<NodeKey> {
        let index = quadrant.index()?;
        self.children().map(|children| children[index])
    }

    fn get_child_index(&self, child: NodeKey) -> Option<usize> {
        self.children()
            .and_then(|children| children.iter().position(|child_key| *child_key == child))
    }

    fn set_child_keys(&mut self, children: [NodeKey; 4]);

    fn quadrant(&self) -> Quadrant;

    fn set_quadrant(&mut self, quadrant: Quadrant);
}

pub trait Boundary {
    fn pos(&self) -> [u32; 2];
    fn set_pos(&mut self, pos: [u32; 2]);
    fn size(&self) -> u32;

    fn contains(&self, other: &Self) -> bool {
        let (min, max) = self.bounds();
        let (other_min, other_max) = other.bounds();
        (0..2).all(|i| min[i] <= other_min[i] && other_max[i] <= max[i])
    }

    /// Top left and bottom right corners, the latter exclusive.
    fn bounds(&self) -> ([u32; 2], [u32; 2]) {
        let pos = self.pos();
        let size = self.size();
        (pos, [pos[0] + size, pos[1] + size])
    }

    /// Whether any edge lies on the outline of a root square of `root_size` at the origin.
    fn touches_border(&self, root_size: u32) -> bool {
        let (min, max) = self.bounds();
        let horizontal = min[0] == 0 || max[0] == root_size;
        let vertical = min[1] == 0 || max[1] == root_size;
        horizontal || vertical
    }
}
