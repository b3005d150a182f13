use crate::{
    block::Block, config::GridConfig, error::GridError, node_traits::*, palette::ColorProvider,
    quadrant::*, snapshot::BlockRect, tree_traits::*, NodeKey,
};
use slotmap::SlotMap;

/// The board: an arena of [`Block`]s rooted at `root` with exactly one block selected.
///
/// Every command is a no-op when its precondition does not hold. Blocks can
/// only be read from outside; the commands are the only way to change them.
///
/// ```compile_fail
/// use nested_grid::{GridConfig, Palette, QuadTree};
///
/// let mut tree = QuadTree::new(GridConfig::default(), Palette::new(vec![0u8]).unwrap()).unwrap();
/// let root = tree.root();
/// tree.create_children(root);
/// ```
pub struct QuadTree<P: ColorProvider> {
    nodes: SlotMap<NodeKey, Block<P::Color>>,
    root: NodeKey,
    selected: NodeKey,
    config: GridConfig,
    colors: P,
}

impl<P: ColorProvider> QuadTree<P> {
    /// Creates the starting board: a selected root already smashed into four blocks.
    pub fn new(config: GridConfig, mut colors: P) -> Result<Self, GridError> {
        config.validate()?;

        let mut nodes = SlotMap::default();
        let mut root_node = Block::new(config.size, [0, 0], 1, colors.next_color());
        root_node.set_selected(true);
        let root = nodes.insert(root_node);

        let mut tree = Self {
            nodes,
            root,
            selected: root,
            config,
            colors,
        };
        tree.create_children(root);
        log::debug!(
            "created {}x{} board, max depth {}",
            config.size,
            config.size,
            config.max_depth
        );
        Ok(tree)
    }

    pub fn root(&self) -> NodeKey {
        self.root
    }

    pub fn selected(&self) -> NodeKey {
        self.selected
    }

    pub fn block(&self, node_key: NodeKey) -> Option<&Block<P::Color>> {
        self.get_node(node_key)
    }

    pub fn selected_block(&self) -> &Block<P::Color> {
        self.get_node_unchecked(self.selected)
    }

    /// Keys of every block, in the same order as [`QuadTree::snapshot`].
    pub fn node_keys(&self) -> Vec<NodeKey> {
        self.pre_order(self.root)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn size(&self) -> u32 {
        self.config.size
    }

    pub fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    /// Moves the selection to the parent block.
    pub fn move_up(&mut self) {
        match self.selected_block().get_parent() {
            Some(parent) => self.select(parent),
            None => log::trace!("move up: root has no parent"),
        }
    }

    /// Moves the selection to the top left child.
    pub fn move_down(&mut self) {
        match self.selected_block().get_child(Quadrant::TopLeft) {
            Some(child) => self.select(child),
            None => log::trace!("move down: selected block is a leaf"),
        }
    }

    /// Moves the selection to the previous sibling, counter-clockwise.
    pub fn move_left(&mut self) {
        self.move_to_sibling(Quadrant::counter_clockwise);
    }

    /// Moves the selection to the next sibling, clockwise.
    pub fn move_right(&mut self) {
        self.move_to_sibling(Quadrant::clockwise);
    }

    fn move_to_sibling(&mut self, step: fn(Quadrant) -> Quadrant) {
        let node = self.selected_block();
        let sibling = node
            .get_parent()
            .and_then(|parent| self.get_node_unchecked(parent).get_child(step(node.quadrant())));
        match sibling {
            Some(sibling) => self.select(sibling),
            None => log::trace!("move sideways: root has no siblings"),
        }
    }

    /// Clears the flag on the old selection and sets it on `node_key` in one step.
    fn select(&mut self, node_key: NodeKey) {
        let previous = self.selected;
        self.get_mut_node_unchecked(previous).set_selected(false);
        self.get_mut_node_unchecked(node_key).set_selected(true);
        self.selected = node_key;
        log::debug!(
            "selected {:?} block at depth {}",
            self.selected_block().quadrant(),
            self.selected_block().depth()
        );
    }

    /// Splits the selected block into four. The selection stays on the split block.
    pub fn smash(&mut self) {
        let node = self.selected_block();
        if node.has_children() {
            log::trace!("smash: block is already split");
            return;
        }
        if node.depth() >= self.config.max_depth {
            log::trace!(
                "smash: block at depth {} is at the max depth {}",
                node.depth(),
                self.config.max_depth
            );
            return;
        }

        let depth = node.depth();
        self.create_children(self.selected);
        log::debug!("smashed block at depth {}", depth);
    }

    /// Rotates every level below the selected block by a quarter turn.
    pub fn rotate(&mut self, clockwise: bool) {
        self.transform(Transform::Rotate { clockwise });
    }

    /// Mirrors every level below the selected block, top to bottom when
    /// `horizontal` is set and left to right otherwise.
    pub fn mirror(&mut self, horizontal: bool) {
        self.transform(Transform::Mirror { horizontal });
    }

    fn transform(&mut self, transform: Transform) {
        if !self.selected_block().has_children() {
            log::trace!("{:?}: selected block is a leaf", transform);
            return;
        }
        self.permute_subtree(self.selected, transform.permutation());
        log::debug!("applied {:?}", transform);
    }

    /// All blocks in pre-order, ready to draw.
    pub fn snapshot(&self) -> Vec<BlockRect<P::Color>> {
        let root_size = self.config.size;
        self.node_keys()
            .into_iter()
            .map(|node_key| BlockRect::from_block(self.get_node_unchecked(node_key), root_size))
            .collect()
    }
}

impl<P: ColorProvider> TreeBehaviour for QuadTree<P> {
    fn new_node(&mut self, size: u32, pos: [u32; 2], parent_key: NodeKey) -> Block<P::Color> {
        let depth = self.get_node_unchecked(parent_key).depth() + 1;
        Block::new(size, pos, depth, self.colors.next_color())
    }
}

impl<P: ColorProvider> NodeStorage for QuadTree<P> {
    type NodeType = Block<P::Color>;
    type NodeKeyType = NodeKey;

    fn get_node(&self, node_key: Self::NodeKeyType) -> Option<&Self::NodeType> {
        self.nodes.get(node_key)
    }

    fn get_mut_node(&mut self, node_key: Self::NodeKeyType) -> Option<&mut Self::NodeType> {
        self.nodes.get_mut(node_key)
    }

    fn get_node_unchecked(&self, node_key: Self::NodeKeyType) -> &Self::NodeType {
        &self.nodes[node_key]
    }

    fn get_mut_node_unchecked(&mut self, node_key: Self::NodeKeyType) -> &mut Self::NodeType {
        &mut self.nodes[node_key]
    }

    fn insert_node(&mut self, node: Self::NodeType) -> Self::NodeKeyType {
        self.nodes.insert(node)
    }
}
