use crate::{node_traits::*, quadrant::Quadrant, NodeKey};

/// One square of the board.
///
/// The colour is fixed at creation. `visible` is cleared the moment the block
/// gains children and `selected` is only ever written by the owning tree.
#[derive(Debug, Clone)]
pub struct Block<C> {
    size: u32,
    pos: [u32; 2],
    depth: u32,
    color: C,
    quadrant: Quadrant,
    visible: bool,
    selected: bool,
    parent: Option<NodeKey>,
    children: Option<[NodeKey; 4]>,
}

impl<C> Block<C> {
    pub fn new(size: u32, pos: [u32; 2], depth: u32, color: C) -> Self {
        Self {
            size,
            pos,
            depth,
            color,
            quadrant: Quadrant::Root,
            visible: true,
            selected: false,
            parent: None,
            children: None,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn color(&self) -> &C {
        &self.color
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl<C> Boundary for Block<C> {
    fn pos(&self) -> [u32; 2] {
        self.pos
    }

    fn set_pos(&mut self, pos: [u32; 2]) {
        self.pos = pos;
    }

    fn size(&self) -> u32 {
        self.size
    }
}

impl<C> ChildBehaviour for Block<C> {
    fn set_parent(&mut self, node_key: NodeKey) {
        self.parent = Some(node_key);
    }

    fn get_parent(&self) -> Option<NodeKey> {
        self.parent
    }

    fn children(&self) -> Option<[NodeKey; 4]> {
        self.children
    }

    fn set_child_keys(&mut self, children: [NodeKey; 4]) {
        self.children = Some(children);
        self.visible = false;
    }

    fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    fn set_quadrant(&mut self, quadrant: Quadrant) {
        self.quadrant = quadrant;
    }
}
