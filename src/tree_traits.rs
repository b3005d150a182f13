use crate::{node_traits::*, quadrant::*, NodeKey};

pub(crate) trait NodeStorage {
    type NodeType;
    type NodeKeyType;

    fn get_node(&self, node_key: Self::NodeKeyType) -> Option<&Self::NodeType>;
    fn get_mut_node(&mut self, node_key: Self::NodeKeyType) -> Option<&mut Self::NodeType>;
    fn get_node_unchecked(&self, node_key: Self::NodeKeyType) -> &Self::NodeType;
    fn get_mut_node_unchecked(&mut self, node_key: Self::NodeKeyType) -> &mut Self::NodeType;
    fn insert_node(&mut self, node: Self::NodeType) -> Self::NodeKeyType;
}

pub(crate) trait TreeBehaviour
where
    Self: NodeStorage<NodeKeyType = NodeKey>,
    <Self as NodeStorage>::NodeType: Boundary + ChildBehaviour,
{
    /// Builds a detached node. Links and quadrant are filled in by the caller.
    fn new_node(&mut self, size: u32, pos: [u32; 2], parent_key: NodeKey) -> Self::NodeType;

    /// Splits a leaf into four equal quadrants. Returns the new keys in child order.
    fn create_children(&mut self, parent_key: NodeKey) -> [NodeKey; 4] {
        let (parent_size, parent_pos) = {
            let parent = self.get_node_unchecked(parent_key);
            (parent.size(), parent.pos())
        };
        let child_size = parent_size / 2;

        let children = CHILD_QUADRANTS.map(|quadrant| {
            let child_pos = quadrant.origin_within(parent_pos, child_size);
            let mut child = self.new_node(child_size, child_pos, parent_key);
            child.set_parent(parent_key);
            child.set_quadrant(quadrant);
            self.insert_node(child)
        });

        self.get_mut_node_unchecked(parent_key)
            .set_child_keys(children);
        children
    }

    /// Moves the children of every internal node below `node_key` according to
    /// `permutation`, parents first so each level is laid out on the already
    /// moved grid of the level above.
    fn permute_subtree(&mut self, node_key: NodeKey, permutation: &Permutation) {
        let mut pending_node_keys = vec![node_key];
        while let Some(node_key) = pending_node_keys.pop() {
            let node = self.get_node_unchecked(node_key);
            let children = match node.children() {
                Some(children) => children,
                None => continue,
            };
            let (parent_pos, child_size) = (node.pos(), node.size() / 2);

            let mut arranged = children;
            for (source, child_key) in children.iter().enumerate() {
                arranged[permutation[source]] = *child_key;
            }

            for (slot, child_key) in arranged.iter().enumerate() {
                let quadrant = Quadrant::from_index(slot);
                let child = self.get_mut_node_unchecked(*child_key);
                child.set_pos(quadrant.origin_within(parent_pos, child_size));
                child.set_quadrant(quadrant);
            }

            self.get_mut_node_unchecked(node_key)
                .set_child_keys(arranged);
            pending_node_keys.extend(arranged.iter());
        }
    }

    /// Every node below and including `node_key`: the node itself, then its
    /// top left, top right, bottom left and bottom right subtrees.
    fn pre_order(&self, node_key: NodeKey) -> Vec<NodeKey> {
        let mut visited = vec![];
        let mut pending_node_keys = vec![node_key];
        while let Some(node_key) = pending_node_keys.pop() {
            visited.push(node_key);
            let node = self.get_node_unchecked(node_key);
            for quadrant in [
                Quadrant::BottomRight,
                Quadrant::BottomLeft,
                Quadrant::TopRight,
                Quadrant::TopLeft,
            ] {
                if let Some(child_key) = node.get_child(quadrant) {
                    pending_node_keys.push(child_key);
                }
            }
        }
        visited
    }
}
