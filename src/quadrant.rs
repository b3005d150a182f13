/// Where a block sits inside its parent.
///
///    |-----|-----|
///    |  TL |  TR |
///    |-----+-----|
///    |  BL |  BR |
///    |_____|_____|
///
/// Children are stored in clockwise order starting at the top left, which is
/// also the order used by [`CHILD_QUADRANTS`] and every permutation table below.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Root,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

pub const CHILD_QUADRANTS: [Quadrant; 4] = [
    Quadrant::TopLeft,
    Quadrant::TopRight,
    Quadrant::BottomRight,
    Quadrant::BottomLeft,
];

/// `permutation[source] == destination`, both as child slot indexes.
pub type Permutation = [usize; 4];

pub const ROTATE_CLOCKWISE: Permutation = [1, 2, 3, 0];
pub const ROTATE_COUNTER_CLOCKWISE: Permutation = [3, 0, 1, 2];
/// Top and bottom trade places.
pub const FLIP_HORIZONTAL: Permutation = [3, 2, 1, 0];
/// Left and right trade places.
pub const FLIP_VERTICAL: Permutation = [1, 0, 3, 2];

/// Unit offsets of each child slot, in half-sizes of the parent.
const SLOT_OFFSETS: [[u32; 2]; 4] = [[0, 0], [1, 0], [1, 1], [0, 1]];

impl Quadrant {
    pub fn from_index(index: usize) -> Self {
        CHILD_QUADRANTS[index]
    }

    /// Child slot index, `None` for the root.
    pub fn index(self) -> Option<usize> {
        match self {
            Quadrant::Root => None,
            Quadrant::TopLeft => Some(0),
            Quadrant::TopRight => Some(1),
            Quadrant::BottomRight => Some(2),
            Quadrant::BottomLeft => Some(3),
        }
    }

    /// Next sibling going clockwise. The root maps to itself.
    pub fn clockwise(self) -> Self {
        self.permuted(&ROTATE_CLOCKWISE)
    }

    pub fn counter_clockwise(self) -> Self {
        self.permuted(&ROTATE_COUNTER_CLOCKWISE)
    }

    pub fn permuted(self, permutation: &Permutation) -> Self {
        match self.index() {
            Some(index) => Self::from_index(permutation[index]),
            None => self,
        }
    }

    /// Origin of this slot inside a parent at `parent_pos` whose children are `child_size` wide.
    pub fn origin_within(self, parent_pos: [u32; 2], child_size: u32) -> [u32; 2] {
        let offset = match self.index() {
            Some(index) => SLOT_OFFSETS[index],
            None => [0, 0],
        };
        [
            parent_pos[0] + offset[0] * child_size,
            parent_pos[1] + offset[1] * child_size,
        ]
    }
}

/// A structural transformation applied to a whole subtree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transform {
    Rotate { clockwise: bool },
    Mirror { horizontal: bool },
}

impl Transform {
    pub fn permutation(self) -> &'static Permutation {
        match self {
            Transform::Rotate { clockwise: true } => &ROTATE_CLOCKWISE,
            Transform::Rotate { clockwise: false } => &ROTATE_COUNTER_CLOCKWISE,
            Transform::Mirror { horizontal: true } => &FLIP_HORIZONTAL,
            Transform::Mirror { horizontal: false } => &FLIP_VERTICAL,
        }
    }
}
