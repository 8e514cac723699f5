//! Axis directions and cull-face buckets

use glam::Vec3;

/// Coordinate axis
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// Component index into a position (`[x, y, z]`)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The two axes perpendicular to this one, in ascending order
    #[inline]
    pub const fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// One of the six faces of a unit block
///
/// Ordinals follow the enumeration order used when walking a model's
/// directional quad lists: DOWN, UP, NORTH, SOUTH, WEST, EAST.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    West = 4,
    East = 5,
}

impl Direction {
    /// All directions in enumeration order
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Ordinal (0-5)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for an ordinal, `None` when out of range
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 6 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Down | Direction::Up => Axis::Y,
            Direction::North | Direction::South => Axis::Z,
            Direction::West | Direction::East => Axis::X,
        }
    }

    /// True when the outward normal points along the positive axis
    #[inline]
    pub const fn is_positive(self) -> bool {
        matches!(self, Direction::Up | Direction::South | Direction::East)
    }

    /// Unit outward normal
    pub fn normal(self) -> Vec3 {
        match self {
            Direction::Down => Vec3::NEG_Y,
            Direction::Up => Vec3::Y,
            Direction::North => Vec3::NEG_Z,
            Direction::South => Vec3::Z,
            Direction::West => Vec3::NEG_X,
            Direction::East => Vec3::X,
        }
    }

}

/// Face-culling plane of a quad, or the direction-agnostic mesh bucket
///
/// `None` is a distinct state: geometry in it is never hidden by a
/// neighbour (cross-shaped plants, slanted panes) and is lit differently
/// on the flat path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CullFace {
    Face(Direction),
    None,
}

impl CullFace {
    /// Mesh buckets in enumeration order: six directions, then the generic bucket
    pub const BUCKETS: [CullFace; 7] = [
        CullFace::Face(Direction::Down),
        CullFace::Face(Direction::Up),
        CullFace::Face(Direction::North),
        CullFace::Face(Direction::South),
        CullFace::Face(Direction::West),
        CullFace::Face(Direction::East),
        CullFace::None,
    ];

    #[inline]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            CullFace::Face(dir) => Some(dir),
            CullFace::None => None,
        }
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, CullFace::None)
    }
}

impl From<Direction> for CullFace {
    fn from(dir: Direction) -> Self {
        CullFace::Face(dir)
    }
}
