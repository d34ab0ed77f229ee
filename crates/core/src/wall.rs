//! Walls between adjacent cells and the set that holds them.

use crate::cell::Cell;
use crate::error::MazeError;
use serde::{Deserialize, Serialize};
use std::collections::btree_set::{self, BTreeSet};

/// An unordered pair of adjacent cells marking "no passage here".
///
/// The pair is stored normalized (smaller cell first), so `Wall::new(a, b)`
/// and `Wall::new(b, a)` compare and hash equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawWall")]
pub struct Wall {
    a: Cell,
    b: Cell,
}

/// Wire form of a [`Wall`]; checked and normalized by `Wall::new`.
#[derive(Deserialize)]
struct RawWall {
    a: Cell,
    b: Cell,
}

impl TryFrom<RawWall> for Wall {
    type Error = MazeError;

    fn try_from(raw: RawWall) -> Result<Self, Self::Error> {
        Wall::new(raw.a, raw.b)
    }
}

impl Wall {
    /// Creates the wall between two adjacent cells.
    ///
    /// Returns `MazeError::NotAdjacent` unless the cells are exactly one
    /// step apart.
    pub fn new(a: Cell, b: Cell) -> Result<Self, MazeError> {
        if !a.is_adjacent(b) {
            return Err(MazeError::NotAdjacent { a, b });
        }
        Ok(if a <= b { Self { a, b } } else { Self { a: b, b: a } })
    }

    /// Both cells, smaller first.
    pub fn cells(&self) -> (Cell, Cell) {
        (self.a, self.b)
    }

    /// Whether `cell` is one of the two sides of this wall.
    pub fn touches(&self, cell: Cell) -> bool {
        self.a == cell || self.b == cell
    }

    /// Whether the wall separates two horizontally adjacent cells.
    pub fn is_vertical(&self) -> bool {
        self.a.y == self.b.y
    }
}

/// A set of walls with no duplicate entry for the same unordered pair.
///
/// Iteration order is the natural order of [`Wall`], so two sets holding the
/// same walls always enumerate identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSet {
    walls: BTreeSet<Wall>,
}

impl WallSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `wall`. Returns `false` if it was already present.
    pub fn insert(&mut self, wall: Wall) -> bool {
        self.walls.insert(wall)
    }

    /// Removes `wall`. Returns `false` if it was absent.
    pub fn remove(&mut self, wall: &Wall) -> bool {
        self.walls.remove(wall)
    }

    pub fn contains(&self, wall: &Wall) -> bool {
        self.walls.contains(wall)
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn clear(&mut self) {
        self.walls.clear();
    }

    /// Every wall currently present, each exactly once.
    pub fn iter(&self) -> Walls<'_> {
        Walls {
            inner: self.walls.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a WallSet {
    type Item = &'a Wall;
    type IntoIter = Walls<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Wall> for WallSet {
    fn from_iter<I: IntoIterator<Item = Wall>>(iter: I) -> Self {
        Self {
            walls: iter.into_iter().collect(),
        }
    }
}

/// Borrowing iterator over a [`WallSet`].
#[derive(Debug, Clone)]
pub struct Walls<'a> {
    inner: btree_set::Iter<'a, Wall>,
}

impl<'a> Iterator for Walls<'a> {
    type Item = &'a Wall;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Walls<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(ax: usize, ay: usize, bx: usize, by: usize) -> Wall {
        Wall::new(Cell::new(ax, ay), Cell::new(bx, by)).unwrap()
    }

    #[test]
    fn wall_equality_is_symmetric() {
        assert_eq!(wall(1, 1, 1, 2), wall(1, 2, 1, 1));
        assert_eq!(wall(0, 3, 1, 3), wall(1, 3, 0, 3));
    }

    #[test]
    fn deserializing_non_adjacent_cells_fails() {
        let json = r#"{"a":{"x":5,"y":5},"b":{"x":0,"y":0}}"#;
        let err = serde_json::from_str::<Wall>(json).unwrap_err();
        assert!(err.to_string().contains("not adjacent"), "{err}");
    }

    #[test]
    fn deserialized_mirrored_pair_is_normalized() {
        let json = r#"{"a":{"x":1,"y":0},"b":{"x":0,"y":0}}"#;
        let w: Wall = serde_json::from_str(json).unwrap();
        assert_eq!(w, wall(0, 0, 1, 0));
        assert_eq!(w.cells().0, Cell::new(0, 0));
    }

    #[test]
    fn wall_set_rejects_invalid_members_and_keeps_valid_ones() {
        let set = WallSet::from_iter([wall(0, 0, 1, 0), wall(2, 2, 2, 3)]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(serde_json::from_str::<WallSet>(&json).unwrap(), set);

        let bad = r#"{"walls":[{"a":{"x":0,"y":0},"b":{"x":2,"y":0}}]}"#;
        assert!(serde_json::from_str::<WallSet>(bad).is_err());
    }

    #[test]
    fn wall_between_non_adjacent_cells_is_rejected() {
        let err = Wall::new(Cell::new(0, 0), Cell::new(1, 1)).unwrap_err();
        assert!(matches!(err, MazeError::NotAdjacent { .. }));
        assert!(Wall::new(Cell::new(2, 2), Cell::new(2, 2)).is_err());
        assert!(Wall::new(Cell::new(0, 0), Cell::new(0, 2)).is_err());
    }

    #[test]
    fn cells_are_normalized_smaller_first() {
        let (a, b) = wall(3, 2, 2, 2).cells();
        assert_eq!(a, Cell::new(2, 2));
        assert_eq!(b, Cell::new(3, 2));
    }

    #[test]
    fn orientation_and_touches() {
        let w = wall(0, 0, 1, 0);
        assert!(w.is_vertical());
        assert!(w.touches(Cell::new(1, 0)));
        assert!(!w.touches(Cell::new(0, 1)));
        assert!(!wall(0, 0, 0, 1).is_vertical());
    }

    #[test]
    fn insert_of_mirrored_pair_is_a_no_op() {
        let mut set = WallSet::new();
        assert!(set.insert(wall(0, 0, 1, 0)));
        assert!(!set.insert(wall(1, 0, 0, 0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_of_absent_wall_is_a_no_op() {
        let mut set: WallSet = [wall(0, 0, 1, 0)].into_iter().collect();
        let before = set.clone();
        assert!(!set.remove(&wall(0, 0, 0, 1)));
        assert_eq!(set, before);
        assert!(set.remove(&wall(1, 0, 0, 0)));
        assert!(set.is_empty());
    }

    #[test]
    fn iteration_is_restartable_and_stable() {
        let set: WallSet = [wall(1, 1, 1, 2), wall(0, 0, 1, 0), wall(0, 0, 0, 1)]
            .into_iter()
            .collect();
        let first: Vec<Wall> = set.iter().copied().collect();
        let second: Vec<Wall> = (&set).into_iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(set.iter().len(), 3);
    }
}
