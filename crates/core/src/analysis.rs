//! Structural checks over the passage graph of a maze (the walls that have
//! been removed).

use crate::cell::Cell;
use crate::maze::Maze;
use std::collections::VecDeque;

/// Every cell reachable from `start` through passages, as a row-major mask.
///
/// An out-of-bounds `start` reaches nothing.
pub fn reachable_from(maze: &Maze, start: Cell) -> Vec<bool> {
    let (w, h) = (maze.width(), maze.height());
    let mut seen = vec![false; w * h];
    if !start.in_bounds(w, h) {
        return seen;
    }
    let mut queue = VecDeque::from([start]);
    seen[start.y * w + start.x] = true;
    while let Some(cell) = queue.pop_front() {
        for n in cell.neighbors(w, h) {
            let idx = n.y * w + n.x;
            if !seen[idx] && maze.has_wall(cell, n) == Ok(false) {
                seen[idx] = true;
                queue.push_back(n);
            }
        }
    }
    seen
}

/// Whether every cell can reach every other through passages.
pub fn is_connected(maze: &Maze) -> bool {
    reachable_from(maze, Cell::new(0, 0)).iter().all(|&r| r)
}

/// Whether the passage graph contains no cycle.
pub fn is_acyclic(maze: &Maze) -> bool {
    let w = maze.width();
    let mut sets = DisjointSets::new(w * maze.height());
    maze.passages().iter().all(|p| {
        let (a, b) = p.cells();
        sets.union(a.y * w + a.x, b.y * w + b.x)
    })
}

/// Whether the passages form a spanning tree: connected, acyclic, and
/// exactly `width * height - 1` of them.
pub fn is_spanning_tree(maze: &Maze) -> bool {
    let cells = maze.width() * maze.height();
    maze.passages().len() == cells - 1 && is_acyclic(maze) && is_connected(maze)
}

/// Union-find with path halving.
struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// Merges the sets of `a` and `b`; `false` if they were already one set.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}
