//! The snake: an ordered body and a heading vector

use std::collections::VecDeque;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::{Board, Cell};

/// Snake body, head first. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Index 0 is the head, the back is the tail
    segments: VecDeque<Cell>,
    /// Step per tick in cells (nominally a unit vector along one axis)
    direction: IVec2,
}

impl Snake {
    /// A one-segment snake at `head`, moving right
    pub fn new(head: Cell) -> Self {
        Self::from_segments([head], IVec2::X)
    }

    /// Build a snake from explicit segments (head first).
    ///
    /// Panics if `segments` is empty.
    pub fn from_segments(segments: impl IntoIterator<Item = Cell>, direction: IVec2) -> Self {
        let segments: VecDeque<Cell> = segments.into_iter().collect();
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            segments,
            direction,
        }
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn tail(&self) -> Cell {
        self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.segments
    }

    pub fn direction(&self) -> IVec2 {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true after construction
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Overwrite the heading. Reversal and non-unit vectors are accepted as-is.
    pub fn set_direction(&mut self, direction: IVec2) {
        self.direction = direction;
    }

    /// Advance one cell, reflecting off walls.
    ///
    /// Each axis that would leave [0, size) has its direction component negated
    /// and the new head recomputed from the current head, so the head steps
    /// away from the wall instead of past it. Length is unchanged.
    pub fn move_step(&mut self, board: &Board) {
        let head = self.head();
        let mut new_head = head + self.direction * board.cell_size;

        if !(0..board.width).contains(&new_head.x) {
            self.direction.x = -self.direction.x;
            new_head.x = head.x + self.direction.x * board.cell_size;
            // One column wide: the reflected step leaves too
            if !(0..board.width).contains(&new_head.x) {
                new_head.x = head.x;
            }
        }
        if !(0..board.height).contains(&new_head.y) {
            self.direction.y = -self.direction.y;
            new_head.y = head.y + self.direction.y * board.cell_size;
            if !(0..board.height).contains(&new_head.y) {
                new_head.y = head.y;
            }
        }

        self.segments.push_front(new_head);
        self.segments.pop_back();
    }

    /// True if the head shares a cell with any other segment
    pub fn has_self_collision(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(1).any(|&segment| segment == head)
    }

    /// Duplicate the tail segment; the next move keeps the extra length
    pub fn grow(&mut self) {
        self.segments.push_back(self.tail());
    }
}
