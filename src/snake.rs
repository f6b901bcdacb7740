use std::collections::VecDeque;

use crate::Coord;
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> Coord {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

pub struct Snake {
    body: VecDeque<Coord>,
    direction: Direction,
}

impl Snake {
    /// `size` segments starting at `pos`, with the tail trailing away from
    /// the movement direction.
    pub fn new(pos: Coord, size: usize, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..size as i16)
            .map(|i| (pos.0 - dx * i, pos.1 - dy * i))
            .collect();
        Snake { body, direction }
    }

    pub fn head(&self) -> Coord {
        *self.body.front().unwrap()
    }

    pub fn body(&self) -> &VecDeque<Coord> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, pos: Coord) -> bool {
        self.body.iter().any(|&p| p == pos)
    }

    /// Where the head lands if the snake keeps going.
    pub fn next_head(&self) -> Coord {
        let (x, y) = self.head();
        let (dx, dy) = self.direction.delta();
        (x + dx, y + dy)
    }

    /// Turning straight back onto the neck is ignored.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.direction = new_direction;
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// New head, tail kept: the body gets one segment longer.
    pub fn grow_to(&mut self, head: Coord) {
        self.body.push_front(head);
    }

    /// New head, tail dropped: the body length stays the same.
    pub fn slide_to(&mut self, head: Coord) {
        self.body.push_front(head);
        self.body.pop_back();
    }
}
