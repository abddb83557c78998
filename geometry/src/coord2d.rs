//! Coordinate work in two dimensions.

use std::cmp;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use itertools::iproduct;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Position;

pub mod map;
pub mod path;
pub mod pathfinder;

/// A movement direction in two dimensions.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, ordered so that the neighbors of a point come
    /// out in reading order.
    pub fn all() -> impl Iterator<Item = Self> {
        const READING_ORDER: [Direction; 4] = [
            Direction::Up,
            Direction::Left,
            Direction::Right,
            Direction::Down,
        ];
        READING_ORDER.iter().copied()
    }

    /// Unit offset of one step, with `y` growing downwards.
    fn offset(self) -> (Position, Position) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Lower case name, used to label moves.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A square on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Position,
    pub y: Position,
}

impl Point {
    pub fn new(x: Position, y: Position) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// The neighboring square in a direction.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Neighboring squares, with the direction to each.
    pub fn adjacent(self) -> impl Iterator<Item = (Direction, Self)> {
        Direction::all().map(move |d| (d, self.step(d)))
    }

    pub fn is_adjacent(&self, other: &Point) -> bool {
        self.manhattan_distance(*other) == 1
    }

    pub fn manhattan_distance(self, other: Point) -> Position {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The direction of a single step to `other`, if it is adjacent.
    pub fn direction(self, other: Point) -> Option<Direction> {
        Direction::all().find(|d| self.step(*d) == other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(Position, Position)> for Point {
    fn from((x, y): (Position, Position)) -> Self {
        Self::new(x, y)
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x as Position, y as Position)
    }
}

/// Error when parsing a point from string.
#[derive(Debug, Error)]
pub enum ParsePointError {
    #[error("Invalid Point: {0}")]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

impl FromStr for Point {
    type Err = ParsePointError;

    /// Accepts `x,y`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*\(?(?P<x>-?\d+),\s*(?P<y>-?\d+)\)?\s*$").unwrap();
        };

        let cap = RE
            .captures(s)
            .ok_or_else(|| ParsePointError::InvalidLiteral(s.to_string()))?;
        Ok(Self::new(cap["x"].parse()?, cap["y"].parse()?))
    }
}

/// The smallest axis-aligned rectangle around some points, edges
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    min: Point,
    max: Point,
}

impl BoundingBox {
    /// A box around nothing. Including a point makes it that point.
    pub fn empty() -> Self {
        Self {
            min: Point::new(Position::MAX, Position::MAX),
            max: Point::new(Position::MIN, Position::MIN),
        }
    }

    /// A `width` by `height` box with its top left corner at the origin.
    pub fn sized(width: Position, height: Position) -> Self {
        Self {
            min: Point::origin(),
            max: Point::new(width - 1, height - 1),
        }
    }

    /// Grow the box to cover `point`.
    pub fn include(&mut self, point: Point) {
        self.min = Point::new(cmp::min(self.min.x, point.x), cmp::min(self.min.y, point.y));
        self.max = Point::new(cmp::max(self.max.x, point.x), cmp::max(self.max.y, point.y));
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        points.into_iter().fold(Self::empty(), |mut bbox, point| {
            bbox.include(*point);
            bbox
        })
    }

    pub fn contains(&self, point: Point) -> bool {
        self.columns().contains(&point.x) && self.rows().contains(&point.y)
    }

    fn rows(&self) -> RangeInclusive<Position> {
        self.min.y..=self.max.y
    }

    fn columns(&self) -> RangeInclusive<Position> {
        self.min.x..=self.max.x
    }

    pub fn width(&self) -> Position {
        cmp::max(self.max.x.saturating_sub(self.min.x) + 1, 0)
    }

    pub fn height(&self) -> Position {
        cmp::max(self.max.y.saturating_sub(self.min.y) + 1, 0)
    }

    /// Every point in the box, in reading order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        iproduct!(self.rows(), self.columns()).map(|(y, x)| Point::new(x, y))
    }

    /// Render the box as text, one character per point and a newline
    /// after each row.
    pub fn render<F>(&self, glyph: F) -> String
    where
        F: Fn(Point) -> char,
    {
        let mut picture = String::with_capacity(((self.width() + 1) * self.height()) as usize);
        for y in self.rows() {
            picture.extend(self.columns().map(|x| glyph(Point::new(x, y))));
            picture.push('\n');
        }
        picture
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point() {
        let point = Point::new(1, 1);

        assert_eq!(point.step(Direction::Up), Point::new(1, 0));
        assert_eq!(point.step(Direction::Down), Point::new(1, 2));
        assert_eq!(point.step(Direction::Left), Point::new(0, 1));
        assert_eq!(point.step(Direction::Right), Point::new(2, 1));

        assert_eq!(&point.to_string(), "1,1");
        assert_eq!(point.direction(Point::new(1, 2)), Some(Direction::Down));
        assert_eq!(point.direction(Point::new(2, 2)), None);
        assert!(point.is_adjacent(&Point::new(0, 1)));

        assert_eq!(
            point.adjacent().map(|(_, p)| p).collect::<Vec<_>>(),
            vec![
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 2)
            ]
        );
    }

    #[test]
    fn parse() {
        assert_eq!("3,4".parse::<Point>().unwrap(), Point::new(3, 4));
        assert_eq!("(-1, 7)".parse::<Point>().unwrap(), Point::new(-1, 7));
        assert!(matches!(
            "3;4".parse::<Point>(),
            Err(ParsePointError::InvalidLiteral(_))
        ));
        assert!(matches!(
            "99999999999,1".parse::<Point>(),
            Err(ParsePointError::InvalidNumber(_))
        ));
    }

    #[test]
    fn bbox() {
        let mut bbox = BoundingBox::empty();
        assert_eq!(bbox.width(), 0);
        assert_eq!(bbox.points().count(), 0);

        let point = Point::new(1, 2);
        bbox.include(point);
        assert_eq!(bbox.width(), 1);
        assert_eq!(bbox.height(), 1);

        bbox.include(Point::new(2, 3));
        assert_eq!(bbox.width(), 2);
        assert_eq!(bbox.height(), 2);
        assert!(bbox.contains(point));
        assert!(!bbox.contains(Point::origin()));

        assert_eq!(
            bbox.points().collect::<Vec<_>>(),
            vec![
                Point::new(1, 2),
                Point::new(2, 2),
                Point::new(1, 3),
                Point::new(2, 3)
            ]
        );
        assert_eq!(BoundingBox::from_points(&[point, Point::new(2, 3)]), bbox);
    }

    #[test]
    fn render() {
        let bbox = BoundingBox::sized(3, 2);
        let picture = bbox.render(|p| if p.x == p.y { '#' } else { '.' });
        assert_eq!(picture, "#..\n.#.\n");
    }
}
