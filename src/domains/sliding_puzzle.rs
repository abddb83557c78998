use anyhow::Error;
use geometry::{BoundingBox, Direction, Point};
use itertools::Itertools;
use log::info;
use searcher::{Action, Cost, RenderError, StateSpace};
use thiserror::Error;

use std::fmt;
use std::str::FromStr;

use crate::{report, Config};

const SIDE: usize = 3;
const TILES: usize = SIDE * SIDE;

/// Error when reading a puzzle board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePuzzleError {
    #[error("Expected {} tiles, found {0}", TILES)]
    WrongLength(usize),

    #[error("Invalid tile: {0:?}")]
    InvalidTile(String),

    #[error("Tile {0} appears twice")]
    Duplicate(u8),

    #[error("This arrangement can't be solved")]
    Unsolvable,
}

/// A 3x3 sliding tile board, in reading order. Zero is the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Board([u8; TILES]);

impl Board {
    pub(crate) fn solved() -> Self {
        let mut tiles = [0; TILES];
        for (i, tile) in tiles.iter_mut().take(TILES - 1).enumerate() {
            *tile = i as u8 + 1;
        }
        Board(tiles)
    }

    fn bounds() -> BoundingBox {
        BoundingBox::sized(SIDE as i32, SIDE as i32)
    }

    fn location(index: usize) -> Point {
        (index % SIDE, index / SIDE).into()
    }

    fn index(point: Point) -> usize {
        point.y as usize * SIDE + point.x as usize
    }

    fn blank(&self) -> Point {
        let index = self.0.iter().position(|t| *t == 0).unwrap_or(0);
        Self::location(index)
    }

    /// Slide the blank one square, if there is room.
    fn slide(&self, direction: Direction) -> Option<Self> {
        let blank = self.blank();
        let target = blank.step(direction);
        if !Self::bounds().contains(target) {
            return None;
        }
        let mut tiles = self.0;
        tiles.swap(Self::index(blank), Self::index(target));
        Some(Board(tiles))
    }

    /// Sum of the distances from each tile to its home square.
    fn manhattan(&self) -> usize {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile != 0)
            .map(|(i, tile)| {
                let home = Self::location(*tile as usize - 1);
                Self::location(i).manhattan_distance(home) as usize
            })
            .sum()
    }

    fn inversions(&self) -> usize {
        self.0
            .iter()
            .filter(|t| **t != 0)
            .tuple_combinations()
            .filter(|(a, b)| a > b)
            .count()
    }
}

impl FromStr for Board {
    type Err = ParsePuzzleError;

    /// Accepts tiles separated by commas or whitespace, or nine digits
    /// run together.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens: Vec<String> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect();
        if tokens.len() == 1 && tokens[0].len() == TILES {
            tokens = tokens[0].chars().map(|c| c.to_string()).collect();
        }
        if tokens.len() != TILES {
            return Err(ParsePuzzleError::WrongLength(tokens.len()));
        }

        let mut tiles = [0; TILES];
        let mut seen = [false; TILES];
        for (slot, token) in tiles.iter_mut().zip(tokens) {
            let tile: u8 = match token.parse() {
                Ok(t) if (t as usize) < TILES => t,
                _ => return Err(ParsePuzzleError::InvalidTile(token)),
            };
            if seen[tile as usize] {
                return Err(ParsePuzzleError::Duplicate(tile));
            }
            seen[tile as usize] = true;
            *slot = tile;
        }

        let board = Board(tiles);
        if board.inversions() % 2 != 0 {
            return Err(ParsePuzzleError::Unsolvable);
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let picture = Self::bounds().render(|p| match self.0[Self::index(p)] {
            0 => '.',
            t => (b'0' + t) as char,
        });
        write!(f, "{}", picture)
    }
}

/// Sliding the tiles of a scrambled board back into order.
#[derive(Debug, Clone)]
pub(crate) struct SlidingPuzzle {
    start: Board,
    goal: Board,
}

impl SlidingPuzzle {
    pub(crate) fn new(start: Board) -> Self {
        Self {
            start,
            goal: Board::solved(),
        }
    }
}

impl StateSpace for SlidingPuzzle {
    type State = Board;

    fn initial_state(&self) -> Board {
        self.start
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }

    fn heuristic_cost(&self, state: &Board) -> Cost {
        state.manhattan() as Cost
    }

    fn successors(&self, state: &Board) -> Vec<Action<Board>> {
        Direction::all()
            .filter_map(|d| state.slide(d).map(|b| Action::labeled(d.name(), b, 1.0)))
            .collect()
    }

    fn draw(&self, state: &Board) -> Result<String, RenderError> {
        Ok(state.to_string())
    }
}

pub(crate) fn main(config: &Config) -> Result<(), Error> {
    let start: Board = match &config.tiles {
        Some(tiles) => tiles.parse()?,
        None => "421056783".parse()?,
    };

    info!("Sliding puzzle from\n{}", start);
    if let Some(node) = report(config, &SlidingPuzzle::new(start))? {
        println!("{}", node.labels().join(" "));
    }
    Ok(())
}
