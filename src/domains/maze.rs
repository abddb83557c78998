use anyhow::Error;
use geometry::{BoundingBox, Map, MapProblem, Path, Point};
use itertools::Itertools;
use log::info;
use thiserror::Error;

use std::collections::HashSet;
use std::convert::TryFrom;
use std::io::Read;
use std::str::FromStr;

use crate::{get_input_reader, report, Config};

/// Error when reading a maze from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMazeError {
    #[error("Unexpected maze character {0:?} at {1}")]
    UnexpectedCharacter(char, Point),

    #[error("Maze has no start (@)")]
    MissingStart,

    #[error("Maze has no goal (*)")]
    MissingGoal,

    #[error("Maze has a second {0:?} at {1}")]
    Duplicate(char, Point),
}

/// An ASCII maze: `#` is a wall, space is open, `@` is the start and
/// `*` is the goal. Everything outside the drawn rectangle is wall.
#[derive(Debug, Clone)]
pub(crate) struct Maze {
    walls: HashSet<Point>,
    bounds: BoundingBox,
    start: Point,
    goal: Point,
}

impl FromStr for Maze {
    type Err = ParseMazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut walls = HashSet::new();
        let mut bounds = BoundingBox::empty();
        let mut start = None;
        let mut goal = None;

        for (y, line) in s.lines().enumerate() {
            for (x, c) in line.chars().enumerate() {
                let point: Point = (x, y).into();
                bounds.include(point);
                let marker = match c {
                    '#' => {
                        walls.insert(point);
                        continue;
                    }
                    ' ' => continue,
                    '@' => &mut start,
                    '*' => &mut goal,
                    _ => return Err(ParseMazeError::UnexpectedCharacter(c, point)),
                };
                if marker.replace(point).is_some() {
                    return Err(ParseMazeError::Duplicate(c, point));
                }
            }
        }

        Ok(Maze {
            walls,
            bounds,
            start: start.ok_or(ParseMazeError::MissingStart)?,
            goal: goal.ok_or(ParseMazeError::MissingGoal)?,
        })
    }
}

impl Maze {
    pub(crate) fn problem(&self) -> MapProblem<Self> {
        MapProblem::new(self, self.start, self.goal)
    }

    /// Draw the maze with a path traced through it.
    pub(crate) fn trace(&self, path: &[Point]) -> String {
        let steps: HashSet<&Point> = path.iter().collect();
        self.bounds.render(|p| match self.glyph(p) {
            ' ' if steps.contains(&p) => '.',
            c => c,
        })
    }
}

impl Map for Maze {
    fn is_traversable(&self, location: Point) -> bool {
        self.bounds.contains(location) && !self.walls.contains(&location)
    }

    fn bounds(&self) -> Option<BoundingBox> {
        Some(self.bounds)
    }

    fn glyph(&self, location: Point) -> char {
        if location == self.goal {
            '*'
        } else if self.is_traversable(location) {
            ' '
        } else {
            '#'
        }
    }
}

pub(crate) fn main(config: &Config) -> Result<(), Error> {
    let mut text = String::new();
    get_input_reader(config.input.as_deref())?.read_to_string(&mut text)?;
    let maze: Maze = text.parse()?;

    info!("Maze from {} to {}", maze.start, maze.goal);
    if let Some(node) = report(config, &maze.problem())? {
        let path = Path::try_from(node)?;
        println!("{}", maze.trace(&path));
        println!("{}", path.directions().join(" "));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use searcher::{Algorithm, StateSpace};

    fn maze() -> Maze {
        include_str!("../../data/maze.txt").parse().unwrap()
    }

    #[test]
    fn parse() {
        let maze = maze();
        assert_eq!(maze.start, Point::new(1, 0));
        assert_eq!(maze.goal, Point::new(21, 10));
        assert_eq!(maze.bounds.width(), 23);
        assert_eq!(maze.bounds.height(), 11);

        assert_eq!(
            "#@#\n#x#".parse::<Maze>().unwrap_err(),
            ParseMazeError::UnexpectedCharacter('x', Point::new(1, 1))
        );
        assert_eq!(
            "#@#\n# #".parse::<Maze>().unwrap_err(),
            ParseMazeError::MissingGoal
        );
        assert_eq!(
            "@ *@".parse::<Maze>().unwrap_err(),
            ParseMazeError::Duplicate('@', Point::new(3, 0))
        );
    }

    #[test]
    fn uninformed() {
        let maze = maze();
        for algorithm in &[Algorithm::BreadthFirst, Algorithm::UniformCost] {
            let report = algorithm.engine().search_counted(&maze.problem()).unwrap();
            assert_eq!(report.outcome.solution().unwrap().depth(), 39);
            assert_eq!(report.expanded, 111, "{}", algorithm);
        }
    }

    #[test]
    fn astar() {
        let maze = maze();
        let report = Algorithm::AStar
            .engine()
            .search_counted(&maze.problem())
            .unwrap();
        let node = report.outcome.solution().unwrap();
        assert_eq!(node.depth(), 39);
        assert_eq!(node.cost(), 38.0);
        assert_eq!(report.expanded, 83);
    }

    #[test]
    fn draw() {
        let maze = maze();
        let picture = maze.problem().draw(&Point::new(1, 1)).unwrap();
        let lines: Vec<&str> = picture.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "# #####################");
        assert_eq!(lines[1], "#@  # #   #   # #     #");
        assert_eq!(lines[10], "#####################*#");
    }

    #[test]
    fn trace() {
        let maze = maze();
        let node = searcher::bfs(&maze.problem())
            .unwrap()
            .into_solution()
            .unwrap();
        let path = Path::try_from(node).unwrap();
        assert_eq!(path.distance(), 38);
        assert_eq!(*path.origin(), maze.start);
        assert_eq!(*path.destination(), maze.goal);
        assert_eq!(path.directions().next(), Some(geometry::Direction::Down));

        let picture = maze.trace(&path);
        assert_eq!(picture.matches('.').count(), 38);
        assert!(picture.starts_with("#.###"));
    }
}
