//! Pathfinding in two dimensions, using the engines from `searcher`.
use searcher::{Action, Cost, RenderError, StateSpace};

pub use super::map::Map;
use super::Point;

/// Getting from one point to another on a map, as a state space.
///
/// States are points. Moves go one square in each [super::Direction]
/// onto traversable squares, labeled with the direction taken. The
/// heuristic is the manhattan distance to the target, scaled by the
/// map's cheapest step so it never overestimates.
#[derive(Debug, Clone)]
pub struct MapProblem<'m, M> {
    map: &'m M,
    origin: Point,
    target: Point,
}

impl<'m, M> MapProblem<'m, M>
where
    M: Map,
{
    pub fn new(map: &'m M, origin: Point, target: Point) -> Self {
        Self {
            map,
            origin,
            target,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn target(&self) -> Point {
        self.target
    }
}

impl<'m, M> StateSpace for MapProblem<'m, M>
where
    M: Map,
{
    type State = Point;

    fn initial_state(&self) -> Point {
        self.origin
    }

    fn is_goal(&self, state: &Point) -> bool {
        *state == self.target
    }

    fn heuristic_cost(&self, state: &Point) -> Cost {
        state.manhattan_distance(self.target) as Cost * self.map.min_step_cost()
    }

    fn successors(&self, state: &Point) -> Vec<Action<Point>> {
        state
            .adjacent()
            .filter(|(_, next)| self.map.is_traversable(*next))
            .map(|(direction, next)| {
                Action::labeled(direction.name(), next, self.map.step_cost(next))
            })
            .collect()
    }

    fn draw(&self, state: &Point) -> Result<String, RenderError> {
        self.map.draw(*state)
    }
}
