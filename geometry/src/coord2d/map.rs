//! Trait to define a map suitable for pathfinding
//! on a 2D coordinate grid.
use std::fmt;

use searcher::{Cost, RenderError};

use super::{BoundingBox, Point};

/// Defines a map of locations on a coordinate grid.
///
/// The storage of the map is left to the implementing
/// structure, this trait simply requires a map to
/// return whether a given location is traversable.
///
/// Maps assume that traversal happens one square at
/// a time in 2-D space.
pub trait Map: Sized + fmt::Debug {
    /// Can the sprite step on this location on the path?
    fn is_traversable(&self, location: Point) -> bool;

    /// Cost of stepping onto this location.
    fn step_cost(&self, _location: Point) -> Cost {
        1.0
    }

    /// A lower bound on [Map::step_cost] anywhere on the map, used to
    /// keep distance estimates admissible.
    fn min_step_cost(&self) -> Cost {
        1.0
    }

    /// Extent of the map, if it has one. Maps without bounds
    /// can't be drawn.
    fn bounds(&self) -> Option<BoundingBox> {
        None
    }

    /// Character used to draw a location.
    fn glyph(&self, location: Point) -> char {
        if self.is_traversable(location) {
            ' '
        } else {
            '#'
        }
    }

    /// Draw the map, marking the given position.
    fn draw(&self, position: Point) -> Result<String, RenderError> {
        let bounds = self.bounds().ok_or(RenderError::Unsupported)?;
        if !bounds.contains(position) {
            return Err(RenderError::Failed(format!(
                "{} is outside the map",
                position
            )));
        }
        Ok(bounds.render(|p| if p == position { '@' } else { self.glyph(p) }))
    }
}


#[cfg(test)]
mod tests {
    use super::helpers::*;
    use super::*;

    #[test]
    fn draw() {
        let map: SimpleMap = "...\n.#.\n...".parse().unwrap();
        assert_eq!(map.draw(Point::new(2, 0)).unwrap(), "  @\n # \n   \n");
        assert!(matches!(
            map.draw(Point::new(5, 5)),
            Err(RenderError::Failed(_))
        ));

        let open = OpenMap::default();
        assert!(matches!(
            open.draw(Point::origin()),
            Err(RenderError::Unsupported)
        ));
    }
}
