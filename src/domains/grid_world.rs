use anyhow::{anyhow, Error};
use geometry::{BoundingBox, Map, MapProblem, Path, Point};
use itertools::Itertools;
use log::info;

use std::convert::TryFrom;

use crate::{report, Config};

/// An open, walled-in rectangle. Every point inside is traversable.
#[derive(Debug, Clone)]
pub(crate) struct GridWorld {
    bounds: BoundingBox,
}

impl GridWorld {
    pub(crate) fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: BoundingBox::sized(width, height),
        }
    }

    pub(crate) fn route(&self, origin: Point, target: Point) -> MapProblem<Self> {
        MapProblem::new(self, origin, target)
    }
}

impl Map for GridWorld {
    fn is_traversable(&self, location: Point) -> bool {
        self.bounds.contains(location)
    }

    fn bounds(&self) -> Option<BoundingBox> {
        Some(self.bounds)
    }

    fn glyph(&self, _location: Point) -> char {
        '.'
    }
}

pub(crate) fn main(config: &Config) -> Result<(), Error> {
    let (width, height) = config.size.unwrap_or((20, 20));
    let world = GridWorld::new(width, height);

    let origin: Point = match &config.from {
        Some(text) => text.parse()?,
        None => Point::origin(),
    };
    let target: Point = match &config.to {
        Some(text) => text.parse()?,
        None => Point::new(width - 1, height - 1),
    };
    for point in &[origin, target] {
        if !world.is_traversable(*point) {
            return Err(anyhow!("{} is outside a {}x{} grid", point, width, height));
        }
    }

    info!("Grid {}x{} from {} to {}", width, height, origin, target);
    if let Some(node) = report(config, &world.route(origin, target))? {
        let path = Path::try_from(node)?;
        println!("{}", path.directions().join(" "));
    }
    Ok(())
}
