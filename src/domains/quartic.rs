use anyhow::{anyhow, Error};
use log::info;
use rand::Rng;
use searcher::{Cost, Landscape, LocalSearchEngine};

use std::ops::RangeInclusive;

use crate::Config;

/// The polynomial (x + 1)(x + 2)(x - 3)^2 over the integers, which
/// has three separate minima at x = -2, -1 and 3.
#[derive(Debug, Clone)]
pub(crate) struct Quartic {
    domain: RangeInclusive<i64>,
}

impl Quartic {
    pub(crate) fn new(domain: RangeInclusive<i64>) -> Self {
        Self { domain }
    }

    /// Step one unit left or right.
    pub(crate) fn neighbors(x: &i64) -> Vec<i64> {
        vec![x - 1, x + 1]
    }
}

impl Landscape for Quartic {
    type State = i64;

    fn cost(&self, x: &i64) -> Cost {
        let x = *x as Cost;
        (x + 1.0) * (x + 2.0) * (x - 3.0).powi(2)
    }

    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.random_range(self.domain.clone())
    }
}

pub(crate) fn main(config: &Config) -> Result<(), Error> {
    let quartic = Quartic::new(-10..=10);
    let engine = LocalSearchEngine::new(&quartic).with_options(config.local_options());

    if let Some(starts) = &config.from {
        let starts = starts
            .split(',')
            .map(|s| s.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()?;
        for (start, optimum) in starts
            .iter()
            .zip(engine.descend_all(starts.clone(), Quartic::neighbors))
        {
            println!(
                "{} -> {} (cost {}, {} steps)",
                start, optimum.state, optimum.cost, optimum.steps
            );
        }
        return Ok(());
    }

    info!("Beam search with {} restarts", config.restarts);
    let best = engine
        .beam(Quartic::neighbors, config.restarts)
        .ok_or_else(|| anyhow!("Beam search needs at least one restart"))?;
    println!("Best: x = {} (cost {})", best.state, best.cost);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use searcher::LocalOptions;

    #[test]
    fn local_minima() {
        let quartic = Quartic::new(-10..=10);
        let engine = LocalSearchEngine::new(&quartic);

        let optima: Vec<i64> = engine
            .descend_all(vec![-10, 0, 10], Quartic::neighbors)
            .into_iter()
            .map(|o| o.state)
            .collect();
        assert_eq!(optima, vec![-2, -1, 3]);

        let best = engine
            .beam_from(vec![-10, 0, 10], Quartic::neighbors)
            .unwrap();
        assert_eq!(best.state, -2);
        assert_eq!(best.cost, 0.0);
    }

    #[test]
    fn single_descent() {
        let quartic = Quartic::new(-10..=10);
        let engine = LocalSearchEngine::new(&quartic);
        let optimum = engine.descend(10, Quartic::neighbors);
        assert_eq!(optimum.state, 3);
        assert_eq!(optimum.steps, 7);
    }

    #[test]
    fn seeded_beam() {
        let quartic = Quartic::new(-10..=10);
        let options = LocalOptions {
            seed: 2019,
            ..LocalOptions::default()
        };
        let serial = LocalSearchEngine::new(&quartic)
            .with_options(LocalOptions {
                parallel: false,
                ..options.clone()
            })
            .beam(Quartic::neighbors, 6)
            .unwrap();
        let parallel = LocalSearchEngine::new(&quartic)
            .with_options(options)
            .beam(Quartic::neighbors, 6)
            .unwrap();

        assert_eq!(serial, parallel);
        assert_eq!(serial.cost, 0.0);
        assert!(vec![-2, -1, 3].contains(&serial.state));
    }
}
