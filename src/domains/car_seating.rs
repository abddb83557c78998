use anyhow::{anyhow, Error};
use itertools::Itertools;
use lazy_static::lazy_static;
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use searcher::{Cost, Landscape, LocalSearchEngine};

use std::collections::HashMap;

use crate::Config;

const PEOPLE: [&str; 19] = [
    "Alex", "Anda", "Anna", "Emily", "Genia", "Jiyin", "John", "Justin", "Luke", "Patrick", "Phil",
    "Rachel", "Rung", "Ryan", "Sam", "Sarah", "Suet", "Thomas", "Yuanjin",
];

/// Seats in each car.
const CARS: [usize; 3] = [7, 6, 6];

const FRIENDS: [(&str, &str, u32); 27] = [
    ("Rung", "Suet", 1),
    ("Emily", "Rachel", 1),
    ("Emily", "Phil", 1),
    ("Alex", "Anda", 1),
    ("Genia", "Phil", 1),
    ("Anda", "Genia", 1),
    ("Genia", "Sam", 1),
    ("Genia", "John", 1),
    ("Genia", "Ryan", 1),
    ("Genia", "Luke", 1),
    ("Justin", "Ryan", 1),
    ("Luke", "Ryan", 1),
    ("Justin", "Luke", 1),
    ("John", "Justin", 1),
    ("Justin", "Sam", 1),
    ("Justin", "Patrick", 1),
    ("Anda", "Justin", 1),
    ("Luke", "Sarah", 1),
    ("Patrick", "Sam", 1),
    ("Jiyin", "Ryan", 2),
    ("Anna", "Jiyin", 2),
    ("Genia", "Patrick", 3),
    ("Genia", "Justin", 3),
    ("Anna", "Ryan", 3),
    ("Anda", "Phil", 3),
    ("Anna", "Sam", 3),
    ("Thomas", "Yuanjin", 4),
];

lazy_static! {
    static ref AFFINITY: HashMap<(usize, usize), u32> = {
        let index: HashMap<&str, usize> = PEOPLE.iter().enumerate().map(|(i, p)| (*p, i)).collect();
        let mut affinity = HashMap::new();
        for (a, b, weight) in FRIENDS.iter() {
            let (a, b) = (index[a], index[b]);
            affinity.insert((a, b), *weight);
            affinity.insert((b, a), *weight);
        }
        affinity
    };
}

/// Which car each person rides in, indexed like [PEOPLE].
pub(crate) type Seating = Vec<u8>;

/// Splitting a group of friends between cars, so that as many friends
/// as possible ride together.
///
/// The cost of a seating is the negated sum of the affinities of every
/// pair sharing a car, so lower is better.
#[derive(Debug, Clone, Default)]
pub(crate) struct CarSeating;

impl CarSeating {
    /// Every seating reachable by two people in different cars
    /// trading places.
    pub(crate) fn neighbors(seating: &Seating) -> Vec<Seating> {
        (0..seating.len())
            .tuple_combinations()
            .filter(|(i, j)| seating[*i] != seating[*j])
            .map(|(i, j)| {
                let mut next = seating.clone();
                next.swap(i, j);
                next
            })
            .collect()
    }

    /// Total affinity of the pairs who share a car.
    pub(crate) fn fitness(seating: &Seating) -> u32 {
        (0..seating.len())
            .tuple_combinations()
            .filter(|(i, j)| seating[*i] == seating[*j])
            .filter_map(|pair| AFFINITY.get(&pair))
            .sum()
    }

    pub(crate) fn describe(seating: &Seating) -> String {
        (0..CARS.len() as u8)
            .map(|car| {
                let riders = seating
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| **c == car)
                    .map(|(i, _)| PEOPLE[i])
                    .join(", ");
                format!("Car {}: {}", car + 1, riders)
            })
            .join("\n")
    }
}

impl Landscape for CarSeating {
    type State = Seating;

    fn cost(&self, seating: &Seating) -> Cost {
        -(Self::fitness(seating) as Cost)
    }

    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Seating {
        let mut seating: Seating = CARS
            .iter()
            .enumerate()
            .flat_map(|(car, seats)| std::iter::repeat(car as u8).take(*seats))
            .collect();
        seating.shuffle(rng);
        seating
    }
}

pub(crate) fn main(config: &Config) -> Result<(), Error> {
    let seating = CarSeating;
    let engine = LocalSearchEngine::new(&seating).with_options(config.local_options());

    info!(
        "Seating {} people with {} restarts",
        PEOPLE.len(),
        config.restarts
    );
    let best = engine
        .beam(CarSeating::neighbors, config.restarts)
        .ok_or_else(|| anyhow!("Beam search needs at least one restart"))?;
    println!(
        "Fitness {} after {} swaps\n{}",
        CarSeating::fitness(&best.state),
        best.steps,
        CarSeating::describe(&best.state)
    );
    Ok(())
}
