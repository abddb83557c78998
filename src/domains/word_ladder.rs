use anyhow::{anyhow, Error};
use itertools::Itertools;
use lazy_static::lazy_static;
use log::info;
use regex::Regex;
use searcher::{Action, Cost, StateSpace};
use thiserror::Error;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Read;

use crate::{get_input_reader, report, Config};

/// Error when reading a word list or a links table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseWordsError {
    #[error("Line {0} is not of the form `word: neighbor neighbor ...`: {1:?}")]
    InvalidLine(usize, String),

    #[error("No words found")]
    Empty,
}

/// A dictionary of words, and which words are one move apart.
#[derive(Debug, Clone)]
pub(crate) struct WordLadder {
    links: BTreeMap<String, Vec<String>>,
    fixed_length: bool,

    // Set when every link changes exactly one letter, which makes
    // the count of mismatched letters a safe estimate.
    spelled: bool,
}

fn spelling_variants(word: &str) -> (Vec<String>, Vec<String>) {
    let chars: Vec<char> = word.chars().collect();
    let mut substituted = Vec::with_capacity(chars.len());
    let mut deleted = Vec::with_capacity(chars.len());
    for i in 0..chars.len() {
        substituted.push(
            chars
                .iter()
                .enumerate()
                .map(|(j, c)| if i == j { '_' } else { *c })
                .collect(),
        );
        deleted.push(
            chars
                .iter()
                .enumerate()
                .filter_map(|(j, c)| if i == j { None } else { Some(*c) })
                .collect(),
        );
    }
    (substituted, deleted)
}

impl WordLadder {
    /// Link every pair of words which differ by changing, adding or
    /// removing a single letter.
    pub(crate) fn from_words<I, S>(words: I) -> Result<Self, ParseWordsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(ParseWordsError::Empty);
        }

        let mut buckets: HashMap<String, Vec<&str>> = HashMap::new();
        for word in &words {
            for pattern in spelling_variants(word).0 {
                buckets.entry(pattern).or_default().push(word);
            }
        }

        let mut neighbors: BTreeMap<&str, BTreeSet<&str>> =
            words.iter().map(|w| (w.as_str(), BTreeSet::new())).collect();
        for word in &words {
            let (substituted, deleted) = spelling_variants(word);
            for pattern in substituted {
                for other in &buckets[&pattern] {
                    if *other != word.as_str() {
                        neighbors.entry(word).or_default().insert(other);
                    }
                }
            }
            for shorter in deleted {
                if let Some(shorter) = words.get(&shorter) {
                    neighbors.entry(word).or_default().insert(shorter);
                    neighbors.entry(shorter).or_default().insert(word);
                }
            }
        }

        let links = neighbors
            .into_iter()
            .map(|(word, near)| {
                (
                    word.to_string(),
                    near.into_iter().map(|w| w.to_string()).collect(),
                )
            })
            .collect();

        Ok(Self {
            links,
            fixed_length: true,
            spelled: true,
        })
    }

    /// Read a whitespace separated word list. Lines starting with `#`
    /// are skipped.
    pub(crate) fn parse_words(text: &str) -> Result<Self, ParseWordsError> {
        Self::from_words(
            text.lines()
                .filter(|line| !line.trim_start().starts_with('#'))
                .flat_map(str::split_whitespace),
        )
    }

    /// Read an explicit table of links, one word per line:
    ///
    /// ```text
    /// cold: cord
    /// cord: cold card word
    /// ```
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub(crate) fn parse_links(text: &str) -> Result<Self, ParseWordsError> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*(?P<word>[^\s:]+)\s*:\s*(?P<neighbors>.*)$").unwrap();
        };

        let mut links = BTreeMap::new();
        for (n, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let cap = RE
                .captures(trimmed)
                .ok_or_else(|| ParseWordsError::InvalidLine(n + 1, line.to_string()))?;
            let neighbors: Vec<String> = cap["neighbors"]
                .split_whitespace()
                .map(|w| w.to_string())
                .collect();
            links
                .entry(cap["word"].to_string())
                .or_insert_with(Vec::new)
                .extend(neighbors);
        }

        if links.is_empty() {
            return Err(ParseWordsError::Empty);
        }

        Ok(Self {
            links,
            fixed_length: true,
            spelled: false,
        })
    }

    /// Only allow moves between words of the same length.
    pub(crate) fn fixed_length(mut self, fixed_length: bool) -> Self {
        self.fixed_length = fixed_length;
        self
    }

    pub(crate) fn contains(&self, word: &str) -> bool {
        self.links.contains_key(word)
    }

    pub(crate) fn ladder<'w>(&'w self, from: &str, to: &str) -> Ladder<'w> {
        Ladder {
            words: self,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Getting from one word to another, one move at a time.
#[derive(Debug, Clone)]
pub(crate) struct Ladder<'w> {
    words: &'w WordLadder,
    from: String,
    to: String,
}

impl<'w> StateSpace for Ladder<'w> {
    type State = String;

    fn initial_state(&self) -> String {
        self.from.clone()
    }

    fn is_goal(&self, state: &String) -> bool {
        *state == self.to
    }

    fn heuristic_cost(&self, state: &String) -> Cost {
        if !(self.words.spelled && self.words.fixed_length) {
            return 0.0;
        }
        state
            .chars()
            .zip(self.to.chars())
            .filter(|(a, b)| a != b)
            .count() as Cost
    }

    fn successors(&self, state: &String) -> Vec<Action<String>> {
        let length = state.chars().count();
        self.words
            .links
            .get(state)
            .map(|near| {
                near.iter()
                    .filter(|w| !self.words.fixed_length || w.chars().count() == length)
                    .filter(|w| *w != state)
                    .map(|w| Action::step(w.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

pub(crate) fn main(config: &Config) -> Result<(), Error> {
    let mut text = String::new();
    get_input_reader(config.input.as_deref())?.read_to_string(&mut text)?;

    let words = if text.contains(':') {
        WordLadder::parse_links(&text)?
    } else {
        WordLadder::parse_words(&text)?
    };

    let from = config
        .from
        .as_deref()
        .ok_or_else(|| anyhow!("A word ladder needs a starting word (--from)"))?;
    let to = config
        .to
        .as_deref()
        .ok_or_else(|| anyhow!("A word ladder needs a final word (--to)"))?;
    for word in &[from, to] {
        if !words.contains(word) {
            return Err(anyhow!("{:?} is not in the dictionary", word));
        }
    }

    info!("Word ladder from {} to {}", from, to);
    if let Some(node) = report(config, &words.ladder(from, to))? {
        println!("{}", node.path().iter().join(" -> "));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use searcher::{astar, bfs, dijkstra};

    fn words() -> WordLadder {
        WordLadder::parse_words(include_str!("../../data/words3.txt")).unwrap()
    }

    #[test]
    fn neighbors() {
        let words = words();
        let ladder = words.ladder("bat", "nay");
        let near: Vec<String> = ladder
            .successors(&"bat".to_string())
            .into_iter()
            .map(|a| a.state)
            .collect();
        assert_eq!(near, vec!["bay", "cat", "pat", "sat"]);
        assert_eq!(ladder.heuristic_cost(&"bat".to_string()), 2.0);
    }

    #[test]
    fn yea_to_nay() {
        let words = words();
        let ladder = words.ladder("yea", "nay");

        let node = bfs(&ladder).unwrap().into_solution().unwrap();
        assert_eq!(node.path(), &["yea", "pea", "pet", "pat", "pay", "nay"]);

        for outcome in vec![dijkstra::run(&ladder).unwrap(), astar(&ladder).unwrap()] {
            assert_eq!(outcome.solution().unwrap().depth(), 6);
        }
    }

    #[test]
    fn comments() {
        let words = WordLadder::parse_words("# yay is left out\nyea pea\n  # nay\npay").unwrap();
        assert!(words.contains("yea"));
        assert!(words.contains("pay"));
        assert!(!words.contains("yay"));
        assert!(!words.contains("nay"));
        assert!(!words.contains("#"));
        assert_eq!(
            WordLadder::parse_words("# only a comment").unwrap_err(),
            ParseWordsError::Empty
        );
    }

    #[test]
    fn unreachable() {
        let words = WordLadder::parse_words("cat cot dog").unwrap();
        assert!(!bfs(&words.ladder("cat", "dog")).unwrap().is_success());
    }

    #[test]
    fn lengths() {
        let words = WordLadder::parse_words("cat cart cast at").unwrap();
        let ladder = words.ladder("cat", "cast");
        assert!(!bfs(&ladder).unwrap().is_success());

        let words = words.fixed_length(false);
        let ladder = words.ladder("cat", "cast");
        let node = bfs(&ladder).unwrap().into_solution().unwrap();
        assert_eq!(node.path(), &["cat", "cast"]);
        assert_eq!(ladder.heuristic_cost(&"cat".to_string()), 0.0);
    }

    #[test]
    fn links() {
        let words = WordLadder::parse_links(include_str!("../../data/links.txt")).unwrap();
        let node = bfs(&words.ladder("cold", "warm"))
            .unwrap()
            .into_solution()
            .unwrap();
        assert_eq!(node.path(), &["cold", "cord", "card", "ward", "warm"]);

        let ladder = words.ladder("word", "warm");
        assert_eq!(ladder.successors(&"word".to_string()).len(), 2);
        let words = words.fixed_length(false);
        let ladder = words.ladder("word", "warm");
        assert_eq!(ladder.successors(&"word".to_string()).len(), 3);
    }

    #[test]
    fn bad_links() {
        assert_eq!(
            WordLadder::parse_links("cold: cord\nwarm").unwrap_err(),
            ParseWordsError::InvalidLine(2, "warm".to_string())
        );
        assert_eq!(
            WordLadder::parse_links("# nothing").unwrap_err(),
            ParseWordsError::Empty
        );
        assert_eq!(WordLadder::parse_words("  ").unwrap_err(), ParseWordsError::Empty);
    }
}
