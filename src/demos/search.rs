// src/demos/search.rs
use rand::Rng;
use rand::seq::IndexedRandom;

use super::DemoError;
use crate::config::consts::{ SEARCH_MAX, SEARCH_MIN };

/// Recursive binary search over a sorted slice.
///
/// Returns the midpoint index that matched; with duplicates that is any one of
/// the equal entries, not necessarily the first.
pub fn recursive_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    search_range(items, target, 0, items.len() - 1)
}

fn search_range<T: Ord>(items: &[T], target: &T, start: usize, end: usize) -> Option<usize> {
    if start > end {
        return None;
    }
    let mid = (start + end) / 2;
    match items[mid].cmp(target) {
        std::cmp::Ordering::Equal => Some(mid),
        std::cmp::Ordering::Greater => {
            if mid == 0 { return None; }
            search_range(items, target, start, mid - 1)
        }
        std::cmp::Ordering::Less => search_range(items, target, mid + 1, end),
    }
}

/// A sorted list of random numbers plus one value drawn from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchDemo {
    pub numbers: Vec<u32>,
    pub target: u32,
}

impl SearchDemo {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Result<Self, DemoError> {
        let mut numbers: Vec<u32> = (0..len)
            .map(|_| rng.random_range(SEARCH_MIN..=SEARCH_MAX))
            .collect();
        numbers.sort_unstable();
        let target = *numbers.choose(rng).ok_or(DemoError::EmptyList)?;
        Ok(Self { numbers, target })
    }

    pub fn find(&self, target: u32) -> Option<usize> {
        recursive_search(&self.numbers, &target)
    }
}

/// Parse one line of prompt input.
pub fn parse_target(input: &str) -> Result<u32, DemoError> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| DemoError::Prompt { input: s!(trimmed) })
}
