//! The open set of discovered but not yet expanded cells.

use crate::error::SearchError;
use crate::scoreboard::Scoreboard;

/// How [`Frontier::pop_min_f`] chooses between members with equal `f`.
///
/// The choice is observable: with several optimal paths, it decides which
/// one the search returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TieBreak {
    /// The member with the smallest cell index wins.
    #[default]
    LowestIndex,
    /// The member that has been in the frontier longest wins.
    InsertionOrder,
}

/// A duplicate-free set of cell indices that remembers insertion order.
///
/// Selection is a linear scan over the members, so each
/// [`pop_min_f`](Frontier::pop_min_f) costs O(|frontier|).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    order: Vec<usize>,
    member: Vec<bool>,
    tie_break: TieBreak,
}

impl Frontier {
    /// Create an empty frontier for a grid of `len` cells.
    pub fn new(len: usize, tie_break: TieBreak) -> Self {
        Self {
            order: Vec::new(),
            member: vec![false; len],
            tie_break,
        }
    }

    /// Create a frontier holding only `start`.
    pub fn with_start(len: usize, start: usize, tie_break: TieBreak) -> Self {
        let mut fr = Self::new(len, tie_break);
        fr.insert(start);
        fr
    }

    /// Add `idx`. No-op if it is already a member.
    pub fn insert(&mut self, idx: usize) {
        if self.member[idx] {
            return;
        }
        self.member[idx] = true;
        self.order.push(idx);
    }

    /// Whether `idx` is a member.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.member[idx]
    }

    /// Remove `idx`. No-op if it is not a member.
    pub fn remove(&mut self, idx: usize) {
        if !self.member[idx] {
            return;
        }
        self.member[idx] = false;
        if let Some(pos) = self.order.iter().position(|&i| i == idx) {
            self.order.remove(pos);
        }
    }

    /// The member with the smallest `f`, ties resolved by the
    /// [`TieBreak`] policy. `None` when empty.
    pub fn peek_min_f(&self, scores: &Scoreboard) -> Option<usize> {
        let mut members = self.order.iter().copied();
        let mut best = members.next()?;
        let mut best_f = scores.f(best);
        for idx in members {
            let f = scores.f(idx);
            let better = match self.tie_break {
                TieBreak::InsertionOrder => f < best_f,
                TieBreak::LowestIndex => f < best_f || (f == best_f && idx < best),
            };
            if better {
                best = idx;
                best_f = f;
            }
        }
        Some(best)
    }

    /// Remove and return the member with the smallest `f`.
    ///
    /// Callers are expected to check [`is_empty`](Self::is_empty) first;
    /// popping an empty frontier is reported as
    /// [`SearchError::EmptyFrontierPop`].
    pub fn pop_min_f(&mut self, scores: &Scoreboard) -> Result<usize, SearchError> {
        let best = self
            .peek_min_f(scores)
            .ok_or(SearchError::EmptyFrontierPop)?;
        self.remove(best);
        Ok(best)
    }

    /// Whether the frontier has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// The active tie-break policy.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Drop every member.
    pub fn clear(&mut self) {
        for &idx in &self.order {
            self.member[idx] = false;
        }
        self.order.clear();
    }
}
