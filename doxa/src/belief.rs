use crate::fof::Form;
use crate::resolution;
use crate::{Clause, Lit};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::hash::Hash;
use log::debug;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Prioritized collection of beliefs.
///
/// Each belief is a formula mapped to a positive priority;
/// formulas are compared by their (commutative) structural equality.
/// Beliefs are kept in insertion order, which makes display and the
/// subset search of [`BeliefBase::contract`] reproducible.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BeliefBase<A> {
    beliefs: Vec<(Form<A>, u32)>,
}

impl<A> Default for BeliefBase<A> {
    fn default() -> Self {
        Self {
            beliefs: Vec::new(),
        }
    }
}

impl<A: Display> Display for BeliefBase<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.beliefs.iter();
        if let Some((fm, p)) = iter.next() {
            write!(f, "{} (priority {})", fm, p)?;
            for (fm, p) in iter {
                write!(f, "\n{} (priority {})", fm, p)?;
            }
        }
        Ok(())
    }
}

/// Does the given collection of beliefs entail the formula?
///
/// Decided by refutation: the beliefs entail `fm` iff
/// their clauses together with the clauses of `¬ fm` are unsatisfiable.
fn entailed<'a, A, I>(beliefs: I, fm: &Form<A>) -> bool
where
    A: 'a + Clone + Ord + Hash,
    I: IntoIterator<Item = &'a Form<A>>,
{
    let mut clauses: Vec<Clause<Lit<A>>> = Vec::new();
    for f in beliefs {
        clauses.extend(f.clone().cnf())
    }
    clauses.extend((-fm.clone()).cnf());
    resolution::is_unsatisfiable(clauses)
}

impl<A> BeliefBase<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }

    /// The formulas of the belief base, in insertion order.
    pub fn get_beliefs(&self) -> impl Iterator<Item = &Form<A>> {
        self.beliefs.iter().map(|(f, _)| f)
    }

    /// The beliefs selected by the given bit pattern over insertion indices.
    fn masked(&self, mask: usize) -> impl Iterator<Item = &(Form<A>, u32)> {
        let beliefs = self.beliefs.iter().enumerate();
        beliefs.filter(move |(i, _)| mask >> i & 1 == 1).map(|(_, b)| b)
    }
}

impl<A: Eq> BeliefBase<A> {
    /// Insert the formula or overwrite its priority.
    ///
    /// A formula that is already believed keeps its insertion position.
    pub fn add_belief(&mut self, fm: Form<A>, priority: u32) {
        match self.beliefs.iter_mut().find(|(f, _)| *f == fm) {
            Some((_, p)) => *p = priority,
            None => self.beliefs.push((fm, priority)),
        }
    }

    /// Delete the formula; do nothing if it is not believed.
    pub fn remove_belief(&mut self, fm: &Form<A>) {
        self.beliefs.retain(|(f, _)| f != fm)
    }

    /// The priority of the formula, and 0 if it is not believed.
    pub fn get_priority(&self, fm: &Form<A>) -> u32 {
        let found = self.beliefs.iter().find(|(f, _)| f == fm);
        found.map_or(0, |(_, p)| *p)
    }

    /// Add the formula to the beliefs; no entailment check is performed.
    pub fn expand(&mut self, fm: Form<A>, priority: u32) {
        self.add_belief(fm, priority)
    }
}

impl<A: Clone + Ord + Hash> BeliefBase<A> {
    /// Do the current beliefs entail the formula?
    pub fn entails(&self, fm: &Form<A>) -> bool {
        entailed(self.beliefs.iter().map(|(f, _)| f), fm)
    }

    /// Remove the formula from the consequences of the belief base.
    ///
    /// Among the maximal subsets of the beliefs that do not entail `fm`,
    /// this keeps the one with the greatest priority sum; on equal sums,
    /// the subset found first in ascending bit-pattern order over
    /// insertion-indexed beliefs wins. If `fm` was not entailed to begin
    /// with, or if it is a tautology (so that no subset qualifies),
    /// the beliefs are left unchanged.
    ///
    /// All 2ⁿ subsets of the n current beliefs are candidates, and every
    /// candidate may run a full resolution search.
    pub fn contract(&mut self, fm: &Form<A>) {
        if !self.entails(fm) {
            return;
        }

        let n = self.beliefs.len();
        assert!(n < usize::BITS as usize, "too many beliefs for subset search");

        let mut entailing: Vec<usize> = Vec::new();
        let mut keep: Vec<usize> = Vec::new();
        for mask in 0..1usize << n {
            // a superset of an entailing subset entails as well
            if entailing.iter().any(|e| mask & e == *e) {
                continue;
            }
            if entailed(self.masked(mask).map(|(f, _)| f), fm) {
                entailing.push(mask)
            } else {
                keep.push(mask)
            }
        }
        debug!("contract: {} non-entailing subsets", keep.len());

        let mut best: Option<(usize, u64)> = None;
        for &m in &keep {
            if keep.iter().any(|&o| o != m && m & o == m) {
                continue; // properly contained in another non-entailing subset
            }
            let score: u64 = self.masked(m).map(|(_, p)| u64::from(*p)).sum();
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((m, score))
            }
        }

        if let Some((m, _)) = best {
            debug!("contract: keeping {} of {} beliefs", m.count_ones(), n);
            let beliefs = core::mem::take(&mut self.beliefs);
            self.beliefs = beliefs
                .into_iter()
                .enumerate()
                .filter(|(i, _)| m >> i & 1 == 1)
                .map(|(_, b)| b)
                .collect();
        }
    }

    /// Revise the beliefs to accommodate the formula:
    /// contract its negation, then expand by it.
    pub fn revise(&mut self, fm: Form<A>, priority: u32) {
        self.contract(&-fm.clone());
        self.expand(fm, priority)
    }
}
