use alloc::{vec, vec::Vec};
use core::fmt::{self, Display};
use core::iter::FromIterator;
use core::ops::Neg;

/// Disjunction of literals.
///
/// The literals are kept sorted and deduplicated, so that
/// equality and hashing coincide with equality of literal sets.
/// The empty clause denotes a derived contradiction.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Clause<L>(Vec<L>);

impl<L> Default for Clause<L> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<L: Display> Display for Clause<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(lit) = iter.next() {
            write!(f, "{}", lit)?;
            for lit in iter {
                write!(f, " ∨ {}", lit)?;
            }
        } else {
            write!(f, "⊥")?
        }
        Ok(())
    }
}

impl<L> core::ops::Deref for Clause<L> {
    type Target = [L];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, L> IntoIterator for &'a Clause<L> {
    type Item = &'a L;
    type IntoIter = core::slice::Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<L> IntoIterator for Clause<L> {
    type Item = L;
    type IntoIter = vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<L: Ord> FromIterator<L> for Clause<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        let mut lits: Vec<L> = iter.into_iter().collect();
        lits.sort();
        lits.dedup();
        Self(lits)
    }
}

impl<L: Ord, const N: usize> From<[L; N]> for Clause<L> {
    fn from(s: [L; N]) -> Self {
        Self::from_iter(s)
    }
}

impl<L: Neg<Output = L> + Clone + Eq> Clause<L> {
    /// Return whether a clause contains both some literal and its negation.
    pub fn is_tautology(&self) -> bool {
        self.iter()
            .any(|l1| self.iter().cloned().any(|l2| l1 == &-l2))
    }
}

impl<L: Clone + Ord> Clause<L> {
    /// Return the disjunction of two clauses.
    ///
    /// ~~~
    /// # use doxa::{Clause, Lit};
    /// let c1 = Clause::from([Lit(true, "p"), Lit(false, "q")]);
    /// let c2 = Clause::from([Lit(false, "q"), Lit(true, "r")]);
    /// assert_eq!(c1.union(&c2).len(), 3);
    /// ~~~
    pub fn union(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }
}
