//! Refutation by propositional resolution.

use crate::{Clause, Lit};
use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashSet;
use log::debug;

/// Return all resolvents of two clauses.
///
/// Every pair of complementary literals (one from each clause) yields
/// its own resolvent, so a single pair of clauses may resolve in
/// several ways; tautological resolvents are dropped.
pub fn resolve<A: Clone + Ord>(
    c1: &Clause<Lit<A>>,
    c2: &Clause<Lit<A>>,
) -> Vec<Clause<Lit<A>>> {
    let mut resolvents = Vec::new();
    for l1 in c1.iter() {
        for l2 in c2.iter() {
            if *l1 != -l2.clone() {
                continue;
            }
            let lits = c1.iter().filter(|l| *l != l1);
            let lits = lits.chain(c2.iter().filter(|l| *l != l2));
            let resolvent: Clause<_> = lits.cloned().collect();
            if !resolvent.is_tautology() {
                resolvents.push(resolvent)
            }
        }
    }
    resolvents
}

/// Decide by saturation whether a set of clauses admits no model.
///
/// Each round resolves every accumulated clause against every clause derived
/// in the previous round. The procedure stops as soon as the empty clause is
/// derived, or once a round produces no clause that has not been seen before.
/// The atom vocabulary of the input is finite, so only finitely many
/// non-tautological clauses exist over it and the loop terminates.
///
/// The accumulated clause set can grow exponentially with the input size.
pub fn is_unsatisfiable<A, I>(clauses: I) -> bool
where
    A: Clone + Ord + Hash,
    I: IntoIterator<Item = Clause<Lit<A>>>,
{
    let mut seen = HashSet::new();
    let mut all = Vec::new();
    for cl in clauses {
        if cl.is_empty() {
            return true;
        }
        if seen.insert(cl.clone()) {
            all.push(cl)
        }
    }

    let mut frontier = all.clone();
    let mut round = 0;
    loop {
        round += 1;
        let mut fresh = Vec::new();
        for c1 in &all {
            for c2 in &frontier {
                if c1 == c2 {
                    continue;
                }
                for resolvent in resolve(c1, c2) {
                    if resolvent.is_empty() {
                        debug!("empty clause derived in round {}", round);
                        return true;
                    }
                    if seen.insert(resolvent.clone()) {
                        fresh.push(resolvent)
                    }
                }
            }
        }
        debug!("round {}: {} clauses, {} new", round, all.len(), fresh.len());
        if fresh.is_empty() {
            return false;
        }
        all.extend(fresh.iter().cloned());
        frontier = fresh;
    }
}
