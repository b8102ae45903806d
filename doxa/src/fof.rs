use crate::{Clause, Cnf, Lit};
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};
use core::ops::Neg;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Propositional formula over atoms `A`.
#[derive(Clone, Debug, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Form<A> {
    Atom(A),
    Neg(Box<Form<A>>),
    /// binary connective
    Bin(Box<Form<A>>, Op, Box<Form<A>>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Op {
    Conj,
    Disj,
    Impl,
    EqFm,
}

impl Op {
    /// Return true if `a ∘ b` and `b ∘ a` denote the same formula.
    pub fn is_commutative(self) -> bool {
        !matches!(self, Op::Impl)
    }
}

/// Equality of formulas is structural, and
/// commutative for the symmetric connectives:
/// `a ∧ b` equals `b ∧ a`, whereas `a ⇒ b` differs from `b ⇒ a`.
impl<A: Eq> PartialEq for Form<A> {
    fn eq(&self, other: &Self) -> bool {
        use Form::*;
        match (self, other) {
            (Atom(a), Atom(b)) => a == b,
            (Neg(f), Neg(g)) => f == g,
            (Bin(l1, o1, r1), Bin(l2, o2, r2)) => {
                o1 == o2
                    && ((l1 == l2 && r1 == r2)
                        || (o1.is_commutative() && l1 == r2 && r1 == l2))
            }
            _ => false,
        }
    }
}

/// 64-bit FNV-1a, to obtain hashes that are stable across hasher instances.
struct Fnv(u64);

impl Default for Fnv {
    fn default() -> Self {
        Self(0xcbf2_9ce4_8422_2325)
    }
}

impl Hasher for Fnv {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for b in bytes {
            self.0 ^= u64::from(*b);
            self.0 = self.0.wrapping_mul(0x100_0000_01b3);
        }
    }
}

/// Deterministic structural fingerprint of a formula.
fn fingerprint<A: Hash>(fm: &Form<A>) -> u64 {
    let mut h = Fnv::default();
    fm.hash(&mut h);
    h.finish()
}

/// Children of symmetric connectives are hashed as an unordered pair,
/// to keep the hash consistent with commutative equality.
impl<A: Hash> Hash for Form<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use Form::*;
        match self {
            Atom(a) => {
                state.write_u8(0);
                a.hash(state)
            }
            Neg(fm) => {
                state.write_u8(1);
                fm.hash(state)
            }
            Bin(l, o, r) if o.is_commutative() => {
                state.write_u8(2);
                o.hash(state);
                let (fl, fr) = (fingerprint(l), fingerprint(r));
                state.write_u64(fl.min(fr));
                state.write_u64(fl.max(fr));
            }
            Bin(l, o, r) => {
                state.write_u8(2);
                o.hash(state);
                l.hash(state);
                r.hash(state)
            }
        }
    }
}

impl<A: Display> Display for Form<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Form::*;
        match self {
            Atom(a) => write!(f, "{}", a),
            Neg(fm) => write!(f, "¬ {}", fm),
            Bin(l, o, r) => write!(f, "({} {} {})", l, o, r),
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Conj => write!(f, "∧"),
            Op::Disj => write!(f, "∨"),
            Op::Impl => write!(f, "⇒"),
            Op::EqFm => write!(f, "⇔"),
        }
    }
}

impl<A> Neg for Form<A> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::Neg(Box::new(self))
    }
}

impl<A> core::ops::BitAnd for Form<A> {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::bin(self, Op::Conj, rhs)
    }
}

impl<A> core::ops::BitOr for Form<A> {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::bin(self, Op::Disj, rhs)
    }
}

impl<A> Form<A> {
    pub fn bin(l: Self, o: Op, r: Self) -> Self {
        Self::Bin(Box::new(l), o, Box::new(r))
    }

    pub fn imp(l: Self, r: Self) -> Self {
        Self::bin(l, Op::Impl, r)
    }

    pub fn eqfm(l: Self, r: Self) -> Self {
        Self::bin(l, Op::EqFm, r)
    }
}

impl<A: Clone + Ord> Form<A> {
    /// Translate the formula to an equivalent conjunctive normal form.
    ///
    /// Distributing disjunction over conjunction multiplies clause counts, so
    /// the output can grow exponentially with the nesting depth of disjunctions.
    ///
    /// ~~~
    /// # use doxa::Form;
    /// let (a, b) = (Form::Atom("a"), Form::Atom("b"));
    /// // cnf(¬ (a ∧ b)) = ¬a ∨ ¬b
    /// assert_eq!((-(a & b)).cnf().to_string(), "(¬a ∨ ¬b)");
    /// ~~~
    pub fn cnf(self) -> Cnf<Lit<A>> {
        use Form::*;
        match self {
            Atom(a) => Cnf::from([Clause::from([Lit(true, a)])]),
            Neg(fm) => match *fm {
                Atom(a) => Cnf::from([Clause::from([Lit(false, a)])]),
                Neg(fm) => fm.cnf(),
                Bin(l, Op::Conj, r) => (-*l | -*r).cnf(),
                Bin(l, Op::Disj, r) => (-*l & -*r).cnf(),
                Bin(l, Op::Impl, r) => (*l & -*r).cnf(),
                Bin(l, Op::EqFm, r) => {
                    ((*l.clone() & -*r.clone()) | (-*l & *r)).cnf()
                }
            },
            Bin(l, Op::Conj, r) => l.cnf().union(r.cnf()),
            Bin(l, Op::Disj, r) => {
                let (l, r) = (l.cnf(), r.cnf());
                l.iter()
                    .flat_map(|cl| r.iter().map(move |cr| cl.union(cr)))
                    .collect()
            }
            Bin(l, Op::Impl, r) => (-*l | *r).cnf(),
            Bin(l, Op::EqFm, r) => {
                (Self::imp(*l.clone(), *r.clone()) & Self::imp(*r, *l)).cnf()
            }
        }
    }
}

pub type SForm = Form<String>;
