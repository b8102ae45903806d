use core::cmp::Ordering;
use core::fmt::{self, Display};

/// Atom with a sign (+/-) stored along it.
///
/// The sign is `true` if the literal is positive, i.e. not negated.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Lit<A>(pub bool, pub A);

impl<A> Lit<A> {
    /// The atom of the literal.
    pub fn atom(&self) -> &A {
        &self.1
    }

    /// Return true if the sign is positive.
    pub fn is_sign_positive(&self) -> bool {
        self.0
    }

    /// Return true if the sign is negative.
    pub fn is_sign_negative(&self) -> bool {
        !self.0
    }
}

/// Order literals by atom first, so that complementary literals are adjacent.
impl<A: Ord> Ord for Lit<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1).then(self.0.cmp(&other.0))
    }
}

impl<A: Ord> PartialOrd for Lit<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Display> Display for Lit<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 {
            write!(f, "{}", self.1)
        } else {
            write!(f, "¬{}", self.1)
        }
    }
}

impl<A> From<A> for Lit<A> {
    fn from(a: A) -> Self {
        Self(true, a)
    }
}

/// The complementary literal.
impl<A> core::ops::Neg for Lit<A> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(!self.0, self.1)
    }
}
