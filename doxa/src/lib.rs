#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod belief;
mod clause;
mod cnf;
pub mod fof;
mod literal;
pub mod resolution;

pub use belief::BeliefBase;
pub use clause::Clause;
pub use cnf::Cnf;
pub use fof::Form;
pub use literal::Lit;
