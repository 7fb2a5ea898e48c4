//! cayley is a library for enumerating finite monoids, up to isomorphism and
//! anti-isomorphism, as explicit Cayley tables.
//!
//! A monoid of order n is represented by the flat row-major table of its
//! binary operation on the elements 0..n, with 0 always the two-sided
//! identity, so row 0 and column 0 are fixed from the start. The enumeration
//! is a two-level backtracking search: [diagonal::Diagonals] generates every
//! admissible main diagonal, and [table::Completions] extends each diagonal
//! to the full associative tables that are lexicographically minimal in their
//! orbit under a supplied set of relabelling permutations, acting both
//! directly and on the transpose. Supplying the full symmetric group on the
//! non-identity elements therefore yields each monoid exactly once.
//!
//! The library also carries the combinatorial primitives the searches are
//! built from - subset and permutation enumeration of an indexed base set -
//! and predicates on complete operation tables.

pub mod binop;
pub mod diagonal;
pub mod permutation;
pub mod subsets;
pub mod table;

use std::error::Error;
use std::fmt::{Display, Formatter};
use crate::permutation::symmetric_group_fixing_identity;

/// A monoid element, represented by its index in the base set. 0 is the
/// identity.
pub type Element = usize;

/// Sentinel for a table or diagonal cell not yet assigned during
/// backtracking. Emitted tables never contain it.
pub const UNSET : Element = usize::MAX;

/// Enumerate every monoid of the given order, as flat row-major Cayley
/// tables, one per isomorphism-or-anti-isomorphism class.
/// # Example
/// ```
/// use cayley::monoids;
/// assert_eq!(1,monoids(1).count());
/// assert_eq!(2,monoids(2).count());
/// assert_eq!(7,monoids(3).count());
/// ```
pub fn monoids(order:usize) -> impl Iterator<Item=Vec<Element>> {
    let perms = symmetric_group_fixing_identity(order);
    diagonal::Diagonals::new(order,perms.clone())
        .flat_map(move |d|table::Completions::new(&d,&perms))
}

/// Check that a table has the identity convention in place: element 0 acts as
/// the identity along row 0 and column 0.
/// # Example
/// ```
/// use cayley::enforce_identity_position;
/// assert!(enforce_identity_position(&[0,1,1,0],2).is_ok());
/// assert!(enforce_identity_position(&[1,0,1,0],2).is_err());
/// ```
pub fn enforce_identity_position(table:&[Element],order:usize) -> Result<(),MonoidError> {
    for i in 0..order {
        if table[i]!=i || table[order*i]!=i { return Err(MonoidError::InvalidIdentity); }
    }
    Ok(())
}

#[derive(Clone,Debug)]
pub enum MonoidError {
    InvalidIdentity,
}

impl Error for MonoidError { }

impl Display for MonoidError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MonoidError::InvalidIdentity => write!(f,"Neutral element isn't in first row."),
        }
    }
}
