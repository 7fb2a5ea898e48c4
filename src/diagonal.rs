//! The first stage of the search: admissible diagonals.
//!
//! A full table search is run once per diagonal, so the diagonal enumerator
//! also derives everything the second stage needs from the diagonal alone:
//! which permutations remain usable as symmetries, and which structural
//! restrictions each element places on its row and column.

use crate::{Element, UNSET};
use crate::permutation::Permutation;

/// True iff iterating i ↦ d(i) from the given element reaches the identity
/// within at most n steps, i.e. some power of the element is 0.
pub fn invertible_in(diagonal:&[Element],element:usize) -> bool {
    let mut power = diagonal[element];
    for _ in 0..diagonal.len() {
        if power==0 { return true; }
        power = diagonal[power];
    }
    false
}

/// The constraints an element places on its own row and column of the table,
/// read off the diagonal before the cell-by-cell search starts.
///
/// An idempotent element e ≠ 0 admits no product e·x = 0, since then
/// e = e·0 = e·(e·x) = (e·e)·x = e·x = 0. An invertible element's row and
/// column must each be a permutation of the base set.
#[derive(Copy,Clone,Debug,Default,Eq, PartialEq)]
pub struct Restriction {
    pub idempotent : bool,
    pub invertible : bool,
}

/// Per-element restrictions for a complete diagonal. The identity at 0 is
/// left unrestricted - its row and column are fixed anyway.
pub fn restrictions(diagonal:&[Element]) -> Vec<Restriction> {
    let mut result = vec![Restriction::default();diagonal.len()];
    for i in 1..diagonal.len() {
        result[i] = Restriction{ idempotent : diagonal[i]==i, invertible : invertible_in(diagonal,i) };
    }
    result
}

/// True iff the permutation commutes with the diagonal viewed as a map,
/// d(i) = p(d(p⁻¹(i))) for every i. Only such permutations can relate two
/// tables sharing this diagonal, so the rest are discarded for the whole of
/// the per-diagonal search.
pub fn stable_under(diagonal:&[Element],p:&Permutation) -> bool {
    (0..diagonal.len()).all(|i|diagonal[i]==p[diagonal[p.inverse_of(i)]])
}

/// The diagonal-stable subset of a permutation set.
pub fn stable_permutations(diagonal:&[Element],perms:&[Permutation]) -> Vec<Permutation> {
    perms.iter().filter(|p|stable_under(diagonal,p)).cloned().collect()
}

/// Test whether a partial diagonal is still lexicographically minimal under
/// conjugation by every permutation in the set. Positions not yet assigned
/// hold UNSET; a comparison that reaches one is undecidable and passes.
pub fn is_canonical(diagonal:&[Element],perms:&[Permutation]) -> bool {
    for p in perms {
        for j in 0..diagonal.len() {
            let ii = p.inverse_of(j);
            if diagonal[ii]==UNSET || diagonal[j]==UNSET { break; }
            let q = p[diagonal[ii]];
            if diagonal[j]<q { break; }
            if diagonal[j]>q { return false; }
        }
    }
    true
}

/// Lazily enumerate every canonical diagonal of the given order: length-order
/// arrays d with d(0) = 0 that are lexicographically minimal under
/// conjugation by the supplied permutation set.
///
/// The all-zero diagonal comes first; the remaining positions 1..order are
/// then raised by in-place backtracking, emitting a snapshot whenever the
/// last position holds an admissible value.
/// # Example
/// ```
/// use cayley::diagonal::Diagonals;
/// use cayley::permutation::Permutation;
/// let diagonals : Vec<Vec<usize>> = Diagonals::new(2,vec![Permutation::identity(2)]).collect();
/// assert_eq!(vec![vec![0,0],vec![0,1]],diagonals);
/// ```
pub struct Diagonals {
    order : usize,
    perms : Vec<Permutation>,
    diagonal : Vec<Element>,
    index : usize,
    started : bool,
    finished : bool,
}

impl Diagonals {
    pub fn new(order:usize,perms:Vec<Permutation>) -> Diagonals {
        assert!(order>=1);
        Diagonals{ order, perms, diagonal : vec![0;order], index : order-1, started : false, finished : false }
    }
}

impl Iterator for Diagonals {
    type Item = Vec<Element>;
    fn next(&mut self) -> Option<Vec<Element>> {
        if self.finished { return None; }
        if !self.started {
            self.started = true;
            return Some(self.diagonal.clone());
        }
        if self.order==1 { self.finished=true; return None; }
        loop {
            // UNSET is the fresh marker left by backtracking; wrapping lifts it to 0.
            self.diagonal[self.index] = self.diagonal[self.index].wrapping_add(1);
            if self.diagonal[self.index]>=self.order {
                if self.index==1 { self.finished=true; return None; }
                self.diagonal[self.index] = UNSET;
                self.index -= 1;
            } else if is_canonical(&self.diagonal,&self.perms) {
                if self.index==self.order-1 {
                    return Some(self.diagonal.clone());
                }
                self.index += 1;
            }
        }
    }
}
