//! The second stage of the search: completing a diagonal to full Cayley
//! tables.
//!
//! The table is a flat row-major buffer. Row 0, column 0 and the diagonal are
//! fixed before the search starts; the remaining cells are raised in place in
//! lexicographic position order, and a composite validity test prunes every
//! partial assignment that can no longer extend to a canonical monoid.

use crate::{Element, UNSET};
use crate::diagonal::{restrictions, stable_permutations, Restriction};
use crate::permutation::Permutation;

/// The table a diagonal determines before any searching: row 0 and column 0
/// carry the identity pattern, the diagonal cells carry the diagonal, and
/// every free cell holds 0 - the first candidate assignment, which the
/// initial validity check covers.
pub fn initial_table(diagonal:&[Element]) -> Vec<Element> {
    let order = diagonal.len();
    let mut table = vec![0;order*order];
    for k in 0..order*order {
        table[k] = if k<order { k }
            else if k%order==0 { k/order }
            else if k%order==k/order { diagonal[k/order] }
            else { 0 };
    }
    table
}

/// Check the structural row/column restrictions of a partial table: no row or
/// column of an idempotent element contains the identity, and the set cells
/// of an invertible element's row and column are pairwise distinct. UNSET
/// cells never violate.
pub fn restrictions_satisfied(table:&[Element],order:usize,restrictions:&[Restriction]) -> bool {
    for i in 1..order {
        let r = restrictions[i];
        if r.idempotent {
            for j in 1..order {
                if table[order*i+j]==0 || table[order*j+i]==0 { return false; }
            }
        }
        if r.invertible {
            let mut row_seen = 0u64;
            let mut col_seen = 0u64;
            for j in 0..order {
                let rv = table[order*i+j];
                if rv!=UNSET {
                    if row_seen&(1<<rv)!=0 { return false; }
                    row_seen |= 1<<rv;
                }
                let cv = table[order*j+i];
                if cv!=UNSET {
                    if col_seen&(1<<cv)!=0 { return false; }
                    col_seen |= 1<<cv;
                }
            }
        }
    }
    true
}

/// Scan all triples of non-identity elements for an associativity violation,
/// skipping any triple whose products are not yet decidable. An unset x2·x3
/// abandons the rest of the x3 loop for that x2; the completion search makes
/// up for the skipped triples by re-testing every fully assigned table.
pub fn is_associative(table:&[Element],order:usize) -> bool {
    for x1 in 1..order {
        for x2 in 1..order {
            let x1x2 = table[order*x1+x2];
            if x1x2==UNSET { continue; }
            for x3 in 1..order {
                let x2x3 = table[order*x2+x3];
                if x2x3==UNSET { break; }
                let x1x2_x3 = table[order*x1x2+x3];
                if x1x2_x3==UNSET { break; }
                let x1_x2x3 = table[order*x1+x2x3];
                if x1_x2x3==UNSET { break; }
                if x1x2_x3!=x1_x2x3 { return false; }
            }
        }
    }
    true
}

/// Test whether the partial table, read row-major from cell n+1 onward, is
/// still lexicographically minimal under every permutation in the set acting
/// both by relabelling (isomorphism) and by relabelling the transpose
/// (anti-isomorphism).
///
/// For each permutation two flags record whether the table has already proved
/// itself strictly smaller than the respective image; a cell where the table
/// is larger while its flag is down can never extend to the orbit minimum.
/// The scan stops at the first cell where either side is UNSET.
pub fn is_canonical(table:&[Element],order:usize,perms:&[Permutation]) -> bool {
    for p in perms {
        let mut smaller_iso = false;
        let mut smaller_aiso = false;
        for i in order+1..order*order {
            let ix1 = p.inverse_of(i/order);
            let ix2 = p.inverse_of(i%order);
            let ti = table[i];
            let tii = table[order*ix1+ix2];
            let taii = table[order*ix2+ix1];
            if ti==UNSET || tii==UNSET || taii==UNSET { break; }
            let ptii = p[tii];
            let ptaii = p[taii];
            if ti<ptii { smaller_iso=true; }
            if ti<ptaii { smaller_aiso=true; }
            if smaller_iso && smaller_aiso { break; }
            if (!smaller_iso && ti>ptii) || (!smaller_aiso && ti>ptaii) { return false; }
        }
    }
    true
}

/// The composite validity test of the completion search, cheapest first.
pub fn is_valid(table:&[Element],order:usize,restrictions:&[Restriction],perms:&[Permutation]) -> bool {
    restrictions_satisfied(table,order,restrictions)
        && is_associative(table,order)
        && is_canonical(table,order,perms)
}

/// Lazily enumerate every completion of a diagonal to a full Cayley table
/// that is associative and canonical under the supplied permutation set.
///
/// The free positions are the cells off row 0, column 0 and the diagonal.
/// The search walks a raw cell index from n²−2 (the last free position when
/// n ≥ 3), skipping fixed cells in both directions, and emits a snapshot each
/// time the last free position holds a value keeping the whole table valid.
/// # Example
/// ```
/// use cayley::permutation::Permutation;
/// use cayley::table::Completions;
/// let id = vec![Permutation::identity(2)];
/// let tables : Vec<Vec<usize>> = Completions::new(&[0,1],&id).collect();
/// assert_eq!(vec![vec![0,1,1,1]],tables);
/// let tables : Vec<Vec<usize>> = Completions::new(&[0,0],&id).collect();
/// assert_eq!(vec![vec![0,1,1,0]],tables);
/// ```
pub struct Completions {
    order : usize,
    perms : Vec<Permutation>,
    restrictions : Vec<Restriction>,
    table : Vec<Element>,
    index : usize,
    started : bool,
    finished : bool,
}

impl Completions {
    /// Set up the completion search for a complete, canonical diagonal. Only
    /// the diagonal-stable subset of the permutation set can relate two
    /// completions, so only that subset is retained.
    pub fn new(diagonal:&[Element],perms:&[Permutation]) -> Completions {
        let order = diagonal.len();
        assert!(order>=1);
        assert!(order<=64); // row/column distinctness uses a u64 presence mask.
        Completions{
            order,
            perms : stable_permutations(diagonal,perms),
            restrictions : restrictions(diagonal),
            table : initial_table(diagonal),
            index : if order==1 { 0 } else { order*order-2 },
            started : false,
            finished : false,
        }
    }

    fn fixed(&self,index:usize) -> bool {
        index%self.order==0 || index%self.order==index/self.order
    }

    fn valid(&self) -> bool {
        is_valid(&self.table,self.order,&self.restrictions,&self.perms)
    }
}

impl Iterator for Completions {
    type Item = Vec<Element>;
    fn next(&mut self) -> Option<Vec<Element>> {
        if self.finished { return None; }
        if !self.started {
            self.started = true;
            if self.valid() { return Some(self.table.clone()); }
        }
        if self.order==1 { self.finished=true; return None; }
        let last = self.order*self.order-2;
        loop {
            // UNSET is the fresh marker left by backtracking; wrapping lifts it to 0.
            self.table[self.index] = self.table[self.index].wrapping_add(1);
            if self.table[self.index]>=self.order {
                if self.index<=self.order+2 { self.finished=true; return None; }
                self.table[self.index] = UNSET;
                self.index -= 1;
                while self.fixed(self.index) { self.index -= 1; }
            } else if self.valid() {
                if self.index==last {
                    return Some(self.table.clone());
                }
                self.index += 1;
                while self.fixed(self.index) { self.index += 1; }
            }
        }
    }
}
