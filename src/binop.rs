//! Predicates on a fully populated binary operation table.

/// A binary operation on a finite base set, given as the list of base
/// elements and the flat row-major table of result indices: the product of
/// elements i and j is the element with index `table[n*i + j]`.
///
/// The table must be complete; partially assigned tables live inside the
/// enumerators, not here.
pub struct BinaryOperation<T> {
    elements : Vec<T>,
    table : Vec<usize>,
}

impl <T> BinaryOperation<T> {
    /// Couple a base-element list with its table. The table must be n² long
    /// with every entry a valid element index.
    pub fn new(elements:Vec<T>,table:Vec<usize>) -> BinaryOperation<T> {
        let n = elements.len();
        assert_eq!(n*n,table.len());
        assert!(table.iter().all(|&e|e<n));
        BinaryOperation{elements,table}
    }

    /// The number of base elements.
    pub fn order(&self) -> usize { self.elements.len() }

    /// The index of the product of the elements with indices i and j.
    pub fn apply(&self,i:usize,j:usize) -> usize { self.table[self.order()*i+j] }

    /// The base elements.
    pub fn elements(&self) -> &[T] { &self.elements }

    /// The first triple (a,b,c) of base elements, in lexicographic order of
    /// index triples, with (a·b)·c ≠ a·(b·c). None if the operation is
    /// associative.
    pub fn non_associative_triple(&self) -> Option<(&T,&T,&T)> {
        let n = self.order();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let ij = self.table[n*i+j];
                    let jk = self.table[n*j+k];
                    if self.table[n*ij+k]!=self.table[n*i+jk] {
                        return Some((&self.elements[i],&self.elements[j],&self.elements[k]));
                    }
                }
            }
        }
        None
    }

    /// True iff the operation is associative.
    pub fn is_associative(&self) -> bool { self.non_associative_triple().is_none() }

    /// True iff the table is symmetric.
    /// # Example
    /// ```
    /// use cayley::binop::BinaryOperation;
    /// let op = BinaryOperation::new(vec!['e','a'],vec![0,1,1,0]);
    /// assert!(op.is_commutative());
    /// ```
    pub fn is_commutative(&self) -> bool {
        let n = self.order();
        for i in 0..n {
            for j in 0..n {
                if self.table[n*i+j]!=self.table[n*j+i] { return false; }
            }
        }
        true
    }
}
