//! Subset enumeration of an indexed base set.
//!
//! Subsets of n items are walked as sorted index sequences, one cardinality at
//! a time, using the standard successor stepping from Knuth's "The Art of
//! Computer Programming" volume 4A, combinatorial generation.

/// Advance a sorted k-subset of 0..n to its lexicographic successor in place.
/// Return false, leaving the slice untouched, if it was already the last
/// k-subset (that is, n−k..n).
/// # Example
/// ```
/// use cayley::subsets::next_k_subset;
/// let mut sub = vec![0,1,2];
/// assert!(next_k_subset(&mut sub,5));
/// assert_eq!(vec![0,1,3],sub);
/// let mut last = vec![2,3,4];
/// assert_eq!(false,next_k_subset(&mut last,5));
/// ```
pub fn next_k_subset(sub:&mut [usize],n:usize) -> bool {
    let k = sub.len();
    let mut i = k;
    while i>0 && sub[i-1]==n-k+(i-1) { i-=1; }
    if i==0 { return false; }
    let i = i-1;
    let base = sub[i]+1;
    for j in i..k {
        sub[j] = base+(j-i);
    }
    true
}

/// Lazily enumerate every subset of a sequence: cardinality 0..n ascending,
/// and within each cardinality in lexicographic order of element indices.
/// There are 2ⁿ subsets in total.
/// # Example
/// ```
/// use cayley::subsets::Powerset;
/// let subsets : Vec<Vec<u32>> = Powerset::new(&[1,2,3]).collect();
/// assert_eq!(8,subsets.len());
/// assert_eq!(Vec::<u32>::new(),subsets[0]);
/// assert_eq!(vec![1,2],subsets[4]);
/// assert_eq!(vec![1,2,3],subsets[7]);
/// ```
pub struct Powerset<T> {
    items : Vec<T>,
    subset : Vec<usize>,
}

impl <T:Clone> Powerset<T> {
    pub fn new(items:&[T]) -> Powerset<T> {
        Powerset{ items : items.to_vec(), subset : vec![] }
    }
}

impl <T:Clone> Iterator for Powerset<T> {
    type Item = Vec<T>;
    fn next(&mut self) -> Option<Vec<T>> {
        if self.subset.len()>self.items.len() { return None; }
        let result = self.subset.iter().map(|&i|self.items[i].clone()).collect();
        if !next_k_subset(&mut self.subset,self.items.len()) {
            // last subset of this cardinality; restart with the next one.
            self.subset = (0..self.subset.len()+1).collect();
        }
        Some(result)
    }
}

/// The eager form of [Powerset], returning the full list of subsets at once.
pub fn powerset<T:Clone>(items:&[T]) -> Vec<Vec<T>> {
    Powerset::new(items).collect()
}
