use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::{Div, Index, Mul};
use num::{FromPrimitive, One, Zero};

/// A permutation π = (π(0),π(1),…,π(n−1)) of the integers 0..n.
///
/// The inverse is computed once at construction, so that both π(i) and π⁻¹(i)
/// are O(1) lookups. The canonicity tests apply π⁻¹ to every cell of a table,
/// which makes the inverse the hot direction.
#[derive(Clone,Debug,Eq, PartialEq)]
pub struct Permutation {
    sequence : Vec<usize>,
    inverse : Vec<usize>,
}

impl Index<usize> for Permutation {
    type Output = usize;
    fn index(&self, index: usize) -> &Self::Output { &self.sequence[index] }
}

impl Permutation {
    /// Make a permutation from the sequence of images, checking that it is a
    /// bijection on 0..n.
    /// # Example
    /// ```
    /// use cayley::permutation::Permutation;
    /// assert!(Permutation::new(vec![3,4,1,0,2]).is_ok());
    /// assert!(Permutation::new(vec![3,0,2,4,0]).is_err()); // has two 0s.
    /// ```
    pub fn new(sequence:Vec<usize>) -> Result<Permutation,PermutationError> {
        let n = sequence.len();
        let mut inverse = vec![usize::MAX;n];
        for (i,&e) in sequence.iter().enumerate() {
            if e>=n || inverse[e]!=usize::MAX { return Err(PermutationError::NotPermutation); }
            inverse[e]=i;
        }
        Ok(Permutation{sequence,inverse})
    }

    /// The identity permutation on n elements.
    pub fn identity(n:usize) -> Permutation {
        Permutation{ sequence : (0..n).collect(), inverse : (0..n).collect() }
    }

    /// The number of elements being permuted.
    pub fn n(&self) -> usize { self.sequence.len() }

    /// π⁻¹(image), the position that maps to the given image.
    /// # Example
    /// ```
    /// use cayley::permutation::Permutation;
    /// let x = Permutation::new(vec![3,4,1,0,2]).unwrap();
    /// assert_eq!(4,x[1]);
    /// assert_eq!(4,x.inverse_of(2));
    /// ```
    pub fn inverse_of(&self,image:usize) -> usize { self.inverse[image] }

    /// Apply one permutation to the other.
    /// The composition of two permutations π and σ is π·σ = ( σ(π(0)),…,σ(π(n−1)) )
    /// # Example
    /// ```
    /// use cayley::permutation::Permutation;
    /// let x = Permutation::new(vec![3,4,1,0,2]).unwrap();
    /// let y = Permutation::new(vec![3,0,2,4,1]).unwrap();
    /// let composed : Vec<usize> = (0..5).map(|i|x.compose(&y)[i]).collect();
    /// assert_eq!(vec![4,1,0,3,2],composed);
    /// ```
    pub fn compose(&self,other:&Permutation) -> Permutation {
        Permutation::new(self.sequence.iter().map(|&i|other[i]).collect()).expect("Composing two permutations should produce a permutation")
    }
}

#[derive(Clone,Debug)]
pub enum PermutationError {
    NotPermutation,
}

impl Error for PermutationError { }

impl Display for PermutationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PermutationError::NotPermutation => write!(f,"Not a permutation"),
        }
    }
}

/// Advance a sequence of distinct integers to its lexicographic successor in place.
/// Return false, leaving the slice untouched, if it was already the last permutation.
/// # Example
/// ```
/// use cayley::permutation::next_permutation;
/// let mut p = vec![0,1,2];
/// assert!(next_permutation(&mut p));
/// assert_eq!(vec![0,2,1],p);
/// let mut last = vec![2,1,0];
/// assert_eq!(false,next_permutation(&mut last));
/// ```
pub fn next_permutation(perm:&mut [usize]) -> bool {
    let n = perm.len();
    if n<2 { return false; }
    let mut i = n-1;
    while i>0 && perm[i-1]>=perm[i] { i-=1; }
    if i==0 { return false; }
    let pivot = i-1;
    let mut j = n-1;
    while perm[j]<perm[pivot] { j-=1; }
    perm.swap(pivot,j);
    perm[pivot+1..].reverse();
    true
}

/// Lazily enumerate every permutation of a sequence, in lexicographic order of
/// index sequences starting from the identity arrangement.
/// # Example
/// ```
/// use cayley::permutation::Permutations;
/// let perms : Vec<Vec<char>> = Permutations::new(&['a','b','c']).collect();
/// assert_eq!(6,perms.len());
/// assert_eq!(vec!['a','b','c'],perms[0]);
/// assert_eq!(vec!['c','b','a'],perms[5]);
/// ```
pub struct Permutations<T> {
    items : Vec<T>,
    indices : Vec<usize>,
    exhausted : bool,
}

impl <T:Clone> Permutations<T> {
    pub fn new(items:&[T]) -> Permutations<T> {
        Permutations{ items : items.to_vec(), indices : (0..items.len()).collect(), exhausted : false }
    }
}

impl <T:Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;
    fn next(&mut self) -> Option<Vec<T>> {
        if self.exhausted { return None; }
        let result = self.indices.iter().map(|&i|self.items[i].clone()).collect();
        if !next_permutation(&mut self.indices) { self.exhausted=true; }
        Some(result)
    }
}

/// All permutations of 0..order that fix 0, in lexicographic order starting
/// from the identity. This is the symmetry group under which tables of
/// monoids with identity 0 are canonicalized - relabelling may move every
/// element except the identity.
/// # Example
/// ```
/// use cayley::permutation::symmetric_group_fixing_identity;
/// let s = symmetric_group_fixing_identity(3);
/// assert_eq!(2,s.len());
/// assert_eq!(0,s[1][0]);
/// assert_eq!(1,s[1][2]);
/// ```
pub fn symmetric_group_fixing_identity(order:usize) -> Vec<Permutation> {
    assert!(order>=1);
    let mut result = Vec::with_capacity(factorial::<usize>(order-1));
    let mut tail : Vec<usize> = (1..order).collect();
    loop {
        let mut sequence = Vec::with_capacity(order);
        sequence.push(0);
        sequence.extend_from_slice(&tail);
        result.push(Permutation::new(sequence).expect("Rearranging 1..n after a fixed 0 should produce a permutation"));
        if !next_permutation(&mut tail) { break; }
    }
    result
}

/// n! as an arbitrary numeric type.
/// # Example
/// ```
/// use cayley::permutation::factorial;
/// assert_eq!(120u64,factorial(5));
/// assert_eq!(2432902008176640000u128,factorial(20));
/// ```
pub fn factorial<T:One+FromPrimitive+Mul<Output=T>>(n:usize) -> T {
    let mut res = T::one();
    for i in 2..=n {
        res = res*T::from_usize(i).expect("Should be able to convert a factorial term into the numeric type");
    }
    res
}

/// The binomial coefficient n choose r as an arbitrary numeric type.
/// Every intermediate value is itself a binomial coefficient, so the stepwise
/// division is exact.
/// # Example
/// ```
/// use cayley::permutation::n_choose_r;
/// assert_eq!(10u64,n_choose_r(5,2));
/// assert_eq!(0u64,n_choose_r(3,7));
/// ```
pub fn n_choose_r<T:Zero+One+FromPrimitive+Mul<Output=T>+Div<Output=T>>(n:usize,r:usize) -> T {
    if r>n { return T::zero(); }
    let r = r.min(n-r);
    let mut res = T::one();
    for i in 0..r {
        res = res*T::from_usize(n-i).expect("Should be able to convert a binomial term into the numeric type");
        res = res/T::from_usize(i+1).expect("Should be able to convert a binomial term into the numeric type");
    }
    res
}
