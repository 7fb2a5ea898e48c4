//! Predicates on complete operation tables, and the identity position check.

use cayley::binop::BinaryOperation;
use cayley::enforce_identity_position;

#[test]
fn commutativity() {
    assert!(BinaryOperation::new(vec!['e','a'],vec![0,1,1,0]).is_commutative());
    // x·y = x away from the identity is as non-commutative as it gets.
    assert_eq!(false,BinaryOperation::new(vec!['e','a','b'],vec![0,1,2,1,1,1,2,2,2]).is_commutative());
}

#[test]
fn first_non_associative_triple() {
    let op = BinaryOperation::new(vec!['e','a','b'],vec![0,1,2,1,1,2,2,2,0]);
    assert_eq!(Some((&'a',&'b',&'b')),op.non_associative_triple());
    assert_eq!(false,op.is_associative());
    assert!(BinaryOperation::new(vec!['e','a'],vec![0,1,1,0]).is_associative());
}

#[test]
fn table_lookup() {
    let op = BinaryOperation::new(vec!['e','a','b'],vec![0,1,2,1,1,2,2,2,0]);
    assert_eq!(3,op.order());
    assert_eq!(0,op.apply(2,2));
    assert_eq!(2,op.apply(1,2));
    assert_eq!(&'b',&op.elements()[2]);
}

#[test]
fn identity_position() {
    assert!(enforce_identity_position(&[0,1,1,1],2).is_ok());
    let err = enforce_identity_position(&[0,1,0,1],2).unwrap_err();
    assert_eq!("Neutral element isn't in first row.",err.to_string());
}
