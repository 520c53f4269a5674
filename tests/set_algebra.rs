use fastbitset::BitVector;
use std::collections::BTreeSet;

fn strided(step: usize) -> BitVector {
    let mut bits = BitVector::new();
    for i in 0..1024 {
        bits.set(step * i + 5);
    }
    bits
}

fn oracle(bits: &BitVector) -> BTreeSet<usize> {
    bits.iter().collect()
}

#[test]
fn test_strided_scenario() {
    let b1 = strided(3);
    let b2 = strided(6);
    let s1: BTreeSet<usize> = (0..1024).map(|i| 3 * i + 5).collect();
    let s2: BTreeSet<usize> = (0..1024).map(|i| 6 * i + 5).collect();

    // 6i + 5 = 3(2i) + 5, so the first 512 elements of b2 are already in b1
    let union = b1.union(&b2);
    assert_eq!(union.cardinality(), 1536);
    let expected: BTreeSet<_> = s1.union(&s2).copied().collect();
    assert_eq!(oracle(&union), expected);
    for i in 0..6 * 1024 + 5 {
        assert_eq!(union.get(i), expected.contains(&i), "bit {i}");
    }

    let mut in_place = b1.clone();
    in_place.union_with(&b2);
    assert_eq!(in_place, union);

    let inter = b1.intersection(&b2);
    let expected: BTreeSet<_> = s1.intersection(&s2).copied().collect();
    assert_eq!(inter.cardinality(), 512);
    assert_eq!(oracle(&inter), expected);

    let diff = b1.difference(&b2);
    let expected: BTreeSet<_> = s1.difference(&s2).copied().collect();
    assert_eq!(diff.cardinality(), 512);
    assert_eq!(oracle(&diff), expected);

    let sym = b1.symmetric_difference(&b2);
    let expected: BTreeSet<_> = s1.symmetric_difference(&s2).copied().collect();
    assert_eq!(sym.cardinality(), 1024);
    assert_eq!(oracle(&sym), expected);

    // Inputs are left untouched by the non-mutating forms
    assert_eq!(oracle(&b1), s1);
    assert_eq!(oracle(&b2), s2);
}

#[test]
fn test_counts_match_materialized_results() {
    let b1 = strided(3);
    let b2 = strided(6);

    assert_eq!(b1.union_count(&b2), b1.union(&b2).cardinality());
    assert_eq!(b1.intersection_count(&b2), b1.intersection(&b2).cardinality());
    assert_eq!(b1.difference_count(&b2), b1.difference(&b2).cardinality());
    assert_eq!(
        b1.symmetric_difference_count(&b2),
        b1.symmetric_difference(&b2).cardinality()
    );
}

#[test]
fn test_union_with_empty() {
    let mut a: BitVector = [1, 2, 3].into_iter().collect();
    let before = a.clone();
    a.union_with(&BitVector::new());
    assert_eq!(a, before);

    let mut empty = BitVector::new();
    empty.union_with(&before);
    assert_eq!(empty, before);
}

#[test]
fn test_intersection_with_empty() {
    let mut a: BitVector = [1, 200].into_iter().collect();
    a.intersection_with(&BitVector::new());
    assert!(a.is_empty());
    assert_eq!(a.cardinality(), 0);
}

#[test]
fn test_mismatched_lengths() {
    let short: BitVector = [1].into_iter().collect();
    let long: BitVector = [1, 5_000].into_iter().collect();

    assert_eq!(short.union(&long).to_vec(), vec![1, 5_000]);
    assert_eq!(long.union(&short).to_vec(), vec![1, 5_000]);
    assert_eq!(short.intersection(&long).to_vec(), vec![1]);
    assert_eq!(long.intersection(&short).to_vec(), vec![1]);
    assert_eq!(long.difference(&short).to_vec(), vec![5_000]);
    assert!(short.difference(&long).is_empty());
    assert_eq!(short.symmetric_difference(&long).to_vec(), vec![5_000]);
}

#[test]
fn test_self_operations() {
    let a: BitVector = [4, 99, 640].into_iter().collect();

    let mut b = a.clone();
    b.union_with(&a);
    assert_eq!(b, a);

    let mut b = a.clone();
    b.intersection_with(&a);
    assert_eq!(b, a);

    let mut b = a.clone();
    b.difference_with(&a);
    assert!(b.is_empty());

    let mut b = a.clone();
    b.symmetric_difference_with(&a);
    assert!(b.is_empty());
}

#[test]
fn test_difference_into() {
    let a: BitVector = [1, 2, 3, 700].into_iter().collect();
    let mut b: BitVector = [2, 3].into_iter().collect();
    a.difference_into(&mut b);
    assert_eq!(b.to_vec(), vec![1, 700]);
    assert_eq!(a.to_vec(), vec![1, 2, 3, 700]);
}

#[test]
fn test_clone_is_independent() {
    let a = strided(3);
    let mut b = a.clone();
    b.set(1);
    b.clear(5);
    assert!(!a.get(1));
    assert!(a.get(5));
    assert_ne!(a, b);
}

#[test]
fn test_mutating_original_leaves_clone_unchanged() {
    let mut a = strided(3);
    let b = a.clone();
    a.set(1);
    a.clear(5);
    a.set(100_000);
    a.union_with(&strided(7));

    assert!(!b.get(1));
    assert!(b.get(5));
    assert!(!b.get(100_000));
    assert_eq!(b, strided(3));
}

#[test]
fn test_clear_twice_matches_clear_once() {
    let mut once = strided(3);
    let mut twice = strided(3);
    once.clear(8);
    twice.clear(8);
    twice.clear(8);
    assert_eq!(once.as_slice(), twice.as_slice());
    assert!(!twice.get(8));
    assert_eq!(twice.cardinality(), 1023);
}

#[test]
fn test_equality_ignores_capacity() {
    let mut a = BitVector::with_capacity(10_000);
    let mut b = BitVector::new();
    assert_eq!(a, b);

    a.set(17);
    b.set(17);
    assert_eq!(a, b);
    assert!(a.equals(&b));

    b.set(18);
    assert_ne!(a, b);
}

#[test]
fn test_intersects_and_subsets() {
    let a: BitVector = [1, 2, 3].into_iter().collect();
    let b: BitVector = [3, 4].into_iter().collect();
    let c: BitVector = [400].into_iter().collect();

    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
    assert!(a.is_disjoint(&c));

    let sub: BitVector = [1, 3].into_iter().collect();
    assert!(sub.is_subset(&a));
    assert!(a.is_superset(&sub));
    assert!(!c.is_subset(&a));
    assert!(BitVector::new().is_subset(&a));
}

#[test]
fn test_operators_match_methods() {
    let a = strided(3);
    let b = strided(6);
    assert_eq!(&a | &b, a.union(&b));
    assert_eq!(&a & &b, a.intersection(&b));
    assert_eq!(&a - &b, a.difference(&b));
    assert_eq!(&a ^ &b, a.symmetric_difference(&b));
}
