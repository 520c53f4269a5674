//! Basic usage examples for `BitVector`

use fastbitset::{BitVector, Error};

fn main() -> Result<(), Error> {
    println!("=== BitVector Basic Usage ===\n");

    let mut bits = BitVector::new();
    println!("Created new bit vector");
    println!("Initial capacity: {} bits\n", bits.capacity());

    bits.set(5);
    bits.set(10);
    bits.set(15);
    bits.set(100);

    println!("Set bits at positions: 5, 10, 15, 100");
    println!("Number of set bits: {}", bits.cardinality());
    println!("Capacity after growth: {} bits\n", bits.capacity());

    println!("Checking individual bits:");
    for i in [0, 5, 10, 15, 20, 100, 150] {
        println!("  Bit {i}: {}", if bits.get(i) { "set" } else { "unset" });
    }

    println!("\nWalking set bits with next_set_bit:");
    print!("  ");
    let mut next = bits.next_set_bit(0);
    while let Some(i) = next {
        print!("{i} ");
        next = bits.next_set_bit(i + 1);
    }
    println!("\n");

    println!("=== Set Operations ===\n");
    let mut b1 = BitVector::new();
    let mut b2 = BitVector::new();
    for i in 0..1024 {
        b1.set(3 * i + 5);
        b2.set(6 * i + 5);
    }
    println!("b1 = {{3i + 5}}, b2 = {{6i + 5}} for i in 0..1024");
    println!("  |b1 ∪ b2| = {}", b1.union(&b2).cardinality());
    println!("  |b1 ∩ b2| = {}", b1.intersection_count(&b2));
    println!("  |b1 - b2| = {}", b1.difference_count(&b2));
    println!("  |b1 Δ b2| = {}", b1.symmetric_difference_count(&b2));

    let mut copy = b1.clone();
    copy.union_with(&b2);
    println!("  in-place union equals new union: {}\n", copy == b1.union(&b2));

    println!("=== Checked Access ===\n");
    bits.try_set(7i64)?;
    println!("try_set(7) -> ok, bits = {bits}");
    match bits.try_set(-1i64) {
        Ok(()) => println!("try_set(-1) unexpectedly succeeded"),
        Err(err) => println!("try_set(-1) -> {err}"),
    }

    Ok(())
}
