//! Pattern 4: Traits
//! Example: Struct, Enum and Shared-Reference Types Adopting One Trait
//!
//! Run with: cargo run --example p4_protocol_adoption

use guided_tour::protocols::adjusted;
use guided_tour::{ExampleProtocol, SimpleClass, SimpleEnumeration, SimpleStructure};

fn main() {
    println!("=== SimpleClass ===");
    let mut a = SimpleClass::new();
    a.adjust();
    println!("a.simple_description() = {:?}", a.simple_description());

    // Usage: Clones share state, so the alias sees the second adjustment.
    let alias = a.clone();
    a.adjust_shared();
    println!("alias after a.adjust_shared() = {:?}", alias.simple_description());

    println!("\n=== SimpleStructure ===");
    let mut b = SimpleStructure::new();
    b.adjust();
    println!("b.simple_description() = {:?}", b.simple_description());

    // Usage: Copies of a value type are independent.
    let copy = adjusted(&b);
    println!("b    = {:?}", b.simple_description());
    println!("copy = {:?}", copy.simple_description());

    println!("\n=== SimpleEnumeration ===");
    let mut c = SimpleEnumeration::Basic;
    println!("before: {:?}", c.simple_description());
    c.adjust();
    println!("after:  {:?}", c.simple_description());
    c.adjust();
    println!("again:  {:?}", c.simple_description());
}
