//! Pattern 1: Generic Functions
//! Example: Repeating a Value
//!
//! Run with: cargo run --example p1_make_array

use guided_tour::make_array;

fn main() {
    println!("=== make_array ===");
    // Usage: One function works for any Clone type.
    let knocks = make_array("knock", 4);
    println!("make_array(\"knock\", 4) = {:?}", knocks);

    let zeros = make_array(0u8, 3);
    println!("make_array(0u8, 3) = {:?}", zeros);

    let nested = make_array(vec![1, 2], 2);
    println!("make_array(vec![1, 2], 2) = {:?}", nested);

    let none: Vec<char> = make_array('x', 0);
    println!("make_array('x', 0) = {:?}", none);
}
