//! Pattern 3: Where Clauses
//! Example: Comparing Two Sequences
//!
//! Run with: cargo run --example p3_common_elements

use guided_tour::{any_common_elements, show_common_elements};

fn main() {
    println!("=== any_common_elements ===");
    // Usage: The where clause forces both sequences to yield the same item type.
    println!(
        "[1, 2, 3] vs [3] = {}",
        any_common_elements([1, 2, 3], [3])
    );
    println!(
        "[1, 2, 3] vs [4, 5] = {}",
        any_common_elements([1, 2, 3], [4, 5])
    );

    println!("\n=== show_common_elements ===");
    println!(
        "[1, 2, 3, 4, 5] vs [4, 7, 3] = {:?}",
        show_common_elements([1, 2, 3, 4, 5], [4, 7, 3])
    );
    println!(
        "fruits = {:?}",
        show_common_elements(
            ["apple", "banana", "orange", "peach"],
            ["orange", "pear", "apple"]
        )
    );

    // Different containers are fine as long as the items match.
    let owned = vec![10, 20, 30];
    let borrowed = [30, 40];
    println!(
        "Vec iter vs array iter = {:?}",
        show_common_elements(owned.iter(), borrowed.iter())
    );

    // Does not compile: i32 items vs &str items.
    // any_common_elements([1, 2], ["1", "2"]);
}
