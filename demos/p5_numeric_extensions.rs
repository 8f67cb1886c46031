//! Pattern 5: Extension Traits
//! Example: Adopting a Trait on i32 and f64
//!
//! Run with: cargo run --example p5_numeric_extensions

use guided_tour::{AbsoluteValue, ExampleProtocol};

fn main() {
    println!("=== i32 ===");
    println!("{}", 7_i32.simple_description());
    let mut seven: i32 = 7;
    println!("{}", seven.simple_description());
    seven.adjust();
    println!("{}", seven.simple_description());

    println!("\n=== f64 ===");
    let mut double: f64 = -12.34;
    println!("{}", double.simple_description());
    println!("absolute_value = {}", double.absolute_value());
    double.adjust();
    println!("{}", double.absolute_value().simple_description());

    println!("\n=== Idempotence ===");
    // Rounding twice changes nothing; adding 42 twice does.
    let mut x = 2.5_f64;
    x.adjust();
    let first = x;
    x.adjust();
    println!("2.5 -> {} -> {}", first, x);

    let mut n = 0_i32;
    n.adjust();
    let first = n;
    n.adjust();
    println!("0 -> {} -> {}", first, n);
}
