//! Pattern 2: Generic Enums
//! Example: Reimplementing Option
//!
//! Run with: cargo run --example p2_optional_value

use guided_tour::OptionalValue;

fn describe(value: &OptionalValue<i32>) -> String {
    match value {
        OptionalValue::None => "nothing yet".to_string(),
        OptionalValue::Some(n) => format!("holds {}", n),
    }
}

fn main() {
    println!("=== OptionalValue<i32> ===");
    let mut possible_integer: OptionalValue<i32> = OptionalValue::None;
    println!("start:      {:?} ({})", possible_integer, describe(&possible_integer));

    possible_integer = OptionalValue::Some(100);
    println!("after set:  {:?} ({})", possible_integer, describe(&possible_integer));

    println!("\n=== Combinators ===");
    let doubled = possible_integer.map(|n| n * 2);
    println!("map(|n| n * 2) = {:?}", doubled);
    println!("unwrap_or(0) on None = {}", OptionalValue::<i32>::None.unwrap_or(0));

    println!("\n=== Conversions ===");
    let from_std: OptionalValue<&str> = Some("hello").into();
    println!("Some(\"hello\").into() = {:?}", from_std);
    let back: Option<&str> = from_std.into();
    println!("back into Option = {:?}", back);
}
