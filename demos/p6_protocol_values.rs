//! Pattern 6: Trait Objects
//! Example: Values Seen Only Through Their Trait
//!
//! Run with: cargo run --example p6_protocol_values

use guided_tour::protocols::{adjust_all, describe_all};
use guided_tour::{ExampleProtocol, SimpleClass, SimpleEnumeration, SimpleStructure};

fn main() {
    let mut a = SimpleClass::new();
    a.adjust();
    println!("a.another_property() = {}", a.another_property());

    println!("=== Single Trait Object ===");
    let protocol_value: &dyn ExampleProtocol = &a;
    println!("{}", protocol_value.simple_description());
    // Uncomment to see the error: no method named `another_property` on `&dyn ExampleProtocol`.
    // println!("{}", protocol_value.another_property());

    println!("\n=== Heterogeneous Collection ===");
    let mut values: Vec<Box<dyn ExampleProtocol>> = vec![
        Box::new(SimpleClass::new()),
        Box::new(SimpleStructure::new()),
        Box::new(SimpleEnumeration::Basic),
        Box::new(7_i32),
        Box::new(-12.34_f64),
    ];

    for description in describe_all(&values) {
        println!("before: {}", description);
    }
    adjust_all(&mut values);
    for description in describe_all(&values) {
        println!("after:  {}", description);
    }
}
