//! Protocols
//!
//! A single trait adopted by a shared-reference type, a struct and an enum,
//! plus trait objects that hide everything outside the trait.

use std::cell::RefCell;
use std::rc::Rc;

pub trait ExampleProtocol {
    fn simple_description(&self) -> String;
    fn adjust(&mut self);
}

// ============================================================================
// Reference type
// ============================================================================

#[derive(Debug)]
struct ClassState {
    simple_description: String,
    another_property: i32,
}

/// Reference type: clones share one state, so adjusting any handle is seen
/// through every other handle.
#[derive(Debug, Clone)]
pub struct SimpleClass {
    state: Rc<RefCell<ClassState>>,
}

impl SimpleClass {
    pub fn new() -> Self {
        SimpleClass {
            state: Rc::new(RefCell::new(ClassState {
                simple_description: String::from("A very simple class."),
                another_property: 69105,
            })),
        }
    }

    /// Not part of `ExampleProtocol`.
    pub fn another_property(&self) -> i32 {
        self.state.borrow().another_property
    }

    /// Adjusts through a shared handle; no `&mut` needed.
    pub fn adjust_shared(&self) {
        self.state
            .borrow_mut()
            .simple_description
            .push_str("  Now 100% adjusted.");
    }

    pub fn shares_state_with(&self, other: &SimpleClass) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Default for SimpleClass {
    fn default() -> Self {
        Self::new()
    }
}

impl ExampleProtocol for SimpleClass {
    fn simple_description(&self) -> String {
        self.state.borrow().simple_description.clone()
    }

    fn adjust(&mut self) {
        self.adjust_shared();
    }
}

// ============================================================================
// Value types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleStructure {
    pub simple_description: String,
}

impl SimpleStructure {
    pub fn new() -> Self {
        SimpleStructure {
            simple_description: String::from("A simple structure"),
        }
    }
}

impl Default for SimpleStructure {
    fn default() -> Self {
        Self::new()
    }
}

impl ExampleProtocol for SimpleStructure {
    fn simple_description(&self) -> String {
        self.simple_description.clone()
    }

    fn adjust(&mut self) {
        self.simple_description.push_str(" (adjusted)");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimpleEnumeration {
    #[default]
    Basic,
    Adjusted,
}

impl ExampleProtocol for SimpleEnumeration {
    fn simple_description(&self) -> String {
        match self {
            SimpleEnumeration::Basic => String::from("A simple Enumeration"),
            SimpleEnumeration::Adjusted => String::from("A simple Enumeration [adjusted]"),
        }
    }

    fn adjust(&mut self) {
        *self = SimpleEnumeration::Adjusted;
    }
}

// ============================================================================
// Protocol values
// ============================================================================

/// Returns an adjusted copy, leaving `value` untouched.
///
/// For `SimpleClass` the copy is another handle, so the original changes too.
pub fn adjusted<T>(value: &T) -> T
where
    T: ExampleProtocol + Clone,
{
    let mut copy = value.clone();
    copy.adjust();
    copy
}

pub fn describe_all(values: &[Box<dyn ExampleProtocol>]) -> Vec<String> {
    values.iter().map(|v| v.simple_description()).collect()
}

pub fn adjust_all(values: &mut [Box<dyn ExampleProtocol>]) {
    for value in values.iter_mut() {
        value.adjust();
    }
}
