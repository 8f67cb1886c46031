//! A guided tour of generics, traits and extension traits.
//!
//! Each module holds the snippets of one topic; [`tour`] replays them page by
//! page and records what every snippet evaluates to.

pub mod config;
pub mod error;
pub mod extensions;
pub mod generics;
pub mod logging;
pub mod protocols;
pub mod render;
pub mod tour;

pub use error::{Result, TourError};
pub use extensions::AbsoluteValue;
pub use generics::{any_common_elements, make_array, show_common_elements, OptionalValue};
pub use protocols::{ExampleProtocol, SimpleClass, SimpleEnumeration, SimpleStructure};
