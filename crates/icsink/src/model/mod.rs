//! Calendar object model (RFC 5545).
//!
//! Core data structures for representing iCalendar content, designed for:
//! - Deterministic serialization: the document header emits in a canonical
//!   order regardless of property insertion order
//! - Type safety: a closed set of component kinds and value types stands in
//!   for the open-ended runtime type dispatch of reflective serializers

mod component;
mod datetime;
mod duration;
mod parameter;
pub mod property;
mod value;

pub use component::{Component, ComponentKind, DEFAULT_PRODID, DEFAULT_VERSION, ICalendar};
pub use datetime::{Date, DateTime, DateTimeForm, UtcOffset};
pub use duration::Duration;
pub use parameter::Parameter;
pub use property::Property;
pub use value::Value;
