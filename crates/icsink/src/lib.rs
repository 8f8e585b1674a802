//! Streaming iCalendar (RFC 5545) document writer.
//!
//! `icsink` renders a typed calendar object tree to RFC 5545 text. Two
//! paths produce identical bytes:
//!
//! - [`serialize`] builds the whole document in memory at once.
//! - [`CalendarWriter`] streams the document to any [`std::io::Write`]
//!   sink one object at a time, keeping peak memory at a single rendered
//!   component no matter how large the document grows.
//!
//! The document header is deterministic: VERSION and PRODID are filled in
//! when missing (on an internal copy, never on the caller's document) and
//! top-level properties are emitted sorted by name. Children are emitted in
//! the order they are written.
//!
//! ```
//! use icsink::{CalendarWriter, Component, ICalendar, Property};
//!
//! let calendar = ICalendar::new("-//Acme//Scheduler//EN");
//! let mut writer = CalendarWriter::new(&calendar, Vec::new()).unwrap();
//!
//! let mut event = Component::event();
//! event.add_property(Property::text("UID", "1@example.com"));
//! event.add_property(Property::text("SUMMARY", "Kickoff"));
//! writer.write_component(&event).unwrap();
//!
//! let bytes = writer.close().unwrap();
//! assert!(bytes.starts_with(b"BEGIN:VCALENDAR\r\n"));
//! ```

pub mod build;
pub mod error;
pub mod model;

pub use build::{
    CalendarWriter, Node, escape_param_value, escape_text, fold_into, fold_line, serialize,
    serialize_component, serialize_property,
};
pub use error::{WriteError, WriteResult};
pub use model::{
    Component, ComponentKind, DEFAULT_PRODID, DEFAULT_VERSION, Date, DateTime, DateTimeForm,
    Duration, ICalendar, Parameter, Property, UtcOffset, Value,
};

#[cfg(test)]
mod tests;
