//! iCalendar text production (RFC 5545).
//!
//! This module turns the object model into wire text:
//! - Escape: text and parameter value escaping
//! - Fold: content line folding at 75 octets
//! - Serializer: whole-document rendering with deterministic header order
//! - Stream: incremental writing of one object at a time

mod escape;
mod fold;
mod serializer;
mod stream;

pub use escape::{escape_param_value, escape_text};
pub use fold::{fold_into, fold_line};
pub use serializer::{serialize, serialize_component, serialize_property};
pub use stream::{CalendarWriter, Node};
