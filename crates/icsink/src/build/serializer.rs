//! Whole-document and per-node rendering.
//!
//! Rendering is deterministic: the document header emits its properties
//! sorted by name, so two documents with the same property set serialize
//! identically regardless of insertion order. Component bodies keep
//! appearance order.

use crate::model::property::names;
use crate::model::{Component, DEFAULT_PRODID, DEFAULT_VERSION, ICalendar, Property, Value};

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_into;

/// Serializes a complete calendar document.
///
/// Output is byte-identical to streaming the same document through
/// [`CalendarWriter::write_all`](super::CalendarWriter::write_all) followed
/// by `close`.
#[must_use]
#[tracing::instrument(skip(calendar), fields(children = calendar.root.children.len()))]
pub fn serialize(calendar: &ICalendar) -> String {
    let mut out = String::new();
    push_delimiter(&mut out, "BEGIN", &calendar.root.name);
    for property in header_properties(calendar) {
        push_property(&mut out, &property);
    }
    for child in &calendar.root.children {
        push_component(&mut out, child);
    }
    push_delimiter(&mut out, "END", &calendar.root.name);
    out
}

/// Renders a single component subtree.
///
/// Returns an empty string when the component's kind has no serializer.
#[must_use]
pub fn serialize_component(component: &Component) -> String {
    let mut out = String::new();
    push_component(&mut out, component);
    out
}

/// Renders a single property as one folded, CRLF-terminated content line.
#[must_use]
pub fn serialize_property(property: &Property) -> String {
    let mut out = String::new();
    push_property(&mut out, property);
    out
}

/// Copies the document's top-level properties, injects the mandatory
/// VERSION and PRODID when missing or blank, and sorts by name.
///
/// Operates on a copy: serialization never mutates the caller's document.
/// The sort is stable, so duplicate names keep their insertion order.
pub(crate) fn header_properties(calendar: &ICalendar) -> Vec<Property> {
    let mut properties = calendar.root.properties.clone();
    if is_blank(&properties, names::VERSION) {
        properties.retain(|p| p.name != names::VERSION);
        properties.push(Property::text(names::VERSION, DEFAULT_VERSION));
    }
    if is_blank(&properties, names::PRODID) {
        properties.retain(|p| p.name != names::PRODID);
        properties.push(Property::text(names::PRODID, DEFAULT_PRODID));
    }
    properties.sort_by(|a, b| a.name.cmp(&b.name));
    properties
}

/// Renders a folded `BEGIN:`/`END:` delimiter line with the name uppercased.
pub(crate) fn delimiter_line(tag: &str, name: &str) -> String {
    let mut line = String::with_capacity(tag.len() + name.len() + 1);
    line.push_str(tag);
    line.push(':');
    line.push_str(&name.to_ascii_uppercase());

    let mut out = String::new();
    fold_into(&line, &mut out);
    out.push_str("\r\n");
    out
}

/// Returns whether no property of this name carries a non-empty value.
fn is_blank(properties: &[Property], name: &str) -> bool {
    !properties
        .iter()
        .any(|p| p.name == name && !render_value(&p.value).is_empty())
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Text(text) => escape_text(text),
        Value::Integer(n) => n.to_string(),
        Value::Float(x) => x.to_string(),
        Value::Boolean(true) => String::from("TRUE"),
        Value::Boolean(false) => String::from("FALSE"),
        Value::Date(date) => date.to_string(),
        Value::DateTime(dt) => dt.to_string(),
        Value::Duration(dur) => dur.to_string(),
        Value::UtcOffset(offset) => offset.to_string(),
        Value::Raw(raw) => raw.clone(),
    }
}

fn push_property(out: &mut String, property: &Property) {
    let mut line = String::with_capacity(64);
    line.push_str(&property.name);
    for param in &property.params {
        line.push(';');
        line.push_str(&param.name);
        line.push('=');
        for (i, value) in param.values.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            line.push_str(&escape_param_value(value));
        }
    }
    line.push(':');
    line.push_str(&render_value(&property.value));

    fold_into(&line, out);
    out.push_str("\r\n");
}

fn push_component(out: &mut String, component: &Component) {
    let Some(kind) = component.kind else {
        tracing::trace!(name = %component.name, "no serializer for component, skipping");
        return;
    };
    out.push_str(&delimiter_line("BEGIN", kind.as_str()));
    for property in &component.properties {
        push_property(out, property);
    }
    for child in &component.children {
        push_component(out, child);
    }
    out.push_str(&delimiter_line("END", kind.as_str()));
}

fn push_delimiter(out: &mut String, tag: &str, name: &str) {
    out.push_str(&delimiter_line(tag, name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, ICalendar, Parameter, Property};

    #[test]
    fn property_line_with_params() {
        let mut prop = Property::text("DTSTART", "20260123T120000");
        prop.add_param(Parameter::tzid("America/New_York"));
        assert_eq!(
            serialize_property(&prop),
            "DTSTART;TZID=America/New_York:20260123T120000\r\n"
        );
    }

    #[test]
    fn property_text_is_escaped() {
        let prop = Property::text("SUMMARY", "Lunch; bring snacks, please");
        assert_eq!(
            serialize_property(&prop),
            "SUMMARY:Lunch\\; bring snacks\\, please\r\n"
        );
    }

    #[test]
    fn raw_value_not_escaped() {
        let prop = Property::raw("RRULE", "FREQ=WEEKLY;BYDAY=MO");
        assert_eq!(serialize_property(&prop), "RRULE:FREQ=WEEKLY;BYDAY=MO\r\n");
    }

    #[test]
    fn component_renders_delimited() {
        let mut event = Component::event();
        event.add_property(Property::text("UID", "uid-1"));
        assert_eq!(
            serialize_component(&event),
            "BEGIN:VEVENT\r\nUID:uid-1\r\nEND:VEVENT\r\n"
        );
    }

    #[test]
    fn unknown_kind_renders_nothing() {
        let component = Component::named("X-CUSTOM");
        assert_eq!(serialize_component(&component), "");
    }

    #[test]
    fn unknown_child_skipped_inside_known_parent() {
        let mut event = Component::event();
        event.add_child(Component::named("X-NESTED"));
        event.add_child(Component::alarm());
        let text = serialize_component(&event);
        assert!(!text.contains("X-NESTED"));
        assert!(text.contains("BEGIN:VALARM\r\n"));
    }

    #[test]
    fn header_sorted_and_normalized() {
        let mut cal = ICalendar {
            root: Component::calendar(),
        };
        cal.add_property(Property::text("X-WR-CALNAME", "Team"));
        let header = header_properties(&cal);
        let order: Vec<&str> = header.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(order, vec!["PRODID", "VERSION", "X-WR-CALNAME"]);
        // The caller's document is untouched.
        assert_eq!(cal.root.properties.len(), 1);
    }

    #[test]
    fn blank_version_replaced() {
        let mut cal = ICalendar {
            root: Component::calendar(),
        };
        cal.add_property(Property::text("VERSION", ""));
        let header = header_properties(&cal);
        let version = header.iter().find(|p| p.name == "VERSION").unwrap();
        assert_eq!(version.as_text(), Some("2.0"));
    }

    #[test]
    fn serialize_document_shape() {
        let mut cal = ICalendar::new("-//Test//Test//EN");
        cal.add_event(Component::event());
        let text = serialize(&cal);
        assert!(text.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(text.ends_with("END:VCALENDAR\r\n"));
        assert!(text.contains("BEGIN:VEVENT\r\n"));
    }
}
