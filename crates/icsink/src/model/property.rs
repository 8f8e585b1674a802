//! Calendar properties (RFC 5545 §3.1, §3.8).

use super::{Parameter, Value};

/// A calendar property: a named value with optional parameters.
///
/// Attached to the document root or to a component. Properties compare and
/// sort by name during document header emission.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// The property value.
    pub value: Value,
}

impl Property {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::Text(value.into()),
        }
    }

    /// Creates a property with an integer value.
    #[must_use]
    pub fn integer(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::Integer(value),
        }
    }

    /// Creates a property with a date-time value.
    #[must_use]
    pub fn datetime(name: impl Into<String>, dt: super::DateTime) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::DateTime(dt),
        }
    }

    /// Creates a property with a date value, tagged `VALUE=DATE`.
    #[must_use]
    pub fn date(name: impl Into<String>, date: super::Date) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: vec![Parameter::value_type("DATE")],
            value: Value::Date(date),
        }
    }

    /// Creates a property with a duration value.
    #[must_use]
    pub fn duration(name: impl Into<String>, dur: super::Duration) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::Duration(dur),
        }
    }

    /// Creates a property with a UTC offset value.
    #[must_use]
    pub fn utc_offset(name: impl Into<String>, offset: super::UtcOffset) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::UtcOffset(offset),
        }
    }

    /// Creates a property carrying pre-rendered value text.
    #[must_use]
    pub fn raw(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::Raw(value.into()),
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        let name_upper = name.to_ascii_uppercase();
        self.params.iter().find(|p| p.name == name_upper)
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: Parameter) {
        self.params.push(param);
    }

    /// Sets a parameter, replacing any existing parameter with the same name.
    pub fn set_param(&mut self, param: Parameter) {
        self.params.retain(|p| p.name != param.name);
        self.params.push(param);
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Returns the value as an integer if it is an integer value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i32> {
        self.value.as_integer()
    }

    /// Returns the value as a date-time if it is a date-time value.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<&super::DateTime> {
        self.value.as_datetime()
    }
}

/// Well-known property names.
pub mod names {
    /// Calendar scale.
    pub const CALSCALE: &str = "CALSCALE";
    /// iTIP method.
    pub const METHOD: &str = "METHOD";
    /// Product identifier (mandatory on the document).
    pub const PRODID: &str = "PRODID";
    /// Specification version (mandatory on the document).
    pub const VERSION: &str = "VERSION";

    /// Unique identifier.
    pub const UID: &str = "UID";
    /// One-line summary.
    pub const SUMMARY: &str = "SUMMARY";
    /// Full description.
    pub const DESCRIPTION: &str = "DESCRIPTION";
    /// Venue or place.
    pub const LOCATION: &str = "LOCATION";
    /// Status of the component.
    pub const STATUS: &str = "STATUS";

    /// Start of the component.
    pub const DTSTART: &str = "DTSTART";
    /// End of the component.
    pub const DTEND: &str = "DTEND";
    /// Creation stamp.
    pub const DTSTAMP: &str = "DTSTAMP";
    /// Nominal duration.
    pub const DURATION: &str = "DURATION";

    /// Timezone identifier.
    pub const TZID: &str = "TZID";
    /// Timezone short name.
    pub const TZNAME: &str = "TZNAME";
    /// Offset in effect before a transition.
    pub const TZOFFSETFROM: &str = "TZOFFSETFROM";
    /// Offset in effect after a transition.
    pub const TZOFFSETTO: &str = "TZOFFSETTO";

    /// Alarm action.
    pub const ACTION: &str = "ACTION";
    /// Alarm trigger.
    pub const TRIGGER: &str = "TRIGGER";

    /// Widely used calendar display name extension.
    pub const X_WR_CALNAME: &str = "X-WR-CALNAME";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_property() {
        let prop = Property::text("summary", "Meeting");
        assert_eq!(prop.name, "SUMMARY");
        assert_eq!(prop.as_text(), Some("Meeting"));
    }

    #[test]
    fn integer_property() {
        let prop = Property::integer("SEQUENCE", 5);
        assert_eq!(prop.as_integer(), Some(5));
    }

    #[test]
    fn set_param_replaces() {
        let mut prop = Property::text("DTSTART", "20260101T000000");
        prop.add_param(Parameter::tzid("Europe/Paris"));
        prop.set_param(Parameter::tzid("America/New_York"));
        assert_eq!(prop.params.len(), 1);
        assert_eq!(prop.get_param_value("TZID"), Some("America/New_York"));
    }
}
