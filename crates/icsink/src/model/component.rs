//! Calendar components and the document root (RFC 5545 §3.4-3.6).

use super::Property;
use super::property::names;

/// Default VERSION injected when a document omits it (RFC 5545 §3.7.4).
pub const DEFAULT_VERSION: &str = "2.0";

/// Default PRODID injected when a document omits it (RFC 5545 §3.7.3).
pub const DEFAULT_PRODID: &str = "-//Icsink//NONSGML Icsink 0.1//EN";

/// The closed set of component kinds the serializer can render.
///
/// A component whose name falls outside this set has no serializer and is
/// skipped during emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR document root.
    Calendar,
    /// VEVENT.
    Event,
    /// VTODO.
    Todo,
    /// VJOURNAL.
    Journal,
    /// VFREEBUSY.
    FreeBusy,
    /// VTIMEZONE.
    Timezone,
    /// VALARM, nested within VEVENT/VTODO.
    Alarm,
    /// STANDARD sub-component of VTIMEZONE.
    Standard,
    /// DAYLIGHT sub-component of VTIMEZONE.
    Daylight,
}

impl ComponentKind {
    /// Returns the canonical component name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
            Self::FreeBusy => "VFREEBUSY",
            Self::Timezone => "VTIMEZONE",
            Self::Alarm => "VALARM",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
        }
    }

    /// Resolves a kind from a component name (case-insensitive).
    ///
    /// Unrecognized names, including X-components, resolve to `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "VCALENDAR" => Some(Self::Calendar),
            "VEVENT" => Some(Self::Event),
            "VTODO" => Some(Self::Todo),
            "VJOURNAL" => Some(Self::Journal),
            "VFREEBUSY" => Some(Self::FreeBusy),
            "VTIMEZONE" => Some(Self::Timezone),
            "VALARM" => Some(Self::Alarm),
            "STANDARD" => Some(Self::Standard),
            "DAYLIGHT" => Some(Self::Daylight),
            _ => None,
        }
    }

    /// Returns whether this is a schedulable unit (VEVENT, VTODO, VJOURNAL).
    #[must_use]
    pub const fn is_schedulable(self) -> bool {
        matches!(self, Self::Event | Self::Todo | Self::Journal)
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar component.
///
/// Components carry properties and nested sub-components: a VCALENDAR
/// contains VEVENTs, which may contain VALARMs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Component {
    /// Resolved kind; `None` means no serializer exists for this component.
    pub kind: Option<ComponentKind>,
    /// Component name with its original spelling, kept for diagnostics.
    pub name: String,
    /// Properties in order of appearance.
    pub properties: Vec<Property>,
    /// Nested sub-components in order of appearance.
    pub children: Vec<Component>,
}

impl Component {
    /// Creates a component of the given kind.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind: Some(kind),
            name: kind.as_str().to_string(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a component from a name.
    ///
    /// Names outside the known set produce a component without a serializer,
    /// which emission silently skips.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: ComponentKind::from_name(&name),
            name,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a VCALENDAR component.
    #[must_use]
    pub fn calendar() -> Self {
        Self::new(ComponentKind::Calendar)
    }

    /// Creates a VEVENT component.
    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    /// Creates a VTODO component.
    #[must_use]
    pub fn todo() -> Self {
        Self::new(ComponentKind::Todo)
    }

    /// Creates a VTIMEZONE component.
    #[must_use]
    pub fn timezone() -> Self {
        Self::new(ComponentKind::Timezone)
    }

    /// Creates a VALARM component.
    #[must_use]
    pub fn alarm() -> Self {
        Self::new(ComponentKind::Alarm)
    }

    /// Adds a property.
    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Adds a child component.
    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        let name_upper = name.to_ascii_uppercase();
        self.properties.iter().find(|p| p.name == name_upper)
    }

    /// Returns the UID property value if present.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_property(names::UID)?.as_text()
    }

    /// Returns the SUMMARY property value if present.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.get_property(names::SUMMARY)?.as_text()
    }

    /// Returns children of a specific kind.
    #[must_use]
    pub fn children_of_kind(&self, kind: ComponentKind) -> Vec<&Component> {
        self.children
            .iter()
            .filter(|c| c.kind == Some(kind))
            .collect()
    }
}

/// A calendar document: a root component plus document-level helpers.
///
/// The root's properties form the document header; its children are the
/// document body.
#[derive(Debug, Clone, PartialEq)]
pub struct ICalendar {
    /// The root VCALENDAR component.
    pub root: Component,
}

impl ICalendar {
    /// Creates a calendar document with the mandatory header properties.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        let mut root = Component::calendar();
        root.add_property(Property::text(names::VERSION, DEFAULT_VERSION));
        root.add_property(Property::text(names::PRODID, prodid));
        Self { root }
    }

    /// Returns the VERSION value.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.root.get_property(names::VERSION)?.as_text()
    }

    /// Returns the PRODID value.
    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.root.get_property(names::PRODID)?.as_text()
    }

    /// Adds a document-level property.
    pub fn add_property(&mut self, prop: Property) {
        self.root.add_property(prop);
    }

    /// Adds a VEVENT component.
    pub fn add_event(&mut self, event: Component) {
        self.root.add_child(event);
    }

    /// Adds a VTODO component.
    pub fn add_todo(&mut self, todo: Component) {
        self.root.add_child(todo);
    }

    /// Adds a VTIMEZONE component.
    pub fn add_timezone(&mut self, tz: Component) {
        self.root.add_child(tz);
    }

    /// Returns all VEVENT components.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.root.children_of_kind(ComponentKind::Event)
    }

    /// Returns all VTIMEZONE components.
    #[must_use]
    pub fn timezones(&self) -> Vec<&Component> {
        self.root.children_of_kind(ComponentKind::Timezone)
    }
}

impl Default for ICalendar {
    fn default() -> Self {
        Self::new(DEFAULT_PRODID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_name() {
        assert_eq!(ComponentKind::from_name("VEVENT"), Some(ComponentKind::Event));
        assert_eq!(ComponentKind::from_name("vtodo"), Some(ComponentKind::Todo));
        assert_eq!(ComponentKind::from_name("X-CUSTOM"), None);
    }

    #[test]
    fn named_keeps_spelling() {
        let component = Component::named("x-custom");
        assert_eq!(component.kind, None);
        assert_eq!(component.name, "x-custom");
    }

    #[test]
    fn icalendar_new_sets_mandatory_header() {
        let cal = ICalendar::new("-//Test//Test//EN");
        assert_eq!(cal.version(), Some("2.0"));
        assert_eq!(cal.prodid(), Some("-//Test//Test//EN"));
    }

    #[test]
    fn component_accessors() {
        let mut event = Component::event();
        event.add_property(Property::text("UID", "uid-1"));
        event.add_property(Property::text("SUMMARY", "Standup"));
        assert_eq!(event.uid(), Some("uid-1"));
        assert_eq!(event.summary(), Some("Standup"));
    }

    #[test]
    fn children_of_kind_filters() {
        let mut cal = ICalendar::default();
        cal.add_event(Component::event());
        cal.add_timezone(Component::timezone());
        cal.add_event(Component::event());
        assert_eq!(cal.events().len(), 2);
        assert_eq!(cal.timezones().len(), 1);
    }
}
