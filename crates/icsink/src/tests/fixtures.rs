//! Shared fixtures for serialization and streaming tests.

use chrono::NaiveDate;

use crate::model::{Component, DateTime, ICalendar, Property};

/// A VEVENT with the minimal scheduling properties.
pub fn event(uid: &str, summary: &str) -> Component {
    let stamp = NaiveDate::from_ymd_opt(2026, 8, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let mut event = Component::event();
    event.add_property(Property::text("UID", uid));
    event.add_property(Property::datetime("DTSTAMP", DateTime::utc(stamp)));
    event.add_property(Property::text("SUMMARY", summary));
    event
}

/// A calendar holding `count` sequential events.
pub fn calendar_with_events(count: usize) -> ICalendar {
    let mut calendar = ICalendar::new("-//Icsink//Test//EN");
    for i in 0..count {
        calendar.add_event(event(
            &format!("event-{i}@example.com"),
            &format!("Event {i}"),
        ));
    }
    calendar
}
