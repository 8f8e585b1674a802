//! Example streaming a large calendar to a file without materializing the
//! document in memory.
//!
//! Run with: `cargo run --package icsink --example stream_events`

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Result;
use icsink::{CalendarWriter, Component, ICalendar, Property};

const EVENT_COUNT: usize = 100_000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut calendar = ICalendar::new("-//Icsink//Stream Example//EN");
    calendar.add_property(Property::text("X-WR-CALNAME", "Example calendar"));

    let file = File::create("events.ics")?;
    let mut writer = CalendarWriter::new(&calendar, BufWriter::new(file))?;

    for count in 0..EVENT_COUNT {
        let mut event = Component::event();
        event.add_property(Property::text("UID", format!("event-{count}@example.com")));
        event.add_property(Property::text("SUMMARY", format!("Event {count}")));
        writer.write_component(&event)?;
    }

    let mut sink = writer.close()?;
    sink.flush()?;

    println!("wrote {EVENT_COUNT} events to events.ics");
    Ok(())
}
