//! Incremental calendar writing.
//!
//! [`CalendarWriter`] streams one calendar document to an [`io::Write`]
//! sink. The header is emitted exactly once on first use, every written
//! node is rendered and pushed to the sink immediately, and the footer is
//! emitted on close. Peak memory stays at one rendered object regardless of
//! how many components the document ends up containing, while the output is
//! byte-identical to [`serialize`](super::serialize) on the finished
//! document.

use std::io::Write;

use crate::error::{WriteError, WriteResult};
use crate::model::{Component, ICalendar, Property};

use super::serializer::{delimiter_line, header_properties, serialize_component, serialize_property};

/// A calendar object the writer can emit.
///
/// The set of writable nodes is closed; dispatch is a match, not a registry
/// lookup. `&Property` and `&Component` convert into it directly.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A single property line.
    Property(&'a Property),
    /// A component subtree.
    Component(&'a Component),
}

impl<'a> From<&'a Property> for Node<'a> {
    fn from(property: &'a Property) -> Self {
        Self::Property(property)
    }
}

impl<'a> From<&'a Component> for Node<'a> {
    fn from(component: &'a Component) -> Self {
        Self::Component(component)
    }
}

/// Streams one calendar document to one sink.
///
/// The writer borrows the document and takes the sink by value; pass
/// `&mut sink` to keep ownership on the caller's side. The sink is never
/// flushed or closed here — its lifetime belongs to the caller, and
/// [`close`](Self::close) hands it back.
#[derive(Debug)]
pub struct CalendarWriter<'a, W: Write> {
    calendar: &'a ICalendar,
    sink: W,
    opened: bool,
}

impl<'a, W: Write> CalendarWriter<'a, W> {
    /// Binds a writer to a calendar document and an output sink.
    ///
    /// ## Errors
    ///
    /// Returns [`WriteError::InvalidDocument`] if the document's root
    /// component has no name to delimit the output with.
    pub fn new(calendar: &'a ICalendar, sink: W) -> WriteResult<Self> {
        if calendar.root.name.is_empty() {
            return Err(WriteError::InvalidDocument("root component has no name"));
        }
        Ok(Self {
            calendar,
            sink,
            opened: false,
        })
    }

    /// Writes one calendar object to the sink.
    ///
    /// The first call emits the document header: the opening delimiter
    /// followed by the top-level properties, normalized (VERSION and PRODID
    /// filled in on an internal copy when missing) and sorted by name. The
    /// given node is then rendered and appended verbatim. A component
    /// without a renderable kind contributes zero bytes and is not an
    /// error.
    ///
    /// ## Errors
    ///
    /// Propagates sink failures as [`WriteError::Io`].
    pub fn write<'n>(&mut self, node: impl Into<Node<'n>>) -> WriteResult<()> {
        self.open()?;
        match node.into() {
            Node::Property(property) => self.emit(&serialize_property(property)),
            Node::Component(component) => self.emit(&serialize_component(component)),
        }
    }

    /// Writes a single property line.
    ///
    /// ## Errors
    ///
    /// Propagates sink failures as [`WriteError::Io`].
    pub fn write_property(&mut self, property: &Property) -> WriteResult<()> {
        self.write(property)
    }

    /// Writes a component subtree.
    ///
    /// ## Errors
    ///
    /// Propagates sink failures as [`WriteError::Io`].
    pub fn write_component(&mut self, component: &Component) -> WriteResult<()> {
        self.write(component)
    }

    /// Emits the header and every child already attached to the document.
    ///
    /// Bulk convenience for fully built documents: equivalent to one
    /// [`write`](Self::write) per child in collection order.
    ///
    /// ## Errors
    ///
    /// Propagates sink failures as [`WriteError::Io`].
    #[tracing::instrument(skip(self), fields(children = self.calendar.root.children.len()))]
    pub fn write_all(&mut self) -> WriteResult<()> {
        self.open()?;
        for child in &self.calendar.root.children {
            self.emit(&serialize_component(child))?;
        }
        Ok(())
    }

    /// Emits the closing delimiter and returns the sink.
    ///
    /// Taking the writer by value makes write-after-close and double-close
    /// unrepresentable. Closing before any write is permitted and produces
    /// a footer-only stream.
    ///
    /// ## Errors
    ///
    /// Propagates sink failures as [`WriteError::Io`].
    pub fn close(mut self) -> WriteResult<W> {
        self.emit(&delimiter_line("END", &self.calendar.root.name))?;
        tracing::debug!(name = %self.calendar.root.name, "calendar stream closed");
        Ok(self.sink)
    }

    /// Emits the document header exactly once.
    fn open(&mut self) -> WriteResult<()> {
        if self.opened {
            return Ok(());
        }
        self.opened = true;

        tracing::debug!(name = %self.calendar.root.name, "opening calendar stream");
        self.emit(&delimiter_line("BEGIN", &self.calendar.root.name))?;
        for property in header_properties(self.calendar) {
            self.emit(&serialize_property(&property))?;
        }
        Ok(())
    }

    fn emit(&mut self, text: &str) -> WriteResult<()> {
        self.sink.write_all(text.as_bytes())?;
        Ok(())
    }
}
