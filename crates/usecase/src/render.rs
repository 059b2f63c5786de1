// crates/usecase/src/render.rs
//! Draws one directory's table on a [`StyleSink`].
//!
//! Layout, left to right: row number, group (or the owner's domain), user,
//! modification date and time, size, permissions, type marker and name.
//! Every cell except the name is padded to the width the listing pass
//! measured, so the renderer never looks at an entry twice.

use std::borrow::Cow;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use dirlist_domain::{
    Arena, CredentialCache, Entry, Span,
    format::{format_date, format_index, format_time},
    layout::{
        DATE_LABEL, DATE_WIDTH, GROUP_LABEL, INDEX_LABEL, NAME_LABEL, PERMISSIONS_LABEL, PERMISSIONS_WIDTH,
        SIZE_LABEL, USER_LABEL, display_width,
    },
};
use dirlist_ports::style::{Color, StyleSink, Weight};
use dirlist_shared_kernel::{AccessBits, Attributes, EntryKind, Permissions, Result};

use crate::context::DirectoryArenas;

pub const EMPTY_BANNER: &str = "DIRECTORY IS EMPTY";
pub const PLACEHOLDER: &str = "-";
pub const LINK_ARROW: &str = " -> ";

/// Text shown in the group column: the group's name, or on platforms that
/// report none, the owner's domain.
pub fn group_label<'c>(entry: &Entry, credentials: &'c CredentialCache) -> Option<&'c str> {
    match (entry.group, entry.owner) {
        (Some(group), _) => Some(credentials.name(group)),
        (None, Some(owner)) => credentials.domain(owner),
        (None, None) => None,
    }
}

/// Draws tables for a single run. Borrows the sink for its whole lifetime.
pub struct TableRenderer<'s> {
    sink: &'s mut dyn StyleSink,
}

impl<'s> TableRenderer<'s> {
    pub fn new(sink: &'s mut dyn StyleSink) -> Self {
        Self { sink }
    }

    fn interactive(&self) -> bool {
        !self.sink.is_redirected()
    }

    /// Draws the whole table for one directory: header, column header, rule,
    /// then either the rows in arena order or the empty banner.
    pub fn render(&mut self, path: &str, arenas: &DirectoryArenas, credentials: &CredentialCache) -> Result<()> {
        self.header(path)?;
        self.column_header(arenas)?;
        self.rule(arenas)?;

        let entries = arenas.entries.as_slice();
        if entries.is_empty() {
            self.empty_banner(arenas)?;
        } else {
            for (index, entry) in entries.iter().enumerate() {
                self.row(index + 1, entry, arenas, credentials)?;
            }
        }
        self.sink.flush()
    }

    fn header(&mut self, path: &str) -> Result<()> {
        if self.interactive() {
            self.sink.set_color(Color::Yellow)?;
            self.sink.write(EntryKind::Directory.glyph())?;
            self.sink.write(" ")?;
            self.sink.reset_colors()?;
        }
        self.sink.set_weight(Weight::Bold)?;
        self.sink.write(path)?;
        self.sink.write(":")?;
        self.sink.set_weight(Weight::Normal)?;
        self.sink.write("\n")
    }

    fn column_header(&mut self, arenas: &DirectoryArenas) -> Result<()> {
        let widths = &arenas.widths;
        let line = format!(
            "{} {} {} {} {} {} {NAME_LABEL}",
            pad_left(INDEX_LABEL, widths.index),
            pad_right(GROUP_LABEL, widths.group),
            pad_right(USER_LABEL, widths.user),
            pad_right(DATE_LABEL, DATE_WIDTH),
            pad_left(SIZE_LABEL, widths.size),
            pad_right(PERMISSIONS_LABEL, PERMISSIONS_WIDTH),
        );
        self.sink.write_line(&line)
    }

    fn rule(&mut self, arenas: &DirectoryArenas) -> Result<()> {
        let line = arenas.widths.rule().iter().map(|&width| "-".repeat(width)).collect::<Vec<_>>().join(" ");
        self.sink.write_line(&line)
    }

    fn empty_banner(&mut self, arenas: &DirectoryArenas) -> Result<()> {
        self.sink.set_color(Color::BrightBlack)?;
        self.sink.write(&pad_left(EMPTY_BANNER, arenas.widths.banner_width()))?;
        self.sink.reset_colors()?;
        self.sink.write("\n")
    }

    fn row(&mut self, number: usize, entry: &Entry, arenas: &DirectoryArenas, credentials: &CredentialCache) -> Result<()> {
        let widths = &arenas.widths;

        self.sink.write(&pad_left(&format_index(number), widths.index))?;
        self.sink.write(" ")?;

        let group = group_label(entry, credentials);
        self.cell(group, widths.group, Color::Red)?;
        let user = entry.owner.map(|owner| credentials.name(owner));
        self.cell(user, widths.user, Color::Green)?;

        self.modified(entry.modified)?;

        match entry.size {
            Some(size) => {
                self.sink.set_color(Color::Red)?;
                self.sink.write(&pad_left(&text(&arenas.text, size), widths.size))?;
            }
            None => {
                self.sink.reset_colors()?;
                self.sink.write(&pad_left(PLACEHOLDER, widths.size))?;
            }
        }
        self.sink.write(" ")?;

        match entry.mode.access {
            AccessBits::Posix(permissions) => self.posix_permissions(permissions)?,
            AccessBits::Attributes(attributes) => self.attributes(attributes)?,
        }

        self.kind_marker(entry.kind())?;
        self.sink.write(&text(&arenas.text, entry.name))?;
        if let Some(target) = entry.link_target {
            self.sink.set_color(Color::Blue)?;
            self.sink.write(LINK_ARROW)?;
            self.sink.reset_colors()?;
            self.sink.write(&text(&arenas.text, target))?;
        }
        self.sink.write("\n")
    }

    /// A left-aligned credential cell followed by its separator.
    fn cell(&mut self, value: Option<&str>, width: usize, color: Color) -> Result<()> {
        match value {
            Some(value) => {
                self.sink.set_color(color)?;
                self.sink.write(&pad_right(value, width))?;
            }
            None => {
                self.sink.reset_colors()?;
                self.sink.write(&pad_right(PLACEHOLDER, width))?;
            }
        }
        self.sink.write(" ")
    }

    fn modified(&mut self, modified: Option<i64>) -> Result<()> {
        match modified.and_then(local_time) {
            Some(time) => {
                self.sink.set_color(Color::Yellow)?;
                self.sink.write(&format_date(time.month0(), time.day(), time.year()))?;
                self.sink.write(" ")?;
                self.sink.set_color(Color::Magenta)?;
                self.sink.write(&format_time(time.hour(), time.minute()))?;
            }
            None => {
                self.sink.reset_colors()?;
                self.sink.write(&pad_right(PLACEHOLDER, DATE_WIDTH))?;
            }
        }
        self.sink.write(" ")
    }

    fn posix_permissions(&mut self, permissions: Permissions) -> Result<()> {
        for &(bit, letter) in &Permissions::SLOTS {
            if permissions.contains(bit) {
                self.sink.set_color(match letter {
                    'r' => Color::Red,
                    'w' => Color::Green,
                    _ => Color::Yellow,
                })?;
                self.sink.write(letter.encode_utf8(&mut [0; 4]))?;
            } else {
                self.sink.reset_colors()?;
                self.sink.write(PLACEHOLDER)?;
            }
        }
        self.sink.set_color(Color::Magenta)?;
        self.sink.write(&format!(" {permissions} "))
    }

    fn attributes(&mut self, attributes: Attributes) -> Result<()> {
        for &(flag, letter) in &Attributes::SLOTS {
            if attributes.contains(flag) {
                self.sink.set_color(attribute_color(flag))?;
                self.sink.write(letter.encode_utf8(&mut [0; 4]))?;
            } else {
                self.sink.reset_colors()?;
                self.sink.write(PLACEHOLDER)?;
            }
        }
        self.sink.reset_colors()?;
        self.sink.write(&" ".repeat(PERMISSIONS_WIDTH - Attributes::SLOTS.len() + 1))
    }

    fn kind_marker(&mut self, kind: EntryKind) -> Result<()> {
        self.sink.set_color(kind_color(kind))?;
        if self.interactive() {
            self.sink.write(kind.glyph())?;
        } else {
            self.sink.write(kind.code().encode_utf8(&mut [0; 4]))?;
        }
        self.sink.write(" ")?;
        self.sink.reset_colors()
    }
}

fn kind_color(kind: EntryKind) -> Color {
    match kind {
        EntryKind::Directory => Color::Yellow,
        EntryKind::Symlink | EntryKind::Fifo => Color::Blue,
        EntryKind::BlockDevice => Color::Magenta,
        EntryKind::CharDevice => Color::Green,
        EntryKind::Regular => Color::Default,
        EntryKind::Socket => Color::Cyan,
    }
}

fn attribute_color(flag: Attributes) -> Color {
    match flag {
        Attributes::HIDDEN => Color::BrightBlack,
        Attributes::ARCHIVE => Color::Green,
        Attributes::READONLY => Color::Red,
        Attributes::TEMPORARY => Color::Yellow,
        _ => Color::Blue,
    }
}

fn local_time(seconds: i64) -> Option<DateTime<Local>> {
    Local.timestamp_opt(seconds, 0).earliest()
}

fn text(arena: &Arena<u8>, span: Span) -> Cow<'_, str> {
    String::from_utf8_lossy(arena.get(span))
}

fn pad_left(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(value));
    format!("{}{value}", " ".repeat(fill))
}

fn pad_right(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(value));
    format!("{value}{}", " ".repeat(fill))
}
