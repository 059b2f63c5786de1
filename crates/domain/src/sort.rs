// crates/domain/src/sort.rs
use crate::{arena::Arena, model::Entry};

/// Orders entries by name, comparing raw bytes (case-sensitive, no locale).
pub fn sort_by_name(entries: &mut [Entry], text: &Arena<u8>) {
    entries.sort_unstable_by(|a, b| text.get(a.name).cmp(text.get(b.name)));
}
