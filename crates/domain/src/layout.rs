// crates/domain/src/layout.rs
//! Column widths of the listing table.
//!
//! The variable columns start at their header label widths and only grow
//! while entries are observed. The remaining columns have fixed widths.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::format::format_index;

pub const INDEX_LABEL: &str = "No.";
pub const GROUP_LABEL: &str = "Group";
pub const USER_LABEL: &str = "User";
pub const DATE_LABEL: &str = "Modified Date";
pub const SIZE_LABEL: &str = "Size";
pub const PERMISSIONS_LABEL: &str = "Permissions";
pub const NAME_LABEL: &str = "Name";

/// `Mon/DD/YYYY HH:MM`.
pub const DATE_WIDTH: usize = 17;
/// Nine permission letters, a space and three octal digits.
pub const PERMISSIONS_WIDTH: usize = 13;
/// Length of the rule drawn under the name header.
pub const NAME_RULE_WIDTH: usize = 16;

/// Number of terminal cells a string occupies. East Asian wide characters
/// take two cells; a cluster never takes fewer than one.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).map(|cluster| cluster.width().max(1)).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub index: usize,
    pub group: usize,
    pub user: usize,
    pub size: usize,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            index: INDEX_LABEL.len(),
            group: GROUP_LABEL.len(),
            user: USER_LABEL.len(),
            size: SIZE_LABEL.len(),
        }
    }
}

impl ColumnWidths {
    /// Widens the group, user and size columns to fit one entry's values.
    /// Absent values render as `-` and never widen anything.
    pub fn observe(&mut self, group_width: Option<usize>, user_width: Option<usize>, size: Option<&str>) {
        if let Some(width) = group_width {
            self.group = self.group.max(width);
        }
        if let Some(width) = user_width {
            self.user = self.user.max(width);
        }
        if let Some(size) = size {
            self.size = self.size.max(display_width(size));
        }
    }

    /// Widens the index column to fit the largest row number.
    pub fn observe_count(&mut self, count: usize) {
        self.index = self.index.max(format_index(count).len());
    }

    /// Width of the empty-directory banner.
    pub fn banner_width(&self) -> usize {
        27 + self.index + self.group + self.user + self.size
    }

    /// Widths of every column, in order, for drawing the rule.
    pub fn rule(&self) -> [usize; 7] {
        [self.index, self.group, self.user, DATE_WIDTH, self.size, PERMISSIONS_WIDTH, NAME_RULE_WIDTH]
    }
}
