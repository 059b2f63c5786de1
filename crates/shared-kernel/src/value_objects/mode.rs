// crates/shared-kernel/src/value_objects/mode.rs
use std::fmt;

/// File type tag of a directory member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryKind {
    #[default]
    Regular,
    Directory,
    Symlink,
    BlockDevice,
    CharDevice,
    Fifo,
    Socket,
}

impl EntryKind {
    /// Single-letter code used when output is redirected.
    pub const fn code(self) -> char {
        match self {
            Self::Directory => 'd',
            Self::Symlink => 'l',
            Self::BlockDevice => 'b',
            Self::CharDevice => 'c',
            Self::Fifo => 'f',
            Self::Regular => 'r',
            Self::Socket => 's',
        }
    }

    /// Nerd-font glyph used on an interactive terminal.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Directory => "\u{f0770}",
            Self::Symlink => "\u{f0337}",
            Self::BlockDevice => "\u{f01d6}",
            Self::CharDevice => "\u{f18f4}",
            Self::Fifo => "\u{f07e6}",
            Self::Regular => "\u{ee39}",
            Self::Socket => "\u{f1119}",
        }
    }

    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }

    pub const fn is_symlink(self) -> bool {
        matches!(self, Self::Symlink)
    }
}

/// The nine POSIX owner/group/other read/write/execute bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Permissions(u16);

impl Permissions {
    pub const MASK: u16 = 0o777;

    pub const fn from_mode(mode: u32) -> Self {
        Self((mode & Self::MASK as u32) as u16)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn contains(self, bit: u16) -> bool {
        self.0 & bit != 0
    }

    /// `(bit, letter)` pairs in display order: owner, group, other.
    pub const SLOTS: [(u16, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];

    /// Symbolic form, e.g. `rwxr-xr-x`.
    pub fn symbolic(self) -> String {
        Self::SLOTS
            .iter()
            .map(|&(bit, letter)| if self.contains(bit) { letter } else { '-' })
            .collect()
    }
}

impl fmt::Display for Permissions {
    /// Three-digit octal form, e.g. `755`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03o}", self.0)
    }
}

/// Windows file attribute flags relevant to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Attributes(u8);

impl Attributes {
    pub const HIDDEN: Self = Self(1);
    pub const ARCHIVE: Self = Self(1 << 1);
    pub const READONLY: Self = Self(1 << 2);
    pub const TEMPORARY: Self = Self(1 << 3);
    pub const REPARSE_POINT: Self = Self(1 << 4);

    /// Flags in display order with their letters.
    pub const SLOTS: [(Self, char); 5] = [
        (Self::HIDDEN, 'h'),
        (Self::ARCHIVE, 'a'),
        (Self::READONLY, 'r'),
        (Self::TEMPORARY, 't'),
        (Self::REPARSE_POINT, 'l'),
    ];

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letter string, e.g. `h-r--`.
    pub fn symbolic(self) -> String {
        Self::SLOTS
            .iter()
            .map(|&(flag, letter)| if self.contains(flag) { letter } else { '-' })
            .collect()
    }
}

/// Access information of an entry, in whichever model the platform reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessBits {
    Posix(Permissions),
    Attributes(Attributes),
}

impl Default for AccessBits {
    fn default() -> Self {
        Self::Posix(Permissions::default())
    }
}

/// Raw mode of an entry: type tag plus access bits, recorded verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mode {
    pub kind: EntryKind,
    pub access: AccessBits,
}

impl Mode {
    pub const fn new(kind: EntryKind, access: AccessBits) -> Self {
        Self { kind, access }
    }

    pub const fn posix(kind: EntryKind, mode: u32) -> Self {
        Self::new(kind, AccessBits::Posix(Permissions::from_mode(mode)))
    }
}
