//! Catalog record schema
//!
//! Fixed 11-column schema shared by the store, filters, sort engine and
//! display cache. Ingestion is tolerant: malformed values coerce to
//! defaults instead of being rejected.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Read status for a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadStatus {
    #[default]
    Unread,
    Reading,
    Completed,
}

impl ReadStatus {
    /// Parse from user/import text; anything unrecognized maps to Unread
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "reading" => ReadStatus::Reading,
            "completed" => ReadStatus::Completed,
            _ => ReadStatus::Unread,
        }
    }

    /// Canonical storage form (lowercase)
    pub fn as_str(self) -> &'static str {
        match self {
            ReadStatus::Unread => "unread",
            ReadStatus::Reading => "reading",
            ReadStatus::Completed => "completed",
        }
    }

    /// Capitalized display label
    pub fn label(self) -> &'static str {
        match self {
            ReadStatus::Unread => "Unread",
            ReadStatus::Reading => "Reading",
            ReadStatus::Completed => "Completed",
        }
    }

    /// Sort ordinal: unread < reading < completed
    pub fn ordinal(self) -> u8 {
        match self {
            ReadStatus::Unread => 0,
            ReadStatus::Reading => 1,
            ReadStatus::Completed => 2,
        }
    }

    /// Derive status from a progress value (0 = unread, 100 = completed)
    pub fn from_progress(progress: u8) -> Self {
        match progress {
            0 => ReadStatus::Unread,
            100 => ReadStatus::Completed,
            _ => ReadStatus::Reading,
        }
    }
}

/// Column identifiers for the fixed schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Websign,
    Author,
    Title,
    Group,
    Show,
    Magazine,
    Origin,
    Tag,
    ReadStatus,
    Progress,
    FilePath,
}

impl Column {
    /// All columns in schema order
    pub const ALL: [Column; 11] = [
        Column::Websign,
        Column::Author,
        Column::Title,
        Column::Group,
        Column::Show,
        Column::Magazine,
        Column::Origin,
        Column::Tag,
        Column::ReadStatus,
        Column::Progress,
        Column::FilePath,
    ];

    /// Canonical field name (import/export key)
    pub fn name(self) -> &'static str {
        match self {
            Column::Websign => "websign",
            Column::Author => "author",
            Column::Title => "title",
            Column::Group => "group",
            Column::Show => "show",
            Column::Magazine => "magazine",
            Column::Origin => "origin",
            Column::Tag => "tag",
            Column::ReadStatus => "read_status",
            Column::Progress => "progress",
            Column::FilePath => "file_path",
        }
    }

    /// Header label for table views
    pub fn display_name(self) -> &'static str {
        match self {
            Column::Websign => "Websign",
            Column::Author => "Author",
            Column::Title => "Title",
            Column::Group => "Group",
            Column::Show => "Show",
            Column::Magazine => "Magazine",
            Column::Origin => "Origin",
            Column::Tag => "Tag",
            Column::ReadStatus => "Read Status",
            Column::Progress => "Progress",
            Column::FilePath => "File Path",
        }
    }

    /// Look up a column by its field name
    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.iter().copied().find(|c| c.name() == name)
    }
}

/// Access purpose for a cell value: formatted for display, or the
/// canonical storage form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    Display,
    Raw,
}

/// One catalog entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub websign: String,
    pub author: String,
    pub title: String,
    pub group: String,
    pub show: String,
    pub magazine: String,
    pub origin: String,
    /// Comma-separated tag list
    pub tag: String,
    pub read_status: ReadStatus,
    /// 0..=100
    pub progress: u8,
    pub file_path: Option<String>,
}

/// Parse a progress value from import text: strips a trailing `%`,
/// defaults to 0 on failure, clamps to 100
pub fn parse_progress(text: &str) -> u8 {
    let trimmed = text.trim().trim_end_matches('%');
    trimmed.parse::<i64>().unwrap_or(0).clamp(0, 100) as u8
}

impl Record {
    /// Build a record from (field name, value) pairs.
    ///
    /// Unknown fields are ignored and missing fields keep their defaults,
    /// so partial import rows still produce a usable record.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut record = Record::default();
        for (name, value) in pairs {
            if let Some(column) = Column::from_name(name) {
                record.set_text(column, value);
            }
        }
        record
    }

    /// Canonical storage text for a column (progress without `%`,
    /// status lowercase, missing file path as empty string)
    pub fn raw_text(&self, column: Column) -> Cow<'_, str> {
        match column {
            Column::Websign => Cow::Borrowed(self.websign.as_str()),
            Column::Author => Cow::Borrowed(self.author.as_str()),
            Column::Title => Cow::Borrowed(self.title.as_str()),
            Column::Group => Cow::Borrowed(self.group.as_str()),
            Column::Show => Cow::Borrowed(self.show.as_str()),
            Column::Magazine => Cow::Borrowed(self.magazine.as_str()),
            Column::Origin => Cow::Borrowed(self.origin.as_str()),
            Column::Tag => Cow::Borrowed(self.tag.as_str()),
            Column::ReadStatus => Cow::Borrowed(self.read_status.as_str()),
            Column::Progress => Cow::Owned(self.progress.to_string()),
            Column::FilePath => Cow::Borrowed(self.file_path.as_deref().unwrap_or("")),
        }
    }

    /// Set a field from import text with tolerant coercion.
    ///
    /// Setting `progress` also re-derives `read_status`; the store routes
    /// every progress mutation through here.
    pub fn set_text(&mut self, column: Column, value: &str) {
        match column {
            Column::Websign => self.websign = value.to_string(),
            Column::Author => self.author = value.to_string(),
            Column::Title => self.title = value.to_string(),
            Column::Group => self.group = value.to_string(),
            Column::Show => self.show = value.to_string(),
            Column::Magazine => self.magazine = value.to_string(),
            Column::Origin => self.origin = value.to_string(),
            Column::Tag => self.tag = value.to_string(),
            Column::ReadStatus => self.read_status = ReadStatus::parse(value),
            Column::Progress => self.set_progress(parse_progress(value)),
            Column::FilePath => {
                self.file_path = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
        }
    }

    /// Set progress and re-derive read status
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
        self.read_status = ReadStatus::from_progress(self.progress);
    }

    /// Tags split on commas, trimmed, empties dropped
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tag.split(',').map(str::trim).filter(|t| !t.is_empty())
    }
}
