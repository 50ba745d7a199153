//! Tagged free-text note.

use crate::model::field::{NoteText, TagSet};
use crate::model::Keyed;
use serde::{Deserialize, Serialize};

/// A note body plus the tag set it is filed under.
///
/// The tag signature is the identity key, so two notes carrying identical
/// tag sets displace each other in the note book. Known limitation, kept
/// deliberately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    text: NoteText,
    tags: TagSet,
}

impl Notification {
    /// Creates a note; a missing tag set falls back to a time-stamped
    /// placeholder tag, same as empty tag input.
    pub fn new(text: NoteText, tags: Option<TagSet>) -> Self {
        Self {
            text,
            tags: tags.unwrap_or_else(TagSet::placeholder),
        }
    }

    pub fn text(&self) -> &NoteText {
        &self.text
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Renders the note body followed by its tag line.
    pub fn describe(&self) -> String {
        format!("{}\n{}", self.text.render(), self.tags.render())
    }
}

impl Keyed for Notification {
    fn key(&self) -> String {
        self.tags.signature()
    }
}
