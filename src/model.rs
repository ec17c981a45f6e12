use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One bible version rendered on the read page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub key: String,
    pub name: String,
    pub container_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSpec {
    pub id: String,
    pub name: String,
    pub chapters: u32,
}

/// A single translation's rendering of one verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRecord {
    pub verse_number: u32,
    pub text: String,
    pub subtitle: Option<String>,
}

impl VerseRecord {
    /// Placeholder for a verse whose text lives in the first verse of its range.
    pub fn reference_stub(anchor: u32, verse_number: u32) -> Self {
        Self {
            verse_number,
            text: format!("({anchor}절에 포함)"),
            subtitle: Some(String::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedVerse {
    pub verse: u32,
    pub text: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter: u32,
    pub verses: Vec<MergedVerse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source: String,
    pub versions: BTreeMap<String, String>,
    pub crawled_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleDocument {
    pub metadata: DocumentMetadata,
    pub books: Vec<Book>,
}

impl BibleDocument {
    pub fn empty(metadata: DocumentMetadata) -> Self {
        Self {
            metadata,
            books: Vec::new(),
        }
    }

    pub fn book(&self, book_id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == book_id)
    }

    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|book| &book.chapters)
            .map(|chapter| chapter.verses.len())
            .sum()
    }
}
