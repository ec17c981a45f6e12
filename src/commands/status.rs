use anyhow::Result;
use tracing::{info, warn};

use crate::catalog::load_book_catalog;
use crate::cli::StatusArgs;
use crate::commands::read_document;
use crate::model::{BibleDocument, BookSpec};
use crate::util::sha256_file;

pub fn run(args: StatusArgs) -> Result<()> {
    info!(document = %args.document.display(), "status requested");

    if !args.document.exists() {
        warn!(path = %args.document.display(), "document missing, nothing crawled yet");
        return Ok(());
    }

    let document = read_document(&args.document)?;
    let catalog = load_book_catalog(args.books_path.as_deref())?;
    let coverage = coverage(&document, &catalog);

    info!(
        source = %document.metadata.source,
        crawled_date = %document.metadata.crawled_date,
        versions = %document.metadata.versions.keys().cloned().collect::<Vec<String>>().join(","),
        "loaded document"
    );
    info!(
        books = document.books.len(),
        chapters = coverage.chapters_present,
        verses = document.verse_count(),
        expected_chapters = coverage.chapters_expected,
        complete_books = coverage.complete_books,
        sha256 = %sha256_file(&args.document)?,
        "document status"
    );

    for book in &catalog {
        let present = document
            .book(&book.id)
            .map(|stored| stored.chapters.len())
            .unwrap_or(0);
        if present > 0 && present < book.chapters as usize {
            info!(
                book = %book.id,
                name = %book.name,
                present,
                expected = book.chapters,
                "book partially crawled"
            );
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Coverage {
    chapters_present: usize,
    chapters_expected: usize,
    complete_books: usize,
}

fn coverage(document: &BibleDocument, catalog: &[BookSpec]) -> Coverage {
    let mut coverage = Coverage {
        chapters_present: 0,
        chapters_expected: 0,
        complete_books: 0,
    };

    for book in catalog {
        let expected = book.chapters as usize;
        let present = document
            .book(&book.id)
            .map(|stored| {
                stored
                    .chapters
                    .iter()
                    .filter(|chapter| chapter.chapter >= 1 && chapter.chapter <= book.chapters)
                    .count()
            })
            .unwrap_or(0);

        coverage.chapters_expected += expected;
        coverage.chapters_present += present;
        if present == expected {
            coverage.complete_books += 1;
        }
    }

    coverage
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::model::{Book, Chapter, DocumentMetadata};

    #[test]
    fn coverage_counts_catalog_chapters_present() {
        let catalog = vec![
            BookSpec {
                id: "rut".to_string(),
                name: "룻기".to_string(),
                chapters: 4,
            },
            BookSpec {
                id: "oba".to_string(),
                name: "오바댜".to_string(),
                chapters: 1,
            },
        ];
        let document = BibleDocument {
            metadata: DocumentMetadata {
                source: "https://example.invalid/read".to_string(),
                versions: BTreeMap::new(),
                crawled_date: "2026-10-19".to_string(),
            },
            books: vec![Book {
                id: "rut".to_string(),
                name: "룻기".to_string(),
                chapters: (1..=4)
                    .map(|chapter| Chapter {
                        chapter,
                        verses: Vec::new(),
                    })
                    .collect(),
            }],
        };

        assert_eq!(
            coverage(&document, &catalog),
            Coverage {
                chapters_present: 4,
                chapters_expected: 5,
                complete_books: 1,
            }
        );
    }
}
