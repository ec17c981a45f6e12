use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::model::{BookSpec, Translation};

pub const DEFAULT_BASE_URL: &str = "https://www.bskorea.or.kr/bible/korbibReadpage.php";

pub const PRIMARY_VERSION: &str = "GAE";
pub const SECONDARY_VERSION: &str = "SAENEW";

const BUILTIN_BOOKS: &[(&str, &str, u32)] = &[
    ("gen", "창세기", 50),
    ("exo", "출애굽기", 40),
    ("lev", "레위기", 27),
    ("num", "민수기", 36),
    ("deu", "신명기", 34),
    ("jos", "여호수아", 24),
    ("jdg", "사사기", 21),
    ("rut", "룻기", 4),
    ("1sa", "사무엘상", 31),
    ("2sa", "사무엘하", 24),
    ("1ki", "열왕기상", 22),
    ("2ki", "열왕기하", 25),
    ("1ch", "역대상", 29),
    ("2ch", "역대하", 36),
    ("ezr", "에스라", 10),
    ("neh", "느헤미야", 13),
    ("est", "에스더", 10),
    ("job", "욥기", 42),
    ("psa", "시편", 150),
    ("pro", "잠언", 31),
    ("ecc", "전도서", 12),
    ("sng", "아가", 8),
    ("isa", "이사야", 66),
    ("jer", "예레미야", 52),
    ("lam", "예레미야애가", 5),
    ("ezk", "에스겔", 48),
    ("dan", "다니엘", 12),
    ("hos", "호세아", 14),
    ("jol", "요엘", 3),
    ("amo", "아모스", 9),
    ("oba", "오바댜", 1),
    ("jon", "요나", 4),
    ("mic", "미가", 7),
    ("nam", "나훔", 3),
    ("hab", "하박국", 3),
    ("zep", "스바냐", 3),
    ("hag", "학개", 2),
    ("zec", "스가랴", 14),
    ("mal", "말라기", 4),
    ("mat", "마태복음", 28),
    ("mrk", "마가복음", 16),
    ("luk", "누가복음", 24),
    ("jhn", "요한복음", 21),
    ("act", "사도행전", 28),
    ("rom", "로마서", 16),
    ("1co", "고린도전서", 16),
    ("2co", "고린도후서", 13),
    ("gal", "갈라디아서", 6),
    ("eph", "에베소서", 6),
    ("php", "빌립보서", 4),
    ("col", "골로새서", 4),
    ("1th", "데살로니가전서", 5),
    ("2th", "데살로니가후서", 3),
    ("1ti", "디모데전서", 6),
    ("2ti", "디모데후서", 4),
    ("tit", "디도서", 3),
    ("phm", "빌레몬서", 1),
    ("heb", "히브리서", 13),
    ("jas", "야고보서", 5),
    ("1pe", "베드로전서", 5),
    ("2pe", "베드로후서", 3),
    ("1jn", "요한일서", 5),
    ("2jn", "요한이서", 1),
    ("3jn", "요한삼서", 1),
    ("jud", "유다서", 1),
    ("rev", "요한계시록", 22),
];

/// Primary then secondary, in the order the read page renders them.
pub fn default_translations() -> Vec<Translation> {
    vec![
        Translation {
            key: PRIMARY_VERSION.to_string(),
            name: "개역개정".to_string(),
            container_id: "tdBible1".to_string(),
        },
        Translation {
            key: SECONDARY_VERSION.to_string(),
            name: "새번역".to_string(),
            container_id: "tdBible2".to_string(),
        },
    ]
}

pub fn builtin_books() -> Vec<BookSpec> {
    BUILTIN_BOOKS
        .iter()
        .map(|(id, name, chapters)| BookSpec {
            id: (*id).to_string(),
            name: (*name).to_string(),
            chapters: *chapters,
        })
        .collect()
}

pub fn load_book_catalog(books_path: Option<&Path>) -> Result<Vec<BookSpec>> {
    let Some(path) = books_path else {
        return Ok(builtin_books());
    };

    let raw = fs::read(path)
        .with_context(|| format!("failed to read book catalog: {}", path.display()))?;
    let books: Vec<BookSpec> = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse book catalog: {}", path.display()))?;

    validate_catalog(&books)
        .with_context(|| format!("invalid book catalog: {}", path.display()))?;
    info!(path = %path.display(), books = books.len(), "loaded book catalog");

    Ok(books)
}

fn validate_catalog(books: &[BookSpec]) -> Result<()> {
    if books.is_empty() {
        bail!("book catalog is empty");
    }

    let mut seen = HashSet::new();
    for book in books {
        if book.id.trim().is_empty() {
            bail!("book entry '{}' has an empty id", book.name);
        }
        if book.chapters == 0 {
            bail!("book '{}' declares zero chapters", book.id);
        }
        if !seen.insert(book.id.as_str()) {
            bail!("duplicate book id '{}'", book.id);
        }
    }

    Ok(())
}

/// Keeps catalog order; an empty filter selects every book.
pub fn select_books(catalog: Vec<BookSpec>, book_ids: &[String]) -> Result<Vec<BookSpec>> {
    if book_ids.is_empty() {
        return Ok(catalog);
    }

    for id in book_ids {
        if !catalog.iter().any(|book| &book.id == id) {
            bail!("unknown book id '{id}'");
        }
    }

    Ok(catalog
        .into_iter()
        .filter(|book| book_ids.contains(&book.id))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_covers_the_protestant_canon() {
        let books = builtin_books();
        assert_eq!(books.len(), 66);
        assert_eq!(books.iter().map(|book| book.chapters).sum::<u32>(), 1189);
        assert!(validate_catalog(&books).is_ok());
    }

    #[test]
    fn select_books_keeps_catalog_order_and_rejects_unknown_ids() {
        let selected = select_books(builtin_books(), &["rev".to_string(), "gen".to_string()])
            .expect("known ids select");
        let ids = selected
            .iter()
            .map(|book| book.id.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(ids, vec!["gen", "rev"]);

        assert!(select_books(builtin_books(), &["xyz".to_string()]).is_err());
    }

    #[test]
    fn validate_catalog_rejects_empty_and_duplicate_entries() {
        assert!(validate_catalog(&[]).is_err());

        let book = BookSpec {
            id: "gen".to_string(),
            name: "창세기".to_string(),
            chapters: 50,
        };
        assert!(validate_catalog(&[book.clone(), book]).is_err());
    }
}
