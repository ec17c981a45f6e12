use std::collections::BTreeMap;

use super::*;
use crate::model::{DocumentMetadata, MergedVerse};

fn verse(number: u32, primary: &str, secondary: &str) -> MergedVerse {
    MergedVerse {
        verse: number,
        text: BTreeMap::from([
            (PRIMARY_VERSION.to_string(), primary.to_string()),
            (SECONDARY_VERSION.to_string(), secondary.to_string()),
        ]),
        subtitle: None,
    }
}

fn document(books: Vec<Book>) -> BibleDocument {
    BibleDocument {
        metadata: DocumentMetadata {
            source: "https://example.invalid/read".to_string(),
            versions: BTreeMap::from([
                (PRIMARY_VERSION.to_string(), "개역개정".to_string()),
                (SECONDARY_VERSION.to_string(), "새번역".to_string()),
            ]),
            crawled_date: "2026-10-19".to_string(),
        },
        books,
    }
}

fn book(id: &str, name: &str, chapters: Vec<Chapter>) -> Book {
    Book {
        id: id.to_string(),
        name: name.to_string(),
        chapters,
    }
}

fn kinds(findings: &[Finding]) -> Vec<(FindingKind, Severity)> {
    findings
        .iter()
        .map(|finding| (finding.kind, finding.severity))
        .collect()
}

#[test]
fn clean_chapter_produces_no_findings() {
    let doc = document(vec![book(
        "gen",
        "창세기",
        vec![Chapter {
            chapter: 1,
            verses: vec![verse(1, "하나", "one"), verse(2, "둘", "two")],
        }],
    )]);

    let findings = QualityLinter::new().expect("linter builds").lint_document(&doc);
    assert!(findings.is_empty(), "unexpected findings: {findings:?}");
}

#[test]
fn lint_flags_gaps_markup_and_footnotes() {
    let doc = document(vec![book(
        "gen",
        "창세기",
        vec![
            Chapter {
                chapter: 1,
                verses: vec![
                    verse(1, "하나<br>", "one"),
                    verse(3, "셋 1)", "three"),
                ],
            },
            Chapter {
                chapter: 2,
                verses: Vec::new(),
            },
        ],
    )]);

    let findings = QualityLinter::new().expect("linter builds").lint_document(&doc);

    assert_eq!(
        kinds(&findings),
        vec![
            (FindingKind::HtmlTag, Severity::Issue),
            (FindingKind::Gap, Severity::Issue),
            (FindingKind::FootnoteRemnant, Severity::Issue),
            (FindingKind::EmptyChapter, Severity::Issue),
        ]
    );
    assert_eq!(findings[1].detail, "jump from 1 to 3");
    assert_eq!(findings[0].translation.as_deref(), Some(PRIMARY_VERSION));
}

#[test]
fn lint_grades_empty_text_by_translation() {
    let doc = document(vec![book(
        "mat",
        "마태복음",
        vec![Chapter {
            chapter: 17,
            verses: vec![verse(1, "", "one"), verse(2, "둘", " ")],
        }],
    )]);

    let findings = QualityLinter::new().expect("linter builds").lint_document(&doc);

    assert_eq!(
        kinds(&findings),
        vec![
            (FindingKind::EmptyText, Severity::Issue),
            (FindingKind::EmptyText, Severity::Warning),
        ]
    );
}

#[test]
fn lint_downgrades_known_source_omissions_to_notes() {
    let acts = book(
        "act",
        "사도행전",
        vec![Chapter {
            chapter: 24,
            verses: vec![
                verse(5, "다섯", "five"),
                verse(6, "여섯", "six"),
                verse(8, "여덟", "eight"),
            ],
        }],
    );
    let revelation = book(
        "rev",
        "요한계시록",
        vec![Chapter {
            chapter: 12,
            verses: (1..=18)
                .map(|number| {
                    let primary = if number == 18 { "" } else { "본문" };
                    verse(number, primary, "text")
                })
                .collect(),
        }],
    );
    let doc = document(vec![acts, revelation]);

    let findings = QualityLinter::new().expect("linter builds").lint_document(&doc);

    assert_eq!(
        kinds(&findings),
        vec![
            (FindingKind::Gap, Severity::Issue),
            (FindingKind::Gap, Severity::Note),
            (FindingKind::EmptyText, Severity::Note),
        ]
    );
    assert_eq!(findings[0].detail, "jump from 0 to 5");
}

#[test]
fn report_counts_findings_by_severity() {
    let doc = document(vec![book(
        "gen",
        "창세기",
        vec![Chapter {
            chapter: 1,
            verses: vec![verse(1, "", ""), verse(2, "둘", "two")],
        }],
    )]);
    let findings = QualityLinter::new().expect("linter builds").lint_document(&doc);

    let report = QualityReport::new(Path::new("bible_data.json"), &doc, findings);

    assert_eq!(report.total_books, 1);
    assert_eq!(report.total_chapters, 1);
    assert_eq!(report.total_verses, 2);
    assert_eq!(report.issue_count, 1);
    assert_eq!(report.warning_count, 1);
    assert_eq!(report.note_count, 0);
}

#[test]
fn default_report_path_sits_next_to_the_document() {
    assert_eq!(
        default_report_path(Path::new("out/bible_data.json")),
        PathBuf::from("out/bible_data_quality_report.json")
    );
}
