use super::*;

/// Verses the source itself omits (textual-tradition omissions).
const KNOWN_VERSE_OMISSIONS: &[(&str, u32, u32)] = &[("act", 24, 7)];

/// Verses whose text one version folds into the previous verse.
const KNOWN_FOLDED_VERSES: &[(&str, u32, u32, &str)] = &[("rev", 12, 18, PRIMARY_VERSION)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(super) enum Severity {
    Issue,
    Warning,
    Note,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(super) enum FindingKind {
    EmptyChapter,
    Gap,
    EmptyText,
    HtmlTag,
    FootnoteRemnant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(super) struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    pub book_id: String,
    pub book_name: String,
    pub chapter: u32,
    pub verse: Option<u32>,
    pub translation: Option<String>,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct QualityReport {
    pub generated_at: String,
    pub document: String,
    pub total_books: usize,
    pub total_chapters: usize,
    pub total_verses: usize,
    pub issue_count: usize,
    pub warning_count: usize,
    pub note_count: usize,
    pub findings: Vec<Finding>,
}

impl QualityReport {
    pub(super) fn new(
        document_path: &Path,
        document: &BibleDocument,
        findings: Vec<Finding>,
    ) -> Self {
        let count = |severity: Severity| {
            findings
                .iter()
                .filter(|finding| finding.severity == severity)
                .count()
        };

        Self {
            generated_at: now_utc_string(),
            document: document_path.display().to_string(),
            total_books: document.books.len(),
            total_chapters: document.books.iter().map(|book| book.chapters.len()).sum(),
            total_verses: document.verse_count(),
            issue_count: count(Severity::Issue),
            warning_count: count(Severity::Warning),
            note_count: count(Severity::Note),
            findings,
        }
    }
}

pub(super) struct QualityLinter {
    html_tag: Regex,
    footnote_marker: Regex,
}

impl QualityLinter {
    pub(super) fn new() -> Result<Self> {
        Ok(Self {
            html_tag: Regex::new(r"<[^>]+>").context("failed to compile markup regex")?,
            footnote_marker: Regex::new(r"\d+\)").context("failed to compile footnote regex")?,
        })
    }

    pub(super) fn lint_document(&self, document: &BibleDocument) -> Vec<Finding> {
        let translation_keys = document
            .metadata
            .versions
            .keys()
            .cloned()
            .collect::<Vec<String>>();

        let mut findings = Vec::new();
        for book in &document.books {
            for chapter in &book.chapters {
                self.lint_chapter(book, chapter, &translation_keys, &mut findings);
            }
        }
        findings
    }

    fn lint_chapter(
        &self,
        book: &Book,
        chapter: &Chapter,
        translation_keys: &[String],
        findings: &mut Vec<Finding>,
    ) {
        let finding = |kind, severity, verse, translation: Option<&str>, detail: String| Finding {
            kind,
            severity,
            book_id: book.id.clone(),
            book_name: book.name.clone(),
            chapter: chapter.chapter,
            verse,
            translation: translation.map(ToOwned::to_owned),
            detail,
        };

        if chapter.verses.is_empty() {
            findings.push(finding(
                FindingKind::EmptyChapter,
                Severity::Issue,
                None,
                None,
                "chapter has no verses".to_string(),
            ));
            return;
        }

        let mut verses = chapter.verses.iter().collect::<Vec<_>>();
        verses.sort_by_key(|verse| verse.verse);

        let mut last_verse = 0_u32;
        for verse in verses {
            if verse.verse != last_verse + 1 {
                let known = verse.verse > last_verse + 1
                    && (last_verse + 1..verse.verse)
                        .all(|missing| is_known_omission(&book.id, chapter.chapter, missing));
                let severity = if known { Severity::Note } else { Severity::Issue };
                let detail = if known {
                    format!(
                        "jump from {last_verse} to {}, verified missing in source",
                        verse.verse
                    )
                } else {
                    format!("jump from {last_verse} to {}", verse.verse)
                };
                findings.push(finding(FindingKind::Gap, severity, Some(verse.verse), None, detail));
            }
            last_verse = verse.verse;

            for key in translation_keys {
                let text = verse.text.get(key).map(String::as_str).unwrap_or_default();

                if text.trim().is_empty() {
                    let severity = if is_known_folded(&book.id, chapter.chapter, verse.verse, key) {
                        Severity::Note
                    } else if key == SECONDARY_VERSION {
                        Severity::Warning
                    } else {
                        Severity::Issue
                    };
                    let detail = match severity {
                        Severity::Note => "empty, text is included in the previous verse",
                        Severity::Warning => "empty, likely omitted in this version",
                        Severity::Issue => "empty text",
                    };
                    findings.push(finding(
                        FindingKind::EmptyText,
                        severity,
                        Some(verse.verse),
                        Some(key.as_str()),
                        detail.to_string(),
                    ));
                }

                if self.html_tag.is_match(text) {
                    findings.push(finding(
                        FindingKind::HtmlTag,
                        Severity::Issue,
                        Some(verse.verse),
                        Some(key.as_str()),
                        text.to_string(),
                    ));
                }

                if self.footnote_marker.is_match(text) {
                    findings.push(finding(
                        FindingKind::FootnoteRemnant,
                        Severity::Issue,
                        Some(verse.verse),
                        Some(key.as_str()),
                        text.to_string(),
                    ));
                }
            }
        }
    }
}

fn is_known_omission(book_id: &str, chapter: u32, verse: u32) -> bool {
    KNOWN_VERSE_OMISSIONS
        .iter()
        .any(|(id, known_chapter, known_verse)| {
            *id == book_id && *known_chapter == chapter && *known_verse == verse
        })
}

fn is_known_folded(book_id: &str, chapter: u32, verse: u32, translation: &str) -> bool {
    KNOWN_FOLDED_VERSES
        .iter()
        .any(|(id, known_chapter, known_verse, key)| {
            *id == book_id
                && *known_chapter == chapter
                && *known_verse == verse
                && *key == translation
        })
}

pub(super) fn default_report_path(document_path: &Path) -> PathBuf {
    let stem = document_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("bible_data");
    document_path.with_file_name(format!("{stem}_quality_report.json"))
}
