use super::*;

pub(super) struct CrawlSettings {
    pub delay: Duration,
    pub max_chapters: Option<usize>,
    pub error_log: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct CrawlSummary {
    pub fetched: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl CrawlSummary {
    fn attempted(&self) -> usize {
        self.fetched + self.failed
    }
}

#[derive(Debug)]
pub(super) enum ChapterFailure {
    Fetch(anyhow::Error),
    Structural(anyhow::Error),
    NoVerses,
}

impl ChapterFailure {
    fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Structural(_) => "structure",
            Self::NoVerses => "empty",
        }
    }
}

impl fmt::Display for ChapterFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(err) | Self::Structural(err) => write!(f, "{err:#}"),
            Self::NoVerses => write!(f, "page contained no verses"),
        }
    }
}

/// Walks every catalog chapter in order, persisting each one as soon as it is
/// assembled. Only persistence errors abort the crawl.
pub(super) fn crawl_books<S: ChapterSource>(
    books: &[BookSpec],
    source: &S,
    extractor: &ChapterExtractor,
    store: &mut DocumentStore,
    settings: &CrawlSettings,
) -> Result<CrawlSummary> {
    let mut summary = CrawlSummary::default();

    for (index, book) in books.iter().enumerate() {
        info!(
            position = index + 1,
            total = books.len(),
            book = %book.id,
            name = %book.name,
            chapters = book.chapters,
            "processing book"
        );

        for chapter in 1..=book.chapters {
            if store.has_chapter(&book.id, chapter) {
                debug!(book = %book.id, chapter, "chapter already stored, skipping");
                summary.skipped += 1;
                continue;
            }

            if settings
                .max_chapters
                .is_some_and(|limit| summary.attempted() >= limit)
            {
                info!(limit = summary.attempted(), "chapter limit reached, stopping");
                return Ok(summary);
            }

            match assemble_chapter(source, extractor, &book.id, chapter) {
                Ok(verses) => {
                    let verse_count = verses.len();
                    store.append_chapter(book, Chapter { chapter, verses })?;
                    store.flush()?;
                    summary.fetched += 1;
                    info!(book = %book.id, chapter, verses = verse_count, "stored chapter");
                }
                Err(failure) => {
                    summary.failed += 1;
                    warn!(
                        book = %book.id,
                        chapter,
                        kind = failure.kind(),
                        error = %failure,
                        "chapter not completed, will retry on next run"
                    );
                    record_failure(settings.error_log.as_deref(), &book.id, chapter, &failure);
                }
            }

            if !settings.delay.is_zero() {
                thread::sleep(settings.delay);
            }
        }
    }

    Ok(summary)
}

pub(super) fn assemble_chapter<S: ChapterSource>(
    source: &S,
    extractor: &ChapterExtractor,
    book_id: &str,
    chapter: u32,
) -> Result<Vec<MergedVerse>, ChapterFailure> {
    let html = source
        .fetch_chapter(book_id, chapter)
        .map_err(ChapterFailure::Fetch)?;
    let verses = extractor
        .extract(&html)
        .map_err(ChapterFailure::Structural)?;

    if verses.is_empty() {
        return Err(ChapterFailure::NoVerses);
    }

    Ok(verses)
}

fn record_failure(
    error_log: Option<&Path>,
    book_id: &str,
    chapter: u32,
    failure: &ChapterFailure,
) {
    let Some(path) = error_log else {
        return;
    };

    if let Err(err) = append_line(path, &format!("{book_id} {chapter}: {failure}")) {
        warn!(path = %path.display(), error = %err, "failed to append to error log");
    }
}
