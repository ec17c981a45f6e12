use super::*;

pub fn run(args: CrawlArgs) -> Result<()> {
    let catalog = load_book_catalog(args.books_path.as_deref())?;
    let books = select_books(catalog, &args.books)?;
    let translations = default_translations();

    let extractor = ChapterExtractor::new(&translations)?;
    let source = HttpChapterSource::new(&args, &translations)?;
    let mut store = DocumentStore::open(
        &args.output,
        fresh_metadata(&args.base_url, &translations),
    )?;

    info!(
        output = %args.output.display(),
        books = books.len(),
        chapters = books.iter().map(|book| book.chapters as usize).sum::<usize>(),
        "starting crawl"
    );

    let settings = CrawlSettings {
        delay: Duration::from_millis(args.delay_ms),
        max_chapters: args.max_chapters,
        error_log: Some(args.error_log.clone()),
    };
    let summary = crawl_books(&books, &source, &extractor, &mut store, &settings)?;

    info!(
        fetched = summary.fetched,
        skipped = summary.skipped,
        failed = summary.failed,
        verses = store.document().verse_count(),
        "crawl completed"
    );
    if summary.failed > 0 {
        warn!(
            failed = summary.failed,
            error_log = %args.error_log.display(),
            "some chapters failed; rerun to retry them"
        );
    }

    Ok(())
}
