use super::*;

/// The persisted document plus the path it is flushed to.
///
/// Chapters only ever get appended; the (book, chapter) pairs already present
/// are the resume checkpoint.
pub(super) struct DocumentStore {
    path: PathBuf,
    document: BibleDocument,
}

impl DocumentStore {
    pub(super) fn open(path: &Path, metadata: DocumentMetadata) -> Result<Self> {
        let document = match fs::read(path) {
            Ok(raw) => match serde_json::from_slice::<BibleDocument>(&raw) {
                Ok(document) => {
                    info!(
                        path = %path.display(),
                        books = document.books.len(),
                        chapters = document
                            .books
                            .iter()
                            .map(|book| book.chapters.len())
                            .sum::<usize>(),
                        "resuming from existing document"
                    );
                    document
                }
                Err(err) => {
                    let backup = quarantine_corrupt_document(path)?;
                    warn!(
                        path = %path.display(),
                        backup = %backup.display(),
                        error = %err,
                        "existing document is corrupt, starting a fresh one"
                    );
                    BibleDocument::empty(metadata)
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no existing document, starting fresh");
                BibleDocument::empty(metadata)
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    pub(super) fn document(&self) -> &BibleDocument {
        &self.document
    }

    pub(super) fn has_chapter(&self, book_id: &str, chapter: u32) -> bool {
        self.document
            .book(book_id)
            .is_some_and(|book| book.chapters.iter().any(|existing| existing.chapter == chapter))
    }

    pub(super) fn append_chapter(&mut self, book: &BookSpec, chapter: Chapter) -> Result<()> {
        if self.has_chapter(&book.id, chapter.chapter) {
            bail!(
                "chapter {} of '{}' is already stored and cannot be replaced",
                chapter.chapter,
                book.id
            );
        }

        let position = match self
            .document
            .books
            .iter()
            .position(|existing| existing.id == book.id)
        {
            Some(position) => position,
            None => {
                self.document.books.push(Book {
                    id: book.id.clone(),
                    name: book.name.clone(),
                    chapters: Vec::new(),
                });
                self.document.books.len() - 1
            }
        };

        self.document.books[position].chapters.push(chapter);
        Ok(())
    }

    pub(super) fn flush(&self) -> Result<()> {
        write_json_pretty(&self.path, &self.document)
    }
}

pub(super) fn fresh_metadata(base_url: &str, translations: &[Translation]) -> DocumentMetadata {
    DocumentMetadata {
        source: base_url.to_string(),
        versions: translations
            .iter()
            .map(|translation| (translation.key.clone(), translation.name.clone()))
            .collect::<BTreeMap<String, String>>(),
        crawled_date: today_utc_date(),
    }
}

/// Moves an unparsable document aside so the fresh one does not overwrite it.
fn quarantine_corrupt_document(path: &Path) -> Result<PathBuf> {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(format!(".corrupt-{}", Utc::now().format("%Y%m%dT%H%M%SZ")));
    let backup = path.with_file_name(name);

    fs::rename(path, &backup).with_context(|| {
        format!(
            "failed to move corrupt document {} aside to {}",
            path.display(),
            backup.display()
        )
    })?;

    Ok(backup)
}
