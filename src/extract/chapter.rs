use super::*;

/// Turns one fetched chapter page into its merged, verse-ordered records.
pub struct ChapterExtractor {
    containers: Vec<(Translation, Selector)>,
    segmenter: VerseSegmenter,
}

impl ChapterExtractor {
    pub fn new(translations: &[Translation]) -> Result<Self> {
        if translations.is_empty() {
            bail!("at least one translation must be configured");
        }

        let containers = translations
            .iter()
            .map(|translation| {
                let selector = parse_selector(&format!("li#{}", translation.container_id))?;
                Ok((translation.clone(), selector))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            containers,
            segmenter: VerseSegmenter::new()?,
        })
    }

    /// Fails only when none of the translation containers is on the page.
    pub fn extract(&self, html: &str) -> Result<Vec<MergedVerse>> {
        let document = Html::parse_document(html);

        let mut found = 0_usize;
        let mut per_translation = Vec::with_capacity(self.containers.len());
        for (translation, selector) in &self.containers {
            let verses = match document.select(selector).next() {
                Some(container) => {
                    found += 1;
                    self.segmenter.segment(container)
                }
                None => {
                    warn!(
                        translation = %translation.key,
                        container = %translation.container_id,
                        "translation container missing from page"
                    );
                    VerseMap::new()
                }
            };
            debug!(
                translation = %translation.key,
                verses = verses.len(),
                "segmented translation"
            );
            per_translation.push((translation.key.as_str(), verses));
        }

        if found == 0 {
            bail!(
                "no translation container found on page (expected {})",
                self.containers
                    .iter()
                    .map(|(translation, _)| format!("li#{}", translation.container_id))
                    .collect::<Vec<String>>()
                    .join(", ")
            );
        }

        let streams = per_translation
            .iter()
            .map(|(key, verses)| TranslationStream { key: *key, verses })
            .collect::<Vec<TranslationStream<'_>>>();

        Ok(merge_translations(&streams))
    }
}
