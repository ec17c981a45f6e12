use std::collections::BTreeSet;

use super::*;

#[derive(Copy, Clone, Debug)]
pub(super) struct TranslationStream<'a> {
    pub key: &'a str,
    pub verses: &'a VerseMap,
}

/// One merged verse per verse number present in any stream, ascending.
pub(super) fn merge_translations(streams: &[TranslationStream<'_>]) -> Vec<MergedVerse> {
    let verse_numbers = streams
        .iter()
        .flat_map(|stream| stream.verses.values().map(|record| record.verse_number))
        .collect::<BTreeSet<u32>>();

    verse_numbers
        .into_iter()
        .map(|verse| merge_verse(verse, streams))
        .collect()
}

fn merge_verse(verse: u32, streams: &[TranslationStream<'_>]) -> MergedVerse {
    let text = streams
        .iter()
        .map(|stream| {
            let value = stream
                .verses
                .get(&verse)
                .map(|record| record.text.clone())
                .unwrap_or_default();
            (stream.key.to_string(), value)
        })
        .collect::<BTreeMap<String, String>>();

    let subtitle = streams
        .iter()
        .any(|stream| subtitle_of(stream, verse).is_some())
        .then(|| {
            streams
                .iter()
                .map(|stream| {
                    (
                        stream.key.to_string(),
                        subtitle_of(stream, verse).unwrap_or_default().to_string(),
                    )
                })
                .collect::<BTreeMap<String, String>>()
        });

    MergedVerse {
        verse,
        text,
        subtitle,
    }
}

fn subtitle_of<'a>(stream: &TranslationStream<'a>, verse: u32) -> Option<&'a str> {
    stream
        .verses
        .get(&verse)
        .and_then(|record| record.subtitle.as_deref())
        .filter(|value| !value.is_empty())
}
