use super::*;

/// Longest chapter (Psalm 119) has 176 verses; wider ranges are malformed labels.
const MAX_RANGE_WIDTH: u32 = 176;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum VerseLabel {
    Single(u32),
    Range { start: u32, end: u32 },
}

/// Accumulator threaded through one container walk.
#[derive(Debug, Default)]
pub(super) struct SegmentState {
    pending_subtitle: Option<String>,
    verses: VerseMap,
}

impl SegmentState {
    fn emit(&mut self, label: VerseLabel, text: String, subtitle: Option<String>) {
        match label {
            VerseLabel::Single(verse_number) => {
                self.verses.insert(
                    verse_number,
                    VerseRecord {
                        verse_number,
                        text,
                        subtitle,
                    },
                );
            }
            VerseLabel::Range { start, end } => {
                self.verses.insert(
                    start,
                    VerseRecord {
                        verse_number: start,
                        text,
                        subtitle,
                    },
                );
                for verse_number in start + 1..=end {
                    self.verses
                        .insert(verse_number, VerseRecord::reference_stub(start, verse_number));
                }
            }
        }
        self.pending_subtitle = None;
    }
}

pub(super) struct VerseSegmenter {
    walk_selector: Selector,
    subtitle_selector: Selector,
    range_label: Regex,
    single_label: Regex,
}

impl VerseSegmenter {
    pub(super) fn new() -> Result<Self> {
        Ok(Self {
            walk_selector: parse_selector("span, font, div")?,
            subtitle_selector: parse_selector(&format!("{SUBTITLE_TAG}.{SUBTITLE_CLASS}"))?,
            range_label: Regex::new(r"(\d+)-(\d+)")
                .context("failed to compile verse range label regex")?,
            single_label: Regex::new(r"\d+").context("failed to compile verse label regex")?,
        })
    }

    /// Splits one translation container into per-verse records.
    pub(super) fn segment(&self, container: ElementRef<'_>) -> VerseMap {
        let root = unwrap_single_wrapper(container);

        root.select(&self.walk_selector)
            .fold(SegmentState::default(), |state, element| {
                self.step(state, root, element)
            })
            .verses
    }

    fn step(
        &self,
        mut state: SegmentState,
        root: ElementRef<'_>,
        element: ElementRef<'_>,
    ) -> SegmentState {
        if is_subtitle_label(element) {
            // Embedded subtitles were already consumed by their verse node.
            if !self.inside_verse_node(element, root) {
                state.pending_subtitle = Some(element_text(element));
            }
            return state;
        }

        let Some(label_element) = verse_label_child(element) else {
            return state;
        };

        let raw_label = label_element.text().collect::<String>();
        let Some(label) = self.parse_label(&raw_label) else {
            warn!(label = %raw_label.trim(), "skipping verse node with unparsable number label");
            return state;
        };

        let embedded_subtitle = element
            .select(&self.subtitle_selector)
            .next()
            .map(element_text);
        let subtitle = embedded_subtitle.or_else(|| state.pending_subtitle.take());
        let text = normalize_whitespace(&filtered_text(element));

        state.emit(label, text, subtitle);
        state
    }

    pub(super) fn parse_label(&self, raw: &str) -> Option<VerseLabel> {
        let raw = raw.trim();

        if let Some(captures) = self.range_label.captures(raw) {
            let start = captures.get(1)?.as_str().parse::<u32>().ok()?;
            let end = captures.get(2)?.as_str().parse::<u32>().ok()?;
            if start == 0 {
                return None;
            }
            return match start.cmp(&end) {
                std::cmp::Ordering::Less if end - start < MAX_RANGE_WIDTH => {
                    Some(VerseLabel::Range { start, end })
                }
                std::cmp::Ordering::Less => None,
                std::cmp::Ordering::Equal => Some(VerseLabel::Single(start)),
                std::cmp::Ordering::Greater => None,
            };
        }

        self.single_label
            .find(raw)
            .and_then(|found| found.as_str().parse::<u32>().ok())
            .filter(|verse_number| *verse_number > 0)
            .map(VerseLabel::Single)
    }

    /// Only verse nodes that were emitted consume their embedded subtitle; a
    /// skipped node's subtitle carries forward to the next verse.
    fn inside_verse_node(&self, element: ElementRef<'_>, root: ElementRef<'_>) -> bool {
        element
            .ancestors()
            .take_while(|node| node.id() != root.id())
            .filter_map(ElementRef::wrap)
            .filter_map(verse_label_child)
            .any(|label| self.parse_label(&label.text().collect::<String>()).is_some())
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

/// A verse node is a `span` whose direct child is the verse-number label.
pub(super) fn verse_label_child(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if element.value().name() != VERSE_TAG {
        return None;
    }

    element
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| is_verse_label(*child))
}

/// Some pages wrap a container's content in a single `div`; walk that instead.
pub(super) fn unwrap_single_wrapper<'a>(container: ElementRef<'a>) -> ElementRef<'a> {
    let mut meaningful = container.children().filter(|child| match child.value() {
        Node::Text(text) => !text.trim().is_empty(),
        Node::Comment(comment) => !comment.trim().is_empty(),
        Node::Element(_) => true,
        _ => false,
    });

    match (meaningful.next(), meaningful.next()) {
        (Some(only), None) => ElementRef::wrap(only)
            .filter(|wrapper| wrapper.value().name() == "div")
            .unwrap_or(container),
        _ => container,
    }
}
