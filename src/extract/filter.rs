use super::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum NodeClass {
    Content,
    Suppressed,
}

/// Footnote links, hidden layout blocks, verse labels and subtitle labels render
/// as zero-length text.
pub(super) fn classify(element: ElementRef<'_>) -> NodeClass {
    let suppressed = match element.value().name() {
        "a" => has_class(element, "comment"),
        "div" => has_class(element, "D2"),
        VERSE_TAG => has_class(element, VERSE_NUMBER_CLASS),
        SUBTITLE_TAG => has_class(element, SUBTITLE_CLASS),
        _ => false,
    };

    if suppressed {
        NodeClass::Suppressed
    } else {
        NodeClass::Content
    }
}

pub(super) fn is_subtitle_label(element: ElementRef<'_>) -> bool {
    element.value().name() == SUBTITLE_TAG && has_class(element, SUBTITLE_CLASS)
}

pub(super) fn is_verse_label(element: ElementRef<'_>) -> bool {
    element.value().name() == VERSE_TAG && has_class(element, VERSE_NUMBER_CLASS)
}

/// Visible text of `element` and its descendants, unnormalized.
pub(super) fn filtered_text(element: ElementRef<'_>) -> String {
    let mut output = String::new();
    push_filtered_text(&mut output, element);
    output
}

fn push_filtered_text(output: &mut String, element: ElementRef<'_>) {
    if classify(element) == NodeClass::Suppressed {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => output.push_str(text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    push_filtered_text(output, child_element);
                }
            }
            _ => {}
        }
    }
}
