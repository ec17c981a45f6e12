use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow, bail};
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, warn};

use crate::model::{MergedVerse, Translation, VerseRecord};

mod chapter;
mod filter;
mod merge;
mod normalize;
mod segment;

pub use chapter::ChapterExtractor;
pub use normalize::normalize_whitespace;

use filter::*;
use merge::*;
use segment::*;

pub type VerseMap = BTreeMap<u32, VerseRecord>;

const SUBTITLE_TAG: &str = "font";
const SUBTITLE_CLASS: &str = "smallTitle";
const VERSE_TAG: &str = "span";
const VERSE_NUMBER_CLASS: &str = "number";

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|err| anyhow!("failed to parse selector `{css}`: {err:?}"))
}

fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|value| value == class)
}
