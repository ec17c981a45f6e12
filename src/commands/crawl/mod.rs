use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::catalog::{default_translations, load_book_catalog, select_books};
use crate::cli::CrawlArgs;
use crate::extract::ChapterExtractor;
use crate::model::{
    BibleDocument, Book, BookSpec, Chapter, DocumentMetadata, MergedVerse, Translation,
};
use crate::util::{append_line, today_utc_date, write_json_pretty};

mod fetch;
mod pipeline;
mod run;
mod store;

pub use run::run;

use fetch::*;
use pipeline::*;
use store::*;
