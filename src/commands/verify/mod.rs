use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::{PRIMARY_VERSION, SECONDARY_VERSION};
use crate::cli::VerifyArgs;
use crate::commands::read_document;
use crate::model::{BibleDocument, Book, Chapter};
use crate::util::{now_utc_string, write_json_pretty};

mod checks;
mod run;
#[cfg(test)]
mod tests;

pub use run::run;

use checks::*;
