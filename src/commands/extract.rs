use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::default_translations;
use crate::cli::ExtractArgs;
use crate::extract::ChapterExtractor;
use crate::util::write_json_pretty;

pub fn run(args: ExtractArgs) -> Result<()> {
    let raw = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let html = String::from_utf8_lossy(&raw);

    let extractor = ChapterExtractor::new(&default_translations())?;
    let verses = extractor
        .extract(&html)
        .with_context(|| format!("failed to extract verses from {}", args.input.display()))?;

    info!(
        input = %args.input.display(),
        verses = verses.len(),
        subtitles = verses.iter().filter(|verse| verse.subtitle.is_some()).count(),
        "extracted chapter page"
    );

    match args.output {
        Some(path) => {
            write_json_pretty(&path, &verses)?;
            info!(path = %path.display(), "wrote extracted verses");
        }
        None => {
            let rendered =
                serde_json::to_string_pretty(&verses).context("failed to serialize verses")?;
            println!("{rendered}");
        }
    }

    Ok(())
}
