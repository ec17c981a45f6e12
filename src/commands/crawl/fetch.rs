use reqwest::StatusCode;
use reqwest::blocking::Client;

use super::*;

/// Source of raw chapter pages.
pub(super) trait ChapterSource {
    fn fetch_chapter(&self, book_id: &str, chapter: u32) -> Result<String>;
}

pub(super) struct HttpChapterSource {
    client: Client,
    base_url: String,
    primary_version: String,
    secondary_version: String,
    max_retries: u32,
    backoff: Duration,
}

impl HttpChapterSource {
    pub(super) fn new(args: &CrawlArgs, translations: &[Translation]) -> Result<Self> {
        let [primary, secondary] = translations else {
            bail!(
                "the read page renders exactly two translations, {} configured",
                translations.len()
            );
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent(concat!("korbib/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: args.base_url.clone(),
            primary_version: primary.key.clone(),
            secondary_version: secondary.key.clone(),
            max_retries: args.max_retries,
            backoff: Duration::from_millis(args.backoff_ms),
        })
    }

    fn fetch_once(&self, book_id: &str, chapter: u32) -> reqwest::Result<String> {
        let chapter = chapter.to_string();
        let compare_version = format!("{}^", self.secondary_version);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("version", self.primary_version.as_str()),
                ("book", book_id),
                ("chap", chapter.as_str()),
                ("cVersion", compare_version.as_str()),
            ])
            .send()?
            .error_for_status()?;

        // The site serves UTF-8 without always declaring it.
        let body = response.bytes()?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

impl ChapterSource for HttpChapterSource {
    fn fetch_chapter(&self, book_id: &str, chapter: u32) -> Result<String> {
        let mut attempt = 0_u32;
        loop {
            match self.fetch_once(book_id, chapter) {
                Ok(body) => return Ok(body),
                Err(err) if attempt < self.max_retries && is_retryable(&err) => {
                    let backoff = backoff_delay(self.backoff, attempt);
                    attempt += 1;
                    warn!(
                        book = %book_id,
                        chapter,
                        attempt,
                        max_retries = self.max_retries,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %err,
                        "fetch failed, backing off"
                    );
                    thread::sleep(backoff);
                }
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("failed to fetch {book_id} chapter {chapter}")
                    });
                }
            }
        }
    }
}

fn is_retryable(err: &reqwest::Error) -> bool {
    match err.status() {
        Some(status) => status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error(),
        None => err.is_timeout() || err.is_connect() || err.is_request() || err.is_body(),
    }
}

/// Exponential backoff for the given retry attempt, saturating at `Duration::MAX`.
pub(super) fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.checked_mul(2_u32.saturating_pow(attempt)).unwrap_or(Duration::MAX)
}
