use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::trace;
use url::Url;

use crate::domain::entities::NormalizedUrl;
use crate::domain::errors::UnfurlError;

static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(https?://)?(?:m\.|www\.)?(youtu\.be|youtube\.com)/(embed/|v/|watch\?v=|watch\?.+&v=|shorts/)?([A-Za-z0-9_-]{11})(?:\S+)?",
    )
    .unwrap()
});

// Components are independently optional and additive: "1h30" is 3600 + 30.
static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:([0-9]+h)?([0-9]+m)?([0-9]+s)?([0-9]+)?)?$").unwrap());
static HOURS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)h").unwrap());
static MINUTES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)m").unwrap());
static SECONDS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)s").unwrap());
static BARE_SECONDS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)$").unwrap());

/// Canonicalizes links so the same resource always yields the same string.
///
/// The unfurl endpoint answers some links with an embed for a different URL
/// than the one requested; folding those forms up front keeps cache keys and
/// embed matching stable.
pub struct UrlNormalizer;

impl UrlNormalizer {
    /// Normalizes a raw link.
    ///
    /// YouTube links become `https://www.youtube.com/watch?v=<id>` with any
    /// `start`/`t` timestamp folded into `&start=<seconds>`. `x.com` and
    /// `www.x.com` are rewritten to the matching `twitter.com` host.
    ///
    /// # Errors
    /// Returns [`UnfurlError::InvalidUrl`] if the link is not an absolute URL.
    pub fn normalize(raw: &str) -> Result<NormalizedUrl, UnfurlError> {
        let mut url = raw.to_string();

        if YOUTUBE_RE.is_match(&url) {
            let parsed = Url::parse(&url).map_err(|e| UnfurlError::invalid_url(raw, e))?;
            let start = Self::start_seconds(&parsed);

            url = YOUTUBE_RE
                .replace(&url, |caps: &Captures| {
                    let mut canonical = format!("https://www.youtube.com/watch?v={}", &caps[4]);
                    if let Some(start) = start {
                        canonical.push_str(&format!("&start={start}"));
                    }
                    canonical
                })
                .into_owned();
        }

        let parsed = Url::parse(&url).map_err(|e| UnfurlError::invalid_url(raw, e))?;

        match parsed.host_str() {
            Some("x.com") => url = url.replacen("x.com", "twitter.com", 1),
            Some("www.x.com") => url = url.replacen("www.x.com", "www.twitter.com", 1),
            _ => {}
        }

        trace!(raw, normalized = %url, "Normalized URL");

        Ok(NormalizedUrl::new(url))
    }

    /// Reads `start`, falling back to `t` when `start` is absent or empty.
    fn start_seconds(url: &Url) -> Option<u64> {
        let param = |name: &str| {
            url.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
        };

        param("start")
            .or_else(|| param("t"))
            .and_then(|value| Self::parse_timestamp(&value))
    }

    /// Parses `1h2m3s`-style or bare-seconds timestamps into total seconds.
    ///
    /// Returns `None` when the value has an unexpected shape or overflows.
    #[must_use]
    pub fn parse_timestamp(value: &str) -> Option<u64> {
        if value.is_empty() || !TIMESTAMP_RE.is_match(value) {
            return None;
        }

        let component = |re: &Regex, scale: u64| -> Option<u64> {
            match re.captures(value) {
                Some(caps) => caps[1].parse::<u64>().ok()?.checked_mul(scale),
                None => Some(0),
            }
        };

        component(&HOURS_RE, 3600)?
            .checked_add(component(&MINUTES_RE, 60)?)?
            .checked_add(component(&SECONDS_RE, 1)?)?
            .checked_add(component(&BARE_SECONDS_RE, 1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const CANONICAL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    fn normalize(raw: &str) -> String {
        UrlNormalizer::normalize(raw).unwrap().into_inner()
    }

    #[test_case("https://youtu.be/dQw4w9WgXcQ?t=1m30s", "https://www.youtube.com/watch?v=dQw4w9WgXcQ&start=90" ; "short_link_with_minutes_seconds")]
    #[test_case("https://www.youtube.com/watch?v=dQw4w9WgXcQ", CANONICAL ; "already_canonical")]
    #[test_case("https://youtube.com/watch?v=dQw4w9WgXcQ&t=90", "https://www.youtube.com/watch?v=dQw4w9WgXcQ&start=90" ; "bare_seconds")]
    #[test_case("https://m.youtube.com/watch?feature=share&v=dQw4w9WgXcQ", CANONICAL ; "v_not_first")]
    #[test_case("https://www.youtube.com/embed/dQw4w9WgXcQ?start=42", "https://www.youtube.com/watch?v=dQw4w9WgXcQ&start=42" ; "embed_with_start")]
    #[test_case("https://www.youtube.com/v/dQw4w9WgXcQ", CANONICAL ; "v_path")]
    #[test_case("https://youtube.com/shorts/dQw4w9WgXcQ?feature=share", CANONICAL ; "shorts")]
    #[test_case("https://youtu.be/dQw4w9WgXcQ?t=1h2m3s", "https://www.youtube.com/watch?v=dQw4w9WgXcQ&start=3723" ; "hours_minutes_seconds")]
    #[test_case("https://youtu.be/dQw4w9WgXcQ?start=10&t=99", "https://www.youtube.com/watch?v=dQw4w9WgXcQ&start=10" ; "start_wins_over_t")]
    #[test_case("https://youtu.be/dQw4w9WgXcQ?start=&t=15", "https://www.youtube.com/watch?v=dQw4w9WgXcQ&start=15" ; "empty_start_falls_back_to_t")]
    #[test_case("https://youtu.be/dQw4w9WgXcQ?t=abc", CANONICAL ; "unparseable_timestamp_dropped")]
    #[test_case("https://youtu.be/dQw4w9WgXcQ?start=abc&t=10", CANONICAL ; "unparseable_start_does_not_fall_back_to_t")]
    #[test_case("https://youtu.be/dQw4w9WgXcQ?t=", CANONICAL ; "empty_timestamp_dropped")]
    fn test_youtube_forms(raw: &str, expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[test_case("https://x.com/foo", "https://twitter.com/foo" ; "bare")]
    #[test_case("https://www.x.com/foo/status/1", "https://www.twitter.com/foo/status/1" ; "www")]
    #[test_case("https://sub.x.com/foo", "https://sub.x.com/foo" ; "other_subdomain_untouched")]
    #[test_case("https://notx.com/foo", "https://notx.com/foo" ; "suffix_is_not_subdomain")]
    #[test_case("https://example.com/page?x=1", "https://example.com/page?x=1" ; "unrelated")]
    fn test_x_domain_folding(raw: &str, expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[test]
    fn test_all_variants_share_canonical_form() {
        let variants = [
            "https://youtu.be/dQw4w9WgXcQ?t=90",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1m30s",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ&start=90",
            "https://youtube.com/embed/dQw4w9WgXcQ?t=90s",
        ];

        for raw in variants {
            assert_eq!(
                normalize(raw),
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ&start=90",
                "{raw}"
            );
        }
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "https://youtu.be/dQw4w9WgXcQ?t=1m30s",
            "https://youtube.com/shorts/dQw4w9WgXcQ",
            "https://x.com/foo",
            "https://www.instagram.com/p/abc/",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "{raw}");
        }
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            UrlNormalizer::normalize("not a url"),
            Err(UnfurlError::InvalidUrl { .. })
        ));
        assert!(matches!(
            UrlNormalizer::normalize("youtu.be/dQw4w9WgXcQ"),
            Err(UnfurlError::InvalidUrl { .. })
        ));
    }

    #[test_case("90", Some(90))]
    #[test_case("1m30s", Some(90))]
    #[test_case("2h", Some(7200))]
    #[test_case("1h30", Some(3630) ; "bare_seconds_added_to_hours")]
    #[test_case("5m", Some(300))]
    #[test_case("1s2", Some(3))]
    #[test_case("1x", None)]
    #[test_case("", None)]
    #[test_case("99999999999999999999999", None ; "overflow")]
    fn test_parse_timestamp(value: &str, expected: Option<u64>) {
        assert_eq!(UrlNormalizer::parse_timestamp(value), expected);
    }
}
