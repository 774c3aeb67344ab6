use crate::domain::entities::EmbedRecord;

/// Combines freshly fetched embeds with the ones a message already shows.
pub struct EmbedMerger;

impl EmbedMerger {
    /// Merges `fetched` into `existing`.
    ///
    /// Each fetched embed replaces, in place, the first existing embed whose
    /// URL equals `original_url`; if there is none it is appended. The result
    /// is stably ordered by where each embed's URL first occurs in `content`.
    /// Embeds whose URL is absent sort before every found URL.
    #[must_use]
    pub fn merge(
        mut existing: Vec<EmbedRecord>,
        fetched: Vec<EmbedRecord>,
        original_url: &str,
        content: &str,
    ) -> Vec<EmbedRecord> {
        let mut additions = Vec::new();

        for embed in fetched {
            match existing.iter().position(|e| e.is_for(original_url)) {
                Some(index) => existing[index] = embed,
                None => additions.push(embed),
            }
        }

        existing.extend(additions);
        existing.sort_by_key(|embed| Self::position_in(content, embed.url()));
        existing
    }

    /// Byte offset of the first occurrence of `url` in `content`, or -1.
    fn position_in(content: &str, url: Option<&str>) -> i64 {
        url.and_then(|url| content.find(url))
            .map_or(-1, |index| i64::try_from(index).unwrap_or(i64::MAX))
    }
}
