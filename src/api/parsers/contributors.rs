use anyhow::Result;
use log::warn;
use serde_json::Value;

use crate::domain::models::{Contributor, ContributorStatsResponse};
use crate::errors;

/// Decode the statistics payload, tolerating the non-array shape the API
/// returns while statistics are still being assembled server-side.
pub fn decode_stats_payload(data: Value) -> Result<Vec<ContributorStatsResponse>> {
    if !data.is_array() {
        warn!("Contributor statistics payload is not an array, treating as empty");
        return Ok(Vec::new());
    }

    errors::with_parse_context(serde_json::from_value(data), "contributor statistics")
}

/// Map raw statistics entries into domain contributors.
///
/// Entries without an author are dropped; the rest are sorted by
/// contribution count, highest first.
pub fn map_contributors(entries: Vec<ContributorStatsResponse>) -> Vec<Contributor> {
    let mut contributors: Vec<Contributor> = entries
        .into_iter()
        .filter_map(|entry| {
            let author = entry.author?;
            Some(Contributor {
                name: author.login,
                avatar: author.avatar_url,
                url: author.html_url,
                contributions: entry.total,
            })
        })
        .collect();

    contributors.sort_by(|a, b| b.contributions.cmp(&a.contributions));
    contributors
}
