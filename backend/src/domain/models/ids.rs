//! Identifier generation.
//!
//! Ids have the form `<prefix>-<epoch_millis>`. An [`IdSequence`] never hands
//! out the same millisecond twice, and it resumes past every id already in the
//! collection, so an id is not reused even after the entry holding it was
//! deleted in an earlier session.

use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    last_issued: u64,
}

impl IdSequence {
    /// Start a sequence that only issues values above any timestamp embedded in
    /// `existing_ids`
    pub fn resume_after<'a, I>(existing_ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let last_issued = existing_ids
            .into_iter()
            .filter_map(parse_millis)
            .max()
            .unwrap_or(0);
        Self { last_issued }
    }

    /// Next id with the given prefix, based on the current time
    pub fn next_id(&mut self, prefix: &str) -> String {
        let millis = self.next_millis(now_millis());
        format!("{}-{}", prefix, millis)
    }

    /// Issue `now_millis`, or the smallest value above the last one issued if
    /// the clock hasn't moved past it
    pub fn next_millis(&mut self, now_millis: u64) -> u64 {
        let next = now_millis.max(self.last_issued.saturating_add(1));
        self.last_issued = next;
        next
    }
}

/// Extract the trailing timestamp from an id such as `ex-1709600000000`
pub fn parse_millis(id: &str) -> Option<u64> {
    id.rsplit('-').next()?.parse().ok()
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
