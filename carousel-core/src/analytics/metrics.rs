use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::error::CarouselResult;

const SECONDS_PER_DAY: i64 = 86_400;

/// Account-level counters captured at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// Follower count.
    pub followers: u64,
    /// Accounts followed.
    pub following: u64,
    /// Number of published media items.
    pub media_count: u64,
    /// Capture time, Unix seconds.
    pub captured_at: i64,
}

/// A published post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Platform post id.
    pub post_id: String,
    /// Media type as reported by the platform (`IMAGE`, `CAROUSEL_ALBUM`, ...).
    pub media_type: String,
    /// Caption text.
    pub caption: String,
    /// Publish time, Unix seconds.
    pub posted_at: i64,
}

/// Per-post counters measured at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetrics {
    /// Post these counters belong to.
    pub post_id: String,
    /// Measurement time, Unix seconds.
    pub measured_at: i64,
    /// Likes.
    pub likes: u64,
    /// Comments.
    pub comments: u64,
    /// Shares.
    pub shares: u64,
    /// Saves.
    pub saves: u64,
    /// Unique accounts reached.
    pub reach: u64,
    /// Total impressions.
    pub impressions: u64,
}

impl PostMetrics {
    /// Likes, comments, saves and shares summed.
    pub fn total_engagement(&self) -> u64 {
        total_engagement(self.likes, self.comments, self.saves, self.shares)
    }
}

/// A post together with its most recent metrics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedPost {
    /// Post record.
    pub post: PostRecord,
    /// Latest measurement.
    pub metrics: PostMetrics,
}

/// Persistence boundary of the analytics collaborator.
///
/// Writes are upserts; reads never fail on an empty store.
pub trait MetricsStore {
    /// Store an account snapshot, replacing any snapshot from the same UTC day.
    fn store_snapshot(&mut self, snapshot: AccountSnapshot) -> CarouselResult<()>;
    /// Store or replace a post by id.
    fn store_post(&mut self, post: PostRecord) -> CarouselResult<()>;
    /// Store or replace metrics keyed by `(post_id, measured_at)`.
    fn store_metrics(&mut self, metrics: PostMetrics) -> CarouselResult<()>;
    /// Most recently captured snapshot.
    fn latest_account_snapshot(&self) -> CarouselResult<Option<AccountSnapshot>>;
    /// Posts published at or after `since`, ranked by the total engagement of their latest
    /// metrics (descending, ties by post id). Posts without metrics are omitted.
    fn top_posts(&self, since: i64, limit: usize) -> CarouselResult<Vec<RankedPost>>;
}

/// [`MetricsStore`] held in ordered maps.
#[derive(Clone, Debug, Default)]
pub struct InMemoryMetricsStore {
    snapshots: BTreeMap<i64, AccountSnapshot>,
    posts: BTreeMap<String, PostRecord>,
    metrics: BTreeMap<(String, i64), PostMetrics>,
}

impl InMemoryMetricsStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn latest_metrics(&self, post_id: &str) -> Option<&PostMetrics> {
        self.metrics
            .range((post_id.to_string(), i64::MIN)..=(post_id.to_string(), i64::MAX))
            .next_back()
            .map(|(_, m)| m)
    }
}

impl MetricsStore for InMemoryMetricsStore {
    fn store_snapshot(&mut self, snapshot: AccountSnapshot) -> CarouselResult<()> {
        let day = snapshot.captured_at.div_euclid(SECONDS_PER_DAY);
        self.snapshots.insert(day, snapshot);
        Ok(())
    }

    fn store_post(&mut self, post: PostRecord) -> CarouselResult<()> {
        self.posts.insert(post.post_id.clone(), post);
        Ok(())
    }

    fn store_metrics(&mut self, metrics: PostMetrics) -> CarouselResult<()> {
        self.metrics
            .insert((metrics.post_id.clone(), metrics.measured_at), metrics);
        Ok(())
    }

    fn latest_account_snapshot(&self) -> CarouselResult<Option<AccountSnapshot>> {
        Ok(self
            .snapshots
            .values()
            .max_by_key(|s| s.captured_at)
            .cloned())
    }

    fn top_posts(&self, since: i64, limit: usize) -> CarouselResult<Vec<RankedPost>> {
        let mut ranked: Vec<RankedPost> = self
            .posts
            .values()
            .filter(|p| p.posted_at >= since)
            .filter_map(|p| {
                self.latest_metrics(&p.post_id).map(|m| RankedPost {
                    post: p.clone(),
                    metrics: m.clone(),
                })
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.metrics
                .total_engagement()
                .cmp(&a.metrics.total_engagement())
                .then_with(|| a.post.post_id.cmp(&b.post.post_id))
        });
        ranked.truncate(limit);
        Ok(ranked)
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn percent_of(part: u64, reach: u64) -> f64 {
    if reach == 0 {
        return 0.0;
    }
    round2(part as f64 / reach as f64 * 100.0)
}

/// Likes as a percentage of reach, two decimals.
pub fn engagement_rate(likes: u64, reach: u64) -> f64 {
    percent_of(likes, reach)
}

/// Saves as a percentage of reach, two decimals.
pub fn save_rate(saves: u64, reach: u64) -> f64 {
    percent_of(saves, reach)
}

/// Comments as a percentage of reach, two decimals.
pub fn comment_rate(comments: u64, reach: u64) -> f64 {
    percent_of(comments, reach)
}

/// Sum of the four interaction counters.
pub fn total_engagement(likes: u64, comments: u64, saves: u64, shares: u64) -> u64 {
    likes + comments + saves + shares
}

/// Change per hour between two readings, two decimals; 0 when no time elapsed.
pub fn velocity(current: i64, previous: i64, hours: f64) -> f64 {
    if hours == 0.0 {
        return 0.0;
    }
    round2((current - previous) as f64 / hours)
}

#[cfg(test)]
#[path = "../../tests/unit/analytics/metrics.rs"]
mod tests;
