use super::*;

fn post(id: &str, posted_at: i64) -> PostRecord {
    PostRecord {
        post_id: id.to_string(),
        media_type: "CAROUSEL_ALBUM".to_string(),
        caption: format!("caption {id}"),
        posted_at,
    }
}

fn metrics(id: &str, measured_at: i64, likes: u64) -> PostMetrics {
    PostMetrics {
        post_id: id.to_string(),
        measured_at,
        likes,
        comments: 1,
        shares: 0,
        saves: 2,
        reach: 1000,
        impressions: 1500,
    }
}

#[test]
fn rates_round_to_two_decimals() {
    assert_eq!(engagement_rate(1, 3), 33.33);
    assert_eq!(save_rate(50, 1000), 5.0);
    assert_eq!(comment_rate(2, 3), 66.67);
}

#[test]
fn rates_are_zero_without_reach() {
    assert_eq!(engagement_rate(10, 0), 0.0);
    assert_eq!(save_rate(10, 0), 0.0);
    assert_eq!(comment_rate(10, 0), 0.0);
}

#[test]
fn velocity_handles_zero_hours_and_decline() {
    assert_eq!(velocity(100, 50, 0.0), 0.0);
    assert_eq!(velocity(100, 50, 3.0), 16.67);
    assert_eq!(velocity(40, 50, 4.0), -2.5);
}

#[test]
fn total_engagement_sums_counters() {
    assert_eq!(total_engagement(10, 2, 3, 4), 19);
    assert_eq!(metrics("a", 0, 10).total_engagement(), 13);
}

#[test]
fn snapshots_upsert_per_day_and_latest_wins() {
    let mut store = InMemoryMetricsStore::new();
    assert_eq!(store.latest_account_snapshot().unwrap(), None);

    let snap = |followers, captured_at| AccountSnapshot {
        followers,
        following: 10,
        media_count: 5,
        captured_at,
    };
    store.store_snapshot(snap(100, 1_000)).unwrap();
    store.store_snapshot(snap(120, 2_000)).unwrap();
    store.store_snapshot(snap(90, 86_400 + 10)).unwrap();

    assert_eq!(store.snapshots.len(), 2);
    let latest = store.latest_account_snapshot().unwrap().unwrap();
    assert_eq!(latest.followers, 90);
}

#[test]
fn top_posts_rank_by_latest_metrics() {
    let mut store = InMemoryMetricsStore::new();
    store.store_post(post("a", 100)).unwrap();
    store.store_post(post("b", 200)).unwrap();
    store.store_post(post("c", 300)).unwrap();
    store.store_post(post("old", 10)).unwrap();
    store.store_post(post("unmeasured", 400)).unwrap();

    store.store_metrics(metrics("a", 1, 500)).unwrap();
    // Latest reading of "a" is lower; ranking uses it.
    store.store_metrics(metrics("a", 5, 20)).unwrap();
    store.store_metrics(metrics("b", 5, 50)).unwrap();
    store.store_metrics(metrics("c", 5, 50)).unwrap();
    store.store_metrics(metrics("old", 5, 9_999)).unwrap();

    let top = store.top_posts(50, 10).unwrap();
    let ids: Vec<&str> = top.iter().map(|r| r.post.post_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
    assert_eq!(top[2].metrics.measured_at, 5);

    assert_eq!(store.top_posts(50, 1).unwrap().len(), 1);
}

#[test]
fn metrics_upsert_on_same_timestamp() {
    let mut store = InMemoryMetricsStore::new();
    store.store_post(post("a", 0)).unwrap();
    store.store_metrics(metrics("a", 7, 1)).unwrap();
    store.store_metrics(metrics("a", 7, 30)).unwrap();
    assert_eq!(store.metrics.len(), 1);
    assert_eq!(store.top_posts(0, 5).unwrap()[0].metrics.likes, 30);
}
