//! Bucket bookkeeping as seen through a live session.

use super::common::*;

#[test]
fn test_every_keystroke_keeps_buckets_in_sync() {
    let mut session = session_with(CONSOLE_VOCABULARY, 5);
    for c in "frame_count".chars() {
        session.append(c);
        let ranks = session.rank_index();
        assert_eq!(ranks.placed_count(), CONSOLE_VOCABULARY.len());
        for id in 0..CONSOLE_VOCABULARY.len() {
            let d = session.distance_of(id).unwrap();
            let slot = ranks.slot(id).expect("candidate not placed");
            assert_eq!(ranks.bucket(d)[slot], id);
        }
    }
}

#[test]
fn test_buckets_scan_in_distance_order() {
    let mut session = session_with(SCENARIO_TOKENS, 4);
    type_query(&mut session, "wan");

    let order: Vec<u32> = session
        .rank_index()
        .scan_ascending(SCENARIO_TOKENS.len())
        .map(|id| session.distance_of(id).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] <= w[1]), "{:?}", order);
}

#[test]
fn test_clear_token_pool_empties_buckets() {
    let mut session = session_with(SCENARIO_TOKENS, 4);
    type_query(&mut session, "ren");
    session.clear_token_pool();

    assert_eq!(session.rank_index().placed_count(), 0);
    assert_eq!(session.rank_index().bucket_count(), 0);
    assert_eq!(session.rank_index().scan_ascending(4).count(), 0);
}
