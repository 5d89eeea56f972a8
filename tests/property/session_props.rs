//! Session-level properties: edit sequences, backspace, and top-K selection.

use super::oracles::oracle_osa;
use crate::common::{assert_session_well_formed, brute_force_ranking, canonical, distances};
use crate::{pool_strategy, query_strategy, token_strategy};
use proptest::prelude::*;
use typeahead::{contracts, exact_distance, Autocomplete, Band};

/// One user-visible session operation.
#[derive(Debug, Clone)]
enum Op {
    Append(char),
    AppendBanded(char, u32),
    Backspace,
    ClearQuery,
    SetQuery(String),
    AddToken(String),
    ClearPool,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let ch = prop::sample::select(vec!['a', 'b', 'c', 'd', 'e']);
    prop_oneof![
        4 => ch.clone().prop_map(Op::Append),
        2 => (ch, 0u32..3).prop_map(|(c, tau)| Op::AppendBanded(c, tau)),
        3 => Just(Op::Backspace),
        1 => Just(Op::ClearQuery),
        1 => query_strategy().prop_map(Op::SetQuery),
        2 => token_strategy().prop_map(Op::AddToken),
        1 => Just(Op::ClearPool),
    ]
}

fn apply(session: &mut Autocomplete, op: &Op) {
    match op {
        Op::Append(c) => session.append(*c),
        Op::AppendBanded(c, tau) => session.append_banded(*c, Band::Limit(*tau)),
        Op::Backspace => session.backspace(),
        Op::ClearQuery => session.clear_query(),
        Op::SetQuery(q) => session.set_query(q),
        Op::AddToken(t) => session.add_token(t),
        Op::ClearPool => session.clear_token_pool(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Buckets, distances and bounds stay consistent across any edit sequence.
    #[test]
    fn prop_edit_sequences_keep_invariants(
        pool in pool_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut session = Autocomplete::with_tokens(4, &pool);
        for op in &ops {
            apply(&mut session, op);
            prop_assert_eq!(contracts::validate_session(&session), Ok(()), "after {:?}", op);
        }
    }

    /// Appending then backspacing restores every distance.
    #[test]
    fn prop_backspace_undoes_append(
        pool in pool_strategy(),
        query in query_strategy(),
        c in prop::sample::select(vec!['a', 'b', 'c', 'x']),
    ) {
        let mut session = Autocomplete::with_tokens(4, &pool);
        session.set_query(&query);
        let before: Vec<_> = (0..pool.len()).map(|id| session.distance_of(id)).collect();

        session.append(c);
        session.backspace();

        let after: Vec<_> = (0..pool.len()).map(|id| session.distance_of(id)).collect();
        prop_assert_eq!(session.query(), query.as_str());
        prop_assert_eq!(before, after);
    }

    /// Backspacing anything back to empty leaves every token at its length.
    #[test]
    fn prop_backspace_to_empty(pool in pool_strategy(), query in query_strategy()) {
        let mut session = Autocomplete::with_tokens(4, &pool);
        session.set_query(&query);
        for _ in 0..=query.chars().count() {
            session.backspace();
        }

        prop_assert_eq!(session.query(), "");
        for (id, token) in pool.iter().enumerate() {
            prop_assert_eq!(session.distance_of(id), Some(token.chars().count() as u32));
        }
        assert_session_well_formed(&session);
    }

    /// Clearing the query and typing it back equals `set_query` on a fresh pool.
    #[test]
    fn prop_typed_query_equals_set_query(
        pool in pool_strategy(),
        earlier in query_strategy(),
        query in query_strategy(),
    ) {
        let mut typed = Autocomplete::with_tokens(pool.len(), &pool);
        typed.set_query(&earlier);
        typed.clear_query();
        for c in query.chars() {
            typed.append(c);
        }

        let mut set = Autocomplete::with_tokens(pool.len(), &pool);
        set.set_query(&query);

        prop_assert_eq!(typed.query(), set.query());
        for id in 0..pool.len() {
            prop_assert_eq!(typed.estimate_of(id), set.estimate_of(id));
        }
        prop_assert_eq!(canonical(typed.suggestions()), canonical(set.suggestions()));
    }

    /// A token added mid-query is indistinguishable from one added up front.
    #[test]
    fn prop_add_token_catches_up(
        pool in pool_strategy(),
        query in query_strategy(),
        late in token_strategy(),
    ) {
        let mut session = Autocomplete::with_tokens(4, &pool);
        session.set_query(&query);
        session.add_token(&late);

        prop_assert_eq!(session.distance_of(pool.len()), Some(oracle_osa(&late, &query)));
        assert_session_well_formed(&session);
    }

    /// Result size is `min(k, pool)`, and every reported distance is exact.
    #[test]
    fn prop_suggestions_size_and_exactness(
        pool in pool_strategy(),
        query in query_strategy(),
        k in 0usize..15,
    ) {
        let mut session = Autocomplete::with_tokens(k, &pool);
        session.set_query(&query);

        let ranking = session.suggestions();
        prop_assert_eq!(ranking.len(), k.min(pool.len()));
        prop_assert!(ranking.windows(2).all(|w| w[0].distance <= w[1].distance));
        for s in &ranking {
            prop_assert_eq!(s.distance, exact_distance(&query, &s.name));
        }
    }

    /// When OSA and DL agree on every token, the top K distances match a brute
    /// force ranking exactly.
    #[test]
    fn prop_top_k_matches_brute_force(
        pool in pool_strategy(),
        query in query_strategy(),
        k in 1usize..8,
    ) {
        prop_assume!(pool
            .iter()
            .all(|t| oracle_osa(t, &query) == exact_distance(&query, t)));

        let mut session = Autocomplete::with_tokens(k, &pool);
        session.set_query(&query);

        let tokens: Vec<&str> = pool.iter().map(String::as_str).collect();
        let mut expected = brute_force_ranking(&tokens, &query);
        expected.truncate(k);

        prop_assert_eq!(distances(&session.suggestions()), distances(&expected));
    }

    /// Asking for the whole pool is a full exact ranking.
    #[test]
    fn prop_full_ranking_equals_brute_force(pool in pool_strategy(), query in query_strategy()) {
        let mut session = Autocomplete::with_tokens(pool.len(), &pool);
        session.set_query(&query);

        let tokens: Vec<&str> = pool.iter().map(String::as_str).collect();
        prop_assert_eq!(
            canonical(session.suggestions()),
            canonical(brute_force_ranking(&tokens, &query))
        );
    }
}
