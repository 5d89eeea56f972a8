//! Banding never overestimates, never lets a bound crowd out a closer token,
//! and a band wide enough is no band at all.

use super::oracles::oracle_osa;
use crate::common::{canonical, type_query_banded};
use crate::{pool_strategy, query_strategy};
use proptest::prelude::*;
use typeahead::{contracts, exact_distance, Autocomplete, Band, Estimate};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_banded_distance_is_lower_bound(
        pool in pool_strategy(),
        query in query_strategy(),
        tau in 0u32..4,
    ) {
        let mut session = Autocomplete::with_tokens(4, &pool);
        type_query_banded(&mut session, &query, Band::Limit(tau));

        for (id, token) in pool.iter().enumerate() {
            let estimate = session.estimate_of(id).unwrap();
            let exact = oracle_osa(token, &query);
            prop_assert!(estimate.value() <= exact, "{:?} vs {:?}: {:?} > {}", token, query, estimate, exact);
            if estimate.is_exact() {
                prop_assert_eq!(estimate.value(), exact);
            }
        }
        prop_assert_eq!(contracts::validate_rank_index(&session), Ok(()));
    }

    /// Tokens and queries are at most 8 characters, so a band of 8 prunes nothing.
    #[test]
    fn prop_wide_band_is_exact(pool in pool_strategy(), query in query_strategy()) {
        let mut session = Autocomplete::with_tokens(4, &pool);
        type_query_banded(&mut session, &query, Band::Limit(8));

        for (id, token) in pool.iter().enumerate() {
            prop_assert_eq!(session.estimate_of(id), Some(Estimate::Exact(oracle_osa(token, &query))));
        }
    }

    #[test]
    fn prop_banded_full_ranking_unchanged(
        pool in pool_strategy(),
        query in query_strategy(),
        tau in 0u32..4,
    ) {
        let mut banded = Autocomplete::with_tokens(pool.len(), &pool);
        type_query_banded(&mut banded, &query, Band::Limit(tau));

        let mut exact = Autocomplete::with_tokens(pool.len(), &pool);
        exact.set_query(&query);

        prop_assert_eq!(canonical(banded.suggestions()), canonical(exact.suggestions()));
    }

    /// A top-K read under a band picks tokens as close as the K closest by
    /// OSA distance, and reports exact distances for them.
    #[test]
    fn prop_banded_top_k_selects_closest(
        pool in pool_strategy(),
        query in query_strategy(),
        tau in 0u32..4,
        k in 1usize..12,
    ) {
        let mut banded = Autocomplete::with_tokens(k, &pool);
        type_query_banded(&mut banded, &query, Band::Limit(tau));
        let ranking = banded.suggestions();

        prop_assert_eq!(ranking.len(), k.min(pool.len()));
        for s in &ranking {
            prop_assert_eq!(s.distance, exact_distance(&query, &s.name));
        }

        let mut picked: Vec<u32> = ranking.iter().map(|s| oracle_osa(&s.name, &query)).collect();
        picked.sort_unstable();
        let mut closest: Vec<u32> = pool.iter().map(|t| oracle_osa(t, &query)).collect();
        closest.sort_unstable();
        closest.truncate(k);
        prop_assert_eq!(picked, closest);
    }

    #[test]
    fn prop_backspace_after_banding_is_exact(
        pool in pool_strategy(),
        query in query_strategy(),
        tau in 0u32..3,
    ) {
        let mut session = Autocomplete::with_tokens(4, &pool);
        type_query_banded(&mut session, &query, Band::Limit(tau));
        session.backspace();

        let shortened: String = {
            let mut chars: Vec<char> = query.chars().collect();
            chars.pop();
            chars.into_iter().collect()
        };
        for (id, token) in pool.iter().enumerate() {
            prop_assert_eq!(session.estimate_of(id), Some(Estimate::Exact(oracle_osa(token, &shortened))));
        }
    }
}
