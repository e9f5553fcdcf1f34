//! Property tests for scheduling and ranking (pure domain, no DB).
//!
//! Properties tested:
//! - Circle method: N-1 rounds, everyone once per round, every pair exactly once
//! - Single elimination: feeding winners forward halves the field until one remains
//! - Standings: output is a permutation of the roster ordered by wins

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::{circle_schedule, pair_consecutive, rank_standings, Entrant, MatchRecord};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_circle_method_covers_every_pair_once(half in 1usize..=12) {
        let n = half * 2;
        let rounds = circle_schedule(n).unwrap();
        prop_assert_eq!(rounds.len(), n - 1);

        let mut seen_pairs = HashSet::new();
        for round in &rounds {
            prop_assert_eq!(round.len(), n / 2);
            let mut seen_in_round = HashSet::new();
            for &(a, b) in round {
                prop_assert!(a != b);
                prop_assert!(seen_in_round.insert(a));
                prop_assert!(seen_in_round.insert(b));
                prop_assert!(seen_pairs.insert((a.min(b), a.max(b))), "pair ({}, {}) repeated", a, b);
            }
            prop_assert_eq!(seen_in_round.len(), n);
        }
        prop_assert_eq!(seen_pairs.len(), n * (n - 1) / 2);
    }

    #[test]
    fn prop_circle_method_rejects_odd(half in 0usize..=12) {
        prop_assert!(circle_schedule(half * 2 + 1).is_err());
    }

    #[test]
    fn prop_single_elimination_halves(exp in 1u32..=6, pick_second in proptest::collection::vec(any::<bool>(), 64)) {
        let mut field: Vec<Entrant> = (0..2i64.pow(exp)).map(Entrant::Team).collect();
        let mut coin = pick_second.into_iter().cycle();
        while field.len() > 1 {
            let pairs = pair_consecutive(&field, "round").unwrap();
            prop_assert_eq!(pairs.len(), field.len() / 2);
            field = pairs
                .into_iter()
                .map(|p| if coin.next().unwrap_or(false) { p.second } else { p.first })
                .collect();
        }
        prop_assert_eq!(field.len(), 1);
    }

    #[test]
    fn prop_standings_permute_roster(
        n in 2usize..=8,
        results in proptest::collection::vec((0usize..8, 0usize..8), 0..24),
    ) {
        let roster: Vec<Entrant> = (1..=n as i64).map(Entrant::User).collect();
        let matches: Vec<MatchRecord> = results
            .into_iter()
            .filter(|(w, l)| w % n != l % n)
            .map(|(w, l)| MatchRecord {
                participants: vec![(roster[w % n], true), (roster[l % n], false)],
            })
            .collect();

        let standings = rank_standings(&roster, &matches);
        prop_assert_eq!(standings.len(), n);
        let set: HashSet<Entrant> = standings.iter().map(|s| s.entrant).collect();
        prop_assert_eq!(set.len(), n);
        for w in standings.windows(2) {
            prop_assert!(w[0].wins >= w[1].wins);
        }
        let total: u32 = standings.iter().map(|s| s.wins).sum();
        prop_assert_eq!(total as usize, matches.len());
    }
}
