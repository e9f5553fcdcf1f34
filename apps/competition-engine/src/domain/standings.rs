//! Win counting and head-to-head tiebreaks for completed round robin stages.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::domain::Entrant;

/// Outcome of one match as read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// `(entrant, is_winner)` per participant.
    pub participants: Vec<(Entrant, bool)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub entrant: Entrant,
    pub wins: u32,
}

/// Direct results between entrants of one stage.
#[derive(Debug, Default)]
pub struct HeadToHead {
    wins_over: HashMap<(Entrant, Entrant), u32>,
}

impl HeadToHead {
    pub fn from_matches(matches: &[MatchRecord]) -> Self {
        let mut wins_over = HashMap::new();
        for m in matches {
            for (winner, _) in m.participants.iter().filter(|(_, won)| *won) {
                for (loser, _) in m.participants.iter().filter(|(_, won)| !*won) {
                    *wins_over.entry((*winner, *loser)).or_insert(0) += 1;
                }
            }
        }
        Self { wins_over }
    }

    /// How many times `a` beat `b` directly.
    pub fn wins(&self, a: Entrant, b: Entrant) -> u32 {
        self.wins_over.get(&(a, b)).copied().unwrap_or(0)
    }

    /// Pairwise tiebreak: `Less` when `a` has more direct wins over `b` than
    /// `b` over `a`, `Greater` for the reverse, `Equal` otherwise (including
    /// pairs that never met). Not transitive across cycles.
    pub fn compare(&self, a: Entrant, b: Entrant) -> Ordering {
        self.wins(b, a).cmp(&self.wins(a, b))
    }
}

/// Rank every roster entrant by wins, then head-to-head within tie groups.
///
/// `roster` order is the stable base order. Tie groups are resolved with an
/// insertion sort that moves an entrant ahead only when it strictly beats
/// its neighbour head-to-head, so cyclic groups keep a deterministic order.
pub fn rank_standings(roster: &[Entrant], matches: &[MatchRecord]) -> Vec<Standing> {
    let mut wins: HashMap<Entrant, u32> = roster.iter().map(|e| (*e, 0)).collect();
    for m in matches {
        for (entrant, won) in &m.participants {
            if *won {
                if let Some(w) = wins.get_mut(entrant) {
                    *w += 1;
                }
            }
        }
    }

    let mut standings: Vec<Standing> = roster
        .iter()
        .map(|e| Standing {
            entrant: *e,
            wins: wins.get(e).copied().unwrap_or(0),
        })
        .collect();
    standings.sort_by(|a, b| b.wins.cmp(&a.wins));

    let h2h = HeadToHead::from_matches(matches);
    let mut start = 0;
    while start < standings.len() {
        let mut end = start + 1;
        while end < standings.len() && standings[end].wins == standings[start].wins {
            end += 1;
        }
        settle_tie_group(&mut standings[start..end], &h2h);
        start = end;
    }
    standings
}

fn settle_tie_group(group: &mut [Standing], h2h: &HeadToHead) {
    for i in 1..group.len() {
        let mut j = i;
        while j > 0 && h2h.compare(group[j].entrant, group[j - 1].entrant) == Ordering::Less {
            group.swap(j, j - 1);
            j -= 1;
        }
    }
}
