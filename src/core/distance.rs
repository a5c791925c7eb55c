// File: src/core/distance.rs
use crate::core::store::RankTable;
use crate::core::trigram::TrigramProfile;
use crate::core::types::UNDETERMINED;

/// Cost of an input trigram the model does not know. Also the cap on what
/// a known trigram can cost in practice, since models hold about 300 entries.
pub const MAX_DIFFERENCE: usize = 300;

/// Rank-difference distance between an input profile and one language model.
/// Every profile entry contributes `|input_rank - model_rank - 1|`, or
/// [`MAX_DIFFERENCE`] when absent from the model. Lower is more similar.
pub fn distance(profile: &TrigramProfile, table: &RankTable) -> usize {
    profile
        .ranked()
        .map(|(input_rank, trigram)| match table.rank(trigram) {
            Some(model_rank) => input_rank.abs_diff(model_rank + 1),
            None => MAX_DIFFERENCE,
        })
        .sum()
}

/// Scores every candidate and sorts ascending by distance; ties keep the
/// candidates' order. No candidates yields the single `("und", 0)` entry.
pub fn rank_all_candidates<'a>(
    profile: &TrigramProfile,
    candidates: &[(&'a str, &RankTable)],
) -> Vec<(&'a str, usize)> {
    if candidates.is_empty() {
        return vec![(UNDETERMINED, 0)];
    }

    let mut ranked: Vec<(&'a str, usize)> = candidates
        .iter()
        .map(|&(language, table)| (language, distance(profile, table)))
        .collect();
    ranked.sort_by_key(|&(_, distance)| distance);
    ranked
}
