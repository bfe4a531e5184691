use crate::mvi::Reducer;
use crate::scores::intent::ScoresIntent;
use crate::scores::state::{Boards, HighScore, MAX_SCORES_PER_BOARD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoresEffect {
    /// Persist the boards.
    Save,
}

pub struct ScoresReducer;

impl Reducer for ScoresReducer {
    type State = Boards;
    type Intent = ScoresIntent;
    type Effect = ScoresEffect;
    type Context<'a> = ();

    fn reduce(
        state: Self::State,
        intent: Self::Intent,
        _ctx: Self::Context<'_>,
    ) -> (Self::State, Vec<Self::Effect>) {
        let mut state = state;
        match intent {
            ScoresIntent::AddScore {
                level,
                score,
                name,
                date,
            } => {
                let board = state.board_mut(level);
                board.push(HighScore { score, name, date });
                // Ascending by score; equal scores rank the newer entry
                // first.
                board.sort_by(|a, b| a.score.cmp(&b.score).then(b.date.cmp(&a.date)));
                board.truncate(MAX_SCORES_PER_BOARD);
                (state, vec![ScoresEffect::Save])
            }
        }
    }
}
