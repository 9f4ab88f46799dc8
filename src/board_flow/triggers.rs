//! Named square-trigger surface over the move-attempt path.
//!
//! Each board square has a discrete named trigger; a recognized name drives
//! selection or a move attempt against the director. Recognition itself
//! (voice, UI, network) lives outside this crate.

use crate::board_flow::director::GameDirector;
use crate::errors::{GameError, GameResult};
use crate::game_state::history::MoveRecord;
use crate::utils::algebraic::parse_square;

/// What a square trigger ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    Selected { moves: usize },
    Deselected,
    Moved(MoveRecord),
}

/// Dispatch one named square trigger ("a1" through "h8").
///
/// With nothing selected the trigger selects; triggering the selected square
/// deselects; triggering another own piece reselects; anything else is a
/// move attempt.
pub fn handle_square_trigger(
    director: &mut GameDirector,
    name: &str,
) -> GameResult<TriggerOutcome> {
    let location = parse_square(name).ok_or_else(|| GameError::UnknownTrigger {
        name: name.to_owned(),
    })?;

    let selected = director
        .selection()
        .map(|s| director.board().piece(s.piece).location);

    match selected {
        None => {
            let selection = director.select(location)?;
            Ok(TriggerOutcome::Selected {
                moves: selection.destinations.len(),
            })
        }
        Some(current) if current == location => {
            director.deselect();
            Ok(TriggerOutcome::Deselected)
        }
        Some(_) => {
            if director.board().color_at(location) == Some(director.board().side_to_move()) {
                let selection = director.select(location)?;
                return Ok(TriggerOutcome::Selected {
                    moves: selection.destinations.len(),
                });
            }
            director.try_move(location).map(TriggerOutcome::Moved)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_are_structured_errors() {
        let mut director = GameDirector::new_game();
        let err = handle_square_trigger(&mut director, "j9").unwrap_err();
        assert_eq!(
            err,
            GameError::UnknownTrigger {
                name: "j9".to_owned()
            }
        );
    }

    #[test]
    fn select_then_move_through_triggers() {
        let mut director = GameDirector::new_game();

        let outcome = handle_square_trigger(&mut director, "e2").expect("e2 selects");
        assert_eq!(outcome, TriggerOutcome::Selected { moves: 2 });

        let outcome = handle_square_trigger(&mut director, "e4").expect("e4 moves");
        assert!(matches!(outcome, TriggerOutcome::Moved(_)));
        assert!(director.selection().is_none());
    }

    #[test]
    fn triggering_the_selected_square_deselects() {
        let mut director = GameDirector::new_game();
        handle_square_trigger(&mut director, "e2").expect("e2 selects");
        let outcome = handle_square_trigger(&mut director, "e2").expect("e2 again");
        assert_eq!(outcome, TriggerOutcome::Deselected);
    }

    #[test]
    fn triggering_another_own_piece_reselects() {
        let mut director = GameDirector::new_game();
        handle_square_trigger(&mut director, "e2").expect("e2 selects");
        let outcome = handle_square_trigger(&mut director, "g1").expect("g1 reselects");
        assert_eq!(outcome, TriggerOutcome::Selected { moves: 2 });
    }
}
