//! Property tests: arbitrary input sequences never break the engine.

use proptest::prelude::*;
use tallied_audit::ActionType;
use tallied_tictactoe::{GameEngine, GameStatus, rules};

#[derive(Debug, Clone)]
enum Command {
    Move(i64),
    Reset,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        8 => (-3_i64..12).prop_map(Command::Move),
        1 => Just(Command::Reset),
    ]
}

proptest! {
    #[test]
    fn engine_invariants_hold(commands in prop::collection::vec(command(), 0..60)) {
        let mut engine = GameEngine::new();

        for command in commands {
            let before = engine.snapshot();
            let trail_before = engine.audit_trail().len();

            match command {
                Command::Move(index) => {
                    let valid = engine.validate_move(index);
                    let accepted = engine.make_move(index);
                    prop_assert_eq!(valid, accepted);

                    let after = engine.snapshot();
                    if accepted {
                        prop_assert_eq!(before.board().diff(after.board()).len(), 1);
                        prop_assert_eq!(engine.audit_trail().len(), trail_before + 1);
                        if after.status() == GameStatus::InProgress {
                            let next = before.current_player().opponent();
                            prop_assert_eq!(after.current_player(), next);
                        } else {
                            prop_assert_eq!(after.current_player(), before.current_player());
                        }
                    } else {
                        prop_assert_eq!(&after, &before);
                        prop_assert_eq!(engine.audit_trail().len(), trail_before);
                    }
                }
                Command::Reset => {
                    engine.reset(None);
                    prop_assert_eq!(engine.audit_trail().len(), trail_before + 1);
                    prop_assert_eq!(engine.scores(), *before.scores());
                }
            }

            let after = engine.snapshot();
            prop_assert_eq!(after.status(), rules::evaluate(after.board()));
            prop_assert!(after.scores().x_wins() >= before.scores().x_wins());
            prop_assert!(after.scores().o_wins() >= before.scores().o_wins());
            prop_assert!(after.scores().draws() >= before.scores().draws());
        }

        prop_assert!(engine.audit_log().entries_of(ActionType::Error).is_empty());
    }
}
