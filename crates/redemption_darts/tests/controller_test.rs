//! Tests for the turn controller and console front end.

use redemption_darts::{run_console, TurnController, TurnError, TurnEvent};
use std::io::Cursor;

fn controller(players: &[&str]) -> TurnController {
    let mut controller = TurnController::default();
    for name in players {
        controller.add_player(name).expect("Valid name");
    }
    controller
}

/// Submits a list of throws and returns the event of each one.
fn throw_all(controller: &mut TurnController, throws: &[i32]) -> Vec<TurnEvent> {
    throws
        .iter()
        .map(|&points| *controller.submit(points).expect("Valid throw").event())
        .collect()
}

#[test]
fn test_full_game_with_overtime() {
    let mut c = controller(&["A", "B", "C"]);

    // Round one: A 200, B 250, C 250
    throw_all(&mut c, &[200, 250, 250]);
    assert_eq!(c.current_player(), Some("A"));

    // A checks out, B falls short, C ties
    let events = throw_all(&mut c, &[101, 10, 51]);
    assert_eq!(
        events,
        vec![
            TurnEvent::RedemptionStarted,
            TurnEvent::RedemptionShot,
            TurnEvent::OvertimeStarted
        ]
    );
    assert_eq!(c.status(), "Overtime in progress! Target = 401. Players = C, A");
    assert_eq!(c.current_player(), Some("C"));
    assert!(!c.is_over());

    // Overtime: C reaches 401, A misses the redemption
    let report = c.submit(100).expect("Valid throw");
    assert_eq!(report.status(), "C reached 401 in overtime! Redemption for others...");
    assert_eq!(c.current_player(), Some("A"));

    let report = c.submit(20).expect("Valid throw");
    assert_eq!(*report.event(), TurnEvent::WinnerDeclared);
    assert_eq!(report.status(), "Final Winner: C. Game Over.");
    assert!(c.is_over());

    let report = c.submit(60).expect("Game over is reported, not rejected");
    assert_eq!(*report.event(), TurnEvent::GameOver);
    assert_eq!(report.status(), "Game over. C was the final winner.");
}

#[test]
fn test_lone_player_wins_immediately() {
    let mut c = controller(&["Solo"]);
    let report = c.submit(301).expect("Valid throw");
    assert_eq!(*report.event(), TurnEvent::WinnerDeclared);
    assert_eq!(report.status(), "Final Winner: Solo. Game Over.");
    assert!(c.is_over());
}

#[test]
fn test_scoreboard_after_overtime_drops_losers() {
    let mut c = controller(&["A", "B", "C"]);
    throw_all(&mut c, &[300, 300, 250, 1, 1, 1]);

    // A checked out, B tied, C fell short

    assert_eq!(
        c.scoreboard(),
        vec![("B".to_string(), 301), ("A".to_string(), 301)]
    );
    assert_eq!(c.game().score("C"), Some(251));
}

#[test]
fn test_duplicate_player_not_added_twice() {
    let mut c = TurnController::default();
    assert_eq!(c.add_player("Alice"), Ok(true));
    assert_eq!(c.add_player("Alice"), Ok(false));
    assert!(matches!(c.add_player(""), Err(TurnError::Game(_))));
    assert_eq!(c.game().players().len(), 1);
}

#[test]
fn test_console_plays_to_completion() {
    let mut c = controller(&["Alice", "Bob"]);
    let input = Cursor::new("301\nnonsense\n");
    let mut output = Vec::new();

    run_console(&mut c, input, &mut output).expect("Console runs");

    let text = String::from_utf8(output).expect("UTF-8 output");
    assert!(text.contains("Alice reached 301! Redemption for others..."));
    assert!(text.contains("Final Winner: Alice. Game Over."));
    assert!(c.is_over());
    assert_eq!(c.game().score("Bob"), Some(0));
}

#[test]
fn test_console_quit_stops_early() {
    let mut c = controller(&["Alice", "Bob"]);
    let input = Cursor::new("60\nquit\n100\n");
    let mut output = Vec::new();

    run_console(&mut c, input, &mut output).expect("Console runs");

    assert_eq!(c.game().score("Alice"), Some(60));
    assert_eq!(c.game().score("Bob"), Some(0));
    assert!(!c.is_over());
}
