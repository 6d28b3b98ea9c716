//! Seek properties of the player over a realistic session

use vtrec::session::EventHandler;
use vtrec::{Location, Message, Player, TerminalOptions};

use crate::helpers::{full_state, screen_text, shell_session};

fn loaded() -> Player {
    Player::from_events(shell_session().into_events())
}

/// Every reachable location: each byte of each output, resizes once.
fn locations(player: &Player) -> Vec<(isize, isize)> {
    let mut out = Vec::new();
    for (i, event) in player.events().iter().enumerate() {
        match &event.message {
            Message::Output { data } if data.is_empty() => out.push((i as isize, -1)),
            Message::Output { data } => {
                out.extend((0..data.len()).map(|o| (i as isize, o as isize)));
            }
            Message::Resize { .. } => out.push((i as isize, 0)),
        }
    }
    out
}

#[test]
fn backward_seek_equals_direct_seek() {
    let reference = loaded();
    let targets = locations(&reference);

    // Sample rather than test every pair to keep the test fast.
    for &(index, offset) in targets.iter().step_by(7) {
        let direct = loaded();
        direct.goto(0, 0);
        direct.goto(index, offset);
        let expected = direct.view(full_state);

        // `loaded` sits at the end, so this is a backward seek.
        let seeked = loaded();
        seeked.goto(index, offset);
        assert_eq!(seeked.view(full_state), expected, "at {}:{}", index, offset);
        assert_eq!(seeked.location(), direct.location());
    }
}

#[test]
fn stepping_forward_one_byte_at_a_time_matches_full_replay() {
    let stepped = loaded();
    stepped.goto(0, 0);
    for (index, offset) in locations(&stepped) {
        stepped.goto(index, offset);
    }

    let full = loaded();
    assert_eq!(stepped.view(full_state), full.view(full_state));
}

#[test]
fn goto_twice_is_idempotent() {
    let player = loaded();
    for &(index, offset) in &[(1, 2), (3, -1), (6, 5), (-1, -1)] {
        player.goto(index, offset);
        let once = player.view(full_state);
        let location = player.location();
        player.goto(index, offset);
        assert_eq!(player.view(full_state), once);
        assert_eq!(player.location(), location);
    }
}

#[test]
fn locations_are_clamped() {
    let player = loaded();
    let last = player.len() - 1;

    player.goto(isize::MAX, isize::MAX);
    assert_eq!(player.location().index, last);

    player.goto(isize::MIN / 2, 0);
    assert_eq!(player.location(), Location { index: 0, offset: 0 });
}

#[test]
fn empty_output_sits_before_its_payload() {
    let player = loaded();
    let empty = player
        .events()
        .iter()
        .position(|e| e.message.data() == Some(&[][..]))
        .unwrap();

    player.goto(empty as isize, 3);
    assert_eq!(
        player.location(),
        Location {
            index: empty,
            offset: -1
        }
    );
}

#[test]
fn alt_screen_program_is_seekable() {
    let player = loaded();
    player.goto(6, -1);
    assert!(player.is_alt_mode());
    assert_eq!(player.view(screen_text), "~\n~\n~");

    player.goto(8, -1);
    assert!(!player.is_alt_mode());
    player.goto(6, -1);
    assert!(player.is_alt_mode());
}

#[test]
fn buffered_events_do_not_disturb_a_seek() {
    let player = loaded();
    player.acquire();
    player.goto(2, -1);
    let before = player.view(full_state);

    player
        .process(vtrec::Event::now(Message::output("late output")))
        .unwrap();
    player.goto(2, -1);
    assert_eq!(player.view(full_state), before);
    assert_eq!(player.len(), shell_session().events().len());

    player.release();
    assert_eq!(player.len(), shell_session().events().len() + 1);
    assert!(player.view(screen_text).ends_with("$ exit"));

    player.goto(-1, -1);
    assert!(player.view(screen_text).ends_with("late output"));
}

#[test]
fn options_survive_replay_from_start() {
    let player = Player::new(TerminalOptions::new(8, 2).without_history());
    for event in vtrec::Simulator::new()
        .add("1\r\n2\r\n3\r\n4")
        .into_events()
    {
        player.process(event).unwrap();
    }
    player.goto(0, 0);
    player.goto(-1, -1);
    assert!(player.view(|t| t.history().is_empty()));
    assert_eq!(player.view(screen_text), "3\n4");
}
