use bluff_bomb::agents::AgentTable;
use bluff_bomb::cards::Card;
use bluff_bomb::frontend::SilentFrontend;
use bluff_bomb::game::Game;
use bluff_bomb::player::PlayerId;
use bluff_bomb::rng::{ScriptedRandom, SeededRandom};

fn seat(i: usize) -> PlayerId {
    PlayerId::new(i)
}

fn dealt_bots() -> Game {
    // Bots never question, bombs never explode, seat 0 starts.
    let rng = ScriptedRandom::from_fn(|bound| match bound {
        100 => 99,
        3 => 1,
        _ => 0,
    });
    let mut g = Game::new(AgentTable::all_bots(), Box::new(rng));
    g.deal(&mut SilentFrontend);
    g
}

#[test]
fn next_ready_wraps_and_skips_dead_and_empty_seats() {
    let mut g = dealt_bots();
    g.player_mut(seat(1)).unwrap().eliminate();
    g.player_mut(seat(2)).unwrap().set_hand(Vec::new());

    assert_eq!(g.next_ready_after(seat(0)), Some(seat(3)));
    assert_eq!(g.next_ready_after(seat(3)), Some(seat(0)));
    assert_eq!(g.next_ready_after(seat(1)), Some(seat(3)));
    assert_eq!(g.ready_count(), 2);
    assert_eq!(g.alive_count(), 3);
}

#[test]
fn lone_ready_player_finds_only_itself() {
    let mut g = dealt_bots();
    for i in 1..4 {
        g.player_mut(seat(i)).unwrap().set_hand(Vec::new());
    }
    assert_eq!(g.next_ready_after(seat(0)), Some(seat(0)));
    assert_eq!(g.next_ready_after(seat(2)), Some(seat(0)));
}

#[test]
fn quiet_round_passes_turns_in_seat_order() {
    let mut g = dealt_bots();
    g.start_round(Card::Star, &mut SilentFrontend);
    let mut order = Vec::new();
    for _ in 0..6 {
        order.push(g.current());
        assert!(!g.step(&mut SilentFrontend).unwrap());
    }
    let expected: Vec<PlayerId> = [0, 1, 2, 3, 0, 1].into_iter().map(seat).collect();
    assert_eq!(order, expected);
}

#[test]
fn turn_never_rests_on_a_seat_that_cannot_act() {
    for s in 0..30u64 {
        let mut g = Game::new(AgentTable::all_bots(), Box::new(SeededRandom::new(s)));
        let mut f = SilentFrontend;
        g.deal(&mut f);
        while g.ready_count() > 1 {
            let focus = g.draw_focus();
            g.start_round(focus, &mut f);
            while !g.step(&mut f).unwrap() {
                let cur = g.player(g.current()).unwrap();
                assert!(cur.can_act(), "seed {s}: turn landed on {}", cur.name());
            }
            g.deal(&mut f);
        }
        assert_eq!(g.alive_count(), 1, "seed {s}");
    }
}
