use bluff_bomb::agents::AgentTable;
use bluff_bomb::cards::Card;
use bluff_bomb::console::ScriptedConsole;
use bluff_bomb::events::GameEvent;
use bluff_bomb::frontend::ConsoleFrontend;
use bluff_bomb::game::{Game, GameError};
use bluff_bomb::input::InputError;
use bluff_bomb::player::PlayerId;
use bluff_bomb::rng::ScriptedRandom;

const HUMAN: PlayerId = PlayerId::new(0);
const BOT1: PlayerId = PlayerId::new(1);
const BOT3: PlayerId = PlayerId::new(3);

/// Human table where bots never question and bombs never explode.
fn quiet_table() -> Game {
    let rng = ScriptedRandom::from_fn(|bound| match bound {
        100 => 99,
        3 => 1,
        _ => 0,
    });
    Game::new(AgentTable::standard(), Box::new(rng))
}

fn frontend(inputs: &[&str]) -> ConsoleFrontend<ScriptedConsole> {
    ConsoleFrontend::new(ScriptedConsole::new(inputs.iter().copied()), Some(HUMAN))
}

fn full() -> Vec<Card> {
    vec![Card::Sun; 5]
}

fn set_hands(g: &mut Game, hands: [Vec<Card>; 4]) {
    for (i, hand) in hands.into_iter().enumerate() {
        g.player_mut(PlayerId::new(i)).unwrap().set_hand(hand);
    }
}

fn events(g: &Game) -> Vec<GameEvent> {
    g.history().iter().map(|e| e.event.clone()).collect()
}

#[test]
fn out_of_range_index_is_rejected_without_touching_hand() {
    let mut g = quiet_table();
    assert_eq!(g.current(), HUMAN);
    set_hands(&mut g, [vec![Card::Sun, Card::Star, Card::Moon], full(), full(), full()]);
    let mut f = frontend(&["1", "5", "2"]);
    g.start_round(Card::Sun, &mut f);

    assert!(!g.step(&mut f).unwrap());

    let human = g.player(HUMAN).unwrap();
    assert_eq!(human.hand(), &[Card::Sun, Card::Moon]);
    assert_eq!(human.last_play(), Some(&[Card::Star][..]));
    assert_eq!(f.console().count("Index out of range."), 1);
    assert_eq!(f.console().count("Enter index #1: "), 2);
    assert!(f.console().saw("How many cards you want to play (1-3)? "));
    assert!(f.console().saw("Human played 1 card(s)."));
    assert_eq!(f.console().remaining_inputs(), 0);

    let evs = events(&g);
    assert!(evs.contains(&GameEvent::Played { player: HUMAN, count: 1 }));
    assert!(evs.contains(&GameEvent::ChallengeDeclined { player: BOT1 }));
    assert_eq!(g.current(), BOT1);
}

#[test]
fn duplicate_index_is_rejected_until_distinct() {
    let mut g = quiet_table();
    set_hands(&mut g, [vec![Card::Sun, Card::Star, Card::Moon], full(), full(), full()]);
    let mut f = frontend(&["2", "3", "3", "1"]);
    g.start_round(Card::Moon, &mut f);

    assert!(!g.step(&mut f).unwrap());

    let human = g.player(HUMAN).unwrap();
    assert_eq!(human.hand(), &[Card::Star]);
    assert_eq!(human.last_play(), Some(&[Card::Moon, Card::Sun][..]));
    assert_eq!(f.console().count("Index already chosen."), 1);
    assert!(events(&g).contains(&GameEvent::Played { player: HUMAN, count: 2 }));
}

#[test]
fn malformed_count_is_reprompted() {
    let mut g = quiet_table();
    set_hands(&mut g, [full(), full(), full(), full()]);
    let mut f = frontend(&["lots", "9", "1", "1"]);
    g.start_round(Card::Sun, &mut f);

    assert!(!g.step(&mut f).unwrap());
    assert_eq!(f.console().count("Try again."), 2);
    assert_eq!(g.player(HUMAN).unwrap().hand().len(), 4);
}

#[test]
fn human_questions_a_wrong_play_and_the_bomb_explodes() {
    // Every roll is 0: bots would question, bombs explode.
    let mut g = Game::new(AgentTable::standard(), Box::new(ScriptedRandom::constant(0)));
    set_hands(&mut g, [full(), full(), full(), vec![Card::Moon]]);
    g.set_current(BOT3);
    let mut f = frontend(&["y"]);
    g.start_round(Card::Sun, &mut f);

    assert!(g.step(&mut f).unwrap());

    assert!(!g.player(BOT3).unwrap().is_alive());
    assert_eq!(g.current(), HUMAN);
    let c = f.console();
    assert!(c.saw("Bot3 has played 1 card(s) (hidden)."));
    assert!(c.saw("Human decides to question!"));
    assert!(c.saw("Revealing cards of Bot3: Moon"));
    assert!(c.saw("Bot3 played wrongly!"));
    assert!(c.saw("Human was right to question!"));
    assert!(c.saw("Bomb exploded! Bot3 has died."));
}

#[test]
fn human_declines_to_question() {
    let mut g = quiet_table();
    set_hands(&mut g, [full(), full(), full(), vec![Card::Moon, Card::Star]]);
    g.set_current(BOT3);
    let mut f = frontend(&["n"]);
    g.start_round(Card::Sun, &mut f);

    assert!(!g.step(&mut f).unwrap());
    assert!(f.console().saw("Human decided NOT to question."));
    assert!(events(&g).contains(&GameEvent::ChallengeDeclined { player: HUMAN }));
    assert_eq!(g.current(), HUMAN);
}

#[test]
fn closed_input_stops_the_game_cleanly() {
    let mut g = quiet_table();
    set_hands(&mut g, [full(), full(), full(), full()]);
    let mut f = frontend(&[]);
    g.start_round(Card::Sun, &mut f);

    let err = g.step(&mut f).unwrap_err();
    assert_eq!(err, GameError::Input(InputError::Closed));
    assert_eq!(g.player(HUMAN).unwrap().hand().len(), 5);
}
