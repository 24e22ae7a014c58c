use bluff_bomb::cards::Card;
use bluff_bomb::challenge::{play_is_correct, resolve, BombOutcome, SurviveCounter};
use bluff_bomb::deck::Deck;
use bluff_bomb::player::PlayerId;
use bluff_bomb::rng::{ScriptedRandom, SeededRandom};
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    prop_oneof![Just(Card::Sun), Just(Card::Star), Just(Card::Moon), Just(Card::Magic)]
}

fn any_focus() -> impl Strategy<Value = Card> {
    prop_oneof![Just(Card::Sun), Just(Card::Star), Just(Card::Moon)]
}

proptest! {
    #[test]
    fn play_is_correct_iff_nonempty_and_all_match(
        play in prop::collection::vec(any_card(), 0..=3),
        focus in any_focus(),
    ) {
        let expected = !play.is_empty() && play.iter().all(|&c| c == focus || c == Card::Magic);
        prop_assert_eq!(play_is_correct(&play, focus), expected);
    }

    #[test]
    fn wrong_side_takes_the_risk(
        play in prop::collection::vec(any_card(), 0..=3),
        focus in any_focus(),
    ) {
        let (q, a) = (PlayerId::new(1), PlayerId::new(0));
        let mut counter = SurviveCounter::new();
        let mut rng = ScriptedRandom::constant(1);
        let res = resolve(q, a, Some(play.as_slice()), focus, &mut counter, &mut rng);
        let expected = if play_is_correct(&play, focus) { q } else { a };
        prop_assert_eq!(res.at_fault, expected);
        prop_assert_eq!(counter.get(expected), 1);
    }

    #[test]
    fn survival_counts_never_pass_two(
        risks in prop::collection::vec((0usize..4, 0u32..3), 1..60),
    ) {
        let mut counter = SurviveCounter::new();
        for (seat, roll) in risks {
            let id = PlayerId::new(seat);
            let before = counter.get(id);
            let outcome = counter.risk(id, &mut ScriptedRandom::constant(roll));
            match outcome {
                BombOutcome::Exploded { certain } => {
                    prop_assert_eq!(certain, before == 2);
                    prop_assert_eq!(counter.get(id), 0);
                }
                BombOutcome::Survived { survivals } => {
                    prop_assert!(before < 2);
                    prop_assert_eq!(survivals, before + 1);
                }
            }
            prop_assert!(counter.get(id) <= 2);
        }
    }

    #[test]
    fn reset_deck_always_holds_the_full_multiset(seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.reset(&mut SeededRandom::new(seed));
        prop_assert_eq!(deck.len(), 20);
        prop_assert_eq!(deck.count(Card::Sun), 6);
        prop_assert_eq!(deck.count(Card::Star), 6);
        prop_assert_eq!(deck.count(Card::Moon), 6);
        prop_assert_eq!(deck.count(Card::Magic), 2);
    }
}
