//! Front ends: where game events are shown and human decisions come from.

use crate::cards::{format_cards, Card};
use crate::console::{Console, Tone};
use crate::events::GameEvent;
use crate::input::{prompt_bounded_int, prompt_card_indices, prompt_yes_no, InputError};
use crate::player::{Player, PlayerId};

pub trait Frontend {
    /// Observe one event. `players` is the table after the event took effect.
    fn show(&mut self, players: &[Player], event: &GameEvent);

    /// Ask the human at `seat` for 1..=`max_cards` distinct 0-based hand indices.
    fn ask_play(
        &mut self,
        seat: PlayerId,
        hand: &[Card],
        max_cards: usize,
    ) -> Result<Vec<usize>, InputError>;

    /// Ask the human at `seat` whether to question `accused`'s hidden play.
    fn ask_challenge(
        &mut self,
        seat: PlayerId,
        accused: &Player,
        cards_played: usize,
    ) -> Result<bool, InputError>;
}

/// Shows nothing and has no human to ask.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentFrontend;

impl Frontend for SilentFrontend {
    fn show(&mut self, _players: &[Player], _event: &GameEvent) {}

    fn ask_play(&mut self, _: PlayerId, _: &[Card], _: usize) -> Result<Vec<usize>, InputError> {
        Err(InputError::Unavailable)
    }

    fn ask_challenge(&mut self, _: PlayerId, _: &Player, _: usize) -> Result<bool, InputError> {
        Err(InputError::Unavailable)
    }
}

/// Narrates the game as text and prompts on a [`Console`].
#[derive(Debug)]
pub struct ConsoleFrontend<C: Console> {
    console: C,
    viewer: Option<PlayerId>,
}

fn name_of(players: &[Player], id: PlayerId) -> &str {
    players.get(id.index()).map(Player::name).unwrap_or("?")
}

impl<C: Console> ConsoleFrontend<C> {
    /// `viewer` is the seat whose hand is shown after every deal.
    pub fn new(console: C, viewer: Option<PlayerId>) -> Self {
        Self { console, viewer }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    fn say(&mut self, tone: Tone, text: impl AsRef<str>) {
        self.console.say(tone, text.as_ref());
    }

    fn show_viewer_hand(&mut self, players: &[Player]) {
        let Some(p) = self.viewer.and_then(|v| players.get(v.index())) else {
            return;
        };
        if !p.is_alive() {
            return;
        }
        let line = format!("{}: {}", p.name(), format_cards(p.hand()));
        self.say(Tone::Banner, "--- Your Hand ---");
        self.say(Tone::Plain, line);
        self.say(Tone::Plain, "");
    }

    fn is_viewer(&self, id: PlayerId) -> bool {
        self.viewer == Some(id)
    }
}

impl<C: Console> Frontend for ConsoleFrontend<C> {
    fn show(&mut self, players: &[Player], event: &GameEvent) {
        match *event {
            GameEvent::HandsDealt => self.show_viewer_hand(players),
            GameEvent::FirstPlayer { player } => {
                self.say(Tone::Plain, format!("First player: {}\n", name_of(players, player)));
            }
            GameEvent::RoundStarted { focus, .. } => {
                self.say(Tone::Banner, format!("--- Round begins! Focus card: {focus} ---"));
            }
            GameEvent::Played { player, count } => {
                let name = name_of(players, player);
                let line = if self.is_viewer(player) {
                    format!("{name} played {count} card(s).")
                } else {
                    format!("{name} has played {count} card(s) (hidden).")
                };
                self.say(Tone::Hidden, line);
            }
            GameEvent::ChallengeDeclined { player } => {
                let name = name_of(players, player);
                let line = if self.is_viewer(player) {
                    format!("{name} decided NOT to question.")
                } else {
                    format!("{name} decides NOT to question.")
                };
                self.say(Tone::Plain, line);
            }
            GameEvent::Challenged { challenger, forced, .. } => {
                let name = name_of(players, challenger);
                let line = if forced {
                    format!("{name} is forced to question!")
                } else {
                    format!("{name} decides to question!")
                };
                self.say(Tone::Warning, line);
            }
            GameEvent::Revealed { player, ref cards } => {
                let shown = match cards.as_deref() {
                    Some(cs) if !cs.is_empty() => format_cards(cs),
                    _ => "(no record of played cards)".to_string(),
                };
                self.say(
                    Tone::Reveal,
                    format!("\nRevealing cards of {}: {shown}", name_of(players, player)),
                );
            }
            GameEvent::Verdict { challenger, accused, correct } => {
                let q = name_of(players, challenger);
                if correct {
                    self.say(Tone::Plain, format!("{q} was wrong to question!"));
                } else {
                    let p = name_of(players, accused);
                    let line = format!("{p} played wrongly!\n{q} was right to question!");
                    self.say(Tone::Plain, line);
                }
            }
            GameEvent::BombSurvived { player, .. } => {
                let name = name_of(players, player);
                let line = format!("Bomb did not explode this time! {name} has survived.");
                self.say(Tone::Good, line);
            }
            GameEvent::BombExploded { player, certain } => {
                let name = name_of(players, player);
                let line = if certain {
                    format!("Bomb exploded! {name} has died (3rd time bomb)!")
                } else {
                    format!("Bomb exploded! {name} has died.")
                };
                self.say(Tone::Danger, line);
            }
            GameEvent::RoundOver { .. } => {
                self.say(Tone::Banner, "\nROUND OVER re-dealing cards.\n");
            }
            GameEvent::Winner { player } => match player {
                Some(id) => {
                    let line = format!("{} wins!", name_of(players, id));
                    self.say(Tone::Winner, line);
                }
                None => self.say(Tone::Winner, "Nobody survived."),
            },
        }
    }

    fn ask_play(
        &mut self,
        _seat: PlayerId,
        hand: &[Card],
        max_cards: usize,
    ) -> Result<Vec<usize>, InputError> {
        let max = max_cards.min(hand.len()).max(1);
        let listing: Vec<String> =
            hand.iter().enumerate().map(|(i, c)| format!("{}: {c}", i + 1)).collect();
        self.say(Tone::Plain, "Your hand:");
        self.say(Tone::Plain, listing.join("  "));
        let prompt = format!("How many cards you want to play (1-{max})? ");
        let count = prompt_bounded_int(&mut self.console, &prompt, 1, max as i64)?;
        prompt_card_indices(&mut self.console, hand, count as usize)
    }

    fn ask_challenge(
        &mut self,
        _seat: PlayerId,
        accused: &Player,
        cards_played: usize,
    ) -> Result<bool, InputError> {
        let prompt =
            format!("Question previous player {} ({cards_played} card(s)) (y/n)? ", accused.name());
        prompt_yes_no(&mut self.console, &prompt)
    }
}
