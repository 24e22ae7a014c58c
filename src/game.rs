use crate::agents::{AgentKind, AgentTable, ChallengeCall, Turn};
use crate::cards::Card;
use crate::challenge::{self, BombOutcome, SurviveCounter};
use crate::deck::Deck;
use crate::events::{GameEvent, GameHistoryEntry};
use crate::frontend::Frontend;
use crate::input::InputError;
use crate::player::{PlayError, Player, PlayerId};
use crate::rng::RandomSource;
use crate::rules::{HAND_SIZE, MAX_PLAY, PLAYER_COUNT};
use core::fmt;
use tracing::{debug, info};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("{player} made an invalid play: {source}")]
    InvalidPlay {
        player: String,
        #[source]
        source: PlayError,
    },
    #[error("no agent seated at {0}")]
    NoAgent(PlayerId),
}

/// State of the round in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Round {
    pub number: u32,
    pub focus: Card,
    /// Whether any challenge has been made this round.
    pub challenged: bool,
}

#[non_exhaustive]
pub struct Game {
    pub(crate) players: Vec<Player>,
    pub(crate) deck: Deck,
    pub(crate) survivals: SurviveCounter,
    pub(crate) agents: AgentTable,
    rng: Box<dyn RandomSource>,
    pub(crate) current: usize,
    pub(crate) round: Option<Round>,
    rounds_played: u32,
    history: Vec<GameHistoryEntry>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("current", &self.current)
            .field("round", &self.round)
            .field("survivals", &self.survivals)
            .field("agents", &self.agents)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Seat the agents and pick the first player at random.
    ///
    /// The human seat is named "Human"; bots are "Bot1", "Bot2", ... in seat order.
    pub fn new(agents: AgentTable, mut rng: Box<dyn RandomSource>) -> Self {
        let mut bots = 0;
        let players: Vec<Player> = agents
            .kinds()
            .into_iter()
            .enumerate()
            .map(|(i, kind)| {
                let name = match kind {
                    AgentKind::Human => "Human".to_string(),
                    _ => {
                        bots += 1;
                        format!("Bot{bots}")
                    }
                };
                Player::new(PlayerId::new(i), name)
            })
            .collect();
        let current = rng.below(PLAYER_COUNT as u32) as usize;
        Self {
            players,
            deck: Deck::new(),
            survivals: SurviveCounter::new(),
            agents,
            rng,
            current,
            round: None,
            rounds_played: 0,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the players
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    /// Returns the seat whose turn it is
    pub fn current(&self) -> PlayerId {
        PlayerId::new(self.current)
    }

    /// Move the turn pointer; out-of-table seats are ignored.
    pub fn set_current(&mut self, id: PlayerId) {
        if id.index() < self.players.len() {
            self.current = id.index();
        }
    }

    pub fn round(&self) -> Option<Round> {
        self.round
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn agents(&self) -> &AgentTable {
        &self.agents
    }

    /// Bomb risks `id` has survived since their counter last reset.
    pub fn survivals(&self, id: PlayerId) -> u8 {
        self.survivals.get(id)
    }

    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }

    /// Alive players still holding cards.
    pub fn ready_count(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    pub fn first_alive(&self) -> Option<PlayerId> {
        self.players.iter().find(|p| p.is_alive()).map(Player::id)
    }

    /// Next seat after `seat` (wrapping, `seat` itself last) that can act.
    pub fn next_ready_after(&self, seat: PlayerId) -> Option<PlayerId> {
        self.next_ready_from(seat.index()).map(PlayerId::new)
    }

    fn next_ready_from(&self, seat: usize) -> Option<usize> {
        let n = self.players.len();
        (1..=n).map(|i| (seat + i) % n).find(|&i| self.players[i].can_act())
    }

    pub fn history(&self) -> &[GameHistoryEntry] {
        &self.history
    }

    pub fn history_recent(&self, n: usize) -> Vec<GameHistoryEntry> {
        if n == 0 {
            return Vec::new();
        }
        let start = self.history.len().saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn round_number(&self) -> u32 {
        self.round.map(|r| r.number).unwrap_or(0)
    }

    fn emit(&mut self, frontend: &mut dyn Frontend, event: GameEvent) {
        let round = self.round_number();
        debug!(round, kind = event.label(), ?event, "game event");
        frontend.show(&self.players, &event);
        self.history.push(GameHistoryEntry { round, event });
    }

    /// Play whole rounds until at most one player can be dealt in.
    ///
    /// Returns the first player still alive, if any.
    pub fn run(&mut self, frontend: &mut dyn Frontend) -> Result<Option<PlayerId>, GameError> {
        info!(agents = ?self.agents, first = self.current, "game starting");
        self.deal(frontend);
        let first = self.current();
        self.emit(frontend, GameEvent::FirstPlayer { player: first });

        while self.ready_count() > 1 {
            let focus = self.draw_focus();
            self.play_round(focus, frontend)?;
            self.deal(frontend);
        }

        let winner = self.first_alive();
        info!(winner = ?winner, rounds = self.rounds_played, "game over");
        self.emit(frontend, GameEvent::Winner { player: winner });
        Ok(winner)
    }

    /// A uniformly random focus card; never Magic.
    pub fn draw_focus(&mut self) -> Card {
        let i = self.rng.below(Card::FOCUS.len() as u32) as usize;
        Card::FOCUS[i]
    }

    /// Reshuffle the full deck and deal a fresh hand to every alive player.
    ///
    /// Recorded plays from the previous round are forgotten.
    pub fn deal(&mut self, frontend: &mut dyn Frontend) {
        self.deck.reset(self.rng.as_mut());
        for p in &mut self.players {
            p.clear_last_play();
            if p.is_alive() {
                p.set_hand(self.deck.deal(HAND_SIZE));
            }
        }
        debug!(left = self.deck.len(), "dealt hands");
        self.emit(frontend, GameEvent::HandsDealt);
    }

    pub fn start_round(&mut self, focus: Card, frontend: &mut dyn Frontend) {
        self.rounds_played += 1;
        let number = self.rounds_played;
        self.round = Some(Round { number, focus, challenged: false });
        info!(round = number, focus = %focus, alive = self.alive_count(), "round started");
        self.emit(frontend, GameEvent::RoundStarted { round: number, focus });
    }

    /// Start a round with `focus` and step it until it ends.
    pub fn play_round(
        &mut self,
        focus: Card,
        frontend: &mut dyn Frontend,
    ) -> Result<(), GameError> {
        self.start_round(focus, frontend);
        while !self.step(frontend)? {}
        let round = self.round_number();
        self.emit(frontend, GameEvent::RoundOver { round });
        Ok(())
    }

    /// Advance the round by one turn. Returns `true` once the round is over.
    ///
    /// A turn is: skip the current seat if it cannot act, otherwise take its
    /// hidden play, let the next ready player decide whether to question it,
    /// apply the forced question of a two-player endgame, then pass the turn.
    pub fn step(&mut self, frontend: &mut dyn Frontend) -> Result<bool, GameError> {
        let Some(round) = self.round else {
            return Ok(true);
        };
        if self.ready_count() <= 1 {
            debug!(round = round.number, "nobody left to act");
            return Ok(true);
        }

        let cur = self.current;
        if !self.players[cur].can_act() {
            return Ok(match self.next_ready_from(cur) {
                Some(next) => {
                    debug!(from = cur, to = next, "skipping seat");
                    self.current = next;
                    false
                }
                None => true,
            });
        }

        let count = self.take_turn(cur, round.focus, frontend)?;

        let Some(next) = self.next_ready_from(cur) else {
            return Ok(true);
        };
        if self.wants_challenge(next, cur, count, round.focus, frontend)? {
            self.resolve_challenge(next, cur, false, round.focus, frontend);
            return Ok(true);
        }
        self.emit(frontend, GameEvent::ChallengeDeclined { player: PlayerId::new(next) });

        let challenged = self.round.map(|r| r.challenged).unwrap_or(false);
        if !challenged && self.alive_count() == 2 {
            let Some(questioner) = self.next_ready_from(self.current) else {
                return Ok(true);
            };
            if self.players[self.current].hand().is_empty() {
                let accused = self.current;
                self.resolve_challenge(questioner, accused, true, round.focus, frontend);
                return Ok(true);
            }
        }

        match self.next_ready_from(self.current) {
            Some(next) => {
                self.current = next;
                Ok(false)
            }
            None => Ok(true),
        }
    }

    fn take_turn(
        &mut self,
        cur: usize,
        focus: Card,
        frontend: &mut dyn Frontend,
    ) -> Result<usize, GameError> {
        let seat = PlayerId::new(cur);
        let hand = self.players[cur].hand().to_vec();
        let turn = Turn { seat, hand: &hand, focus, max_cards: MAX_PLAY.min(hand.len()) };
        let agent = self.agents.agent_mut(seat).ok_or(GameError::NoAgent(seat))?;
        let picks = agent.choose_play(&turn, self.rng.as_mut(), frontend)?;
        let count = match self.players[cur].play(&picks) {
            Ok(played) => played.len(),
            Err(source) => {
                let player = self.players[cur].name().to_string();
                return Err(GameError::InvalidPlay { player, source });
            }
        };
        debug!(seat = cur, count, left = self.players[cur].hand().len(), "hidden play");
        self.emit(frontend, GameEvent::Played { player: seat, count });
        Ok(count)
    }

    fn wants_challenge(
        &mut self,
        questioner: usize,
        accused: usize,
        count: usize,
        focus: Card,
        frontend: &mut dyn Frontend,
    ) -> Result<bool, GameError> {
        let seat = PlayerId::new(questioner);
        let call =
            ChallengeCall { seat, accused: &self.players[accused], cards_played: count, focus };
        let agent = self.agents.agent_mut(seat).ok_or(GameError::NoAgent(seat))?;
        Ok(agent.decide_challenge(&call, self.rng.as_mut(), frontend)?)
    }

    /// Reveal `accused`'s recorded play, judge it, and run the bomb check on
    /// whoever was wrong. The turn passes to the challenger.
    fn resolve_challenge(
        &mut self,
        challenger: usize,
        accused: usize,
        forced: bool,
        focus: Card,
        frontend: &mut dyn Frontend,
    ) {
        if let Some(r) = self.round.as_mut() {
            r.challenged = true;
        }
        let (q, a) = (PlayerId::new(challenger), PlayerId::new(accused));
        self.emit(frontend, GameEvent::Challenged { challenger: q, accused: a, forced });

        let revealed = self.players[accused].last_play.clone();
        self.emit(frontend, GameEvent::Revealed { player: a, cards: revealed.clone() });

        let res = challenge::resolve(
            q,
            a,
            revealed.as_deref(),
            focus,
            &mut self.survivals,
            self.rng.as_mut(),
        );
        self.emit(
            frontend,
            GameEvent::Verdict { challenger: q, accused: a, correct: res.correct_play },
        );

        match res.outcome {
            BombOutcome::Exploded { certain } => {
                self.players[res.at_fault.index()].eliminate();
                self.emit(frontend, GameEvent::BombExploded { player: res.at_fault, certain });
            }
            BombOutcome::Survived { survivals } => {
                self.emit(frontend, GameEvent::BombSurvived { player: res.at_fault, survivals });
            }
        }
        info!(
            challenger = %self.players[challenger].name(),
            accused = %self.players[accused].name(),
            forced,
            correct = res.correct_play,
            eliminated = res.outcome.exploded(),
            "challenge resolved"
        );

        self.current = self
            .players
            .iter()
            .position(|p| p.id() == q)
            .or_else(|| self.next_ready_from(self.players.len() - 1))
            .unwrap_or(0);
    }
}
