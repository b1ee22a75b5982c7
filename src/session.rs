//! Fixed-step round driver
//!
//! Advances one play-through from the first question to game over. Input and
//! elapsed time come from the caller; nothing here renders or polls devices.

use crate::consts::{NOTIFICATION_SECS, OPTION_COUNT};
use crate::highscores::Leaderboard;
use crate::persistence::ScoreStore;
use crate::quiz::{Question, QuestionBank, QuizDraw, QuizSelector};
use crate::scoring::{AnswerOutcome, ScoringEngine};
use crate::settings::QuizSettings;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Question on screen, clock running
    AwaitingAnswer,
    /// Answer judged, correct option revealed
    ShowingAnswer,
    /// All questions done
    GameOver,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct RoundInput {
    /// Highlight an option (0-3); may change until confirmed
    pub select: Option<usize>,
    /// Lock in the highlighted option
    pub confirm: bool,
}

/// Things that happened during a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// Player confirmed an answer
    Answered { correct: bool, points: u32 },
    /// Clock ran out before an answer was confirmed
    TimedOut,
    /// Next question is on screen (1-based)
    NextQuestion { number: usize },
    /// Round over with this final score
    Finished { score: u32 },
}

/// One play-through
#[derive(Debug, Clone)]
pub struct QuizRound {
    draw: QuizDraw,
    scoring: ScoringEngine,
    phase: RoundPhase,
    /// Position in `draw.order`
    current: usize,
    time_remaining: f32,
    selected: Option<usize>,
    last_outcome: Option<AnswerOutcome>,
    reveal_secs: f32,
    reveal_timer: f32,
    /// Points shown in the "+N" popup and its remaining lifetime
    notification: Option<(u32, f32)>,
    submitted: bool,
}

impl QuizRound {
    /// Draw a new question order and start the clock on the first question
    pub fn start(bank: &mut QuestionBank, selector: &mut QuizSelector, settings: &QuizSettings) -> Self {
        let draw = selector.draw(bank, settings.mix);
        let mut scoring = ScoringEngine::new(settings.question_time);
        scoring.reset_score();

        let phase = if draw.is_empty() {
            log::warn!("Round started with no questions");
            RoundPhase::GameOver
        } else {
            RoundPhase::AwaitingAnswer
        };
        log::info!("Round started: {} questions", draw.len());

        Self {
            draw,
            scoring,
            phase,
            current: 0,
            time_remaining: settings.question_time,
            selected: None,
            last_outcome: None,
            reveal_secs: settings.answer_reveal_secs,
            reveal_timer: 0.0,
            notification: None,
            submitted: false,
        }
    }

    /// Advance the round by `dt` seconds
    pub fn tick(&mut self, bank: &QuestionBank, input: &RoundInput, dt: f32) -> Vec<RoundEvent> {
        let mut events = Vec::new();

        if let Some((_, ttl)) = self.notification.as_mut() {
            *ttl -= dt;
        }
        if self.notification.is_some_and(|(_, ttl)| ttl <= 0.0) {
            self.notification = None;
        }

        match self.phase {
            RoundPhase::AwaitingAnswer => self.tick_question(bank, input, dt, &mut events),
            RoundPhase::ShowingAnswer => self.tick_reveal(dt, &mut events),
            RoundPhase::GameOver => {}
        }

        events
    }

    fn tick_question(
        &mut self,
        bank: &QuestionBank,
        input: &RoundInput,
        dt: f32,
        events: &mut Vec<RoundEvent>,
    ) {
        if let Some(option) = input.select.filter(|&o| o < OPTION_COUNT) {
            self.selected = Some(option);
        }

        self.time_remaining -= dt;
        if self.time_remaining <= 0.0 {
            self.selected = None;
            self.last_outcome = Some(AnswerOutcome {
                correct: false,
                points: 0,
            });
            events.push(RoundEvent::TimedOut);
            self.begin_reveal();
            return;
        }

        if input.confirm && self.selected.is_some() {
            let question = bank.question(self.draw.order[self.current]);
            let outcome = self
                .scoring
                .record_answer(question, self.selected, self.time_remaining);
            if outcome.correct {
                self.notification = Some((outcome.points, NOTIFICATION_SECS));
            }
            self.last_outcome = Some(outcome);
            events.push(RoundEvent::Answered {
                correct: outcome.correct,
                points: outcome.points,
            });
            self.begin_reveal();
        }
    }

    fn begin_reveal(&mut self) {
        self.phase = RoundPhase::ShowingAnswer;
        self.reveal_timer = self.reveal_secs;
    }

    fn tick_reveal(&mut self, dt: f32, events: &mut Vec<RoundEvent>) {
        self.reveal_timer -= dt;
        if self.reveal_timer > 0.0 {
            return;
        }

        self.current += 1;
        self.selected = None;
        self.last_outcome = None;
        if self.current >= self.draw.len() {
            self.phase = RoundPhase::GameOver;
            log::info!("Round finished with {} points", self.score());
            events.push(RoundEvent::Finished {
                score: self.score(),
            });
        } else {
            self.phase = RoundPhase::AwaitingAnswer;
            self.time_remaining = self.scoring.question_time_limit();
            events.push(RoundEvent::NextQuestion {
                number: self.current + 1,
            });
        }
    }

    /// Submit the final score once the round is over.
    /// Returns the rank achieved, or None if not over, already submitted, or not ranked.
    pub fn finish<S: ScoreStore>(&mut self, leaderboard: &mut Leaderboard<S>, name: &str) -> Option<usize> {
        if self.phase != RoundPhase::GameOver || self.submitted {
            return None;
        }
        self.submitted = true;
        leaderboard.submit_score(name, self.score())
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::GameOver
    }

    pub fn draw(&self) -> &QuizDraw {
        &self.draw
    }

    /// Number of questions in this round
    pub fn len(&self) -> usize {
        self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }

    /// 1-based number of the question on screen (None once over)
    pub fn question_number(&self) -> Option<usize> {
        (!self.is_over()).then_some(self.current + 1)
    }

    /// Catalog index of the question on screen
    pub fn current_catalog_index(&self) -> Option<usize> {
        if self.is_over() {
            None
        } else {
            self.draw.order.get(self.current).copied()
        }
    }

    pub fn current_question<'a>(&self, bank: &'a QuestionBank) -> Option<&'a Question> {
        self.current_catalog_index().map(|i| bank.question(i))
    }

    pub fn time_remaining(&self) -> f32 {
        self.time_remaining.max(0.0)
    }

    /// Remaining share of the question clock (1.0 = full, 0.0 = expired)
    pub fn time_fraction(&self) -> f32 {
        let limit = self.scoring.question_time_limit();
        if limit <= 0.0 {
            0.0
        } else {
            (self.time_remaining / limit).clamp(0.0, 1.0)
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Outcome of the question being revealed
    pub fn last_outcome(&self) -> Option<AnswerOutcome> {
        self.last_outcome
    }

    /// Points from the latest correct answer while its popup is visible
    pub fn points_notification(&self) -> Option<u32> {
        self.notification.map(|(points, _)| points)
    }

    pub fn score(&self) -> u32 {
        self.scoring.get_score()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}
