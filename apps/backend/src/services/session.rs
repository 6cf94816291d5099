//! Quiz sessions: explicit per-session records behind a lock.
//!
//! A session snapshots its cards at creation, so deck edits never affect a
//! running session. All turn operations are mode-gated.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::Mutex;
use uuid::Uuid;

use vocab_core::{check, Direction, QuizMode, WordPair};

use crate::error::{ApiError, Result};
use crate::models::{
    AnswerResponse, CardView, ChoiceResponse, CreateSessionRequest, CreateSessionResponse,
    Progress, RevealResponse, SessionSummary,
};
use crate::services::choices::build_options;

/// Default number of cards per session.
const DEFAULT_LIMIT: usize = 30;
/// Session size bounds, matching the original session slider.
const MIN_LIMIT: usize = 5;
const MAX_LIMIT: usize = 200;

/// One running (or finished) quiz session.
struct Session {
    mode: QuizMode,
    direction: Direction,
    strict: bool,
    /// Shuffled sample of the deck, fixed at creation.
    cards: Vec<WordPair>,
    index: usize,
    correct: usize,
    /// Options generated for the current card, kept so repeated card views
    /// do not reshuffle them.
    cached_choices: Option<(usize, Vec<String>)>,
    started_at: DateTime<Utc>,
}

impl Session {
    fn finished(&self) -> bool {
        self.index >= self.cards.len()
    }

    fn progress(&self) -> Progress {
        Progress {
            index: self.index,
            total: self.cards.len(),
            correct: self.correct,
            finished: self.finished(),
        }
    }

    fn current(&self) -> &WordPair {
        &self.cards[self.index]
    }

    fn advance(&mut self) {
        self.index += 1;
        self.cached_choices = None;
    }

    fn require_active(&self) -> Result<()> {
        if self.finished() {
            return Err(ApiError::BadRequest("Session is finished".to_string()));
        }
        Ok(())
    }

    fn require_mode(&self, expected: QuizMode) -> Result<()> {
        if self.mode != expected {
            return Err(ApiError::BadRequest(format!(
                "Not a {} session",
                expected.as_str()
            )));
        }
        Ok(())
    }

    fn options_for_current<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<String> {
        if let Some((index, options)) = &self.cached_choices {
            if *index == self.index {
                return options.clone();
            }
        }

        let correct = self.direction.answer(self.current()).to_string();
        let pool: Vec<String> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.index)
            .map(|(_, pair)| self.direction.answer(pair).to_string())
            .collect();

        let options = build_options(rng, &correct, &pool);
        self.cached_choices = Some((self.index, options.clone()));
        options
    }

    fn view<R: Rng + ?Sized>(&mut self, rng: &mut R) -> CardView {
        let choices = match self.mode {
            QuizMode::Choice => Some(self.options_for_current(rng)),
            _ => None,
        };
        CardView {
            index: self.index,
            total: self.cards.len(),
            prompt: self.direction.prompt(self.current()).to_string(),
            choices,
        }
    }
}

/// All live sessions, keyed by id.
pub struct SessionManager {
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Start a session over a snapshot of `deck`.
    ///
    /// The limit defaults to 30, is clamped to 5..=200, and is capped by the
    /// deck size. Typing sessions are English to German only.
    pub async fn create(
        &self,
        deck: Vec<WordPair>,
        request: &CreateSessionRequest,
    ) -> Result<CreateSessionResponse> {
        if deck.is_empty() {
            return Err(ApiError::BadRequest("Deck is empty".to_string()));
        }
        if request.mode == QuizMode::Typing && request.direction == Direction::DeToEn {
            return Err(ApiError::BadRequest(
                "Typing sessions are English to German only".to_string(),
            ));
        }

        let limit = request
            .limit
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(MIN_LIMIT, MAX_LIMIT)
            .min(deck.len());

        let mut cards = deck;
        cards.shuffle(&mut rand::thread_rng());
        cards.truncate(limit);

        let id = Uuid::new_v4();
        let mut session = Session {
            mode: request.mode,
            direction: request.direction,
            strict: request.strict,
            cards,
            index: 0,
            correct: 0,
            cached_choices: None,
            started_at: Utc::now(),
        };
        let card = session.view(&mut rand::thread_rng());

        tracing::info!(
            "Session {} started: {} cards, {} mode",
            id,
            session.cards.len(),
            session.mode.as_str()
        );

        let response = CreateSessionResponse {
            session_id: id,
            mode: session.mode,
            direction: session.direction,
            strict: session.strict,
            card,
        };
        self.sessions.lock().await.insert(id, session);
        Ok(response)
    }

    /// Progress summary for a session.
    pub async fn summary(&self, id: Uuid) -> Result<SessionSummary> {
        let sessions = self.sessions.lock().await;
        let session = sessions
            .get(&id)
            .ok_or_else(|| ApiError::NotFound(format!("Session {} not found", id)))?;
        Ok(SessionSummary {
            session_id: id,
            mode: session.mode,
            direction: session.direction,
            strict: session.strict,
            started_at: session.started_at,
            progress: session.progress(),
        })
    }

    /// Current card view: prompt plus options in choice mode, never the
    /// answer.
    pub async fn card(&self, id: Uuid) -> Result<CardView> {
        let mut sessions = self.sessions.lock().await;
        let session = Self::get_mut(&mut sessions, id)?;
        session.require_active()?;
        Ok(session.view(&mut rand::thread_rng()))
    }

    /// Grade a typed answer. Acceptance scores and advances; rejection
    /// leaves the session on the same card for another try.
    pub async fn answer(&self, id: Uuid, answer: &str) -> Result<AnswerResponse> {
        let mut sessions = self.sessions.lock().await;
        let session = Self::get_mut(&mut sessions, id)?;
        session.require_mode(QuizMode::Typing)?;
        session.require_active()?;

        let reference = session.direction.answer(session.current());
        let result = check(answer, reference, session.strict);
        if result.accepted {
            session.correct += 1;
            session.advance();
        }

        Ok(AnswerResponse {
            accepted: result.accepted,
            shown_answer: result.accepted.then_some(result.shown_answer),
            progress: session.progress(),
        })
    }

    /// Submit a multiple-choice selection. Advances either way.
    pub async fn choose(&self, id: Uuid, selected: &str) -> Result<ChoiceResponse> {
        let mut sessions = self.sessions.lock().await;
        let session = Self::get_mut(&mut sessions, id)?;
        session.require_mode(QuizMode::Choice)?;
        session.require_active()?;

        let correct_answer = session.direction.answer(session.current()).to_string();
        let correct = selected == correct_answer;
        if correct {
            session.correct += 1;
        }
        session.advance();

        Ok(ChoiceResponse {
            correct,
            correct_answer,
            progress: session.progress(),
        })
    }

    /// Self-rating for flashcards. Always advances.
    pub async fn rate(&self, id: Uuid, knew_it: bool) -> Result<Progress> {
        let mut sessions = self.sessions.lock().await;
        let session = Self::get_mut(&mut sessions, id)?;
        session.require_mode(QuizMode::Flashcards)?;
        session.require_active()?;

        if knew_it {
            session.correct += 1;
        }
        session.advance();
        Ok(session.progress())
    }

    /// Reveal the current answer without advancing. Choice mode has its
    /// options instead.
    pub async fn reveal(&self, id: Uuid) -> Result<RevealResponse> {
        let mut sessions = self.sessions.lock().await;
        let session = Self::get_mut(&mut sessions, id)?;
        if session.mode == QuizMode::Choice {
            return Err(ApiError::BadRequest(
                "Choice sessions do not reveal answers".to_string(),
            ));
        }
        session.require_active()?;

        Ok(RevealResponse {
            answer: session.direction.answer(session.current()).to_string(),
        })
    }

    /// Advance without scoring. Flashcards advance by rating instead.
    pub async fn skip(&self, id: Uuid) -> Result<Progress> {
        let mut sessions = self.sessions.lock().await;
        let session = Self::get_mut(&mut sessions, id)?;
        if session.mode == QuizMode::Flashcards {
            return Err(ApiError::BadRequest(
                "Flashcard sessions advance by rating".to_string(),
            ));
        }
        session.require_active()?;

        session.advance();
        Ok(session.progress())
    }

    fn get_mut(sessions: &mut HashMap<Uuid, Session>, id: Uuid) -> Result<&mut Session> {
        sessions
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(format!("Session {} not found", id)))
    }
}
