//! Run Debate use case
//!
//! Drives an alternating, multi-round exchange between two chat endpoints.
//! Each round the first seat speaks, then (after a short pause) the second.
//! Calls are strictly sequential; each seat keeps a private history in
//! which the opponent's replies appear as `user` turns.

use crate::config::{DEFAULT_ROUNDS, DebateParams};
use crate::ports::chat_gateway::{ChatGateway, ChatRequest};
use crate::ports::observer::{ChannelObserver, DebateObserver, DebateUpdate, NoProgress};
use crate::use_cases::token_stream::token_stream;
use debate_domain::debate::transcript::{
    COMPLETION_MARKER, preamble, reply_footer, round_header, turn_header,
};
use debate_domain::{
    ConversationHistory, DebatePhase, DebateRun, MAX_QUESTION_LENGTH, MAX_SYSTEM_PROMPT_LENGTH,
    ModelId, Participant, Seat, ValidationError, validate_and_sanitize, validate_optional,
};
use futures::StreamExt;
use std::pin::pin;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

/// Raw input for the RunDebate use case
///
/// Everything here is unvalidated user input.
#[derive(Debug, Clone)]
pub struct RunDebateInput {
    /// The debate topic or question
    pub question: String,
    /// System prompt for the first seat (blank for none)
    pub first_system_prompt: String,
    /// System prompt for the second seat (blank for none)
    pub second_system_prompt: String,
    /// Model identifier for the first seat
    pub first_model: String,
    /// Model identifier for the second seat
    pub second_model: String,
    /// Number of rounds; must be at least 1
    pub rounds: u32,
}

impl RunDebateInput {
    pub fn new(
        question: impl Into<String>,
        first_model: impl Into<String>,
        second_model: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            first_system_prompt: String::new(),
            second_system_prompt: String::new(),
            first_model: first_model.into(),
            second_model: second_model.into(),
            rounds: DEFAULT_ROUNDS,
        }
    }

    pub fn with_system_prompts(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.first_system_prompt = first.into();
        self.second_system_prompt = second.into();
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }
}

/// Validated debate setup
struct Debate {
    question: String,
    first: Participant,
    second: Participant,
    rounds: u32,
}

impl Debate {
    fn validate(input: &RunDebateInput) -> Result<Self, ValidationError> {
        let question = validate_and_sanitize(&input.question, "Question", MAX_QUESTION_LENGTH)?;
        let first_prompt = validate_optional(
            &input.first_system_prompt,
            Seat::First.system_prompt_field(),
            MAX_SYSTEM_PROMPT_LENGTH,
        )?;
        let second_prompt = validate_optional(
            &input.second_system_prompt,
            Seat::Second.system_prompt_field(),
            MAX_SYSTEM_PROMPT_LENGTH,
        )?;
        let first_model = Self::model(&input.first_model, Seat::First)?;
        let second_model = Self::model(&input.second_model, Seat::Second)?;
        if input.rounds == 0 {
            return Err(ValidationError::InvalidRounds);
        }

        Ok(Self {
            question,
            first: Participant::new(Seat::First, first_model, first_prompt),
            second: Participant::new(Seat::Second, second_model, second_prompt),
            rounds: input.rounds,
        })
    }

    fn model(raw: &str, seat: Seat) -> Result<ModelId, ValidationError> {
        ModelId::try_new(raw).ok_or_else(|| ValidationError::InvalidModelName {
            label: seat.label().to_string(),
        })
    }
}

/// A debate running on its own task.
///
/// Updates arrive in order on `updates`; [`DebateHandle::finish`] waits for
/// the run to end and returns it.
pub struct DebateHandle {
    pub updates: mpsc::UnboundedReceiver<DebateUpdate>,
    task: JoinHandle<DebateRun>,
}

impl DebateHandle {
    /// Receive the next update, or `None` once the run has ended.
    pub async fn recv(&mut self) -> Option<DebateUpdate> {
        self.updates.recv().await
    }

    pub async fn finish(self) -> Result<DebateRun, JoinError> {
        self.task.await
    }
}

/// Use case for running a two-seat debate
pub struct RunDebateUseCase<G: ChatGateway + 'static> {
    first: Arc<G>,
    second: Arc<G>,
    params: DebateParams,
}

impl<G: ChatGateway + 'static> RunDebateUseCase<G> {
    /// Create a use case with one gateway per seat.
    pub fn new(first: Arc<G>, second: Arc<G>) -> Self {
        Self {
            first,
            second,
            params: DebateParams::default(),
        }
    }

    pub fn with_params(mut self, params: DebateParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case with no observer
    pub async fn execute(&self, input: RunDebateInput) -> DebateRun {
        self.execute_with_observer(input, &NoProgress).await
    }

    /// Run the debate on a spawned task, delivering updates over a channel.
    pub fn spawn(self: Arc<Self>, input: RunDebateInput) -> DebateHandle {
        let (observer, updates) = ChannelObserver::channel();
        let task = tokio::spawn(async move { self.execute_with_observer(input, &observer).await });
        DebateHandle { updates, task }
    }

    /// Execute the use case, reporting every snapshot to `observer`
    pub async fn execute_with_observer(
        &self,
        input: RunDebateInput,
        observer: &dyn DebateObserver,
    ) -> DebateRun {
        let mut run = DebateRun::new();

        Self::transition(&mut run, DebatePhase::Validating, observer);
        let debate = match Debate::validate(&input) {
            Ok(debate) => debate,
            Err(e) => {
                warn!("Debate input rejected: {}", e);
                let notice = e.render();
                run.transcript.push_str(&notice);
                observer.on_snapshot(run.transcript.as_str());
                run.error = Some(notice);
                run.finish(DebatePhase::Error);
                observer.on_phase(&run.phase);
                return run;
            }
        };

        Self::transition(&mut run, DebatePhase::Announcing, observer);
        info!(
            "Starting debate: {} vs {}, {} rounds",
            debate.first.model, debate.second.model, debate.rounds
        );
        run.transcript.push_str(&preamble(
            &debate.question,
            debate.rounds,
            &debate.first,
            &debate.second,
        ));
        observer.on_snapshot(run.transcript.as_str());

        run.first_history =
            ConversationHistory::seeded(debate.first.system_prompt.as_deref(), &debate.question);
        run.second_history =
            ConversationHistory::seeded(debate.second.system_prompt.as_deref(), &debate.question);

        for round in 1..=debate.rounds {
            Self::transition(
                &mut run,
                DebatePhase::RoundInProgress {
                    round,
                    rounds: debate.rounds,
                },
                observer,
            );
            run.transcript.push_str(&round_header(round, debate.rounds));
            observer.on_snapshot(run.transcript.as_str());

            self.take_turn(&mut run, &debate.first, observer).await;

            if !self.params.turn_pause.is_zero() {
                tokio::time::sleep(self.params.turn_pause).await;
            }

            self.take_turn(&mut run, &debate.second, observer).await;

            run.rounds_completed = round;
            info!("Round {}/{} complete", round, debate.rounds);
            observer.on_round_complete(round, debate.rounds);
        }

        run.transcript.push_str(COMPLETION_MARKER);
        observer.on_snapshot(run.transcript.as_str());
        run.finish(DebatePhase::Complete);
        observer.on_phase(&run.phase);
        info!("Debate complete");

        run
    }

    fn transition(run: &mut DebateRun, phase: DebatePhase, observer: &dyn DebateObserver) {
        debug!("Debate phase: {} -> {}", run.phase, phase);
        run.phase = phase;
        observer.on_phase(&phase);
    }

    fn gateway(&self, seat: Seat) -> &G {
        match seat {
            Seat::First => self.first.as_ref(),
            Seat::Second => self.second.as_ref(),
        }
    }

    /// One participant's turn: stream a reply, then record it in both histories.
    async fn take_turn(
        &self,
        run: &mut DebateRun,
        speaker: &Participant,
        observer: &dyn DebateObserver,
    ) {
        run.transcript.push_str(&turn_header(speaker));
        observer.on_snapshot(run.transcript.as_str());

        let history = match speaker.seat {
            Seat::First => &run.first_history,
            Seat::Second => &run.second_history,
        };
        let request = ChatRequest::new(speaker.model.clone(), history.messages().to_vec())
            .with_temperature(self.params.temperature)
            .with_max_tokens(self.params.max_tokens);

        let mut reply = String::new();
        let mut fragments = 0usize;
        {
            let mut tokens = pin!(token_stream(self.gateway(speaker.seat), request));
            while let Some(fragment) = tokens.next().await {
                reply.push_str(&fragment);
                fragments += 1;
                observer.on_snapshot(&run.transcript.snapshot_with(&reply));
            }
        }
        debug!(
            "{} finished turn: {} fragments, {} chars",
            speaker.label(),
            fragments,
            reply.len()
        );

        run.transcript.push_str(&reply);
        run.transcript
            .push_str(&reply_footer(speaker.seat == Seat::Second));
        observer.on_snapshot(run.transcript.as_str());

        let (own, opponent) = match speaker.seat {
            Seat::First => (&mut run.first_history, &mut run.second_history),
            Seat::Second => (&mut run.second_history, &mut run.first_history),
        };
        own.push_own_reply(reply.clone());
        opponent.push_opponent_reply(reply);
    }
}
