use uuid::Uuid;

use super::error::SessionError;
use super::models::{Transcript, Turn, View};
use super::service::SharedChatService;
use crate::ai::prompt::GREETING;
use crate::ai::topics::{NO_TOPIC, is_topic};

/// One student's conversation with the tutor.
///
/// A session owns its transcript and is the only thing that mutates
/// it. Each accepted submission appends exactly one user turn and, if
/// the remote service answers, one tutor turn. Nothing is ever removed.
///
/// Sessions start `Uninitialized`; call `initialize` before submitting
/// anything.
pub struct Session {
    pub id: String,
    service: SharedChatService,
    // None until the session is initialized
    transcript: Option<Transcript>,
    last_topic: Option<String>,
    submissions: u64,
}

impl Session {
    pub fn new(service: SharedChatService) -> Self {
        Self::with_id(&Uuid::new_v4().to_string(), service)
    }

    pub fn with_id(id: &str, service: SharedChatService) -> Self {
        Self {
            id: id.to_string(),
            service,
            transcript: None,
            last_topic: None,
            submissions: 0,
        }
    }

    /// Starts the transcript with the tutor greeting. Calling it again
    /// leaves the session as it is.
    pub fn initialize(&mut self) -> &Transcript {
        let id = &self.id;
        self.transcript.get_or_insert_with(|| {
            tracing::debug!(session_id = %id, "Initializing session");
            let mut transcript = Transcript::new();
            transcript.push(Turn::tutor(GREETING));
            transcript
        })
    }

    pub fn is_active(&self) -> bool {
        self.transcript.is_some()
    }

    pub fn transcript(&self) -> Result<&Transcript, SessionError> {
        self.transcript.as_ref().ok_or(SessionError::InvalidState)
    }

    /// Submits a topic picked from the topic list.
    ///
    /// The empty label means nothing is selected and is ignored, as is
    /// a repeat of the last accepted topic. A failed exchange does not
    /// count as accepted so the same topic can be picked again.
    pub async fn submit_topic(&mut self, label: &str) -> Result<&Transcript, SessionError> {
        self.transcript()?;

        if label == NO_TOPIC || self.last_topic.as_deref() == Some(label) {
            tracing::debug!(session_id = %self.id, label, "Ignoring topic submission");
            return self.transcript();
        }
        if !is_topic(label) {
            return Err(SessionError::UnknownTopic(label.to_string()));
        }

        self.exchange(label).await?;
        self.last_topic = Some(label.to_string());
        self.transcript()
    }

    /// Submits free text typed by the student. Blank text is ignored.
    /// There is no de-duplication by content: sending the same text
    /// twice is two exchanges.
    pub async fn submit_message(&mut self, text: &str) -> Result<&Transcript, SessionError> {
        self.transcript()?;

        if text.trim().is_empty() {
            return self.transcript();
        }

        self.exchange(text).await?;
        self.submissions += 1;
        self.transcript()
    }

    /// Turns in order as `(role, text)` pairs. Empty before
    /// `initialize`.
    pub fn render_view(&self) -> View<'_> {
        self.transcript
            .as_ref()
            .map_or_else(View::empty, Transcript::view)
    }

    /// Identity of the input field that the next message should come
    /// from. It changes after every accepted message so a cleared field
    /// can't be mistaken for the one that was just read.
    pub fn input_key(&self) -> String {
        format!("user_input_{}", self.submissions)
    }

    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    pub fn last_topic(&self) -> Option<&str> {
        self.last_topic.as_deref()
    }

    /// Appends the user turn, asks the service for a reply and appends
    /// it. On failure the user turn stays and no tutor turn is added.
    async fn exchange(&mut self, text: &str) -> Result<(), SessionError> {
        let Some(transcript) = self.transcript.as_mut() else {
            return Err(SessionError::InvalidState);
        };

        let turn = Turn::user(text);
        transcript.push(turn.clone());

        // Everything before the new turn is history, the full
        // transcript is always resent
        let history = &transcript.turns()[..transcript.len() - 1];
        tracing::debug!(session_id = %self.id, history_len = history.len(), "Sending turn");

        match self.service.send(history, text).await {
            Ok(reply) => {
                transcript.push(Turn::tutor(&reply));
                Ok(())
            }
            Err(source) => {
                tracing::error!(session_id = %self.id, "Chat service failed: {}", source);
                Err(SessionError::Service {
                    source,
                    pending: turn,
                })
            }
        }
    }
}
