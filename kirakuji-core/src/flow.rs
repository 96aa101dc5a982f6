//! Home page view-state machine.
//!
//! `HomeFlow::apply` is a pure transition function: it updates the state and
//! returns the side effect the caller must perform, if any.
//!
//! Every request effect carries the [`Ticket`] of the dialog session that
//! issued it, and the matching completion event hands it back. Open, Close and
//! Retry start a new session, so a response that outlives its session only
//! releases the in-flight slot and never touches the visible step. No second
//! request starts while one is still outstanding, even across sessions.

use crate::content::{PostContent, can_submit};

/// Identifies the dialog session a request belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Which request a loading step is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Post,
    Draw,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Input,
    Loading(Origin),
    /// Post accepted; waiting for the user to draw.
    Ready,
    Result(String),
    Error(String),
}

impl Step {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Loading(_) => "loading",
            Self::Ready => "ready",
            Self::Result(_) => "result",
            Self::Error(_) => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    Open,
    Edit(String),
    Submit,
    PostSucceeded(Ticket),
    PostFailed(Ticket, String),
    Draw,
    DrawSucceeded(Ticket, String),
    DrawFailed(Ticket, String),
    Retry { clear_content: bool },
    /// Close button, backdrop or Escape.
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CreatePost(Ticket, PostContent),
    FetchDraw(Ticket),
    RevealResult(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeFlow {
    pub modal_open: bool,
    pub step: Step,
    pub content: String,
    /// Current dialog session.
    pub session: Ticket,
    /// Session of the request still awaiting a response, if any.
    pub pending: Option<Ticket>,
}

impl HomeFlow {
    pub fn apply(&mut self, event: FlowEvent) -> Option<Effect> {
        match event {
            FlowEvent::Open => {
                self.modal_open = true;
                self.restart(true);
                None
            }
            FlowEvent::Edit(text) => {
                if self.step == Step::Input {
                    self.content = text;
                }
                None
            }
            FlowEvent::Submit => {
                if self.step != Step::Input || self.pending.is_some() {
                    return None;
                }
                let content = PostContent::parse(&self.content).ok()?;
                self.step = Step::Loading(Origin::Post);
                self.pending = Some(self.session);
                Some(Effect::CreatePost(self.session, content))
            }
            FlowEvent::PostSucceeded(ticket) => {
                if self.settle(ticket, Origin::Post) {
                    self.step = Step::Ready;
                }
                None
            }
            FlowEvent::PostFailed(ticket, message) => {
                if self.settle(ticket, Origin::Post) {
                    self.step = Step::Error(message);
                }
                None
            }
            FlowEvent::Draw => {
                if self.step != Step::Ready || self.pending.is_some() {
                    return None;
                }
                self.step = Step::Loading(Origin::Draw);
                self.pending = Some(self.session);
                Some(Effect::FetchDraw(self.session))
            }
            FlowEvent::DrawSucceeded(ticket, text) => {
                if !self.settle(ticket, Origin::Draw) {
                    return None;
                }
                self.step = Step::Result(text.clone());
                Some(Effect::RevealResult(text))
            }
            FlowEvent::DrawFailed(ticket, message) => {
                if self.settle(ticket, Origin::Draw) {
                    self.step = Step::Error(message);
                }
                None
            }
            FlowEvent::Retry { clear_content } => {
                if !self.step.is_loading() {
                    self.restart(clear_content);
                }
                None
            }
            FlowEvent::Close => {
                self.modal_open = false;
                self.restart(false);
                None
            }
        }
    }

    /// Start a new session at the input step.
    fn restart(&mut self, clear_content: bool) {
        if clear_content {
            self.content.clear();
        }
        self.step = Step::Input;
        self.session = self.session.next();
    }

    /// Release the in-flight slot for `ticket`; true when the response still
    /// belongs to the visible loading step.
    fn settle(&mut self, ticket: Ticket, origin: Origin) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
        }
        ticket == self.session && self.step == Step::Loading(origin)
    }

    /// Whether a request is outstanding, possibly from an earlier session.
    #[must_use]
    pub const fn request_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.step == Step::Input && self.pending.is_none() && can_submit(&self.content)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.step {
            Step::Error(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn result_text(&self) -> Option<&str> {
        match &self.step {
            Step::Result(text) => Some(text),
            _ => None,
        }
    }
}
