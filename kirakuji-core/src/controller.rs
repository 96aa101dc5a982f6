//! Drives [`HomeFlow`] against a [`KirakujiClient`].
//!
//! The controller owns the flow state and runs the effects it asks for. Views
//! subscribe with [`HomeController::set_observer`] and re-render from the
//! snapshot they receive after every transition.

use crate::client::KirakujiClient;
use crate::flow::{Effect, FlowEvent, HomeFlow};
use crate::transport::Transport;
use std::cell::RefCell;
use std::rc::Rc;

type Observer = Rc<dyn Fn(&HomeFlow)>;

pub struct HomeController<T> {
    client: KirakujiClient<T>,
    flow: RefCell<HomeFlow>,
    observer: RefCell<Option<Observer>>,
}

impl<T: Transport> HomeController<T> {
    pub fn new(client: KirakujiClient<T>) -> Self {
        Self {
            client,
            flow: RefCell::new(HomeFlow::default()),
            observer: RefCell::new(None),
        }
    }

    pub fn set_observer(&self, observer: impl Fn(&HomeFlow) + 'static) {
        *self.observer.borrow_mut() = Some(Rc::new(observer));
    }

    pub fn clear_observer(&self) {
        self.observer.borrow_mut().take();
    }

    #[must_use]
    pub fn snapshot(&self) -> HomeFlow {
        self.flow.borrow().clone()
    }

    pub const fn client(&self) -> &KirakujiClient<T> {
        &self.client
    }

    /// Apply one event and notify the observer with the new state.
    pub fn dispatch(&self, event: FlowEvent) -> Option<Effect> {
        let effect = self.flow.borrow_mut().apply(event);
        let snapshot = self.snapshot();
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(&snapshot);
        }
        effect
    }

    /// Submit the current input. Does nothing unless the flow accepts it.
    pub async fn submit(&self) {
        let Some(Effect::CreatePost(ticket, content)) = self.dispatch(FlowEvent::Submit) else {
            return;
        };
        match self.client.create_post(&content).await {
            Ok(created) => {
                log::info!("post {} accepted", created.post_id);
                self.dispatch(FlowEvent::PostSucceeded(ticket));
            }
            Err(err) => {
                self.dispatch(FlowEvent::PostFailed(ticket, err.user_message()));
            }
        }
    }

    /// Draw a fortune once the post is accepted.
    ///
    /// Returns the result text when the flow moved to the result step.
    pub async fn draw(&self) -> Option<String> {
        let Some(Effect::FetchDraw(ticket)) = self.dispatch(FlowEvent::Draw) else {
            return None;
        };
        match self.client.fetch_random_draw().await {
            Ok(draw) => match self.dispatch(FlowEvent::DrawSucceeded(ticket, draw.result)) {
                Some(Effect::RevealResult(text)) => Some(text),
                _ => None,
            },
            Err(err) => {
                self.dispatch(FlowEvent::DrawFailed(ticket, err.user_message()));
                None
            }
        }
    }
}
