use super::*;
use std::sync::mpsc::{Receiver, channel};

/// Notifications delivered to the host during a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum RouterEvent {
    RouteChanged { route: Route, previous: Route },
    VideoStarted(Video),
    VideoCompleted(Score),
    HomeworkStarted(HomeworkItem),
}

pub type Observer = Box<dyn FnMut(&RouterEvent)>;

impl DashboardRouter {
    /// Observers run synchronously, in subscription order, inside the transition.
    pub fn subscribe(&mut self, observer: impl FnMut(&RouterEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Same as `subscribe`, but events are queued for the host to poll.
    pub fn channel(&mut self) -> Receiver<RouterEvent> {
        let (tx, rx) = channel();
        self.subscribe(move |event| {
            // receiver gone means the host stopped listening
            let _ = tx.send(event.clone());
        });
        rx
    }

    pub(super) fn emit(&mut self, event: RouterEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}
