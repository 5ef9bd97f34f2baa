use std::collections::HashSet;
use yew_agent::{Agent, AgentLink, Context, HandlerId};

use crate::objects::JsError;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
}

#[derive(Debug)]
pub enum Request {
    NotifyError(JsError),
    Dismiss,
}

#[derive(Debug)]
pub enum Response {
    Notification(Option<Notification>),
}

/// Pending error messages, oldest first.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push_error(&mut self, err: JsError) {
        self.notifications.push(Notification {
            text: err.description,
        });
    }

    pub fn dismiss(&mut self) {
        if !self.notifications.is_empty() {
            self.notifications.remove(0);
        }
    }

    pub fn head(&self) -> Option<Notification> {
        self.notifications.first().cloned()
    }
}

pub struct Notifier {
    subscribers: HashSet<HandlerId>,
    link: AgentLink<Self>,
    queue: NotificationQueue,
}

impl Notifier {
    fn notify_subscribed(&self) {
        for subscriber in &self.subscribers {
            if subscriber.is_respondable() {
                self.link
                    .respond(*subscriber, Response::Notification(self.queue.head()));
            }
        }
    }
}

impl Agent for Notifier {
    type Reach = Context<Self>;
    type Message = ();
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
            queue: NotificationQueue::default(),
        }
    }

    fn update(&mut self, _msg: Self::Message) {}

    fn handle_input(&mut self, msg: Self::Input, _id: HandlerId) {
        match msg {
            Request::NotifyError(err) => {
                log::error!("{}", err);
                self.queue.push_error(err)
            }
            Request::Dismiss => self.queue.dismiss(),
        }
        self.notify_subscribed();
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
        self.notify_subscribed();
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}
