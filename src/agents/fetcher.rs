use crate::objects::{Channel, JsError, ListRequest, RequestToken};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew_agent::{Agent, AgentLink, Context, HandlerId};

#[derive(Debug)]
pub enum Request {
    FetchChannels {
        token: RequestToken,
        api_base: String,
        request: ListRequest,
    },
}

#[derive(Debug)]
pub enum Response {
    Channels {
        token: RequestToken,
        request: ListRequest,
        result: Result<Vec<Channel>, JsError>,
    },
}

#[derive(Debug)]
pub enum Message {
    ReceiveChannels(HandlerId, RequestToken, ListRequest, Result<Vec<Channel>, JsError>),
}

/// Runs the list requests of every connected view.
///
/// Requests are neither cancelled nor ordered; each response goes back to its handler tagged with the
/// token it was issued with.
pub struct Fetcher {
    link: AgentLink<Self>,
    subscribers: HashSet<HandlerId>,
}

impl Agent for Fetcher {
    type Reach = Context<Self>;
    type Message = Message;
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::<HandlerId>::new(),
        }
    }

    fn update(&mut self, msg: Self::Message) {
        match msg {
            Message::ReceiveChannels(handler_id, token, request, result) => {
                if self.subscribers.contains(&handler_id) {
                    self.link.respond(
                        handler_id,
                        Response::Channels {
                            token,
                            request,
                            result,
                        },
                    );
                }
            }
        }
    }

    fn handle_input(&mut self, msg: Self::Input, id: HandlerId) {
        match msg {
            Request::FetchChannels {
                token,
                api_base,
                request,
            } => {
                let url = request.path(&api_base);
                let callback = self.link.callback(
                    move |(request, result): (ListRequest, Result<Vec<Channel>, JsError>)| {
                        Message::ReceiveChannels(id, token, request, result)
                    },
                );

                log::debug!("fetcher: {:?} GET {}", token, url);
                spawn_local(async move {
                    callback.emit((request, fetch_deserializable(&url).await));
                });
            }
        }
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}

async fn fetch(url: &str) -> Result<web_sys::Response, JsError> {
    let opts = web_sys::RequestInit::new();

    opts.set_method("GET");

    let headers = web_sys::Headers::new()?;

    headers.append("Accept", "application/json")?;
    opts.set_headers(&headers);

    let request = web_sys::Request::new_with_str_and_init(url, &opts)?;
    let window = web_sys::window().ok_or("error getting window")?;
    let resp: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    match resp.ok() {
        true => Ok(resp),
        false => {
            Err((&*format!("fetcher error: {}: {}", resp.status(), resp.status_text())).into())
        }
    }
}

async fn fetch_deserializable<T: DeserializeOwned>(url: &str) -> Result<T, JsError> {
    JsFuture::from(fetch(url).await?.json()?)
        .await
        .map(|val| serde_wasm_bindgen::from_value(val).map_err(Into::into))?
}
