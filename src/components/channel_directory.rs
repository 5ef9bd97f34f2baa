use crate::{
    agents::{fetcher, notifier},
    components::{channel_list::ChannelList, pagination::Pagination},
    objects::{
        Applied, ChannelAction, DirectoryConfig, DirectoryState, Effect, JsError, ListRequest,
        RequestToken,
    },
    utils,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::{events::TargetCast, prelude::*};
use yew_agent::{Bridge, Bridged, Dispatched, Dispatcher};

/// Search box, channel list and pagination footer of the directory.
pub struct ChannelDirectory {
    fetcher: Box<dyn Bridge<fetcher::Fetcher>>,
    notifier: Dispatcher<notifier::Notifier>,
    state: DirectoryState,
}

#[derive(Clone, PartialEq, Properties)]
pub struct ChannelDirectoryProperties {
    pub config: DirectoryConfig,
}

pub enum Message {
    FetcherMessage(fetcher::Response),
    SearchInput(String),
    PrevPage,
    NextPage,
    Action(ChannelAction),
    Copied(Result<(), JsError>),
}

impl ChannelDirectory {
    fn send(&mut self, ctx: &Context<Self>, (token, request): (RequestToken, ListRequest)) {
        self.fetcher.send(fetcher::Request::FetchChannels {
            token,
            api_base: ctx.props().config.api_base.clone(),
            request,
        });
    }

    fn run_action(&mut self, ctx: &Context<Self>, action: ChannelAction) -> Result<(), JsError> {
        log::info!("{:?} {}", action.kind, action.url);

        match action.effect(&ctx.props().config) {
            Effect::WriteClipboard(text) => {
                let callback = ctx.link().callback(Message::Copied);

                spawn_local(async move {
                    callback.emit(utils::write_clipboard(&text).await);
                });
                Ok(())
            }
            Effect::Open { url, target } => utils::open(&url, &target),
        }
    }

    fn view_search(&self, ctx: &Context<Self>) -> Html {
        let on_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();

            Message::SearchInput(input.value())
        });

        html! {
            <div class="field">
                <div class="control">
                    <input id="search" class="input" type="text" placeholder="search channels" oninput={on_input}/>
                </div>
            </div>
        }
    }
}

impl Component for ChannelDirectory {
    type Message = Message;
    type Properties = ChannelDirectoryProperties;

    fn create(ctx: &Context<Self>) -> Self {
        let mut res = Self {
            fetcher: fetcher::Fetcher::bridge(ctx.link().callback(Message::FetcherMessage)),
            notifier: notifier::Notifier::dispatcher(),
            state: DirectoryState::new(),
        };
        let initial = res.state.load_channels(res.state.current_page());

        res.send(ctx, initial);
        res
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::FetcherMessage(fetcher::Response::Channels {
                token,
                request,
                result,
            }) => match result {
                Ok(channels) => match self.state.apply(token, &request, &channels) {
                    Applied::Stale => {
                        log::debug!("dropping stale response {:?} for {:?}", token, request);
                        false
                    }
                    _ => true,
                },
                Err(e) => match self.state.fail(token) {
                    Applied::Stale => {
                        log::debug!("dropping stale failure {:?} for {:?}: {}", token, request, e);
                        false
                    }
                    _ => {
                        self.notifier.send(notifier::Request::NotifyError(e));
                        false
                    }
                },
            },
            Message::SearchInput(value) => {
                let next = self
                    .state
                    .search_input(&value, ctx.props().config.search_min_length);

                self.send(ctx, next);
                false
            }
            Message::PrevPage => {
                let next = self.state.previous_page();

                self.send(ctx, next);
                false
            }
            Message::NextPage => {
                let next = self.state.next_page();

                self.send(ctx, next);
                false
            }
            Message::Action(action) => {
                if let Err(e) = self.run_action(ctx, action) {
                    self.notifier.send(notifier::Request::NotifyError(e));
                }
                false
            }
            Message::Copied(res) => {
                let res = res.and_then(|_| utils::alert(&ctx.props().config.copy_confirmation));

                if let Err(e) = res {
                    self.notifier.send(notifier::Request::NotifyError(e));
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="section">
                { self.view_search(ctx) }
                <ChannelList entries={self.state.entries().to_vec()} on_action={ctx.link().callback(Message::Action)}/>
                <Pagination view={self.state.pagination()} on_prev={ctx.link().callback(|_: ()| Message::PrevPage)} on_next={ctx.link().callback(|_: ()| Message::NextPage)}/>
            </section>
        }
    }
}
