use crate::components::icon::Icon;
use crate::objects::{ChannelAction, ChannelEntry};
use yew::prelude::*;

pub struct ChannelList;

#[derive(Clone, PartialEq, Properties)]
pub struct ChannelListProperties {
    pub entries: Vec<ChannelEntry>,
    pub on_action: Callback<ChannelAction>,
}

impl ChannelList {
    fn view_channel(&self, ctx: &Context<Self>, entry: &ChannelEntry) -> Html {
        html! {
            <div class="channel card">
                <div class="card-content">
                    <div class="name title is-5">{&entry.name}</div>
                    <div class="playing-now subtitle is-6">{&entry.playing_now}</div>
                    <div class="actions buttons">
                        { entry.actions.iter().map(|action| self.view_action(ctx, action)).collect::<Html>() }
                    </div>
                </div>
            </div>
        }
    }

    fn view_action(&self, ctx: &Context<Self>, action: &ChannelAction) -> Html {
        let on_click = {
            let action = action.clone();
            ctx.props().on_action.reform(move |_: MouseEvent| action.clone())
        };

        html! {
            <button class="button" onclick={on_click}>
                <Icon name={action.kind.icon()}/>
                <span>{action.kind.label()}</span>
            </button>
        }
    }
}

impl Component for ChannelList {
    type Message = ();
    type Properties = ChannelListProperties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div id="channels">
                { ctx.props().entries.iter().map(|entry| self.view_channel(ctx, entry)).collect::<Html>() }
            </div>
        }
    }
}
