use super::{channel_directory::ChannelDirectory, notification::Notification};
use crate::objects::DirectoryConfig;
use yew::prelude::*;

pub struct Top;

#[derive(Clone, PartialEq, Properties)]
pub struct TopProperties {
    #[prop_or_default]
    pub config: DirectoryConfig,
}

impl Component for Top {
    type Message = ();
    type Properties = TopProperties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                <nav class="navbar is-primary" role="navigation">
                    <div class="navbar-brand">
                        <div class="navbar-item title">{"Radio Directory"}</div>
                    </div>
                </nav>
                <Notification/>
                <ChannelDirectory config={ctx.props().config.clone()}/>
            </>
        }
    }
}
