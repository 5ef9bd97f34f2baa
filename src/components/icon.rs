use yew::prelude::*;

pub struct Icon;

#[derive(Clone, PartialEq, Properties)]
pub struct IconProperties {
    /// Font Awesome class, e.g. `fa-copy`.
    pub name: String,
}

impl Component for Icon {
    type Message = ();
    type Properties = IconProperties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {<span class="icon"><i class={classes!("fas", ctx.props().name.clone())}></i></span>}
    }
}
