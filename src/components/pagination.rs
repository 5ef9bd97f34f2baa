use crate::objects::PaginationView;
use yew::prelude::*;

pub struct Pagination;

#[derive(Clone, PartialEq, Properties)]
pub struct PaginationProperties {
    pub view: PaginationView,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

impl Component for Pagination {
    type Message = ();
    type Properties = PaginationProperties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <nav class="pagination is-centered" role="navigation" aria-label="pagination">
                <button id="prevPage" class="button pagination-previous" disabled={props.view.prev_disabled} onclick={props.on_prev.reform(|_: MouseEvent| ())}>{"Previous"}</button>
                <span id="pageInfo" class="pagination-list">{&props.view.label}</span>
                <button id="nextPage" class="button pagination-next" onclick={props.on_next.reform(|_: MouseEvent| ())}>{"Next"}</button>
            </nav>
        }
    }
}
