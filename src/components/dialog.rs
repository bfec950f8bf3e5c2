use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub title: AttrValue,
    pub open: bool,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Minimal modal surface. Renders nothing while closed, so dialog contents
/// mount fresh on every open.
#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="roster-admin-dialog__backdrop">
            <div class="roster-admin-dialog" role="dialog" aria-label={props.title.clone()}>
                <div class="roster-admin-dialog__header">
                    <h2 class="roster-admin-dialog__title">{props.title.clone()}</h2>
                    <button
                        class="roster-admin-dialog__close"
                        type="button"
                        aria-label="Close"
                        onclick={on_close}
                    >
                        {"×"}
                    </button>
                </div>
                <div class="roster-admin-dialog__body">
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
