use uuid::Uuid;
use yew::prelude::*;

use crate::services::notifications::Notification;

#[derive(Properties, PartialEq)]
pub struct ToastsProps {
    pub items: Vec<Notification>,
    pub on_dismiss: Callback<Uuid>,
}

#[function_component(Toasts)]
pub fn toasts(props: &ToastsProps) -> Html {
    if props.items.is_empty() {
        return html! {};
    }

    html! {
        <div class="toast-stack">
            {for props.items.iter().map(|notification| {
                let on_click = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = notification.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };

                html! {
                    <div
                        key={notification.id.to_string()}
                        class={classes!("toast", notification.kind.css_class())}
                        onclick={on_click}
                    >
                        {&notification.message}
                    </div>
                }
            })}
        </div>
    }
}
