use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginPromptProps {
    /// Page the visitor asked for before being sent here
    pub return_url: Option<String>,
}

/// Signing in happens outside this app; this page only says so.
#[function_component(LoginPrompt)]
pub fn login_prompt(props: &LoginPromptProps) -> Html {
    html! {
        <section class="login-section">
            <h2>{"Sign in required"}</h2>
            <p>{"Please sign in to view and manage your expenses."}</p>
            {if let Some(url) = &props.return_url {
                html! {
                    <p class="login-return">
                        {"You will be taken back to "}<code>{url}</code>{" afterwards."}
                    </p>
                }
            } else {
                html! {}
            }}
        </section>
    }
}
