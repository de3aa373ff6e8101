use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Landing page. There are no credentials; the button only leads on to the form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();

    let on_proceed = move |_| {
        log::debug!("Proceeding from login to the employee form");
        navigate("/form", Default::default());
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Login"</h1>
                <p>"Click the button to proceed to the form."</p>
                <button class="button button--primary" on:click=on_proceed>
                    {icon("login")}
                    " Proceed"
                </button>
            </div>
        </div>
    }
}
