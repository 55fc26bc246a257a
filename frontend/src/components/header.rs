use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <div class="logo-mark">"🛡"</div>
                <div>
                    <h1 class="logo">{APP_NAME}</h1>
                    <p class="text-muted">"Cancer Dataset Quality Control"</p>
                </div>
            </div>
            <div class="header-right">
                <span class="badge badge-secondary text-success">"✔ API Active"</span>
            </div>
        </header>
    }
}
