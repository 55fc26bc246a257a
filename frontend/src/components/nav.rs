//! Tab bar switching between the three screens.

use leptos::*;

use crate::types::Tab;

#[component]
pub fn NavBar(
    #[prop(into)] active: Signal<Tab>,
    #[prop(into)] on_select: Callback<Tab>,
) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| view! {
                    <button
                        class="nav-tab"
                        class:active=move || active.get() == tab
                        on:click=move |_| on_select.call(tab)
                    >
                        <span class="nav-icon">{tab.icon()}</span>
                        <span>{tab.label()}</span>
                    </button>
                })
                .collect_view()}
        </nav>
    }
}
