//! API documentation page with copyable request/response examples.

use leptos::*;

use crate::components::use_notifier;
use crate::config::API_BASE_URL;
use crate::docs::{
    CodeLanguage, AUTH_HEADER_EXAMPLE, AUTH_NOTES, ENDPOINTS, HIGHLIGHTS, RESPONSE_EXAMPLE,
};
use crate::services::clipboard::{copy_snippet, BrowserClipboard};

#[component]
pub fn ApiDocumentation() -> impl IntoView {
    let (language, set_language) = create_signal(CodeLanguage::default());

    view! {
        <div class="api-docs">
            <div class="card shadow-medical">
                <div class="card-header">
                    <h2 class="card-title">"</> CancerQC API Documentation"</h2>
                    <p class="card-description">
                        "RESTful API for automated cancer dataset quality control"
                    </p>
                </div>
                <div class="card-content highlight-grid">
                    {HIGHLIGHTS
                        .into_iter()
                        .map(|(title, description, icon, tone)| view! {
                            <div class="highlight">
                                <div class=format!("highlight-icon {}", tone)>{icon}</div>
                                <div>
                                    <h4>{title}</h4>
                                    <p class="text-muted">{description}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="card shadow-card">
                <div class="card-header">
                    <h3 class="card-title">"Available Endpoints"</h3>
                    <p class="card-description">
                        "Base URL: " <code class="inline-code">{API_BASE_URL}</code>
                    </p>
                </div>
                <div class="card-content endpoint-list">
                    {ENDPOINTS
                        .into_iter()
                        .map(|endpoint| view! {
                            <div class="endpoint-row">
                                <div class="endpoint-info">
                                    <span class=endpoint.method.badge_class()>
                                        {endpoint.method.as_str()}
                                    </span>
                                    <code class="endpoint-path">{endpoint.path}</code>
                                    <span class="text-muted">{endpoint.description}</span>
                                </div>
                                {endpoint.auth.then(|| view! {
                                    <span class="badge badge-outline">"🛡 Auth Required"</span>
                                })}
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="tabs-list">
                {CodeLanguage::ALL
                    .into_iter()
                    .map(|lang| view! {
                        <button
                            class="tab-trigger"
                            class:active=move || language.get() == lang
                            on:click=move |_| set_language.set(lang)
                        >
                            {lang.tab_label()}
                        </button>
                    })
                    .collect_view()}
            </div>
            {move || {
                let lang = language.get();
                view! { <CodeBlock title=lang.title() code=lang.snippet()/> }
            }}

            <CodeBlock
                title="Example Response".to_string()
                description="Successful quality check analysis result"
                code=RESPONSE_EXAMPLE
            />

            <div class="card shadow-card">
                <div class="card-header">
                    <h3 class="card-title">"🛡 Authentication"</h3>
                </div>
                <div class="card-content">
                    <div class="summary-box">
                        <h4>"API Key Required"</h4>
                        <p class="text-muted">
                            "Include your API key in the Authorization header for all requests."
                        </p>
                        <code class="inline-code">{AUTH_HEADER_EXAMPLE}</code>
                    </div>
                    <div class="text-muted">
                        {AUTH_NOTES
                            .into_iter()
                            .map(|note| view! { <p>"• " {note}</p> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// A titled `<pre>` block whose "Copy" button copies exactly `code`.
#[component]
fn CodeBlock(
    title: String,
    #[prop(optional)] description: Option<&'static str>,
    code: &'static str,
) -> impl IntoView {
    let notifier = use_notifier();

    let on_copy = move |_| {
        spawn_local(async move {
            let notification = copy_snippet(&BrowserClipboard, code).await;
            notifier.notify(notification);
        });
    };

    view! {
        <div class="card">
            <div class="card-header card-header-split">
                <div>
                    <h3 class="card-title">{title}</h3>
                    {description.map(|d| view! { <p class="card-description">{d}</p> })}
                </div>
                <button class="btn btn-outline btn-sm" on:click=on_copy>"⧉ Copy"</button>
            </div>
            <div class="card-content">
                <pre class="code-block"><code>{code}</code></pre>
            </div>
        </div>
    }
}
