//! Footer component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="footer-grid">
                <div>
                    <h3>{APP_NAME} " Platform"</h3>
                    <p class="text-muted">
                        "Professional-grade quality control for cancer research datasets."
                    </p>
                </div>
                <div>
                    <h3>"Features"</h3>
                    <ul class="text-muted">
                        <li>"Schema Validation"</li>
                        <li>"Missingness Analysis"</li>
                        <li>"Demographic Coverage"</li>
                        <li>"Batch Processing"</li>
                    </ul>
                </div>
                <div>
                    <h3>"Contact"</h3>
                    <p class="text-muted">"Built for cancer research excellence."</p>
                </div>
            </div>
            <div class="footer-bottom">
                "© 2024 " {APP_NAME} ". Professional dataset quality control. Powered by "
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
        </footer>
    }
}
