//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    let features = [
        ("Schema Compliance", "✔", "text-success"),
        ("Batch Validation", "📊", "text-primary"),
        ("Missing Data", "⚠", "text-warning"),
        ("Demographics", "👥", "text-medical-blue"),
    ];

    view! {
        <div class="hero">
            <h2>"Ensure Your Cancer Dataset Quality"</h2>
            <p class="subtitle">
                "Comprehensive quality control for cancer research datasets with automated schema validation, "
                "missingness analysis, and demographic coverage scoring."
            </p>
            <div class="feature-grid">
                {features
                    .into_iter()
                    .map(|(label, icon, tone)| view! {
                        <div class="card shadow-card feature-card">
                            <span class=format!("feature-icon {}", tone)>{icon}</span>
                            <span class="feature-label">{label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
