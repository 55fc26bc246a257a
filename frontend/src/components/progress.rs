use leptos::*;

use crate::services::analysis::AnalysisStep;

#[component]
pub fn ProgressSection(
    #[prop(into)] progress: Signal<u8>,
    #[prop(into)] file_name: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="progress-section">
            <div class="text-center">
                <div class="pulse-badge">"📊"</div>
                <h3>"Analyzing Dataset"</h3>
                <p class="text-muted">"Running quality control checks on " {file_name}</p>
            </div>
            <div class="progress-header">
                <span>"Processing Progress"</span>
                <span>{move || format!("{}%", progress.get())}</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", progress.get())
                ></div>
            </div>
            <ul class="steps">
                {move || {
                    AnalysisStep::for_progress(progress.get())
                        .into_iter()
                        .map(|step| view! {
                            <li class="step" class:completed=step.completed>
                                <span class="step-marker">
                                    {if step.completed { "✔" } else { "○" }}
                                </span>
                                {step.label}
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
