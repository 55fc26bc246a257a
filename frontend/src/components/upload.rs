//! Dataset upload component with drag & drop support.
//!
//! Handles file selection, extension/size validation and the simulated
//! analysis. The two simulation timers belong to this component: they are
//! stored in its reactive scope and cancelled when it is torn down.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::components::{use_notifier, ProgressSection};
use crate::config::ACCEPT_ATTRIBUTE;
use crate::report::MOCK_REPORT;
use crate::services::analysis::{
    begin_analysis, teardown_timers, AnalysisTimers, DatasetFile, SimulationConfig,
    SimulationTimers, TickOutcome, UploadState,
};
use crate::types::{AppError, AppResult, Notification};

/// Shown when the panel was remounted and no longer knows the file name.
const FALLBACK_DATASET_NAME: &str = "cancer_dataset.csv";

#[component]
pub fn UploadSection(
    /// Whether an analysis already completed this session.
    #[prop(into)]
    has_results: Signal<bool>,
    /// Called once when the simulated analysis finishes.
    #[prop(into)]
    on_results: Callback<()>,
) -> impl IntoView {
    let notifier = use_notifier();
    let state = create_rw_signal(UploadState::new(SimulationConfig::default()));
    let timers = store_value(SimulationTimers::default());

    on_cleanup(move || {
        if timers.try_update_value(teardown_timers) == Some(true) {
            log::debug!("⏹️  Upload panel disposed, cancelling analysis timers");
        }
    });

    let start_analysis = move |file: File| {
        let dataset = DatasetFile::from(&file);
        let name = dataset.name.clone();

        let on_tick = move || {
            if state.try_update(|s| s.tick()) != Some(TickOutcome::Continue) {
                // Deferred: the interval cannot be dropped from its own callback.
                spawn_local(async move {
                    timers.try_update_value(|t| t.stop_progress());
                });
            }
        };
        let on_complete = {
            let name = name.clone();
            move || {
                if state.try_update(|s| s.complete()) != Some(true) {
                    return;
                }
                spawn_local(async move {
                    timers.try_update_value(|t| t.cancel());
                });
                log::info!("✅ Analysis of {} complete", name);
                on_results.call(());
                notifier.notify(Notification::analysis_complete());
            }
        };

        let outcome = state.try_update(|s| {
            timers.try_update_value(|t| begin_analysis(s, t, dataset, on_tick, on_complete))
        });
        match outcome.flatten() {
            Some(Ok(format)) => {
                log::info!("📤 Analysing {} as {}", name, format.extension());
            }
            Some(Err(e)) => {
                log::warn!("Rejected upload: {}", e);
                notifier.notify(Notification::rejected(&e));
            }
            None => {}
        }
    };

    view! {
        <Show
            when=move || has_results.get()
            fallback=move || view! {
                <div class="upload-layout">
                    <div class="card shadow-medical">
                        <div class="card-header text-center">
                            <h2 class="card-title">"Upload Cancer Dataset"</h2>
                            <p class="card-description">
                                "Upload your cancer dataset for comprehensive quality analysis"
                            </p>
                        </div>
                        <div class="card-content">
                            <Show
                                when=move || state.with(|s| s.is_processing)
                                fallback=move || view! { <DropZone state=state on_file=start_analysis/> }
                            >
                                <ProgressSection
                                    progress=Signal::derive(move || state.with(|s| s.progress))
                                    file_name=Signal::derive(move || {
                                        state.with(|s| s.file_name().unwrap_or_default().to_string())
                                    })
                                />
                            </Show>
                        </div>
                    </div>
                    <SupportedFormats/>
                </div>
            }
        >
            <AnalysisSummary file_name=Signal::derive(move || {
                state.with(|s| s.file_name().unwrap_or(FALLBACK_DATASET_NAME).to_string())
            })/>
        </Show>
    }
}

#[component]
fn DropZone(
    state: RwSignal<UploadState>,
    #[prop(into)] on_file: Callback<File>,
) -> impl IntoView {
    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !state.with_untracked(|s| s.is_dragging) {
            state.update(|s| s.drag_over());
        }
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(|s| s.drag_leave());
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(|s| s.drag_leave());

        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            on_file.call(file);
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file.call(file);
        }
    };

    view! {
        <div
            class="drop-zone"
            class:dragging=move || state.with(|s| s.is_dragging)
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="upload-icon">"📤"</div>
            <h3 class="drop-zone-title">"Drop your dataset here or click to browse"</h3>
            <p class="text-muted">"Supports CSV, TSV, XLSX, and JSON files up to 50MB"</p>
            <input
                type="file"
                id="file-upload"
                accept=ACCEPT_ATTRIBUTE
                style="display:none"
                on:change=on_file_change
            />
            <label for="file-upload" class="btn btn-primary">
                "📄 Select File"
            </label>
        </div>
    }
}

#[component]
fn AnalysisSummary(#[prop(into)] file_name: Signal<String>) -> impl IntoView {
    let notifier = use_notifier();

    let on_upload_new = move |_| {
        if let Err(e) = reload_page() {
            log::error!("❌ {}", e);
            notifier.notify(Notification::destructive("Reload failed", e.to_string()));
        }
    };

    view! {
        <div class="card shadow-medical">
            <div class="card-header card-header-split">
                <div>
                    <h2 class="card-title">
                        <span class="text-success">"✔ "</span>
                        "Analysis Complete"
                    </h2>
                    <p class="card-description">"Dataset: " {file_name}</p>
                </div>
                <span class="badge badge-outline text-success">"Processing Complete"</span>
            </div>
            <div class="card-content">
                <div class="metric-grid">
                    {MOCK_REPORT
                        .headline()
                        .into_iter()
                        .map(|(label, value, tone)| view! {
                            <div class="metric-tile">
                                <div class=format!("metric-value {}", tone)>{value}</div>
                                <div class="metric-label">{label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="button-row">
                    <button class="btn btn-primary" on:click=on_upload_new>
                        "📤 Upload New Dataset"
                    </button>
                    <button class="btn btn-outline">"📊 View Detailed Report"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SupportedFormats() -> impl IntoView {
    view! {
        <div class="card info-card">
            <div class="card-content">
                <h4>"Supported Dataset Formats"</h4>
                <ul class="text-muted">
                    <li>"• CSV/TSV files with headers"</li>
                    <li>"• Excel spreadsheets (.xlsx)"</li>
                    <li>"• JSON structured data"</li>
                    <li>"• Maximum file size: 50MB"</li>
                </ul>
            </div>
        </div>
    }
}

/// "Upload New Dataset" starts over from a clean page.
fn reload_page() -> AppResult<()> {
    web_sys::window()
        .ok_or_else(|| AppError::Browser("no global window".into()))?
        .location()
        .reload()
        .map_err(|e| AppError::Browser(format!("reload failed: {:?}", e)))
}
