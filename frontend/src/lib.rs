//! OnceEquity - Cancer Dataset Quality Control frontend (Rust/Leptos)
//!
//! A WebAssembly demo that uploads a dataset, plays a simulated quality
//! analysis and presents a fixed quality report plus the documentation of
//! the (hypothetical) quality-check API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header / NavBar (active tab)                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent  (owns NavigationState)                         │
//! │  ├── Hero (upload tab, before results)                       │
//! │  ├── UploadSection ──on_results──▶ NavEvent::ResultsReady    │
//! │  ├── QualityDashboard                                        │
//! │  └── ApiDocumentation                                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer, Toaster                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Compile-time settings (timings, limits)
//! - [`types`] - Navigation state, notifications, errors
//! - [`report`] - The mock quality report
//! - [`docs`] - API documentation content
//! - [`components`] - UI components
//! - [`services`] - Simulated analysis and clipboard access

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod report;
pub mod docs;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Navigation
    NavEvent, NavigationState, Tab,
    // Notifications
    Notification, NotificationVariant,
    // Report
    CheckStatus,
    // Errors
    AppError, AppResult, UploadError,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=format!("{} - Cancer Dataset Quality Control", APP_NAME)/>
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

/// Root page: owns the navigation state and switches panels.
#[component]
fn MainContent() -> impl IntoView {
    let notifier = Notifier::new();
    provide_context(notifier);

    let (nav, set_nav) = create_signal(NavigationState::default());
    let dispatch = move |event: NavEvent| {
        log::debug!("🧭 {:?}", event);
        set_nav.update(|n| n.apply(event));
    };

    // Memoized so the latch flipping does not remount the active panel.
    let active_tab = create_memo(move |_| nav.with(|n| n.active_tab));
    let has_results = Signal::derive(move || nav.with(|n| n.has_results));

    view! {
        <Header/>
        <NavBar active=active_tab on_select=move |tab: Tab| dispatch(NavEvent::Select(tab))/>

        <main class="container">
            <Show when=move || nav.with(|n| n.shows_hero()) fallback=|| ()>
                <Hero/>
            </Show>

            {move || match active_tab.get() {
                Tab::Upload => view! {
                    <UploadSection
                        has_results=has_results
                        on_results=move |_: ()| dispatch(NavEvent::ResultsReady)
                    />
                }
                .into_view(),
                Tab::Dashboard => view! { <QualityDashboard/> }.into_view(),
                Tab::Api => view! { <ApiDocumentation/> }.into_view(),
            }}
        </main>

        <Footer/>
        <Toaster notifier=notifier/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MOCK_REPORT;
    use crate::services::analysis::tests::ManualTimers;

    /// Drive an upload on the virtual clock, forwarding completion to the
    /// root page the way `MainContent` wires `on_results`.
    fn upload(name: &str, nav: &mut NavigationState) -> (UploadState, ManualTimers, usize) {
        let config = SimulationConfig::default();
        let mut state = UploadState::new(config);
        let mut timers = ManualTimers::default();
        let file = DatasetFile::new(name, 2048);
        if begin_analysis(&mut state, &mut timers, file, || {}, || {}).is_err() {
            return (state, timers, 0);
        }

        let mut callbacks = 0;
        let mut ticking = true;
        for (_, event) in timeline(config) {
            match event {
                TimerEvent::Tick if ticking => ticking = state.tick() == TickOutcome::Continue,
                TimerEvent::Tick => {}
                TimerEvent::Complete => {
                    if state.complete() {
                        callbacks += 1;
                        nav.apply(NavEvent::ResultsReady);
                    }
                }
            }
        }
        (state, timers, callbacks)
    }

    #[test]
    fn test_csv_upload_unlocks_results() {
        let mut nav = NavigationState::default();
        let (state, timers, callbacks) = upload("report.csv", &mut nav);

        assert_eq!(timers.starts, 1);
        assert_eq!(callbacks, 1);
        assert!(nav.has_results);
        assert_eq!(state.progress, 100);
        assert_eq!(state.phase(), Phase::Complete);

        nav.apply(NavEvent::Select(Tab::Dashboard));
        assert!(nav.has_results);
        assert_eq!(report::percent(MOCK_REPORT.schema_compliance), "94%");
    }

    #[test]
    fn test_pdf_upload_is_rejected_without_results() {
        let mut nav = NavigationState::default();
        let (state, timers, callbacks) = upload("report.pdf", &mut nav);

        assert_eq!(callbacks, 0);
        assert!(!nav.has_results);
        assert_eq!(state.progress, 0);
        assert!(!state.is_processing);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(timers.starts, 0);
        assert!(!timers.is_active());
    }
}
