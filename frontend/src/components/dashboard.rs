//! Quality dashboard.
//!
//! Renders [`MOCK_REPORT`]; the only local state is which detailed view is
//! open.

use leptos::*;

use crate::report::{percent, MissingField, COVERAGE_SUMMARY, MOCK_REPORT};

/// Detailed report views below the overview cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportView {
    #[default]
    Batch,
    Missing,
    Demographics,
}

impl ReportView {
    pub const ALL: [ReportView; 3] = [ReportView::Batch, ReportView::Missing, ReportView::Demographics];

    pub fn label(&self) -> &'static str {
        match self {
            ReportView::Batch => "Batch Checks",
            ReportView::Missing => "Missingness Report",
            ReportView::Demographics => "Demographics",
        }
    }
}

#[component]
pub fn QualityDashboard() -> impl IntoView {
    let (view_mode, set_view_mode) = create_signal(ReportView::default());

    view! {
        <div class="dashboard">
            <OverviewCards/>
            <div class="tabs-list">
                {ReportView::ALL
                    .into_iter()
                    .map(|mode| view! {
                        <button
                            class="tab-trigger"
                            class:active=move || view_mode.get() == mode
                            on:click=move |_| set_view_mode.set(mode)
                        >
                            {mode.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
            {move || match view_mode.get() {
                ReportView::Batch => view! { <BatchChecks/> }.into_view(),
                ReportView::Missing => view! { <MissingnessReport/> }.into_view(),
                ReportView::Demographics => view! { <DemographicsReport/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn OverviewCards() -> impl IntoView {
    let report = MOCK_REPORT;
    let gauges = [
        ("Schema Compliance", report.schema_compliance, "text-success", "✔"),
        ("Missing Data", report.missing_data, "text-warning", "⚠"),
        ("Demographic Coverage", report.demographic_coverage, "text-primary", "👥"),
    ];
    let (records_label, records_value, _) = report.headline()[3].clone();

    view! {
        <div class="overview-grid">
            {gauges
                .into_iter()
                .map(|(label, value, tone, icon)| view! {
                    <div class="card shadow-card">
                        <div class="card-content overview-card">
                            <div>
                                <p class="text-muted">{label}</p>
                                <p class=format!("overview-value {}", tone)>{percent(value)}</p>
                            </div>
                            <div class=format!("overview-icon {}", tone)>{icon}</div>
                        </div>
                        <ProgressBar value=f32::from(value)/>
                    </div>
                })
                .collect_view()}
            <div class="card shadow-card">
                <div class="card-content overview-card">
                    <div>
                        <p class="text-muted">{records_label}</p>
                        <p class="overview-value">{records_value}</p>
                    </div>
                    <div class="overview-icon text-medical-blue">"🗄"</div>
                </div>
                <div class="text-muted">"📈 Ready for analysis"</div>
            </div>
        </div>
    }
}

#[component]
fn BatchChecks() -> impl IntoView {
    view! {
        <ReportCard
            title="📊 Batch Validation Results"
            description="Automated quality checks across your dataset"
        >
            <div class="check-list">
                {MOCK_REPORT
                    .batch_results
                    .iter()
                    .map(|check| view! {
                        <div class="check-row">
                            <div class="check-info">
                                <span class=check.status.css_class()>{check.status.icon()}</span>
                                <div>
                                    <h4>{check.name}</h4>
                                    <p class="text-muted">
                                        {format!("Quality Score: {}%", check.score)}
                                    </p>
                                </div>
                            </div>
                            <span class=check.status.badge_class()>{check.status.to_string()}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </ReportCard>
    }
}

#[component]
fn MissingnessReport() -> impl IntoView {
    let critical = MOCK_REPORT.critical_missing_fields();

    view! {
        <ReportCard
            title="📄 Missing Data Analysis"
            description="Fields with missing values and their impact"
        >
            <div class="alert">
                {format!(
                    "⚠ {} fields have more than {}% missing data",
                    critical,
                    MissingField::ALERT_THRESHOLD
                )}
            </div>
            <div class="field-list">
                {MOCK_REPORT
                    .missingness
                    .iter()
                    .map(|item| view! {
                        <div class="field-row">
                            <div class="row-split">
                                <span class="field-name">{item.field}</span>
                                <span class="text-muted">{item.summary()}</span>
                            </div>
                            <ProgressBar value=item.percentage class=item.bar_class()/>
                        </div>
                    })
                    .collect_view()}
            </div>
        </ReportCard>
    }
}

#[component]
fn DemographicsReport() -> impl IntoView {
    view! {
        <ReportCard
            title="👥 Demographic Coverage Score"
            description="Representation across demographic categories"
        >
            <div class="field-list">
                {MOCK_REPORT
                    .demographics
                    .iter()
                    .map(|demo| view! {
                        <div class="field-row">
                            <div class="row-split">
                                <span class="field-name">{demo.category}</span>
                                <span class=format!("coverage {}", demo.tone_class())>
                                    {percent(demo.coverage)}
                                </span>
                            </div>
                            <ProgressBar value=f32::from(demo.coverage)/>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="summary-box">
                <h4>"Coverage Summary"</h4>
                <p class="text-muted">{COVERAGE_SUMMARY}</p>
            </div>
        </ReportCard>
    }
}

#[component]
fn ReportCard(
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card shadow-card">
            <div class="card-header">
                <h3 class="card-title">{title}</h3>
                <p class="card-description">{description}</p>
            </div>
            <div class="card-content">{children()}</div>
        </div>
    }
}

/// Static bar filled to `value` percent.
#[component]
fn ProgressBar(
    value: f32,
    #[prop(default = "progress")] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=class>
            <div class="progress-fill" style=format!("width: {}%;", value.clamp(0.0, 100.0))></div>
        </div>
    }
}
