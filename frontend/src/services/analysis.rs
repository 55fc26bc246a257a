//! Simulated dataset analysis.
//!
//! Nothing is parsed: an accepted file starts two independent timers.
//! A periodic tick raises the progress bar by a fixed step up to a cap,
//! and a one-shot completion jumps it to 100 and reports the results.
//!
//! ```text
//!   accept ──▶ Rising ──(progress ≥ cap)──▶ Holding ──┐
//!                 │                                    │
//!                 └──────────(completion timer)────────┴──▶ Complete
//! ```
//!
//! The state machine is plain data so it can be driven by browser timers
//! in the upload component and by a virtual clock in tests.

use gloo_timers::callback::{Interval, Timeout};

use crate::config::{
    ACCEPTED_EXTENSIONS, COMPLETION_DELAY_MS, MAX_FILE_SIZE, PROGRESS_CAP, PROGRESS_STEP,
    PROGRESS_TICK_MS,
};
use crate::types::UploadError;

// =============================================================================
// Dataset validation
// =============================================================================

/// The only facts we keep about an uploaded file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetFile {
    pub name: String,
    pub size: u64,
}

impl DatasetFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl From<&web_sys::File> for DatasetFile {
    fn from(file: &web_sys::File) -> Self {
        // Browsers report sizes as f64; anything sane fits in u64.
        Self::new(file.name(), file.size().max(0.0) as u64)
    }
}

/// Accepted dataset formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Tsv,
    Xlsx,
    Json,
}

impl DatasetFormat {
    /// Detect the format from a file name, ignoring case.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(DatasetFormat::Csv),
            "tsv" => Some(DatasetFormat::Tsv),
            "xlsx" => Some(DatasetFormat::Xlsx),
            "json" => Some(DatasetFormat::Json),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DatasetFormat::Csv => ACCEPTED_EXTENSIONS[0],
            DatasetFormat::Tsv => ACCEPTED_EXTENSIONS[1],
            DatasetFormat::Xlsx => ACCEPTED_EXTENSIONS[2],
            DatasetFormat::Json => ACCEPTED_EXTENSIONS[3],
        }
    }
}

/// Check a file before any state is touched.
pub fn validate_dataset(file: &DatasetFile) -> Result<DatasetFormat, UploadError> {
    let format = DatasetFormat::from_file_name(&file.name)
        .ok_or_else(|| UploadError::UnsupportedFormat(file.name.clone()))?;

    if file.size > MAX_FILE_SIZE {
        return Err(UploadError::TooLarge {
            name: file.name.clone(),
            size: file.size,
        });
    }

    Ok(format)
}

// =============================================================================
// Simulation
// =============================================================================

/// Timing of the simulated analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub tick_ms: u32,
    pub step: u8,
    pub cap: u8,
    pub completion_ms: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_ms: PROGRESS_TICK_MS,
            step: PROGRESS_STEP,
            cap: PROGRESS_CAP,
            completion_ms: COMPLETION_DELAY_MS,
        }
    }
}

/// Where the simulation currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Ticks are raising the bar.
    Rising,
    /// Cap reached, waiting for the completion timer.
    Holding,
    Complete,
}

/// What the tick timer should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Stop,
}

/// Transient state of the upload panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub file: Option<DatasetFile>,
    pub is_dragging: bool,
    pub progress: u8,
    pub is_processing: bool,
    phase: Phase,
    config: SimulationConfig,
}

impl UploadState {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> SimulationConfig {
        self.config
    }

    pub fn drag_over(&mut self) {
        self.is_dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.is_dragging = false;
    }

    /// Validate `file` and start the simulation.
    ///
    /// On error nothing changes and the caller must not start any timer.
    pub fn accept(&mut self, file: DatasetFile) -> Result<DatasetFormat, UploadError> {
        let format = validate_dataset(&file)?;
        self.file = Some(file);
        self.is_processing = true;
        self.progress = 0;
        self.phase = Phase::Rising;
        Ok(format)
    }

    /// Advance the bar by one step.
    ///
    /// A tick that finds the bar at the cap clamps it and asks the timer to
    /// stop. Ticks outside the rising phase are ignored.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Rising {
            return TickOutcome::Stop;
        }
        if self.progress >= self.config.cap {
            self.progress = self.config.cap;
            self.phase = Phase::Holding;
            return TickOutcome::Stop;
        }
        self.progress = self
            .progress
            .saturating_add(self.config.step)
            .min(self.config.cap);
        TickOutcome::Continue
    }

    /// Finish the analysis. Returns `true` only the first time.
    pub fn complete(&mut self) -> bool {
        if !matches!(self.phase, Phase::Rising | Phase::Holding) {
            return false;
        }
        self.progress = 100;
        self.is_processing = false;
        self.phase = Phase::Complete;
        true
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.name.as_str())
    }

    /// Checklist shown under the progress bar.
    pub fn steps(&self) -> [AnalysisStep; 4] {
        AnalysisStep::for_progress(self.progress)
    }
}

/// One line of the processing checklist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisStep {
    pub label: &'static str,
    pub completed: bool,
}

impl AnalysisStep {
    pub const LABELS: [&'static str; 4] = [
        "Schema Validation",
        "Missing Data Analysis",
        "Demographic Coverage",
        "Generating Report",
    ];

    /// Steps are cosmetic: each one is "done" once progress passes its mark.
    pub fn for_progress(progress: u8) -> [AnalysisStep; 4] {
        let done = [progress > 25, progress > 50, progress > 75, progress >= 100];
        std::array::from_fn(|i| AnalysisStep {
            label: Self::LABELS[i],
            completed: done[i],
        })
    }
}

// =============================================================================
// Virtual clock
// =============================================================================

/// A timer firing, as seen from the upload start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    Tick,
    Complete,
}

/// Order in which the browser would fire both timers for `config`.
///
/// Ticks due at the same instant as completion fire first, matching
/// `setInterval` registered before `setTimeout`.
pub fn timeline(config: SimulationConfig) -> Vec<(u32, TimerEvent)> {
    let mut events = Vec::new();
    if config.tick_ms > 0 {
        let mut at = config.tick_ms;
        while at <= config.completion_ms {
            events.push((at, TimerEvent::Tick));
            at += config.tick_ms;
        }
    }
    events.push((config.completion_ms, TimerEvent::Complete));
    events
}

// =============================================================================
// Browser timers
// =============================================================================

/// The two timers driving one simulated analysis.
///
/// Implemented by [`SimulationTimers`] in the browser and by manual clocks
/// in tests.
pub trait AnalysisTimers {
    /// Schedules both callbacks, replacing any previous schedule.
    fn start(
        &mut self,
        config: SimulationConfig,
        on_tick: impl FnMut() + 'static,
        on_complete: impl FnOnce() + 'static,
    );

    /// Must not be called from inside the tick callback itself.
    fn stop_progress(&mut self);

    fn cancel(&mut self);

    fn is_active(&self) -> bool;
}

/// Timer handles owned by one upload panel.
///
/// Dropping a gloo handle clears the browser timer, so dropping this struct
/// (or the reactive scope holding it) cancels any pending callback.
#[derive(Default)]
pub struct SimulationTimers {
    progress: Option<Interval>,
    completion: Option<Timeout>,
}

impl AnalysisTimers for SimulationTimers {
    fn start(
        &mut self,
        config: SimulationConfig,
        on_tick: impl FnMut() + 'static,
        on_complete: impl FnOnce() + 'static,
    ) {
        self.cancel();
        self.progress = Some(Interval::new(config.tick_ms, on_tick));
        self.completion = Some(Timeout::new(config.completion_ms, on_complete));
    }

    fn stop_progress(&mut self) {
        // Dropping the handle clears the browser interval.
        self.progress.take();
    }

    fn cancel(&mut self) {
        self.stop_progress();
        self.completion.take();
    }

    fn is_active(&self) -> bool {
        self.progress.is_some() || self.completion.is_some()
    }
}

/// Accepts `file` and, only if it passes validation, starts `timers`.
///
/// A rejected file leaves both the state and the timers untouched.
pub fn begin_analysis<T: AnalysisTimers>(
    state: &mut UploadState,
    timers: &mut T,
    file: DatasetFile,
    on_tick: impl FnMut() + 'static,
    on_complete: impl FnOnce() + 'static,
) -> Result<DatasetFormat, UploadError> {
    let format = state.accept(file)?;
    timers.start(state.config(), on_tick, on_complete);
    Ok(format)
}

/// Cancels whatever is still scheduled when the upload panel goes away.
///
/// Returns whether an analysis was abandoned.
pub fn teardown_timers<T: AnalysisTimers>(timers: &mut T) -> bool {
    let abandoned = timers.is_active();
    timers.cancel();
    abandoned
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Timers fired by hand; callbacks are dropped on cancel like gloo handles.
    #[derive(Default)]
    pub(crate) struct ManualTimers {
        pub starts: usize,
        pub cancels: usize,
        on_tick: Option<Box<dyn FnMut()>>,
        on_complete: Option<Box<dyn FnOnce()>>,
    }

    impl ManualTimers {
        /// Fires the tick callback, returning whether one was scheduled.
        pub fn fire_tick(&mut self) -> bool {
            match self.on_tick.as_mut() {
                Some(tick) => {
                    tick();
                    true
                }
                None => false,
            }
        }

        pub fn fire_complete(&mut self) -> bool {
            match self.on_complete.take() {
                Some(complete) => {
                    complete();
                    true
                }
                None => false,
            }
        }
    }

    impl AnalysisTimers for ManualTimers {
        fn start(
            &mut self,
            _config: SimulationConfig,
            on_tick: impl FnMut() + 'static,
            on_complete: impl FnOnce() + 'static,
        ) {
            self.cancel();
            self.starts += 1;
            self.on_tick = Some(Box::new(on_tick));
            self.on_complete = Some(Box::new(on_complete));
        }

        fn stop_progress(&mut self) {
            self.on_tick = None;
        }

        fn cancel(&mut self) {
            self.cancels += 1;
            self.stop_progress();
            self.on_complete = None;
        }

        fn is_active(&self) -> bool {
            self.on_tick.is_some() || self.on_complete.is_some()
        }
    }

    /// Replay the browser schedule, returning every progress value observed
    /// and how many times completion reported success.
    fn run(config: SimulationConfig) -> (UploadState, Vec<u8>, usize) {
        let mut state = UploadState::new(config);
        state.accept(DatasetFile::new("report.csv", 1024)).unwrap();

        let mut observed = vec![state.progress];
        let mut ticking = true;
        let mut completions = 0;
        for (_, event) in timeline(config) {
            match event {
                TimerEvent::Tick if ticking => {
                    ticking = state.tick() == TickOutcome::Continue;
                }
                TimerEvent::Tick => {}
                TimerEvent::Complete => {
                    if state.complete() {
                        completions += 1;
                    }
                    ticking = false;
                }
            }
            observed.push(state.progress);
        }
        (state, observed, completions)
    }

    #[test]
    fn test_accepted_extensions_ignore_case() {
        for name in ["a.csv", "b.TSV", "c.Xlsx", "d.JSON", "archive.tar.csv", ".csv"] {
            assert!(DatasetFormat::from_file_name(name).is_some(), "{name}");
        }
        assert_eq!(DatasetFormat::from_file_name("x.XLSX"), Some(DatasetFormat::Xlsx));
        assert_eq!(DatasetFormat::Xlsx.extension(), "xlsx");
    }

    #[test]
    fn test_rejected_extensions() {
        for name in ["report.pdf", "csv", "data.csv.bak", "notes.txt", "table.xls", ""] {
            assert_eq!(DatasetFormat::from_file_name(name), None, "{name}");
        }
    }

    #[test]
    fn test_rejected_file_leaves_state_untouched() {
        let mut state = UploadState::default();
        let err = state.accept(DatasetFile::new("report.pdf", 10)).unwrap_err();

        assert_eq!(err, UploadError::UnsupportedFormat("report.pdf".into()));
        assert_eq!(state, UploadState::default());
        assert!(!state.is_processing);
        assert_eq!(state.progress, 0);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_size_limit() {
        let exact = DatasetFile::new("big.csv", MAX_FILE_SIZE);
        assert!(validate_dataset(&exact).is_ok());

        let over = DatasetFile::new("big.csv", MAX_FILE_SIZE + 1);
        assert!(matches!(
            validate_dataset(&over),
            Err(UploadError::TooLarge { size, .. }) if size == MAX_FILE_SIZE + 1
        ));
    }

    #[test]
    fn test_accept_starts_processing() {
        let mut state = UploadState::default();
        state.drag_over();
        state.drag_leave();
        let format = state.accept(DatasetFile::new("cohort.json", 42)).unwrap();

        assert_eq!(format, DatasetFormat::Json);
        assert!(state.is_processing);
        assert_eq!(state.progress, 0);
        assert_eq!(state.file_name(), Some("cohort.json"));
        assert_eq!(state.phase(), Phase::Rising);
        assert!(!state.is_dragging);
    }

    #[test]
    fn test_ticks_stop_at_cap() {
        let mut state = UploadState::default();
        state.accept(DatasetFile::new("report.csv", 1)).unwrap();

        for expected in (10..=90).step_by(10) {
            assert_eq!(state.tick(), TickOutcome::Continue);
            assert_eq!(state.progress, expected);
        }
        // The tick after reaching the cap is the one that cancels the timer.
        assert_eq!(state.tick(), TickOutcome::Stop);
        assert_eq!(state.progress, 90);
        assert_eq!(state.phase(), Phase::Holding);
        assert_eq!(state.tick(), TickOutcome::Stop);
        assert_eq!(state.progress, 90);
    }

    #[test]
    fn test_default_run_is_monotonic_and_completes_once() {
        let (state, observed, completions) = run(SimulationConfig::default());

        assert!(observed.windows(2).all(|w| w[0] <= w[1]), "{observed:?}");
        assert!(observed.iter().all(|p| *p <= 100));
        assert_eq!(*observed.last().unwrap(), 100);
        assert_eq!(completions, 1);
        assert_eq!(state.progress, 100);
        assert!(!state.is_processing);
        assert_eq!(state.phase(), Phase::Complete);
    }

    #[test]
    fn test_progress_below_cap_until_completion() {
        let config = SimulationConfig::default();
        let (_, observed, _) = run(config);
        let (last, before) = observed.split_last().unwrap();
        assert_eq!(*last, 100);
        assert!(before.iter().all(|p| *p <= config.cap));
        assert!(before.contains(&config.cap));
    }

    #[test]
    fn test_completion_can_jump_while_still_rising() {
        // Completion fires independently of the ticks: a short delay leaves
        // the bar mid-way and the user sees it jump straight to 100.
        let config = SimulationConfig {
            completion_ms: 900,
            ..SimulationConfig::default()
        };
        let (state, observed, completions) = run(config);

        assert_eq!(completions, 1);
        assert_eq!(&observed[observed.len() - 2..], &[40, 100]);
        assert_eq!(state.progress, 100);
    }

    #[test]
    fn test_late_ticks_do_not_pull_progress_back() {
        let mut state = UploadState::default();
        state.accept(DatasetFile::new("report.csv", 1)).unwrap();
        state.tick();
        assert!(state.complete());

        assert_eq!(state.tick(), TickOutcome::Stop);
        assert_eq!(state.progress, 100);
    }

    #[test]
    fn test_complete_only_reports_once() {
        let mut state = UploadState::default();
        assert!(!state.complete(), "nothing to complete before accept");

        state.accept(DatasetFile::new("report.csv", 1)).unwrap();
        assert!(state.complete());
        assert!(!state.complete());
        assert!(!state.is_processing);
    }

    #[test]
    fn test_progress_reaches_100_before_processing_ends() {
        let mut state = UploadState::default();
        state.accept(DatasetFile::new("report.csv", 1)).unwrap();
        while state.tick() == TickOutcome::Continue {
            assert!(state.is_processing);
            assert!(state.progress < 100);
        }
        state.complete();
        assert_eq!((state.progress, state.is_processing), (100, false));
    }

    #[test]
    fn test_steps_follow_progress_thresholds() {
        let completed = |p: u8| {
            AnalysisStep::for_progress(p)
                .iter()
                .filter(|s| s.completed)
                .count()
        };
        assert_eq!(completed(0), 0);
        assert_eq!(completed(25), 0);
        assert_eq!(completed(30), 1);
        assert_eq!(completed(50), 1);
        assert_eq!(completed(60), 2);
        assert_eq!(completed(80), 3);
        assert_eq!(completed(90), 3);
        assert_eq!(completed(100), 4);

        let steps = AnalysisStep::for_progress(100);
        assert_eq!(steps[0].label, "Schema Validation");
        assert_eq!(steps[3].label, "Generating Report");
    }

    #[test]
    fn test_timeline_orders_ticks_before_completion() {
        let events = timeline(SimulationConfig::default());
        assert_eq!(events.first(), Some(&(200, TimerEvent::Tick)));
        assert_eq!(events.last(), Some(&(3000, TimerEvent::Complete)));
        assert_eq!(
            events.iter().filter(|(_, e)| *e == TimerEvent::Tick).count(),
            15
        );
        assert!(events.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn test_rejected_file_never_starts_timers() {
        let mut state = UploadState::default();
        let mut timers = ManualTimers::default();

        for file in [
            DatasetFile::new("report.pdf", 10),
            DatasetFile::new("huge.csv", MAX_FILE_SIZE + 1),
        ] {
            let result = begin_analysis(&mut state, &mut timers, file, || {}, || {});
            assert!(result.is_err());
        }

        assert_eq!(timers.starts, 0);
        assert!(!timers.is_active());
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state, UploadState::default());
    }

    #[test]
    fn test_accepted_file_starts_timers_once() {
        let mut state = UploadState::default();
        let mut timers = ManualTimers::default();

        let format = begin_analysis(
            &mut state,
            &mut timers,
            DatasetFile::new("cohort.tsv", 10),
            || {},
            || {},
        )
        .unwrap();

        assert_eq!(format, DatasetFormat::Tsv);
        assert_eq!(timers.starts, 1);
        assert!(timers.is_active());
        assert_eq!(state.phase(), Phase::Rising);
    }

    #[test]
    fn test_teardown_cancels_pending_completion() {
        let state = Rc::new(RefCell::new(UploadState::default()));
        let completions = Rc::new(Cell::new(0));
        let mut timers = ManualTimers::default();

        let on_tick = {
            let state = Rc::clone(&state);
            move || {
                state.borrow_mut().tick();
            }
        };
        let on_complete = {
            let state = Rc::clone(&state);
            let completions = Rc::clone(&completions);
            move || {
                if state.borrow_mut().complete() {
                    completions.set(completions.get() + 1);
                }
            }
        };
        let file = DatasetFile::new("report.csv", 10);
        begin_analysis(&mut state.borrow_mut(), &mut timers, file, on_tick, on_complete).unwrap();

        assert!(timers.fire_tick());
        assert_eq!(state.borrow().progress, 10);

        assert!(teardown_timers(&mut timers), "analysis was still running");
        assert_eq!(timers.cancels, 1);
        assert!(!timers.is_active());

        assert!(!timers.fire_tick());
        assert!(!timers.fire_complete());
        assert_eq!(completions.get(), 0);
        assert_eq!(state.borrow().progress, 10);
        assert!(state.borrow().is_processing);
    }

    #[test]
    fn test_teardown_after_completion_is_quiet() {
        let mut timers = ManualTimers::default();
        let mut state = UploadState::default();
        begin_analysis(&mut state, &mut timers, DatasetFile::new("a.csv", 1), || {}, || {})
            .unwrap();

        assert!(timers.fire_complete());
        timers.cancel();
        assert!(!teardown_timers(&mut timers));
        assert!(!timers.is_active());
    }
}
