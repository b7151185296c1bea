use std::cell::{ Cell, RefCell };
use std::sync::atomic::{ AtomicUsize, Ordering };
use std::thread;

use anyhow::{ anyhow, Result };
use log::{ debug, error, info };
use serde::Serialize;

use behaviors::config::PlaygroundConfig;
use behaviors::implementations::{ AssignOnce, Lazy, Observed, Synchronized };
use behaviors::models::common::BehaviorKind;
use behaviors::models::property::BoundProperty;
use behaviors::models::slot::SlotState;

use crate::cli::ui;

/// What a demo run observed
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub behavior: BehaviorKind,
    pub property: String,
    pub reads: Vec<String>,
    pub initializer_calls: usize,
    pub final_state: SlotState,
    pub final_value: Option<String>,
    pub violations: Vec<String>,
    pub events: Vec<String>,
}

impl DemoReport {
    fn new(behavior: BehaviorKind, property: &str) -> Self {
        Self {
            behavior,
            property: property.to_string(),
            reads: Vec::new(),
            initializer_calls: 0,
            final_state: SlotState::Absent,
            final_value: None,
            violations: Vec::new(),
            events: Vec::new(),
        }
    }
}

/// Demo command
pub fn execute(
    kind: BehaviorKind,
    config: &PlaygroundConfig,
    misuse: bool,
    output_format: &str
) -> Result<()> {
    info!("Running {} demo with {} reads", kind, config.reads);
    let report = run(kind, config, misuse)?;

    if output_format == "json" {
        println!("{}", render_json(&report)?);
        return Ok(());
    }

    ui::print_header(&format!("{} property `{}`", kind, report.property));
    ui::print_wrapped(kind.description(), 0);
    println!();
    for (i, value) in report.reads.iter().enumerate() {
        ui::print_result(&format!("Read {}", i + 1), &format!("{:?}", value));
    }
    if kind != BehaviorKind::Observed && kind != BehaviorKind::AssignOnce {
        ui::print_result("Initializer calls", &report.initializer_calls.to_string());
    }
    ui::print_slot_state(report.final_state);
    if let Some(value) = &report.final_value {
        ui::print_result("Final value", &format!("{:?}", value));
    }
    for event in &report.events {
        ui::print_info(event);
    }
    for violation in &report.violations {
        ui::print_warning(violation);
    }
    if misuse && report.violations.is_empty() {
        ui::print_info("This behavior has no contract that can be violated.");
    }
    ui::print_success("Demo finished");
    Ok(())
}

pub fn render_json(report: &DemoReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Run the scenario for `kind` and collect what happened
pub fn run(kind: BehaviorKind, config: &PlaygroundConfig, misuse: bool) -> Result<DemoReport> {
    match kind {
        BehaviorKind::Lazy => Ok(run_lazy(config)),
        BehaviorKind::AssignOnce => Ok(run_assign_once(config, misuse)),
        BehaviorKind::Synchronized => run_synchronized(config),
        BehaviorKind::Observed => Ok(run_observed(config)),
    }
}

fn run_lazy(config: &PlaygroundConfig) -> DemoReport {
    let calls = Cell::new(0);
    let mut property = BoundProperty::new(
        "value",
        Lazy::new(|| {
            calls.set(calls.get() + 1);
            debug!("lazy initializer called");
            config.greeting.clone()
        })
    );
    let mut report = DemoReport::new(BehaviorKind::Lazy, property.name());

    for _ in 0..config.reads {
        report.reads.push(property.get().clone());
    }
    report.final_state = property.state();
    report.final_value = property.behavior().peek().cloned();
    drop(property);
    report.initializer_calls = calls.get();
    report
}

fn run_assign_once(config: &PlaygroundConfig, misuse: bool) -> DemoReport {
    let mut property = BoundProperty::new("initialized_later", AssignOnce::new());
    let mut report = DemoReport::new(BehaviorKind::AssignOnce, property.name());

    if misuse {
        if let Err(e) = property.try_get() {
            report.violations.push(e.to_string());
        }
    }

    property.set(config.greeting.clone());
    report.events.push(format!("assigned {:?}", config.greeting));

    for _ in 0..config.reads {
        report.reads.push(property.get().clone());
    }

    if misuse {
        if let Err(e) = property.try_set(format!("{} again", config.greeting)) {
            report.violations.push(e.to_string());
        }
    }
    report.final_state = property.state();
    report.final_value = property.into_inner().into_inner();
    report
}

fn run_synchronized(config: &PlaygroundConfig) -> Result<DemoReport> {
    let mut report = DemoReport::new(BehaviorKind::Synchronized, "value");
    let calls = AtomicUsize::new(0);
    let property = Synchronized::new(|| {
        calls.fetch_add(1, Ordering::SeqCst);
        debug!("synchronized initializer called on {:?}", thread::current().id());
        config.greeting.clone()
    });

    let per_thread = read_concurrently(&property, config.threads, config.reads)?;

    report.events.push(format!("{} threads read concurrently", per_thread.len()));
    report.reads = per_thread.into_iter().flatten().collect();
    report.final_state = property.state();
    report.final_value = report.reads.last().cloned();
    report.initializer_calls = calls.load(Ordering::SeqCst);
    Ok(report)
}

/// Read `property` `reads` times from each of `threads` threads.
/// Fails if any reader thread panicked.
fn read_concurrently<V, F>(
    property: &Synchronized<V, F>,
    threads: usize,
    reads: usize
) -> Result<Vec<Vec<V>>>
    where V: Clone + Send, F: Fn() -> V + Sync
{
    let results: Vec<thread::Result<Vec<V>>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| scope.spawn(move || (0..reads).map(|_| property.get()).collect::<Vec<_>>()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect()
    });

    let failed = results.iter().filter(|result| result.is_err()).count();
    if failed > 0 {
        error!("{} of {} reader threads panicked", failed, threads);
        return Err(anyhow!("{} of {} reader threads panicked while reading the property", failed, threads));
    }
    Ok(results.into_iter().filter_map(|result| result.ok()).collect())
}

fn run_observed(config: &PlaygroundConfig) -> DemoReport {
    let events = RefCell::new(Vec::new());
    let mut property = BoundProperty::new(
        "observed",
        Observed::new(String::new())
            .will_set(|current: &String, new: &String| {
                events.borrow_mut().push(format!("will set {:?} -> {:?}", current, new))
            })
            .did_set(|old: &String, current: &String| {
                events.borrow_mut().push(format!("did set {:?} -> {:?}", old, current))
            })
    );
    let mut report = DemoReport::new(BehaviorKind::Observed, property.name());

    property.set(config.greeting.clone());
    for _ in 0..config.reads {
        report.reads.push(property.get().clone());
    }
    report.final_state = property.state();
    report.final_value = Some(property.into_inner().into_inner());
    report.events = events.into_inner();
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazy_demo_initializes_once() {
        let config = PlaygroundConfig::default();
        let report = run(BehaviorKind::Lazy, &config, false).unwrap();
        assert_eq!(report.property, "value");
        assert_eq!(report.reads, vec!["hello", "hello"]);
        assert_eq!(report.initializer_calls, 1);
        assert_eq!(report.final_state, SlotState::Present);
        assert_eq!(report.final_value.as_deref(), Some("hello"));
    }

    #[test]
    fn assign_once_misuse_reports_both_violations() {
        let config = PlaygroundConfig::default();
        let report = run(BehaviorKind::AssignOnce, &config, true).unwrap();
        assert_eq!(report.property, "initialized_later");
        assert_eq!(report.violations.len(), 2);
        assert!(report.violations[0].contains("`initialized_later` read before it was assigned"));
        assert!(report.violations[1].contains("`initialized_later` assigned more than once"));
        assert_eq!(report.reads, vec!["hello", "hello"]);
        assert_eq!(report.final_value.as_deref(), Some("hello"));
    }

    #[test]
    fn synchronized_demo_initializes_once_across_threads() {
        let config = PlaygroundConfig { threads: 6, reads: 3, ..PlaygroundConfig::default() };
        let report = run(BehaviorKind::Synchronized, &config, false).unwrap();
        assert_eq!(report.initializer_calls, 1);
        assert_eq!(report.reads.len(), 18);
        assert_eq!(report.events, vec!["6 threads read concurrently"]);
    }

    #[test]
    fn panicking_reader_thread_fails_the_run() {
        let attempts = AtomicUsize::new(0);
        let property = Synchronized::new(|| {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("initializer fails on its first attempt");
            }
            "hello".to_string()
        });
        let err = read_concurrently(&property, 4, 1).unwrap_err();
        assert_eq!(err.to_string(), "1 of 4 reader threads panicked while reading the property");
        // The failed attempt released the lock, so the value is still reachable.
        assert_eq!(property.get(), "hello");
    }

    #[test]
    fn observed_demo_records_observers() {
        let config = PlaygroundConfig { reads: 1, ..PlaygroundConfig::default() };
        let report = run(BehaviorKind::Observed, &config, false).unwrap();
        assert_eq!(report.events, vec!["will set \"\" -> \"hello\"", "did set \"\" -> \"hello\""]);
        assert_eq!(report.final_value.as_deref(), Some("hello"));
    }

    #[test]
    fn json_report_names_behavior_and_state() {
        let report = run(BehaviorKind::Lazy, &PlaygroundConfig::default(), false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(json["behavior"], "lazy");
        assert_eq!(json["property"], "value");
        assert_eq!(json["final_state"], "present");
        assert_eq!(json["initializer_calls"], 1);
        assert_eq!(json["reads"], serde_json::json!(["hello", "hello"]));
    }
}
