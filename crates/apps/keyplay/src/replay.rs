//! Runs a script through the dispatcher and collects what happened

use hotkeys::{
    Action, ChordState, Dispatcher, HotkeysConfig, ManualTimer, Outcome, PageEffect, PageHost,
};
use log::debug;
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::script::{Script, Step};

/// Result of one script step
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub step: String,
    /// Virtual clock after the step, in milliseconds
    pub clock_ms: u64,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    pub prevent_default: bool,
    pub chord_pending: bool,
    pub effects: Vec<PageEffect>,
}

/// Totals over a whole replay
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct Summary {
    pub navigations: usize,
    pub focus_changes: usize,
    pub hook_calls: usize,
    pub dialogs: usize,
    pub final_path: String,
}

#[derive(Debug, Serialize)]
pub struct Replay {
    pub steps: Vec<StepReport>,
    pub summary: Summary,
}

fn outcome_name(outcome: Option<&Outcome>) -> &'static str {
    match outcome {
        None => "waited",
        Some(Outcome::Skipped) => "skipped",
        Some(Outcome::NoMatch) => "no_match",
        Some(Outcome::Handled { .. }) => "handled",
    }
}

/// Replay `script` on a fresh simulated page
pub fn replay(script: &Script, config: HotkeysConfig) -> Replay {
    let hook_calls = Rc::new(Cell::new(0usize));
    let mut dispatcher = Dispatcher::new(script.page(), ManualTimer::new(), config);
    if script.creation_hook {
        let counter = Rc::clone(&hook_calls);
        dispatcher = dispatcher.with_creation_hook(move || counter.set(counter.get() + 1));
    }

    let mut summary = Summary::default();
    let mut steps = Vec::with_capacity(script.steps.len());

    for (index, step) in script.steps.iter().enumerate() {
        let outcome = match step {
            Step::Key(event) => Some(dispatcher.handle_key(event)),
            Step::Wait { wait_ms } => {
                dispatcher.advance(Duration::from_millis(*wait_ms));
                None
            }
        };

        let effects = dispatcher.host().take_effects();
        for effect in &effects {
            match effect {
                PageEffect::Redirected(_) => summary.navigations += 1,
                PageEffect::Focused(_) => summary.focus_changes += 1,
                PageEffect::HelpShown(_) => summary.dialogs += 1,
            }
        }

        let report = StepReport {
            index,
            step: step.describe(),
            clock_ms: u64::try_from(dispatcher.timer().now().as_millis()).unwrap_or(u64::MAX),
            outcome: outcome_name(outcome.as_ref()),
            action: outcome.as_ref().and_then(|o| o.action().cloned()),
            prevent_default: outcome.as_ref().is_some_and(Outcome::prevents_default),
            chord_pending: !matches!(dispatcher.state(), ChordState::Idle),
            effects,
        };
        debug!("Step {}: {} -> {}", index, report.step, report.outcome);
        steps.push(report);
    }

    summary.hook_calls = hook_calls.get();
    summary.final_path = dispatcher.host().pathname();
    Replay { steps, summary }
}

/// Render a step the way the terminal output shows it
pub fn render_step(report: &StepReport) -> String {
    let mut line = format!(
        "{:>6}ms  {:<22} {}",
        report.clock_ms, report.step, report.outcome
    );
    if let Some(action) = &report.action {
        line.push_str(&format!(" {:?}", action));
    }
    if report.prevent_default {
        line.push_str(" [default prevented]");
    }
    if report.chord_pending {
        line.push_str(" [chord pending]");
    }
    for effect in &report.effects {
        match effect {
            PageEffect::Redirected(path) => line.push_str(&format!("\n          -> redirect {}", path)),
            PageEffect::Focused(name) => line.push_str(&format!("\n          -> focus {}", name)),
            PageEffect::HelpShown(text) => {
                line.push_str("\n          -> dialog:");
                for help_line in text.lines() {
                    line.push_str(&format!("\n             {}", help_line));
                }
            }
        }
    }
    line
}
