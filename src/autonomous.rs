//! Simulated autonomous execution (`claude -a <goal>`).
//!
//! Nothing is planned or executed: each step shows a phase with a spinner,
//! waits a fixed delay, and the goal counts as achieved after
//! [`GOAL_STEP`] steps.

use crate::model::Model;
use indicatif::ProgressBar;
use std::time::Duration;

/// Step at which the demo declares the goal achieved.
pub const GOAL_STEP: u32 = 3;

const PHASES: [&str; 4] = [
    "Analyzing current state",
    "Identifying required actions",
    "Executing tools and commands",
    "Validating results",
];

#[derive(Debug, Clone)]
pub struct AutonomousRun {
    pub max_iterations: u32,
    /// Time a single step spends "working".
    pub step_delay: Duration,
    /// Pause between steps.
    pub pause: Duration,
}

impl AutonomousRun {
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            step_delay: Duration::from_millis(1500),
            pause: Duration::from_millis(1000),
        }
    }

    /// Phase label shown for a 1-based step number.
    pub fn phase(step: u32) -> &'static str {
        let idx = (step.max(1) as usize - 1).min(PHASES.len() - 1);
        PHASES[idx]
    }

    /// Run the demo loop. Returns the number of steps taken.
    pub fn run(&self, model: Model, goal: &str) -> u32 {
        println!(
            "\n🚀 Starting autonomous execution with {}",
            model.as_str().to_uppercase()
        );
        println!("📋 Goal: {}", goal);
        println!("{}", "=".repeat(60));

        let mut step = 0;
        while step < self.max_iterations {
            step += 1;
            println!("\n🔄 Step {}:", step);

            let phase = Self::phase(step);
            let spinner = ProgressBar::new_spinner();
            spinner.set_message(format!("{}...", phase));
            spinner.enable_steady_tick(Duration::from_millis(100));
            std::thread::sleep(self.step_delay);
            spinner.finish_and_clear();
            println!("✓ {}", phase);

            if step == 2 {
                println!("   🔧 Running: git status");
                println!("   📊 Analyzing: GitHub issues");
            }

            if step >= GOAL_STEP {
                println!("\n✅ GOAL ACHIEVED: Task completed successfully");
                break;
            }

            std::thread::sleep(self.pause);
        }

        println!("\n🏁 Autonomous execution completed");
        step
    }
}
