use clap::Args;
use devgalaxy::error::GxResult;
use devgalaxy::transition::{Phase, TransitionController, TransitionObserver, TransitionRequest};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, Instant};

#[derive(Args, Debug, Clone)]
pub struct TransitionArgs {
    #[arg(long, default_value = "home")]
    pub from: String,

    #[arg(long, default_value = "galaxy")]
    pub to: String,

    /// Fire a second navigation this many ms after the first
    #[arg(long)]
    pub restart_after_ms: Option<u64>,

    /// Destination of the second navigation (defaults to --to)
    #[arg(long)]
    pub restart_to: Option<String>,
}

struct PhaseLogger {
    started: Instant,
}

impl PhaseLogger {
    fn elapsed_ms(&self) -> u128 {
        self.started.elapsed().as_millis()
    }
}

impl TransitionObserver for PhaseLogger {
    fn on_transition_complete(&self, request: &TransitionRequest) {
        println!(
            "  +{:>4}ms  ⇄ swap content {} -> {}",
            self.elapsed_ms(),
            request.from_page,
            request.to_page
        );
    }

    fn on_phase_change(&self, phase: Phase, request: &TransitionRequest) {
        println!(
            "  +{:>4}ms  {:<8} ({} -> {})",
            self.elapsed_ms(),
            phase,
            request.from_page,
            request.to_page
        );
    }
}

pub fn run(args: TransitionArgs) -> GxResult<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async move {
        let logger = Arc::new(PhaseLogger {
            started: Instant::now(),
        });
        let mut controller = TransitionController::new(logger)?;

        println!("\n🌌 Transition {} -> {}", args.from, args.to);
        controller.begin(TransitionRequest::new(&args.from, &args.to));

        if let Some(delay) = args.restart_after_ms {
            time::sleep(Duration::from_millis(delay)).await;
            let to = args.restart_to.clone().unwrap_or_else(|| args.to.clone());
            controller.begin(TransitionRequest::new(&args.from, to));
        }

        while controller.phase() != Phase::Complete {
            time::sleep(Duration::from_millis(10)).await;
        }

        controller.begin(TransitionRequest::inactive(&args.from, &args.to));
        println!(
            "  idle: transitioning = {}",
            controller.is_transitioning()
        );
        Ok(())
    })
}
