pub mod controller;
pub mod phase;

pub use self::controller::{TransitionController, TransitionObserver};
pub use self::phase::{Phase, TransitionRequest, TransitionSnapshot};
