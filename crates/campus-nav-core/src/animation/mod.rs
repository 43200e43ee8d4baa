//! Animation scheduling for search replays
//!
//! - `events`: timed visual changes and the states they apply
//! - `schedule`: search result to event list
//! - `timeline`: cancellable, caller-clocked playback
//! - `scene`: the sink trait and an in-memory scene

pub mod events;
pub mod scene;
pub mod schedule;
pub mod timeline;

pub use events::{AnimationEvent, Target, VisualState};
pub use scene::{SceneState, VisualSink};
pub use schedule::plan_animation;
pub use timeline::{restore_steady_state, AnimationHandle, Timeline};
