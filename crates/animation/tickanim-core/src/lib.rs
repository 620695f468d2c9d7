//! tickanim core (engine-agnostic)
//!
//! Tick-driven animation scheduling for embedded user interfaces. An
//! [`Engine`] holds a set of time-bounded integer transitions; each call to
//! [`Engine::update`] advances them, samples their path curve and hands the
//! interpolated value to a caller-supplied [`Setter`]. Legs can play back in
//! reverse and repeat, with pauses in between, all on 16-bit millisecond
//! counters.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tickanim_core::{AnimationDescriptor, Config, Engine, SetterRef, TargetId};
//!
//! let opacity = Rc::new(Cell::new(0));
//! let o = opacity.clone();
//! let set_opacity: SetterRef = Rc::new(move |_t: TargetId, v: i32| o.set(v));
//!
//! let mut engine = Engine::new(Config::default());
//! engine.create(
//!     AnimationDescriptor::new(TargetId(1), set_opacity)
//!         .with_range(0, 255)
//!         .with_duration(100),
//! );
//! engine.update(50);
//! assert_eq!(opacity.get(), 128);
//! engine.update(50);
//! assert_eq!(opacity.get(), 255);
//! assert!(engine.is_empty());
//! ```

pub mod clock;
pub mod config;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod ids;
pub mod outputs;
pub mod path;
pub mod record;
pub mod registry;
mod scheduler;
pub mod timing;

// Re-exports for consumers (hosts)
pub use clock::{ManualClock, SystemClock, TickSource};
pub use config::{CompletionPolicy, Config};
pub use descriptor::{AnimCfg, AnimationDescriptor};
pub use engine::Engine;
pub use error::AnimError;
pub use ids::{AnimId, TargetId};
pub use outputs::{AnimEvent, Change, Outputs};
pub use path::{get_path, PathFunction, PathName, PathRef, PathTable, TablePath};
pub use record::{same_setter, AnimationRecord, EndCallback, Leg, Phase, Setter, SetterRef};
pub use registry::AnimationRegistry;
pub use timing::speed_to_time;
