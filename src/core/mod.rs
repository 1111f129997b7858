// Core infrastructure module
// Wave geometry, selection state machine and the application state hosting them

pub mod animation;
pub mod app;
pub mod app_config;
pub mod controller;
pub mod events;
pub mod geometry;
pub mod layout;
pub mod tab;

pub use animation::{AnimationHandle, Easing, Timing};
pub use app::App;
pub use app_config::AppConfig;
pub use controller::{BootstrapOutcome, RenderLayer, SelectionController, WavePhase};
pub use events::{AppEvent, EventHandler};
pub use geometry::{PathSegment, Point, WaveGeometry, WaveOutline, WaveProfile};
pub use layout::{BarLayout, LayoutPass, Viewport};
pub use tab::{ButtonFill, ButtonGeometry, ButtonTreatment, IconRef, LiftOffsets, TabItem, VerticalState};
