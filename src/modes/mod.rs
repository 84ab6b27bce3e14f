pub mod headless;
pub mod realtime;

pub use headless::{HeadlessMode, ScriptStep, parse_script};
pub use realtime::RealtimeMode;
