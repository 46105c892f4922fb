// fanctl-cli: the interactive fan console.
//
// Split into a library plus a thin binary so the session machinery can
// be driven by integration tests with scripted prompt/service doubles.

pub mod cli;
pub mod error;
pub mod label;
pub mod menu;
pub mod prompt;
pub mod session;
