//! rcwizard: Init Script Wizard Library
//!
//! A first-run wizard that locates or creates a keyboard extension's init
//! script and picks a key scheme, plus the status notification channel the
//! frontends report through.

pub mod cli;
pub mod display;
pub mod locale;
pub mod logging;
pub mod report;
pub mod scheme;
pub mod utils;
pub mod wizard;
