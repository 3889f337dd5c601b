//! CLI module - argument parsing and the two interactive frontends

mod args;
pub mod file_selector;
pub mod prompts;
pub mod schemes;
pub mod wizard;

pub use args::{Cli, Commands};
pub use file_selector::TuiDirectoryPicker;
pub use prompts::{
    run_prompt_flow, run_prompt_wizard, ConsoleAlertSink, DialoguerPrompter, PromptDirectoryPicker,
    Prompter,
};
pub use schemes::run_list_schemes;
pub use wizard::{run_wizard, WizardView};
