//! Interactive prompts using dialoguer
//!
//! Line-oriented alternative to the full-screen wizard, for terminals where
//! raw mode is unavailable or unwanted (`--plain`). The flow itself only talks
//! to a [`Prompter`]; [`DialoguerPrompter`] is the terminal implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use super::args::Cli;
use crate::utils::{print_info, print_page_header, print_success, print_target, print_warning};
use crate::wizard::{
    AlertSink, DirectoryPicker, PathChange, WizardController, WizardError, WizardPage,
    WizardResult,
};

/// Source of answers for the prompt flow
pub trait Prompter {
    /// Pick one of `items`. `Ok(None)` means the user backed out.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    fn input(&mut self, prompt: &str, default: &str) -> Result<String>;
}

/// [`Prompter`] reading from the terminal
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()?;
        Ok(selection)
    }

    /// Prompt user to confirm proceeding with an action
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }

    fn input(&mut self, prompt: &str, default: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        Ok(answer)
    }
}

/// Directory picker reading a path from the prompt; empty input cancels
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptDirectoryPicker;

impl DirectoryPicker for PromptDirectoryPicker {
    fn pick_directory(&mut self, initial: &Path) -> std::io::Result<Option<PathBuf>> {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Directory (empty to keep {})",
                initial.display()
            ))
            .allow_empty(true)
            .interact_text()
            .map_err(std::io::Error::other)?;

        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }

        let path = PathBuf::from(answer);
        if !path.is_dir() {
            print_warning("Not a directory:", answer);
            return Ok(None);
        }
        Ok(Some(path))
    }
}

/// Alerts printed as a styled warning line
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAlertSink;

impl AlertSink for ConsoleAlertSink {
    fn warn(&mut self, title: &str, message: &str) {
        tracing::warn!(title, message, "alert raised");
        print_warning(title, message);
    }
}

/// Run the wizard as a sequence of terminal prompts
pub fn run_prompt_wizard(cli: &Cli) -> Result<WizardResult> {
    let collaborators = cli.collaborators(PromptDirectoryPicker, Box::new(ConsoleAlertSink));
    let mut controller = WizardController::new(cli.host_defaults(), collaborators)
        .context("Failed to open the wizard")?;
    controller.set_special_key_bindings(cli.keys.iter().cloned())?;

    run_prompt_flow(&mut controller, &mut DialoguerPrompter::default())
}

/// Drive `controller` to a result with answers from `prompter`
pub fn run_prompt_flow<P>(controller: &mut WizardController, prompter: &mut P) -> Result<WizardResult>
where
    P: Prompter + ?Sized,
{
    loop {
        let step = match controller.page() {
            WizardPage::SelectMethod => prompt_method(controller, prompter)?,
            WizardPage::CreateRcFile | WizardPage::SelectRcFile => {
                prompt_target(controller, prompter)?
            }
            WizardPage::SchemePick => prompt_scheme(controller, prompter)?,
            // Entered already closed; report it the same way a TUI quit would
            WizardPage::Finished | WizardPage::Cancelled => Some(controller.cancel()?),
        };

        if let Some(result) = step {
            return Ok(result);
        }
    }
}

fn prompt_method<P: Prompter + ?Sized>(
    controller: &mut WizardController,
    prompter: &mut P,
) -> Result<Option<WizardResult>> {
    print_page_header(1, WizardPage::SelectMethod.title());

    let options = [
        controller.message("methodCreate", &[]),
        controller.message("methodSelect", &[]),
    ];
    match prompter.select("How do you want to start?", &options, 0)? {
        Some(index) => {
            controller.choose_method(index)?;
            Ok(None)
        }
        None => Ok(Some(controller.cancel()?)),
    }
}

fn prompt_target<P: Prompter + ?Sized>(
    controller: &mut WizardController,
    prompter: &mut P,
) -> Result<Option<WizardResult>> {
    let for_select_page = controller.page() == WizardPage::SelectRcFile;
    print_page_header(2, controller.page().title());

    loop {
        print_target(controller.state().target().path());
        if prompter.confirm("Use this directory?", true)? {
            break;
        }
        match controller.request_path_change(for_select_page) {
            Ok(PathChange::Changed(path)) => {
                print_success(&controller.message("pathChanged", &[&path.display().to_string()]));
            }
            Ok(PathChange::Unchanged) => {}
            // Already reported through the alert sink
            Err(WizardError::NoScriptFound { .. }) => {}
            Err(e) => return Err(e.into()),
        }
    }

    let candidates = controller.defaults().filename_candidates.clone();
    if candidates.len() > 1 {
        let current = controller.state().chosen_filename_index();
        if let Some(index) = prompter.select("Init file name", &candidates, current)? {
            controller.select_filename(index)?;
        }
    }

    if for_select_page {
        return finish_or_report(controller);
    }

    controller.advance()?;
    let loaded = controller.schemes().len().to_string();
    print_info(&controller.message("schemesLoaded", &[&loaded]));
    if controller.skipped_schemes() > 0 {
        let skipped = controller.skipped_schemes().to_string();
        print_warning(
            &controller.message("alertTitle", &[]),
            &controller.message("schemesSkipped", &[&skipped]),
        );
    }
    Ok(None)
}

fn prompt_scheme<P: Prompter + ?Sized>(
    controller: &mut WizardController,
    prompter: &mut P,
) -> Result<Option<WizardResult>> {
    print_page_header(3, WizardPage::SchemePick.title());

    if controller.schemes().is_empty() {
        print_warning(
            &controller.message("alertTitle", &[]),
            &controller.message("noSchemeAvailable", &[]),
        );
        let choices = ["Go back".to_string(), "Cancel the wizard".to_string()];
        if prompter.select("What now?", &choices, 0)? == Some(1) {
            return Ok(Some(controller.cancel()?));
        }
        controller.back()?;
        return Ok(None);
    }

    let names: Vec<String> = controller
        .schemes()
        .iter()
        .map(|s| controller.scheme_name(s))
        .collect();
    let current = controller
        .chosen_scheme()
        .and_then(|chosen| controller.schemes().iter().position(|s| s == chosen))
        .unwrap_or(0);

    let Some(index) = prompter.select("Key scheme", &names, current)? else {
        controller.back()?;
        return Ok(None);
    };
    let id = controller.schemes()[index].id.clone();
    controller.select_scheme(&id)?;
    if let Some(description) = controller.scheme_description().filter(|d| !d.is_empty()) {
        print_info(&description);
    }

    if prompter.confirm("Customize special keys?", false)? {
        let bindings = prompt_special_keys(controller, prompter)?;
        controller.set_special_key_bindings(bindings)?;
    }

    finish_or_report(controller)
}

/// Ask for each special key, defaulting to the current or stock binding
fn prompt_special_keys<P: Prompter + ?Sized>(
    controller: &WizardController,
    prompter: &mut P,
) -> Result<Vec<(String, String)>> {
    controller
        .state()
        .special_keys_with_stock()
        .into_iter()
        .map(|(name, current)| {
            let answer = prompter.input(&name, &current)?;
            let key = match answer.trim() {
                "" => current,
                key => key.to_string(),
            };
            Ok((name, key))
        })
        .collect()
}

fn finish_or_report(controller: &mut WizardController) -> Result<Option<WizardResult>> {
    match controller.finish() {
        Ok(result) => Ok(Some(result)),
        Err(WizardError::NoSchemeAvailable) => {
            print_warning(
                &controller.message("alertTitle", &[]),
                &controller.message("noSchemeAvailable", &[]),
            );
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
