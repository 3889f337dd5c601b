//! Tables summarizing a finished wizard and the scheme catalog

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::locale::Localizer;
use crate::scheme::SchemeCatalog;
use crate::wizard::{Method, WizardResult};

/// Build the table describing a wizard result
pub fn result_table(result: &WizardResult, localizer: &dyn Localizer) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Setting").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let Some(done) = result.completed() else {
        table.add_row(vec![
            Cell::new("Status"),
            Cell::new("Cancelled").fg(Color::Yellow),
        ]);
        return table;
    };

    let method = match done.method {
        Method::Create => "Create new init file",
        Method::Select => "Use existing init file",
    };
    table.add_row(vec![Cell::new("📝 Method"), Cell::new(method)]);
    table.add_row(vec![
        Cell::new("📂 Directory"),
        Cell::new(done.path.display()),
    ]);
    table.add_row(vec![
        Cell::new("📄 File name"),
        Cell::new(&done.filename).fg(Color::Cyan),
    ]);

    if let Some(scheme) = &done.scheme {
        table.add_row(vec![
            Cell::new("⌨️  Key scheme"),
            Cell::new(localizer.lookup(&scheme.display_name)).fg(Color::Green),
        ]);
    }

    for (name, key) in &done.key_bindings {
        table.add_row(vec![Cell::new(format!("   {}", name)), Cell::new(key)]);
    }

    table
}

/// Print the result summary to stderr
pub fn display_result(result: &WizardResult, localizer: &dyn Localizer) {
    eprintln!();
    eprintln!(
        "    {} {}",
        style("📋").cyan(),
        style("WIZARD SUMMARY").white().bold()
    );
    eprintln!("    {}", style("─".repeat(50)).dim());
    eprintln!();
    eprintln!("{}", result_table(result, localizer));
}

/// Build the table listing every loaded scheme
pub fn scheme_table(catalog: &SchemeCatalog, localizer: &dyn Localizer) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
        Cell::new("Icon").add_attribute(Attribute::Bold),
    ]);

    for (i, scheme) in catalog.schemes.iter().enumerate() {
        let id = if i == 0 {
            Cell::new(format!("{} (default)", scheme.id)).fg(Color::Green)
        } else {
            Cell::new(&scheme.id)
        };
        table.add_row(vec![
            id,
            Cell::new(localizer.lookup(&scheme.display_name)),
            Cell::new(localizer.lookup(&scheme.description)),
            Cell::new(&scheme.icon),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::CatalogLocalizer;
    use crate::scheme::{SchemeDescriptor, DEFAULT_SCHEME_ICON};
    use crate::wizard::CompletedWizard;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    #[test]
    fn test_cancelled_table_has_status_row() {
        let table = result_table(&WizardResult::Cancelled, &CatalogLocalizer::default());
        assert!(table.to_string().contains("Cancelled"));
    }

    #[test]
    fn test_completed_table_lists_scheme_and_bindings() {
        let result = WizardResult::Completed(Box::new(CompletedWizard {
            method: Method::Create,
            path: PathBuf::from("/home/me"),
            filename_index: 0,
            filename: ".rcwizard.js".to_string(),
            scheme: Some(SchemeDescriptor {
                id: "emacs".to_string(),
                display_name: "Emacs".into(),
                description: "".into(),
                icon: DEFAULT_SCHEME_ICON.to_string(),
                source: PathBuf::from("schemes/emacs.json"),
            }),
            key_bindings: BTreeMap::from([("quit".to_string(), "C-g".to_string())]),
        }));

        let rendered = result_table(&result, &CatalogLocalizer::default()).to_string();
        assert!(rendered.contains(".rcwizard.js"));
        assert!(rendered.contains("Emacs"));
        assert!(rendered.contains("C-g"));
    }
}
