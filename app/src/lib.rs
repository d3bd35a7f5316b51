//! Student roster - interactive registration form
//!
//! The roster is rendered once the store is ready, then each round reads
//! the form, submits it and re-renders. Storage and validation problems
//! are reported and the loop carries on.

mod output;
mod prompt;

use anyhow::Context;
use dialoguer::theme::ColorfulTheme;
use roster_core::{Config, Registry};

pub fn run() -> anyhow::Result<()> {
    roster_core::init_logging();

    let config = Config::default();
    let mut registry = Registry::open(&config)
        .with_context(|| format!("opening {}", config.database_path.display()))?;
    registry
        .startup()
        .context("preparing the student table")?;

    tracing::info!(path = %config.database_path.display(), "Student roster started");

    let theme = ColorfulTheme::default();

    loop {
        output::roster(registry.display());

        prompt::fill_form(&theme, registry.form_mut())?;
        let notice = registry.submit();
        output::notice(&notice);

        if !prompt::another(&theme)? {
            break;
        }
    }

    Ok(())
}
