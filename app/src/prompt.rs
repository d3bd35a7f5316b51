//! Terminal prompts for the registration form

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use roster_core::{FormField, FormState};

/// Ask for every field, offering what is already in the form as the starting text.
pub fn fill_form(theme: &ColorfulTheme, form: &mut FormState) -> dialoguer::Result<()> {
    for field in FormField::ALL {
        let value: String = Input::with_theme(theme)
            .with_prompt(field.label())
            .with_initial_text(form.get(field))
            .allow_empty(true)
            .interact_text()?;
        form.set(field, value);
    }
    Ok(())
}

pub fn another(theme: &ColorfulTheme) -> dialoguer::Result<bool> {
    Confirm::with_theme(theme)
        .with_prompt("Cadastrar outro aluno?")
        .default(true)
        .interact()
}
