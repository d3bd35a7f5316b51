//! Registration controller
//!
//! Owns the form, the rendered roster and the store it writes to. One
//! submission runs start to finish before the next input is read:
//! validate, insert, clear the form, re-read every record, re-render.

use roster_storage::{Database, NewStudent, StudentRecord, StudentStore};

use crate::config::Config;
use crate::form::FormState;
use crate::notice::Notice;
use crate::render::render_roster;
use crate::validation::validate;
use crate::Result;

/// The persistence operations the registry depends on.
pub trait RosterStore {
    fn ensure_schema(&self) -> roster_storage::Result<()>;

    fn insert(&self, student: &NewStudent) -> roster_storage::Result<StudentRecord>;

    fn fetch_all(&self) -> roster_storage::Result<Vec<StudentRecord>>;
}

impl RosterStore for StudentStore {
    fn ensure_schema(&self) -> roster_storage::Result<()> {
        StudentStore::ensure_schema(self)
    }

    fn insert(&self, student: &NewStudent) -> roster_storage::Result<StudentRecord> {
        StudentStore::insert(self, student)
    }

    fn fetch_all(&self) -> roster_storage::Result<Vec<StudentRecord>> {
        StudentStore::fetch_all(self)
    }
}

pub struct Registry<S = StudentStore> {
    store: S,
    form: FormState,
    display: String,
}

impl Registry<StudentStore> {
    /// Build a registry backed by the data file named in `config`.
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;
        let db = Database::open(&config.database_path)?;
        Ok(Self::new(StudentStore::new(db)))
    }
}

impl<S: RosterStore> Registry<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            form: FormState::new(),
            display: String::new(),
        }
    }

    /// Make sure the table exists and render whatever is already stored.
    pub fn startup(&mut self) -> Result<()> {
        self.store.ensure_schema()?;
        self.refresh_display()?;

        tracing::info!("Roster ready");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// The rendered roster as of the last refresh.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Validate and store the current form.
    ///
    /// Rejected or failed submissions leave the form untouched so the user
    /// can correct it and retry.
    pub fn submit(&mut self) -> Notice {
        let student = match validate(&self.form.name, &self.form.age, &self.form.grade) {
            Ok(student) => student,
            Err(err) => {
                tracing::warn!(reason = %err, "Rejected registration");
                return Notice::from(&err);
            }
        };

        if let Err(e) = self.store.insert(&student) {
            tracing::error!("Failed to register student: {}", e);
            return Notice::error(format!("Ocorreu um erro: {}", e));
        }

        self.form.clear();

        if let Err(e) = self.refresh_display() {
            tracing::error!("Failed to refresh roster: {}", e);
        }

        Notice::info(format!("Aluno {} cadastrado com sucesso!", student.name))
    }

    /// Re-read every record and replace the rendered roster.
    /// On failure the previous rendering is kept.
    pub fn refresh_display(&mut self) -> Result<()> {
        let records = self.store.fetch_all()?;
        self.display = render_roster(&records);
        Ok(())
    }
}
