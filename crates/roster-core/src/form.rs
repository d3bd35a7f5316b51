//! Registration form state

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Age,
    Grade,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Age, FormField::Grade];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Nome do Aluno",
            FormField::Age => "Idade",
            FormField::Grade => "Série",
        }
    }
}

/// Raw text currently typed into the form. Nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub age: String,
    pub grade: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
            FormField::Grade => &self.grade,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Age => self.age = value,
            FormField::Grade => self.grade = value,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.age.clear();
        self.grade.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.age.is_empty() && self.grade.is_empty()
    }
}
