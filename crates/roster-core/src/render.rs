//! Roster rendering

use roster_storage::StudentRecord;

/// Shown instead of the listing when nothing has been registered yet.
pub const EMPTY_ROSTER: &str = "Nenhum aluno cadastrado.";

pub fn render_record(record: &StudentRecord) -> String {
    format!(
        "ID: {} | Nome: {} | Idade: {} | Série: {}",
        record.id, record.name, record.age, record.grade
    )
}

/// One line per record, in the order given.
pub fn render_roster(records: &[StudentRecord]) -> String {
    if records.is_empty() {
        return EMPTY_ROSTER.to_string();
    }

    records
        .iter()
        .map(|record| render_record(record) + "\n")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str, age: i64, grade: &str) -> StudentRecord {
        StudentRecord {
            id,
            name: name.to_string(),
            age,
            grade: grade.to_string(),
        }
    }

    #[test]
    fn test_empty_roster_placeholder() {
        assert_eq!(render_roster(&[]), EMPTY_ROSTER);
    }

    #[test]
    fn test_one_line_per_record() {
        let text = render_roster(&[record(1, "Ana", 12, "7A"), record(2, "Bruno", 13, "8B")]);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ID: 1 | Nome: Ana | Idade: 12 | Série: 7A",
                "ID: 2 | Nome: Bruno | Idade: 13 | Série: 8B",
            ]
        );
    }
}
