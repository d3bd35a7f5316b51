//! Roster and notice output

use roster_core::{Notice, NoticeLevel};

pub fn roster(text: &str) {
    println!();
    println!("Alunos cadastrados");
    println!("{}", text.trim_end());
    println!();
}

pub fn notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Info => println!("✓ {}", notice),
        NoticeLevel::Warning => eprintln!("! {}", notice),
        NoticeLevel::Error => eprintln!("✗ {}", notice),
    }
}
