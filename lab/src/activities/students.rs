//! Activity 4: student records and the hostel extension.

use anyhow::Result;

use crate::activities::banner;
use crate::core::menu::ActivityId;
use crate::core::student::{Details, HostelStudent, Student};
use crate::io::console::{Console, ask, blank, write_lines};

const SEPARATOR: &str = "------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Demo {
    Regular,
    Hostel,
    Both,
}

impl Demo {
    fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Demo::Regular,
            "2" => Demo::Hostel,
            _ => Demo::Both,
        }
    }
}

pub fn run<C: Console + ?Sized>(console: &mut C) -> Result<()> {
    banner(console, ActivityId::Students)?;

    console.write_line("Choose which demonstration to run:")?;
    console.write_line("1. Regular Student Class")?;
    console.write_line("2. Hostel Student Class")?;
    let choice = ask(console, "Enter your choice (1 or 2): ")?.unwrap_or_default();
    blank(console)?;

    match Demo::from_choice(&choice) {
        Demo::Regular => regular_demo(console),
        Demo::Hostel => hostel_demo(console),
        Demo::Both => {
            console.write_line("Invalid choice. Running both demonstrations.")?;
            blank(console)?;
            show(
                console,
                "Student 1 Details:",
                &Student::new("Ravi Menon", 101, 85.5),
            )?;
            blank(console)?;
            console.write_line(SEPARATOR)?;
            blank(console)?;
            hostel_demo(console)
        }
    }
}

/// Parameterized, copied-then-edited, and default-then-filled students.
#[allow(clippy::field_reassign_with_default)]
fn regular_demo<C: Console + ?Sized>(console: &mut C) -> Result<()> {
    let first = Student::new("Asha Menon", 101, 85.5);
    show(console, "Student 1 Details:", &first)?;
    blank(console)?;

    let mut second = first.clone();
    second.name = "Ravi Menon".to_string();
    second.id = 102;
    show(console, "Student 2 Details (using Student 1):", &second)?;
    blank(console)?;

    let mut third = Student::default();
    third.name = "Meera Menon".to_string();
    third.id = 103;
    third.marks = 92.0;
    show(console, "Student 3 Details:", &third)
}

fn hostel_demo<C: Console + ?Sized>(console: &mut C) -> Result<()> {
    let student = HostelStudent::new("Asha Menon", 201, 88.0, "Aravali");
    show(console, "Hostel Student Details:", &student)
}

fn show<C, D>(console: &mut C, heading: &str, record: &D) -> Result<()>
where
    C: Console + ?Sized,
    D: Details,
{
    console.write_line(heading)?;
    write_lines(console, record.detail_lines())
}
