//! Student records and their detail rendering.
//!
//! [`HostelStudent`] extends [`Student`] by composition. Its
//! [`Details::detail_lines`] renders the embedded student first and then
//! appends one line, so base output is always a prefix of derived output.

use std::fmt;

/// Letter grade derived from marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    /// Map marks to a grade. Each band includes its lower bound.
    pub fn from_marks(marks: f64) -> Self {
        if marks >= 90.0 {
            Grade::A
        } else if marks >= 80.0 {
            Grade::B
        } else if marks >= 70.0 {
            Grade::C
        } else if marks >= 60.0 {
            Grade::D
        } else if marks >= 50.0 {
            Grade::E
        } else {
            Grade::F
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that renders itself as a block of detail lines.
pub trait Details {
    fn detail_lines(&self) -> Vec<String>;
}

/// A student record. Marks are not range-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub id: i32,
    pub marks: f64,
}

impl Default for Student {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            id: 0,
            marks: 0.0,
        }
    }
}

impl Student {
    pub fn new(name: impl Into<String>, id: i32, marks: f64) -> Self {
        Self {
            name: name.into(),
            id,
            marks,
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_marks(self.marks)
    }
}

impl Details for Student {
    fn detail_lines(&self) -> Vec<String> {
        vec![
            format!("Student ID: {}", self.id),
            format!("Name: {}", self.name),
            format!("Marks: {}", self.marks),
            format!("Grade: {}", self.grade()),
        ]
    }
}

/// A student who also lives in a named hostel.
#[derive(Debug, Clone, PartialEq)]
pub struct HostelStudent {
    pub student: Student,
    pub hostel: String,
}

impl Default for HostelStudent {
    fn default() -> Self {
        Self {
            student: Student::default(),
            hostel: "Unknown".to_string(),
        }
    }
}

impl HostelStudent {
    pub fn new(name: impl Into<String>, id: i32, marks: f64, hostel: impl Into<String>) -> Self {
        Self {
            student: Student::new(name, id, marks),
            hostel: hostel.into(),
        }
    }
}

impl Details for HostelStudent {
    fn detail_lines(&self) -> Vec<String> {
        let mut lines = self.student.detail_lines();
        lines.push(format!("Hostel: {}", self.hostel));
        lines
    }
}
