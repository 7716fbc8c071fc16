use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subjects tracked for every student, in storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Physics,
    Mathematics,
    Chemistry,
    Biology,
}

impl Subject {
    pub const COUNT: usize = 4;
    pub const ALL: [Subject; Subject::COUNT] = [
        Subject::Physics,
        Subject::Mathematics,
        Subject::Chemistry,
        Subject::Biology,
    ];

    /// Slot of this subject in a record's grade array
    pub fn index(self) -> usize {
        match self {
            Subject::Physics => 0,
            Subject::Mathematics => 1,
            Subject::Chemistry => 2,
            Subject::Biology => 3,
        }
    }

    /// Canonical name as it appears in grade files
    pub fn name(self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Mathematics => "Mathematics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
        }
    }

    /// Short command word used by the REPL
    pub fn command(self) -> &'static str {
        match self {
            Subject::Physics => "physics",
            Subject::Mathematics => "maths",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
        }
    }
}

impl FromStr for Subject {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "physics" => Ok(Subject::Physics),
            "mathematics" | "maths" | "math" => Ok(Subject::Mathematics),
            "chemistry" => Ok(Subject::Chemistry),
            "biology" => Ok(Subject::Biology),
            _ => Err(SearchError::UnknownSubject(s.to_string())),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sortable grade column: one subject or the total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeField {
    Subject(Subject),
    Total,
}

impl GradeField {
    pub fn command(self) -> &'static str {
        match self {
            GradeField::Subject(subject) => subject.command(),
            GradeField::Total => "total",
        }
    }
}

impl FromStr for GradeField {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("total") {
            Ok(GradeField::Total)
        } else {
            s.parse().map(GradeField::Subject)
        }
    }
}

impl fmt::Display for GradeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeField::Subject(subject) => write!(f, "{}", subject),
            GradeField::Total => f.write_str("Total"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_storage_order() {
        for (i, subject) in Subject::ALL.iter().enumerate() {
            assert_eq!(subject.index(), i);
        }
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("Physics".parse::<Subject>().unwrap(), Subject::Physics);
        assert_eq!("maths".parse::<Subject>().unwrap(), Subject::Mathematics);
        assert_eq!("BIOLOGY".parse::<Subject>().unwrap(), Subject::Biology);
        assert!(matches!(
            "History".parse::<Subject>(),
            Err(SearchError::UnknownSubject(name)) if name == "History"
        ));
    }

    #[test]
    fn test_grade_field_parsing() {
        assert_eq!("total".parse::<GradeField>().unwrap(), GradeField::Total);
        assert_eq!(
            "chemistry".parse::<GradeField>().unwrap(),
            GradeField::Subject(Subject::Chemistry)
        );
        assert!("art".parse::<GradeField>().is_err());
    }

    #[test]
    fn test_name_round_trips() {
        for subject in Subject::ALL {
            assert_eq!(subject.name().parse::<Subject>().unwrap(), subject);
            assert_eq!(subject.command().parse::<Subject>().unwrap(), subject);
        }
    }
}
