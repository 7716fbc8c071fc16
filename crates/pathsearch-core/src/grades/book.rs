use super::subject::{GradeField, Subject};
use crate::bail_malformed;
use crate::error::{Result, SearchError};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// One student's grades, indexed by `Subject::index`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    name: String,
    grades: [u16; Subject::COUNT],
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, grades: [u16; Subject::COUNT]) -> Self {
        Self {
            name: name.into(),
            grades,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self, subject: Subject) -> u16 {
        self.grades[subject.index()]
    }

    pub fn grades(&self) -> &[u16; Subject::COUNT] {
        &self.grades
    }

    /// Sum of all subject grades
    pub fn total(&self) -> u32 {
        self.grades.iter().map(|&g| u32::from(g)).sum()
    }

    pub fn field(&self, field: GradeField) -> u32 {
        match field {
            GradeField::Subject(subject) => u32::from(self.grade(subject)),
            GradeField::Total => self.total(),
        }
    }
}

/// Record arena plus precomputed orders.
///
/// Orders are index vectors into `records`: names ascending, every grade
/// column descending with ties broken by name.
#[derive(Debug, Clone)]
pub struct GradeBook {
    records: Vec<StudentRecord>,
    by_name: Vec<usize>,
    by_subject: [Vec<usize>; Subject::COUNT],
    by_total: Vec<usize>,
}

impl GradeBook {
    pub fn from_records(records: Vec<StudentRecord>) -> Self {
        let mut by_name: Vec<usize> = (0..records.len()).collect();
        by_name.sort_by(|&a, &b| records[a].name.cmp(&records[b].name));

        let descending = |field: GradeField| {
            let mut order: Vec<usize> = (0..records.len()).collect();
            order.sort_by(|&a, &b| {
                records[b]
                    .field(field)
                    .cmp(&records[a].field(field))
                    .then_with(|| records[a].name.cmp(&records[b].name))
            });
            order
        };

        let by_subject = Subject::ALL.map(|subject| descending(GradeField::Subject(subject)));
        let by_total = descending(GradeField::Total);

        Self {
            records,
            by_name,
            by_subject,
            by_total,
        }
    }

    /// Parse `name subject grade` lines. Lines for the same student are
    /// merged; a subject never mentioned counts as zero.
    pub fn parse(text: &str) -> Result<Self> {
        let mut records: Vec<StudentRecord> = Vec::new();
        let mut index_by_name: HashMap<String, usize> = HashMap::new();

        for (line_no, line) in text.lines().enumerate().map(|(i, l)| (i + 1, l)) {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let (name, subject, grade) = match tokens.as_slice() {
                [] => continue,
                [name, subject, grade] => (*name, *subject, *grade),
                _ => bail_malformed!(
                    "line {}: expected 'name subject grade', found {} fields",
                    line_no,
                    tokens.len()
                ),
            };

            let subject: Subject = subject.parse().map_err(|e: SearchError| {
                SearchError::malformed(format!("line {}: {}", line_no, e))
            })?;
            let grade: u16 = grade.parse().map_err(|_| {
                SearchError::malformed(format!(
                    "line {}: grade '{}' is not a non-negative integer",
                    line_no, grade
                ))
            })?;

            let slot = *index_by_name.entry(name.to_string()).or_insert_with(|| {
                records.push(StudentRecord::new(name, [0; Subject::COUNT]));
                records.len() - 1
            });
            records[slot].grades[subject.index()] = grade;
        }

        debug!(students = records.len(), "parse_grades");
        Ok(Self::from_records(records))
    }

    /// Read and parse a grade file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SearchError::InputNotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::InvalidData => SearchError::malformed(format!(
                "{} is not valid UTF-8 text",
                path.display()
            )),
            _ => SearchError::io_operation("read", path.display(), e),
        })?;
        Self::parse(&text)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up one student by exact name
    pub fn find(&self, name: &str) -> Option<&StudentRecord> {
        let pos = self
            .by_name
            .binary_search_by(|&i| self.records[i].name.as_str().cmp(name))
            .ok()?;
        Some(&self.records[self.by_name[pos]])
    }

    /// Records in ascending name order
    pub fn by_name(&self) -> impl Iterator<Item = &StudentRecord> {
        self.by_name.iter().map(|&i| &self.records[i])
    }

    fn order(&self, field: GradeField) -> &[usize] {
        match field {
            GradeField::Subject(subject) => &self.by_subject[subject.index()],
            GradeField::Total => &self.by_total,
        }
    }

    /// Records by `field`, highest grade first
    pub fn sorted(&self, field: GradeField) -> impl Iterator<Item = &StudentRecord> {
        self.order(field).iter().map(|&i| &self.records[i])
    }

    /// Records whose `field` is at least `threshold`, highest first
    pub fn at_least(&self, field: GradeField, threshold: u32) -> impl Iterator<Item = &StudentRecord> {
        self.sorted(field)
            .take_while(move |record| record.field(field) >= threshold)
    }

    pub fn count_at_least(&self, field: GradeField, threshold: u32) -> usize {
        self.order(field)
            .partition_point(|&i| self.records[i].field(field) >= threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
ann Physics 70
bob Physics 55
ann Mathematics 90
cat Biology 88
bob Chemistry 61
ann Chemistry 40
ann Biology 10
bob Mathematics 90
";

    fn names<'a>(records: impl Iterator<Item = &'a StudentRecord>) -> Vec<&'a str> {
        records.map(|r| r.name()).collect()
    }

    #[test]
    fn test_parse_merges_lines_per_student() {
        let book = GradeBook::parse(SAMPLE).unwrap();
        assert_eq!(book.len(), 3);

        let ann = book.find("ann").unwrap();
        assert_eq!(ann.grades(), &[70, 90, 40, 10]);
        assert_eq!(ann.total(), 210);

        let cat = book.find("cat").unwrap();
        assert_eq!(cat.grade(Subject::Physics), 0);
        assert_eq!(cat.total(), 88);
        assert!(book.find("dan").is_none());
    }

    #[test]
    fn test_total_is_sum_of_subjects() {
        let book = GradeBook::parse(SAMPLE).unwrap();
        for record in book.by_name() {
            let sum: u32 = Subject::ALL.iter().map(|&s| u32::from(record.grade(s))).sum();
            assert_eq!(record.total(), sum);
        }
    }

    #[test]
    fn test_later_line_overwrites_grade() {
        let book = GradeBook::parse("ann Physics 10\nann Physics 30\n").unwrap();
        assert_eq!(book.find("ann").unwrap().grade(Subject::Physics), 30);
    }

    #[test]
    fn test_name_order() {
        let book = GradeBook::parse(SAMPLE).unwrap();
        assert_eq!(names(book.by_name()), vec!["ann", "bob", "cat"]);
    }

    #[test]
    fn test_subject_order_descending_with_name_ties() {
        let book = GradeBook::parse(SAMPLE).unwrap();
        let maths = GradeField::Subject(Subject::Mathematics);
        assert_eq!(names(book.sorted(maths)), vec!["ann", "bob", "cat"]);

        let physics = GradeField::Subject(Subject::Physics);
        assert_eq!(names(book.sorted(physics)), vec!["ann", "bob", "cat"]);

        assert_eq!(names(book.sorted(GradeField::Total)), vec!["ann", "bob", "cat"]);
    }

    #[test]
    fn test_threshold_queries() {
        let book = GradeBook::parse(SAMPLE).unwrap();
        let chemistry = GradeField::Subject(Subject::Chemistry);
        assert_eq!(names(book.at_least(chemistry, 41)), vec!["bob"]);
        assert_eq!(book.count_at_least(chemistry, 41), 1);
        assert_eq!(book.count_at_least(chemistry, 0), 3);
        assert_eq!(book.count_at_least(GradeField::Total, 1000), 0);
        assert_eq!(book.at_least(GradeField::Total, 1000).count(), 0);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let book = GradeBook::parse("\nann Physics 1\n\n   \n").unwrap();
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_parse_errors_report_line() {
        let err = GradeBook::parse("ann Physics 1\nbob Art 5\n").unwrap_err();
        assert!(matches!(err, SearchError::MalformedInput { .. }));
        assert!(err.to_string().contains("line 2"));

        let err = GradeBook::parse("ann Physics high\n").unwrap_err();
        assert!(err.to_string().contains("grade 'high'"));

        let err = GradeBook::parse("ann Physics\n").unwrap_err();
        assert!(err.to_string().contains("found 2 fields"));
    }

    #[test]
    fn test_empty_book() {
        let book = GradeBook::parse("").unwrap();
        assert!(book.is_empty());
        assert_eq!(book.sorted(GradeField::Total).count(), 0);
        assert!(book.find("ann").is_none());
    }

    #[test]
    fn test_load_non_utf8_file_is_malformed() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"ann Physics 70\n\xff Biology 3\n").unwrap();
        let err = GradeBook::load(file.path()).unwrap_err();
        assert!(matches!(err, SearchError::MalformedInput { .. }));
        assert_eq!(err.exit_code(), crate::error::ExitCode::Data);
    }
}
