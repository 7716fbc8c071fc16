//! Synthetic grade data

use super::subject::Subject;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound for generated grades
pub const MAX_GRADE: u16 = 100;

/// Produce one `<student> <Subject> <grade>` line per student and subject,
/// shuffled. The same seed always yields the same lines.
pub fn generate_lines(students: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut lines: Vec<String> = (0..students)
        .flat_map(|student| Subject::ALL.map(|subject| (student, subject)))
        .map(|(student, subject)| {
            let grade = rng.gen_range(0..MAX_GRADE);
            format!("{} {} {}", student, subject.name(), grade)
        })
        .collect();

    lines.shuffle(&mut rng);
    lines
}
