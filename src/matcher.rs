//! Edit-Distance Matcher
//!
//! Nearest-neighbor lookup over a fixed vocabulary using Levenshtein
//! distance. The matcher is threshold-agnostic: callers decide how far a
//! candidate may be before they accept it as a suggestion.

/// Nearest vocabulary entry for a word, with its edit distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub candidate: String,
    pub distance: usize,
}

/// Classic Levenshtein edit distance (insertion, deletion, substitution,
/// unit cost) between two strings.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // DP table of size (|b|+1) x (|a|+1); no early termination.
    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=a.len() {
        matrix[0][j] = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            if b[i - 1] == a[j - 1] {
                matrix[i][j] = matrix[i - 1][j - 1];
            } else {
                let substitution = matrix[i - 1][j - 1] + 1;
                let insertion = matrix[i][j - 1] + 1;
                let deletion = matrix[i - 1][j] + 1;
                matrix[i][j] = substitution.min(insertion).min(deletion);
            }
        }
    }

    matrix[b.len()][a.len()]
}

/// Find the vocabulary entry closest to `word`.
///
/// Iterates the vocabulary in declared order and keeps the first candidate
/// with minimal distance: vocabulary order is the tie-break, which makes the
/// result deterministic. Returns `None` only for an empty vocabulary.
pub fn nearest(word: &str, vocabulary: &[String]) -> Option<Match> {
    let mut closest: Option<Match> = None;

    for candidate in vocabulary {
        let distance = levenshtein(word, candidate);
        let improves = match &closest {
            Some(best) => distance < best.distance,
            None => true,
        };
        if improves {
            closest = Some(Match {
                candidate: candidate.clone(),
                distance,
            });
        }
    }

    closest
}
