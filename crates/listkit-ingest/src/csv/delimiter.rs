//! Delimiter auto-detection.

/// Delimiters considered, in tie-breaking order.
pub const DELIMITER_CANDIDATES: [u8; 4] = [b',', b'\t', b'|', b';'];

/// Number of non-empty lines sampled.
const SAMPLE_LINES: usize = 10;

/// Picks the delimiter that splits the sampled lines most often and most
/// consistently.
///
/// Each candidate scores `mean / (1 + stddev)` of its per-line count, counting
/// only occurrences outside double quotes. Falls back to comma when no
/// candidate appears at all.
pub fn detect_delimiter(text: &str) -> u8 {
    let sample: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();
    if sample.is_empty() {
        return b',';
    }

    let mut best_delimiter = b',';
    let mut best_score = 0.0f64;

    for delimiter in DELIMITER_CANDIDATES {
        let counts: Vec<f64> = sample
            .iter()
            .map(|line| count_unquoted(line, delimiter) as f64)
            .collect();
        let mean = counts.iter().sum::<f64>() / counts.len() as f64;
        let variance =
            counts.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / counts.len() as f64;
        let score = mean / (1.0 + variance.sqrt());

        if score > best_score {
            best_score = score;
            best_delimiter = delimiter;
        }
    }

    best_delimiter
}

fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for byte in line.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}
