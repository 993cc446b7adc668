//! Digit-run extraction from filenames
//!
//! The first stage of the pipeline: scan a basename once, left to right,
//! and record every maximal run of decimal digits. The filename with all
//! digits replaced by `#` becomes the pattern key; two filenames share a
//! key exactly when their digit runs sit at the same offsets with the
//! same widths.

use framewalk_sequence::{FrameNumber, PADDING_CHAR};

/// A maximal run of decimal digits in a filename: byte offset of the
/// first digit and the number of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRun {
    pub offset: usize,
    pub width: usize,
}

impl DigitRun {
    pub fn new(offset: usize, width: usize) -> Self {
        Self { offset, width }
    }
}

/// Extract every digit run from `filename`.
///
/// Returns the pattern key plus the run locations and parsed values,
/// all three in left-to-right order and of equal length. The key keeps
/// the byte length of the input, so recorded offsets stay valid for
/// in-place substitution.
///
/// eg. `file-20.1234.cr2` yields key `file-##.####.cr#`,
/// runs `(5,2) (8,4) (15,1)` and values `20 1234 2`.
pub fn extract_runs(filename: &str) -> (String, Vec<DigitRun>, Vec<FrameNumber>) {
    let mut key = String::with_capacity(filename.len());
    let mut runs = Vec::new();
    let mut values = Vec::new();
    extract_runs_into(filename, &mut key, &mut runs, &mut values);
    (key, runs, values)
}

/// Buffer-reusing form of [`extract_runs`]; clears all three outputs
/// before filling them.
pub fn extract_runs_into(
    filename: &str,
    key: &mut String,
    runs: &mut Vec<DigitRun>,
    values: &mut Vec<FrameNumber>,
) {
    key.clear();
    runs.clear();
    values.clear();

    let bytes = filename.as_bytes();
    let mut copied = 0;
    let mut index = 0;
    while index < bytes.len() {
        if !bytes[index].is_ascii_digit() {
            index += 1;
            continue;
        }
        let start = index;
        let mut value: FrameNumber = 0;
        while index < bytes.len() && bytes[index].is_ascii_digit() {
            // Runs wider than the value type wrap; out of contract.
            value = value
                .wrapping_mul(10)
                .wrapping_add(FrameNumber::from(bytes[index] - b'0'));
            index += 1;
        }
        key.push_str(&filename[copied..start]);
        for _ in start..index {
            key.push(PADDING_CHAR);
        }
        copied = index;
        runs.push(DigitRun::new(start, index - start));
        values.push(value);
    }
    key.push_str(&filename[copied..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_runs_and_values() {
        let (key, runs, values) = extract_runs("a023bc1d456");
        assert_eq!(key, "a###bc#d###");
        assert_eq!(
            runs,
            vec![DigitRun::new(1, 3), DigitRun::new(6, 1), DigitRun::new(8, 3)]
        );
        assert_eq!(values, vec![23, 1, 456]);
    }

    #[test]
    fn key_keeps_input_length() {
        let (key, _, _) = extract_runs("file-20.1234.cr2");
        assert_eq!(key, "file-##.####.cr#");
        assert_eq!(key.len(), "file-20.1234.cr2".len());
    }

    #[test]
    fn no_digits_yields_no_runs() {
        let (key, runs, values) = extract_runs("afile.txt");
        assert_eq!(key, "afile.txt");
        assert!(runs.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn all_digits_is_one_run() {
        let (key, runs, values) = extract_runs("0042");
        assert_eq!(key, "####");
        assert_eq!(runs, vec![DigitRun::new(0, 4)]);
        assert_eq!(values, vec![42]);
    }

    #[test]
    fn multibyte_names_keep_byte_offsets() {
        let (key, runs, values) = extract_runs("séq12.exr");
        assert_eq!(key, "séq##.exr");
        // 'é' is two bytes, so the run starts at byte 4.
        assert_eq!(runs, vec![DigitRun::new(4, 2)]);
        assert_eq!(values, vec![12]);
    }

    #[test]
    fn extraction_is_idempotent_on_keys() {
        let (key, _, _) = extract_runs("p2.sgi");
        let (again, runs, _) = extract_runs(&key);
        assert_eq!(again, key);
        assert!(runs.is_empty());
    }

    #[test]
    fn reuses_buffers() {
        let mut key = String::new();
        let mut runs = Vec::new();
        let mut values = Vec::new();
        extract_runs_into("p2.sgi", &mut key, &mut runs, &mut values);
        assert_eq!(key, "p#.sgi");
        extract_runs_into("plain", &mut key, &mut runs, &mut values);
        assert_eq!(key, "plain");
        assert!(runs.is_empty());
        assert!(values.is_empty());
    }
}
