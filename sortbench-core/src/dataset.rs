//! Dataset provisioning.
//!
//! A [`Dataset`] is the numeric sequence being sorted and measured. It is
//! created by random generation, by loading a file of whitespace-delimited
//! tokens, or from an existing vector, and is exclusively owned by its
//! creator until cloned per trial.

use crate::error::{Error, Result};
use crate::value::SortValue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

/// Process-wide pseudo-random source, seeded once from system time.
fn rng() -> &'static Mutex<StdRng> {
    static RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();
    RNG.get_or_init(|| {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Mutex::new(StdRng::seed_from_u64(seed))
    })
}

/// Validate a requested element count and convert it to a buffer length.
///
/// The maximum is derived from the largest byte span a single allocation can
/// address, so it depends on the element type.
fn validate_input_size<T>(size: i64) -> Result<usize> {
    if size <= 0 {
        return Err(Error::InvalidArgument(
            "input size cannot be zero or negative".to_string(),
        ));
    }
    let max = isize::MAX as i64 / std::mem::size_of::<T>().max(1) as i64;
    if size > max {
        return Err(Error::CapacityExceeded(format!(
            "input size {size} exceeds the maximum of {max} elements"
        )));
    }
    Ok(size as usize)
}

/// An ordered sequence of numeric values to be sorted and measured.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T: SortValue> {
    values: Vec<T>,
}

impl<T: SortValue> Dataset<T> {
    /// Generate `size` elements drawn uniformly from the type's default range.
    pub fn generate(size: i64) -> Result<Self> {
        Self::generate_in_range(size, T::RANGE_MIN, T::RANGE_MAX)
    }

    /// Generate `size` elements drawn uniformly from `[min, max]`.
    ///
    /// Fails with `InvalidArgument` for a non-positive size and with
    /// `CapacityExceeded` when the size exceeds the addressable maximum.
    pub fn generate_in_range(size: i64, min: T, max: T) -> Result<Self> {
        let len = validate_input_size::<T>(size)?;
        let mut values = Vec::new();
        values.try_reserve_exact(len)?;
        {
            let mut rng = rng().lock().unwrap_or_else(PoisonError::into_inner);
            for _ in 0..len {
                values.push(rng.gen_range(min..=max));
            }
        }
        tracing::debug!(size = len, "generated random dataset");
        Ok(Self { values })
    }

    /// Load whitespace/line-delimited numeric tokens from a file.
    ///
    /// Reading stops silently at the first non-numeric token; trailing garbage
    /// is ignored, not an error. Fails with `Io` if the file cannot be opened
    /// and with `Format` if no token parses at all.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut values = Vec::new();
        for token in contents.split_whitespace() {
            match token.parse::<T>() {
                Ok(value) => values.push(value),
                Err(_) => break,
            }
        }
        if values.is_empty() {
            return Err(Error::Format(format!(
                "no numeric tokens in {}",
                path.display()
            )));
        }
        validate_input_size::<T>(values.len() as i64)?;
        tracing::debug!(count = values.len(), path = %path.display(), "loaded dataset");
        Ok(Self { values })
    }

    /// Wrap an existing vector of values.
    pub fn from_values(values: Vec<T>) -> Result<Self> {
        validate_input_size::<T>(values.len() as i64)?;
        Ok(Self { values })
    }

    /// Number of elements. Always greater than zero.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; present to satisfy the `len`/`is_empty` convention.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the element sequence.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Clone the elements into a fresh exclusively-owned buffer.
    ///
    /// Allocation failure is fatal to the run and surfaces as `Allocation`.
    pub fn clone_values(&self) -> Result<Vec<T>> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(self.values.len())?;
        buffer.extend_from_slice(&self.values);
        Ok(buffer)
    }
}

/// Write `file_count` independently generated datasets to sequentially named
/// files under `dir`: `input1.txt` through `input{file_count}.txt`, one value
/// per line.
///
/// Side effect only. Fails with `Io` on any create/write failure, leaving
/// previously written files in place.
pub fn generate_files<T: SortValue>(
    dir: impl AsRef<Path>,
    file_count: i64,
    size_per_file: i64,
    min: T,
    max: T,
) -> Result<()> {
    if file_count <= 0 {
        return Err(Error::InvalidArgument(
            "file count cannot be zero or negative".to_string(),
        ));
    }
    let size = validate_input_size::<T>(size_per_file)?;
    for i in 1..=file_count {
        let path = dir.as_ref().join(format!("input{i}.txt"));
        let file = std::fs::File::create(&path)?;
        let mut writer = BufWriter::new(file);
        {
            let mut rng = rng().lock().unwrap_or_else(PoisonError::into_inner);
            for _ in 0..size {
                writeln!(writer, "{}", rng.gen_range(min..=max))?;
            }
        }
        writer.flush()?;
        tracing::debug!(path = %path.display(), size, "wrote input file");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_fills_requested_size_within_bounds() {
        let dataset = Dataset::<i64>::generate_in_range(100, -50, 50).unwrap();
        assert_eq!(dataset.len(), 100);
        assert!(dataset.values().iter().all(|&v| (-50..=50).contains(&v)));
    }

    #[test]
    fn generate_rejects_non_positive_sizes() {
        assert!(matches!(
            Dataset::<i64>::generate(0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Dataset::<i64>::generate(-1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn generate_rejects_unaddressable_sizes() {
        let too_big = isize::MAX as i64 / 8 + 1;
        assert!(matches!(
            Dataset::<i64>::generate(too_big),
            Err(Error::CapacityExceeded(_))
        ));
    }

    #[test]
    fn load_reads_whitespace_delimited_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numbers.txt");
        std::fs::write(&path, "3 1\n2\n").unwrap();
        let dataset = Dataset::<i32>::load(&path).unwrap();
        assert_eq!(dataset.values(), &[3, 1, 2]);
    }

    #[test]
    fn load_stops_at_first_non_numeric_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trailing.txt");
        std::fs::write(&path, "5 7 oops 9\n").unwrap();
        let dataset = Dataset::<i32>::load(&path).unwrap();
        assert_eq!(dataset.values(), &[5, 7]);
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let result = Dataset::<i32>::load("/no/such/input.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn load_with_no_parseable_tokens_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.txt");
        std::fs::write(&path, "not a number\n").unwrap();
        let result = Dataset::<i32>::load(&path);
        assert!(matches!(result, Err(Error::Format(_))));
    }

    #[test]
    fn from_values_rejects_empty_input() {
        assert!(matches!(
            Dataset::<i64>::from_values(Vec::new()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn clone_values_yields_an_independent_buffer() {
        let dataset = Dataset::from_values(vec![3i64, 1, 2]).unwrap();
        let mut clone = dataset.clone_values().unwrap();
        clone.sort_unstable();
        assert_eq!(dataset.values(), &[3, 1, 2]);
        assert_eq!(clone, vec![1, 2, 3]);
    }

    #[test]
    fn generate_files_writes_one_indexed_files() {
        let dir = tempfile::tempdir().unwrap();
        generate_files::<i32>(dir.path(), 3, 4, 0, 9).unwrap();
        for i in 1..=3 {
            let contents =
                std::fs::read_to_string(dir.path().join(format!("input{i}.txt"))).unwrap();
            let lines: Vec<_> = contents.lines().collect();
            assert_eq!(lines.len(), 4, "input{i}.txt should hold 4 lines");
            assert!(lines.iter().all(|l| l.parse::<i32>().is_ok()));
        }
        assert!(!dir.path().join("input0.txt").exists());
        assert!(!dir.path().join("input4.txt").exists());
    }

    #[test]
    fn generate_files_rejects_non_positive_counts() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            generate_files::<i32>(dir.path(), 0, 10, 0, 9),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn floats_generate_and_load() {
        let dataset = Dataset::<f64>::generate_in_range(10, -1.0, 1.0).unwrap();
        assert!(dataset.values().iter().all(|v| (-1.0..=1.0).contains(v)));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("floats.txt");
        std::fs::write(&path, "0.5\n-0.25\n").unwrap();
        let loaded = Dataset::<f64>::load(&path).unwrap();
        assert_eq!(loaded.values(), &[0.5, -0.25]);
    }
}
