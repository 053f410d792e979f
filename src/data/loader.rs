use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::series::Series;

/// Errors raised while turning a text file into a [`Series`].
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot open file: {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No values found in file: {}", path.display())]
    EmptyData { path: PathBuf },
}

/// Load a whitespace-delimited numeric file.
///
/// Failures are logged and collapse into an empty series labelled with the path,
/// so a caller only has to check `is_empty()`.
pub fn load(path: &Path) -> Series {
    match try_load(path) {
        Ok(series) => series,
        Err(e) => {
            match &e {
                LoadError::FileOpen { .. } => tracing::error!("{e}"),
                LoadError::EmptyData { .. } => tracing::warn!("{e}"),
            }
            Series::empty(label_for(path))
        }
    }
}

/// Load a whitespace-delimited numeric file, surfacing the failure reason.
pub fn try_load(path: &Path) -> Result<Series, LoadError> {
    let content = std::fs::read(path).map_err(|source| LoadError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let values = parse_bytes(&content);
    tracing::debug!("Parsed {} values from {:?}", values.len(), path);

    if values.is_empty() {
        return Err(LoadError::EmptyData {
            path: path.to_path_buf(),
        });
    }

    Ok(Series::new(label_for(path), values))
}

/// Read numbers the way formatted stream extraction does.
///
/// Each step skips whitespace and takes the longest run matching
/// `[+-]? digits [. digits] [(e|E) [+-]? digits]`. The value is kept and scanning
/// resumes right after it, so `3x` yields 3 and then stops at `x`, while `1.2.3`
/// yields 1.2 and 0.3. An exponent marker with no digits, a bare sign, or a value
/// that overflows ends parsing without producing a value.
pub fn parse_values(text: &str) -> Vec<f64> {
    parse_bytes(text.as_bytes())
}

fn parse_bytes(bytes: &[u8]) -> Vec<f64> {
    let mut values = Vec::new();
    let mut pos = 0;
    loop {
        while pos < bytes.len() && is_space(bytes[pos]) {
            pos += 1;
        }
        if pos == bytes.len() {
            break;
        }
        match scan_number(&bytes[pos..]) {
            Some((value, used)) => {
                values.push(value);
                pos += used;
            }
            None => break,
        }
    }
    values
}

/// Match one number at the start of `bytes`, returning it and the bytes consumed.
fn scan_number(bytes: &[u8]) -> Option<(f64, usize)> {
    let digits_from = |start: usize| {
        bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        frac_digits = digits_from(end);
        end += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // The marker is consumed even when no digits follow, which fails the whole match.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        end += 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let exp_digits = digits_from(end);
        if exp_digits == 0 {
            return None;
        }
        end += exp_digits;
    }

    let value = std::str::from_utf8(&bytes[..end]).ok()?.parse::<f64>().ok()?;
    value.is_finite().then_some((value, end))
}

/// C-locale `isspace`: includes vertical tab, which `is_ascii_whitespace` does not.
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

fn label_for(path: &Path) -> String {
    path.display().to_string()
}
