use std::io::{self, Write};
use std::path::PathBuf;

use crate::processing::statistics::StatSummary;

/// Which of the two inputs sits closer to zero under a given measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closer {
    First,
    Second,
}

impl Closer {
    /// The first input wins only on a strictly smaller measure; ties go to the second.
    pub fn judge(first: f64, second: f64) -> Self {
        if first < second {
            Closer::First
        } else {
            Closer::Second
        }
    }

    pub fn pick<'a>(&self, first: &'a str, second: &'a str) -> &'a str {
        match self {
            Closer::First => first,
            Closer::Second => second,
        }
    }
}

/// Writes human-readable comparison output.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn min_max(&mut self, label: &str, summary: &StatSummary) -> io::Result<()> {
        writeln!(self.out, "File: {label}")?;
        writeln!(
            self.out,
            "  Minimum value: {} (index: {})",
            general(summary.min_value),
            summary.min_index
        )?;
        writeln!(
            self.out,
            "  Maximum value: {} (index: {})",
            general(summary.max_value),
            summary.max_index
        )
    }

    pub fn spread(&mut self, label: &str, mad: f64, rms: f64) -> io::Result<()> {
        writeln!(self.out, "File: {label}")?;
        writeln!(self.out, "MAD: {}, RMS: {}\n", general(mad), general(rms))
    }

    pub fn verdict(&mut self, measure: &str, label: &str) -> io::Result<()> {
        writeln!(self.out, "File '{label}' has values closer to zero ({measure}).")
    }

    pub fn saved(&mut self, artifacts: &[PathBuf]) -> io::Result<()> {
        for path in artifacts {
            writeln!(self.out, "Plot data saved to {}", path.display())?;
        }
        Ok(())
    }
}

/// Six significant digits in `%g` style: fixed notation for exponents in
/// `[-4, 6)`, otherwise `1.5e+06`, with trailing zeros dropped.
pub fn general(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent is taken after rounding to six digits, so 999999.7 prints as 1e+06.
    let sci = format!("{v:.5e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return v.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return v.to_string();
    };

    if !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let decimals = (5 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, v)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Reporter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut reporter = Reporter::new(Vec::new());
        f(&mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn min_max_block() {
        let summary = StatSummary::summarize(&[3.0, 1.0, 2.5]).unwrap();
        let text = render(|r| r.min_max("a.txt", &summary));
        assert_eq!(
            text,
            "File: a.txt\n  Minimum value: 1 (index: 1)\n  Maximum value: 3 (index: 0)\n"
        );
    }

    #[test]
    fn spread_block_and_verdict() {
        let text = render(|r| {
            r.spread("a.txt", 1.5, 2.0)?;
            r.verdict("MAD", "a.txt")
        });
        assert_eq!(
            text,
            "File: a.txt\nMAD: 1.5, RMS: 2\n\nFile 'a.txt' has values closer to zero (MAD).\n"
        );
    }

    #[test]
    fn general_uses_six_significant_digits() {
        assert_eq!(general(1.0 / 3.0), "0.333333");
        assert_eq!(general(1.0e6), "1e+06");
        assert_eq!(general(999_999.7), "1e+06");
        assert_eq!(general(123_456.7), "123457");
        assert_eq!(general(100_000.0), "100000");
        assert_eq!(general(0.0001), "0.0001");
        assert_eq!(general(1.0e-5), "1e-05");
        assert_eq!(general(-2.0), "-2");
        assert_eq!(general(2.5), "2.5");
        assert_eq!(general(1.5e100), "1.5e+100");
        assert_eq!(general(0.0), "0");
    }

    #[test]
    fn spread_block_rounds_like_stream_output() {
        let text = render(|r| r.spread("a.txt", 1.0 / 3.0, 1.0e6));
        assert_eq!(text, "File: a.txt\nMAD: 0.333333, RMS: 1e+06\n\n");
    }

    #[test]
    fn ties_go_to_second() {
        assert_eq!(Closer::judge(1.0, 2.0), Closer::First);
        assert_eq!(Closer::judge(2.0, 2.0), Closer::Second);
        assert_eq!(Closer::judge(3.0, 2.0).pick("a", "b"), "b");
    }

    #[test]
    fn saved_lists_each_artifact() {
        let text = render(|r| r.saved(&[PathBuf::from("out.json")]));
        assert_eq!(text, "Plot data saved to out.json\n");
    }
}
