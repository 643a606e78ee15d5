//! Opportunistic typing of raw CSV cells
//!
//! Every cell is classified before field normalization: empty cells are
//! absent, numeric-looking text becomes a number, `true`/`false` become
//! booleans and everything else stays text. Field readers then decide what
//! each class means for their column.

/// A classified CSV cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    /// Empty or missing cell
    Absent,
    /// Numeric-looking cell; the raw text is kept for display fields
    Number(f64, &'a str),
    /// `true`/`TRUE`/`false`/`FALSE`
    Bool(bool, &'a str),
    /// Anything else
    Text(&'a str),
}

impl<'a> Cell<'a> {
    /// Classify a raw cell value
    #[must_use]
    pub fn classify(raw: Option<&'a str>) -> Self {
        let Some(raw) = raw else {
            return Self::Absent;
        };
        if raw.is_empty() {
            return Self::Absent;
        }
        match raw {
            "true" | "TRUE" => return Self::Bool(true, raw),
            "false" | "FALSE" => return Self::Bool(false, raw),
            _ => {}
        }
        if looks_numeric(raw) {
            if let Ok(value) = raw.trim().parse::<f64>() {
                if value.is_finite() {
                    return Self::Number(value, raw);
                }
            }
        }
        Self::Text(raw)
    }

    /// Non-empty text cell only; numbers and booleans are rejected
    #[must_use]
    pub const fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(s) => Some(*s),
            _ => None,
        }
    }

    /// Any present cell rendered as its original text
    #[must_use]
    pub fn display(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Number(_, raw) | Self::Bool(_, raw) | Self::Text(raw) => Some((*raw).to_string()),
        }
    }

    /// Numeric cell value
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v, _) => Some(*v),
            _ => None,
        }
    }

    /// Integral numeric cell value
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_integer(&self) -> Option<i64> {
        self.as_number()
            .filter(|v| v.fract() == 0.0 && v.abs() <= 9_007_199_254_740_992.0)
            .map(|v| v as i64)
    }

    /// Grade count: non-negative numbers truncated, anything else 0
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_count(&self) -> u32 {
        match self.as_number() {
            Some(v) if v > 0.0 => v.trunc() as u32,
            _ => 0,
        }
    }
}

/// Matches `-?(\d+\.?|\.\d+|\d+\.\d+)([eE][-+]?\d+)?` with optional
/// surrounding whitespace
fn looks_numeric(raw: &str) -> bool {
    let s = raw.trim().as_bytes();
    let mut i = 0;

    if s.first() == Some(&b'-') {
        i += 1;
    }

    let int_start = i;
    while i < s.len() && s[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < s.len() && s[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < s.len() && s[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < s.len() && (s[i] == b'e' || s[i] == b'E') {
        i += 1;
        if i < s.len() && (s[i] == b'+' || s[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < s.len() && s[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == s.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_absent() {
        assert_eq!(Cell::classify(None), Cell::Absent);
        assert_eq!(Cell::classify(Some("")), Cell::Absent);
    }

    #[test]
    fn test_classify_numbers() {
        assert_eq!(Cell::classify(Some("30")), Cell::Number(30.0, "30"));
        assert_eq!(Cell::classify(Some("3.25")), Cell::Number(3.25, "3.25"));
        assert_eq!(Cell::classify(Some(" 4 ")), Cell::Number(4.0, " 4 "));
        assert_eq!(Cell::classify(Some(".5")), Cell::Number(0.5, ".5"));
        assert_eq!(Cell::classify(Some("5.")), Cell::Number(5.0, "5."));
        assert_eq!(Cell::classify(Some("-2")), Cell::Number(-2.0, "-2"));
        assert_eq!(Cell::classify(Some("1e3")), Cell::Number(1000.0, "1e3"));
    }

    #[test]
    fn test_classify_text_and_bool() {
        assert_eq!(Cell::classify(Some("CMPSC 8")), Cell::Text("CMPSC 8"));
        assert_eq!(Cell::classify(Some("73%")), Cell::Text("73%"));
        assert_eq!(Cell::classify(Some("1-4")), Cell::Text("1-4"));
        assert_eq!(Cell::classify(Some("inf")), Cell::Text("inf"));
        assert_eq!(Cell::classify(Some("NaN")), Cell::Text("NaN"));
        assert_eq!(Cell::classify(Some(".")), Cell::Text("."));
        assert_eq!(Cell::classify(Some("1e")), Cell::Text("1e"));
        assert_eq!(Cell::classify(Some(" ")), Cell::Text(" "));
        assert_eq!(Cell::classify(Some("TRUE")), Cell::Bool(true, "TRUE"));
        assert_eq!(Cell::classify(Some("false")), Cell::Bool(false, "false"));
        assert_eq!(Cell::classify(Some("True")), Cell::Text("True"));
    }

    #[test]
    fn test_as_count() {
        assert_eq!(Cell::classify(Some("12")).as_count(), 12);
        assert_eq!(Cell::classify(Some("12.9")).as_count(), 12);
        assert_eq!(Cell::classify(Some("-3")).as_count(), 0);
        assert_eq!(Cell::classify(Some("n/a")).as_count(), 0);
        assert_eq!(Cell::classify(Some("true")).as_count(), 0);
        assert_eq!(Cell::classify(None).as_count(), 0);
    }

    #[test]
    fn test_as_text_rejects_numbers() {
        assert_eq!(Cell::classify(Some("ART")).as_text(), Some("ART"));
        assert_eq!(Cell::classify(Some("101")).as_text(), None);
        assert_eq!(Cell::classify(Some("101")).display(), Some("101".to_string()));
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(Cell::classify(Some("2023")).as_integer(), Some(2023));
        assert_eq!(Cell::classify(Some("2023.5")).as_integer(), None);
        assert_eq!(Cell::classify(Some("Fall")).as_integer(), None);
    }
}
