//! Cell values produced by column accessors.

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// A dynamic value read from a row by a column accessor.
///
/// Every value has a text form (used by search and text filters) and a
/// sort order (used by column sorting).
///
/// | Row field | Variant |
/// |-----------|---------|
/// | missing / null | `Null` |
/// | boolean | `Bool` |
/// | integer | `Int` |
/// | floating point | `Float` |
/// | money, rates | `Decimal` |
/// | string | `Text` |
/// | calendar date | `Date` |
/// | timestamp | `DateTime` |
///
/// # Example
///
/// ```
/// use tabula::CellValue;
///
/// let name = CellValue::from("Alpha");
/// let rooms = CellValue::from(3i64);
/// let empty = CellValue::Null;
///
/// assert_eq!(name.to_string(), "Alpha");
/// assert_eq!(empty.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    Text(String),
    /// Calendar date without time.
    Date(NaiveDate),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Text form of the value, lower-cased, as used by case-insensitive matching.
    pub fn to_search_text(&self) -> String {
        self.to_string().to_lowercase()
    }

    fn as_number(&self) -> Option<Number> {
        match self {
            CellValue::Int(v) => Some(Number::Finite(Decimal::from(*v))),
            CellValue::Float(v) => Some(Number::from_f64(*v)),
            CellValue::Decimal(v) => Some(Number::Finite(*v)),
            _ => None,
        }
    }

    fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            CellValue::Date(d) => d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
            CellValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Sort rank between value families that cannot be compared directly.
    fn rank(&self) -> u8 {
        match self {
            CellValue::Bool(_) => 0,
            CellValue::Int(_) | CellValue::Float(_) | CellValue::Decimal(_) => 1,
            CellValue::Text(_) => 2,
            CellValue::Date(_) | CellValue::DateTime(_) => 3,
            CellValue::Null => 4,
        }
    }

    /// Compares two values of the same family.
    ///
    /// Numbers compare numerically across `Int`, `Float` and `Decimal`, dates
    /// compare chronologically across `Date` and `DateTime`, text compares
    /// case-insensitively with natural digit ordering. Returns `None` when the
    /// values belong to different families or either is null.
    pub fn compare(&self, other: &CellValue) -> Option<Ordering> {
        match (self, other) {
            (CellValue::Null, _) | (_, CellValue::Null) => None,
            (CellValue::Bool(a), CellValue::Bool(b)) => Some(a.cmp(b)),
            (CellValue::Int(a), CellValue::Int(b)) => Some(a.cmp(b)),
            (CellValue::Text(a), CellValue::Text(b)) => Some(natural_cmp(a, b)),
            _ if self.rank() == other.rank() && self.rank() == 1 => {
                Some(self.as_number()?.cmp(&other.as_number()?))
            }
            _ if self.rank() == other.rank() && self.rank() == 3 => {
                Some(self.as_datetime()?.cmp(&other.as_datetime()?))
            }
            _ => None,
        }
    }

    /// Total order used for sorting. Nulls sort after everything else.
    pub fn sort_cmp(&self, other: &CellValue) -> Ordering {
        self.compare(other)
            .unwrap_or_else(|| match self.rank().cmp(&other.rank()) {
                Ordering::Equal => self.to_string().cmp(&other.to_string()),
                unequal => unequal,
            })
    }

    /// Loose equality: same-family values compare equal, otherwise the text
    /// forms are compared.
    pub fn loosely_equals(&self, other: &CellValue) -> bool {
        match self.compare(other) {
            Some(ordering) => ordering == Ordering::Equal,
            None => match (self, other) {
                (CellValue::Null, CellValue::Null) => true,
                (CellValue::Null, _) | (_, CellValue::Null) => false,
                _ => self.to_string() == other.to_string(),
            },
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(v) => write!(f, "{v}"),
            CellValue::Int(v) => write!(f, "{v}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Decimal(v) => write!(f, "{v}"),
            CellValue::Text(v) => f.write_str(v),
            CellValue::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            CellValue::DateTime(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M")),
        }
    }
}

/// Numeric sort key shared by `Int`, `Float` and `Decimal`.
///
/// Every number maps onto one ordered line so mixed comparisons stay
/// transitive. Floats outside the decimal range collapse onto the infinities;
/// NaN sorts after every other number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Number {
    NegInfinity,
    Finite(Decimal),
    Infinity,
    NaN,
}

impl Number {
    fn from_f64(v: f64) -> Self {
        if v.is_nan() {
            return Number::NaN;
        }
        match Decimal::from_f64(v).or_else(|| Decimal::from_f64_retain(v)) {
            Some(d) => Number::Finite(d),
            // below decimal precision
            None if v.abs() < 1.0 => Number::Finite(Decimal::ZERO),
            None if v > 0.0 => Number::Infinity,
            None => Number::NegInfinity,
        }
    }
}

/// Case-insensitive comparison that orders embedded digit runs numerically.
///
/// `"Room 2"` sorts before `"Room 10"`. Falls back to a case-sensitive
/// comparison so distinct strings never compare equal.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                let l_trim = l_run.trim_start_matches('0');
                let r_trim = r_run.trim_start_matches('0');
                let ordering = l_trim
                    .len()
                    .cmp(&r_trim.len())
                    .then_with(|| l_trim.cmp(r_trim));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                let ordering = l.to_lowercase().cmp(r.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(i64::from(v))
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(i64::from(v))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<Decimal> for CellValue {
    fn from(v: Decimal) -> Self {
        CellValue::Decimal(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<&String> for CellValue {
    fn from(v: &String) -> Self {
        CellValue::Text(v.clone())
    }
}

impl From<NaiveDate> for CellValue {
    fn from(v: NaiveDate) -> Self {
        CellValue::Date(v)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(v: DateTime<Utc>) -> Self {
        CellValue::DateTime(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => CellValue::Null,
        }
    }
}
