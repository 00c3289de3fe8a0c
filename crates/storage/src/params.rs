//! Typed validation of query-string parameters.
//!
//! Endpoints declare their parameters as a list of [`ParamSpec`]s. [`validate`]
//! checks every declared parameter independently against the raw query pairs
//! and either returns the fully coerced [`ValidatedParams`] or a
//! [`FieldErrors`] map holding every problem found, keyed by parameter name.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_NUMBER: &str = "Enter a number.";
pub const INVALID_DATETIME: &str = "Enter a valid date/time.";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Raw query pairs as received, repeated keys preserved in order.
#[derive(Debug, Clone, Default)]
pub struct RawParams {
    pairs: Vec<(String, String)>,
}

impl RawParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Non-empty values supplied for `name`.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(key, value)| key == name && !value.trim().is_empty())
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Coerces another parameter for use in a derived rule.
    ///
    /// Absent or uncoercible parameters yield `None`.
    pub fn coerce(&self, name: &str, kind: ParamKind) -> Option<ParamValue> {
        let values = self.get_all(name);
        if values.is_empty() {
            return None;
        }
        kind.coerce(&values).ok()
    }
}

impl From<Vec<(String, String)>> for RawParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    Number,
    DateTime,
    /// Repeated keys and comma-separated values are both accepted.
    NumberList,
}

impl ParamKind {
    fn coerce(self, values: &[&str]) -> Result<ParamValue, String> {
        let last = values.last().map(|v| v.trim()).unwrap_or_default();

        match self {
            Self::Text => Ok(ParamValue::Text(last.to_string())),
            Self::Number => parse_number(last).map(ParamValue::Number),
            Self::DateTime => parse_datetime(last)
                .map(ParamValue::DateTime)
                .ok_or_else(|| INVALID_DATETIME.to_string()),
            Self::NumberList => values
                .iter()
                .flat_map(|value| value.split(','))
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(parse_number)
                .collect::<Result<Vec<_>, _>>()
                .map(ParamValue::NumberList),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Number(i64),
    DateTime(DateTime<Utc>),
    NumberList(Vec<i64>),
}

/// A rule that needs more than the field's own value. It receives the whole
/// raw parameter bag and reads other fields through [`RawParams::coerce`].
pub type DerivedRule = fn(&ParamValue, &RawParams) -> Result<(), String>;

#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Inclusive bounds, applied to every element of a number list.
    Range { min: Option<i64>, max: Option<i64> },
    MaxLength(usize),
    Derived(DerivedRule),
}

impl Constraint {
    fn check(&self, value: &ParamValue, raw: &RawParams) -> Result<(), String> {
        match (self, value) {
            (Self::Range { min, max }, ParamValue::Number(n)) => check_range(*n, *min, *max),
            (Self::Range { min, max }, ParamValue::NumberList(items)) => items
                .iter()
                .try_for_each(|n| check_range(*n, *min, *max)),
            (Self::MaxLength(limit), ParamValue::Text(text)) => {
                if text.chars().count() > *limit {
                    Err(format!(
                        "Ensure this field has no more than {} characters.",
                        limit
                    ))
                } else {
                    Ok(())
                }
            }
            (Self::Derived(rule), value) => rule(value, raw),
            _ => Ok(()),
        }
    }
}

fn check_range(n: i64, min: Option<i64>, max: Option<i64>) -> Result<(), String> {
    if let Some(min) = min
        && n < min
    {
        return Err(format!(
            "Ensure this value is greater than or equal to {}.",
            min
        ));
    }
    if let Some(max) = max
        && n > max
    {
        return Err(format!("Ensure this value is less than or equal to {}.", max));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub constraints: Vec<Constraint>,
}

impl ParamSpec {
    pub fn new(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            constraints: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    fn check(&self, raw: &RawParams) -> Result<Option<ParamValue>, Vec<String>> {
        let values = raw.get_all(self.name);

        if values.is_empty() {
            return if self.required {
                Err(vec![REQUIRED.to_string()])
            } else {
                Ok(None)
            };
        }

        let value = self.kind.coerce(&values).map_err(|e| vec![e])?;

        let violations: Vec<String> = self
            .constraints
            .iter()
            .filter_map(|constraint| constraint.check(&value, raw).err())
            .collect();

        if violations.is_empty() {
            Ok(Some(value))
        } else {
            Err(violations)
        }
    }
}

/// Error messages per field, serialized as `{"field": ["message", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn extend(&mut self, field: impl Into<String>, messages: Vec<String>) {
        self.0.entry(field.into()).or_default().extend(messages);
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Coerced parameters. Absent optional parameters have no entry.
#[derive(Debug, Clone, Default)]
pub struct ValidatedParams {
    values: HashMap<&'static str, ParamValue>,
}

impl ValidatedParams {
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ParamValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(ParamValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn datetime(&self, name: &str) -> Option<DateTime<Utc>> {
        match self.values.get(name) {
            Some(ParamValue::DateTime(dt)) => Some(*dt),
            _ => None,
        }
    }

    pub fn number_list(&self, name: &str) -> Option<&[i64]> {
        match self.values.get(name) {
            Some(ParamValue::NumberList(items)) => Some(items),
            _ => None,
        }
    }
}

/// Validates every spec against `raw`, collecting all field errors.
pub fn validate(specs: &[ParamSpec], raw: &RawParams) -> Result<ValidatedParams, FieldErrors> {
    let mut values = HashMap::new();
    let mut errors = FieldErrors::new();

    for spec in specs {
        match spec.check(raw) {
            Ok(Some(value)) => {
                values.insert(spec.name, value);
            }
            Ok(None) => {}
            Err(messages) => errors.extend(spec.name, messages),
        }
    }

    if errors.is_empty() {
        Ok(ValidatedParams { values })
    } else {
        Err(errors)
    }
}

fn parse_number(value: &str) -> Result<i64, String> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| INVALID_NUMBER.to_string())
}

/// Parses RFC 3339 timestamps, or naive date/date-time strings taken as UTC.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
