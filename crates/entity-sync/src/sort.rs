//! Sort State
//!
//! A `(predicate, order)` pair persisted as one `sort=<field>,<asc|desc>`
//! query parameter and applied client-side to the loaded collection.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

/// Query parameter carrying the sort state
pub const SORT_PARAM: &str = "sort";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub predicate: Option<String>,
    pub order: Option<SortOrder>,
}

impl SortState {
    pub fn new(predicate: impl Into<String>, order: SortOrder) -> Self {
        Self { predicate: Some(predicate.into()), order: Some(order) }
    }

    /// Parses `"id,asc"`. Text without a comma is a bare predicate.
    pub fn parse(param: Option<&str>) -> Self {
        let Some(param) = param.map(str::trim).filter(|p| !p.is_empty()) else {
            return Self::default();
        };
        match param.split_once(',') {
            Some((predicate, order)) if !predicate.is_empty() => Self {
                predicate: Some(predicate.to_string()),
                order: order.parse().ok(),
            },
            Some(_) => Self::default(),
            None => Self { predicate: Some(param.to_string()), order: None },
        }
    }

    pub fn is_active(&self) -> bool {
        self.predicate.is_some() && self.order.is_some()
    }

    /// `"<predicate>,<order>"` when both are set
    pub fn to_param(&self) -> Option<String> {
        match (&self.predicate, self.order) {
            (Some(predicate), Some(order)) => Some(format!("{},{}", predicate, order)),
            _ => None,
        }
    }

    /// Sort parameters for a list request; a fallback field different from the
    /// predicate is appended ascending
    pub fn build_sort_param(&self, fallback: Option<&str>) -> Vec<String> {
        let mut params: Vec<String> = self.to_param().into_iter().collect();
        if let Some(fallback) = fallback {
            if self.predicate.as_deref() != Some(fallback) {
                params.push(format!("{},{}", fallback, SortOrder::Asc));
            }
        }
        params
    }

    /// Header click: same field flips the order, another field starts ascending
    pub fn toggle(&self, field: &str) -> Self {
        match (&self.predicate, self.order) {
            (Some(predicate), Some(order)) if predicate == field => {
                Self::new(field, order.reversed())
            }
            _ => Self::new(field, SortOrder::Asc),
        }
    }

    /// Stable sort by the predicate's field value. Without predicate and
    /// order the backend's order is kept.
    pub fn refine<T: Serialize>(&self, items: Vec<T>) -> Vec<T> {
        let (Some(predicate), Some(order)) = (&self.predicate, self.order) else {
            return items;
        };
        let pointer = format!("/{}", predicate.replace('.', "/"));
        let mut keyed: Vec<(Value, T)> = items
            .into_iter()
            .map(|item| {
                let key = serde_json::to_value(&item)
                    .ok()
                    .and_then(|value| value.pointer(&pointer).cloned())
                    .unwrap_or(Value::Null);
                (key, item)
            })
            .collect();
        keyed.sort_by(|(a, _), (b, _)| {
            let ordering = compare_values(a, b);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        keyed.into_iter().map(|(_, item)| item).collect()
    }
}

/// Nulls first, numbers numerically, strings in natural order
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Number(x), Value::Number(y)) => {
            x.as_f64().partial_cmp(&y.as_f64()).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => natural_cmp(x, y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Object(x), Value::Object(y)) => {
            compare_values(x.get("id").unwrap_or(&Value::Null), y.get("id").unwrap_or(&Value::Null))
        }
        _ => a.to_string().cmp(&b.to_string()),
    }
}

/// Case-insensitive comparison where digit runs compare by numeric value
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let lhs = take_digits(&mut left);
                let rhs = take_digits(&mut right);
                let lhs_trimmed = lhs.trim_start_matches('0');
                let rhs_trimmed = rhs.trim_start_matches('0');
                let ordering = lhs_trimmed
                    .len()
                    .cmp(&rhs_trimmed.len())
                    .then_with(|| lhs_trimmed.cmp(rhs_trimmed));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(x), Some(y)) => {
                let ordering = x.to_lowercase().cmp(y.to_lowercase());
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
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        digits.push(c);
        chars.next();
    }
    digits
}
