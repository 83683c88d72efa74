// ABOUTME: Sequence helpers: one-or-many normalization, falsy filtering, ordered intersection.
// ABOUTME: Truthiness is an explicit trait instead of implicit coercion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single value or a sequence of values.
///
/// Deserializes from either a bare value or an array, so config fields that
/// accept `"a"` as well as `["a", "b"]` can be read into one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn one(value: T) -> Self {
        OneOrMany::One(value)
    }

    /// Converts into a vector. A `Many` hands back its own vector without copying.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

impl<T, const N: usize> From<[T; N]> for OneOrMany<T> {
    fn from(values: [T; N]) -> Self {
        OneOrMany::Many(values.into())
    }
}

impl<T> IntoIterator for OneOrMany<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Normalizes a value or a sequence into a `Vec`.
///
/// A sequence comes back unchanged; anything else (maps included) is wrapped
/// in a one-element vector. When both conversions could apply, annotate the
/// result type: `let v: Vec<&str> = to_array("foo");`.
pub fn to_array<T>(value: impl Into<OneOrMany<T>>) -> Vec<T> {
    value.into().into_vec()
}

/// Whether a value counts as present for [`filter_out_falsy`].
///
/// Falsy values are `0`, `""`, null, absent (`None`), `false` and `NaN`.
/// Everything else, including the string `"false"`, is truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

// Sequences are truthy even when empty.
impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map_or(true, |f| f.is_truthy()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// Returns the truthy items, in their original order.
pub fn filter_out_falsy<T: Truthy>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().filter(|item| item.is_truthy()).collect()
}

/// Returns the elements of `a` that match at least one element of `b`.
///
/// Order and duplicates follow `a`. Matching is decided by `eq` alone.
pub fn get_intersection<A, B, F>(a: &[A], b: &[B], eq: F) -> Vec<A>
where
    A: Clone,
    F: Fn(&A, &B) -> bool,
{
    a.iter()
        .filter(|x| b.iter().any(|y| eq(x, y)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_array_wraps_scalar() {
        let v: Vec<&str> = to_array("foo");
        assert_eq!(v, vec!["foo"]);
    }

    #[test]
    fn test_to_array_wraps_object() {
        let v: Vec<Value> = to_array(json!({ "foo": "bar" }));
        assert_eq!(v, vec![json!({ "foo": "bar" })]);
    }

    #[test]
    fn test_to_array_returns_same_vec() {
        let input = vec!["foo".to_string(), "bar".to_string()];
        let ptr = input.as_ptr();
        let out: Vec<String> = to_array(input);
        assert_eq!(out.as_ptr(), ptr);
        assert_eq!(out, vec!["foo", "bar"]);
    }

    #[test]
    fn test_one_or_many_deserialize() {
        let one: OneOrMany<String> = serde_json::from_value(json!("a")).unwrap();
        let many: OneOrMany<String> = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(one.len(), 1);
        let many: Vec<String> = to_array(many);
        assert_eq!(many, vec!["a", "b"]);
    }

    #[test]
    fn test_truthy_numbers() {
        assert!(!0i32.is_truthy());
        assert!((-1i64).is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(!(-0.0f64).is_truthy());
        assert!(0.1f32.is_truthy());
    }

    #[test]
    fn test_truthy_json() {
        assert!(!json!(null).is_truthy());
        assert!(!json!(0).is_truthy());
        assert!(!json!(0.0).is_truthy());
        assert!(!json!("").is_truthy());
        assert!(!json!(false).is_truthy());
        assert!(json!("false").is_truthy());
        assert!(json!([]).is_truthy());
        assert!(json!({}).is_truthy());
    }

    #[test]
    fn test_filter_out_falsy_strings() {
        assert_eq!(filter_out_falsy(["", "a", "", "b"]), vec!["a", "b"]);
    }

    #[test]
    fn test_filter_out_falsy_options() {
        let items = vec![Some(1), None, Some(0), Some(2)];
        assert_eq!(filter_out_falsy(items), vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_intersection_keeps_duplicates() {
        let eq = |x: &i32, y: &i32| x == y;
        assert_eq!(get_intersection(&[1, 2, 1, 4], &[1], eq), vec![1, 1]);
    }

    #[test]
    fn test_intersection_empty_inputs() {
        let eq = |x: &i32, y: &i32| x == y;
        assert!(get_intersection(&[], &[1, 2], eq).is_empty());
        assert!(get_intersection(&[1, 2], &[], eq).is_empty());
    }

    #[test]
    fn test_intersection_uses_predicate_only() {
        let a = ["Foo", "bar", "BAZ"];
        let b = ["baz".to_string(), "foo".to_string()];
        let got = get_intersection(&a, &b, |x, y| x.eq_ignore_ascii_case(y));
        assert_eq!(got, vec!["Foo", "BAZ"]);
    }
}
