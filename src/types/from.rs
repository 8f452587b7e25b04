use super::Value;

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

// inspired by serde_yaml::Value, saves us some repetition
macro_rules! from_number {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n.into())
                }
            }
        )*
    }
}

from_number! {
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
    f32 f64
}

impl TryFrom<Value> for bool {
    type Error = Value;

    /// Recovers a bool from a `Value::Bool`. Any other variant is handed back unchanged.
    fn try_from(value: Value) -> Result<Self, Value> {
        match value {
            Value::Bool(b) => Ok(b),
            v => Err(v),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Value;

    /// Recovers a String from a `Value::String`. Any other variant is handed back unchanged.
    fn try_from(value: Value) -> Result<Self, Value> {
        match value {
            Value::String(s) => Ok(s),
            v => Err(v),
        }
    }
}

// Integer recovery accepts any `Value::Number` holding an integer which fits the target type.
// Floats and out-of-range integers are handed back unchanged, so that the caller can report the
// offending value.
macro_rules! try_from_int {
    ($($ty:ident)*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Value;

                fn try_from(value: Value) -> Result<Self, Value> {
                    if let Value::Number(n) = &value {
                        if let Some(i) = n.as_i64() {
                            if let Ok(v) = Self::try_from(i) {
                                return Ok(v);
                            }
                        }
                        if let Some(u) = n.as_u64() {
                            if let Ok(v) = Self::try_from(u) {
                                return Ok(v);
                            }
                        }
                    }
                    Err(value)
                }
            }
        )*
    }
}

try_from_int! {
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if n.is_nan() || n.is_infinite() {
                    // Render NaN and -+inf as strings, since JSON's number type doesn't support
                    // those values.
                    return Self::String(n.to_string());
                }
                let jn = if let Some(i) = n.as_i64() {
                    serde_json::Number::from(i)
                } else if let Some(u) = n.as_u64() {
                    serde_json::Number::from(u)
                } else if let Some(f) = n.as_f64() {
                    // finite by the check above
                    serde_json::Number::from_f64(f).unwrap()
                } else {
                    unreachable!("Serializing Number to JSON: {} is neither NaN, inf, or representable as i64, u64, or f64?", n);
                };
                serde_json::Value::Number(jn)
            }
            Value::String(s) => Self::String(s),
        }
    }
}
