use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Descriptor keys accepted from callers and the URL parameter each one becomes.
const DESCRIPTOR_KEYS: [(&str, &str); 17] = [
    ("angle", "a"),
    ("aspect_ratio", "ar"),
    ("background", "b"),
    ("color", "co"),
    ("crop", "c"),
    ("dpr", "dpr"),
    ("effect", "e"),
    ("fetch_format", "f"),
    ("gravity", "g"),
    ("height", "h"),
    ("opacity", "o"),
    ("quality", "q"),
    ("radius", "r"),
    ("width", "w"),
    ("x", "x"),
    ("y", "y"),
    ("zoom", "z"),
];

#[derive(Debug, PartialEq)]
pub enum Error {
    Malformed(String),
    UnknownKey(String),
    InvalidValue(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(reason) => write!(f, "malformed transformations: {}", reason),
            Self::UnknownKey(key) => write!(f, "unknown transformation key: {}", key),
            Self::InvalidValue(key) => write!(f, "invalid value for transformation key: {}", key),
        }
    }
}

/// One component of a chained transformation, e.g. `c_thumb,g_face,w_300`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Step(BTreeMap<&'static str, String>);

impl Step {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.insert(key, value.to_string());
        self
    }

    pub fn effect(self, effect: &str) -> Self {
        self.set("e", effect)
    }

    pub fn crop(self, mode: &str) -> Self {
        self.set("c", mode)
    }

    pub fn gravity(self, gravity: &str) -> Self {
        self.set("g", gravity)
    }

    pub fn width(self, width: u32) -> Self {
        self.set("w", width)
    }

    pub fn height(self, height: u32) -> Self {
        self.set("h", height)
    }

    pub fn quality(self, quality: &str) -> Self {
        self.set("q", quality)
    }

    pub fn fetch_format(self, format: &str) -> Self {
        self.set("f", format)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .0
            .iter()
            .map(|(key, value)| format!("{}_{}", key, value))
            .collect::<Vec<_>>();
        write!(f, "{}", parts.join(","))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transformation(Vec<Step>);

impl Transformation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, step: Step) -> Self {
        if !step.is_empty() {
            self.0.push(step);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses a JSON array of descriptor objects such as `[{"effect":"grayscale"}]`.
    pub fn from_descriptors(raw: &str) -> Result<Self, Error> {
        let value = serde_json::from_str::<Value>(raw)
            .map_err(|err| Error::Malformed(err.to_string()))?;

        let descriptors = match value {
            Value::Array(descriptors) => descriptors,
            _ => return Err(Error::Malformed(String::from("expected an array"))),
        };

        descriptors
            .into_iter()
            .try_fold(Self::new(), |transformation, descriptor| {
                Ok(transformation.then(parse_step(descriptor)?))
            })
    }
}

fn parse_step(descriptor: Value) -> Result<Step, Error> {
    let fields = match descriptor {
        Value::Object(fields) => fields,
        _ => return Err(Error::Malformed(String::from("expected an object"))),
    };

    fields.into_iter().try_fold(Step::new(), |step, (key, value)| {
        let short = DESCRIPTOR_KEYS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, short)| *short)
            .ok_or_else(|| Error::UnknownKey(key.clone()))?;

        let value = match value {
            Value::String(text) if is_url_safe(&text) => text,
            Value::Number(number) => number.to_string(),
            _ => return Err(Error::InvalidValue(key)),
        };

        Ok(step.set(short, value))
    })
}

/// Values land in a URL path segment verbatim, so only plain tokens are allowed.
fn is_url_safe(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.' | '-'))
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps = self.0.iter().map(Step::to_string).collect::<Vec<_>>();
        write!(f, "{}", steps.join("/"))
    }
}
