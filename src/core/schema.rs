//! Content file shape checks.
//!
//! The static site loads `movies/*.json` and `genres/*.json` and refuses to
//! build if any file deviates from these shapes. Unknown keys are ignored.

use serde_json::Value;

/// Expected JSON shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Number,
    String,
    /// Present, but may be `null`.
    Nullable(Box<Shape>),
    /// May be missing; `null` is not accepted unless the inner shape allows it.
    Optional(Box<Shape>),
    Array(Box<Shape>),
    Object(Vec<(&'static str, Shape)>),
}

impl Shape {
    fn nullable(inner: Shape) -> Self {
        Shape::Nullable(Box::new(inner))
    }

    fn optional(inner: Shape) -> Self {
        Shape::Optional(Box::new(inner))
    }

    fn array(inner: Shape) -> Self {
        Shape::Array(Box::new(inner))
    }

    /// Short name used in violation messages.
    pub fn describe(&self) -> String {
        match self {
            Shape::Number => "number".to_string(),
            Shape::String => "string".to_string(),
            Shape::Nullable(inner) => format!("{} | null", inner.describe()),
            Shape::Optional(inner) => format!("{} | missing", inner.describe()),
            Shape::Array(inner) => format!("array of {}", inner.describe()),
            Shape::Object(_) => "object".to_string(),
        }
    }
}

/// One place where a value deviates from its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON path, e.g. `credits.cast[3].name`.
    pub path: String,
    pub expected: String,
    pub found: String,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = if self.path.is_empty() { "<root>" } else { &self.path };
        write!(f, "{}: expected {}, found {}", path, self.expected, self.found)
    }
}

/// Shape of a movie content file.
pub fn movie_schema() -> Shape {
    let genre = Shape::Object(vec![("id", Shape::Number), ("name", Shape::String)]);

    let profile = Shape::optional(Shape::nullable(Shape::String));
    let cast = Shape::Object(vec![
        ("id", Shape::Number),
        ("name", Shape::String),
        ("character", Shape::String),
        ("profilePath", profile.clone()),
        ("order", Shape::Number),
    ]);
    let crew = Shape::Object(vec![
        ("id", Shape::Number),
        ("name", Shape::String),
        ("job", Shape::String),
        ("department", Shape::String),
        ("profilePath", profile),
    ]);

    Shape::Object(vec![
        ("id", Shape::Number),
        ("title", Shape::String),
        ("originalTitle", Shape::String),
        ("overview", Shape::String),
        ("posterPath", Shape::nullable(Shape::String)),
        ("backdropPath", Shape::nullable(Shape::String)),
        ("releaseDate", Shape::String),
        ("voteAverage", Shape::Number),
        ("voteCount", Shape::Number),
        ("runtime", Shape::nullable(Shape::Number)),
        ("budget", Shape::Number),
        ("revenue", Shape::Number),
        ("genres", Shape::array(genre)),
        (
            "credits",
            Shape::optional(Shape::Object(vec![
                ("cast", Shape::array(cast)),
                ("crew", Shape::array(crew)),
            ])),
        ),
        ("popularity", Shape::Number),
        ("status", Shape::String),
        ("tagline", Shape::nullable(Shape::String)),
        ("homepage", Shape::nullable(Shape::String)),
        ("imdbId", Shape::nullable(Shape::String)),
    ])
}

/// Shape of a genre content file.
pub fn genre_schema() -> Shape {
    Shape::Object(vec![
        ("id", Shape::Number),
        ("name", Shape::String),
        ("slug", Shape::String),
        ("movieCount", Shape::optional(Shape::Number)),
    ])
}

/// Check a value against a shape, returning every violation found.
pub fn validate(value: &Value, shape: &Shape) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();
    check(Some(value), shape, String::new(), &mut violations);
    violations
}

fn check(value: Option<&Value>, shape: &Shape, path: String, out: &mut Vec<SchemaViolation>) {
    let ok = match (shape, value) {
        (Shape::Optional(_), None) => true,
        (Shape::Optional(inner), Some(v)) => {
            check(Some(v), inner, path, out);
            return;
        }
        (_, None) => false,
        (Shape::Nullable(_), Some(Value::Null)) => true,
        (Shape::Nullable(inner), Some(v)) => {
            check(Some(v), inner, path, out);
            return;
        }
        (Shape::Number, Some(v)) => v.is_number(),
        (Shape::String, Some(v)) => v.is_string(),
        (Shape::Array(inner), Some(Value::Array(items))) => {
            for (i, item) in items.iter().enumerate() {
                check(Some(item), inner, format!("{}[{}]", path, i), out);
            }
            return;
        }
        (Shape::Object(fields), Some(Value::Object(map))) => {
            for (key, field) in fields {
                let field_path = if path.is_empty() {
                    key.to_string()
                } else {
                    format!("{}.{}", path, key)
                };
                check(map.get(*key), field, field_path, out);
            }
            return;
        }
        _ => false,
    };

    if !ok {
        out.push(SchemaViolation {
            path,
            expected: shape.describe(),
            found: value.map(kind_of).unwrap_or("missing").to_string(),
        });
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
