use std::{collections::BTreeMap, fmt, ops::Deref};

use crate::email_address::EMAIL_ADDRESS_REGEX;

/// Stable identifier of a violated constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationCode {
    Blank,
    TooShort,
    TooLong,
    InvalidEmail,
    Null,
    NotTrue,
    InvalidType,
}

impl ViolationCode {
    pub fn uuid(self) -> &'static str {
        match self {
            Self::Blank => "c1051bb4-d103-4f74-8988-acbcafc7f831",
            Self::TooShort => "9ff3fdc4-b214-49db-8718-39c315e33d45",
            Self::TooLong => "d94b19cc-114f-4f44-9cc4-4138e80a87b9",
            Self::InvalidEmail => "bd79c0ab-ddba-46cc-a703-a7a4b08de310",
            Self::Null => "ad32d13f-c3d4-423b-909a-857b961eb720",
            Self::NotTrue => "2beabf1c-54c0-4882-a928-05249b26e23b",
            Self::InvalidType => "ba785a8c-82cb-4283-967c-3cf342181b40",
        }
    }

    pub fn urn(self) -> String {
        format!("urn:uuid:{}", self.uuid())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub property_path: &'static str,
    pub message: String,
    pub parameters: BTreeMap<&'static str, String>,
    pub code: ViolationCode,
}

impl Violation {
    /// Creates a violation, substituting every parameter placeholder that
    /// appears in `template`.
    pub fn new(
        property_path: &'static str,
        code: ViolationCode,
        template: &str,
        parameters: BTreeMap<&'static str, String>,
    ) -> Self {
        let message = parameters
            .iter()
            .fold(template.to_owned(), |message, (key, value)| {
                message.replace(key, value)
            });
        Self {
            property_path,
            message,
            parameters,
            code,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property_path, self.message)
    }
}

/// All violations found in one submission, in the order they were detected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Starts collecting violations for the property at `path`.
    pub fn property(&mut self, path: &'static str) -> PropertyValidator<'_> {
        PropertyValidator {
            path,
            violations: &mut self.0,
            skip: false,
            valid: true,
        }
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }
}

impl Deref for Violations {
    type Target = [Violation];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

/// A property as it was found in a submitted document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Submitted<T> {
    /// Absent or explicitly `null`.
    #[default]
    Missing,
    Value(T),
    /// Present, but not of type `T`. Holds the name of the expected type.
    InvalidType(&'static str),
}

impl<T> From<Option<T>> for Submitted<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Self::Value)
    }
}

/// Applies rules to a single property. Rules never stop each other, so every
/// violated rule is reported. A property of the wrong type only reports that.
pub struct PropertyValidator<'a> {
    path: &'static str,
    violations: &'a mut Vec<Violation>,
    skip: bool,
    valid: bool,
}

impl PropertyValidator<'_> {
    /// Unwraps a submitted value. Reports a type violation if it has the
    /// wrong type, in which case all further rules are skipped.
    pub fn submitted<T>(&mut self, submitted: Submitted<T>) -> Option<T> {
        match submitted {
            Submitted::Missing => None,
            Submitted::Value(value) => Some(value),
            Submitted::InvalidType(ty) => {
                self.push(
                    ViolationCode::InvalidType,
                    "This value should be of type {{ type }}.",
                    [("{{ type }}", ty.to_owned())],
                );
                self.skip = true;
                None
            }
        }
    }

    pub fn not_blank(&mut self, value: Option<&str>, message: &str) -> &mut Self {
        if value.is_none_or(str::is_empty) {
            self.push(
                ViolationCode::Blank,
                message,
                [("{{ value }}", format_str(value))],
            );
        }
        self
    }

    /// Checks the number of characters of `value`, if it is present.
    /// `min_message` and `max_message` may refer to `{{ limit }}`.
    pub fn length(
        &mut self,
        value: Option<&str>,
        min: Option<(usize, &str)>,
        max: Option<(usize, &str)>,
    ) -> &mut Self {
        let Some(value) = value else {
            return self;
        };
        let length = value.chars().count();

        let violated = if let Some((limit, message)) = max.filter(|&(limit, _)| length > limit) {
            Some((ViolationCode::TooLong, limit, message))
        } else if let Some((limit, message)) = min.filter(|&(limit, _)| length < limit) {
            Some((ViolationCode::TooShort, limit, message))
        } else {
            None
        };

        if let Some((code, limit, message)) = violated {
            self.push(
                code,
                message,
                [
                    ("{{ value }}", format_str(Some(value))),
                    ("{{ limit }}", limit.to_string()),
                    ("{{ value_length }}", length.to_string()),
                ],
            );
        }
        self
    }

    /// Checks the syntax of `value`, unless it is missing or empty.
    pub fn email(&mut self, value: Option<&str>, message: &str) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            if !EMAIL_ADDRESS_REGEX.is_match(value) {
                self.push(
                    ViolationCode::InvalidEmail,
                    message,
                    [("{{ value }}", format_str(Some(value)))],
                );
            }
        }
        self
    }

    pub fn not_null<T>(&mut self, value: Option<&T>, message: &str) -> &mut Self {
        if value.is_none() {
            self.push(ViolationCode::Null, message, [("{{ value }}", "null".into())]);
        }
        self
    }

    /// Checks that `value` is `true`, if it is present.
    pub fn is_true(&mut self, value: Option<bool>, message: &str) -> &mut Self {
        if value == Some(false) {
            self.push(
                ViolationCode::NotTrue,
                message,
                [("{{ value }}", "false".into())],
            );
        }
        self
    }

    /// Whether no rule has been violated for this property so far.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    fn push<const N: usize>(
        &mut self,
        code: ViolationCode,
        template: &str,
        parameters: [(&'static str, String); N],
    ) {
        if self.skip {
            return;
        }
        self.valid = false;
        self.violations.push(Violation::new(
            self.path,
            code,
            template,
            parameters.into_iter().collect(),
        ));
    }
}

fn format_str(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("\"{value}\""),
        None => "null".into(),
    }
}
