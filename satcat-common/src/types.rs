use serde::{Deserialize, Deserializer, Serialize};

/// A tracked orbital object as published in the catalog dataset.
///
/// The dataset is consumed without schema validation: absent or `null`
/// fields decode as empty strings and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Satellite {
    /// NORAD catalog number, kept as text (numbers in the JSON are accepted)
    #[serde(default, deserialize_with = "lenient_string")]
    pub norad_cat_id: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    /// Registering nation/entity code
    #[serde(default, deserialize_with = "lenient_string")]
    pub country_code: String,

    /// Orbit regime code (LEO, MEO, GEO, ...)
    #[serde(default, deserialize_with = "lenient_string")]
    pub orbit_code: String,

    /// PAYLOAD, ROCKET BODY, DEBRIS, ...
    #[serde(default, deserialize_with = "lenient_string")]
    pub object_type: String,
}

impl Satellite {
    pub fn new(
        norad_cat_id: impl Into<String>,
        name: impl Into<String>,
        country_code: impl Into<String>,
        orbit_code: impl Into<String>,
        object_type: impl Into<String>,
    ) -> Self {
        Self {
            norad_cat_id: norad_cat_id.into(),
            name: name.into(),
            country_code: country_code.into(),
            orbit_code: orbit_code.into(),
            object_type: object_type.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Null,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LenientValue::deserialize(deserializer)? {
        LenientValue::Text(s) => s,
        LenientValue::Number(n) => n.to_string(),
        LenientValue::Flag(b) => b.to_string(),
        LenientValue::Null => String::new(),
    })
}

/// Category constraints chosen by the caller.
///
/// `None` and `Some("")` both mean "no constraint on this dimension".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub country_code: Option<String>,

    /// Compared against `Satellite::orbit_code`
    #[serde(default)]
    pub orbit_regime: Option<String>,

    #[serde(default)]
    pub object_type: Option<String>,
}

impl FilterCriteria {
    pub fn with_country(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    pub fn with_orbit_regime(mut self, regime: impl Into<String>) -> Self {
        self.orbit_regime = Some(regime.into());
        self
    }

    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    /// Active country constraint (`None` for absent or empty).
    pub fn country(&self) -> Option<&str> {
        non_empty(&self.country_code)
    }

    pub fn orbit_regime(&self) -> Option<&str> {
        non_empty(&self.orbit_regime)
    }

    pub fn object_type(&self) -> Option<&str> {
        non_empty(&self.object_type)
    }

    /// True when no dimension is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.country().is_none() && self.orbit_regime().is_none() && self.object_type().is_none()
    }
}

fn non_empty(constraint: &Option<String>) -> Option<&str> {
    constraint.as_deref().filter(|s| !s.is_empty())
}

/// Free-text search over NORAD id and name.
///
/// The text is case-folded once here; candidates are folded with the same
/// [`fold_case`] at comparison time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    folded: Option<String>,
}

impl SearchQuery {
    pub fn new(text: impl AsRef<str>) -> Self {
        let text = text.as_ref();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            folded: Some(fold_case(text)),
        }
    }

    /// The case-folded needle, or `None` when there is no text constraint.
    pub fn folded(&self) -> Option<&str> {
        self.folded.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_none()
    }
}

impl From<&str> for SearchQuery {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<Option<&str>> for SearchQuery {
    fn from(text: Option<&str>) -> Self {
        text.map(Self::new).unwrap_or_default()
    }
}

/// Case folding used on both sides of every case-insensitive comparison.
///
/// Unicode lowercase mapping; independent of the process locale.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}
