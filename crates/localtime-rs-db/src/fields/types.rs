//! Field type definitions.
//!
//! Each [`FieldType`] variant corresponds to a host framework field class.
//! Only [`FieldType::DateTimeField`] counts as a timestamp; every other
//! variant is rendered as-is by the admin.

use crate::value::Value;

/// The declared type of a record field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum FieldType {
    /// Auto-incrementing 32-bit integer primary key.
    AutoField,
    /// Auto-incrementing 64-bit integer primary key.
    BigAutoField,
    /// Variable-length string with a max length.
    CharField,
    /// Unlimited-length text.
    TextField,
    /// 32-bit signed integer.
    IntegerField,
    /// 64-bit signed integer.
    BigIntegerField,
    /// 64-bit floating-point number.
    FloatField,
    /// Fixed-precision decimal number.
    DecimalField {
        /// Maximum total digits.
        max_digits: u32,
        /// Digits after the decimal point.
        decimal_places: u32,
    },
    /// Boolean (true/false).
    BooleanField,
    /// Date without time.
    DateField,
    /// Date and time.
    DateTimeField,
    /// Time without date.
    TimeField,
    /// Duration / interval.
    DurationField,
    /// UUID field.
    UuidField,
    /// JSON data.
    JsonField,
    /// Email address.
    EmailField,
    /// Slug (URL-friendly string).
    SlugField,
    /// Many-to-one relationship.
    ForeignKey {
        /// The target model key (e.g. "auth.user").
        to: String,
    },
}

impl FieldType {
    /// Returns `true` for the timestamp kind (`DateTimeField`).
    ///
    /// `DateField` and `TimeField` carry no instant and are not timestamps.
    pub const fn is_timestamp(&self) -> bool {
        matches!(self, Self::DateTimeField)
    }
}

/// Definition of a record field.
///
/// Constructed once per record type, usually inside a `LazyLock` that backs
/// [`Model::meta`](crate::model::Model::meta).
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// The attribute name of this field.
    pub name: &'static str,
    /// The type of this field.
    pub field_type: FieldType,
    /// Whether this field is the primary key.
    pub primary_key: bool,
    /// Whether NULL is allowed.
    pub null: bool,
    /// Whether the field may be left blank in forms.
    pub blank: bool,
    /// Default value for new instances.
    pub default: Option<Value>,
    /// Maximum character length (for `CharField` and similar).
    pub max_length: Option<usize>,
    /// Human-readable help text.
    pub help_text: String,
    /// Human-readable name for the field.
    pub verbose_name: String,
    /// Whether the field is editable in forms.
    pub editable: bool,
    /// Set to "now" on every save.
    pub auto_now: bool,
    /// Set to "now" when the record is first created.
    pub auto_now_add: bool,
}

impl FieldDef {
    /// Creates a new `FieldDef` with sensible defaults.
    ///
    /// The verbose name defaults to the field name with underscores replaced
    /// by spaces.
    pub fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            primary_key: false,
            null: false,
            blank: false,
            default: None,
            max_length: None,
            help_text: String::new(),
            verbose_name: name.replace('_', " "),
            editable: true,
            auto_now: false,
            auto_now_add: false,
        }
    }

    /// Marks this field as the primary key.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Allows NULL values.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.null = true;
        self
    }

    /// Sets the maximum character length.
    #[must_use]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the verbose name.
    #[must_use]
    pub fn verbose_name(mut self, name: impl Into<String>) -> Self {
        self.verbose_name = name.into();
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = text.into();
        self
    }

    /// Refreshes the value on every save. Such fields are not editable.
    #[must_use]
    pub const fn auto_now(mut self) -> Self {
        self.auto_now = true;
        self.editable = false;
        self.blank = true;
        self
    }

    /// Stamps the value once on creation. Such fields are not editable.
    #[must_use]
    pub const fn auto_now_add(mut self) -> Self {
        self.auto_now_add = true;
        self.editable = false;
        self.blank = true;
        self
    }

    /// Returns `true` if this field holds a timestamp.
    pub const fn is_timestamp(&self) -> bool {
        self.field_type.is_timestamp()
    }
}
