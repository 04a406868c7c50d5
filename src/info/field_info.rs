/// Static description of a single record field.
///
/// Carries the field's declared name, whether it is embedded into its
/// parent's namespace, and its tag table (tag name → tag value).
///
/// # Examples
///
/// ```
/// use tagmap::info::FieldInfo;
///
/// let info = FieldInfo::new("host").with_tags(&[("env", "HOST")]);
///
/// assert_eq!(info.name(), "host");
/// assert_eq!(info.tag("env"), Some("HOST"));
/// assert_eq!(info.tag("db"), None);
/// assert!(!info.is_embedded());
/// ```
#[derive(Clone, Debug)]
pub struct FieldInfo {
    name: &'static str,
    embedded: bool,
    tags: &'static [(&'static str, &'static str)],
}

impl FieldInfo {
    /// Creates a new [`FieldInfo`] for the given field `name`.
    ///
    /// The field starts non-embedded with an empty tag table.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            embedded: false,
            tags: &[],
        }
    }

    /// Marks the field as embedded (promoted into the parent's namespace).
    #[inline]
    pub const fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Attaches the field's tag table.
    #[inline]
    pub const fn with_tags(mut self, tags: &'static [(&'static str, &'static str)]) -> Self {
        self.tags = tags;
        self
    }

    /// Returns the field's declared name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the field is embedded into its parent's namespace.
    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns the value of the tag named `tag_name`, if present.
    pub fn tag(&self, tag_name: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(name, _)| *name == tag_name)
            .map(|(_, value)| *value)
    }
}
