use crate::info::FieldInfo;

/// The flag set consumed read-only during a walk.
///
/// Built once from a sequence of [`ExtractOption`]s; all flags default to
/// `false`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ExtractConfig {
    pub skip_embedded: bool,
    pub skip_empty: bool,
    pub skip_minus: bool,
}

impl ExtractConfig {
    pub(crate) fn build(options: &[ExtractOption]) -> Self {
        options
            .iter()
            .fold(Self::default(), |cfg, option| (option.apply)(cfg))
    }

    /// Resolves a field's tag under this configuration.
    ///
    /// Returns `None` when the field is excluded: no tag under `skip_empty`,
    /// or a `"-"` tag under `skip_minus`. An untagged field is otherwise
    /// included with an empty tag.
    pub(crate) fn resolve(&self, tag_name: &str, field: &FieldInfo) -> Option<&'static str> {
        match field.tag(tag_name) {
            None if self.skip_empty => None,
            None => Some(""),
            Some("-") if self.skip_minus => None,
            Some(tag) => Some(tag),
        }
    }
}

/// An opaque, composable transformation of the extraction configuration.
///
/// Each option touches a single flag, so application order does not matter.
pub struct ExtractOption {
    apply: fn(ExtractConfig) -> ExtractConfig,
}

/// Skips embedded records entirely; the walk does not recurse into them.
///
/// Named nested-record fields are not affected.
pub fn without_embedded() -> ExtractOption {
    ExtractOption {
        apply: |mut cfg| {
            cfg.skip_embedded = true;
            cfg
        },
    }
}

/// Skips fields that carry no tag at all.
pub fn without_empty() -> ExtractOption {
    ExtractOption {
        apply: |mut cfg| {
            cfg.skip_empty = true;
            cfg
        },
    }
}

/// Skips fields whose tag is exactly `"-"`.
pub fn without_minus() -> ExtractOption {
    ExtractOption {
        apply: |mut cfg| {
            cfg.skip_minus = true;
            cfg
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{ExtractConfig, without_empty, without_minus};
    use crate::info::FieldInfo;

    #[test]
    fn resolution_follows_the_flags() {
        let tagged = FieldInfo::new("a").with_tags(&[("foo", "bar")]);
        let minus = FieldInfo::new("b").with_tags(&[("foo", "-")]);
        let untagged = FieldInfo::new("c");

        let cfg = ExtractConfig::default();
        assert_eq!(cfg.resolve("foo", &tagged), Some("bar"));
        assert_eq!(cfg.resolve("foo", &minus), Some("-"));
        assert_eq!(cfg.resolve("foo", &untagged), Some(""));

        let cfg = ExtractConfig::build(&[without_minus()]);
        assert_eq!(cfg.resolve("foo", &tagged), Some("bar"));
        assert_eq!(cfg.resolve("foo", &minus), None);
        assert_eq!(cfg.resolve("foo", &untagged), Some(""));

        let cfg = ExtractConfig::build(&[without_empty()]);
        assert_eq!(cfg.resolve("foo", &tagged), Some("bar"));
        assert_eq!(cfg.resolve("foo", &minus), Some("-"));
        assert_eq!(cfg.resolve("foo", &untagged), None);
    }
}
