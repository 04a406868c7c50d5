//! The record handle and its extraction / application operations.

mod config;
mod error;
mod walk;

pub use config::{ExtractOption, without_embedded, without_empty, without_minus};
pub use error::ApplyError;

use std::collections::HashMap;

use crate::mapper::config::ExtractConfig;
use crate::reflection::{Leaf, Record};

/// Mapping from field path to tag value.
///
/// A path is a dot-joined sequence of field names addressing a leaf field;
/// embedded records contribute no segment of their own.
pub type TagMap = HashMap<String, String>;

/// Mapping from tag value to a boxed clone of the field's current value.
pub type ValueMap = HashMap<String, Box<dyn Leaf>>;

/// A handle binding a record's static descriptors to a live instance.
///
/// The handle borrows the instance mutably, so mutations made through
/// [`apply`](Mapper::apply) are visible to the caller. One handle per
/// mapping operation; it holds no state beyond the borrow.
///
/// # Examples
///
/// ```
/// use tagmap::{Mapper, derive::Record};
///
/// #[derive(Record, Default)]
/// struct Config {
///     #[tag(env = "HOST")]
///     host: String,
/// }
///
/// let mut config = Config::default();
/// let tags = Mapper::new(&mut config).extract_tags("env", &[]);
///
/// assert_eq!(tags["host"], "HOST");
/// ```
pub struct Mapper<'a> {
    record: &'a mut dyn Record,
}

impl<'a> Mapper<'a> {
    /// Creates a handle over a live record instance.
    pub fn new(record: &'a mut dyn Record) -> Self {
        Self { record }
    }

    /// Returns the underlying instance.
    pub fn record(&self) -> &dyn Record {
        &*self.record
    }

    /// Walks the record's fields and returns a `path → tag` map for
    /// `tag_name`.
    ///
    /// Embedded records flatten into the parent's namespace; named nested
    /// records prefix their leaves with `name.`. Untagged leaves map to an
    /// empty tag unless [`without_empty`] is supplied; leaves tagged `"-"`
    /// are dropped under [`without_minus`]; [`without_embedded`] suppresses
    /// recursion into embedded records only.
    pub fn extract_tags(&self, tag_name: &str, options: &[ExtractOption]) -> TagMap {
        let cfg = ExtractConfig::build(options);
        let mut tags = TagMap::new();
        walk::collect_tags(&*self.record, tag_name, cfg, "", &mut tags);
        tags
    }

    /// Returns a `tag → current value` map for `tag_name`.
    ///
    /// Values are boxed clones; recover the static type with
    /// `downcast_ref`. With `skip_absent`, `None`
    /// options and empty lists are omitted.
    ///
    /// Two paths sharing one tag are not detected: one entry silently
    /// overwrites the other, and which survives follows map iteration
    /// order.
    pub fn extract_values(
        &self,
        tag_name: &str,
        skip_absent: bool,
        options: &[ExtractOption],
    ) -> ValueMap {
        let tags = self.extract_tags(tag_name, options);
        let mut values = ValueMap::with_capacity(tags.len());
        for (path, tag) in tags {
            let Some(leaf) = walk::resolve_path(&*self.record, &path) else {
                continue;
            };
            if skip_absent && leaf.is_absent() {
                continue;
            }
            values.insert(tag, leaf.to_boxed());
        }
        values
    }

    /// Applies a `path → text` map onto the instance, coercing each string
    /// into the addressed field's declared type.
    ///
    /// Not transactional: application fails fast on the first error and
    /// leaves earlier mutations in place. Iteration order over the map is
    /// unspecified, so callers must not depend on left-to-right application
    /// when failures matter.
    pub fn apply(&mut self, values: &HashMap<String, String>) -> Result<(), ApplyError> {
        for (path, source) in values {
            let Some(leaf) = walk::resolve_path_mut(&mut *self.record, path) else {
                return Err(ApplyError::UnknownPath { path: path.clone() });
            };
            leaf.assign_text(source).map_err(|cause| ApplyError::Coerce {
                field: leaf_name(path).to_owned(),
                cause,
            })?;
        }
        Ok(())
    }
}

/// The leaf field's declared name: the last path segment.
fn leaf_name(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

/// Returns the tag values of `record` for `tag_name`, skipping untagged
/// fields and fields tagged `"-"`.
pub fn tags_of(tag_name: &str, record: &mut dyn Record) -> Vec<String> {
    Mapper::new(record)
        .extract_tags(tag_name, &[without_empty(), without_minus()])
        .into_values()
        .collect()
}

/// Shortcut for [`Mapper::extract_values`] with the `without_empty` and
/// `without_minus` options applied.
pub fn to_value_map(tag_name: &str, record: &mut dyn Record, skip_absent: bool) -> ValueMap {
    Mapper::new(record).extract_values(tag_name, skip_absent, &[without_empty(), without_minus()])
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use uuid::Uuid;

    use crate::coerce::FromText;
    use crate::derive::Record;
    use crate::{ApplyError, Mapper, Record as _, tags_of, to_value_map};
    use crate::{without_embedded, without_empty, without_minus};

    impl FromText for Uuid {
        type Err = uuid::Error;

        fn from_text(text: &str) -> Result<Self, Self::Err> {
            text.parse()
        }
    }

    crate::impl_text_field!(Uuid);

    const ID: &str = "6b245e15-5c88-438b-a170-d8f97460083a";

    #[derive(Record, Default, Debug, PartialEq)]
    struct Foo {
        #[tag(foo = "6b245e15-5c88-438b-a170-d8f97460083a")]
        id: Uuid,
        #[tag(foo = "1,2,3,4")]
        list: Vec<i64>,
    }

    #[derive(Record, Default, Debug, PartialEq)]
    struct Buz {
        #[tag(foo = "true")]
        b: bool,
    }

    #[derive(Record, Default, Debug, PartialEq)]
    struct Bar {
        #[record(embedded)]
        foo: Foo,
        b: Buz,
        #[tag(foo = "1m")]
        n: Duration,
        s: String,
        #[tag(foo = "-")]
        skip: String,
    }

    fn sample() -> Bar {
        Bar {
            s: "test".to_owned(),
            skip: "skip".to_owned(),
            ..Bar::default()
        }
    }

    fn expected_tags() -> HashMap<String, String> {
        [
            ("id", ID),
            ("list", "1,2,3,4"),
            ("n", "1m"),
            ("s", ""),
            ("b.b", "true"),
        ]
        .into_iter()
        .map(|(path, tag)| (path.to_owned(), tag.to_owned()))
        .collect()
    }

    #[test]
    fn extract_tags_flattens_embedded_and_prefixes_nested() {
        let mut bar = sample();
        let mapper = Mapper::new(&mut bar);

        let tags = mapper.extract_tags("foo", &[without_minus()]);

        assert_eq!(tags, expected_tags());
        assert_eq!(mapper.record().info().name(), "Bar");
    }

    #[test]
    fn apply_round_trips_the_extracted_tags() {
        let mut bar = sample();
        let mut mapper = Mapper::new(&mut bar);

        let tags = mapper.extract_tags("foo", &[without_minus()]);
        mapper.apply(&tags).unwrap();

        assert_eq!(
            bar,
            Bar {
                foo: Foo {
                    id: ID.parse().unwrap(),
                    list: vec![1, 2, 3, 4],
                },
                b: Buz { b: true },
                n: Duration::from_secs(60),
                s: String::new(),
                skip: "skip".to_owned(),
            }
        );
    }

    #[test]
    fn without_embedded_drops_the_whole_embedded_record() {
        let mut bar = sample();
        let tags = Mapper::new(&mut bar).extract_tags("foo", &[without_embedded()]);

        let mut paths: Vec<_> = tags.keys().map(String::as_str).collect();
        paths.sort_unstable();
        // The nested record `b` is not subject to the flag; `skip` keeps its
        // `-` tag because `without_minus` was not supplied.
        assert_eq!(paths, ["b.b", "n", "s", "skip"]);
        assert_eq!(tags["skip"], "-");
    }

    #[test]
    fn skip_minus_and_skip_empty_are_independent() {
        let mut bar = sample();
        let mapper = Mapper::new(&mut bar);

        let minus_only = mapper.extract_tags("foo", &[without_minus()]);
        assert!(minus_only.contains_key("s"));
        assert!(!minus_only.contains_key("skip"));

        let empty_only = mapper.extract_tags("foo", &[without_empty()]);
        assert!(!empty_only.contains_key("s"));
        assert_eq!(empty_only["skip"], "-");
    }

    #[test]
    fn extract_values_boxes_current_values() {
        let mut bar = sample();
        bar.foo.id = Uuid::new_v4();
        bar.foo.list = vec![7, 8];
        let expected_id = bar.foo.id;

        let values = Mapper::new(&mut bar).extract_values("foo", false, &[without_minus()]);

        assert_eq!(values[ID].downcast_ref::<Uuid>(), Some(&expected_id));
        assert_eq!(
            values["1,2,3,4"].downcast_ref::<Vec<i64>>(),
            Some(&vec![7, 8])
        );
        assert_eq!(values[""].downcast_ref::<String>(), Some(&"test".to_owned()));
        assert!(values["true"].is::<bool>());
    }

    #[derive(Record, Default)]
    struct Prefs {
        #[tag(foo = "bar")]
        a: String,
        #[tag(foo = "baz")]
        b: i32,
        #[tag(foo = "-")]
        c: bool,
        #[tag(foo = "d")]
        d: Option<f64>,
        e: Option<f64>,
    }

    #[test]
    fn skip_absent_omits_none_options_and_empty_lists() {
        let mut prefs = Prefs {
            a: "test".to_owned(),
            b: 12,
            c: true,
            ..Prefs::default()
        };

        let without_absent = to_value_map("foo", &mut prefs, true);
        assert_eq!(without_absent.len(), 2);
        assert_eq!(
            without_absent["bar"].downcast_ref::<String>(),
            Some(&"test".to_owned())
        );
        assert_eq!(without_absent["baz"].downcast_ref::<i32>(), Some(&12));

        let with_absent = to_value_map("foo", &mut prefs, false);
        assert_eq!(with_absent.len(), 3);
        assert_eq!(
            with_absent["d"].downcast_ref::<Option<f64>>(),
            Some(&None)
        );

        let mut bar = sample();
        let values = Mapper::new(&mut bar).extract_values("foo", true, &[without_minus()]);
        assert!(!values.contains_key("1,2,3,4"));
    }

    #[derive(Record, Default)]
    struct Plain {
        #[tag(foo = "bar")]
        a: String,
        #[tag(foo = "baz")]
        b: i32,
        #[tag(foo = "-")]
        c: bool,
        d: f64,
    }

    #[test]
    fn tags_of_skips_empty_and_minus() {
        let mut plain = Plain::default();
        let mut names = tags_of("foo", &mut plain);
        names.sort_unstable();

        assert_eq!(names, ["bar", "baz"]);
    }

    #[derive(Record, Default)]
    struct Clash {
        #[tag(foo = "same")]
        a: i32,
        #[tag(foo = "same")]
        b: i32,
    }

    #[test]
    fn tag_collisions_silently_overwrite() {
        let mut clash = Clash::default();
        let values = Mapper::new(&mut clash).extract_values("foo", false, &[]);

        assert_eq!(values.len(), 1);
        assert!(values["same"].is::<i32>());
    }

    #[test]
    fn apply_error_names_the_leaf_field_only() {
        let mut bar = sample();
        let mut mapper = Mapper::new(&mut bar);

        let values = HashMap::from([("b.b".to_owned(), "notabool".to_owned())]);
        match mapper.apply(&values).unwrap_err() {
            ApplyError::Coerce { field, .. } => assert_eq!(field, "b"),
            other => panic!("expected a coercion error, got {other:?}"),
        }
    }

    #[test]
    fn apply_rejects_unknown_paths() {
        let mut bar = sample();
        let values = HashMap::from([("nope".to_owned(), "1".to_owned())]);

        match Mapper::new(&mut bar).apply(&values).unwrap_err() {
            ApplyError::UnknownPath { path } => assert_eq!(path, "nope"),
            other => panic!("expected an unknown path error, got {other:?}"),
        }

        // A path stopping at a record is not a leaf either.
        let values = HashMap::from([("b".to_owned(), "1".to_owned())]);
        assert!(matches!(
            Mapper::new(&mut bar).apply(&values),
            Err(ApplyError::UnknownPath { .. })
        ));
    }

    #[test]
    fn apply_is_not_transactional() {
        let mut bar = sample();
        let mut mapper = Mapper::new(&mut bar);

        let good = HashMap::from([("n".to_owned(), "2m".to_owned())]);
        mapper.apply(&good).unwrap();
        let bad = HashMap::from([("n".to_owned(), "oops".to_owned())]);
        assert!(mapper.apply(&bad).is_err());

        // The earlier mutation stays in place.
        assert_eq!(bar.n, Duration::from_secs(120));
    }

    #[test]
    fn empty_strings_reset_fields_to_their_defaults() {
        let mut bar = sample();
        bar.foo.list = vec![1, 2];
        bar.b.b = true;
        let mut mapper = Mapper::new(&mut bar);

        let values = [("list", ""), ("b.b", ""), ("s", ""), ("id", "")]
            .into_iter()
            .map(|(path, text)| (path.to_owned(), text.to_owned()))
            .collect();
        mapper.apply(&values).unwrap();

        // The uuid hook is never invoked for the empty string.
        assert_eq!(bar, Bar {
            skip: "skip".to_owned(),
            ..Bar::default()
        });
    }

    #[derive(Record, Default, Debug, PartialEq)]
    struct Leafy {
        #[tag(foo = "x")]
        x: u8,
    }

    #[derive(Record, Default, Debug, PartialEq)]
    struct Outer {
        inner: Box<Leafy>,
    }

    #[test]
    fn boxed_nested_records_are_traversed() {
        let mut outer = Outer::default();
        let mut mapper = Mapper::new(&mut outer);

        let tags = mapper.extract_tags("foo", &[]);
        assert_eq!(tags["inner.x"], "x");

        let values = HashMap::from([("inner.x".to_owned(), "9".to_owned())]);
        mapper.apply(&values).unwrap();
        assert_eq!(outer.inner.x, 9);
    }

    #[derive(Record, Default, Debug, PartialEq)]
    struct Deep {
        #[record(embedded)]
        mid: Mid,
    }

    #[derive(Record, Default, Debug, PartialEq)]
    struct Mid {
        #[record(embedded)]
        base: Leafy,
        #[tag(foo = "y")]
        y: i16,
    }

    #[test]
    fn promotion_descends_through_stacked_embedding() {
        let mut deep = Deep::default();
        let mut mapper = Mapper::new(&mut deep);

        let tags = mapper.extract_tags("foo", &[]);
        let mut paths: Vec<_> = tags.keys().map(String::as_str).collect();
        paths.sort_unstable();
        assert_eq!(paths, ["x", "y"]);

        let values = HashMap::from([
            ("x".to_owned(), "3".to_owned()),
            ("y".to_owned(), "-5".to_owned()),
        ]);
        mapper.apply(&values).unwrap();
        assert_eq!(deep.mid.base.x, 3);
        assert_eq!(deep.mid.y, -5);
    }
}
