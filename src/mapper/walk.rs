//! The recursive tag walk and the path resolution shared by extraction and
//! application.

use crate::mapper::TagMap;
use crate::mapper::config::ExtractConfig;
use crate::reflection::{Field, FieldMut, FieldRef, Leaf, Record};

/// Recursively collects `path → tag` pairs in declaration order.
///
/// The per-field check order is a strict precedence: embedded, then nested
/// record, then leaf. An embedded field is never treated as a nested record;
/// it either recurses under the parent's prefix or, under `skip_embedded`,
/// is ignored entirely. Nested records always recurse, extending the prefix
/// with `name.`.
pub(crate) fn collect_tags(
    record: &dyn Record,
    tag_name: &str,
    cfg: ExtractConfig,
    prefix: &str,
    out: &mut TagMap,
) {
    for (index, info) in record.info().iter().enumerate() {
        let Some(field) = record.field_at(index) else {
            continue;
        };
        if info.is_embedded() {
            if cfg.skip_embedded {
                continue;
            }
            // Embedding flattens into the parent's namespace: same prefix.
            if let FieldRef::Record(inner) = field.kind() {
                collect_tags(inner, tag_name, cfg, prefix, out);
            }
            continue;
        }
        match field.kind() {
            FieldRef::Record(inner) => {
                let nested = format!("{prefix}{}.", info.name());
                collect_tags(inner, tag_name, cfg, &nested, out);
            }
            FieldRef::Leaf(_) => {
                if let Some(tag) = cfg.resolve(tag_name, info) {
                    out.insert(format!("{prefix}{}", info.name()), tag.to_owned());
                }
            }
        }
    }
}

/// Resolves a dotted path to the addressed leaf.
pub(crate) fn resolve_path<'a>(record: &'a dyn Record, path: &str) -> Option<&'a dyn Leaf> {
    let hops = plan(record, path)?;
    let (last, body) = hops.split_last()?;
    let mut current = record;
    for &index in body {
        current = match current.field_at(index)?.kind() {
            FieldRef::Record(inner) => inner,
            FieldRef::Leaf(_) => return None,
        };
    }
    match current.field_at(*last)?.kind() {
        FieldRef::Leaf(leaf) => Some(leaf),
        FieldRef::Record(_) => None,
    }
}

/// Resolves a dotted path to a mutable location for the addressed leaf.
///
/// Planning happens under a shared borrow; the mutable descent then follows
/// the planned index chain.
pub(crate) fn resolve_path_mut<'a>(
    record: &'a mut dyn Record,
    path: &str,
) -> Option<&'a mut dyn Leaf> {
    let hops = plan(&*record, path)?;
    let (last, body) = hops.split_last()?;
    let mut current = record;
    for &index in body {
        let node = current;
        current = match node.field_at_mut(index)?.kind_mut() {
            FieldMut::Record(inner) => inner,
            FieldMut::Leaf(_) => return None,
        };
    }
    match current.field_at_mut(*last)?.kind_mut() {
        FieldMut::Leaf(leaf) => Some(leaf),
        FieldMut::Record(_) => None,
    }
}

/// Plans a path into a chain of `field_at` indices.
///
/// Each segment resolves with promotion through embedded records
/// (depth-first), matching the namespace flattening of the tag walk. Every
/// hop except the last descends into a record; the last must address a leaf.
fn plan(record: &dyn Record, path: &str) -> Option<Vec<usize>> {
    let mut hops = Vec::new();
    let mut current = record;
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        let found = find_promoted(current, segment, &mut hops)?;
        if segments.peek().is_none() {
            return match found.kind() {
                FieldRef::Leaf(_) => Some(hops),
                FieldRef::Record(_) => None,
            };
        }
        current = match found.kind() {
            FieldRef::Record(inner) => inner,
            FieldRef::Leaf(_) => return None,
        };
    }
    None
}

/// Looks up `name` in `record`'s own fields, then depth-first through its
/// embedded records, pushing the descent indices onto `hops`.
fn find_promoted<'a>(
    record: &'a dyn Record,
    name: &str,
    hops: &mut Vec<usize>,
) -> Option<&'a dyn Field> {
    let info = record.info();
    if let Some(index) = info.index_of(name) {
        hops.push(index);
        return record.field_at(index);
    }
    for (index, field) in info.iter().enumerate() {
        if !field.is_embedded() {
            continue;
        }
        if let Some(FieldRef::Record(inner)) = record.field_at(index).map(|field| field.kind()) {
            let depth = hops.len();
            hops.push(index);
            if let Some(found) = find_promoted(inner, name, hops) {
                return Some(found);
            }
            hops.truncate(depth);
        }
    }
    None
}
