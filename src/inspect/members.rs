//! @acp:module "Member Utilities"
//! @acp:summary "Public member listing and transitive subtype enumeration"
//! @acp:domain docs
//! @acp:layer utility

use std::collections::HashSet;

use super::{qualified_name, Introspect};

/// Extra member filter: receives the member name and the member itself
pub type Predicate<'p, T> = &'p dyn Fn(&str, &T) -> bool;

/// @acp:summary "Default member filter: excludes names starting with `_`"
pub fn is_public(name: &str) -> bool {
    !name.starts_with('_')
}

/// @acp:summary "Named public members of an object, sorted by name"
///
/// Unnamed members are skipped. Every extra predicate must pass.
pub fn getmembers<'a, T: Introspect>(
    obj: &'a T,
    predicates: &[Predicate<'_, T>],
) -> Vec<(&'a str, &'a T)> {
    let mut members: Vec<(&'a str, &'a T)> = obj
        .members()
        .iter()
        .filter_map(|m| m.name().map(|name| (name, m)))
        .filter(|&(name, m)| is_public(name) && predicates.iter().all(|p| p(name, m)))
        .collect();

    members.sort_by(|a, b| a.0.cmp(b.0));
    members
}

/// @acp:summary "A type and all of its transitive subtypes, depth-first"
///
/// Types reachable along more than one path are listed once. With `leaves`,
/// only types without subtypes of their own are returned.
pub fn subclasses<T: Introspect>(cls: &T, leaves: bool) -> Vec<&T> {
    let mut seen: HashSet<(Option<String>, Option<String>)> = HashSet::new();
    let mut out = Vec::new();
    walk(cls, leaves, &mut seen, &mut out);
    out
}

fn walk<'a, T: Introspect>(
    cls: &'a T,
    leaves: bool,
    seen: &mut HashSet<(Option<String>, Option<String>)>,
    out: &mut Vec<&'a T>,
) {
    let key = (cls.module().map(str::to_string), qualified_name(cls));
    if !seen.insert(key) {
        return;
    }

    let subtypes = cls.subtypes();
    if !leaves || subtypes.is_empty() {
        out.push(cls);
    }
    for sub in subtypes {
        walk(sub, leaves, seen, out);
    }
}
