//! Query filtering over indexed settings modules.

use crate::entry::ModuleEntry;

/// Narrow `modules` to the entries matching `query`.
///
/// An empty query passes everything through. Otherwise a module matches when
/// the query is a case-insensitive substring of its name, its description or
/// any single keyword. The result keeps the input order.
pub fn filter_modules<'a>(modules: &'a [ModuleEntry], query: &str) -> Vec<&'a ModuleEntry> {
    if query.is_empty() {
        return modules.iter().collect();
    }

    let query_lower = query.to_lowercase();
    modules
        .iter()
        .filter(|module| matches_query(module, &query_lower))
        .collect()
}

fn matches_query(module: &ModuleEntry, query_lower: &str) -> bool {
    module.name.to_lowercase().contains(query_lower)
        || module.description.to_lowercase().contains(query_lower)
        || module
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(query_lower))
}
