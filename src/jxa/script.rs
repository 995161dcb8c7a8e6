// Application-context script composition
#![allow(dead_code)]

use crate::jxa::escape::escape_str;

/// Wrap a trusted fragment so it runs with a Notes application handle bound to `Notes`.
///
/// The fragment is inlined verbatim; any user text inside it must already be escaped.
pub fn build_application_script(fragment: &str) -> String {
    format!(
        "const Notes = Application('Notes');\nNotes.includeStandardAdditions = true;\n{}",
        fragment
    )
}

/// Same template for another scriptable application, bound to `app`
pub fn build_application_script_for(app_name: &str, fragment: &str) -> String {
    format!(
        "const app = Application(\"{}\");\napp.includeStandardAdditions = true;\n{}",
        escape_str(app_name),
        fragment
    )
}
