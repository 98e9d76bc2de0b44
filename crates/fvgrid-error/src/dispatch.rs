//! The dispatch pipeline: filter, select language, render, forward.

use crate::config::Config;
use crate::domain::{code, ErrorDomain};
use crate::language::Language;
use crate::manager::ErrorManager;
use crate::record::ErrorRecord;
use crate::severity::Severity;

/// Substitution pairs: each `{key}` token in the template is replaced by
/// the paired value.
pub type KvPairs<'a> = &'a [(&'a str, String)];

/// Record a domain value through the active logger.
///
/// Steps, in order:
/// 1. pin the configuration snapshot;
/// 2. drop the call before any string work if the value's default
///    severity is below `min_severity`;
/// 3. pick the template for the configured language;
/// 4. substitute `{key}` tokens (see [`render`]);
/// 5. build the [`ErrorRecord`] (code, severity, message, timestamp,
///    thread) and hand it to the [`ErrorManager`].
///
/// This never unwinds — it is the log-only front end. See
/// [`raise`](crate::raise) for the policy-aware one.
pub fn report<E: ErrorDomain>(e: E, kv: KvPairs<'_>) {
    let cfg = Config::get();
    let severity = e.default_severity();
    if severity < cfg.min_severity {
        return;
    }
    ErrorManager::log(build_record(e, severity, cfg.language, kv));
}

/// Build the finished record for a domain value without logging it.
pub(crate) fn build_record<E: ErrorDomain>(
    e: E,
    severity: Severity,
    language: Language,
    kv: KvPairs<'_>,
) -> ErrorRecord {
    ErrorRecord::new(code(e), severity, render(e.template(language), kv))
}

/// Single-pass, left-to-right placeholder substitution.
///
/// For each `(key, value)` pair every occurrence of the literal token
/// `{key}` is replaced by `value`; the scan cursor then advances past
/// the inserted text, so a value containing `{key}` itself is inserted
/// once and never reprocessed. Pairs without a matching token are
/// ignored; tokens without a matching pair stay verbatim.
pub(crate) fn render(template: &str, kv: KvPairs<'_>) -> String {
    let mut out = String::from(template);
    for (key, value) in kv {
        let token = format!("{{{key}}}");
        let mut pos = 0;
        while let Some(found) = out[pos..].find(&token) {
            let at = pos + found;
            out.replace_range(at..at + token.len(), value);
            pos = at + value.len();
        }
    }
    out
}
