//! Synthetic-name classification
//!
//! CGLIB's enhancer renames an intercepted method `m` to `CGLIB$m$N`, where
//! `N` is a decimal counter. The whole name must match; `CGLIB$$0` does not.

use once_cell::sync::Lazy;
use regex::Regex;
use strata_types::MethodDescriptor;

/// Fixed prefix of CGLIB renamed methods
pub const CGLIB_PREFIX: &str = "CGLIB";

// Any character except a line terminator (`\n`, `\r`, NEL, LS, PS).
const LINE_CHAR: &str = r"[^\n\r\x{85}\x{2028}\x{2029}]";

// `\d` in Rust regex is Unicode-aware; the convention only emits ASCII digits.
static CGLIB_RENAMED_METHOD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{CGLIB_PREFIX}\$({LINE_CHAR}+)\$[0-9]+$"))
        .expect("CGLIB renamed-method pattern compiles")
});

/// Whether the method is a CGLIB renamed method, following `CGLIB$methodName$0`
pub fn is_cglib_renamed_method<M>(method: &M) -> bool
where
    M: MethodDescriptor + ?Sized,
{
    is_cglib_renamed_name(method.name())
}

/// Whether a raw method name follows `CGLIB$methodName$0`
pub fn is_cglib_renamed_name(name: &str) -> bool {
    CGLIB_RENAMED_METHOD_PATTERN.is_match(name)
}

/// Name of the method a CGLIB renamed method stands in for
///
/// `CGLIB$save$3` yields `save`. The middle segment is matched greedily, so
/// `CGLIB$a$1$2` yields `a$1`.
pub fn cglib_original_name(name: &str) -> Option<&str> {
    CGLIB_RENAMED_METHOD_PATTERN
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
