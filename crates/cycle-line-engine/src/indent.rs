//! # Indentation
//!
//! Tab/space normalization used to decide whether two lines sit at the
//! same indentation level.

/// Width of a tab when no other size is given.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Rewrites mixed tab/space indentation as spaces only.
///
/// Every tab becomes `tab_size` spaces; everything else passes through.
/// The result is only meant for comparing two indentations, never for
/// writing back into a line.
pub fn normalize(indentation: &str, tab_size: usize) -> String {
    indentation.replace('\t', &" ".repeat(tab_size))
}

/// Whether two indentation runs are equivalent once tabs are expanded.
pub fn same_indentation(a: &str, b: &str) -> bool {
    normalize(a, DEFAULT_TAB_SIZE) == normalize(b, DEFAULT_TAB_SIZE)
}
