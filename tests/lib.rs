//! Cross-crate scenario tests live in the `[[test]]` targets of this package.
