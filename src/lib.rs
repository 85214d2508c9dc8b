//! Searchlight — search term extraction & result highlighting.
//!
//! Takes the raw query a user typed in the search syntax (boolean
//! connectives, quoted phrases, proximity operators, exclusions, range
//! restrictions), recovers the words and phrases they were actually
//! looking for, and marks every occurrence inside a rendered result tree.
//! A second mode marks results by opaque tag identifier instead of text.
//! Malformed input degrades to fewer terms; nothing here ever panics on a
//! query.

pub mod tree;
pub mod query;
pub mod highlight;
pub mod paging;
pub mod engine;
