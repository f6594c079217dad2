use super::*;

use pretty_assertions::assert_eq;
use thiserror::Error;

use crate::Sentinel;

/// A wrapper in the concatenating style: its rendering embeds the cause's
/// text, and it exposes no native own-message.
#[derive(Debug, Error)]
#[error("{msg}: {source}")]
struct Concat {
    msg: &'static str,
    source: ChainError,
}

#[derive(Debug, Error)]
#[error("failed ({source}) while doing foo")]
struct Inline {
    source: Sentinel,
}

#[test]
fn suffix_occurrence_strips_trailing_separator() {
    assert_eq!(own_portion("doing foo: couldn't", "couldn't"), "doing foo");
}

#[test]
fn suffix_occurrence_without_colon() {
    assert_eq!(own_portion("doing foo couldn't", "couldn't"), "doing foo");
}

#[test]
fn middle_occurrence_replaced_with_star() {
    assert_eq!(
        own_portion("failed (couldn't) while doing foo", "couldn't"),
        "failed (*) while doing foo"
    );
}

#[test]
fn cause_not_present_returns_full() {
    assert_eq!(own_portion("doing foo", "unrelated"), "doing foo");
}

#[test]
fn occurrence_at_start_returns_full() {
    assert_eq!(own_portion("couldn't: doing foo", "couldn't"), "couldn't: doing foo");
}

#[test]
fn identical_strings_return_full() {
    assert_eq!(own_portion("couldn't", "couldn't"), "couldn't");
}

#[test]
fn empty_cause_returns_full() {
    assert_eq!(own_portion("doing foo", ""), "doing foo");
}

#[test]
fn empty_full_returns_empty() {
    assert_eq!(own_portion("", "couldn't"), "");
}

#[test]
fn first_occurrence_wins() {
    // "a" first occurs mid-string; the later suffix occurrence is ignored.
    assert_eq!(own_portion("x: a: a", "a"), "x: *: a");
}

#[test]
fn unwrap_message_is_exact_for_chain_nodes() {
    let err = ChainError::wrap(Sentinel("couldn't"), "doing foo");
    assert_eq!(unwrap_message(&err), "doing foo");

    // Exact even when the cause is itself a chain node whose text happens
    // to contain the parent's message.
    let inner = ChainError::new("doing foo");
    let err = ChainError::wrap(inner, "doing foo");
    assert_eq!(unwrap_message(&err), "doing foo");
}

#[test]
fn unwrap_message_without_cause_is_verbatim() {
    let err = ChainError::new("doing foo");
    assert_eq!(unwrap_message(&err), "doing foo");

    assert_eq!(unwrap_message(&Sentinel("couldn't")), "couldn't");
}

#[test]
fn unwrap_message_deduplicates_concatenated_wrappers() {
    let err = Inline {
        source: Sentinel("couldn't"),
    };
    assert_eq!(unwrap_message(&err), "failed (*) while doing foo");
}

#[test]
fn unwrap_message_prefers_native_message_of_cause() {
    // A foreign wrapper around a chain node: the node's message is exact,
    // so no heuristic runs.
    let err = Concat {
        msg: "doing foo",
        source: ChainError::new("couldn't"),
    };
    assert_eq!(unwrap_message(&err), "couldn't");
}
