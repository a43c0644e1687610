//! Drain a whole run into one ordered list of items.

use crate::iter::SplitIntoList;
use crate::splitter::CommaSplitter;
use crate::stream::try_split_into_list_stream;
use futures::{Stream, TryStreamExt};

/// Split complete text in one call.
///
/// # Examples
/// ```
/// use comma_stream::split_text;
///
/// assert_eq!(split_text(" lion , tiger "), vec!["lion", "tiger"]);
/// ```
pub fn split_text(text: &str) -> Vec<String> {
    let mut seg = CommaSplitter::new();
    let mut items = seg.push_str(text);
    items.extend(seg.finish());
    items
}

/// Drain a fallible fragment iterator and flatten the emitted chunks.
///
/// The first source error is returned and the items collected so far are
/// dropped.
pub fn collect_items<I, S, E>(source: I) -> Result<Vec<String>, E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    let mut items = Vec::new();
    for chunk in SplitIntoList::new(source) {
        items.extend(chunk?);
    }
    Ok(items)
}

/// Async counterpart of [`collect_items`].
pub async fn collect_items_stream<St, T, E>(source: St) -> Result<Vec<String>, E>
where
    St: Stream<Item = Result<T, E>> + Unpin,
    T: AsRef<str>,
{
    try_split_into_list_stream(source).try_concat().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_text() {
        assert_eq!(split_text("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_text(""), vec![""]);
        assert_eq!(split_text(","), vec!["", ""]);
    }

    #[test]
    fn test_collect_items() {
        let items = collect_items(vec![Ok::<_, ()>("red, gre"), Ok("en, blue")]).unwrap();
        assert_eq!(items, vec!["red", "green", "blue"]);
    }

    #[test]
    fn test_collect_items_error() {
        let result = collect_items(vec![Ok("red, "), Err("source closed")]);
        assert_eq!(result, Err("source closed"));
    }

    #[tokio::test]
    async fn test_collect_items_stream() {
        let source = futures::stream::iter(vec![Ok::<_, ()>("1, 2"), Ok(", 3")]);
        let items = collect_items_stream(source).await.unwrap();
        assert_eq!(items, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_collect_items_stream_error() {
        let source = futures::stream::iter(vec![Ok("1, 2"), Err("timeout")]);
        let result = collect_items_stream(source).await;
        assert_eq!(result, Err("timeout"));
    }
}
