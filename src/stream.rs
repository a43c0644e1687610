//! Async mode: split fragments pulled from a [`Stream`].
//!
//! The only suspension point is the request for the next fragment. Every
//! item completed by a fragment is yielded before the source is polled
//! again, so a consumer sees items as soon as their closing comma arrives.

use crate::config::SplitConfig;
use crate::splitter::CommaSplitter;
use futures::stream::{unfold, FusedStream};
use futures::{Stream, StreamExt};
use std::collections::VecDeque;
use std::convert::Infallible;
use tracing::debug;

/// Yield one single-element list per comma-separated item of `input`.
///
/// Errors from `input` are yielded as-is and end the stream without a
/// final flush.
pub fn try_split_into_list_stream<S, T, E>(
    input: S,
) -> impl FusedStream<Item = Result<Vec<String>, E>>
where
    S: Stream<Item = Result<T, E>> + Unpin,
    T: AsRef<str>,
{
    try_split_into_list_stream_with_config(input, SplitConfig::default())
}

/// Like [`try_split_into_list_stream`], honouring a custom [`SplitConfig`].
pub fn try_split_into_list_stream_with_config<S, T, E>(
    input: S,
    config: SplitConfig,
) -> impl FusedStream<Item = Result<Vec<String>, E>>
where
    S: Stream<Item = Result<T, E>> + Unpin,
    T: AsRef<str>,
{
    let splitter = Some(CommaSplitter::with_config(&config));
    let pending: VecDeque<String> = VecDeque::new();

    unfold(
        (input, splitter, pending, config),
        |(mut input, mut splitter, mut pending, config)| async move {
            loop {
                if let Some(item) = pending.pop_front() {
                    return Some((Ok(vec![item]), (input, splitter, pending, config)));
                }
                let Some(seg) = splitter.as_mut() else {
                    return None;
                };
                if config.is_cancelled() {
                    debug!(buffered = seg.buffered().len(), "split cancelled");
                    return None;
                }
                match input.next().await {
                    Some(Ok(fragment)) => pending.extend(seg.push_str(fragment.as_ref())),
                    Some(Err(e)) => {
                        debug!("fragment source failed");
                        return Some((Err(e), (input, None, pending, config)));
                    }
                    None => {
                        return splitter
                            .take()
                            .and_then(CommaSplitter::finish)
                            .map(|item| (Ok(vec![item]), (input, None, pending, config)));
                    }
                }
            }
        },
    )
    .fuse()
}

/// Split an infallible stream of fragments.
///
/// This adapts [`try_split_into_list_stream`] for errorless input.
pub fn split_into_list_stream<S, T>(input: S) -> impl FusedStream<Item = Vec<String>>
where
    S: Stream<Item = T> + Unpin,
    T: AsRef<str>,
{
    try_split_into_list_stream(input.map(Ok::<T, Infallible>))
        .filter_map(|r| async move { r.ok() })
}
