//! Blocking mode: split fragments pulled from an ordinary iterator.

use crate::config::SplitConfig;
use crate::splitter::CommaSplitter;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::iter::FusedIterator;
use tracing::debug;

/// Iterator adapter yielding one single-element list per comma-separated item.
///
/// Fragments are pulled from the source only when no completed item is
/// pending. A source error is yielded in place and ends the run without
/// flushing the buffer.
#[derive(Debug)]
pub struct SplitIntoList<I> {
    source: I,
    splitter: Option<CommaSplitter>,
    pending: VecDeque<String>,
    config: SplitConfig,
}

impl<I> SplitIntoList<I> {
    /// Wrap a fallible fragment source.
    pub fn new<T>(source: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self::with_config(source, SplitConfig::default())
    }

    /// Wrap a fallible fragment source with a custom [`SplitConfig`].
    pub fn with_config<T>(source: T, config: SplitConfig) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            source: source.into_iter(),
            splitter: Some(CommaSplitter::with_config(&config)),
            pending: VecDeque::new(),
            config,
        }
    }
}

impl<I, S, E> Iterator for SplitIntoList<I>
where
    I: Iterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    type Item = Result<Vec<String>, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.pending.pop_front() {
                return Some(Ok(vec![item]));
            }
            let splitter = self.splitter.as_mut()?;
            if self.config.is_cancelled() {
                debug!(buffered = splitter.buffered().len(), "split cancelled");
                self.splitter = None;
                return None;
            }
            match self.source.next() {
                Some(Ok(fragment)) => self.pending.extend(splitter.push_str(fragment.as_ref())),
                Some(Err(e)) => {
                    debug!("fragment source failed");
                    self.splitter = None;
                    return Some(Err(e));
                }
                None => {
                    let last = self.splitter.take().and_then(CommaSplitter::finish);
                    return last.map(|item| Ok(vec![item]));
                }
            }
        }
    }
}

impl<I, S, E> FusedIterator for SplitIntoList<I>
where
    I: Iterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
}

/// Split an infallible fragment source.
///
/// # Examples
/// ```
/// use comma_stream::split_into_list;
///
/// let chunks: Vec<Vec<String>> = split_into_list(["lion, ti", "ger, bear"]).collect();
/// assert_eq!(chunks, vec![vec!["lion"], vec!["tiger"], vec!["bear"]]);
/// ```
pub fn split_into_list<T, S>(source: T) -> impl Iterator<Item = Vec<String>>
where
    T: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SplitIntoList::new(source.into_iter().map(Ok::<S, Infallible>)).filter_map(Result::ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    #[test]
    fn test_eager_emission() {
        let mut chunks = split_into_list(["a,", "b,c", ",d"]);
        assert_eq!(chunks.next(), Some(vec!["a".to_string()]));
        assert_eq!(chunks.next(), Some(vec!["b".to_string()]));
        assert_eq!(chunks.next(), Some(vec!["c".to_string()]));
        assert_eq!(chunks.next(), Some(vec!["d".to_string()]));
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn test_source_pulled_lazily() {
        let mut pulled = 0;
        let source = ["a,b,", "c"].into_iter().inspect(|_| pulled += 1);
        let mut chunks = split_into_list(source);
        assert_eq!(chunks.next(), Some(vec!["a".to_string()]));
        assert_eq!(chunks.next(), Some(vec!["b".to_string()]));
        drop(chunks);
        assert_eq!(pulled, 1);
    }

    #[test]
    fn test_error_ends_run_without_flush() {
        let source = vec![Ok("x, y"), Err("broken"), Ok("z")];
        let out: Vec<_> = SplitIntoList::new(source).collect();
        assert_eq!(out, vec![Ok(vec!["x".to_string()]), Err("broken")]);
    }

    #[test]
    fn test_fused_after_end() {
        let mut chunks = SplitIntoList::new(vec![Ok::<_, ()>("only")]);
        assert_eq!(chunks.next(), Some(Ok(vec!["only".to_string()])));
        assert_eq!(chunks.next(), None);
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn test_cancellation_stops_before_next_fragment() {
        let cancel = Arc::new(AtomicBool::new(false));
        let config = SplitConfig::builder()
            .with_cancellation(cancel.clone())
            .build();
        let source = vec![Ok::<_, ()>("a,b,tail"), Ok("more")];
        let mut chunks = SplitIntoList::with_config(source, config);

        assert_eq!(chunks.next(), Some(Ok(vec!["a".to_string()])));
        cancel.store(true, Ordering::Relaxed);
        // Already drained from the first fragment.
        assert_eq!(chunks.next(), Some(Ok(vec!["b".to_string()])));
        // "tail" is never flushed.
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn test_skip_empty_config() {
        let config = SplitConfig::builder().with_skip_empty(true).build();
        let source = vec![Ok::<_, ()>(",a,,"), Ok(" ")];
        let out: Vec<_> = SplitIntoList::with_config(source, config)
            .map(|chunk| chunk.unwrap())
            .collect();
        assert_eq!(out, vec![vec!["a".to_string()]]);
    }
}
