use crate::encoders::algorithms::chunked::{SYMBOLS_PER_CHUNK, decode_chunk};
use crate::encoders::algorithms::StreamError;
use futures::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll, ready};
use tokio::io::AsyncRead;

use super::{poll_fill, release};

pin_project! {
    /// Lazily decodes Base32 symbols pulled from an async source into bytes.
    ///
    /// Each item is the decoding of one 8-symbol chunk (the last one may be
    /// shorter). An invalid symbol, or a lone symbol left at the end of the
    /// source, is yielded as an error and ends the stream; items yielded
    /// before it stay valid.
    ///
    /// Source lifetime follows the same rules as [`super::EncodeStream`].
    pub struct DecodeStream<R> {
        #[pin]
        source: Option<R>,
        window: [u8; SYMBOLS_PER_CHUNK],
        filled: usize,
        position: usize,
        finished: bool,
        close_on_end: bool,
    }
}

impl<R: AsyncRead> DecodeStream<R> {
    /// Creates a decoding stream over `source` that closes it at the end.
    pub fn new(source: R) -> Self {
        DecodeStream {
            source: Some(source),
            window: [0; SYMBOLS_PER_CHUNK],
            filled: 0,
            position: 0,
            finished: false,
            close_on_end: true,
        }
    }

    /// Sets whether the source is closed when the stream ends.
    pub fn close_on_end(mut self, close: bool) -> Self {
        self.close_on_end = close;
        self
    }
}

impl<R> DecodeStream<R> {
    /// Number of symbols decoded so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn get_ref(&self) -> Option<&R> {
        self.source.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut R> {
        self.source.as_mut()
    }

    /// Consumes the stream, returning the source if it was not closed.
    pub fn into_inner(self) -> Option<R> {
        self.source
    }

    /// Ends the stream early. Symbols pulled into a partial chunk are dropped.
    pub fn close(self: Pin<&mut Self>) {
        let this = self.project();
        if !*this.finished {
            release(this.source, this.finished, *this.close_on_end, *this.position);
        }
    }
}

impl<R: AsyncRead> Stream for DecodeStream<R> {
    type Item = Result<Vec<u8>, StreamError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }
        let Some(source) = this.source.as_mut().as_pin_mut() else {
            *this.finished = true;
            return Poll::Ready(None);
        };

        let at_end = match ready!(poll_fill(source, cx, this.window, this.filled)) {
            Ok(at_end) => at_end,
            Err(e) => {
                tracing::debug!(position = *this.position, error = %e, "source read failed");
                release(this.source, this.finished, *this.close_on_end, *this.position);
                return Poll::Ready(Some(Err(StreamError::Io(e))));
            }
        };

        let len = *this.filled;
        if len == 0 {
            release(this.source, this.finished, *this.close_on_end, *this.position);
            return Poll::Ready(None);
        }

        let mut bytes = Vec::with_capacity(len * 5 / 8);
        let decoded = decode_chunk(&this.window[..len], *this.position, &mut bytes);

        *this.filled = 0;

        if let Err(e) = decoded {
            tracing::debug!(position = e.position(), "symbol stream rejected");
            release(this.source, this.finished, *this.close_on_end, *this.position);
            return Poll::Ready(Some(Err(StreamError::Decode(e))));
        }

        tracing::trace!(position = *this.position, len, "decoded chunk");
        *this.position += len;

        // A short chunk is only ever produced at end of input
        if at_end {
            release(this.source, this.finished, *this.close_on_end, *this.position);
        }

        Poll::Ready(Some(Ok(bytes)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished { (0, Some(0)) } else { (0, None) }
    }
}
