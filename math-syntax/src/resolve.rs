//! Post-pass over accepted inline math events.
//!
//! Strips one layer of edge whitespace into padding when there is real
//! content, then merges adjacent data and spaces between line endings. A run
//! holding only spaces stays whitespace, so a second pass never mistakes it
//! for content.

use scan_framework::{Event, Phase, Span, TokenKind};

/// Events before the first interior span: container, fence enter, fence exit.
const HEAD: usize = 3;
/// Events after the last interior span: fence enter, fence exit, container.
const TAIL: usize = 3;

/// Normalizes the raw events of one `\( … \)` run.
///
/// Pure and idempotent. Input that does not have the shape the inline
/// recognizer produces is returned unchanged.
pub fn resolve_inline(events: Vec<Event>) -> Vec<Event> {
    let Some(mut spans) = interior_spans(&events) else {
        log::warn!("resolve_inline: unexpected event shape, left unchanged");
        return events;
    };
    if spans.is_empty() {
        return events;
    }

    let (head, tail) = pad_edges(&mut spans);
    let merged = merge_runs(&spans, head, tail);

    let mut resolved = Vec::with_capacity(HEAD + merged.len() * 2 + TAIL);
    resolved.extend_from_slice(&events[..HEAD]);
    for span in merged {
        resolved.push(Event::enter(span));
        resolved.push(Event::exit(span));
    }
    resolved.extend_from_slice(&events[events.len() - TAIL..]);
    resolved
}

/// Returns the flat interior spans, or `None` if `events` is not a container
/// holding an opening fence, leaf spans and a closing fence.
fn interior_spans(events: &[Event]) -> Option<Vec<Span>> {
    if events.len() < HEAD + TAIL {
        return None;
    }
    let kinds = |range: &[Event]| range.iter().map(Event::kind).collect::<Vec<_>>();
    let fences = [
        TokenKind::MathContainer,
        TokenKind::FenceSequence,
        TokenKind::FenceSequence,
    ];
    if kinds(&events[..HEAD]) != fences {
        return None;
    }
    let mut closing = kinds(&events[events.len() - TAIL..]);
    closing.reverse();
    if closing != fences {
        return None;
    }

    let interior = &events[HEAD..events.len() - TAIL];
    if interior.len() % 2 != 0 {
        return None;
    }
    interior
        .chunks(2)
        .map(|pair| match pair {
            [enter, exit]
                if enter.phase == Phase::Enter
                    && exit.phase == Phase::Exit
                    && enter.span == exit.span
                    && !enter.span.kind.is_fence() =>
            {
                Some(enter.span)
            }
            _ => None,
        })
        .collect()
}

/// Pass 1: turns matching edge whitespace into padding.
///
/// Returns the window `[head, tail)` left for merging.
fn pad_edges(spans: &mut [Span]) -> (usize, usize) {
    let last = spans.len() - 1;

    // Already resolved: never strip a second layer.
    if spans[0].kind == TokenKind::TextPadding || spans[last].kind == TokenKind::TextPadding {
        let head = usize::from(spans[0].kind == TokenKind::TextPadding);
        let tail = if last >= head && spans[last].kind == TokenKind::TextPadding {
            last
        } else {
            last + 1
        };
        return (head, tail.max(head));
    }

    let is_gap = |span: &Span| matches!(span.kind, TokenKind::Whitespace | TokenKind::LineEnding);
    if last >= 2
        && is_gap(&spans[0])
        && is_gap(&spans[last])
        && spans[1..last]
            .iter()
            .any(|span| span.kind == TokenKind::TextData)
    {
        spans[0].kind = TokenKind::TextPadding;
        spans[last].kind = TokenKind::TextPadding;
        return (1, last);
    }

    (0, spans.len())
}

/// Pass 2: merges every run of non-line-ending spans in `[head, tail)` into
/// one span. The run is data unless every span in it is whitespace. Spans
/// outside the window are copied as they are.
fn merge_runs(spans: &[Span], head: usize, tail: usize) -> Vec<Span> {
    let mut merged = Vec::with_capacity(spans.len());
    merged.extend_from_slice(&spans[..head]);

    let mut run: Option<Span> = None;
    for span in &spans[head..tail] {
        if span.kind == TokenKind::LineEnding {
            merged.extend(run.take());
            merged.push(*span);
            continue;
        }
        let kind = match span.kind {
            TokenKind::Whitespace => TokenKind::Whitespace,
            _ => TokenKind::TextData,
        };
        match run.as_mut() {
            Some(open) => {
                open.end = span.end;
                if kind == TokenKind::TextData {
                    open.kind = kind;
                }
            }
            None => run = Some(Span { kind, ..*span }),
        }
    }
    merged.extend(run);

    merged.extend_from_slice(&spans[tail..]);
    merged
}
