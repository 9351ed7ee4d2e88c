//! ANSI renderer for highlight spans
//!
//! Spans are applied in the order given. Where spans overlap, the span
//! registered last decides the color of the shared characters.

use colored::Colorize;

use super::palette::{Rgb, FOREGROUND};
use super::spans::HighlightSpan;

/// Resolve the background color of every character
fn paint_layers(char_count: usize, spans: &[HighlightSpan]) -> Vec<Option<Rgb>> {
    let mut layers = vec![None; char_count];
    for span in spans {
        let end = span.end.min(char_count);
        for slot in layers.iter_mut().take(end).skip(span.start) {
            *slot = Some(span.color);
        }
    }
    layers
}

fn paint(segment: &str, background: Option<Rgb>) -> String {
    match background {
        Some(bg) => segment
            .truecolor(FOREGROUND.r, FOREGROUND.g, FOREGROUND.b)
            .on_truecolor(bg.r, bg.g, bg.b)
            .to_string(),
        None => segment.to_string(),
    }
}

/// Render `text` with `spans` as ANSI escapes.
///
/// With `enabled` false the text is returned unchanged.
pub fn render_ansi(text: &str, spans: &[HighlightSpan], enabled: bool) -> String {
    if !enabled || spans.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let layers = paint_layers(chars.len(), spans);

    let mut output = String::with_capacity(text.len());
    let mut segment = String::new();
    let mut current: Option<Rgb> = layers.first().copied().flatten();

    for (c, layer) in chars.iter().zip(layers.iter()) {
        if *layer != current {
            output.push_str(&paint(&segment, current));
            segment.clear();
            current = *layer;
        }
        segment.push(*c);
    }
    output.push_str(&paint(&segment, current));

    output
}
