//! Line-aligned text chunking for size-bounded translation requests.

/// Default request-size ceiling, in characters.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 4500;

/// Split text into chunks no larger than `max_chunk_size` characters,
/// never breaking a line in the middle.
///
/// Lines are accumulated in order; when appending the next line (plus its
/// newline) would push the accumulator past the ceiling, the accumulator is
/// flushed as a chunk, trimmed of surrounding whitespace. A single line
/// longer than `max_chunk_size` becomes an oversized chunk of its own —
/// the line boundary always wins over the size bound.
pub fn split_into_chunks(text: &str, max_chunk_size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for line in text.split('\n') {
        let line_len = line.chars().count();

        if current_len + line_len + 1 <= max_chunk_size {
            current.push_str(line);
            current.push('\n');
            current_len += line_len + 1;
        } else {
            flush(&mut chunks, &current);
            current = String::from(line);
            current.push('\n');
            current_len = line_len + 1;
        }
    }

    flush(&mut chunks, &current);

    chunks
}

/// Emit the accumulator as a chunk, trimmed; whitespace-only accumulators
/// (including the one left by empty input) produce nothing.
fn flush(chunks: &mut Vec<String>, accumulator: &str) {
    let trimmed = accumulator.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}
