pub const MAX_CHUNK_CHARS: usize = 500;
pub const MAX_CHUNKS: usize = 3;

/// A period must sit further than this into the window to become the cut point.
const MIN_CUT_OFFSET: usize = 200;

/// Splits a prefix of `text` into at most `max_chunks` trimmed chunks of at
/// most `max_chunk_chars` characters, cutting after the last period in the
/// window when it is far enough in. Text past the last chunk is dropped.
pub fn split_into_chunks(text: &str, max_chunk_chars: usize, max_chunks: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut chunks = Vec::new();
    let mut start = 0;

    // every window counts toward the cap, blank ones included
    while chunks.len() < max_chunks && start < len {
        let mut end = (start + max_chunk_chars.max(1)).min(len);
        if let Some(period) = chars[start..end].iter().rposition(|&c| c == '.') {
            if period > MIN_CUT_OFFSET {
                end = start + period + 1;
            }
        }
        let chunk: String = chars[start..end].iter().collect();
        chunks.push(chunk.trim().to_string());
        start = end;
    }
    chunks
}
