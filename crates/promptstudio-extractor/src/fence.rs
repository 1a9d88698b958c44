//! Locate the first fenced block in reviewer output

/// Triple-backtick fence marker
pub const FENCE: &str = "```";

/// The first fenced block of a text, borrowed from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    /// Language tag from the opening line (`markdown`, `text`, ...), if any
    pub tag: Option<&'a str>,

    /// Everything between the tag line (or opening fence) and the closing
    /// fence, untrimmed
    pub content: &'a str,

    /// Whether a closing fence was found
    pub terminated: bool,
}

/// Find the first fenced block in `text`
///
/// Only the first opening fence and the next fence after it are considered;
/// anything after the closing fence is ignored. A missing closing fence makes
/// the rest of the text the block's content.
///
/// The opening line counts as a language tag only when, trimmed, it is a
/// non-empty run of ASCII letters and a newline follows it.
pub fn first_fenced_block(text: &str) -> Option<FencedBlock<'_>> {
    let open = text.find(FENCE)?;
    let mut body = &text[open + FENCE.len()..];
    let mut tag = None;

    if let Some(newline) = body.find('\n') {
        let first_line = body[..newline].trim();
        if is_language_tag(first_line) {
            tag = Some(first_line);
            body = &body[newline + 1..];
        }
    }

    let block = match body.find(FENCE) {
        Some(close) => FencedBlock {
            tag,
            content: &body[..close],
            terminated: true,
        },
        None => FencedBlock {
            tag,
            content: body,
            terminated: false,
        },
    };
    Some(block)
}

fn is_language_tag(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_alphabetic())
}
