/// Maximum characters of user text accepted by `/analyze` before dispatch.
pub const INPUT_TEXT_LIMIT: usize = 10_000;

/// Maximum characters of an assembled analysis prompt.
pub const PROMPT_LIMIT: usize = 30_000;

pub const PROMPT_TRUNCATION_NOTICE: &str = "\n\n[Document truncated due to length limitations]";

/// Caps user text at [`INPUT_TEXT_LIMIT`] characters, appending a notice that
/// records the original length. Returns the text untouched when it fits.
pub fn cap_input_text(text: String) -> String {
    let original_length = text.chars().count();
    if original_length <= INPUT_TEXT_LIMIT {
        return text;
    }

    let mut capped = take_chars(&text, INPUT_TEXT_LIMIT).to_string();
    capped.push_str(&format!(
        "\n\n[Document truncated from {original_length} to {INPUT_TEXT_LIMIT} characters due to length limitations]"
    ));
    capped
}

/// Caps an assembled prompt at [`PROMPT_LIMIT`] characters. No attempt is made
/// to respect sentence or section boundaries.
pub fn cap_prompt(prompt: String) -> String {
    if prompt.chars().count() <= PROMPT_LIMIT {
        return prompt;
    }

    let mut capped = take_chars(&prompt, PROMPT_LIMIT).to_string();
    capped.push_str(PROMPT_TRUNCATION_NOTICE);
    capped
}

/// Prefix of `text` holding at most `limit` characters, cut on a char boundary.
pub fn take_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
