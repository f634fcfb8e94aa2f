//! Pure helpers for slash commands and @-mentions in chat text.
//!
//! Telegram appends `@botname` to commands picked from the menu in group chats
//! (`/convert@fx_bot USD EUR 100`) and users address bots inline (`@fx_bot 100 USD to EUR`).

/// A slash command split into its lowercase name (without `/` and `@bot`) and the remaining arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashCommand<'a> {
    pub name: String,
    pub args: &'a str,
}

fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Byte ranges of every `@bot_username` token in `text`.
///
/// A token must not be glued to a longer username on either side: `@fx_bot_helper` and
/// `me@fx_bot` do not mention `fx_bot`. Matching is ASCII case-insensitive like Telegram usernames.
fn mention_spans(text: &str, bot_username: &str) -> Vec<(usize, usize)> {
    let needle = format!("@{}", bot_username);
    let mut spans = Vec::new();
    if bot_username.is_empty() {
        return spans;
    }
    let mut from = 0;
    while let Some(found) = text[from..].find('@') {
        let start = from + found;
        let end = start + needle.len();
        from = start + 1;
        let Some(candidate) = text.get(start..end) else {
            continue;
        };
        if !candidate.eq_ignore_ascii_case(&needle) {
            continue;
        }
        let glued_before = text[..start].chars().next_back().is_some_and(is_username_char);
        let glued_after = text[end..].chars().next().is_some_and(is_username_char);
        if !glued_before && !glued_after {
            spans.push((start, end));
            from = end;
        }
    }
    spans
}

/// Returns true if `text` mentions the given bot username as a whole `@username` token.
#[inline]
pub fn is_bot_mentioned(text: &str, bot_username: &str) -> bool {
    !mention_spans(text, bot_username).is_empty()
}

/// Removes the bot's `@username` tokens from `text` and trims the result.
/// Longer usernames sharing the prefix are left untouched.
pub fn strip_mention(text: &str, bot_username: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (start, end) in mention_spans(text, bot_username) {
        out.push_str(&text[last..start]);
        last = end;
    }
    out.push_str(&text[last..]);
    out.trim().to_string()
}

/// Splits `/name[@bot] args...` into a [`SlashCommand`].
///
/// Returns `None` when the text is not a command, or when it is addressed to a different bot
/// (only checked when `bot_username` is known).
pub fn split_command<'a>(text: &'a str, bot_username: Option<&str>) -> Option<SlashCommand<'a>> {
    let text = text.trim_start();
    let rest = text.strip_prefix('/')?;
    let (head, args) = match rest.find(char::is_whitespace) {
        Some(i) => (&rest[..i], rest[i..].trim()),
        None => (rest, ""),
    };
    let (name, target) = match head.split_once('@') {
        Some((name, target)) => (name, Some(target)),
        None => (head, None),
    };
    if name.is_empty() {
        return None;
    }
    if let (Some(target), Some(me)) = (target, bot_username) {
        if !target.eq_ignore_ascii_case(me) {
            return None;
        }
    }
    Some(SlashCommand {
        name: name.to_ascii_lowercase(),
        args,
    })
}
