use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

/// A link as written in a note, before resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLink {
    /// `[[target]]`, `[[target|alias]]`, `[[target#heading]]`, `![[target]]`
    Wiki(String),
    /// `[text](target)` with a local, fragment-free target
    Markdown(String),
}

static LINK_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Wiki links and markdown links in a single pattern so matches come back
/// in document order.
fn link_regex() -> Option<&'static Regex> {
    LINK_RE
        .get_or_init(|| {
            match Regex::new(
                r#"!?\[\[(?P<wiki>[^\[\]]+)\]\]|!?\[[^\[\]]*\]\((?:<(?P<angle>[^>]+)>|(?P<md>[^()\s]+))(?:\s+"[^"]*")?\)"#,
            ) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!(error = %e, "Failed to compile link regex");
                    None
                }
            }
        })
        .as_ref()
}

/// Extract every link of a note body in the order it appears.
///
/// Links inside fenced code blocks and inline code spans are ignored, as
/// are external URLs and pure anchors.
pub fn extract_links(content: &str) -> Vec<RawLink> {
    let Some(re) = link_regex() else {
        return Vec::new();
    };

    let masked = mask_code(content);
    let mut links = Vec::new();

    for cap in re.captures_iter(&masked) {
        if let Some(wiki) = cap.name("wiki") {
            if let Some(target) = wiki_target(wiki.as_str()) {
                links.push(RawLink::Wiki(target));
            }
        } else if let Some(target) = cap.name("angle").or_else(|| cap.name("md")) {
            if let Some(target) = markdown_target(target.as_str()) {
                links.push(RawLink::Markdown(target));
            }
        }
    }

    links
}

/// Strip alias and heading/block parts: `Note#Heading|Label` -> `Note`
fn wiki_target(inner: &str) -> Option<String> {
    let without_alias = inner.split('|').next().unwrap_or_default();
    let target = without_alias.split('#').next().unwrap_or_default().trim();
    (!target.is_empty()).then(|| target.to_string())
}

fn markdown_target(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.starts_with('#') || raw.contains("://") || raw.starts_with("mailto:") {
        return None;
    }
    let path = raw.split('#').next().unwrap_or_default();
    let decoded = percent_decode(path);
    let decoded = decoded.trim();
    (!decoded.is_empty()).then(|| decoded.to_string())
}

/// Decode `%HH` escapes, leaving malformed escapes untouched
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(value) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(value);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Blank out fenced code blocks and inline code spans, keeping line breaks
fn mask_code(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut fence: Option<(char, usize)> = None;

    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~');
        let run = marker.map_or(0, |m| trimmed.chars().take_while(|c| *c == m).count());

        match (fence, marker) {
            (None, Some(m)) if run >= 3 => {
                fence = Some((m, run));
                blank(line, &mut out);
            }
            (Some((open, len)), Some(m)) if m == open && run >= len => {
                fence = None;
                blank(line, &mut out);
            }
            (Some(_), _) => blank(line, &mut out),
            (None, _) => mask_inline_code(line, &mut out),
        }
    }

    out
}

fn blank(line: &str, out: &mut String) {
    out.extend(line.chars().map(|c| if c == '\n' { '\n' } else { ' ' }));
}

fn mask_inline_code(line: &str, out: &mut String) {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '`' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let run = backtick_run(&chars[i..]);
        match closing_run(&chars, i + run, run) {
            Some(end) => {
                out.extend(chars[i..end].iter().map(|_| ' '));
                i = end;
            }
            None => {
                out.push_str(&"`".repeat(run));
                i += run;
            }
        }
    }
}

fn backtick_run(chars: &[char]) -> usize {
    chars.iter().take_while(|c| **c == '`').count()
}

/// Index just past the next backtick run of exactly `len`
fn closing_run(chars: &[char], from: usize, len: usize) -> Option<usize> {
    let mut j = from;
    while j < chars.len() {
        if chars[j] == '`' {
            let run = backtick_run(&chars[j..]);
            if run == len {
                return Some(j + run);
            }
            j += run;
        } else {
            j += 1;
        }
    }
    None
}
