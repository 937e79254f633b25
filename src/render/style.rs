use lazy_static::lazy_static;
use regex::Regex;

/// Font stack applied to every styled element.
const FONT_STACK: &str = "font-family: ui-sans-serif,system-ui,-apple-system,BlinkMacSystemFont,Segoe UI,Roboto,Helvetica Neue,Arial,Noto Sans,sans-serif,Apple Color Emoji,Segoe UI Emoji,Segoe UI Symbol,Noto Color Emoji;";

// Single-quoted family names: these strings land inside double-quoted
// style attributes.
const CODE_FONT_STACK: &str = "font-family: ui-monospace,'Cascadia Mono','Segoe UI Mono','Liberation Mono',Menlo,Monaco,Consolas,monospace;";

pub(crate) const STACK_OVERFLOW_LOGO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" style="margin-right: 4px;" viewBox="0 0 32 32"><path d="M28.16 32H2.475V20.58H5.32v8.575h19.956V20.58h2.884z" fill="#bcbbbb"/><path d="M8.477 19.8l13.993 2.923.585-2.806-13.993-2.923zm1.832-6.704l12.94 6.04 1.208-2.572-12.94-6.08zm3.586-6.353l10.99 9.12 1.832-2.183-10.99-9.12zM20.99 0l-2.3 1.715 8.536 11.46 2.3-1.715zM8.166 26.27H22.43v-2.845H8.166v2.845z" fill="#f48024"/></svg>"##;

pub(crate) const CHECK_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" fill="currentColor" class="bi bi-check-circle-fill" viewBox="0 0 16 16"><path d="M16 8A8 8 0 1 1 0 8a8 8 0 0 1 16 0zM6.97 11.03a.75.75 0 0 0 1.08-.02L10.9 7.5a.75.75 0 0 0-1.08-1.04L7.5 9.42 6.14 8.04a.75.75 0 1 0-1.08 1.04l1.91 1.95z"/></svg>"#;

/// One HTML element with the shared font stack plus `styles` inline.
pub(crate) fn element(tag: &str, styles: &str, inner: &str) -> String {
    if styles.is_empty() {
        return format!("<{tag}>{inner}</{tag}>");
    }
    format!(r#"<{tag} style="{FONT_STACK} {styles}">{inner}</{tag}>"#)
}

/// Outline badge rendering "label: value".
pub(crate) fn outline_badge(label: &str, value: &str) -> String {
    element(
        "span",
        "display: inline-flex; align-items: center; justify-content: center; border: 2px solid #ddd; color: #555; padding: 6px 12px; border-radius: 12px; font-size: 0.9em; font-weight: bold; background-color: transparent; transition: background-color 0.3s ease, color 0.3s ease;",
        &format!("{label}: {value}"),
    )
}

/// Outline link button with a leading icon, opening in a new tab.
pub(crate) fn link_button(href: &str, text: &str, icon: &str, extra_styles: &str) -> String {
    format!(
        r#"<a href="{href}" target="_blank" style="{FONT_STACK} display: inline-flex; align-items: center; padding: 8px 12px; color: #2563eb; text-decoration: none; border: 1px solid #2563eb; border-radius: 6px; background-color: transparent; font-size: .875rem; line-height: 1.25rem; font-weight: bold; {extra_styles}">{icon} {text}</a>"#
    )
}

lazy_static! {
    static ref PRE_OPEN: Regex =
        Regex::new(r"(?i)<pre(\s[^>]*)?>").expect("PRE_OPEN regex is valid");
    static ref CODE_OPEN: Regex =
        Regex::new(r"(?i)<code(\s[^>]*)?>").expect("CODE_OPEN regex is valid");
    static ref ANCHOR_SPAN: Regex =
        Regex::new(r"(?is)<a(\s[^>]*)?>.*?</a>").expect("ANCHOR_SPAN regex is valid");
}

/// Re-style `<pre>` and `<code>` tags in an answer body with inline styles.
/// `<code>` inside a link keeps the link's color and text decoration.
pub(crate) fn style_code_blocks(html: &str) -> String {
    let pre_style = format!(
        "{CODE_FONT_STACK} background-color: #f6f6f6; padding: 12px; border-radius: 6px; border: 1px solid #ddd; overflow-x: auto; line-height: 1.5; max-width: 100%;"
    );
    let code_style = format!(
        "{CODE_FONT_STACK} background-color: #f6f6f6; color: #0c0d0e; padding: 2px 4px; border-radius: 4px; font-size: 14px; font-weight: 400;"
    );
    let linked_code_style = format!(
        "{CODE_FONT_STACK} background-color: #f6f6f6; padding: 2px 4px; border-radius: 4px; font-size: 14px; font-weight: 400; text-decoration: none;"
    );

    // Anchor spans are located on the untouched input, so offsets from
    // CODE_OPEN matches over the same input stay comparable.
    let anchors: Vec<(usize, usize)> = ANCHOR_SPAN
        .find_iter(html)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut out = String::with_capacity(html.len());
    let mut last = 0;
    for caps in CODE_OPEN.captures_iter(html) {
        let Some(whole) = caps.get(0) else { continue };
        let attrs = caps.get(1).map_or("", |m| m.as_str());
        let inside_link = anchors
            .iter()
            .any(|&(start, end)| start < whole.start() && whole.start() < end);
        let style = if inside_link { &linked_code_style } else { &code_style };

        out.push_str(&html[last..whole.start()]);
        out.push_str(&format!(r#"<code{attrs} style="{style}">"#));
        last = whole.end();
    }
    out.push_str(&html[last..]);

    PRE_OPEN
        .replace_all(&out, |caps: &regex::Captures| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            format!(r#"<pre{attrs} style="{pre_style}">"#)
        })
        .into_owned()
}
