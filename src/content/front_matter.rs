//! Default front matter for newly created content files.
//!
//! The template is opaque text written verbatim into the new file; the only
//! substitution is the entry title.

/// Template used when the configuration does not provide one.
pub const DEFAULT_TEMPLATE: &str = "---\nlayout: post\ntitle: \"{title}\"\n---\n\n";

/// Render a front matter template for a title.
pub fn render(template: &str, title: &str) -> String {
    template.replace("{title}", title)
}
