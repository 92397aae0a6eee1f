//! Welcome banner shown before the first prompt.

use console::style;

/// What the banner describes.
pub struct BannerInfo<'a> {
    pub document: &'a str,
    pub chunks: usize,
    pub model: &'a str,
    pub tools: &'a [&'a str],
    pub session_id: &'a str,
}

/// Print the welcome banner.
pub fn print_welcome_banner(info: &BannerInfo<'_>) {
    println!();
    println!("  {}", style("askdoc").cyan().bold());
    println!();
    println!(
        "  {}  {} {}",
        style("Document:").bold(),
        info.document,
        style(format!("({} chunks)", info.chunks)).dim()
    );
    println!("  {}     {}", style("Model:").bold(), style(info.model).dim());
    println!(
        "  {}     {}",
        style("Tools:").bold(),
        style(info.tools.join(", ")).dim()
    );
    println!(
        "  {}   {}",
        style("Session:").bold(),
        style(short_session_id(info.session_id)).dim()
    );
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}

/// First eight characters of a session id.
fn short_session_id(id: &str) -> String {
    id.chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_session_id_truncates_uuid() {
        assert_eq!(short_session_id("0192f0c1-7b2a-7c3d-8e4f-000000000000"), "0192f0c1");
        assert_eq!(short_session_id("abc"), "abc");
    }

    #[test]
    fn test_short_session_id_respects_char_boundaries() {
        assert_eq!(short_session_id("aéééé-x"), "aéééé-x");
        assert_eq!(short_session_id("ééééééééé"), "é".repeat(8));
    }
}
