//! Plain-text versions of the author and article cards.

use std::fmt::Write as _;

use byline_shared::{Author, CardMode, CardView};

/// Separator printed between cards.
pub const RULE: &str = "----------------------------------------";

/// Name, birthdate and bio, plus the latest article once enriched.
pub fn author_card(author: &Author) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", author.name, author.id);
    let _ = writeln!(out, "  Birthdate: {}", author.display_birthdate());
    let _ = writeln!(out, "  Bio: {}", author.display_bio());
    if let Some(article) = &author.last_article {
        let _ = writeln!(out, "  Latest: {}", article.title);
    }
    if let Some(count) = author.article_count {
        let _ = writeln!(out, "  Articles: {count}");
    }
    out
}

/// A compact or expanded article card.
pub fn article_card(card: &CardView) -> String {
    let article = card.article();
    let mut out = String::new();
    match card.mode() {
        CardMode::Compact => {
            let _ = writeln!(out, "{} [{}]", article.title, article.id);
            let _ = writeln!(out, "  {}", card.description());
            let _ = writeln!(out, "  {}", card.date_line());
        },
        CardMode::Expanded => {
            let _ = writeln!(out, "{}", article.company);
            let _ = writeln!(out, "{}", article.title);
            let _ = writeln!(out, "{}", card.date_line());
            if !card.author_name().is_empty() {
                let _ = writeln!(out, "by {}", card.author_name());
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", card.description());
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", article.content);
        },
    }
    out
}

#[cfg(test)]
mod tests {
    use byline_shared::{Article, Author, CardMode, CardView};

    use super::{article_card, author_card};

    fn article() -> Article {
        Article {
            id: "3".to_string(),
            title: "Rust in the browser".to_string(),
            description: "d".repeat(120),
            content: "Full body".to_string(),
            image: String::new(),
            company: "ACME".to_string(),
            published_at: Some("2023-03-05T10:07:00Z".to_string()),
            user_id: "1".to_string(),
        }
    }

    fn author() -> Author {
        Author {
            id: "1".to_string(),
            name: "Ada".to_string(),
            avatar: "https://example.com/a.png".to_string(),
            birthdate: "1990-07-15T00:00:00Z".to_string(),
            bio: "b".repeat(60),
            last_article: None,
            article_count: None,
        }
    }

    #[test]
    fn compact_card_truncates_description_and_formats_date() {
        let text = article_card(&CardView::new(article()));
        assert!(text.starts_with("Rust in the browser [3]\n"));
        assert!(text.contains(&format!("  {}...\n", "d".repeat(100))));
        assert!(text.contains("5 de mar. de 2023 • 07 min read"));
        assert!(!text.contains("Full body"));
    }

    #[test]
    fn expanded_card_shows_company_content_and_author() {
        let card = CardView::new(article())
            .with_mode(CardMode::Expanded)
            .with_author(Some(author()));
        let text = article_card(&card);
        assert!(text.starts_with("ACME\n"));
        assert!(text.contains("by Ada\n"));
        assert!(text.contains(&"d".repeat(120)));
        assert!(text.contains("Full body"));
    }

    #[test]
    fn expanded_card_without_author_has_no_byline() {
        let card = CardView::new(article()).with_mode(CardMode::Expanded);
        assert!(!article_card(&card).contains("by "));
    }

    #[test]
    fn author_card_truncates_bio_and_lists_latest_article() {
        let mut author = author();
        author.last_article = Some(article());
        author.article_count = Some(4);
        let text = author_card(&author);
        assert!(text.contains(&format!("  Bio: {}...\n", "b".repeat(50))));
        assert!(text.contains("  Latest: Rust in the browser\n"));
        assert!(text.contains("  Articles: 4\n"));
    }
}
