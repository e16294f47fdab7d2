use crate::application::read_models::CardView;
use crate::i18n::Catalog;
use crate::wanted_listing::services::KeyedEntry;
use owo_colors::OwoColorize;

/// Horizontal rule used by the layout shell
const RULE: &str = "────────────────────────────────────────────────────────────";

/// CardFormatter renders the layout shell and record cards as text
///
/// Colors are applied with owo-colors only when enabled, so the plain
/// output stays stable for files and pipes.
pub struct CardFormatter {
    catalog: Catalog,
    color: bool,
}

impl CardFormatter {
    pub fn new(catalog: Catalog, color: bool) -> Self {
        Self { catalog, color }
    }

    /// Formatter without ANSI colors
    pub fn plain(catalog: Catalog) -> Self {
        Self::new(catalog, false)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Header, one block per card and the footer
    pub fn format_page(&self, cards: &[KeyedEntry<CardView>]) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header(cards.len()));

        if cards.is_empty() {
            output.push_str(&self.catalog.empty_list);
            output.push_str("\n\n");
        }

        for entry in cards {
            output.push_str(&self.format_card(entry.item()));
            output.push('\n');
        }

        output.push_str(RULE);
        output.push('\n');
        output.push_str(&self.catalog.footer);
        output.push('\n');
        output
    }

    fn format_header(&self, count: usize) -> String {
        let title = if self.color {
            self.catalog.app_title.bold().blue().to_string()
        } else {
            self.catalog.app_title.clone()
        };

        format!(
            "{}\n{}  ({})\n{}\n\n",
            RULE,
            title,
            self.catalog.record_count(count),
            RULE
        )
    }

    /// One card: title line with tags, then one labelled line per field
    pub fn format_card(&self, card: &CardView) -> String {
        let mut lines = Vec::new();

        let tags: Vec<String> = card.tags.iter().map(|t| format!("[{}]", t)).collect();
        let title = if self.color {
            card.title.bold().to_string()
        } else {
            card.title.clone()
        };
        let tags = tags.join(" ");
        if tags.is_empty() {
            lines.push(format!("┌ {}", title));
        } else if self.color {
            lines.push(format!("┌ {}  {}", title, tags.yellow()));
        } else {
            lines.push(format!("┌ {}  {}", title, tags));
        }

        lines.push(format!("│ {}: {}", self.catalog.published, card.published));

        match &card.image_url {
            Some(url) => lines.push(format!("│ 🖼  {}", url)),
            None => lines.push(format!("│ 🖼  ({})", self.catalog.no_image)),
        }

        if let Some(description) = &card.description {
            lines.push(format!("│ {}", single_line(description)));
        }

        if let Some(warning) = &card.warning_message {
            let text = format!("⚠ {}: {}", self.catalog.warning, single_line(warning));
            if self.color {
                lines.push(format!("│ {}", text.red()));
            } else {
                lines.push(format!("│ {}", text));
            }
        }

        if let Some(url) = &card.details_url {
            let link = if self.color {
                url.underline().to_string()
            } else {
                url.clone()
            };
            lines.push(format!("│ {}: {}", self.catalog.details_button, link));
        }

        lines.push(format!("└ uid: {}", card.uid));

        let mut block = lines.join("\n");
        block.push('\n');
        block
    }

    /// Error panel shown instead of the list
    pub fn format_error(&self, message: &str) -> String {
        if self.color {
            format!("❌ {}", message.red().bold())
        } else {
            format!("❌ {}", message)
        }
    }
}

/// Collapses embedded newlines so a field stays on its card line
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
