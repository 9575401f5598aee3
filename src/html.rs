// 🌐 HTML output - view models → markup, plus the full single page
// Every text and attribute value goes through `escape`

use crate::journal::Journal;
use crate::models::Category;
use crate::mutators::{ItemForm, ProgressForm};
use crate::render::{GalleryView, ProgressListView, TableView, TotalsView};
use crate::view::{Tab, DEFAULT_HERO_SRC};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #111; color: #eee; }
header { padding: 16px 24px; background: #1b1b1b; }
#tabs { display: flex; gap: 8px; padding: 8px 24px; background: #222; }
#tabs .tab { color: #aaa; text-decoration: none; padding: 6px 12px; border-radius: 4px; }
#tabs .tab.active { background: #c0392b; color: #fff; }
.tab-content { display: none; padding: 24px; }
.tab-content.active { display: block; }
.notice { margin: 16px 24px; padding: 12px; background: #7f1d1d; border-radius: 4px; }
#hero-image { max-width: 100%; border-radius: 6px; }
.progress-card { display: flex; gap: 16px; margin-bottom: 16px; background: #1b1b1b; padding: 12px; border-radius: 6px; }
.progress-card img { width: 220px; object-fit: cover; border-radius: 4px; }
.progress-meta { color: #999; font-size: 0.9em; }
table { border-collapse: collapse; width: 100%; }
td, th { border-bottom: 1px solid #333; padding: 6px 8px; text-align: left; }
#gallery-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px; }
#gallery-grid img { width: 100%; border-radius: 4px; }
.overall-total { margin-top: 6px; font-weight: bold; }
"#;

/// Escape text for use in element content and quoted attribute values
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// REGION FRAGMENTS
// ============================================================================

pub fn progress_list_html(view: &ProgressListView) -> String {
    let cards = match view {
        ProgressListView::Placeholder { message } => {
            return format!("<p>{}</p>", escape(message));
        }
        ProgressListView::Cards { cards } => cards,
    };

    let mut out = String::new();
    for card in cards {
        out.push_str("<div class=\"progress-card\">");
        if let Some(image) = &card.image {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape(&image.src),
                escape(&image.alt)
            ));
        }
        out.push_str(&format!(
            "<div class=\"progress-info\"><h4>{}</h4><div class=\"progress-meta\">{}</div><p>{}</p></div>",
            escape(&card.title),
            escape(&card.date_line),
            escape(&card.description)
        ));
        out.push_str("</div>");
    }
    out
}

/// Rows for a `<tbody>`
pub fn table_body_html(view: &TableView) -> String {
    match view {
        TableView::Placeholder { message, colspan } => {
            format!("<tr><td colspan=\"{}\">{}</td></tr>", colspan, escape(message))
        }
        TableView::Rows { rows } => rows
            .iter()
            .map(|row| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&row.category),
                    escape(&row.item),
                    escape(&row.cost)
                )
            })
            .collect(),
    }
}

pub fn totals_html(view: &TotalsView) -> String {
    let lines = view.lines();
    if view.is_empty() {
        return escape(&lines[0]);
    }

    let last = lines.len() - 1;
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == last {
                format!("<p class=\"overall-total\">{}</p>", escape(line))
            } else {
                format!("<p>{}</p>", escape(line))
            }
        })
        .collect()
}

pub fn gallery_html(view: &GalleryView) -> String {
    match view {
        GalleryView::Placeholder { message } => format!("<p>{}</p>", escape(message)),
        GalleryView::Images { images } => images
            .iter()
            .map(|img| format!("<img src=\"{}\" alt=\"{}\">", escape(&img.src), escape(&img.alt)))
            .collect(),
    }
}

// ============================================================================
// FORMS
// ============================================================================

fn category_options(selected: &str) -> String {
    Category::ALL
        .iter()
        .map(|c| {
            let mark = if c.label().eq_ignore_ascii_case(selected.trim()) {
                " selected"
            } else {
                ""
            };
            format!("<option value=\"{0}\"{1}>{0}</option>", escape(c.label()), mark)
        })
        .collect()
}

fn progress_form_html(form: &ProgressForm) -> String {
    format!(
        r#"<form method="post" action="/progress" class="entry-form">
<input type="date" id="progress-date" name="date" value="{}">
<input type="text" id="progress-title" name="title" placeholder="Title" value="{}">
<textarea id="progress-description" name="description" placeholder="What happened?">{}</textarea>
<input type="text" id="progress-image" name="image_url" placeholder="Image URL (optional)" value="{}">
<button type="submit" id="add-progress-btn">Add Update</button>
</form>"#,
        escape(&form.date),
        escape(&form.title),
        escape(&form.description),
        escape(&form.image_url)
    )
}

fn item_form_html(form: &ItemForm, prefix: &str, action: &str, cost_label: &str, button: &str) -> String {
    format!(
        r#"<form method="post" action="{action}" class="entry-form">
<select id="{prefix}-category" name="category">{options}</select>
<input type="text" id="{prefix}-item" name="item" placeholder="Item" value="{item}">
<input type="text" id="{prefix}-cost" name="cost" placeholder="{cost_label}" value="{cost}">
<button type="submit" id="add-{prefix}-btn">{button}</button>
</form>"#,
        action = action,
        prefix = prefix,
        options = category_options(&form.category),
        item = escape(&form.item),
        cost_label = cost_label,
        cost = escape(&form.cost),
        button = button,
    )
}

// ============================================================================
// PAGE
// ============================================================================

fn tab_bar_html(journal: &Journal) -> String {
    let links: String = Tab::ALL
        .iter()
        .map(|tab| {
            let class = if journal.tabs.is_active(*tab) { "tab active" } else { "tab" };
            format!(
                "<a class=\"{}\" data-tab=\"{}\" href=\"/?tab={}\">{}</a>",
                class,
                tab.id(),
                tab.id(),
                tab.title()
            )
        })
        .collect();
    format!("<nav id=\"tabs\">{}</nav>", links)
}

fn section(journal: &Journal, tab: Tab, body: &str) -> String {
    let class = if journal.tabs.is_active(tab) {
        "tab-content active"
    } else {
        "tab-content"
    };
    format!(
        "<section id=\"{}\" class=\"{}\"><h2>{}</h2>{}</section>",
        tab.id(),
        class,
        tab.title(),
        body
    )
}

fn hero_html(journal: &Journal) -> String {
    let image = match journal.hero.src() {
        Some(src) => format!(
            "<img id=\"hero-image\" src=\"{}\" alt=\"Project car\" style=\"display:block\">",
            escape(src)
        ),
        None => "<img id=\"hero-image\" src=\"\" alt=\"Project car\" style=\"display:none\">".to_string(),
    };

    format!(
        r#"{image}
<form method="post" action="/hero/update">
<input type="text" id="hero-image-input" name="url" placeholder="Paste an image URL" value="{input}">
<button type="submit" id="hero-update-btn">Set Image</button>
</form>
<form method="post" action="/hero/reset"><button type="submit" id="hero-reset-btn">Reset to {default}</button></form>
<form method="post" action="/hero/remove"><button type="submit" id="hero-remove-btn">Remove Image</button></form>"#,
        image = image,
        input = escape(&journal.hero.input),
        default = escape(DEFAULT_HERO_SRC),
    )
}

fn story_html(journal: &Journal) -> String {
    format!(
        r#"<p id="build-story-text">{text}</p>
<form method="post" action="/story">
<textarea id="build-story-input" name="text">{draft}</textarea>
<button type="submit" id="build-story-update-btn">Update Story</button>
</form>"#,
        text = escape(journal.story.text()),
        draft = escape(&journal.story.draft),
    )
}

/// Render the whole page from the journal's current state
pub fn render_page(journal: &Journal, notice: Option<&str>) -> String {
    let mut body = String::new();

    body.push_str(&section(journal, Tab::Home, &hero_html(journal)));
    body.push_str(&section(journal, Tab::BuildStory, &story_html(journal)));

    let progress = format!(
        "{}<div id=\"progress-list\">{}</div>",
        progress_form_html(&journal.progress_form),
        progress_list_html(&journal.progress_list())
    );
    body.push_str(&section(journal, Tab::Progress, &progress));

    let budget = format!(
        "{}<table id=\"budget-table\"><thead><tr><th>Category</th><th>Item</th><th>Cost</th></tr></thead><tbody>{}</tbody></table><div id=\"budget-totals\">{}</div>",
        item_form_html(&journal.budget_form, "budget", "/budget", "Cost", "Add Expense"),
        table_body_html(&journal.budget_table()),
        totals_html(&journal.budget_totals())
    );
    body.push_str(&section(journal, Tab::Budget, &budget));

    let wishlist = format!(
        "{}<table id=\"wishlist-table\"><thead><tr><th>Category</th><th>Item</th><th>Estimated Cost</th></tr></thead><tbody>{}</tbody></table>",
        item_form_html(&journal.wish_form, "wishlist", "/wishlist", "Estimated cost", "Add to Wish List"),
        table_body_html(&journal.wish_table())
    );
    body.push_str(&section(journal, Tab::WishList, &wishlist));

    let gallery = format!("<div id=\"gallery-grid\">{}</div>", gallery_html(&journal.gallery()));
    body.push_str(&section(journal, Tab::Gallery, &gallery));

    let notice_html = notice
        .map(|msg| format!("<div class=\"notice\" role=\"alert\">{}</div>", escape(msg)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Build Journal</title>\n<style>{}</style>\n</head>\n<body>\n<header><h1>Build Journal</h1></header>\n{}\n{}\n<main>{}</main>\n</body>\n</html>\n",
        STYLE,
        tab_bar_html(journal),
        notice_html,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::Action;
    use crate::render::{render_budget_totals, Image, ProgressCard, TableRow, NO_PHOTOS};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_progress_card_markup() {
        let view = ProgressListView::Cards {
            cards: vec![ProgressCard {
                image: Some(Image {
                    src: "a.jpg".to_string(),
                    alt: "A <title>".to_string(),
                }),
                title: "A <title>".to_string(),
                date_line: "Date: not set".to_string(),
                description: "desc".to_string(),
            }],
        };

        let html = progress_list_html(&view);
        assert!(html.contains("<img src=\"a.jpg\" alt=\"A &lt;title&gt;\">"));
        assert!(html.contains("<h4>A &lt;title&gt;</h4>"));
        assert!(html.contains("<div class=\"progress-meta\">Date: not set</div>"));
    }

    #[test]
    fn test_progress_cards_without_image() {
        let card = |title: &str| ProgressCard {
            image: None,
            title: title.to_string(),
            date_line: "Date: 2025-01-01".to_string(),
            description: "desc".to_string(),
        };
        let view = ProgressListView::Cards {
            cards: vec![card("Newer"), card("Older")],
        };

        let html = progress_list_html(&view);
        assert!(!html.contains("<img"));
        assert_eq!(html.matches("<div class=\"progress-card\">").count(), 2);
        assert!(html.find("Newer").unwrap() < html.find("Older").unwrap());
        assert!(html.ends_with("<p>desc</p></div></div>"));
    }

    #[test]
    fn test_placeholder_row_spans_columns() {
        let view = TableView::Placeholder {
            message: "No budget items yet.",
            colspan: 3,
        };
        assert_eq!(
            table_body_html(&view),
            "<tr><td colspan=\"3\">No budget items yet.</td></tr>"
        );
    }

    #[test]
    fn test_table_rows() {
        let view = TableView::Rows {
            rows: vec![TableRow {
                category: "Body Work".to_string(),
                item: "Fenders".to_string(),
                cost: "$400.00".to_string(),
            }],
        };
        assert_eq!(
            table_body_html(&view),
            "<tr><td>Body Work</td><td>Fenders</td><td>$400.00</td></tr>"
        );
    }

    #[test]
    fn test_totals_markup() {
        let empty = render_budget_totals::<crate::models::BudgetItem>(&[]);
        assert_eq!(totals_html(&empty), "Total spent so far: $0.00");

        let totals = render_budget_totals(&crate::seed::sample_budget());
        let html = totals_html(&totals);
        assert!(html.starts_with("<p>Motor: $250.00</p>"));
        assert!(html.ends_with("<p class=\"overall-total\">Overall total: $1850.00</p>"));
    }

    #[test]
    fn test_gallery_placeholder_markup() {
        let view = GalleryView::Placeholder { message: NO_PHOTOS };
        assert_eq!(gallery_html(&view), format!("<p>{}</p>", NO_PHOTOS));
    }

    #[test]
    fn test_page_marks_only_active_section() {
        let mut journal = Journal::with_sample_data();
        journal.apply(Action::SelectTab("budget".to_string()));

        let page = render_page(&journal, None);

        assert_eq!(page.matches("tab-content active").count(), 1);
        assert!(page.contains("<section id=\"budget\" class=\"tab-content active\">"));
        assert!(page.contains("class=\"tab active\" data-tab=\"budget\""));
        assert!(!page.contains("class=\"notice\""));
    }

    #[test]
    fn test_page_keeps_rejected_values_and_notice() {
        let mut journal = Journal::new();
        let outcome = journal.apply(Action::AddWish(ItemForm {
            category: "Paint".to_string(),
            item: "Candy <red>".to_string(),
            cost: "lots".to_string(),
        }));

        let page = render_page(&journal, outcome.notice().as_deref());

        assert!(page.contains("value=\"Candy &lt;red&gt;\""));
        assert!(page.contains("value=\"lots\""));
        assert!(page.contains("<option value=\"Paint\" selected>Paint</option>"));
        assert!(page.contains("Please enter an item name and a valid estimated cost."));
        assert!(page.contains("No wish list items yet."));
    }

    #[test]
    fn test_page_hides_removed_hero() {
        let mut journal = Journal::new();
        journal.apply(Action::RemoveHero);

        let page = render_page(&journal, None);
        assert!(page.contains("style=\"display:none\""));
    }
}
