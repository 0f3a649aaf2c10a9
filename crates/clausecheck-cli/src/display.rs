//! Terminal rendering for reviews, catalogues and the summary editor.
//!
//! Cards are printed vertically, one per review item, with the body wrapped
//! to a fixed width and indented under the header.

use clausecheck_core::highlight::mark;
use clausecheck_core::review::ItemKind;
use clausecheck_core::{Analysis, Catalog, Review, SummaryEditor};

const WRAP_WIDTH: usize = 76;
const INDENT: &str = "    ";

const RED_BG: &str = "\x1b[41;97m";
const RESET: &str = "\x1b[0m";

// ── Review ──

/// Print the highlighted clause followed by the result cards.
pub fn print_review(analysis: &Analysis, review: &Review, color: bool) {
    println!("=== Clause ===");
    println!("{}", paint(review.clause(), &analysis.highlights, color));
    println!();

    println!("=== {} ===", review.title());
    if !analysis.institutions.is_empty() {
        println!("  {:<14} {}", "institution", analysis.institutions.join(", "));
    }
    println!();

    for (i, card) in review.cards().iter().enumerate() {
        let item = card.item();
        let marker = if item.is_error() { "x" } else { "ok" };
        println!("[{}] {} {}", i + 1, marker, item.header);

        let (text, suggestion) = card.body();
        print_wrapped(text);
        if let Some(suggestion) = suggestion
            && item.kind == ItemKind::Phrase
        {
            println!("{INDENT}Suggestion");
            print_wrapped(suggestion);
        }
        println!();
    }
}

fn paint(text: &str, highlights: &[String], color: bool) -> String {
    let (open, close) = if color { (RED_BG, RESET) } else { ("[[", "]]") };
    mark(text, highlights, open, close)
}

// ── Catalogue ──

pub fn print_categories(catalog: &Catalog) {
    for cat in catalog.categories() {
        println!("{} ({})", cat.category, cat.phrases.len());
        for phrase in &cat.phrases {
            // Quote so leading spaces stay visible.
            println!("  {:?}", phrase);
        }
        println!();
    }
}

pub fn print_institutions(catalog: &Catalog) {
    for inst in catalog.institutions() {
        println!("{inst}");
    }
}

// ── Summary editor ──

pub fn print_summary(editor: &SummaryEditor) {
    println!("=== {} ===", editor.title());
    println!();
    println!("{}", editor.summary());
    println!();
    println!("  {:<24} {}", "words", editor.word_count());

    let options = editor.options();
    println!("Options");
    println!("  {:<24} {}", "auto-correct grammar", on_off(options.auto_correct_grammar));
    println!("  {:<24} {}", "highlight key points", on_off(options.highlight_key_points));
    println!("  {:<24} {}", "add citations", on_off(options.add_citations));
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

// ── Helpers ──

fn print_wrapped(text: &str) {
    for line in wrap(text, WRAP_WIDTH - INDENT.len()) {
        println!("{INDENT}{line}");
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}
