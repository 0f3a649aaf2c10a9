//! `clausecheck summarize`: the mocked upload and summary editor.

use anyhow::Context;
use clausecheck_core::SummaryEditor;

use crate::SummarizeArgs;
use crate::display;

pub async fn run(args: &SummarizeArgs) -> anyhow::Result<()> {
    let meta = tokio::fs::metadata(&args.file)
        .await
        .with_context(|| format!("reading {}", args.file.display()))?;

    let mut editor = SummaryEditor::new();
    editor.accept(&args.file, meta.len())?;

    while let Some(delay) = editor.phase().delay() {
        let progress = editor.phase().progress().unwrap_or_default();
        eprintln!("  {:<20} {progress:>3}%", editor.phase().label());
        tokio::time::sleep(delay).await;
        editor.advance();
    }

    for &option in &args.toggle {
        editor.options_mut().toggle(option.into());
    }

    if let Some(path) = &args.edit {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading summary from {}", path.display()))?;
        editor.edit(text);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&editor)?);
    } else {
        display::print_summary(&editor);
    }
    Ok(())
}
