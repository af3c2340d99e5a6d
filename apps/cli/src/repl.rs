use anyhow::{Context, Result};
use console::style;
use dialoguer::{Editor, Input};
use tldw_core::{
    CopiedIndicator, Provider, SummarySession, TranscriptEditor, copy_to_clipboard, render_summary,
};

const HELP: &str = "\
Commands:
  show                print the transcript (respects toggles)
  summary             print the summary markdown
  edit                open the transcript in $EDITOR (edits coalesce until save)
  save                seal the current edit session as one undo step
  undo / redo         move through edit history (edit mode only)
  timestamps          toggle timestamp display
  speakers            toggle speaker display
  panel               hide or show the transcript panel
  copy                copy the summary to the clipboard
  export <txt|json|html> [path]
                      write the transcript (txt/json) or rendered summary (html)
  url <link>          summarize a different video (replaces the editor)
  quit                exit";

fn no_transcript() {
    println!("No transcript loaded. Use 'url <link>' first.");
}

fn print_transcript(editor: &TranscriptEditor) {
    if !editor.is_visible() {
        println!("Transcript panel is hidden. Use 'panel' to show it.");
        return;
    }
    for line in editor.lines() {
        let mut rendered = String::new();
        if editor.show_timestamps() {
            if let Some(timestamp) = &line.timestamp {
                rendered.push_str(&format!("{} ", style(timestamp).dim()));
            }
        }
        if editor.show_speakers() {
            if let Some(speaker) = &line.speaker {
                rendered.push_str(&format!("{} ", style(format!("{speaker}:")).bold()));
            }
        }
        rendered.push_str(&line.text);
        println!("{rendered}");
    }
}

fn toggle_line(name: &str, on: bool) {
    let state = if on {
        style("on").green()
    } else {
        style("off").red()
    };
    println!("{name}: {state}");
}

async fn export(session: &SummarySession, kind: &str, path: Option<&str>) -> Result<()> {
    let (default_name, content) = match kind {
        "txt" => {
            let Some(editor) = session.editor() else {
                no_transcript();
                return Ok(());
            };
            ("transcript.txt", editor.export_txt().to_string())
        }
        "json" => {
            let Some(editor) = session.editor() else {
                no_transcript();
                return Ok(());
            };
            ("transcript.json", editor.export_json()?)
        }
        "html" => {
            let Some(summary) = session.summary() else {
                println!("No summary to export.");
                return Ok(());
            };
            ("summary.html", render_summary(summary))
        }
        other => {
            println!("Unknown export format: {other}. Use txt, json, or html.");
            return Ok(());
        }
    };

    let path = path.unwrap_or(default_name);
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("failed to write {path}"))?;
    println!(
        "{} Saved: {}",
        style("✓").green().bold(),
        style(path).cyan()
    );
    Ok(())
}

pub async fn run(session: &mut SummarySession, provider: &Provider) -> Result<()> {
    println!(
        "{}",
        style("Interactive editor - type 'help' for commands").dim()
    );
    let mut copied = CopiedIndicator::new();

    loop {
        let prompt = if copied.is_copied() {
            "tldw (copied!)".to_string()
        } else {
            "tldw".to_string()
        };
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let arg = parts.next();

        match command {
            "help" => println!("{HELP}"),
            "show" => match session.editor() {
                Some(editor) => print_transcript(editor),
                None => no_transcript(),
            },
            "summary" => match session.summary() {
                Some(_) => crate::print_summary(session),
                None => println!("No summary available."),
            },
            "edit" => {
                let Some(editor) = session.editor_mut() else {
                    no_transcript();
                    continue;
                };
                editor.begin_edit();
                match Editor::new().edit(editor.text())? {
                    Some(text) => {
                        editor.input(text);
                        println!("Buffer updated; 'save' to seal this edit session.");
                    }
                    None => println!("Edit cancelled."),
                }
            }
            "save" => {
                let Some(editor) = session.editor_mut() else {
                    no_transcript();
                    continue;
                };
                editor.save();
                println!("{} Saved", style("✓").green().bold());
            }
            "undo" | "redo" => {
                let Some(editor) = session.editor_mut() else {
                    no_transcript();
                    continue;
                };
                if !editor.is_editing() {
                    println!("Enter edit mode first ('edit').");
                    continue;
                }
                let moved = if command == "undo" {
                    let can = editor.can_undo();
                    editor.undo();
                    can
                } else {
                    let can = editor.can_redo();
                    editor.redo();
                    can
                };
                if moved {
                    print_transcript(editor);
                } else {
                    println!("Nothing to {command}.");
                }
            }
            "timestamps" => match session.editor_mut() {
                Some(editor) => toggle_line("timestamps", editor.toggle_timestamps()),
                None => no_transcript(),
            },
            "speakers" => match session.editor_mut() {
                Some(editor) => toggle_line("speakers", editor.toggle_speakers()),
                None => no_transcript(),
            },
            "panel" => match session.editor_mut() {
                Some(editor) => toggle_line("transcript panel", editor.toggle_visibility()),
                None => no_transcript(),
            },
            "copy" => match session.summary() {
                Some(summary) => match copy_to_clipboard(summary) {
                    Ok(()) => {
                        copied.trigger();
                        println!("{} Copied!", style("✓").green().bold());
                    }
                    Err(e) => {
                        log::error!("clipboard copy failed: {e}");
                        println!("{} Could not copy to clipboard", style("✗").red().bold());
                    }
                },
                None => println!("No summary to copy."),
            },
            "export" => match arg {
                Some(kind) => export(session, kind, parts.next()).await?,
                None => println!("Usage: export <txt|json|html> [path]"),
            },
            "url" => match arg {
                Some(url) => {
                    if crate::run_summarize(session, provider, url).await {
                        crate::print_summary(session);
                    }
                }
                None => println!("Usage: url <link>"),
            },
            "quit" | "exit" => break,
            other => println!("Unknown command: {other} (try 'help')"),
        }
    }
    Ok(())
}
