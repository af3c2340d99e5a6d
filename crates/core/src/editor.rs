use crate::error::Result;
use crate::history::EditHistory;
use crate::transcript::parse_transcript;
use crate::types::TranscriptLine;

/// Interactive state for the transcript panel: undo/redo history plus the
/// toolbar toggles.
///
/// Checkpoint policy: the edit-mode toggle is the burst boundary. The
/// first `input` after entering edit mode (or after an undo/redo) appends
/// a new history entry; later inputs coalesce into that entry until
/// `save` ends the burst. A single undo after save therefore restores the
/// text from before the whole burst, not one keystroke.
#[derive(Debug)]
pub struct TranscriptEditor {
    history: EditHistory,
    editing: bool,
    burst_open: bool,
    show_timestamps: bool,
    show_speakers: bool,
    visible: bool,
}

impl TranscriptEditor {
    /// Seed a fresh editor from a just-fetched transcript.
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            history: EditHistory::new(transcript),
            editing: false,
            burst_open: false,
            show_timestamps: true,
            show_speakers: true,
            visible: true,
        }
    }

    /// Raw edited transcript text, the single source of truth.
    pub fn text(&self) -> &str {
        self.history.current()
    }

    /// Structured lines, recomputed from the raw text on every call.
    pub fn lines(&self) -> Vec<TranscriptLine> {
        parse_transcript(self.text())
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Enter edit mode. The next `input` starts a fresh undo step.
    pub fn begin_edit(&mut self) {
        self.editing = true;
        self.burst_open = false;
    }

    /// Leave edit mode, sealing the current burst as one undo step.
    pub fn save(&mut self) {
        self.editing = false;
        self.burst_open = false;
    }

    /// Replace the transcript text while editing.
    ///
    /// Ignored outside edit mode. Within a burst, successive inputs
    /// overwrite the same history entry; an input equal to the current
    /// text records nothing and leaves the burst state untouched.
    pub fn input(&mut self, text: impl Into<String>) {
        if !self.editing {
            return;
        }
        let text = text.into();
        if text == self.history.current() {
            return;
        }
        self.history.set(text, self.burst_open);
        self.burst_open = true;
    }

    /// Undo one step. Re-arms the checkpoint so later typing cannot
    /// coalesce into the entry the cursor moved onto.
    pub fn undo(&mut self) {
        self.history.undo();
        self.burst_open = false;
    }

    /// Redo one step; re-arms the checkpoint like `undo`.
    pub fn redo(&mut self) {
        self.history.redo();
        self.burst_open = false;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn show_timestamps(&self) -> bool {
        self.show_timestamps
    }

    pub fn show_speakers(&self) -> bool {
        self.show_speakers
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_timestamps(&mut self) -> bool {
        self.show_timestamps = !self.show_timestamps;
        self.show_timestamps
    }

    pub fn toggle_speakers(&mut self) -> bool {
        self.show_speakers = !self.show_speakers;
        self.show_speakers
    }

    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Raw text payload for the `.txt` download.
    pub fn export_txt(&self) -> &str {
        self.text()
    }

    /// Parsed lines serialized as a pretty JSON array for the `.json`
    /// download.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.lines())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_undo_after_save_restores_pre_burst_text() {
        let mut editor = TranscriptEditor::new("original");
        editor.begin_edit();
        editor.input("o");
        editor.input("or");
        editor.input("orange");
        editor.save();

        editor.undo();
        assert_eq!(editor.text(), "original");
        editor.redo();
        assert_eq!(editor.text(), "orange");
    }

    #[test]
    fn separate_edit_sessions_are_separate_undo_steps() {
        let mut editor = TranscriptEditor::new("original");
        editor.begin_edit();
        editor.input("first");
        editor.save();
        editor.begin_edit();
        editor.input("second");
        editor.save();

        editor.undo();
        assert_eq!(editor.text(), "first");
        editor.undo();
        assert_eq!(editor.text(), "original");
    }

    #[test]
    fn input_outside_edit_mode_is_ignored() {
        let mut editor = TranscriptEditor::new("original");
        editor.input("sneaky");
        assert_eq!(editor.text(), "original");
        assert!(!editor.can_undo());
    }

    #[test]
    fn undo_mid_burst_does_not_let_typing_clobber_older_entries() {
        let mut editor = TranscriptEditor::new("original");
        editor.begin_edit();
        editor.input("draft");
        editor.undo();
        assert_eq!(editor.text(), "original");

        // Typing again must checkpoint, not overwrite "original" in place.
        editor.input("rewrite");
        editor.undo();
        assert_eq!(editor.text(), "original");
    }

    #[test]
    fn equal_input_does_not_open_a_burst() {
        let mut editor = TranscriptEditor::new("original");
        editor.begin_edit();
        editor.input("original");
        editor.input("changed");
        editor.undo();
        assert_eq!(editor.text(), "original");
    }

    #[test]
    fn lines_reflect_the_edited_text() {
        let mut editor = TranscriptEditor::new("00:01 - [Alice] Hello");
        editor.begin_edit();
        editor.input("00:01 - [Bob] Goodbye");
        editor.save();

        let lines = editor.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].speaker.as_deref(), Some("Bob"));
        assert_eq!(lines[0].text, "Goodbye");
    }

    #[test]
    fn export_json_is_an_array_of_line_objects() {
        let editor = TranscriptEditor::new("00:01 - [Alice] Hello\nplain line");
        let json = editor.export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let lines = value.as_array().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["timestamp"], "00:01");
        assert_eq!(lines[0]["speaker"], "Alice");
        assert_eq!(lines[0]["text"], "Hello");
        assert_eq!(lines[1]["timestamp"], serde_json::Value::Null);
    }

    #[test]
    fn toggles_flip_view_state() {
        let mut editor = TranscriptEditor::new("x");
        assert!(editor.show_timestamps());
        assert!(!editor.toggle_timestamps());
        assert!(editor.show_speakers());
        assert!(!editor.toggle_speakers());
        assert!(editor.is_visible());
        assert!(!editor.toggle_visibility());
        assert!(editor.toggle_visibility());
    }
}
