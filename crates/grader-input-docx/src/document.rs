//! Raw-text extraction from `word/document.xml`.
//!
//! Handles Word Open XML elements:
//! - `w:t` (text) → its characters
//! - `w:tab` → `\t` (tab-stop definitions inside `w:tabs` are skipped)
//! - `w:br` / `w:cr` → `\n`
//! - `w:p` (paragraph end) → `\n\n`
//!
//! Everything else (run formatting, tables, drawings) contributes only the
//! text nested inside it.

use quick_xml::events::Event;
use quick_xml::Reader;

/// Extract the document's raw text. Malformed XML is an error.
pub fn extract_raw_text(xml: &str) -> Result<String, String> {
    let mut reader = Reader::from_str(xml);
    let mut state = RawTextState::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let local = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                state.handle_start(&local);
            }
            Ok(Event::Empty(ref e)) => {
                let local = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                state.handle_empty(&local);
            }
            Ok(Event::Text(ref e)) => {
                if state.in_text {
                    let text = e.unescape().map_err(|err| err.to_string())?;
                    state.out.push_str(&text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if state.in_text {
                    state.out.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::End(ref e)) => {
                let local = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                state.handle_end(&local);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(format!(
                    "XML error at position {}: {}",
                    reader.buffer_position(),
                    e
                ))
            }
            _ => {}
        }
    }

    Ok(state.out)
}

#[derive(Default)]
struct RawTextState {
    in_text: bool,
    /// Inside `w:tabs`, where `w:tab` defines a tab stop rather than a tab.
    in_tab_stops: bool,
    out: String,
}

impl RawTextState {
    fn handle_start(&mut self, local: &str) {
        match local {
            "t" => self.in_text = true,
            "tabs" => self.in_tab_stops = true,
            "tab" if !self.in_tab_stops => self.out.push('\t'),
            "br" | "cr" => self.out.push('\n'),
            _ => {}
        }
    }

    fn handle_empty(&mut self, local: &str) {
        match local {
            "tab" if !self.in_tab_stops => self.out.push('\t'),
            "br" | "cr" => self.out.push('\n'),
            "p" => self.out.push_str("\n\n"),
            _ => {}
        }
    }

    fn handle_end(&mut self, local: &str) {
        match local {
            "t" => self.in_text = false,
            "tabs" => self.in_tab_stops = false,
            "p" => self.out.push_str("\n\n"),
            _ => {}
        }
    }
}
