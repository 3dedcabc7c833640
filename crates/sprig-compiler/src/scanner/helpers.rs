//! Helper functions for the component-tag scanner.
//!
//! This module contains the small utilities used throughout the state
//! machine:
//! - State transitions ("switch to", "reconsume in")
//! - Input/character handling
//! - Tag begin/emit/abandon bookkeeping
//! - Attribute construction
//! - Best-effort warnings

use sprig_common::warning::warn_once;
use sprig_tree::TagAttribute;

use super::core::{ComponentScanner, ScannerState};
use super::token::{Segment, is_component_tag_name};

// =============================================================================
// State Transition Helpers
// =============================================================================

impl ComponentScanner {
    /// Transition to a new state. The next character will be consumed on the
    /// next iteration of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: ScannerState) {
        self.state = new_state;
    }

    /// Transition to a new state without consuming the current character.
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: ScannerState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl ComponentScanner {
    /// Return the character at the current position and advance past it.
    /// Returns `None` at end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        if let Some(c) = self.input[self.current_pos..].chars().next() {
            self.current_pos += c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    /// Byte offset where the current input character starts. Equals the
    /// current position when no character is held (at end of input).
    pub(super) fn current_char_start(&self) -> usize {
        self.current_input_character
            .map_or(self.current_pos, |c| self.current_pos - c.len_utf8())
    }

    /// ASCII whitespace: tab, LF, FF, CR, or space.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\r' | '\x0C')
    }

    /// Characters allowed inside an attribute key: letters, digits, `_`,
    /// `-`, `:`.
    pub(super) const fn is_attribute_name_char(input_char: char) -> bool {
        input_char.is_ascii_alphanumeric() || matches!(input_char, '_' | '-' | ':')
    }

    /// Characters allowed to start an attribute key; `$` marks a component
    /// argument and is only meaningful in first position.
    pub(super) const fn is_attribute_name_start_char(input_char: char) -> bool {
        Self::is_attribute_name_char(input_char) || input_char == '$'
    }
}

// =============================================================================
// Tag Bookkeeping
// =============================================================================

impl ComponentScanner {
    /// Reset the pending tag buffers for a fresh candidate.
    pub(super) fn begin_tag(&mut self) {
        self.tag_name.clear();
        self.attributes.clear();
    }

    /// Whether the pending tag name follows the component naming rule.
    pub(super) fn tag_name_is_component(&self) -> bool {
        is_component_tag_name(&self.tag_name)
    }

    /// Flush accumulated literal text as one segment, if any.
    pub(super) fn flush_text(&mut self) {
        if !self.text_buffer.is_empty() {
            self.segments.push(Segment::Text {
                data: std::mem::take(&mut self.text_buffer),
            });
        }
    }

    /// Give up on the current candidate tag: restore everything consumed
    /// since its `<` (excluding the current character) as literal text and
    /// rescan the current character as text.
    pub(super) fn abandon_tag(&mut self) {
        let consumed = &self.input[self.tag_start_pos..self.current_char_start()];
        self.text_buffer.push_str(consumed);
        self.reconsume_in(ScannerState::Text);
    }

    /// Give up on the current candidate tag at end of input: everything from
    /// its `<` onwards is literal text.
    pub(super) fn abandon_tag_at_eof(&mut self) {
        let consumed = &self.input[self.tag_start_pos..self.current_pos];
        self.text_buffer.push_str(consumed);
        self.flush_text();
        self.at_eof = true;
    }

    /// Emit the pending open tag and return to scanning text.
    pub(super) fn emit_open_tag(&mut self, self_closing: bool) {
        self.flush_text();
        let raw = self.input[self.tag_start_pos..self.current_pos].to_string();
        self.segments.push(Segment::OpenTag {
            name: std::mem::take(&mut self.tag_name),
            attributes: std::mem::take(&mut self.attributes),
            self_closing,
            raw,
        });
        self.switch_to(ScannerState::Text);
    }

    /// Emit the pending close tag and return to scanning text.
    pub(super) fn emit_close_tag(&mut self) {
        self.flush_text();
        let raw = self.input[self.tag_start_pos..self.current_pos].to_string();
        self.segments.push(Segment::CloseTag {
            name: std::mem::take(&mut self.tag_name),
            raw,
        });
        self.switch_to(ScannerState::Text);
    }
}

// =============================================================================
// Attribute Helpers
// =============================================================================

impl ComponentScanner {
    /// Start a new attribute whose name begins with the given character.
    pub(super) fn start_new_attribute(&mut self, first: char) {
        self.attributes
            .push(TagAttribute::new(String::from(first), None));
    }

    /// Append a character to the current attribute's name.
    pub(super) fn append_to_attribute_name(&mut self, c: char) {
        if let Some(attr) = self.attributes.last_mut() {
            attr.name.push(c);
        }
    }

    /// Mark the current attribute as valued (an empty value until characters
    /// arrive). `key=` followed by the tag end therefore scans as an empty
    /// literal, not as a boolean flag.
    pub(super) fn begin_attribute_value(&mut self) {
        if let Some(attr) = self.attributes.last_mut() {
            attr.value = Some(String::new());
        }
    }

    /// Append a character to the current attribute's value.
    pub(super) fn append_to_attribute_value(&mut self, c: char) {
        if let Some(attr) = self.attributes.last_mut() {
            attr.value.get_or_insert_with(String::new).push(c);
        }
    }

    /// Discard the current attribute (its token failed the grammar).
    pub(super) fn drop_current_attribute(&mut self) {
        let _ = self.attributes.pop();
    }
}

// =============================================================================
// Warnings
// =============================================================================

impl ComponentScanner {
    /// Report a best-effort recovery via the shared warning system.
    /// Recoveries are never fatal - the scanner keeps going.
    pub(super) fn log_scan_warning(&self, message: &str) {
        let pos = self.current_pos;
        warn_once("Scanner", &format!("{message} (position {pos}) in {} state", self.state));
    }
}
