//! Component-tag scanner state machine.
//!
//! A restricted, best-effort cousin of an HTML tag tokenizer: the only
//! markup it recognizes is the component tag convention (see
//! [`is_component_tag_name`](super::token::is_component_tag_name)); every
//! other byte of the source - ordinary HTML, template directives, malformed
//! tag-shaped text - is passed through verbatim as [`Segment::Text`].
//!
//! Each candidate tag records its start offset; whenever recognition fails
//! (lowercase name, missing underscore, end of input mid-tag, unterminated
//! quote) the consumed slice is flushed back into the text stream
//! byte-for-byte, so a failed match never mutates the output.

use strum_macros::Display;

use sprig_tree::TagAttribute;

use super::token::Segment;

/// The scanner state machine. One state per recognition position, in the
/// manner of the WHATWG HTML tokenizer states.
#[derive(Debug, PartialEq, Display)]
pub enum ScannerState {
    /// Ordinary template text, outside any candidate tag.
    Text,
    /// Just consumed `<`.
    TagOpen,
    /// Just consumed `</`.
    EndTagOpen,
    /// Inside an open tag's name.
    TagName,
    /// Inside a close tag's name.
    EndTagName,
    /// After a close tag's name, skipping to `>`.
    AfterEndTagName,
    /// Between attributes, before a name.
    BeforeAttributeName,
    /// Inside an attribute name.
    AttributeName,
    /// After an attribute name, before `=` or the next attribute.
    AfterAttributeName,
    /// Just consumed `=`, before the value.
    BeforeAttributeValue,
    /// Inside a double-quoted attribute value.
    AttributeValueDoubleQuoted,
    /// Inside a single-quoted attribute value.
    AttributeValueSingleQuoted,
    /// Inside an unquoted attribute value.
    AttributeValueUnquoted,
    /// After a quoted attribute value.
    AfterAttributeValueQuoted,
    /// Just consumed `/` before an expected `>`.
    SelfClosingStartTag,
    /// Skipping a token that does not match the attribute grammar.
    BogusAttribute,
}

/// The component-tag scanner.
///
/// Feed it the whole template source, call [`run`](Self::run), then take the
/// segments with [`into_segments`](Self::into_segments).
pub struct ComponentScanner {
    pub(super) state: ScannerState,
    pub(super) input: String,
    pub(super) current_pos: usize,
    pub(super) current_input_character: Option<char>,
    pub(super) at_eof: bool,
    pub(super) segments: Vec<Segment>,
    // When true, the next iteration of the main loop will not consume a new
    // character. "Reconsume in the X state" sets this flag.
    pub(super) reconsume: bool,

    /// Pending literal text, flushed as one segment at the next tag or EOF.
    pub(super) text_buffer: String,

    /// Byte offset of the `<` that started the current candidate tag; used
    /// to restore the raw slice when recognition fails.
    pub(super) tag_start_pos: usize,

    /// Name of the tag currently being scanned.
    pub(super) tag_name: String,

    /// Attributes collected for the current open tag, in source order.
    pub(super) attributes: Vec<TagAttribute>,
}

impl ComponentScanner {
    /// Create a new scanner for the given template source.
    #[must_use]
    pub const fn new(input: String) -> Self {
        ComponentScanner {
            state: ScannerState::Text,
            input,
            current_pos: 0,
            current_input_character: None,
            at_eof: false,
            segments: Vec::new(),
            reconsume: false,
            text_buffer: String::new(),
            tag_start_pos: 0,
            tag_name: String::new(),
            attributes: Vec::new(),
        }
    }

    /// Run the state machine over the whole input.
    pub fn run(&mut self) {
        while !self.at_eof {
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.current_input_character = self.consume();
            }
            match self.state {
                ScannerState::Text => self.handle_text_state(),
                ScannerState::TagOpen => self.handle_tag_open_state(),
                ScannerState::EndTagOpen => self.handle_end_tag_open_state(),
                ScannerState::TagName => self.handle_tag_name_state(),
                ScannerState::EndTagName => self.handle_end_tag_name_state(),
                ScannerState::AfterEndTagName => self.handle_after_end_tag_name_state(),
                ScannerState::BeforeAttributeName => self.handle_before_attribute_name_state(),
                ScannerState::AttributeName => self.handle_attribute_name_state(),
                ScannerState::AfterAttributeName => self.handle_after_attribute_name_state(),
                ScannerState::BeforeAttributeValue => self.handle_before_attribute_value_state(),
                ScannerState::AttributeValueDoubleQuoted => {
                    self.handle_attribute_value_double_quoted_state();
                }
                ScannerState::AttributeValueSingleQuoted => {
                    self.handle_attribute_value_single_quoted_state();
                }
                ScannerState::AttributeValueUnquoted => {
                    self.handle_attribute_value_unquoted_state();
                }
                ScannerState::AfterAttributeValueQuoted => {
                    self.handle_after_attribute_value_quoted_state();
                }
                ScannerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state(),
                ScannerState::BogusAttribute => self.handle_bogus_attribute_state(),
            }
        }
    }

    /// Consume the scanner and return the segment stream.
    /// Call this after [`run`](Self::run).
    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Ordinary text: accumulate until `<` opens a candidate tag.
    fn handle_text_state(&mut self) {
        match self.current_input_character {
            Some('<') => {
                self.tag_start_pos = self.current_char_start();
                self.switch_to(ScannerState::TagOpen);
            }
            None => {
                self.flush_text();
                self.at_eof = true;
            }
            Some(c) => {
                self.text_buffer.push(c);
            }
        }
    }

    /// Just after `<`: only an uppercase letter can start a component tag.
    fn handle_tag_open_state(&mut self) {
        match self.current_input_character {
            Some('/') => {
                self.switch_to(ScannerState::EndTagOpen);
            }
            Some(c) if c.is_ascii_uppercase() => {
                self.begin_tag();
                self.reconsume_in(ScannerState::TagName);
            }
            None => {
                self.abandon_tag_at_eof();
            }
            // Lowercase HTML, comments, doctypes, stray "<" - all literal
            // text for our purposes.
            _ => {
                self.abandon_tag();
            }
        }
    }

    /// Just after `</`.
    fn handle_end_tag_open_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_uppercase() => {
                self.begin_tag();
                self.reconsume_in(ScannerState::EndTagName);
            }
            None => {
                self.abandon_tag_at_eof();
            }
            _ => {
                self.abandon_tag();
            }
        }
    }

    /// Inside an open tag name. The naming rule is checked once the name is
    /// complete; a failing name abandons the whole candidate.
    fn handle_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphanumeric() || c == '_' => {
                self.tag_name.push(c);
            }
            Some(c) if Self::is_whitespace_char(c) => {
                if self.tag_name_is_component() {
                    self.switch_to(ScannerState::BeforeAttributeName);
                } else {
                    self.abandon_tag();
                }
            }
            Some('/') => {
                if self.tag_name_is_component() {
                    self.switch_to(ScannerState::SelfClosingStartTag);
                } else {
                    self.abandon_tag();
                }
            }
            Some('>') => {
                if self.tag_name_is_component() {
                    self.emit_open_tag(false);
                } else {
                    self.abandon_tag();
                }
            }
            None => {
                self.abandon_tag_at_eof();
            }
            _ => {
                self.abandon_tag();
            }
        }
    }

    /// Inside a close tag name.
    fn handle_end_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphanumeric() || c == '_' => {
                self.tag_name.push(c);
            }
            Some(c) if Self::is_whitespace_char(c) => {
                if self.tag_name_is_component() {
                    self.switch_to(ScannerState::AfterEndTagName);
                } else {
                    self.abandon_tag();
                }
            }
            Some('>') => {
                if self.tag_name_is_component() {
                    self.emit_close_tag();
                } else {
                    self.abandon_tag();
                }
            }
            None => {
                self.abandon_tag_at_eof();
            }
            _ => {
                self.abandon_tag();
            }
        }
    }

    /// After a close tag name: anything before `>` is ignored junk.
    fn handle_after_end_tag_name_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.emit_close_tag();
            }
            None => {
                self.abandon_tag_at_eof();
            }
            Some(c) => {
                if !Self::is_whitespace_char(c) {
                    self.log_scan_warning("ignoring characters inside a close tag");
                }
            }
        }
    }

    /// Between attributes.
    fn handle_before_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('/') => {
                self.switch_to(ScannerState::SelfClosingStartTag);
            }
            Some('>') => {
                self.emit_open_tag(false);
            }
            Some(c) if Self::is_attribute_name_start_char(c) => {
                self.start_new_attribute(c);
                self.switch_to(ScannerState::AttributeName);
            }
            None => {
                self.abandon_tag_at_eof();
            }
            // A stray "=" or other junk: no attribute is produced for text
            // that does not match the token grammar.
            _ => {
                self.log_scan_warning("dropped attribute token that does not match the grammar");
                self.switch_to(ScannerState::BogusAttribute);
            }
        }
    }

    /// Inside an attribute name.
    fn handle_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_attribute_name_char(c) => {
                self.append_to_attribute_name(c);
            }
            Some('=') => {
                self.begin_attribute_value();
                self.switch_to(ScannerState::BeforeAttributeValue);
            }
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(ScannerState::AfterAttributeName);
            }
            Some('/') => {
                self.switch_to(ScannerState::SelfClosingStartTag);
            }
            Some('>') => {
                self.emit_open_tag(false);
            }
            None => {
                self.abandon_tag_at_eof();
            }
            _ => {
                self.log_scan_warning("dropped attribute token that does not match the grammar");
                self.drop_current_attribute();
                self.reconsume_in(ScannerState::BogusAttribute);
            }
        }
    }

    /// After an attribute name: the attribute so far is a boolean flag
    /// unless `=` follows.
    fn handle_after_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('=') => {
                self.begin_attribute_value();
                self.switch_to(ScannerState::BeforeAttributeValue);
            }
            Some('/') => {
                self.switch_to(ScannerState::SelfClosingStartTag);
            }
            Some('>') => {
                self.emit_open_tag(false);
            }
            Some(c) if Self::is_attribute_name_start_char(c) => {
                self.start_new_attribute(c);
                self.switch_to(ScannerState::AttributeName);
            }
            None => {
                self.abandon_tag_at_eof();
            }
            _ => {
                self.log_scan_warning("dropped attribute token that does not match the grammar");
                self.switch_to(ScannerState::BogusAttribute);
            }
        }
    }

    /// Just after `=`.
    fn handle_before_attribute_value_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('"') => {
                self.switch_to(ScannerState::AttributeValueDoubleQuoted);
            }
            Some('\'') => {
                self.switch_to(ScannerState::AttributeValueSingleQuoted);
            }
            // "key=>" keeps the empty value begun at "=".
            Some('>') => {
                self.emit_open_tag(false);
            }
            None => {
                self.abandon_tag_at_eof();
            }
            _ => {
                self.reconsume_in(ScannerState::AttributeValueUnquoted);
            }
        }
    }

    /// Inside `"..."`. An unterminated quote runs to end of input and the
    /// whole tag degrades to literal text.
    fn handle_attribute_value_double_quoted_state(&mut self) {
        match self.current_input_character {
            Some('"') => {
                self.switch_to(ScannerState::AfterAttributeValueQuoted);
            }
            None => {
                self.log_scan_warning("unterminated attribute value, tag left as literal text");
                self.abandon_tag_at_eof();
            }
            Some(c) => {
                self.append_to_attribute_value(c);
            }
        }
    }

    /// Inside `'...'`.
    fn handle_attribute_value_single_quoted_state(&mut self) {
        match self.current_input_character {
            Some('\'') => {
                self.switch_to(ScannerState::AfterAttributeValueQuoted);
            }
            None => {
                self.log_scan_warning("unterminated attribute value, tag left as literal text");
                self.abandon_tag_at_eof();
            }
            Some(c) => {
                self.append_to_attribute_value(c);
            }
        }
    }

    /// Inside an unquoted value: a bare run of non-whitespace, non-`>`
    /// characters. A `/` joins the value rather than self-closing the tag;
    /// ambiguous boundaries are deliberately not rejected.
    fn handle_attribute_value_unquoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(ScannerState::BeforeAttributeName);
            }
            Some('>') => {
                self.emit_open_tag(false);
            }
            None => {
                self.abandon_tag_at_eof();
            }
            Some(c) => {
                self.append_to_attribute_value(c);
            }
        }
    }

    /// Just after a closing quote.
    fn handle_after_attribute_value_quoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(ScannerState::BeforeAttributeName);
            }
            Some('/') => {
                self.switch_to(ScannerState::SelfClosingStartTag);
            }
            Some('>') => {
                self.emit_open_tag(false);
            }
            None => {
                self.abandon_tag_at_eof();
            }
            _ => {
                self.log_scan_warning("missing whitespace between attributes");
                self.reconsume_in(ScannerState::BeforeAttributeName);
            }
        }
    }

    /// Just after a `/` that should end a self-closing tag.
    fn handle_self_closing_start_tag_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.emit_open_tag(true);
            }
            None => {
                self.abandon_tag_at_eof();
            }
            _ => {
                self.log_scan_warning("unexpected character after '/', expected '>'");
                self.reconsume_in(ScannerState::BeforeAttributeName);
            }
        }
    }

    /// Skipping an unrecognizable token until whitespace or the tag end.
    fn handle_bogus_attribute_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(ScannerState::BeforeAttributeName);
            }
            Some('>') => {
                self.emit_open_tag(false);
            }
            None => {
                self.abandon_tag_at_eof();
            }
            Some(_) => {}
        }
    }
}
