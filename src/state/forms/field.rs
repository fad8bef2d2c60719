//! Form field value objects

use crate::state::Profession;

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Profession(Profession),
    Experience(u32),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
    /// Set when the last validation pass rejected this field
    pub has_error: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
            has_error: false,
        }
    }

    /// Create a new profession selector field
    pub fn profession(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Profession(Profession::default()),
            is_multiline: false,
            has_error: false,
        }
    }

    /// Create a new experience level field (1-3)
    pub fn experience(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Experience(1),
            is_multiline: false,
            has_error: false,
        }
    }

    /// Get the text value (returns empty string for selector fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the profession value (returns the default for non-selector fields)
    pub fn as_profession(&self) -> Profession {
        match &self.value {
            FieldValue::Profession(p) => *p,
            _ => Profession::default(),
        }
    }

    /// Get the experience level (returns 1 for non-selector fields)
    pub fn as_experience(&self) -> u32 {
        match &self.value {
            FieldValue::Experience(e) => *e,
            _ => 1,
        }
    }

    /// Push a character to the field value.
    ///
    /// Digit keys set the experience level directly; professions only
    /// react to cycling.
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Profession(_) => {}
            FieldValue::Experience(e) => {
                if let Some(d) = c.to_digit(10) {
                    if (1..=3).contains(&d) {
                        *e = d;
                    }
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            // Selector fields don't support backspace
            _ => {}
        }
    }

    /// Cycle a selector field forward (no-op for text fields)
    pub fn cycle_next(&mut self) {
        match &mut self.value {
            FieldValue::Text(_) => {}
            FieldValue::Profession(p) => *p = p.next(),
            FieldValue::Experience(e) => *e = if *e >= 3 { 1 } else { *e + 1 },
        }
    }

    /// Cycle a selector field backward (no-op for text fields)
    pub fn cycle_prev(&mut self) {
        match &mut self.value {
            FieldValue::Text(_) => {}
            FieldValue::Profession(p) => *p = p.prev(),
            FieldValue::Experience(e) => *e = if *e <= 1 { 3 } else { *e - 1 },
        }
    }

    /// Reset the field to its default value and clear any error flag
    pub fn reset(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Profession(p) => *p = Profession::default(),
            FieldValue::Experience(e) => *e = 1,
        }
        self.has_error = false;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Profession(p) => p.label().to_string(),
            FieldValue::Experience(e) => match *e {
                1 => "1 (beginner)".to_string(),
                2 => "2 (intermediate)".to_string(),
                3 => "3 (advanced)".to_string(),
                n => n.to_string(),
            },
        }
    }

    /// True if this field is edited by cycling rather than typing
    pub fn is_selector(&self) -> bool {
        !matches!(self.value, FieldValue::Text(_))
    }
}
