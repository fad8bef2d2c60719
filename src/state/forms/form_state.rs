//! Form state management and the registration form struct

use super::field::FormField;
use crate::state::FormValues;
use crate::validation::ValidationReport;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The event registration form
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub username: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub age: FormField,
    pub profession: FormField,
    pub experience: FormField,
    pub comment: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Reset, 1=Submit)
    pub selected_button: usize,
}

/// Index of the buttons row, one past the last field
const BUTTONS_ROW: usize = 7;

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            username: FormField::text("username", "Username", false),
            email: FormField::text("email", "Email", false),
            phone: FormField::text("phone", "Phone (XXX-XXX-XXXX)", false),
            age: FormField::text("age", "Age (10-25)", false),
            profession: FormField::profession("profession", "Profession"),
            experience: FormField::experience("experience", "Experience (1-3)"),
            comment: FormField::text("comment", "Comment", true),
            active_field_index: 0,
            selected_button: 1, // Default to "Submit" button
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        self.next_button();
    }

    /// Capture the current field values as a submission snapshot
    pub fn values(&self) -> FormValues {
        FormValues {
            username: self.username.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            age: self.age.as_text().to_string(),
            profession: self.profession.as_profession().as_str().to_string(),
            experience: self.experience.as_experience(),
            comment: self.comment.as_text().to_string(),
        }
    }

    /// Clear error highlighting on every field
    pub fn clear_errors(&mut self) {
        for field in self.fields_mut() {
            field.has_error = false;
        }
    }

    /// Flag exactly the fields the validation pass rejected.
    /// The comment field is never validated and never flagged.
    pub fn apply_report(&mut self, report: &ValidationReport) {
        self.username.has_error = !report.username;
        self.email.has_error = !report.email;
        self.phone.has_error = !report.phone;
        self.age.has_error = !report.age;
        self.profession.has_error = !report.profession;
        self.experience.has_error = !report.experience;
    }

    /// Reset every field to its default value after a successful submission
    pub fn reset(&mut self) {
        for field in self.fields_mut() {
            field.reset();
        }
        self.active_field_index = 0;
        self.selected_button = 1;
    }

    fn fields_mut(&mut self) -> [&mut FormField; 7] {
        [
            &mut self.username,
            &mut self.email,
            &mut self.phone,
            &mut self.age,
            &mut self.profession,
            &mut self.experience,
            &mut self.comment,
        ]
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        8 // seven fields plus the buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.username),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.age),
            4 => Some(&mut self.profession),
            5 => Some(&mut self.experience),
            6 => Some(&mut self.comment),
            // Index 7 is the buttons row, no FormField for it
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.username),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.age),
            4 => Some(&self.profession),
            5 => Some(&self.experience),
            6 => Some(&self.comment),
            _ => None,
        }
    }
}
