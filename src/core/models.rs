use std::collections::HashMap;

/// LingQ attributes that can be stored in a note field, in the order they are
/// offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Term,
    Hints,
    Fragment,
    Notes,
    Tags,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Term,
        Attribute::Hints,
        Attribute::Fragment,
        Attribute::Notes,
        Attribute::Tags,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Term => "term",
            Attribute::Hints => "hints",
            Attribute::Fragment => "fragment",
            Attribute::Notes => "notes",
            Attribute::Tags => "tags",
        }
    }

    /// Capitalized form used in selection menus.
    pub fn display_name(&self) -> &'static str {
        match self {
            Attribute::Term => "Term",
            Attribute::Hints => "Hints",
            Attribute::Fragment => "Fragment",
            Attribute::Notes => "Notes",
            Attribute::Tags => "Tags",
        }
    }
}

/// One note field paired with the attribute it receives, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAssignment {
    pub field: String,
    pub attribute: Option<Attribute>,
}

/// The finalized field-to-attribute assignment for one import run. Covers
/// every field of the chosen model exactly once; an attribute appears in at
/// most one assignment.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    pub assignments: Vec<FieldAssignment>,
}

impl Mapping {
    /// Name of the field the term is mapped to, used for progress reporting.
    pub fn term_field(&self) -> Option<&str> {
        self.assignments
            .iter()
            .find(|assignment| assignment.attribute == Some(Attribute::Term))
            .map(|assignment| assignment.field.as_str())
    }
}

/// Field values for a single note, ready to submit.
pub type FieldSet = HashMap<String, String>;
