use crate::{
    core::{
        Attribute,
        FieldSet,
        Mapping,
    },
    lingq::Lingq,
};

const HINT_SEPARATOR: &str = "\n";
const TAG_SEPARATOR: &str = ", ";

/// Joins items with `separator` between adjacent pairs, never trailing.
fn join_items<'a, I>(items: I, separator: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut joined = String::new();
    for (num, item) in items.into_iter().enumerate() {
        if num > 0 {
            joined.push_str(separator);
        }
        joined.push_str(item);
    }
    joined
}

/// Serializes one attribute of a LingQ to the string stored in a note field.
/// Hints collapse to their text lines, tags to a comma-separated list, the
/// rest pass through as-is.
pub fn attribute_value(lingq: &Lingq, attribute: Attribute) -> String {
    match attribute {
        Attribute::Term => lingq.term.clone(),
        Attribute::Hints => {
            join_items(lingq.hints.iter().map(|hint| hint.text.as_str()), HINT_SEPARATOR)
        }
        Attribute::Fragment => lingq.fragment.clone(),
        Attribute::Notes => lingq.notes.clone(),
        Attribute::Tags => join_items(lingq.tags.iter().map(String::as_str), TAG_SEPARATOR),
    }
}

/// Materializes the field values for one note. Unassigned fields get the
/// empty string so every model field is always present in the submission.
pub fn transform_record(lingq: &Lingq, mapping: &Mapping) -> FieldSet {
    mapping
        .assignments
        .iter()
        .map(|assignment| {
            let value = match assignment.attribute {
                Some(attribute) => attribute_value(lingq, attribute),
                None => String::new(),
            };
            (assignment.field.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        attribute_value,
        join_items,
        transform_record,
    };
    use crate::{
        core::{
            Attribute,
            FieldAssignment,
            Mapping,
        },
        lingq::{
            Hint,
            Lingq,
        },
    };

    fn hints(texts: &[&str]) -> Vec<Hint> {
        texts.iter().map(|text| Hint { text: text.to_string() }).collect()
    }

    #[test]
    fn join_never_trails() {
        assert_eq!(join_items(vec![], "\n"), "");
        assert_eq!(join_items(vec!["a"], "\n"), "a");
        assert_eq!(join_items(vec!["a", "b"], "\n"), "a\nb");
        assert_eq!(join_items(vec!["a", "b", "c"], "\n"), "a\nb\nc");
    }

    #[test]
    fn hints_join_with_newlines() {
        let mut lingq = Lingq::default();
        lingq.hints = hints(&["a", "b", "c"]);
        assert_eq!(attribute_value(&lingq, Attribute::Hints), "a\nb\nc");

        lingq.hints = hints(&["a"]);
        assert_eq!(attribute_value(&lingq, Attribute::Hints), "a");

        lingq.hints = hints(&[]);
        assert_eq!(attribute_value(&lingq, Attribute::Hints), "");
    }

    #[test]
    fn tags_join_with_comma_space() {
        let mut lingq = Lingq::default();
        lingq.tags = vec!["x".to_string(), "y".to_string()];
        assert_eq!(attribute_value(&lingq, Attribute::Tags), "x, y");

        lingq.tags = vec!["x".to_string()];
        assert_eq!(attribute_value(&lingq, Attribute::Tags), "x");
    }

    #[test]
    fn scalar_attributes_pass_through() {
        let lingq = Lingq {
            term: "hund".to_string(),
            fragment: "en stor hund".to_string(),
            notes: "masculine".to_string(),
            ..Lingq::default()
        };
        assert_eq!(attribute_value(&lingq, Attribute::Term), "hund");
        assert_eq!(attribute_value(&lingq, Attribute::Fragment), "en stor hund");
        assert_eq!(attribute_value(&lingq, Attribute::Notes), "masculine");
    }

    #[test]
    fn unassigned_field_is_empty_string() {
        let mapping = Mapping {
            assignments: vec![
                FieldAssignment { field: "field1".to_string(), attribute: Some(Attribute::Term) },
                FieldAssignment { field: "field2".to_string(), attribute: None },
            ],
        };
        let lingq = Lingq { term: "hund".to_string(), status: 1, ..Lingq::default() };

        let fields = transform_record(&lingq, &mapping);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["field1"], "hund");
        assert_eq!(fields["field2"], "");
    }
}
