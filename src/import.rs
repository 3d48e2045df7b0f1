use crate::{
    anki::AnkiClient,
    core::{
        FieldSet,
        ImportError,
        Mapping,
    },
    lingq::Lingq,
    transform::transform_record,
};

/// Field sets that would be submitted for `lingqs`: known records are
/// filtered out, the rest keep their original relative order.
pub fn plan_import(lingqs: &[Lingq], mapping: &Mapping) -> Vec<FieldSet> {
    lingqs
        .iter()
        .filter(|lingq| !lingq.is_known())
        .map(|lingq| transform_record(lingq, mapping))
        .collect()
}

/// Submits every eligible LingQ to Anki, one note per record, duplicates
/// allowed. The first error from AnkiConnect aborts the remaining batch;
/// already-added notes stay.
pub async fn run_import(
    anki: &AnkiClient,
    deck_name: &str,
    model_name: &str,
    mapping: &Mapping,
    lingqs: &[Lingq],
) -> Result<usize, ImportError> {
    println!("Adding notes.\nThis may take a very long time.\nPlease be patient...");

    let term_field = mapping.term_field();
    let mut added = 0;

    for lingq in lingqs {
        if lingq.is_known() {
            continue;
        }

        let fields = transform_record(lingq, mapping);
        anki.add_note(deck_name, model_name, &fields, true, &[]).await?;
        added += 1;

        match term_field.and_then(|field| fields.get(field)) {
            Some(term) => println!("Added note: {}", term),
            None => println!("Added note {}", added),
        }
    }

    println!("Done adding {} notes to {}.", added, deck_name);
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::plan_import;
    use crate::{
        core::{
            Attribute,
            FieldAssignment,
            Mapping,
        },
        lingq::{
            api::STATUS_KNOWN,
            Lingq,
        },
    };

    fn term_mapping() -> Mapping {
        Mapping {
            assignments: vec![FieldAssignment {
                field: "Front".to_string(),
                attribute: Some(Attribute::Term),
            }],
        }
    }

    fn lingq(term: &str, status: i64) -> Lingq {
        Lingq { term: term.to_string(), status, ..Lingq::default() }
    }

    #[test]
    fn known_records_are_skipped() {
        let lingqs = vec![lingq("a", 1), lingq("b", STATUS_KNOWN), lingq("c", 2)];
        let planned = plan_import(&lingqs, &term_mapping());

        assert_eq!(planned.len(), 2);
        assert_eq!(planned[0]["Front"], "a");
        assert_eq!(planned[1]["Front"], "c");
    }

    #[test]
    fn all_known_records_plan_nothing() {
        let lingqs = vec![lingq("a", STATUS_KNOWN), lingq("b", STATUS_KNOWN)];
        assert!(plan_import(&lingqs, &term_mapping()).is_empty());
    }

    #[test]
    fn statuses_below_known_are_eligible() {
        for status in 0..STATUS_KNOWN {
            let lingqs = vec![lingq("a", status)];
            assert_eq!(plan_import(&lingqs, &term_mapping()).len(), 1);
        }
    }
}
