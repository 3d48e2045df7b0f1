use crate::{
    core::{
        Attribute,
        FieldAssignment,
        ImportError,
        Mapping,
    },
    prompt,
};

/// Builder state for one mapping run. Each step consumes the old state and
/// returns the next one; a field leaves `remaining_fields` exactly once and an
/// attribute leaves `available_attributes` at most once, so the finished
/// mapping never hands the same attribute to two fields.
#[derive(Debug, Clone)]
pub struct MappingBuilder {
    remaining_fields: Vec<String>,
    available_attributes: Vec<Attribute>,
    assigned: Vec<FieldAssignment>,
}

impl MappingBuilder {
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            remaining_fields: fields,
            available_attributes: Attribute::ALL.to_vec(),
            assigned: Vec::new(),
        }
    }

    pub fn remaining_fields(&self) -> &[String] {
        &self.remaining_fields
    }

    pub fn available_attributes(&self) -> &[Attribute] {
        &self.available_attributes
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_fields.is_empty()
    }

    /// Pairs the field at `field_index` with the attribute at
    /// `attribute_index`, or leaves it empty when `None`. An empty attribute
    /// pool is valid; only indexing past either pool is an error.
    pub fn assign(
        mut self,
        field_index: usize,
        attribute_index: Option<usize>,
    ) -> Result<Self, ImportError> {
        if field_index >= self.remaining_fields.len() {
            return Err(ImportError::Custom(format!(
                "field selection {} out of range",
                field_index
            )));
        }

        let attribute = match attribute_index {
            Some(index) => {
                if index >= self.available_attributes.len() {
                    return Err(ImportError::Custom(format!(
                        "attribute selection {} out of range",
                        index
                    )));
                }
                Some(self.available_attributes.remove(index))
            }
            None => None,
        };

        let field = self.remaining_fields.remove(field_index);
        self.assigned.push(FieldAssignment { field, attribute });
        Ok(self)
    }

    pub fn finish(self) -> Mapping {
        Mapping { assignments: self.assigned }
    }
}

/// Walks the user through pairing each field of `model_name` with at most one
/// LingQ attribute. Every loop pass retires one field, so this always
/// terminates with a complete mapping.
pub fn build_mapping(model_name: &str, fields: Vec<String>) -> Result<Mapping, ImportError> {
    let mut builder = MappingBuilder::new(fields);

    println!(
        "Please select which fields in the model \"{}\" to correspond with which LingQ attribute\n",
        model_name
    );

    while !builder.is_complete() {
        for (num, field) in builder.remaining_fields().iter().enumerate() {
            println!("{}- {}", num + 1, field);
        }
        let field_index =
            prompt::select_from_list(builder.remaining_fields().len(), "Select the field:\t")? - 1;
        let field_name = builder.remaining_fields()[field_index].clone();

        println!("\n1- Keep this field empty");
        for (num, attribute) in builder.available_attributes().iter().enumerate() {
            println!("{}- {}", num + 2, attribute.display_name());
        }
        let choice = prompt::select_from_list(
            builder.available_attributes().len() + 1,
            &format!("Select the LingQ attribute to store in the field \"{}\":\t", field_name),
        )?;

        let attribute_index = if choice == 1 { None } else { Some(choice - 2) };
        builder = builder.assign(field_index, attribute_index)?;
    }

    Ok(builder.finish())
}
