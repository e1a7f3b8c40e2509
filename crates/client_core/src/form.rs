//! Editable field set for a single record.

use std::{fmt, marker::PhantomData};

use shared::{
    domain::{
        color_option_by_value, is_valid_phone, sanitize_phone, stored_color_to_value,
        CommitteeCatalog, RecordId, PHONE_DIGITS,
    },
    error::FormError,
    protocol::{CommitteeDraft, CommitteeRecord, ContactDraft, DirectoryRecord},
};

/// Field values for one record kind, plus the rules for turning them into a
/// draft.
pub trait FormFields: Clone + fmt::Debug + Send + Sync {
    type Record: DirectoryRecord;
    type Field: Copy + fmt::Debug + Send;

    /// Blank defaults. Configuration such as the committee catalog survives.
    fn clear(&mut self);

    fn load(&mut self, record: &Self::Record);

    fn set(&mut self, field: Self::Field, value: &str);

    fn number(&self) -> &str;

    fn validate(&self) -> Result<<Self::Record as DirectoryRecord>::Draft, FormError>;
}

fn require(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

fn require_phone(number: &str) -> Result<(), FormError> {
    require(number, "number")?;
    if !is_valid_phone(number) {
        return Err(FormError::InvalidPhone { len: number.len() });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitteeField {
    Committee,
    Name,
    Number,
    Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitteeFields {
    pub catalog: CommitteeCatalog,
    pub committee: String,
    pub name: String,
    pub number: String,
    /// Color option value (`blue`, `purple`), not the stored hex.
    pub color: String,
}

impl CommitteeFields {
    pub fn with_catalog(catalog: CommitteeCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }
}

impl FormFields for CommitteeFields {
    type Record = CommitteeRecord;
    type Field = CommitteeField;

    fn clear(&mut self) {
        self.committee.clear();
        self.name.clear();
        self.number.clear();
        self.color.clear();
    }

    fn load(&mut self, record: &CommitteeRecord) {
        self.committee = record.committee.clone();
        self.name = record.name.clone();
        self.number = record.number.clone();
        self.color = record
            .color
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(stored_color_to_value)
            .unwrap_or_default();
    }

    fn set(&mut self, field: CommitteeField, value: &str) {
        match field {
            CommitteeField::Committee => self.committee = value.to_string(),
            CommitteeField::Name => self.name = value.to_string(),
            CommitteeField::Number => self.number = sanitize_phone(value),
            CommitteeField::Color => self.color = value.to_string(),
        }
    }

    fn number(&self) -> &str {
        &self.number
    }

    fn validate(&self) -> Result<CommitteeDraft, FormError> {
        require(&self.committee, "committee")?;
        require(&self.name, "name")?;
        require_phone(&self.number)?;
        require(&self.color, "color")?;

        if !self.catalog.contains(&self.committee) {
            return Err(FormError::UnknownCommittee(self.committee.clone()));
        }
        let color = color_option_by_value(&self.color)
            .ok_or_else(|| FormError::UnknownColor(self.color.clone()))?;

        Ok(CommitteeDraft {
            committee: self.committee.clone(),
            name: self.name.clone(),
            number: self.number.clone(),
            color: color.hex.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Number,
}

/// Name and phone form used by the preceptor and chairperson views.
pub struct ContactFields<R> {
    pub name: String,
    pub number: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> Default for ContactFields<R> {
    fn default() -> Self {
        Self {
            name: String::new(),
            number: String::new(),
            _record: PhantomData,
        }
    }
}

impl<R> Clone for ContactFields<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            number: self.number.clone(),
            _record: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ContactFields<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactFields")
            .field("name", &self.name)
            .field("number", &self.number)
            .finish()
    }
}

impl<R> FormFields for ContactFields<R>
where
    R: DirectoryRecord<Draft = ContactDraft>,
{
    type Record = R;
    type Field = ContactField;

    fn clear(&mut self) {
        self.name.clear();
        self.number.clear();
    }

    fn load(&mut self, record: &R) {
        self.name = record.name().to_string();
        self.number = record.number().to_string();
    }

    fn set(&mut self, field: ContactField, value: &str) {
        match field {
            ContactField::Name => self.name = value.to_string(),
            ContactField::Number => self.number = sanitize_phone(value),
        }
    }

    fn number(&self) -> &str {
        &self.number
    }

    fn validate(&self) -> Result<ContactDraft, FormError> {
        require(&self.name, "name")?;
        require_phone(&self.number)?;
        Ok(ContactDraft {
            name: self.name.clone(),
            number: self.number.clone(),
        })
    }
}

/// Form bound to either a new record or an existing id.
#[derive(Debug, Clone)]
pub struct RecordForm<F: FormFields> {
    fields: F,
    editing: Option<RecordId>,
}

impl<F: FormFields> RecordForm<F> {
    pub fn new(mut fields: F) -> Self {
        fields.clear();
        Self {
            fields,
            editing: None,
        }
    }

    /// `None` starts a blank form; `Some` loads the record and binds its id.
    pub fn begin(&mut self, record: Option<&F::Record>) {
        self.fields.clear();
        self.editing = None;
        if let Some(record) = record {
            self.fields.load(record);
            self.editing = Some(record.id().clone());
        }
    }

    pub fn set(&mut self, field: F::Field, value: &str) {
        self.fields.set(field, value);
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn validate(&self) -> Result<<F::Record as DirectoryRecord>::Draft, FormError> {
        self.fields.validate()
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn phone_hint(&self) -> String {
        format!("{}/{PHONE_DIGITS} digits", self.fields.number().len())
    }

    pub fn phone_has_error(&self) -> bool {
        let number = self.fields.number();
        !number.is_empty() && number.len() != PHONE_DIGITS
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
