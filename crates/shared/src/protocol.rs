use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::domain::{color_info_from_hex, ColorInfo, RecordId, ResourceKind};

/// A record exchanged with one of the directory collection endpoints.
pub trait DirectoryRecord:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Body sent on create and full-replace update.
    type Draft: Clone + std::fmt::Debug + Serialize + Send + Sync + 'static;

    const KIND: ResourceKind;

    fn id(&self) -> &RecordId;

    /// Person name shown for the entry.
    fn name(&self) -> &str;

    fn number(&self) -> &str;

    /// Key used when ordering a list; committees sort on the committee name.
    fn sort_key(&self) -> &str {
        self.name()
    }

    fn matches(&self, needle_lower: &str) -> bool {
        self.name().to_lowercase().contains(needle_lower) || self.number().contains(needle_lower)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeRecord {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(rename = "samiti")]
    pub committee: String,
    pub name: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CommitteeRecord {
    /// Display triple for the stored color, if any.
    pub fn color_info(&self) -> Option<ColorInfo> {
        self.color
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(color_info_from_hex)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeDraft {
    #[serde(rename = "samiti")]
    pub committee: String,
    pub name: String,
    pub number: String,
    pub color: String,
}

impl DirectoryRecord for CommitteeRecord {
    type Draft = CommitteeDraft;

    const KIND: ResourceKind = ResourceKind::Committee;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn number(&self) -> &str {
        &self.number
    }

    fn sort_key(&self) -> &str {
        &self.committee
    }

    fn matches(&self, needle_lower: &str) -> bool {
        self.committee.to_lowercase().contains(needle_lower)
            || self.name.to_lowercase().contains(needle_lower)
            || self.number.contains(needle_lower)
    }
}

/// Name and phone pair shared by the preceptor and chairperson collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub number: String,
}

macro_rules! contact_record {
    ($name:ident, $kind:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            #[serde(rename = "_id")]
            pub id: RecordId,
            pub name: String,
            pub number: String,
        }

        impl DirectoryRecord for $name {
            type Draft = ContactDraft;

            const KIND: ResourceKind = $kind;

            fn id(&self) -> &RecordId {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn number(&self) -> &str {
                &self.number
            }
        }
    };
}

contact_record!(PreceptorRecord, ResourceKind::Preceptor);
contact_record!(ChairpersonRecord, ResourceKind::Chairperson);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn committee_record_uses_wire_field_names() {
        let record: CommitteeRecord = serde_json::from_str(
            r##"{"_id":"665f","samiti":"પાણી સમિતિ","name":"Asha","number":"9876543210","color":"#392d74","__v":0}"##,
        )
        .expect("decode");
        assert_eq!(record.id.as_str(), "665f");
        assert_eq!(record.committee, "પાણી સમિતિ");
        assert_eq!(record.color_info().map(|c| c.label), Some("Main".to_string()));

        let draft = CommitteeDraft {
            committee: record.committee.clone(),
            name: record.name.clone(),
            number: record.number.clone(),
            color: "#9f2886".into(),
        };
        let body = serde_json::to_value(&draft).expect("encode");
        assert_eq!(body["samiti"], "પાણી સમિતિ");
        assert!(body.get("_id").is_none());
    }

    #[test]
    fn committee_without_color_has_no_color_info() {
        let record: CommitteeRecord =
            serde_json::from_str(r#"{"_id":"1","samiti":"x","name":"y","number":"0123456789"}"#)
                .expect("decode");
        assert!(record.color_info().is_none());
    }
}
