use serde::Deserialize;

use crate::domain::entities::listing::Stage;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumOption {
    pub key: String,
    pub label: String,
}

/// Enum key→label tables, fetched once per view and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterEnums {
    #[serde(default, rename = "ExtractionDataSource")]
    pub source: Vec<EnumOption>,
    #[serde(default, rename = "ExtractionDataSourceValidationStatus")]
    pub validation_status: Vec<EnumOption>,
    #[serde(default, rename = "ExtractionDataStatus")]
    pub status: Vec<EnumOption>,
    #[serde(default, rename = "PyStacLoadDataItemType")]
    pub item_type: Vec<EnumOption>,
    #[serde(default, rename = "PyStacLoadDataStatus")]
    pub load_status: Vec<EnumOption>,
}

impl FilterEnums {
    /// Load rows carry their own status enum; the other stages share the
    /// extraction one.
    pub fn status_options(&self, stage: Stage) -> &[EnumOption] {
        match stage {
            Stage::Load => &self.load_status,
            _ => &self.status,
        }
    }
}

/// Looks up the human-readable label for an enum key. `None` when the key is
/// absent or no option matches.
pub fn enum_label<'a>(key: Option<&str>, options: &'a [EnumOption]) -> Option<&'a str> {
    let key = key?;
    options
        .iter()
        .find(|option| option.key == key)
        .map(|option| option.label.as_str())
}
