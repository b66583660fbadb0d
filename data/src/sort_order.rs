use serde::{Deserialize, Serialize};

/// Ordering of note listings by their update time; ties go by id in the
/// same direction.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn sort(&self, notes: &mut [crate::Note]) {
        notes.sort_by(|a, b| {
            let ascending = a.updated.cmp(&b.updated).then(a.id.cmp(&b.id));
            match self {
                SortOrder::Asc => ascending,
                SortOrder::Desc => ascending.reverse(),
            }
        });
    }
}
