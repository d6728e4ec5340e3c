use serde::{Deserialize, Serialize};

/// One row of the `company` table.
///
/// Fields are read verbatim from the result set by column name; no
/// validation or normalization is applied. A record lives only for the
/// duration of one fetch-and-render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompanyRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}
