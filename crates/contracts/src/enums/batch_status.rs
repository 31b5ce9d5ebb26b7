use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус партии продукции поставщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatchStatus {
    Active,
    Completed,
    Pending,
}

impl BatchStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            BatchStatus::Active => "Active",
            BatchStatus::Completed => "Completed",
            BatchStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
