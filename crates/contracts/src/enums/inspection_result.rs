use serde::{Deserialize, Serialize};
use std::fmt;

/// Итог проверки: годен / брак
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionResult {
    Pass,
    Fail,
}

impl InspectionResult {
    pub fn code(&self) -> &'static str {
        match self {
            InspectionResult::Pass => "pass",
            InspectionResult::Fail => "fail",
        }
    }

    /// Текст кнопки выбора результата
    pub fn display_name(&self) -> &'static str {
        match self {
            InspectionResult::Pass => "Pass",
            InspectionResult::Fail => "Fail",
        }
    }

    /// Текст бейджа в истории проверок
    pub fn badge_label(&self) -> String {
        self.code().to_uppercase()
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, InspectionResult::Pass)
    }
}

impl fmt::Display for InspectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_label() {
        assert_eq!(InspectionResult::Pass.badge_label(), "PASS");
        assert_eq!(InspectionResult::Fail.badge_label(), "FAIL");
    }

    #[test]
    fn test_code_matches_serialized_value() {
        for result in [InspectionResult::Pass, InspectionResult::Fail] {
            assert_eq!(serde_json::to_value(result).unwrap(), result.code());
        }
    }
}
