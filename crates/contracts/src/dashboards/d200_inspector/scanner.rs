//! Сканирование → проверка → отправка.
//!
//! Сканер не читает QR-код: "scan" всегда подставляет один и тот же
//! образец изделия. Отправка ничего не сохраняет, только возвращает
//! итог проверки вызывающей стороне для записи в журнал.

use crate::domain::a003_scanned_item::ScannedItem;
use crate::enums::InspectionResult;
use crate::shared::sample_data;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Изделие на проверке
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub item: ScannedItem,
    pub result: Option<InspectionResult>,
    pub remarks: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScannerState {
    /// Ожидание сканирования
    #[default]
    Idle,
    Reviewing(Review),
}

impl ScannerState {
    pub fn review(&self) -> Option<&Review> {
        match self {
            ScannerState::Idle => None,
            ScannerState::Reviewing(review) => Some(review),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ScannerState::Idle)
    }

    /// Кнопка "Submit Inspection" активна только после выбора результата
    pub fn can_submit(&self) -> bool {
        self.review().is_some_and(|r| r.result.is_some())
    }

    pub fn selected_result(&self) -> Option<InspectionResult> {
        self.review().and_then(|r| r.result)
    }
}

/// Итог проверки, отправляемый инспектором
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionSubmission {
    pub id: Uuid,
    pub scanned_item: ScannedItem,
    pub result: InspectionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl InspectionSubmission {
    /// JSON для журнала
    pub fn to_log_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id.to_string(),
            "lot_number": self.scanned_item.lot_number.as_str(),
            "vendor_id": self.scanned_item.vendor_id.as_str(),
            "product": self.scanned_item.product,
            "result": self.result.code(),
            "remarks": self.remarks,
        })
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Scan,
    ChooseResult(InspectionResult),
    RemarksChanged(String),
    Submit,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Scanned(ScannedItem),
    Submitted(InspectionSubmission),
    Cancelled,
}

pub fn update(state: &mut ScannerState, message: Message) -> Event {
    match message {
        Message::Scan => {
            if !state.is_idle() {
                return Event::None;
            }
            let item = sample_data::simulated_scan();
            *state = ScannerState::Reviewing(Review {
                item: item.clone(),
                result: None,
                remarks: String::new(),
            });
            Event::Scanned(item)
        }
        Message::ChooseResult(result) => {
            if let ScannerState::Reviewing(review) = state {
                review.result = Some(result);
            }
            Event::None
        }
        Message::RemarksChanged(remarks) => {
            if let ScannerState::Reviewing(review) = state {
                review.remarks = remarks;
            }
            Event::None
        }
        Message::Submit => {
            let ScannerState::Reviewing(review) = state else {
                return Event::None;
            };
            let Some(result) = review.result else {
                return Event::None;
            };
            let remarks = review.remarks.trim();
            let submission = InspectionSubmission {
                id: Uuid::new_v4(),
                scanned_item: review.item.clone(),
                result,
                remarks: (!remarks.is_empty()).then(|| remarks.to_string()),
            };
            *state = ScannerState::Idle;
            Event::Submitted(submission)
        }
        Message::Cancel => {
            if state.is_idle() {
                return Event::None;
            }
            *state = ScannerState::Idle;
            Event::Cancelled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanned() -> ScannerState {
        let mut state = ScannerState::default();
        update(&mut state, Message::Scan);
        state
    }

    #[test]
    fn test_scan_populates_fixed_item() {
        let mut state = ScannerState::default();
        let event = update(&mut state, Message::Scan);
        let review = state.review().expect("reviewing after scan");
        assert_eq!(review.item.lot_number.as_str(), "LOT-2024-004");
        assert_eq!(review.result, None);
        assert_eq!(event, Event::Scanned(review.item.clone()));
    }

    #[test]
    fn test_scan_while_reviewing_is_ignored() {
        let mut state = scanned();
        update(&mut state, Message::ChooseResult(InspectionResult::Fail));
        let before = state.clone();
        assert_eq!(update(&mut state, Message::Scan), Event::None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_submit_without_result_is_rejected() {
        let mut state = scanned();
        assert!(!state.can_submit());
        let before = state.clone();
        assert_eq!(update(&mut state, Message::Submit), Event::None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_submit_with_result_resets_to_idle() {
        let mut state = scanned();
        update(&mut state, Message::ChooseResult(InspectionResult::Pass));
        update(&mut state, Message::ChooseResult(InspectionResult::Fail));
        update(&mut state, Message::RemarksChanged("  cracked clip  ".into()));
        assert!(state.can_submit());

        match update(&mut state, Message::Submit) {
            Event::Submitted(submission) => {
                assert_eq!(submission.result, InspectionResult::Fail);
                assert_eq!(submission.remarks.as_deref(), Some("cracked clip"));
                assert_eq!(submission.scanned_item.product, "Track Clips");
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(state.is_idle());
        assert_eq!(state.selected_result(), None);
    }

    #[test]
    fn test_blank_remarks_are_omitted() {
        let mut state = scanned();
        update(&mut state, Message::ChooseResult(InspectionResult::Pass));
        update(&mut state, Message::RemarksChanged("   ".into()));
        let Event::Submitted(submission) = update(&mut state, Message::Submit) else {
            panic!("expected submission");
        };
        assert_eq!(submission.remarks, None);
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("remarks").is_none());
    }

    #[test]
    fn test_submission_log_json() {
        let mut state = scanned();
        update(&mut state, Message::ChooseResult(InspectionResult::Fail));
        let Event::Submitted(submission) = update(&mut state, Message::Submit) else {
            panic!("expected submission");
        };
        let json = submission.to_log_json();
        assert_eq!(json["lot_number"], "LOT-2024-004");
        assert_eq!(json["result"], "fail");
        assert_eq!(json["id"], submission.id.to_string());
        assert!(json["remarks"].is_null());
    }

    #[test]
    fn test_cancel_returns_to_pre_scan_state_without_submission() {
        let mut state = scanned();
        update(&mut state, Message::ChooseResult(InspectionResult::Pass));
        update(&mut state, Message::RemarksChanged("ok".into()));
        assert_eq!(update(&mut state, Message::Cancel), Event::Cancelled);
        assert_eq!(state, ScannerState::default());

        // после отмены новое сканирование начинается с чистого листа
        update(&mut state, Message::Scan);
        let review = state.review().unwrap();
        assert_eq!(review.result, None);
        assert!(review.remarks.is_empty());
    }

    #[test]
    fn test_idle_messages_are_ignored() {
        let mut state = ScannerState::default();
        assert_eq!(update(&mut state, Message::ChooseResult(InspectionResult::Pass)), Event::None);
        assert_eq!(update(&mut state, Message::Submit), Event::None);
        assert_eq!(update(&mut state, Message::Cancel), Event::None);
        assert!(state.is_idle());
    }
}
