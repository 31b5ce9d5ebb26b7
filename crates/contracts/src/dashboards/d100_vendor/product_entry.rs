//! Форма ввода продукции поставщиком.
//!
//! QR-код не генерируется: отправка и сохранение черновика только
//! сообщают вызывающей стороне, что записать в журнал.

use crate::domain::a006_product_entry::ProductEntryDraft;

#[derive(Debug, Clone)]
pub enum Message {
    LotNumberChanged(String),
    ProductTypeChanged(String),
    QuantityChanged(String),
    MfgDateChanged(String),
    WarrantyYearsChanged(String),
    SpecificationsChanged(String),
    Submit,
    SaveDraft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Submitted(ProductEntryDraft),
    DraftSaved(ProductEntryDraft),
}

pub fn update(draft: &mut ProductEntryDraft, message: Message) -> Event {
    match message {
        Message::LotNumberChanged(v) => draft.lot_number = v,
        Message::ProductTypeChanged(v) => draft.product_type = v,
        Message::QuantityChanged(v) => draft.quantity = v,
        Message::MfgDateChanged(v) => draft.mfg_date = v,
        Message::WarrantyYearsChanged(v) => draft.warranty_years = v,
        Message::SpecificationsChanged(v) => draft.specifications = v,
        Message::Submit => {
            if !draft.is_submittable() {
                return Event::None;
            }
            let submitted = draft.clone();
            draft.reset();
            return Event::Submitted(submitted);
        }
        Message::SaveDraft => return Event::DraftSaved(draft.clone()),
    }
    Event::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_resets_form() {
        let mut draft = ProductEntryDraft::default();
        update(&mut draft, Message::LotNumberChanged("LOT-2024-005".into()));
        update(&mut draft, Message::ProductTypeChanged("Sleepers".into()));
        update(&mut draft, Message::QuantityChanged("100".into()));

        let event = update(&mut draft, Message::Submit);
        match event {
            Event::Submitted(sent) => {
                assert_eq!(sent.lot_number, "LOT-2024-005");
                assert_eq!(sent.parsed_quantity(), Some(100));
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(draft, ProductEntryDraft::default());
    }

    #[test]
    fn test_incomplete_submit_is_ignored() {
        let mut draft = ProductEntryDraft::default();
        update(&mut draft, Message::LotNumberChanged("LOT-2024-005".into()));
        let before = draft.clone();
        assert_eq!(update(&mut draft, Message::Submit), Event::None);
        assert_eq!(draft, before);
    }

    #[test]
    fn test_submit_with_non_numeric_warranty_is_ignored() {
        let mut draft = ProductEntryDraft::default();
        update(&mut draft, Message::LotNumberChanged("LOT-2024-006".into()));
        update(&mut draft, Message::ProductTypeChanged("Track Clips".into()));
        update(&mut draft, Message::QuantityChanged("50".into()));
        update(&mut draft, Message::WarrantyYearsChanged("five".into()));
        assert_eq!(update(&mut draft, Message::Submit), Event::None);
        assert_eq!(draft.warranty_years, "five");

        update(&mut draft, Message::WarrantyYearsChanged("5".into()));
        assert!(matches!(update(&mut draft, Message::Submit), Event::Submitted(_)));
    }

    #[test]
    fn test_save_draft_keeps_values() {
        let mut draft = ProductEntryDraft::default();
        update(&mut draft, Message::SpecificationsChanged("anti-corrosion".into()));
        let event = update(&mut draft, Message::SaveDraft);
        assert_eq!(event, Event::DraftSaved(draft.clone()));
        assert_eq!(draft.specifications, "anti-corrosion");
    }
}
