//! Встроенные демонстрационные данные. Других источников данных нет.

use crate::dashboards::d300_admin::{ReportDescriptor, ReportKind, SystemStats};
use crate::domain::a001_batch::Batch;
use crate::domain::a002_inspection::Inspection;
use crate::domain::a003_scanned_item::ScannedItem;
use crate::domain::a004_vendor_performance::VendorPerformance;
use crate::domain::a005_alert::{Alert, AlertKind};
use crate::domain::common::{LotNumber, VendorId, WarrantyPeriod};
use crate::enums::{AlertSeverity, BatchStatus, InspectionResult, VendorStanding};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample date is valid")
}

pub static BATCHES: Lazy<Vec<Batch>> = Lazy::new(|| {
    vec![
        Batch::new("VB001", "Track Clips", 500, ymd(2024, 1, 15), BatchStatus::Active),
        Batch::new("VB002", "Rail Pads", 200, ymd(2024, 1, 12), BatchStatus::Completed),
        Batch::new("VB003", "Sleepers", 100, ymd(2024, 1, 10), BatchStatus::Pending),
    ]
});

pub static INSPECTIONS: Lazy<Vec<Inspection>> = Lazy::new(|| {
    let inspection = |id: &str, lot: &str, product: &str, result, date, vendor: &str| Inspection {
        id: id.to_string(),
        lot_number: LotNumber::new(lot),
        product: product.to_string(),
        result,
        date,
        vendor_id: VendorId::new(vendor),
    };
    vec![
        inspection("INS001", "LOT-2024-001", "Track Clips", InspectionResult::Pass, ymd(2024, 1, 15), "VND-001"),
        inspection("INS002", "LOT-2024-002", "Rail Pads", InspectionResult::Fail, ymd(2024, 1, 14), "VND-002"),
        inspection("INS003", "LOT-2024-003", "Sleepers", InspectionResult::Pass, ymd(2024, 1, 13), "VND-001"),
    ]
});

pub static VENDORS: Lazy<Vec<VendorPerformance>> = Lazy::new(|| {
    let vendor = |id: &str, name: &str, pass_rate, total_items, standing| VendorPerformance {
        id: VendorId::new(id),
        name: name.to_string(),
        pass_rate,
        total_items,
        standing,
    };
    vec![
        vendor("VND-001", "Steel Track Solutions", 96.2, 2500, VendorStanding::Excellent),
        vendor("VND-002", "Railway Components Ltd", 89.1, 1800, VendorStanding::Good),
        vendor("VND-003", "Track Fittings Pro", 78.5, 950, VendorStanding::Warning),
    ]
});

pub static ALERTS: Lazy<Vec<Alert>> = Lazy::new(|| {
    vec![
        Alert {
            id: 1,
            kind: AlertKind::Quality,
            message: "Vendor VND-003 pass rate dropped below 80%".into(),
            severity: AlertSeverity::High,
            date: ymd(2024, 1, 15),
        },
        Alert {
            id: 2,
            kind: AlertKind::Warranty,
            message: "12 items warranty expiring in next 30 days".into(),
            severity: AlertSeverity::Medium,
            date: ymd(2024, 1, 14),
        },
        Alert {
            id: 3,
            kind: AlertKind::Inventory,
            message: "Low stock alert for Track Clips - Lot LOT-2024-001".into(),
            severity: AlertSeverity::Low,
            date: ymd(2024, 1, 13),
        },
    ]
});

pub static SYSTEM_STATS: Lazy<SystemStats> = Lazy::new(|| SystemStats {
    total_vendors: 25,
    active_inspectors: 8,
    monthly_inspections: 1234,
    pass_rate: 92.5,
    pending_alerts: 5,
    warranty_expiring: 12,
});

pub static REPORTS: Lazy<Vec<ReportDescriptor>> = Lazy::new(|| {
    let report = |kind, title: &str, subtitle: &str, summary: &str| ReportDescriptor {
        kind,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        summary: summary.to_string(),
    };
    vec![
        report(
            ReportKind::VendorPerformance,
            "Vendor Performance Report",
            "Comprehensive vendor quality analysis",
            "Detailed breakdown of vendor performance, pass rates, and quality trends over time.",
        ),
        report(
            ReportKind::WarrantyExpiry,
            "Warranty Expiry Report",
            "Items approaching warranty expiration",
            "Track items with warranties expiring in the next 30, 60, and 90 days.",
        ),
        report(
            ReportKind::QualityExceptions,
            "Quality Exceptions",
            "Failed inspections and quality issues",
            "Analysis of failed inspections, recurring issues, and corrective actions.",
        ),
        report(
            ReportKind::InventoryStatus,
            "Inventory Status",
            "Current inventory levels and stock alerts",
            "Real-time inventory tracking, low stock alerts, and reorder recommendations.",
        ),
    ]
});

/// Результат "сканирования" QR-кода: всегда один и тот же образец
pub fn simulated_scan() -> ScannedItem {
    ScannedItem {
        lot_number: LotNumber::new("LOT-2024-004"),
        vendor_id: VendorId::new("VND-001"),
        product: "Track Clips".to_string(),
        mfg_date: ymd(2024, 1, 10),
        warranty_period: WarrantyPeriod::years(5),
        specifications: "High-grade steel track clips with anti-corrosion coating".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_are_unique() {
        let batch_ids: HashSet<_> = BATCHES.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(batch_ids.len(), BATCHES.len());
        let inspection_ids: HashSet<_> = INSPECTIONS.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(inspection_ids.len(), INSPECTIONS.len());
        let alert_ids: HashSet<_> = ALERTS.iter().map(|a| a.id).collect();
        assert_eq!(alert_ids.len(), ALERTS.len());
    }

    #[test]
    fn test_every_batch_status_is_represented() {
        let statuses: HashSet<_> = BATCHES.iter().map(|b| b.status).collect();
        let expected: HashSet<_> =
            [BatchStatus::Active, BatchStatus::Completed, BatchStatus::Pending].into_iter().collect();
        assert_eq!(statuses, expected);
    }

    #[test]
    fn test_inspections_reference_known_vendors() {
        let vendors: HashSet<_> = VENDORS.iter().map(|v| v.id.clone()).collect();
        assert!(INSPECTIONS.iter().all(|i| vendors.contains(&i.vendor_id)));
    }

    #[test]
    fn test_simulated_scan_is_fixed() {
        assert_eq!(simulated_scan(), simulated_scan());
        assert_eq!(simulated_scan().warranty_period.to_string(), "5 years");
    }

    #[test]
    fn test_alert_serializes_kind_as_type() {
        let json = serde_json::to_value(&ALERTS[0]).unwrap();
        assert_eq!(json["type"], "quality");
        assert_eq!(json["severity"], "high");
        assert_eq!(json["date"], "2024-01-15");
    }

    #[test]
    fn test_four_reports() {
        assert_eq!(REPORTS.len(), 4);
        assert_eq!(SYSTEM_STATS.pending_alerts, 5);
    }
}
