//! Fixed sample rows loaded into a fresh store at startup.
//!
//! Clients are inserted first so that the `clientId` values below line up with
//! the ids the store assigns (1..=6).

use super::{EntityId, NewClient, NewContact, NewMachine, NewReminder};
use chrono::NaiveDate;

fn date(s: &str) -> Option<NaiveDate> {
    s.parse().ok()
}

pub fn sample_clients() -> Vec<NewClient> {
    const ROWS: &[(&str, &str, &str, &str)] = &[
        ("TechCorp Solutions", "Manufacturing", "2024-12-15", "Active"),
        ("Global Manufacturing", "Industrial", "2024-12-17", "Pending"),
        ("Precision Industries", "Automotive", "2024-12-18", "Active"),
        ("InnoTech Labs", "Technology", "2024-12-10", "Active"),
        ("Apex Engineering", "Engineering", "2024-12-12", "Active"),
        ("Dynamic Systems", "Manufacturing", "2024-12-14", "Active"),
    ];

    ROWS.iter()
        .map(|&(name, industry, last_contacted, status)| NewClient {
            name: name.to_string(),
            industry: Some(industry.to_string()),
            last_contacted: date(last_contacted),
            status: Some(status.to_string()),
        })
        .collect()
}

pub fn sample_contacts() -> Vec<NewContact> {
    const ROWS: &[(EntityId, &str, &str, &str, &str)] = &[
        (1, "John Smith", "Operations Manager", "john.smith@techcorp.com", "+1 (555) 123-4567"),
        (1, "Maria Davis", "Technical Director", "maria.davis@techcorp.com", "+1 (555) 123-4568"),
        (2, "Robert Johnson", "Plant Manager", "robert.johnson@global.com", "+1 (555) 234-5678"),
        (3, "Sarah Wilson", "Quality Assurance", "sarah.wilson@precision.com", "+1 (555) 345-6789"),
    ];

    ROWS.iter()
        .map(|&(client_id, name, position, email, phone)| NewContact {
            client_id,
            name: name.to_string(),
            position: Some(position.to_string()),
            email: Some(email.to_string()),
            phone: Some(phone.to_string()),
        })
        .collect()
}

pub fn sample_machines() -> Vec<NewMachine> {
    const ROWS: &[(EntityId, &str, &str, &str, &str, &str, &str)] = &[
        (1, "CNC Milling Machine X200", "SN-X200-001", "2024-01-15", "Under Warranty", "Active", "2024-12-10"),
        (1, "Laser Cutting System L500", "SN-L500-042", "2023-03-22", "Expiring Soon", "Active", "2024-11-28"),
        (2, "Industrial Press IP300", "SN-IP300-055", "2023-08-10", "Active", "Active", "2024-12-05"),
        (3, "Assembly Line AL1000", "SN-AL1000-100", "2022-12-01", "Expired", "Inactive", "2024-11-15"),
    ];

    ROWS.iter()
        .map(
            |&(client_id, model, serial, purchased, warranty, amc, last_contacted)| NewMachine {
                client_id,
                model: model.to_string(),
                serial_number: serial.to_string(),
                purchase_date: date(purchased),
                warranty_status: Some(warranty.to_string()),
                amc_status: Some(amc.to_string()),
                insurance_valid_until: None,
                last_contacted: date(last_contacted),
                notes: None,
            },
        )
        .collect()
}

pub fn sample_reminders() -> Vec<NewReminder> {
    const ROWS: &[(EntityId, &str, &str, bool)] = &[
        (1, "AMC Renewal", "2024-12-15", true),
        (2, "Warranty Expiry", "2024-12-17", true),
        (3, "Service Follow-up", "2024-12-18", true),
        (4, "Monthly Check-in", "2024-12-23", false),
        (5, "Insurance Renewal", "2024-12-25", false),
        (6, "Service Maintenance", "2024-12-27", false),
    ];

    ROWS.iter()
        .filter_map(|&(client_id, kind, due, is_overdue)| {
            date(due).map(|due_date| NewReminder {
                client_id,
                kind: kind.to_string(),
                due_date,
                is_overdue: Some(is_overdue),
                completed: Some(false),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_date_parses() {
        assert!(sample_clients().iter().all(|c| c.last_contacted.is_some()));
        assert!(sample_machines().iter().all(|m| m.purchase_date.is_some()));
        assert_eq!(sample_reminders().len(), 6);
    }
}
